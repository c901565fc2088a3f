use lorem_gen_core::model::generator::LoremGenerator;
use lorem_gen_core::model::request::{GenerationRequest, GeneratorSettings, TextMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the word list embedded in the library.
    // A custom list can be loaded with `WordCorpus::load("words.txt")`
    // and passed to `LoremGenerator::new`
    let generator = LoremGenerator::with_embedded_corpus()?;
    println!("Corpus size: {} words", generator.corpus().len());

    // Settings start from the defaults:
    // 9 paragraphs of 20 to 100 words, starting with "Lorem ipsum dolor sit amet..."
    let mut settings = GeneratorSettings::default();

    // Bullets take their bounds from the bullet fields only
    settings.text_mode = TextMode::Bullets;
    settings.number_of_values = 3;
    settings.min_words_in_bullet = 8;
    settings.max_words_in_bullet = 16;

    // Settings coming from users must be validated before use
    settings.validate()?;

    println!("\n== {} ==", settings.text_mode);
    println!("{}", generator.generate(&settings.to_request()));

    // An inverted range is rejected by validation
    settings.min_words_in_bullet = 20;
    match settings.validate() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\nRejected: {e}"),
    }

    // Requests can also be built directly
    println!("\n== Words ==");
    println!("{}", generator.generate(&GenerationRequest::words(12, true)));

    println!("\n== Paragraphs ==");
    println!("{}", generator.generate(&GenerationRequest::paragraphs(2, 30, 60, false)));

    Ok(())
}
