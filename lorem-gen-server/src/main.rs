use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use lorem_gen_core::model::corpus::WordCorpus;
use lorem_gen_core::model::generator::LoremGenerator;
use lorem_gen_core::model::request::GeneratorSettings;

mod config;

use config::ServerConfig;

struct SharedData {
	generator: LoremGenerator,
}

/// Query extractor configuration: malformed parameters (unknown mode,
/// non-numeric counts) answer `400` with the deserialization message.
fn query_config() -> web::QueryConfig {
	web::QueryConfig::default().error_handler(|err, _| {
		let message = err.to_string();
		InternalError::from_response(err, HttpResponse::BadRequest().body(message)).into()
	})
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates Lorem Ipsum text based on query parameters.
/// Parameters are `GeneratorSettings` fields; missing ones take the defaults.
/// Returns the generated text as a plain-text body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GeneratorSettings>) -> impl Responder {
	let settings = query.into_inner();
	if let Err(e) = settings.validate() {
		return HttpResponse::BadRequest().body(e.to_string());
	}

	let text = data.generator.generate(&settings.to_request());
	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text)
}

/// HTTP GET endpoint `/v1/settings`: the default settings as JSON.
#[get("/v1/settings")]
async fn get_settings() -> impl Responder {
	HttpResponse::Ok().json(GeneratorSettings::default())
}

#[get("/v1/corpus")]
async fn get_corpus(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok()
		.content_type("text/plain; charset=utf-8")
		.body(data.generator.corpus().words().join("\n"))
}

/// Builds the generator from the configured corpus, or the embedded one.
fn load_generator(config: &ServerConfig) -> Result<LoremGenerator, Box<dyn std::error::Error>> {
	let corpus = match &config.corpus_path {
		Some(path) => Arc::new(WordCorpus::load(path)?),
		None => WordCorpus::embedded()?,
	};
	Ok(LoremGenerator::new(corpus))
}

/// Main entry point for the server.
///
/// Loads the configuration and the word corpus, then starts an Actix-web
/// HTTP server. The generator is read-only, so workers share it without
/// locking.
///
/// # Notes
/// - A missing or empty corpus aborts startup.
/// - Log filtering follows `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()?;
	let shared_data = web::Data::new(SharedData {
		generator: load_generator(&config)?,
	});

	log::info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET"]);

		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors)
			.app_data(query_config())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_settings)
			.service(get_corpus)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use actix_web::http::StatusCode;
	use actix_web::test::{call_service, init_service, read_body, TestRequest};

	use super::*;

	fn shared_data() -> web::Data<SharedData> {
		web::Data::new(SharedData {
			generator: LoremGenerator::with_embedded_corpus().unwrap(),
		})
	}

	async fn fetch(uri: &str) -> (StatusCode, String) {
		let app = init_service(
			App::new()
				.app_data(query_config())
				.app_data(shared_data())
				.service(get_generated)
				.service(get_settings)
				.service(get_corpus),
		)
		.await;
		let response = call_service(&app, TestRequest::get().uri(uri).to_request()).await;
		let status = response.status();
		let body = read_body(response).await;
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[actix_web::test]
	async fn generate_uses_default_settings() {
		let (status, body) = fetch("/v1/generate").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.split("\n\n").count(), 9);
		assert!(body.starts_with("Lorem ipsum dolor sit amet, consectetur adipiscing elit."));
	}

	#[actix_web::test]
	async fn generate_words_without_fixed_phrase() {
		let (status, body) = fetch("/v1/generate?text_mode=Words&number_of_values=12&start_with_lorem_ipsum=false").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.split(' ').count(), 12);
	}

	#[actix_web::test]
	async fn generate_bullets() {
		let (status, body) =
			fetch("/v1/generate?text_mode=bullets&number_of_values=4&min_words_in_bullet=5&max_words_in_bullet=5").await;
		assert_eq!(status, StatusCode::OK);
		let bullets: Vec<&str> = body.split("\n\n").collect();
		assert_eq!(bullets.len(), 4);
		assert!(bullets.iter().all(|b| b.starts_with("- ")));
	}

	#[actix_web::test]
	async fn invalid_settings_are_rejected() {
		let (status, body) = fetch("/v1/generate?min_words_in_paragraph=50&max_words_in_paragraph=10").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("min_words_in_paragraph (50)"));

		let (status, _) = fetch("/v1/generate?number_of_values=1000").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);

		let (status, _) = fetch("/v1/generate?number_of_values=many").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn partial_query_takes_defaults_for_the_rest() {
		let (status, body) = fetch("/v1/generate?number_of_values=2&min_words_in_paragraph=8&max_words_in_paragraph=8").await;
		assert_eq!(status, StatusCode::OK);
		let paragraphs: Vec<&str> = body.split("\n\n").collect();
		assert_eq!(paragraphs.len(), 2);
		assert_eq!(paragraphs[0], "Lorem ipsum dolor sit amet, consectetur adipiscing elit.");
	}

	#[actix_web::test]
	async fn unknown_mode_is_rejected() {
		let (status, body) = fetch("/v1/generate?text_mode=haiku").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("Unknown text mode"));
	}

	#[actix_web::test]
	async fn settings_endpoint_returns_defaults() {
		let (status, body) = fetch("/v1/settings").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("\"text_mode\":\"paragraphs\""));
		assert!(body.contains("\"number_of_values\":9"));
	}

	#[actix_web::test]
	async fn corpus_endpoint_lists_words() {
		let (status, body) = fetch("/v1/corpus").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.lines().any(|word| word == "ipsum"));
	}

	#[test]
	fn missing_corpus_file_fails_loading() {
		let config = ServerConfig {
			host: config::DEFAULT_HOST.to_owned(),
			port: config::DEFAULT_PORT,
			corpus_path: Some("./missing-words.txt".into()),
		};
		assert!(load_generator(&config).is_err());
	}
}
