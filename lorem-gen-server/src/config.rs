use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration loaded from environment variables.
///
/// - `LOREM_GEN_HOST`: bind address (default `127.0.0.1`)
/// - `LOREM_GEN_PORT`: bind port (default `5000`)
/// - `LOREM_GEN_CORPUS`: word list file, one word per line (embedded list if unset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub corpus_path: Option<PathBuf>,
}

impl ServerConfig {
	/// Reads the configuration from the process environment.
	///
	/// A `.env` file in the working directory is loaded first if present.
	pub fn from_env() -> Result<Self, String> {
		dotenvy::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary variable lookup.
	///
	/// # Errors
	/// Returns an error if `LOREM_GEN_PORT` is not a valid port number.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

		let port = match non_empty("LOREM_GEN_PORT") {
			None => DEFAULT_PORT,
			Some(value) => value
				.parse::<u16>()
				.map_err(|_| format!("LOREM_GEN_PORT must be a valid port number, got '{value}'"))?,
		};

		Ok(Self {
			host: non_empty("LOREM_GEN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
			port,
			corpus_path: non_empty("LOREM_GEN_CORPUS").map(PathBuf::from),
		})
	}
}
