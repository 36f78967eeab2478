use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 4242;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid configuration: {0}")]
	Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub addr: SocketAddr,
	pub api_key: Option<String>,
}

impl Config {
	/// Read configuration from the environment, after loading `.env` if present.
	pub fn from_env() -> Result<Self, ConfigError> {
		dotenvy::dotenv().ok();
		Self::from_vars(|key| env::var(key).ok())
	}

	fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let port = match var("PORT") {
			Some(p) => p.parse::<u16>().map_err(|_| ConfigError::Invalid("PORT"))?,
			None => DEFAULT_PORT,
		};
		let ip = match var("BIND_ADDR") {
			Some(a) => a
				.parse::<IpAddr>()
				.map_err(|_| ConfigError::Invalid("BIND_ADDR"))?,
			None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
		};
		let api_key = var("API_KEY").filter(|k| !k.is_empty());

		Ok(Self {
			addr: SocketAddr::new(ip, port),
			api_key,
		})
	}
}
