use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::Log;

/// Service configuration, parsed once at startup and passed down.
#[derive(Parser, Clone, Debug)]
#[command(name = "huddle-issuer", about = "Issues room access tokens over HTTPS")]
pub struct Config {
	#[command(flatten)]
	pub log: Log,

	/// The issuer API key, shared with the media server.
	#[arg(long, env = "HUDDLE_API_KEY")]
	pub api_key: String,

	/// The issuer API secret, shared with the media server.
	#[arg(long, env = "HUDDLE_API_SECRET")]
	pub api_secret: String,

	/// The address to listen on.
	#[arg(long, env = "HUDDLE_BIND", default_value = "[::]:3001")]
	pub bind: SocketAddr,

	#[command(flatten)]
	pub tls: TlsConfig,

	/// Optionally serve static files from the given directory.
	///
	/// Used during local development to serve the demo frontend next to the
	/// token endpoint.
	#[arg(long, env = "HUDDLE_PUBLIC")]
	pub public: Option<PathBuf>,
}

/// TLS certificate paths; the server refuses to start if they don't load.
#[derive(Args, Clone, Debug)]
pub struct TlsConfig {
	/// Path to the PEM certificate chain.
	#[arg(long = "tls-cert", env = "HUDDLE_TLS_CERT")]
	pub cert: PathBuf,

	/// Path to the PEM private key.
	#[arg(long = "tls-key", env = "HUDDLE_TLS_KEY")]
	pub key: PathBuf,
}
