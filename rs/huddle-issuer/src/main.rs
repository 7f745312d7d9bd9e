//! Token-issuance service for Huddle conferences.
//!
//! Terminates TLS, applies the CORS policy, and mints room-scoped access
//! tokens via [`huddle_token`]. Everything else about a conference (media
//! transport, room state, UI) lives in the external media server and the
//! browser client SDK; their only obligation toward us is accepting the
//! bearer strings we sign.

mod config;
mod issuer;
mod log;
mod web;

pub use config::*;
pub use issuer::*;
pub use log::*;
pub use web::*;

use clap::Parser;
use huddle_token::Key;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// axum-server needs a process-wide crypto provider before any TLS config
	// is loaded.
	rustls::crypto::aws_lc_rs::default_provider()
		.install_default()
		.expect("failed to install default crypto provider");

	let config = Config::parse();
	config.log.init();

	let issuer = Issuer::new(Key::new(&config.api_key, &config.api_secret));
	let web = Web::new(WebState { issuer }, &config);

	web.run().await
}
