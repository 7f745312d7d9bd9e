use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Logging configuration, flattened into the binary's CLI.
#[derive(Parser, Clone, Debug)]
pub struct Log {
	/// The log filter, e.g. "debug" or "huddle_issuer=debug".
	#[arg(long = "log-level", env = "RUST_LOG", default_value = "info")]
	pub level: String,
}

impl Log {
	pub fn init(&self) {
		let filter = EnvFilter::new(&self.level);
		tracing_subscriber::fmt().with_env_filter(filter).init();
	}
}
