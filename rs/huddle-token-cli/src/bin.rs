//! Mint and inspect Huddle access tokens from the command line.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use huddle_token::{AccessToken, Key, VideoGrant};

#[derive(Parser)]
#[command(name = "huddle-token", about = "Mint and inspect Huddle access tokens")]
struct Cli {
	/// The issuer API key.
	#[arg(long, env = "HUDDLE_API_KEY")]
	key: String,

	/// The issuer API secret.
	#[arg(long, env = "HUDDLE_API_SECRET")]
	secret: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Sign a token allowing a participant to join a room.
	Sign {
		/// The participant identity the token is bound to.
		#[arg(long)]
		identity: String,

		/// The room the token grants entry to.
		#[arg(long, default_value = "default")]
		room: String,

		/// How long the token stays valid.
		#[arg(long, default_value = "6h", value_parser = humantime::parse_duration)]
		ttl: Duration,
	},

	/// Verify a token and print its claims.
	Verify { token: String },
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let key = Key::new(cli.key, cli.secret);

	match cli.command {
		Command::Sign { identity, room, ttl } => {
			let token = AccessToken::new(&key, identity)
				.with_grant(VideoGrant::room_join(room))
				.with_ttl(ttl)
				.to_jwt()
				.context("failed to sign token")?;

			println!("{}", token);
		}
		Command::Verify { token } => {
			let claims = key.verify(&token).context("failed to verify token")?;
			println!("{}", serde_json::to_string_pretty(&claims)?);
		}
	}

	Ok(())
}
