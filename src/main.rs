#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "urlcomp", about = "Build URLs with deterministic nested query strings")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Expand a JSON object into flat query items.
	Expand(cmd::expand::Args),
	/// Assemble a URL from components and JSON queries.
	Build(cmd::build::Args),
	/// Decode a percent-encoded query string.
	Decode(cmd::decode::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> urlcomp::url::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Expand(args) => cmd::expand::run(args),
		Commands::Build(args) => cmd::build::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
	}
}
