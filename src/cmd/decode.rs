use urlcomp::url::{Result, decode_query};

use crate::cmd::util::{emit_json, print_items};

#[derive(clap::Args)]
pub struct Args {
	/// Percent-encoded query, with or without a leading `?`.
	pub query: String,
	#[arg(long)]
	pub json: bool,
}

/// Decode a query string into its name/value pairs.
pub fn run(args: Args) -> Result<()> {
	let Args { query, json } = args;

	let items = decode_query(&query)?;

	if json {
		return emit_json(&items);
	}

	print_items(&items);
	Ok(())
}
