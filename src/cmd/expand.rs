use urlcomp::url::{ExpandOptions, Result, expand_query};

use crate::cmd::util::{ListMode, emit_json, parse_query_arg, print_items};

#[derive(clap::Args)]
pub struct Args {
	/// JSON object to expand.
	pub query: String,
	#[arg(long = "list-mode", value_enum, default_value_t = ListMode::Indexed)]
	pub list_mode: ListMode,
	#[arg(long)]
	pub json: bool,
}

/// Expand a JSON object into sorted, unencoded query items.
pub fn run(args: Args) -> Result<()> {
	let Args { query, list_mode, json } = args;

	let map = parse_query_arg(&query)?;
	let items = expand_query(&map, &ExpandOptions::with_list_encoding(list_mode.into()));

	if json {
		return emit_json(&items);
	}

	print_items(&items);
	Ok(())
}
