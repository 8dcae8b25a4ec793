use std::collections::HashMap;

use urlcomp::url::{ListEncoding, QueryItem, QueryValue, Result, UrlError, query_map_from_json};

/// CLI spelling of the list key form.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ListMode {
	Indexed,
	Unindexed,
}

impl From<ListMode> for ListEncoding {
	fn from(mode: ListMode) -> Self {
		match mode {
			ListMode::Indexed => ListEncoding::Indexed,
			ListMode::Unindexed => ListEncoding::Unindexed,
		}
	}
}

/// Parse a JSON object argument into a query mapping.
pub(crate) fn parse_query_arg(text: &str) -> Result<HashMap<String, QueryValue>> {
	let json: serde_json::Value = serde_json::from_str(text)?;
	query_map_from_json(&json)
}

/// Print items as raw `name=value` lines.
pub(crate) fn print_items(items: &[QueryItem]) {
	for item in items {
		println!("{}={}", item.name, item.value);
	}
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(UrlError::JsonOutput)?;
	println!("{text}");
	Ok(())
}
