use urlcomp::url::{ListEncoding, QueryItem, Result, UrlComponentsBuilder};

use crate::cmd::util::{ListMode, emit_json, parse_query_arg};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub scheme: Option<String>,
	#[arg(long)]
	pub host: Option<String>,
	#[arg(long)]
	pub path: Option<String>,
	/// JSON object appended as one query batch; repeatable.
	#[arg(long = "query")]
	pub queries: Vec<String>,
	#[arg(long = "list-mode", value_enum, default_value_t = ListMode::Indexed)]
	pub list_mode: ListMode,
	#[arg(long)]
	pub json: bool,
}

/// Assemble a URL, appending each `--query` batch in argument order.
pub fn run(args: Args) -> Result<()> {
	let Args {
		scheme,
		host,
		path,
		queries,
		list_mode,
		json,
	} = args;

	let list_encoding = ListEncoding::from(list_mode);
	let mut builder = UrlComponentsBuilder::new();
	builder.list_encoding(list_encoding);
	if let Some(scheme) = scheme {
		builder.set_scheme(scheme);
	}
	if let Some(host) = host {
		builder.set_host(host);
	}
	if let Some(path) = path {
		builder.set_path(path);
	}
	for text in &queries {
		let map = parse_query_arg(text)?;
		builder.add_query(&map);
	}

	let url = builder.build();

	if json {
		let payload = BuildJson {
			scheme: url.scheme().map(str::to_owned),
			host: url.host().map(str::to_owned),
			path: url.path().to_owned(),
			query: url.percent_encoded_query(),
			url: url.to_string(),
			list_encoding: list_encoding.as_str(),
			items: url.query_items().map(<[QueryItem]>::to_vec).unwrap_or_default(),
		};
		return emit_json(&payload);
	}

	println!("{url}");
	Ok(())
}

#[derive(serde::Serialize)]
struct BuildJson {
	scheme: Option<String>,
	host: Option<String>,
	path: String,
	query: Option<String>,
	url: String,
	list_encoding: &'static str,
	items: Vec<QueryItem>,
}
