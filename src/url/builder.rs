use std::fmt;

use percent_encoding::utf8_percent_encode;
use serde_json::Value as JsonValue;

use crate::url::{ExpandOptions, ListEncoding, PATH_ENCODE_SET, QueryItem, QueryValue, Result, encode_query, expand_query, query_map_from_json};

/// Immutable URL state produced by [`UrlComponentsBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
	scheme: Option<String>,
	host: Option<String>,
	path: String,
	query_items: Option<Vec<QueryItem>>,
}

impl UrlComponents {
	/// Scheme without the trailing `:`.
	pub fn scheme(&self) -> Option<&str> {
		self.scheme.as_deref()
	}

	/// Host name.
	pub fn host(&self) -> Option<&str> {
		self.host.as_deref()
	}

	/// Path, unencoded as set.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Accumulated items, or `None` when no query was ever added.
	pub fn query_items(&self) -> Option<&[QueryItem]> {
		self.query_items.as_deref()
	}

	/// Percent-encoded query without the leading `?`.
	pub fn percent_encoded_query(&self) -> Option<String> {
		self.query_items.as_deref().map(encode_query)
	}
}

impl fmt::Display for UrlComponents {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(scheme) = &self.scheme {
			write!(f, "{scheme}:")?;
		}
		if let Some(host) = &self.host {
			write!(f, "//{host}")?;
			if !self.path.is_empty() && !self.path.starts_with('/') {
				f.write_str("/")?;
			}
		}
		for part in utf8_percent_encode(&self.path, PATH_ENCODE_SET) {
			f.write_str(part)?;
		}
		if let Some(query) = self.percent_encoded_query() {
			write!(f, "?{query}")?;
		}
		Ok(())
	}
}

/// Fluent accumulator for URL components.
///
/// Every `add_query` call expands its own mapping in sorted key order and
/// appends the result after previously added items.
#[derive(Debug, Clone, Default)]
pub struct UrlComponentsBuilder {
	components: UrlComponents,
	options: ExpandOptions,
}

impl UrlComponentsBuilder {
	/// Empty builder with default expansion options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the scheme (e.g. `https`).
	pub fn set_scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
		self.components.scheme = Some(scheme.into());
		self
	}

	/// Set the host.
	pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
		self.components.host = Some(host.into());
		self
	}

	/// Set the path.
	pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
		self.components.path = path.into();
		self
	}

	/// Select the list key form for subsequent `add_query` calls.
	pub fn list_encoding(&mut self, list_encoding: ListEncoding) -> &mut Self {
		self.options.list_encoding = list_encoding;
		self
	}

	/// Expand `items` and append them to the accumulated query.
	pub fn add_query<'a, K, I>(&mut self, items: I) -> &mut Self
	where
		I: IntoIterator<Item = (&'a K, &'a QueryValue)>,
		K: AsRef<str> + ?Sized + 'a,
	{
		let expanded = expand_query(items, &self.options);
		self.components.query_items.get_or_insert_with(Vec::new).extend(expanded);
		self
	}

	/// Convert a JSON object and append it like [`Self::add_query`].
	///
	/// On error the builder is left unchanged.
	pub fn add_query_json(&mut self, input: &JsonValue) -> Result<&mut Self> {
		let map = query_map_from_json(input)?;
		Ok(self.add_query(&map))
	}

	/// Snapshot the current state.
	pub fn build(&self) -> UrlComponents {
		self.components.clone()
	}
}
