/// One flat name/value pair destined for a URL query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct QueryItem {
	/// Bracketed key path, unencoded.
	pub name: String,
	/// Rendered leaf value, unencoded.
	pub value: String,
}

impl QueryItem {
	/// Build an item from any string-like name and value.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}
