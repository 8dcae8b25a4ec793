use std::collections::{BTreeMap, HashMap};

use serde_json::Value as JsonValue;

use crate::url::{Result, UrlError};

/// Caller-supplied value eligible for query expansion.
///
/// The set of variants is closed: every leaf expands to exactly one query
/// item, and containers expand recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
	/// Text emitted verbatim.
	Text(String),
	/// Boolean emitted as `1` or `0`.
	Bool(bool),
	/// Signed integer emitted in decimal.
	Int(i64),
	/// Unsigned integer emitted in decimal.
	UInt(u64),
	/// Floating-point number emitted in shortest round-trip form.
	Float(f64),
	/// Ordered list; element order is preserved.
	///
	/// An empty list emits no items, so its key is absent from the query.
	List(Vec<QueryValue>),
	/// String-keyed mapping; keys are sorted during expansion.
	///
	/// An empty mapping emits no items, so its key is absent from the query.
	Map(HashMap<String, QueryValue>),
}

impl QueryValue {
	/// Short lowercase label for the value kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Bool(_) => "bool",
			Self::Int(_) | Self::UInt(_) => "integer",
			Self::Float(_) => "float",
			Self::List(_) => "list",
			Self::Map(_) => "map",
		}
	}

	/// Build a mapping value from key/value pairs.
	pub fn map<K, V, I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<QueryValue>,
	{
		Self::Map(entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for QueryValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for QueryValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for QueryValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for QueryValue {
	fn from(value: u32) -> Self {
		Self::UInt(u64::from(value))
	}
}

impl From<u64> for QueryValue {
	fn from(value: u64) -> Self {
		Self::UInt(value)
	}
}

impl From<f32> for QueryValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for QueryValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}

impl<V: Into<QueryValue>> From<HashMap<String, V>> for QueryValue {
	fn from(value: HashMap<String, V>) -> Self {
		Self::map(value)
	}
}

impl<V: Into<QueryValue>> From<BTreeMap<String, V>> for QueryValue {
	fn from(value: BTreeMap<String, V>) -> Self {
		Self::map(value)
	}
}

/// Convert a JSON object into a top-level query mapping.
///
/// `null` anywhere in the tree is rejected with the bracketed key path of
/// the offending value. Nested list elements are reported with their index.
pub fn query_map_from_json(input: &JsonValue) -> Result<HashMap<String, QueryValue>> {
	let JsonValue::Object(object) = input else {
		return Err(UrlError::QueryNotObject { kind: json_kind(input) });
	};

	let mut out = HashMap::with_capacity(object.len());
	for (key, value) in object {
		out.insert(key.clone(), value_from_json(key, value)?);
	}
	Ok(out)
}

fn value_from_json(key: &str, value: &JsonValue) -> Result<QueryValue> {
	let converted = match value {
		JsonValue::Null => {
			return Err(UrlError::UnsupportedValueType {
				key: key.to_owned(),
				kind: json_kind(value),
			});
		}
		JsonValue::Bool(flag) => QueryValue::Bool(*flag),
		JsonValue::Number(number) => {
			if let Some(int) = number.as_i64() {
				QueryValue::Int(int)
			} else if let Some(uint) = number.as_u64() {
				QueryValue::UInt(uint)
			} else if let Some(float) = number.as_f64() {
				QueryValue::Float(float)
			} else {
				return Err(UrlError::UnsupportedValueType {
					key: key.to_owned(),
					kind: json_kind(value),
				});
			}
		}
		JsonValue::String(text) => QueryValue::Text(text.clone()),
		JsonValue::Array(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				out.push(value_from_json(&format!("{key}[{idx}]"), item)?);
			}
			QueryValue::List(out)
		}
		JsonValue::Object(object) => {
			let mut out = HashMap::with_capacity(object.len());
			for (nested, item) in object {
				out.insert(nested.clone(), value_from_json(&format!("{key}[{nested}]"), item)?);
			}
			QueryValue::Map(out)
		}
	};

	Ok(converted)
}

fn json_kind(value: &JsonValue) -> &'static str {
	match value {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "bool",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}
