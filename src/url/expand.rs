use crate::url::{QueryItem, QueryValue};

/// Key form used for list elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListEncoding {
	/// Each element gets its zero-based position: `key[0]`, `key[1]`.
	#[default]
	Indexed,
	/// Every element shares the bare suffix: `key[]`.
	Unindexed,
}

impl ListEncoding {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Indexed => "indexed",
			Self::Unindexed => "unindexed",
		}
	}
}

/// Behavior switches for query expansion.
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
	/// Key form for list elements.
	pub list_encoding: ListEncoding,
}

impl ExpandOptions {
	/// Options with the given list encoding.
	pub fn with_list_encoding(list_encoding: ListEncoding) -> Self {
		Self { list_encoding }
	}
}

/// Expand a string-keyed mapping into flat query items.
///
/// Top-level keys are emitted in ascending byte order regardless of the
/// mapping's own iteration order. Accepts `&HashMap`, `&BTreeMap`, or any
/// borrowed pair iterator.
pub fn expand_query<'a, K, I>(items: I, opt: &ExpandOptions) -> Vec<QueryItem>
where
	I: IntoIterator<Item = (&'a K, &'a QueryValue)>,
	K: AsRef<str> + ?Sized + 'a,
{
	let mut entries: Vec<(&str, &QueryValue)> = items.into_iter().map(|(key, value)| (key.as_ref(), value)).collect();
	entries.sort_by(|left, right| left.0.cmp(right.0));

	let mut out = Vec::new();
	for (key, value) in entries {
		expand_into(key, value, opt, &mut out);
	}
	out
}

/// Expand one keyed value into flat query items.
pub fn expand_value(key: &str, value: &QueryValue, opt: &ExpandOptions) -> Vec<QueryItem> {
	let mut out = Vec::new();
	expand_into(key, value, opt, &mut out);
	out
}

fn expand_into(key: &str, value: &QueryValue, opt: &ExpandOptions, out: &mut Vec<QueryItem>) {
	match value {
		QueryValue::Text(text) => out.push(QueryItem::new(key, text.as_str())),
		QueryValue::Bool(flag) => out.push(QueryItem::new(key, if *flag { "1" } else { "0" })),
		QueryValue::Int(int) => out.push(QueryItem::new(key, int.to_string())),
		QueryValue::UInt(uint) => out.push(QueryItem::new(key, uint.to_string())),
		QueryValue::Float(float) => out.push(QueryItem::new(key, format_float(*float))),
		QueryValue::List(items) => {
			for (idx, item) in items.iter().enumerate() {
				let child = match opt.list_encoding {
					ListEncoding::Indexed => format!("{key}[{idx}]"),
					ListEncoding::Unindexed => format!("{key}[]"),
				};
				expand_into(&child, item, opt, out);
			}
		}
		QueryValue::Map(map) => {
			let mut entries: Vec<_> = map.iter().collect();
			entries.sort_by(|left, right| left.0.cmp(right.0));
			for (nested, item) in entries {
				expand_into(&format!("{key}[{nested}]"), item, opt, out);
			}
		}
	}
}

/// Shortest round-trip form; exponent notation below `1e-4` and from `1e16`.
fn format_float(float: f64) -> String {
	let magnitude = float.abs();
	if float.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
		format!("{float:e}")
	} else {
		float.to_string()
	}
}

#[cfg(test)]
mod tests;
