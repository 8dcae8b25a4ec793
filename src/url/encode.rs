use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::url::{QueryItem, Result, UrlError};

/// Bytes escaped in query names and values.
///
/// Unreserved marks and the query sub-delims without structural meaning are
/// kept; `&`, `=`, `+`, `#`, `%`, brackets, and space are always escaped.
pub const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~')
	.remove(b'!')
	.remove(b'$')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')')
	.remove(b'*')
	.remove(b',')
	.remove(b'/')
	.remove(b':')
	.remove(b';')
	.remove(b'?')
	.remove(b'@');

/// Bytes escaped in the path when a URL is rendered.
///
/// Segment separators, unreserved marks, and sub-delims are kept; `?`, `#`,
/// `%`, brackets, and space are escaped so the path cannot leak into the
/// query or fragment.
pub const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'/')
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~')
	.remove(b'!')
	.remove(b'$')
	.remove(b'&')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')')
	.remove(b'*')
	.remove(b'+')
	.remove(b',')
	.remove(b';')
	.remove(b'=')
	.remove(b':')
	.remove(b'@');

/// Join items into a percent-encoded `name=value&...` query string.
pub fn encode_query(items: &[QueryItem]) -> String {
	let mut out = String::new();
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			out.push('&');
		}
		out.extend(utf8_percent_encode(&item.name, QUERY_COMPONENT_ENCODE_SET));
		out.push('=');
		out.extend(utf8_percent_encode(&item.value, QUERY_COMPONENT_ENCODE_SET));
	}
	out
}

/// Split and percent-decode a query string into items.
///
/// A leading `?` is ignored, empty segments are skipped, and a segment
/// without `=` decodes to an empty value. `+` decodes to a space.
pub fn decode_query(query: &str) -> Result<Vec<QueryItem>> {
	let query = query.strip_prefix('?').unwrap_or(query);

	let mut out = Vec::new();
	for segment in query.split('&') {
		if segment.is_empty() {
			continue;
		}
		let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
		out.push(QueryItem {
			name: decode_component(name, segment)?,
			value: decode_component(value, segment)?,
		});
	}
	Ok(out)
}

fn decode_component(raw: &str, segment: &str) -> Result<String> {
	let spaced = raw.replace('+', " ");
	percent_decode_str(&spaced)
		.decode_utf8()
		.map(|text| text.into_owned())
		.map_err(|_| UrlError::InvalidUtf8 { segment: segment.to_owned() })
}
