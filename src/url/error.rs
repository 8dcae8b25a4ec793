use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, UrlError>;

/// Errors produced while converting, expanding, and decoding query data.
#[derive(Debug, Error)]
pub enum UrlError {
	/// Dynamic input value is outside the supported query value kinds.
	#[error("unsupported value type {kind} for query key {key}")]
	UnsupportedValueType {
		/// Full bracketed key path of the offending value.
		key: String,
		/// Logical kind of the rejected value.
		kind: &'static str,
	},
	/// Top-level query input was not a key/value object.
	#[error("query must be an object, got {kind}")]
	QueryNotObject {
		/// Logical kind of the rejected input.
		kind: &'static str,
	},
	/// JSON text could not be parsed.
	#[error("invalid json: {0}")]
	InvalidJson(#[from] serde_json::Error),
	/// Output payload could not be rendered as JSON.
	#[error("failed to render json output: {0}")]
	JsonOutput(#[source] serde_json::Error),
	/// Percent-decoded query bytes were not valid UTF-8.
	#[error("query segment is not valid utf-8 after decoding: {segment}")]
	InvalidUtf8 {
		/// Raw query segment as it appeared in the input.
		segment: String,
	},
}
