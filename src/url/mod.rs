mod builder;
mod encode;
mod error;
mod expand;
mod item;
mod value;

/// URL state and its fluent builder.
pub use builder::{UrlComponents, UrlComponentsBuilder};
/// Query string percent-encoding and decoding.
pub use encode::{PATH_ENCODE_SET, QUERY_COMPONENT_ENCODE_SET, decode_query, encode_query};
/// Error and result aliases.
pub use error::{Result, UrlError};
/// Recursive query expansion entry points and options.
pub use expand::{ExpandOptions, ListEncoding, expand_query, expand_value};
/// Flat query item type.
pub use item::QueryItem;
/// Query value model and JSON conversion.
pub use value::{QueryValue, query_map_from_json};
