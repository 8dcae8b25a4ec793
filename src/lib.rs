//! Public library API for building URLs with deterministic query strings.

/// URL components, query value expansion, and query percent-encoding.
pub mod url;
