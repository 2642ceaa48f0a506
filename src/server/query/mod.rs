//! Query-shaping layer between raw query strings and repositories.
//!
//! Controllers extract the query string as a plain map and hand it to these resolvers
//! together with the per-entity whitelist (ordering) or the configured offset (filters).
//! The resolvers never fail: anything they cannot understand is dropped, so a request with
//! a malformed filter or an unknown sort key still returns results.

pub mod filter;
pub mod ordering;
pub mod pagination;

use std::collections::BTreeMap;

/// Raw `key -> value` query parameters of a request.
pub type QueryMap = BTreeMap<String, String>;
