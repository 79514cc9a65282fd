//! MLB Stats API client layer: typed schedule models and cached HTTP access.

pub mod http;
pub mod types;
