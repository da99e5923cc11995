#[cfg(feature = "csv")]
/// This module provides the CSV encoder and its row adapter.
pub mod csv;

#[cfg(feature = "json")]
/// This module provides the JSON encoder.
pub mod json;
