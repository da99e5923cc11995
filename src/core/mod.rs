pub mod encoder;

/// JSON text with non-finite floats rejected.
pub mod json_text;

pub mod registry;
