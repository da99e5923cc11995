/// JSON output for records.
///
/// The encoder serializes any `serde::Serialize` value with `serde_json` and
/// writes the whole document to the sink in one write. Object fields keep the
/// order in which the record type declares them.
///
/// # Examples
///
/// ```
/// use record_format::core::encoder::Encoder;
/// use record_format::format::json::JsonEncoderBuilder;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct City {
///     city: String,
///     pop: u32,
/// }
///
/// let encoder = JsonEncoderBuilder::new().build();
/// let mut buffer = Vec::new();
///
/// encoder
///     .transform(
///         &City {
///             city: "Boston".to_string(),
///             pop: 4628910,
///         },
///         &mut buffer,
///     )
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     r#"{"city":"Boston","pop":4628910}"#
/// );
/// ```
pub mod json_encoder;

pub use json_encoder::{JsonEncoder, JsonEncoderBuilder};
