/// CSV output for sequences of records.
///
/// Encoding happens in two steps:
///
/// 1. **Row adaptation** ([`rows::to_rows`]): the value must be a sequence of
///    records sharing one ordered field list. Each record becomes a row of
///    strings, in field declaration order. Anything else is rejected with
///    [`FormatError::Type`](crate::error::FormatError::Type).
///
/// 2. **Formatting** ([`CsvEncoder`]): rows are written with RFC 4180 quoting
///    by the `csv` crate. No header row is written unless the encoder is built
///    with `has_headers(true)`.
///
/// # Examples
///
/// ```
/// use record_format::core::encoder::Encoder;
/// use record_format::format::csv::CsvEncoderBuilder;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     name: String,
///     age: u8,
/// }
///
/// let people = vec![
///     Person {
///         name: "Alice".to_string(),
///         age: 28,
///     },
///     Person {
///         name: "Doe, Bob".to_string(),
///         age: 35,
///     },
/// ];
///
/// let encoder = CsvEncoderBuilder::new().build();
/// let mut buffer = Vec::new();
/// encoder.transform(&people, &mut buffer).unwrap();
///
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     "Alice,28\n\"Doe, Bob\",35\n"
/// );
/// ```
pub mod csv_encoder;

/// Flattening of records into rows of strings.
pub mod rows;

pub use csv_encoder::{CsvEncoder, CsvEncoderBuilder};
