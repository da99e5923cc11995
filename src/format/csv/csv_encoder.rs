use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;
use serde::Serialize;

use crate::{core::encoder::Encoder, error::FormatError};

use super::rows::to_rows;

/// Encodes a sequence of records as CSV, one line per record.
#[derive(Debug, Clone)]
pub struct CsvEncoder {
    delimiter: u8,
    has_headers: bool,
    terminator: Terminator,
    quote_style: QuoteStyle,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        CsvEncoderBuilder::new().build()
    }
}

impl Encoder for CsvEncoder {
    fn name(&self) -> &'static str {
        "csv"
    }

    /// The document is built in memory and handed to the sink in a single
    /// write, so nothing is written when the value is rejected.
    fn transform<T>(&self, data: &T, sink: &mut dyn Write) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
    {
        let rows = to_rows(data)?;

        let mut wtr = WriterBuilder::new()
            .flexible(false)
            .has_headers(false)
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .quote_style(self.quote_style)
            .from_writer(Vec::new());

        if self.has_headers && !rows.is_empty() {
            wtr.write_record(&rows.columns)?;
        }
        for row in &rows.rows {
            wtr.write_record(row)?;
        }

        let csv = wtr
            .into_inner()
            .map_err(|error| FormatError::Io(error.into_error()))?;
        sink.write_all(&csv)?;

        debug!("Encoded {} rows ({} bytes) of CSV", rows.len(), csv.len());
        Ok(())
    }
}

pub struct CsvEncoderBuilder {
    delimiter: u8,
    has_headers: bool,
    terminator: Terminator,
    quote_style: QuoteStyle,
}

impl Default for CsvEncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvEncoderBuilder {
    pub fn new() -> CsvEncoderBuilder {
        CsvEncoderBuilder {
            delimiter: b',',
            has_headers: false,
            terminator: Terminator::Any(b'\n'),
            quote_style: QuoteStyle::Necessary,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvEncoderBuilder {
        self.delimiter = delimiter;
        self
    }

    /// Writes the field names as a first row. Empty input still yields no
    /// output at all.
    pub fn has_headers(mut self, yes: bool) -> CsvEncoderBuilder {
        self.has_headers = yes;
        self
    }

    pub fn terminator(mut self, terminator: Terminator) -> CsvEncoderBuilder {
        self.terminator = terminator;
        self
    }

    pub fn quote_style(mut self, quote_style: QuoteStyle) -> CsvEncoderBuilder {
        self.quote_style = quote_style;
        self
    }

    pub fn build(self) -> CsvEncoder {
        CsvEncoder {
            delimiter: self.delimiter,
            has_headers: self.has_headers,
            terminator: self.terminator,
            quote_style: self.quote_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use csv::Terminator;
    use serde::Serialize;

    use super::{CsvEncoder, CsvEncoderBuilder};
    use crate::{core::encoder::Encoder, error::FormatError};

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Human<'a> {
        name: &'a str,
        age: u32,
        location: &'a str,
    }

    #[test]
    fn record_should_be_written_as_row() -> Result<(), Box<dyn Error>> {
        let encoder = CsvEncoder::default();
        let mut buffer = Vec::new();

        encoder.transform(
            &[Human {
                name: "John",
                age: 21,
                location: "NYC",
            }],
            &mut buffer,
        )?;

        assert_eq!(String::from_utf8(buffer)?, "John,21,NYC\n");
        Ok(())
    }

    #[test]
    fn fields_with_special_characters_should_be_quoted() -> Result<(), Box<dyn Error>> {
        let encoder = CsvEncoder::default();
        let mut buffer = Vec::new();

        encoder.transform(
            &vec![
                Human {
                    name: "Doe, John",
                    age: 5,
                    location: "LA",
                },
                Human {
                    name: "Big \"J\"",
                    age: 40,
                    location: "New\nYork",
                },
            ],
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            "\"Doe, John\",5,LA\n\"Big \"\"J\"\"\",40,\"New\nYork\"\n"
        );
        Ok(())
    }

    #[test]
    fn headers_and_options_should_apply() -> Result<(), Box<dyn Error>> {
        let encoder = CsvEncoderBuilder::new()
            .has_headers(true)
            .delimiter(b';')
            .terminator(Terminator::CRLF)
            .build();
        let mut buffer = Vec::new();

        encoder.transform(
            &[Human {
                name: "Doe, John",
                age: 5,
                location: "LA",
            }],
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            "Name;Age;Location\r\nDoe, John;5;LA\r\n"
        );
        Ok(())
    }

    #[test]
    fn empty_sequence_should_write_nothing() -> Result<(), Box<dyn Error>> {
        let encoder = CsvEncoderBuilder::new().has_headers(true).build();
        let mut buffer = Vec::new();

        encoder.transform(&Vec::<Human>::new(), &mut buffer)?;

        assert!(buffer.is_empty());
        Ok(())
    }

    #[derive(Serialize)]
    struct Reading {
        label: &'static str,
        value: f32,
        id: u128,
    }

    #[test]
    fn numbers_should_be_written_with_their_own_precision() -> Result<(), Box<dyn Error>> {
        let encoder = CsvEncoder::default();
        let mut buffer = Vec::new();

        encoder.transform(
            &[
                Reading {
                    label: "a",
                    value: 0.1,
                    id: u128::MAX,
                },
                Reading {
                    label: "b",
                    value: f32::NAN,
                    id: 0,
                },
            ],
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            format!("a,0.1,{}\nb,NaN,0\n", u128::MAX)
        );
        Ok(())
    }

    #[test]
    fn single_record_should_be_a_type_error() {
        let encoder = CsvEncoder::default();
        let mut buffer = Vec::new();

        let result = encoder.transform(
            &Human {
                name: "John",
                age: 21,
                location: "NYC",
            },
            &mut buffer,
        );

        assert!(matches!(result, Err(FormatError::Type(_))));
        assert!(buffer.is_empty());
    }
}
