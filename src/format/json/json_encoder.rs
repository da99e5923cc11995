use std::io::Write;

use log::debug;
use serde::Serialize;

use crate::{
    core::{encoder::Encoder, json_text::to_json_vec},
    error::FormatError,
};

/// Encodes values as JSON text.
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    use_pretty_formatter: bool,
}

impl JsonEncoder {
    pub fn new(use_pretty_formatter: bool) -> Self {
        Self {
            use_pretty_formatter,
        }
    }
}

impl Encoder for JsonEncoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn transform<T>(&self, data: &T, sink: &mut dyn Write) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
    {
        let json = to_json_vec(data, self.use_pretty_formatter)?;

        sink.write_all(&json)?;

        debug!("Encoded {} bytes of JSON", json.len());
        Ok(())
    }
}

#[derive(Default)]
pub struct JsonEncoderBuilder {
    pretty_formatter: bool,
}

impl JsonEncoderBuilder {
    pub fn new() -> JsonEncoderBuilder {
        JsonEncoderBuilder {
            pretty_formatter: false,
        }
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonEncoderBuilder {
        self.pretty_formatter = yes;
        self
    }

    pub fn build(self) -> JsonEncoder {
        JsonEncoder::new(self.pretty_formatter)
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, io::Cursor};

    use serde::{Deserialize, Serialize, Serializer};

    use super::{JsonEncoder, JsonEncoderBuilder};
    use crate::{core::encoder::Encoder, error::FormatError};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Human {
        name: String,
        age: u32,
        location: String,
    }

    struct Channel;

    impl Serialize for Channel {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("channels have no JSON form"))
        }
    }

    #[test]
    fn record_should_be_encoded_compactly() -> Result<(), Box<dyn Error>> {
        let encoder = JsonEncoder::default();
        let mut buffer = Vec::new();

        encoder.transform(
            &Human {
                name: "John".to_string(),
                age: 21,
                location: "NYC".to_string(),
            },
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            r#"{"Name":"John","Age":21,"Location":"NYC"}"#
        );
        Ok(())
    }

    #[test]
    fn strings_should_be_escaped() -> Result<(), Box<dyn Error>> {
        let encoder = JsonEncoder::default();
        let mut buffer = Vec::new();

        encoder.transform(&"say \"hi\"\n", &mut buffer)?;

        assert_eq!(String::from_utf8(buffer)?, r#""say \"hi\"\n""#);
        Ok(())
    }

    #[test]
    fn record_should_survive_round_trip() -> Result<(), Box<dyn Error>> {
        let human = Human {
            name: "Doe, \"J\"".to_string(),
            age: 5,
            location: "LA".to_string(),
        };
        let encoder = JsonEncoder::default();
        let mut cursor = Cursor::new(Vec::new());

        encoder.transform(&human, &mut cursor)?;

        let decoded: Human = serde_json::from_slice(&cursor.into_inner())?;
        assert_eq!(decoded, human);
        Ok(())
    }

    #[test]
    fn pretty_formatter_should_indent() -> Result<(), Box<dyn Error>> {
        let encoder = JsonEncoderBuilder::new().pretty_formatter(true).build();
        let mut buffer = Vec::new();

        encoder.transform(
            &Human {
                name: "John".to_string(),
                age: 21,
                location: "NYC".to_string(),
            },
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            "{\n  \"Name\": \"John\",\n  \"Age\": 21,\n  \"Location\": \"NYC\"\n}"
        );
        Ok(())
    }

    #[derive(Serialize)]
    struct Reading {
        label: &'static str,
        value: f32,
    }

    #[derive(Serialize)]
    struct Measure {
        ratio: f64,
        small: f64,
        id: u128,
        offset: i128,
    }

    #[test]
    fn f32_field_should_keep_its_precision() -> Result<(), Box<dyn Error>> {
        let mut buffer = Vec::new();

        JsonEncoder::default().transform(
            &Reading {
                label: "a",
                value: 0.1,
            },
            &mut buffer,
        )?;

        assert_eq!(String::from_utf8(buffer)?, r#"{"label":"a","value":0.1}"#);
        Ok(())
    }

    #[test]
    fn wide_numbers_should_be_written_in_decimal() -> Result<(), Box<dyn Error>> {
        let mut buffer = Vec::new();

        JsonEncoder::default().transform(
            &Measure {
                ratio: 2.5,
                small: 1e-7,
                id: u128::MAX,
                offset: i128::MIN,
            },
            &mut buffer,
        )?;

        assert_eq!(
            String::from_utf8(buffer)?,
            format!(
                r#"{{"ratio":2.5,"small":1e-7,"id":{},"offset":{}}}"#,
                u128::MAX,
                i128::MIN
            )
        );
        Ok(())
    }

    #[test]
    fn non_finite_floats_should_be_encode_errors() {
        let encoder = JsonEncoder::default();

        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut buffer = Vec::new();
            let result = encoder.transform(&Reading { label: "a", value }, &mut buffer);

            assert!(matches!(result, Err(FormatError::Encode(_))));
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn unrepresentable_value_should_fail_without_writing() {
        let encoder = JsonEncoder::default();
        let mut buffer = Vec::new();

        let result = encoder.transform(&vec![Channel], &mut buffer);

        assert!(matches!(result, Err(FormatError::Encode(_))));
        assert!(buffer.is_empty());
    }
}
