use serde::{
    Serialize, Serializer,
    ser::{Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple, SerializeTupleStruct},
};
use thiserror::Error;

use crate::{core::json_text::to_json_vec, error::FormatError};

/// Records flattened into rows of strings.
#[derive(Debug, Default, PartialEq)]
pub struct Rows {
    /// Field names shared by every record, in the order of the first record.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Rows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Appends one record. The first record fixes the columns; later ones
    /// must carry the same field names, in any order.
    fn push(&mut self, index: usize, fields: Vec<(String, String)>) -> Result<(), FormatError> {
        if index == 0 {
            let (columns, row): (Vec<String>, Vec<String>) = fields.into_iter().unzip();
            self.columns = columns;
            self.rows.push(row);
            return Ok(());
        }

        match self.align(&fields) {
            Some(row) => {
                self.rows.push(row);
                Ok(())
            }
            None => Err(FormatError::Type(format!(
                "record at index {} has fields [{}], expected [{}]",
                index,
                fields
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                self.columns.join(", ")
            ))),
        }
    }

    /// Values of `fields` in column order, if the field names match.
    fn align(&self, fields: &[(String, String)]) -> Option<Vec<String>> {
        if fields.len() != self.columns.len() {
            return None;
        }

        if fields.iter().zip(&self.columns).all(|((name, _), column)| name == column) {
            return Some(fields.iter().map(|(_, value)| value.clone()).collect());
        }

        // Map records iterate their keys in no fixed order.
        self.columns
            .iter()
            .map(|column| {
                fields
                    .iter()
                    .find(|(name, _)| name == column)
                    .map(|(_, value)| value.clone())
            })
            .collect()
    }
}

/// Converts a sequence of records into rows.
///
/// Every element must be a record (a struct or a map) with the same field
/// names as the first one. Each field is written in the text form of its own
/// type: integers of any width and floats in decimal, strings verbatim,
/// booleans as `true`/`false`, missing values as an empty field and nested
/// sequences or records as compact JSON.
pub fn to_rows<T: Serialize + ?Sized>(data: &T) -> Result<Rows, FormatError> {
    data.serialize(RowsSerializer)
}

fn expected_sequence<T>(kind: &str) -> Result<T, FormatError> {
    Err(FormatError::Type(format!("expected sequence, got {}", kind)))
}

fn expected_record<T>(index: usize, kind: &str) -> Result<T, FormatError> {
    Err(FormatError::Type(format!(
        "expected record at index {}, got {}",
        index, kind
    )))
}

/// Text of one field.
fn field_text<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    match value.serialize(FieldSerializer) {
        Ok(text) => Ok(text),
        Err(FieldError::Nested) => String::from_utf8(to_json_vec(value, false)?)
            .map_err(|error| FormatError::Encode(error.to_string())),
        Err(FieldError::Format(error)) => Err(error),
    }
}

struct RowsSerializer;

impl Serializer for RowsSerializer {
    type Ok = Rows;
    type Error = FormatError;
    type SerializeSeq = SeqRows;
    type SerializeTuple = SeqRows;
    type SerializeTupleStruct = SeqRows;
    type SerializeTupleVariant = Impossible<Rows, FormatError>;
    type SerializeMap = Impossible<Rows, FormatError>;
    type SerializeStruct = Impossible<Rows, FormatError>;
    type SerializeStructVariant = Impossible<Rows, FormatError>;

    fn serialize_bool(self, _v: bool) -> Result<Rows, FormatError> {
        expected_sequence("boolean")
    }

    fn serialize_i8(self, _v: i8) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_i16(self, _v: i16) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_i32(self, _v: i32) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_i64(self, _v: i64) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_i128(self, _v: i128) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_u8(self, _v: u8) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_u16(self, _v: u16) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_u32(self, _v: u32) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_u64(self, _v: u64) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_u128(self, _v: u128) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_f32(self, _v: f32) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_f64(self, _v: f64) -> Result<Rows, FormatError> {
        expected_sequence("number")
    }

    fn serialize_char(self, _v: char) -> Result<Rows, FormatError> {
        expected_sequence("string")
    }

    fn serialize_str(self, _v: &str) -> Result<Rows, FormatError> {
        expected_sequence("string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Rows, FormatError> {
        expected_sequence("bytes")
    }

    fn serialize_none(self) -> Result<Rows, FormatError> {
        expected_sequence("null")
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Rows, FormatError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Rows, FormatError> {
        expected_sequence("null")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Rows, FormatError> {
        expected_sequence("null")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Rows, FormatError> {
        expected_sequence("string")
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Rows, FormatError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Rows, FormatError> {
        expected_sequence("map")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqRows, FormatError> {
        Ok(SeqRows::default())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SeqRows, FormatError> {
        Ok(SeqRows::default())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SeqRows, FormatError> {
        Ok(SeqRows::default())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormatError> {
        expected_sequence("map")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, FormatError> {
        expected_sequence("map")
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, FormatError> {
        expected_sequence("map")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormatError> {
        expected_sequence("map")
    }
}

#[derive(Default)]
struct SeqRows {
    rows: Rows,
    index: usize,
}

impl SeqRows {
    fn record<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        let fields = value.serialize(RecordSerializer { index: self.index })?;
        self.rows.push(self.index, fields)?;
        self.index += 1;
        Ok(())
    }
}

impl SerializeSeq for SeqRows {
    type Ok = Rows;
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        self.record(value)
    }

    fn end(self) -> Result<Rows, FormatError> {
        Ok(self.rows)
    }
}

impl SerializeTuple for SeqRows {
    type Ok = Rows;
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        self.record(value)
    }

    fn end(self) -> Result<Rows, FormatError> {
        Ok(self.rows)
    }
}

impl SerializeTupleStruct for SeqRows {
    type Ok = Rows;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        self.record(value)
    }

    fn end(self) -> Result<Rows, FormatError> {
        Ok(self.rows)
    }
}

type Fields = Vec<(String, String)>;

struct RecordSerializer {
    index: usize,
}

impl Serializer for RecordSerializer {
    type Ok = Fields;
    type Error = FormatError;
    type SerializeSeq = Impossible<Fields, FormatError>;
    type SerializeTuple = Impossible<Fields, FormatError>;
    type SerializeTupleStruct = Impossible<Fields, FormatError>;
    type SerializeTupleVariant = Impossible<Fields, FormatError>;
    type SerializeMap = MapRecord;
    type SerializeStruct = StructRecord;
    type SerializeStructVariant = Impossible<Fields, FormatError>;

    fn serialize_bool(self, _v: bool) -> Result<Fields, FormatError> {
        expected_record(self.index, "boolean")
    }

    fn serialize_i8(self, _v: i8) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_i16(self, _v: i16) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_i32(self, _v: i32) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_i64(self, _v: i64) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_i128(self, _v: i128) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_u8(self, _v: u8) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_u16(self, _v: u16) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_u32(self, _v: u32) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_u64(self, _v: u64) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_u128(self, _v: u128) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_f32(self, _v: f32) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_f64(self, _v: f64) -> Result<Fields, FormatError> {
        expected_record(self.index, "number")
    }

    fn serialize_char(self, _v: char) -> Result<Fields, FormatError> {
        expected_record(self.index, "string")
    }

    fn serialize_str(self, _v: &str) -> Result<Fields, FormatError> {
        expected_record(self.index, "string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Fields, FormatError> {
        expected_record(self.index, "bytes")
    }

    fn serialize_none(self) -> Result<Fields, FormatError> {
        expected_record(self.index, "null")
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Fields, FormatError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Fields, FormatError> {
        expected_record(self.index, "null")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Fields, FormatError> {
        expected_record(self.index, "null")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Fields, FormatError> {
        expected_record(self.index, "string")
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Fields, FormatError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Fields, FormatError> {
        expected_record(self.index, "enum")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, FormatError> {
        expected_record(self.index, "sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, FormatError> {
        expected_record(self.index, "sequence")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, FormatError> {
        expected_record(self.index, "sequence")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormatError> {
        expected_record(self.index, "enum")
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapRecord, FormatError> {
        Ok(MapRecord {
            fields: Vec::with_capacity(len.unwrap_or(0)),
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<StructRecord, FormatError> {
        Ok(StructRecord {
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormatError> {
        expected_record(self.index, "enum")
    }
}

struct StructRecord {
    fields: Fields,
}

impl SerializeStruct for StructRecord {
    type Ok = Fields;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        self.fields.push((key.to_string(), field_text(value)?));
        Ok(())
    }

    fn end(self) -> Result<Fields, FormatError> {
        Ok(self.fields)
    }
}

struct MapRecord {
    fields: Fields,
    key: Option<String>,
}

impl SerializeMap for MapRecord {
    type Ok = Fields;
    type Error = FormatError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), FormatError> {
        self.key = Some(field_text(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        let key = self
            .key
            .take()
            .ok_or_else(|| FormatError::Encode("map value without a key".to_string()))?;
        self.fields.push((key, field_text(value)?));
        Ok(())
    }

    fn end(self) -> Result<Fields, FormatError> {
        Ok(self.fields)
    }
}

#[derive(Error, Debug)]
enum FieldError {
    /// The field is a sequence, record or enum payload.
    #[error("nested value")]
    Nested,

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl serde::ser::Error for FieldError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        FieldError::Format(FormatError::Encode(msg.to_string()))
    }
}

/// Text form of scalar fields; anything nested is reported as such.
struct FieldSerializer;

impl Serializer for FieldSerializer {
    type Ok = String;
    type Error = FieldError;
    type SerializeSeq = Impossible<String, FieldError>;
    type SerializeTuple = Impossible<String, FieldError>;
    type SerializeTupleStruct = Impossible<String, FieldError>;
    type SerializeTupleVariant = Impossible<String, FieldError>;
    type SerializeMap = Impossible<String, FieldError>;
    type SerializeStruct = Impossible<String, FieldError>;
    type SerializeStructVariant = Impossible<String, FieldError>;

    fn serialize_bool(self, v: bool) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    /// NaN and infinities come out as `NaN`, `inf` and `-inf`.
    fn serialize_f32(self, v: f32) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, FieldError> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_none(self) -> Result<String, FieldError> {
        Ok(String::new())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String, FieldError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, FieldError> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, FieldError> {
        Ok(String::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, FieldError> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, FieldError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, FieldError> {
        Err(FieldError::Nested)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FieldError> {
        Err(FieldError::Nested)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Serialize;
    use serde_json::json;

    use super::to_rows;
    use crate::error::FormatError;

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
        unit: Option<char>,
    }

    fn map_record(offset: i32) -> HashMap<String, i32> {
        ["a", "b", "c", "d", "e", "f"]
            .iter()
            .enumerate()
            .map(|(i, key)| (key.to_string(), offset + i as i32))
            .collect()
    }

    #[test]
    fn records_should_become_rows_in_field_order() {
        let value = json!([
            {"Name": "John", "Age": 21, "Location": "NYC"},
            {"Name": "Jane", "Age": 34, "Location": "SF"},
        ]);

        let rows = to_rows(&value).unwrap();

        assert_eq!(rows.columns, vec!["Name", "Age", "Location"]);
        assert_eq!(
            rows.rows,
            vec![vec!["John", "21", "NYC"], vec!["Jane", "34", "SF"]]
        );
    }

    #[test]
    fn empty_sequence_should_give_no_rows() {
        let rows = to_rows(&Vec::<Reading>::new()).unwrap();

        assert!(rows.is_empty());
        assert!(rows.columns.is_empty());
    }

    #[test]
    fn numbers_should_use_their_own_type() {
        let rows = to_rows(&[Measure {
            ratio: 2.5,
            small: 1e-7,
            id: u128::MAX,
            offset: i128::MIN,
            unit: Some('m'),
        }])
        .unwrap();

        assert_eq!(
            rows.rows[0],
            vec![
                "2.5".to_string(),
                "0.0000001".to_string(),
                u128::MAX.to_string(),
                i128::MIN.to_string(),
                "m".to_string(),
            ]
        );
    }

    #[test]
    fn f32_field_should_keep_its_precision() {
        let rows = to_rows(&[Reading {
            label: "a",
            value: 0.1,
        }])
        .unwrap();

        assert_eq!(rows.rows, vec![vec!["a", "0.1"]]);
    }

    #[test]
    fn non_finite_floats_should_be_spelled_out() {
        let rows = to_rows(&[
            Reading {
                label: "nan",
                value: f32::NAN,
            },
            Reading {
                label: "up",
                value: f32::INFINITY,
            },
            Reading {
                label: "down",
                value: f32::NEG_INFINITY,
            },
        ])
        .unwrap();

        let values: Vec<&str> = rows.rows.iter().map(|row| row[1].as_str()).collect();
        assert_eq!(values, vec!["NaN", "inf", "-inf"]);
    }

    #[test]
    fn fields_should_use_default_text_form() {
        let value = json!([{
            "flag": false,
            "missing": null,
            "tags": ["a", "b"],
            "inner": {"x": 1}
        }]);

        let rows = to_rows(&value).unwrap();

        assert_eq!(
            rows.rows[0],
            vec!["false", "", r#"["a","b"]"#, r#"{"x":1}"#]
        );
    }

    #[test]
    fn nested_non_finite_float_should_be_an_encode_error() {
        let result = to_rows(&[HashMap::from([("xs", vec![1.0, f64::NAN])])]);

        assert!(matches!(result, Err(FormatError::Encode(_))));
    }

    #[test]
    fn map_records_should_follow_first_record_columns() {
        let records = vec![map_record(0), map_record(10), map_record(20)];

        let rows = to_rows(&records).unwrap();

        assert_eq!(rows.len(), 3);
        for (row, record) in rows.rows.iter().zip(&records) {
            for (column, value) in rows.columns.iter().zip(row) {
                assert_eq!(*value, record[column].to_string());
            }
        }
    }

    #[test]
    fn non_sequence_should_be_a_type_error() {
        let error = to_rows(&json!({"Name": "John"})).unwrap_err();

        assert!(matches!(error, FormatError::Type(_)));
        assert_eq!(error.to_string(), "TypeError: expected sequence, got map");
    }

    #[test]
    fn non_record_element_should_be_a_type_error() {
        let error = to_rows(&json!([{"a": 1}, 42])).unwrap_err();

        assert_eq!(
            error.to_string(),
            "TypeError: expected record at index 1, got number"
        );
    }

    #[test]
    fn mismatched_fields_should_be_a_type_error() {
        let error = to_rows(&json!([{"a": 1, "b": 2}, {"a": 1, "c": 2}])).unwrap_err();

        assert_eq!(
            error.to_string(),
            "TypeError: record at index 1 has fields [a, c], expected [a, b]"
        );
    }
}
