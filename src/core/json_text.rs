use serde::{
    Serialize, Serializer,
    ser::{
        SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
        SerializeTupleStruct, SerializeTupleVariant,
    },
};

use crate::error::FormatError;

/// Serializes `data` to JSON text, compact or indented.
///
/// NaN and infinite floats have no JSON form and fail with
/// [`FormatError::Encode`] instead of being written as `null`.
pub fn to_json_vec<T: Serialize + ?Sized>(data: &T, pretty: bool) -> Result<Vec<u8>, FormatError> {
    ensure_finite(data)?;

    let json = if pretty {
        serde_json::to_vec_pretty(data)?
    } else {
        serde_json::to_vec(data)?
    };
    Ok(json)
}

/// Walks `data` and rejects any NaN or infinite float in it.
pub fn ensure_finite<T: Serialize + ?Sized>(data: &T) -> Result<(), FormatError> {
    data.serialize(FiniteCheck)
}

fn check_float(value: f64) -> Result<(), FormatError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::Encode(format!(
            "float {} has no JSON representation",
            value
        )))
    }
}

/// Serializer producing nothing, used only to visit every float.
#[derive(Clone, Copy)]
struct FiniteCheck;

impl Serializer for FiniteCheck {
    type Ok = ();
    type Error = FormatError;
    type SerializeSeq = FiniteCheck;
    type SerializeTuple = FiniteCheck;
    type SerializeTupleStruct = FiniteCheck;
    type SerializeTupleVariant = FiniteCheck;
    type SerializeMap = FiniteCheck;
    type SerializeStruct = FiniteCheck;
    type SerializeStructVariant = FiniteCheck;

    fn serialize_bool(self, _v: bool) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<(), FormatError> {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), FormatError> {
        check_float(v)
    }

    fn serialize_char(self, _v: char) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), FormatError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<FiniteCheck, FormatError> {
        Ok(self)
    }
}

impl SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), FormatError> {
        key.serialize(FiniteCheck)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}

impl SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FormatError> {
        Ok(())
    }
}
