// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use serde::{Serialize, ser};

use crate::encoding::{Error, Result};

/// Serializes values into the keycode binary format. See the module
/// documentation for the encoding of each type.
pub struct Serializer {
    pub output: Vec<u8>,
}

impl Serializer {
    /// Enum variant indexes become a single tag byte.
    fn variant_tag(&mut self, index: u32) -> Result<()> {
        let tag = u8::try_from(index).map_err(|_| Error(format!("enum variant index {} exceeds u8", index)))?;
        self.output.push(tag);
        Ok(())
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = ser::Impossible<(), Error>;
    type SerializeStruct = ser::Impossible<(), Error>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    // false is 0x00, true is 0x01
    fn serialize_bool(self, v: bool) -> Result<()> {
        self.output.push(if v { 0x01 } else { 0x00 });
        Ok(())
    }

    // The sign bit is flipped so that negative values order before positive
    // ones in the unsigned byte comparison.
    fn serialize_i8(self, v: i8) -> Result<()> {
        let mut bytes = v.to_be_bytes();
        bytes[0] ^= 0x80;
        self.output.extend(bytes);
        Ok(())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        let mut bytes = v.to_be_bytes();
        bytes[0] ^= 0x80;
        self.output.extend(bytes);
        Ok(())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        let mut bytes = v.to_be_bytes();
        bytes[0] ^= 0x80;
        self.output.extend(bytes);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        let mut bytes = v.to_be_bytes();
        bytes[0] ^= 0x80;
        self.output.extend(bytes);
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        let mut bytes = v.to_be_bytes();
        bytes[0] ^= 0x80;
        self.output.extend(bytes);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.output.extend(v.to_be_bytes());
        Ok(())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.output.extend(v.to_be_bytes());
        Ok(())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.output.extend(v.to_be_bytes());
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.output.extend(v.to_be_bytes());
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.output.extend(v.to_be_bytes());
        Ok(())
    }

    // Positive floats flip the sign bit, negative floats flip every bit, so
    // the byte order matches the numeric order.
    fn serialize_f32(self, v: f32) -> Result<()> {
        let bits = v.to_bits();
        let encoded = if bits >> 31 == 1 { !bits } else { bits ^ (1 << 31) };
        self.output.extend(encoded.to_be_bytes());
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        let bits = v.to_bits();
        let encoded = if bits >> 63 == 1 { !bits } else { bits ^ (1 << 63) };
        self.output.extend(encoded.to_be_bytes());
        Ok(())
    }

    fn serialize_char(self, _: char) -> Result<()> {
        Err(Error("char is not keycode encodable".to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.serialize_bytes(v.as_bytes())
    }

    // 0x00 is escaped as 0x00ff, and 0x0000 terminates the byte string, so
    // that shorter strings order before longer ones sharing a prefix.
    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        for &byte in v {
            self.output.push(byte);
            if byte == 0x00 {
                self.output.push(0xFF);
            }
        }
        self.output.extend([0x00, 0x00]);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error("Option is not keycode encodable".to_string()))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _: &T) -> Result<()> {
        Err(Error("Option is not keycode encodable".to_string()))
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, index: u32, _: &'static str) -> Result<()> {
        self.variant_tag(index)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        index: u32,
        _: &'static str,
        value: &T,
    ) -> Result<()> {
        self.variant_tag(index)?;
        value.serialize(self)
    }

    // Sequences are encoded as the concatenation of their elements, with no
    // length prefix or terminator.
    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        index: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.variant_tag(index)?;
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error("map is not keycode encodable".to_string()))
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct> {
        Err(Error("struct is not keycode encodable".to_string()))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error("struct variant is not keycode encodable".to_string()))
    }
}

impl ser::SerializeSeq for &mut Serializer {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for &mut Serializer {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for &mut Serializer {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for &mut Serializer {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
