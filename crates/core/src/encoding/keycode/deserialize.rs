// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use serde::de::{self, IntoDeserializer};

use crate::encoding::{Error, Result};
use crate::invalid_data;

/// Deserializes values from the keycode binary format.
///
/// `input` is public: after deserializing a value it holds the untouched
/// remainder, which is what enables sequential multi-value parsing (the
/// record key codec decodes one component at a time and inspects what is
/// left).
pub struct Deserializer<'de> {
    pub input: &'de [u8],
}

impl<'de> Deserializer<'de> {
    pub fn from_bytes(input: &'de [u8]) -> Self {
        Deserializer { input }
    }

    /// Consumes and returns the next `len` bytes of the input.
    fn take_bytes(&mut self, len: usize) -> Result<&'de [u8]> {
        if self.input.len() < len {
            return invalid_data!("insufficient bytes, expected {} for {:x?}", len, self.input);
        }
        let (bytes, rest) = self.input.split_at(len);
        self.input = rest;
        Ok(bytes)
    }

    /// Consumes and unescapes the next escape-encoded byte string, up to and
    /// including its 0x0000 terminator.
    fn decode_next_bytes(&mut self) -> Result<Vec<u8>> {
        let mut decoded = Vec::new();
        let mut iter = self.input.iter().enumerate();
        let taken = loop {
            match iter.next() {
                Some((_, 0x00)) => match iter.next() {
                    Some((i, 0x00)) => break i + 1,        // terminator
                    Some((_, 0xFF)) => decoded.push(0x00), // escaped 0x00
                    _ => return invalid_data!("invalid escape sequence in {:x?}", self.input),
                },
                Some((_, b)) => decoded.push(*b),
                None => return invalid_data!("unexpected end of input {:x?}", self.input),
            }
        };
        self.input = &self.input[taken..];
        Ok(decoded)
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("keycode is not self-describing, a type must be provided")
    }

    fn deserialize_bool<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_bool(match self.take_bytes(1)?[0] {
            0x00 => false,
            0x01 => true,
            b => return invalid_data!("invalid boolean value {:#04x}", b),
        })
    }

    fn deserialize_i8<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut bytes: [u8; 1] = self.take_bytes(1)?.try_into()?;
        bytes[0] ^= 0x80;
        visitor.visit_i8(i8::from_be_bytes(bytes))
    }

    fn deserialize_i16<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut bytes: [u8; 2] = self.take_bytes(2)?.try_into()?;
        bytes[0] ^= 0x80;
        visitor.visit_i16(i16::from_be_bytes(bytes))
    }

    fn deserialize_i32<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut bytes: [u8; 4] = self.take_bytes(4)?.try_into()?;
        bytes[0] ^= 0x80;
        visitor.visit_i32(i32::from_be_bytes(bytes))
    }

    fn deserialize_i64<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut bytes: [u8; 8] = self.take_bytes(8)?.try_into()?;
        bytes[0] ^= 0x80;
        visitor.visit_i64(i64::from_be_bytes(bytes))
    }

    fn deserialize_i128<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut bytes: [u8; 16] = self.take_bytes(16)?.try_into()?;
        bytes[0] ^= 0x80;
        visitor.visit_i128(i128::from_be_bytes(bytes))
    }

    fn deserialize_u8<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u8(u8::from_be_bytes(self.take_bytes(1)?.try_into()?))
    }

    fn deserialize_u16<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u16(u16::from_be_bytes(self.take_bytes(2)?.try_into()?))
    }

    fn deserialize_u32<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(u32::from_be_bytes(self.take_bytes(4)?.try_into()?))
    }

    fn deserialize_u64<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u64(u64::from_be_bytes(self.take_bytes(8)?.try_into()?))
    }

    fn deserialize_u128<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u128(u128::from_be_bytes(self.take_bytes(16)?.try_into()?))
    }

    fn deserialize_f32<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let bits = u32::from_be_bytes(self.take_bytes(4)?.try_into()?);
        let decoded = if bits >> 31 == 1 { bits ^ (1 << 31) } else { !bits };
        visitor.visit_f32(f32::from_bits(decoded))
    }

    fn deserialize_f64<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let bits = u64::from_be_bytes(self.take_bytes(8)?.try_into()?);
        let decoded = if bits >> 63 == 1 { bits ^ (1 << 63) } else { !bits };
        visitor.visit_f64(f64::from_bits(decoded))
    }

    fn deserialize_char<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("char is not keycode decodable")
    }

    fn deserialize_str<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(String::from_utf8(self.decode_next_bytes()?)?)
    }

    fn deserialize_string<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(String::from_utf8(self.decode_next_bytes()?)?)
    }

    fn deserialize_bytes<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.decode_next_bytes()?)
    }

    fn deserialize_byte_buf<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.decode_next_bytes()?)
    }

    fn deserialize_option<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("Option is not keycode decodable")
    }

    fn deserialize_unit<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: de::Visitor<'de>>(self, _: &'static str, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: de::Visitor<'de>>(self, _: &'static str, visitor: V) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: de::Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(self)
    }

    fn deserialize_tuple<V: de::Visitor<'de>>(self, _: usize, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(self)
    }

    fn deserialize_tuple_struct<V: de::Visitor<'de>>(
        self,
        _: &'static str,
        _: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(self)
    }

    fn deserialize_map<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("map is not keycode decodable")
    }

    fn deserialize_struct<V: de::Visitor<'de>>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        _: V,
    ) -> Result<V::Value> {
        invalid_data!("struct is not keycode decodable")
    }

    fn deserialize_enum<V: de::Visitor<'de>>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_enum(self)
    }

    fn deserialize_identifier<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("identifier is not keycode decodable")
    }

    fn deserialize_ignored_any<V: de::Visitor<'de>>(self, _: V) -> Result<V::Value> {
        invalid_data!("keycode is not self-describing, values cannot be skipped")
    }
}

// Sequences simply concatenate elements, with no length prefix or terminator,
// so they are read until the input is exhausted. Tuples are read as a
// sequence too; the visitor stops after the expected number of elements.
impl<'de> de::SeqAccess<'de> for Deserializer<'de> {
    type Error = Error;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>> {
        if self.input.is_empty() {
            return Ok(None);
        }
        seed.deserialize(&mut *self).map(Some)
    }
}

// Enum variants are decoded from their leading tag byte.
impl<'de> de::EnumAccess<'de> for &mut Deserializer<'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V: de::DeserializeSeed<'de>>(self, seed: V) -> Result<(V::Value, Self::Variant)> {
        let index = self.take_bytes(1)?[0] as u32;
        let deserializer = IntoDeserializer::<'de, Error>::into_deserializer(index);
        let value = seed.deserialize(deserializer)?;
        Ok((value, self))
    }
}

impl<'de> de::VariantAccess<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T: de::DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value> {
        seed.deserialize(&mut *self)
    }

    fn tuple_variant<V: de::Visitor<'de>>(self, _: usize, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(&mut *self)
    }

    fn struct_variant<V: de::Visitor<'de>>(self, _: &'static [&'static str], _: V) -> Result<V::Value> {
        invalid_data!("struct variant is not keycode decodable")
    }
}
