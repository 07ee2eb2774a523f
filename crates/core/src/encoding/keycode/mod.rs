// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

//! Keycode is a lexicographical order-preserving binary encoding for use with
//! keys in key/value stores. It is designed for simplicity, not efficiency
//! (i.e. it does not use varints or other compression methods).
//!
//! Ordering is important because it allows limited scans across specific
//! parts of the keyspace, e.g. scanning an individual table or using an index
//! range predicate like `WHERE id < 100`.
//!
//! The encoding is self-delimiting but not self-describing: the caller must
//! provide a concrete type to decode into, and the binary key must conform to
//! its structure. Decoding a value consumes exactly the bytes its encoding
//! produced, leaving the remainder untouched, which enables sequential
//! multi-value parsing.
//!
//! Keycode supports a subset of primitive data types, encoded as follows:
//!
//! * [`bool`]: `0x00` for `false`, `0x01` for `true`.
//! * [`u64`]: big-endian binary representation.
//! * [`i64`]: big-endian binary, sign bit flipped.
//! * [`f64`]: big-endian binary, sign bit flipped, all flipped if negative.
//! * [`Vec<u8>`]: `0x00` escaped as `0x00ff`, terminated with `0x0000`.
//! * [`String`]: like [`Vec<u8>`].
//! * Sequences: concatenation of contained elements, with no other structure.
//! * Enum: the variant's index as [`u8`], then the content sequence.
//! * [`tablekv_type::Datum`]: like any other enum, except that only the
//!   storage kinds serialize; the in-memory-only kinds fail, and the failure
//!   is surfaced through [`try_serialize`].

mod deserialize;
mod serialize;

use serde::{Deserialize, Serialize};

use crate::encoding::{Error, Result};
pub use crate::encoding::keycode::deserialize::Deserializer;
use crate::encoding::keycode::serialize::Serializer;
use crate::invalid_data;

/// Serializes a key to a binary keycode representation.
///
/// In the common case, the encoded key is borrowed for a storage call and
/// then thrown away. We could avoid a bunch of allocations by taking a
/// reusable byte vector to encode into and return a reference to it, but we
/// keep it simple.
pub fn serialize<T: Serialize>(key: &T) -> Vec<u8> {
    // Panic on failure, as this is a problem with the data structure.
    try_serialize(key).expect("key must be serializable")
}

/// Serializes a key to a binary keycode representation, propagating
/// serialization failures (e.g. a datum kind with no storage representation)
/// instead of panicking.
pub fn try_serialize<T: Serialize>(key: &T) -> Result<Vec<u8>> {
    let mut serializer = Serializer { output: Vec::new() };
    key.serialize(&mut serializer)?;
    Ok(serializer.output)
}

/// Deserializes a key from a binary keycode representation.
pub fn deserialize<'a, T: Deserialize<'a>>(input: &'a [u8]) -> Result<T> {
    let mut deserializer = Deserializer::from_bytes(input);
    let t = T::deserialize(&mut deserializer)?;
    if !deserializer.input.is_empty() {
        return invalid_data!(
            "unexpected trailing bytes {:x?} at end of key {input:x?}",
            deserializer.input,
        );
    }
    Ok(t)
}
