// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use tablekv_type::{
    BitValue, ColumnDescriptor, ColumnType, Date, DateTime, Datum, Decimal, Diagnostic, EnumValue, Interval,
    MAX_PRECISION, OrderedF32, Result, SetValue, error,
    error::diagnostic::{
        coercion::{decimal_parse_failed, temporal_unmarshal_failed, unexpected_datum, unknown_column_type},
        encoding::empty_value,
    },
    return_error,
};

use crate::encoding::keycode;

/// The result of unflattening one stored datum: the typed datum, plus a
/// warning diagnostic when the declared type tag was not interpreted and the
/// value passed through unchanged. The caller decides whether to log, ignore
/// or escalate the warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Unflattened {
    pub datum: Datum,
    pub warning: Option<Diagnostic>,
}

impl Unflattened {
    fn new(datum: Datum) -> Self {
        Self { datum, warning: None }
    }

    fn with_warning(datum: Datum, warning: Diagnostic) -> Self {
        Self { datum, warning: Some(warning) }
    }

    pub fn into_datum(self) -> Datum {
        self.datum
    }
}

/// Converts a stored datum back into its column-type-specific representation.
///
/// The datum is expected to be a storage kind (the shape the row writer
/// flattened the cell into); the declared column type decides how it is
/// reinterpreted. A `Null` datum is returned unchanged for every declared
/// type, with no type-specific logic invoked.
pub fn unflatten(datum: Datum, column: &ColumnDescriptor) -> Result<Unflattened> {
    if datum.is_null() {
        return Ok(Unflattened::new(datum));
    }

    match column.ty {
        // The stored representation is always the wide float; narrow it when
        // the column declares the 4-byte type.
        ColumnType::Float4 => {
            let Some(wide) = datum.as_f64() else {
                return_error!(unexpected_datum(column.ty, "Float8", datum.name()));
            };
            let narrow = OrderedF32::try_from(wide as f32)?;
            Ok(Unflattened::new(Datum::Float4(narrow)))
        }

        // For these types the storage representation already matches the
        // logical type.
        ColumnType::Float8
        | ColumnType::Int1
        | ColumnType::Int2
        | ColumnType::Int4
        | ColumnType::Int8
        | ColumnType::Uint1
        | ColumnType::Uint2
        | ColumnType::Uint4
        | ColumnType::Uint8
        | ColumnType::Utf8
        | ColumnType::Blob => Ok(Unflattened::new(datum)),

        ColumnType::Date => {
            let Some(payload) = datum.as_bytes() else {
                return_error!(unexpected_datum(column.ty, "Blob", datum.name()));
            };
            let date = Date::unmarshal(payload)
                .map_err(|reason| error!(temporal_unmarshal_failed(column.ty, reason)))?;
            Ok(Unflattened::new(Datum::Date(date)))
        }

        ColumnType::DateTime | ColumnType::Timestamp => {
            let Some(payload) = datum.as_bytes() else {
                return_error!(unexpected_datum(column.ty, "Blob", datum.name()));
            };
            let precision = column.precision.unwrap_or(MAX_PRECISION);
            let datetime = DateTime::unmarshal(payload, precision)
                .map_err(|reason| error!(temporal_unmarshal_failed(column.ty, reason)))?;
            Ok(Unflattened::new(Datum::DateTime(datetime)))
        }

        // Durations are stored as a 64-bit nanosecond count.
        ColumnType::Interval => {
            let Some(nanos) = datum.as_int() else {
                return_error!(unexpected_datum(column.ty, "Int8", datum.name()));
            };
            Ok(Unflattened::new(Datum::Interval(Interval::from_nanoseconds(nanos))))
        }

        // Decimals are stored as their canonical string representation.
        ColumnType::Decimal => {
            let Some(text) = datum.as_str() else {
                return_error!(unexpected_datum(column.ty, "Utf8", datum.name()));
            };
            let decimal = Decimal::parse(text).map_err(|err| error!(decimal_parse_failed(err.diagnostic())))?;
            Ok(Unflattened::new(Datum::Decimal(decimal)))
        }

        ColumnType::Enum => {
            let Some(ordinal) = datum.as_uint() else {
                return_error!(unexpected_datum(column.ty, "Uint8", datum.name()));
            };
            let value = EnumValue::resolve(&column.symbols, ordinal)?;
            Ok(Unflattened::new(Datum::Enum(value)))
        }

        ColumnType::Set => {
            let Some(bitmask) = datum.as_uint() else {
                return_error!(unexpected_datum(column.ty, "Uint8", datum.name()));
            };
            let value = SetValue::resolve(&column.symbols, bitmask)?;
            Ok(Unflattened::new(Datum::Set(value)))
        }

        // The declared width is carried as metadata; the value's magnitude is
        // deliberately not checked against it.
        ColumnType::Bit => {
            let Some(value) = datum.as_uint() else {
                return_error!(unexpected_datum(column.ty, "Uint8", datum.name()));
            };
            let width = column.width.unwrap_or(1);
            Ok(Unflattened::new(Datum::Bit(BitValue::new(value, width))))
        }

        ColumnType::Other(tag) => Ok(Unflattened::with_warning(datum, unknown_column_type(tag))),
    }
}

/// Decodes the stored multi-datum representation of a row value.
pub fn decode_datums(data: &[u8]) -> Result<Vec<Datum>> {
    keycode::deserialize(data).map_err(Into::into)
}

/// Decodes a stored cell value and unflattens it against the declared column
/// type.
pub fn decode_value(data: &[u8], column: &ColumnDescriptor) -> Result<Unflattened> {
    let mut datums = decode_datums(data)?;
    if datums.is_empty() {
        return_error!(empty_value());
    }
    unflatten(datums.remove(0), column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(ty: ColumnType) -> ColumnDescriptor {
        ColumnDescriptor::new(ty)
    }

    #[test]
    fn test_null_short_circuits_for_every_declared_type() {
        let types = [
            ColumnType::Float4,
            ColumnType::Float8,
            ColumnType::Int8,
            ColumnType::Utf8,
            ColumnType::Blob,
            ColumnType::Date,
            ColumnType::DateTime,
            ColumnType::Timestamp,
            ColumnType::Interval,
            ColumnType::Decimal,
            ColumnType::Enum,
            ColumnType::Set,
            ColumnType::Bit,
            ColumnType::Other(0xEE),
        ];
        for ty in types {
            let result = unflatten(Datum::Null, &column(ty)).unwrap();
            assert_eq!(result.datum, Datum::Null);
            assert!(result.warning.is_none());
        }
    }

    #[test]
    fn test_float_narrowing() {
        let result = unflatten(Datum::float8(3.14f64), &column(ColumnType::Float4)).unwrap();
        assert_eq!(result.datum, Datum::float4(3.14f32));
    }

    #[test]
    fn test_wide_float_passes_through() {
        let datum = Datum::float8(3.14f64);
        let result = unflatten(datum.clone(), &column(ColumnType::Float8)).unwrap();
        assert_eq!(result.datum, datum);
    }

    #[test]
    fn test_exact_width_types_pass_through() {
        for (datum, ty) in [
            (Datum::int8(-5), ColumnType::Int1),
            (Datum::int8(1000), ColumnType::Int8),
            (Datum::uint8(7u64), ColumnType::Uint8),
            (Datum::utf8("hello"), ColumnType::Utf8),
            (Datum::blob(vec![1u8, 2, 3]), ColumnType::Blob),
        ] {
            let result = unflatten(datum.clone(), &column(ty)).unwrap();
            assert_eq!(result.datum, datum);
            assert!(result.warning.is_none());
        }
    }

    #[test]
    fn test_date_unmarshal() {
        let date = Date::new(2024, 3, 15).unwrap();
        let stored = Datum::blob(date.marshal().to_vec());
        let result = unflatten(stored, &column(ColumnType::Date)).unwrap();
        assert_eq!(result.datum, Datum::Date(date));
    }

    #[test]
    fn test_datetime_unmarshal_applies_declared_precision() {
        let datetime = DateTime::new(1_710_513_045, 123_456_789).unwrap();
        let stored = Datum::blob(datetime.marshal().to_vec());
        let descriptor = column(ColumnType::DateTime).with_precision(3);

        let result = unflatten(stored, &descriptor).unwrap();
        let Datum::DateTime(decoded) = result.datum else {
            panic!("expected a datetime datum");
        };
        assert_eq!(decoded.nanos(), 123_000_000);
        assert_eq!(decoded.precision(), 3);
    }

    #[test]
    fn test_timestamp_uses_the_same_payload() {
        let datetime = DateTime::new(1_710_513_045, 0).unwrap();
        let stored = Datum::blob(datetime.marshal().to_vec());
        let result = unflatten(stored, &column(ColumnType::Timestamp)).unwrap();
        assert_eq!(result.datum, Datum::DateTime(datetime));
    }

    #[test]
    fn test_temporal_unmarshal_failure() {
        let stored = Datum::blob(vec![0x01, 0x02]);
        let err = unflatten(stored, &column(ColumnType::Date)).unwrap_err();
        assert_eq!(err.code(), "COERCION_002");
    }

    #[test]
    fn test_temporal_wrong_datum_kind() {
        let err = unflatten(Datum::int8(1), &column(ColumnType::Date)).unwrap_err();
        assert_eq!(err.code(), "COERCION_001");
    }

    #[test]
    fn test_interval_wraps_nanoseconds() {
        let result = unflatten(Datum::int8(1_500_000_000), &column(ColumnType::Interval)).unwrap();
        assert_eq!(result.datum, Datum::Interval(Interval::from_nanoseconds(1_500_000_000)));
    }

    #[test]
    fn test_decimal_parse() {
        let result = unflatten(Datum::utf8("123.450"), &column(ColumnType::Decimal)).unwrap();
        assert_eq!(result.datum.to_string(), "123.450");
    }

    #[test]
    fn test_decimal_parse_failure() {
        let err = unflatten(Datum::utf8("not a number"), &column(ColumnType::Decimal)).unwrap_err();
        assert_eq!(err.code(), "COERCION_003");
    }

    #[test]
    fn test_enum_resolution() {
        let descriptor = column(ColumnType::Enum).with_symbols(["red", "green", "blue"]);
        let result = unflatten(Datum::uint8(2u64), &descriptor).unwrap();
        assert_eq!(result.datum.to_string(), "green");
    }

    #[test]
    fn test_enum_invalid_ordinal() {
        let descriptor = column(ColumnType::Enum).with_symbols(["red"]);
        let err = unflatten(Datum::uint8(2u64), &descriptor).unwrap_err();
        assert_eq!(err.code(), "COERCION_004");
    }

    #[test]
    fn test_set_resolution() {
        let descriptor = column(ColumnType::Set).with_symbols(["a", "b", "c"]);
        let result = unflatten(Datum::uint8(0b101u64), &descriptor).unwrap();
        assert_eq!(result.datum.to_string(), "a,c");
    }

    #[test]
    fn test_set_invalid_bitmask() {
        let descriptor = column(ColumnType::Set).with_symbols(["a"]);
        let err = unflatten(Datum::uint8(0b10u64), &descriptor).unwrap_err();
        assert_eq!(err.code(), "COERCION_005");
    }

    #[test]
    fn test_bit_pairs_value_with_declared_width() {
        let descriptor = column(ColumnType::Bit).with_width(4);
        let result = unflatten(Datum::uint8(0b101u64), &descriptor).unwrap();
        assert_eq!(result.datum, Datum::Bit(BitValue::new(0b101, 4)));
    }

    #[test]
    fn test_unknown_type_tag_passes_through_with_warning() {
        let datum = Datum::utf8("opaque");
        let result = unflatten(datum.clone(), &column(ColumnType::Other(0xC8))).unwrap();
        assert_eq!(result.datum, datum);

        let warning = result.warning.expect("expected a warning");
        assert_eq!(warning.code, "COERCION_006");
    }

    #[test]
    fn test_known_types_produce_no_warning() {
        let result = unflatten(Datum::int8(1), &column(ColumnType::Int8)).unwrap();
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_decode_value_roundtrip() {
        let stored = keycode::try_serialize(&vec![Datum::utf8("2.50")]).unwrap();
        let result = decode_value(&stored, &column(ColumnType::Decimal)).unwrap();
        assert_eq!(result.datum.to_string(), "2.50");
    }

    #[test]
    fn test_decode_value_takes_first_datum() {
        let stored = keycode::try_serialize(&vec![Datum::int8(7), Datum::int8(8)]).unwrap();
        let result = decode_value(&stored, &column(ColumnType::Int8)).unwrap();
        assert_eq!(result.datum, Datum::int8(7));
    }

    #[test]
    fn test_decode_value_rejects_empty_input() {
        let err = decode_value(&[], &column(ColumnType::Int8)).unwrap_err();
        assert_eq!(err.code(), "ENCODING_002");
    }

    #[test]
    fn test_decode_datums_rejects_corrupt_input() {
        let mut stored = keycode::try_serialize(&vec![Datum::int8(7)]).unwrap();
        stored.truncate(stored.len() - 1);
        assert!(decode_datums(&stored).is_err());
    }
}
