//! Property-based tests for codec round-trips and layout laws.

use nether_layout::{
    LayoutType, ScalarType, StructType, Value, allocate, count, decode_f16, encode_f16, mat2x2f,
    vec2f, vec3f, vec4f, vec4h,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Scalar round-trips (proptest's default float strategy excludes NaN/inf)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn roundtrip_f32(val: f32) {
        let ty = LayoutType::Scalar(ScalarType::Float32);
        let mut buffer = allocate(&ty, 1);
        ty.write(buffer.as_bytes_mut(), &Value::Float(val), 0);
        prop_assert_eq!(ty.read(buffer.as_bytes(), 0), Value::Float(val));
    }

    #[test]
    fn roundtrip_i32(val: i32) {
        let ty = LayoutType::Scalar(ScalarType::Sint32);
        let mut buffer = allocate(&ty, 1);
        ty.write(buffer.as_bytes_mut(), &Value::Sint(val), 0);
        prop_assert_eq!(ty.read(buffer.as_bytes(), 0), Value::Sint(val));
    }

    #[test]
    fn roundtrip_u32(val: u32) {
        let ty = LayoutType::Scalar(ScalarType::Uint32);
        let mut buffer = allocate(&ty, 1);
        ty.write(buffer.as_bytes_mut(), &Value::Uint(val), 0);
        prop_assert_eq!(ty.read(buffer.as_bytes(), 0), Value::Uint(val));
    }

    #[test]
    fn roundtrip_bool(val: bool) {
        let ty = LayoutType::Scalar(ScalarType::Bool);
        let mut buffer = allocate(&ty, 1);
        ty.write(buffer.as_bytes_mut(), &Value::Bool(val), 0);
        prop_assert_eq!(ty.read(buffer.as_bytes(), 0), Value::Bool(val));
    }
}

// ---------------------------------------------------------------------------
// Half precision: every normal-range bit pattern survives decode -> encode
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn f16_normal_patterns_roundtrip(
        sign in 0u16..=1,
        exponent in 1u16..=30,
        fraction in 0u16..1024,
    ) {
        let bits = (sign << 15) | (exponent << 10) | fraction;
        let decoded = decode_f16(bits);
        prop_assert_eq!(encode_f16(decoded), bits);
    }

    #[test]
    fn f16_matches_reference_in_normal_range(
        exponent in 1u16..=30,
        fraction in 0u16..1024,
    ) {
        let bits = (exponent << 10) | fraction;
        prop_assert_eq!(decode_f16(bits), half::f16::from_bits(bits).to_f32());
    }
}

// ---------------------------------------------------------------------------
// Layout laws over generated struct declarations
// ---------------------------------------------------------------------------

fn field_type(index: usize) -> LayoutType {
    match index % 7 {
        0 => LayoutType::Scalar(ScalarType::Float32),
        1 => LayoutType::Scalar(ScalarType::Float16),
        2 => LayoutType::Scalar(ScalarType::Uint32),
        3 => vec2f(),
        4 => vec3f(),
        5 => vec4h(),
        _ => mat2x2f(),
    }
}

proptest! {
    #[test]
    fn struct_offsets_honor_alignment(picks in prop::collection::vec(0usize..7, 1..10)) {
        let fields: Vec<(String, usize, LayoutType)> = picks
            .iter()
            .enumerate()
            .map(|(i, &pick)| (format!("f{i}"), i, field_type(pick)))
            .collect();
        let s = StructType::new(fields).unwrap();

        let mut previous_end = 0;
        for field in s.fields() {
            prop_assert_eq!(field.offset % field.ty.alignment(), 0);
            prop_assert!(field.offset >= previous_end);
            previous_end = field.offset + field.ty.byte_size();
        }
        prop_assert_eq!(s.byte_size() % 4, 0);
        prop_assert!(s.byte_size() >= previous_end);
    }

    #[test]
    fn struct_construction_is_deterministic(picks in prop::collection::vec(0usize..7, 1..10)) {
        let declare = || {
            StructType::new(
                picks
                    .iter()
                    .enumerate()
                    .map(|(i, &pick)| (format!("f{i}"), i, field_type(pick)))
                    .collect::<Vec<_>>(),
            )
            .unwrap()
        };
        let first = declare();
        let second = declare();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn allocate_count_inverts(pick in 0usize..7, n in 1usize..64) {
        let ty = field_type(pick);
        let buffer = allocate(&ty, n);
        prop_assert_eq!(buffer.len(), ty.byte_size() * n);
        prop_assert_eq!(count(&ty, &buffer), n);
    }
}

// ---------------------------------------------------------------------------
// Aggregate round-trips
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn roundtrip_vec4(vals: [f32; 4]) {
        let ty = vec4f();
        let mut buffer = allocate(&ty, 1);
        let value: Value = vals.into();
        ty.write(buffer.as_bytes_mut(), &value, 0);
        prop_assert_eq!(ty.read(buffer.as_bytes(), 0), value);
    }

    #[test]
    fn roundtrip_struct_at_index(vals: [f32; 4], index in 0usize..8) {
        let s = StructType::new([
            ("flag", 0, LayoutType::Scalar(ScalarType::Bool)),
            ("tint", 1, vec4f()),
        ])
        .unwrap();
        let ty = LayoutType::Struct(s);
        let mut buffer = allocate(&ty, 8);

        let value = Value::struct_of([
            ("flag", Value::Bool(index % 2 == 0)),
            ("tint", vals.into()),
        ]);
        ty.write_at(buffer.as_bytes_mut(), &value, index, 0);
        prop_assert_eq!(ty.read_at(buffer.as_bytes(), index, 0), value);
    }
}
