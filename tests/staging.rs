//! End-to-end staging tests: declare a layout once, then write and view a
//! buffer the way the render loop does each frame.

use glam::{Mat4, Vec3};
use nether_layout::{
    LayoutType, ArrayType, StructType, Value, allocate, count, decode_f16, encode_f16, mat4x4f,
    vec2f, vec3f, vec4f,
};

#[test]
fn instance_buffer_layout_and_offsets() {
    // vec4 tint (16 bytes) + mat4x4 model (64 bytes) per instance
    let instance = StructType::new([("tint", 0, vec4f()), ("model", 1, mat4x4f())]).unwrap();
    assert_eq!(instance.offset_of("tint"), Some(0));
    assert_eq!(instance.offset_of("model"), Some(16));

    let ty = LayoutType::Struct(instance);
    assert_eq!(ty.byte_size(), 80);

    let mut buffer = allocate(&ty, 2);
    assert_eq!(buffer.len(), 160);
    assert_eq!(count(&ty, &buffer), 2);

    // Element 1's tint starts at byte 80
    ty.write_at(
        buffer.as_bytes_mut(),
        &Value::struct_of([
            ("tint", [0.25f32, 0.5, 0.75, 1.0].into()),
            ("model", Mat4::IDENTITY.into()),
        ]),
        1,
        0,
    );
    assert_eq!(&buffer.as_bytes()[80..84], &0.25f32.to_le_bytes());
    // Element 0 stays zeroed
    assert!(buffer.as_bytes()[..80].iter().all(|&b| b == 0));
}

#[test]
fn vec4_write_reads_back_through_both_paths() {
    let ty = vec4f();
    let mut buffer = allocate(&ty, 1);
    ty.write(buffer.as_bytes_mut(), &[1.0f32, 2.0, 3.0, 4.0].into(), 0);

    // Whole-value path
    assert_eq!(
        ty.read_at(buffer.as_bytes(), 0, 0),
        [1.0f32, 2.0, 3.0, 4.0].into()
    );

    // Per-component path
    let LayoutType::Vector(vec4) = &ty else {
        panic!("vec4f is a vector");
    };
    let bytes = buffer.as_bytes();
    assert_eq!(vec4.x(bytes, 0), Value::Float(1.0));
    assert_eq!(vec4.y(bytes, 0), Value::Float(2.0));
    assert_eq!(vec4.z(bytes, 0), Value::Float(3.0));
    assert_eq!(vec4.w(bytes, 0), Value::Float(4.0));
}

#[test]
fn vec2_array_size_and_element_access() {
    let arr = ArrayType::new(vec2f(), 3).unwrap();
    assert_eq!(arr.byte_size(), 24);

    let ty = LayoutType::Array(arr);
    let mut buffer = allocate(&ty, 1);
    ty.write(
        buffer.as_bytes_mut(),
        &[[0.0f32, 0.0], [1.0, 1.0], [2.0, 2.0]].into(),
        0,
    );

    let LayoutType::Array(arr) = &ty else {
        panic!("array type");
    };
    assert_eq!(arr.get(buffer.as_bytes(), 1, 0), [1.0f32, 1.0].into());

    // The flat view sees the same element at components 2..4
    let view = ty.view(buffer.as_bytes(), 0, 1);
    assert_eq!(&view.as_f32().unwrap()[2..4], &[1.0, 1.0]);
}

#[test]
fn half_precision_range_edges() {
    // Max finite half round-trips exactly
    assert_eq!(decode_f16(encode_f16(65504.0)), 65504.0);

    // Above the representable range: no panic, silently mis-encodes into
    // the exponent-31 pattern
    let bits = encode_f16(70000.0);
    assert!(decode_f16(bits).is_nan());
}

#[test]
fn frame_staging_flow() {
    // Camera uniform block + instance transforms, staged the way a render
    // loop does once per frame
    let camera = StructType::new([
        ("view_proj", 0, mat4x4f()),
        ("eye", 1, vec3f()),
        ("time", 2, LayoutType::Scalar(nether_layout::ScalarType::Float32)),
    ])
    .unwrap();
    assert_eq!(camera.offset_of("view_proj"), Some(0));
    assert_eq!(camera.offset_of("eye"), Some(64));
    assert_eq!(camera.offset_of("time"), Some(76));
    let camera = LayoutType::Struct(camera);
    assert_eq!(camera.byte_size(), 80);

    let mut camera_buffer = allocate(&camera, 1);

    let eye = Vec3::new(0.0, 2.0, 5.0);
    let view_proj = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    camera.write(
        camera_buffer.as_bytes_mut(),
        &Value::struct_of([
            ("view_proj", view_proj.into()),
            ("eye", eye.into()),
            ("time", 0.016f32.into()),
        ]),
        0,
    );

    // Row-major storage: cell (0, 3) of the matrix is bytes 12..16
    assert_eq!(
        &camera_buffer.as_bytes()[12..16],
        &view_proj.row(0).w.to_le_bytes()
    );
    assert_eq!(&camera_buffer.as_bytes()[64..68], &0.0f32.to_le_bytes());
    assert_eq!(&camera_buffer.as_bytes()[76..80], &0.016f32.to_le_bytes());

    // Next frame: bump only the time field through a view, leaving the
    // matrix bytes untouched
    let before = camera_buffer.as_bytes()[..64].to_vec();
    {
        let mut view = camera.view_mut(camera_buffer.as_bytes_mut(), 0, 1);
        let object = &mut view.as_structs_mut().unwrap()[0];
        object.field_mut("time").unwrap().as_f32_mut().unwrap()[0] = 0.032;
    }
    assert_eq!(&camera_buffer.as_bytes()[..64], &before[..]);
    assert_eq!(&camera_buffer.as_bytes()[76..80], &0.032f32.to_le_bytes());

    // Instance transforms as an array of matrices
    let instances = LayoutType::Array(ArrayType::new(mat4x4f(), 4).unwrap());
    let mut instance_buffer = allocate(&instances, 1);
    let transforms: Vec<Value> = (0..4)
        .map(|i| Mat4::from_translation(Vec3::new(i as f32, 0.0, 0.0)).into())
        .collect();
    instances.write(instance_buffer.as_bytes_mut(), &Value::List(transforms), 0);

    // Instance 3: tx = 3.0 at matrix cell (0, 3), element stride 64
    assert_eq!(
        &instance_buffer.as_bytes()[3 * 64 + 12..3 * 64 + 16],
        &3.0f32.to_le_bytes()
    );
}
