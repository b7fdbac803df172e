//! Nether-Layout: GPU buffer memory-layout codec for Nethercore
//!
//! This crate declares WGSL-style memory layouts on the CPU and reads,
//! writes, and views raw byte buffers matching them, so staged data
//! (camera uniforms, instance transforms, per-particle state) can be handed
//! to the GPU upload queue with no marshalling step. It performs no device
//! I/O: the only contract is that the declared layout matches what the
//! paired shader expects, and that correspondence is the caller's to uphold.
//!
//! # Layout rules
//!
//! | Type | Size | Alignment |
//! |------|------|-----------|
//! | bool, i32, u32, f32 | 4 | 4 |
//! | f16 | 2 | 2 |
//! | vecN of T | N x T | align of T (or natural, opt-in) |
//! | matNxN of T | N x N x T | align of T |
//! | array of E, length L | L x size of E | align of E |
//! | struct | padded field walk | 4 (or derived, opt-in) |
//!
//! All scalars are little-endian. Bool is stored as a 4-byte integer
//! (0 = false, nonzero = true) - a shading-language storage rule, not a
//! bug. Struct fields are placed in declaration order, each padded up to
//! its own alignment, and the struct size is padded up to the struct
//! alignment. Stricter alignment rules (16-byte vectors, uniform-block
//! struct alignment) are available per declaration; see
//! [`VecAlign`] and [`AlignPolicy`].
//!
//! # Usage
//!
//! ```
//! use nether_layout::{allocate, mat4x4f, vec4f, LayoutType, StructType, Value};
//!
//! // One instance record: a vec4 tint and a mat4x4 model transform
//! let instance = StructType::new([
//!     ("tint", 0, vec4f()),
//!     ("model", 1, mat4x4f()),
//! ]).unwrap();
//! let instance = LayoutType::Struct(instance);
//!
//! // Room for 2 instances, zero-filled
//! let mut buffer = allocate(&instance, 2);
//! assert_eq!(buffer.len(), 160);
//!
//! // Stage instance 1; instance 0 stays zeroed
//! instance.write_at(
//!     buffer.as_bytes_mut(),
//!     &Value::struct_of([
//!         ("tint", [1.0f32, 0.0, 0.0, 1.0].into()),
//!         ("model", [[1.0f32, 0.0, 0.0, 0.0],
//!                    [0.0, 1.0, 0.0, 0.0],
//!                    [0.0, 0.0, 1.0, 0.0],
//!                    [0.0, 0.0, 0.0, 1.0]].into()),
//!     ]),
//!     1,
//!     0,
//! );
//! assert_eq!(
//!     instance.read_at(buffer.as_bytes(), 1, 0).field("tint"),
//!     Some(&[1.0f32, 0.0, 0.0, 1.0].into()),
//! );
//! ```
//!
//! # Views
//!
//! [`LayoutType::view_mut`] projects a zero-copy typed window into a
//! buffer: flat component slices for homogeneous types, per-field view
//! objects for structs. Views share the buffer's storage, so mutating a
//! view mutates the buffer - that is how per-frame updates of a single
//! field avoid re-encoding the whole struct.
//!
//! # Half precision
//!
//! The f16 codec is bit-level and intentionally loose at the edges:
//! subnormals collapse to signed zero and out-of-range magnitudes
//! mis-encode rather than clamp. See the [`f16`] module docs.

mod array;
mod buffer;
mod error;
pub mod f16;
mod layout;
mod math;
mod matrix;
mod scalar;
mod structure;
mod value;
mod vector;
mod view;

pub use array::ArrayType;
pub use buffer::{Buffer, allocate, count};
pub use error::LayoutError;
pub use f16::{F16Slice, F16SliceMut, decode_f16, encode_f16};
pub use layout::{
    LayoutType, mat2x2f, mat3x3f, mat4x4f, mat4x4h, vec2f, vec2h, vec3f, vec4f, vec4h,
};
pub use matrix::MatrixType;
pub use scalar::ScalarType;
pub use structure::{AlignPolicy, Field, StructType};
pub use value::Value;
pub use vector::{Dim, VecAlign, VectorType};
pub use view::{ScalarSlice, ScalarSliceMut, StructView, StructViewMut, View, ViewMut};
