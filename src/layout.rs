//! The closed set of layout types and their shared operation contract
//!
//! [`LayoutType`] is a tagged union over every kind the codec understands,
//! so dispatch over descriptor kind is an exhaustive match rather than an
//! open class hierarchy. Descriptors are pure values: byte size and
//! alignment are fixed at declaration and equality is structural.

use crate::array::ArrayType;
use crate::matrix::MatrixType;
use crate::scalar::ScalarType;
use crate::structure::StructType;
use crate::value::Value;
use crate::vector::{Dim, VectorType};

/// A memory-layout descriptor: scalar, vector, matrix, array, or struct.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutType {
    Scalar(ScalarType),
    Vector(VectorType),
    Matrix(MatrixType),
    Array(ArrayType),
    Struct(StructType),
}

impl LayoutType {
    /// Bytes occupied by one value of this type
    pub fn byte_size(&self) -> usize {
        match self {
            LayoutType::Scalar(s) => s.byte_size(),
            LayoutType::Vector(v) => v.byte_size(),
            LayoutType::Matrix(m) => m.byte_size(),
            LayoutType::Array(a) => a.byte_size(),
            LayoutType::Struct(s) => s.byte_size(),
        }
    }

    /// Byte boundary a value's start offset must satisfy
    pub fn alignment(&self) -> usize {
        match self {
            LayoutType::Scalar(s) => s.alignment(),
            LayoutType::Vector(v) => v.alignment(),
            LayoutType::Matrix(m) => m.alignment(),
            LayoutType::Array(a) => a.alignment(),
            LayoutType::Struct(s) => s.alignment(),
        }
    }

    /// Decode one value starting at `offset`.
    ///
    /// # Panics
    /// Panics if the buffer is too short.
    pub fn read(&self, bytes: &[u8], offset: usize) -> Value {
        match self {
            LayoutType::Scalar(s) => s.read(bytes, offset),
            LayoutType::Vector(v) => v.read(bytes, offset),
            LayoutType::Matrix(m) => m.read(bytes, offset),
            LayoutType::Array(a) => a.read(bytes, offset),
            LayoutType::Struct(s) => s.read(bytes, offset),
        }
    }

    /// Encode one value at `offset`. Exact inverse of [`read`](Self::read)
    /// for representable values (half-precision caveats aside).
    ///
    /// # Panics
    /// Panics if the buffer is too short or the value shape does not match
    /// this type.
    pub fn write(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        match self {
            LayoutType::Scalar(s) => s.write(bytes, value, offset),
            LayoutType::Vector(v) => v.write(bytes, value, offset),
            LayoutType::Matrix(m) => m.write(bytes, value, offset),
            LayoutType::Array(a) => a.write(bytes, value, offset),
            LayoutType::Struct(s) => s.write(bytes, value, offset),
        }
    }

    /// Decode element `index` of a packed run of this type starting at
    /// `offset`, i.e. `read` at `offset + index * byte_size`.
    pub fn read_at(&self, bytes: &[u8], index: usize, offset: usize) -> Value {
        self.read(bytes, offset + index * self.byte_size())
    }

    /// Encode element `index` of a packed run of this type starting at
    /// `offset`, i.e. `write` at `offset + index * byte_size`.
    pub fn write_at(&self, bytes: &mut [u8], value: &Value, index: usize, offset: usize) {
        self.write(bytes, value, offset + index * self.byte_size());
    }
}

impl From<ScalarType> for LayoutType {
    fn from(s: ScalarType) -> Self {
        LayoutType::Scalar(s)
    }
}

impl From<VectorType> for LayoutType {
    fn from(v: VectorType) -> Self {
        LayoutType::Vector(v)
    }
}

impl From<MatrixType> for LayoutType {
    fn from(m: MatrixType) -> Self {
        LayoutType::Matrix(m)
    }
}

impl From<ArrayType> for LayoutType {
    fn from(a: ArrayType) -> Self {
        LayoutType::Array(a)
    }
}

impl From<StructType> for LayoutType {
    fn from(s: StructType) -> Self {
        LayoutType::Struct(s)
    }
}

// =============================================================================
// Shorthand Constructors
// =============================================================================

/// `vec2<f32>`
pub fn vec2f() -> LayoutType {
    LayoutType::Vector(VectorType::new(Dim::Two, ScalarType::Float32))
}

/// `vec3<f32>`
pub fn vec3f() -> LayoutType {
    LayoutType::Vector(VectorType::new(Dim::Three, ScalarType::Float32))
}

/// `vec4<f32>`
pub fn vec4f() -> LayoutType {
    LayoutType::Vector(VectorType::new(Dim::Four, ScalarType::Float32))
}

/// `vec2<f16>`
pub fn vec2h() -> LayoutType {
    LayoutType::Vector(VectorType::new(Dim::Two, ScalarType::Float16))
}

/// `vec4<f16>`
pub fn vec4h() -> LayoutType {
    LayoutType::Vector(VectorType::new(Dim::Four, ScalarType::Float16))
}

/// `mat2x2<f32>`
pub fn mat2x2f() -> LayoutType {
    LayoutType::Matrix(MatrixType::from_parts(Dim::Two, ScalarType::Float32))
}

/// `mat3x3<f32>`
pub fn mat3x3f() -> LayoutType {
    LayoutType::Matrix(MatrixType::from_parts(Dim::Three, ScalarType::Float32))
}

/// `mat4x4<f32>`
pub fn mat4x4f() -> LayoutType {
    LayoutType::Matrix(MatrixType::from_parts(Dim::Four, ScalarType::Float32))
}

/// `mat4x4<f16>`
pub fn mat4x4h() -> LayoutType {
    LayoutType::Matrix(MatrixType::from_parts(Dim::Four, ScalarType::Float16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::StructType;

    #[test]
    fn test_shorthand_sizes() {
        assert_eq!(vec2f().byte_size(), 8);
        assert_eq!(vec3f().byte_size(), 12);
        assert_eq!(vec4f().byte_size(), 16);
        assert_eq!(vec2h().byte_size(), 4);
        assert_eq!(vec4h().byte_size(), 8);
        assert_eq!(mat2x2f().byte_size(), 16);
        assert_eq!(mat3x3f().byte_size(), 36);
        assert_eq!(mat4x4f().byte_size(), 64);
        assert_eq!(mat4x4h().byte_size(), 32);
    }

    #[test]
    fn test_read_at_uses_packed_stride() {
        // Two packed vec2<f32> values without an array descriptor
        let ty = vec2f();
        let mut bytes = [0u8; 16];
        ty.write_at(&mut bytes, &[1.0f32, 2.0].into(), 0, 0);
        ty.write_at(&mut bytes, &[3.0f32, 4.0].into(), 1, 0);

        assert_eq!(ty.read_at(&bytes, 0, 0), [1.0f32, 2.0].into());
        assert_eq!(ty.read_at(&bytes, 1, 0), [3.0f32, 4.0].into());
        // Element 1 starts at byte 8
        assert_eq!(&bytes[8..12], &3.0f32.to_le_bytes());
    }

    #[test]
    fn test_read_at_with_base_offset() {
        let ty = LayoutType::Scalar(ScalarType::Uint32);
        let mut bytes = [0u8; 16];
        ty.write_at(&mut bytes, &Value::Uint(11), 2, 4);
        // offset 4 + index 2 * 4 bytes = byte 12
        assert_eq!(&bytes[12..16], &11u32.to_le_bytes());
        assert_eq!(ty.read_at(&bytes, 2, 4), Value::Uint(11));
    }

    #[test]
    fn test_structural_equality() {
        let a = StructType::new([("p", 0, vec3f())]).unwrap();
        let b = StructType::new([("p", 0, vec3f())]).unwrap();
        assert_eq!(LayoutType::Struct(a), LayoutType::Struct(b));
    }
}
