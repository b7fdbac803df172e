//! glam interop for staging math values
//!
//! Converts glam vectors and matrices into [`Value`] trees so CPU-side
//! math results (camera matrices, instance transforms) can be written
//! straight into a buffer. glam matrices are column-major; the codec
//! stores matrices row-major, so conversions go through `row()`.

use glam::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

use crate::value::Value;

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        v.to_array().into()
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        v.to_array().into()
    }
}

impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        v.to_array().into()
    }
}

impl From<IVec2> for Value {
    fn from(v: IVec2) -> Self {
        v.to_array().into()
    }
}

impl From<IVec3> for Value {
    fn from(v: IVec3) -> Self {
        v.to_array().into()
    }
}

impl From<IVec4> for Value {
    fn from(v: IVec4) -> Self {
        v.to_array().into()
    }
}

impl From<UVec2> for Value {
    fn from(v: UVec2) -> Self {
        v.to_array().into()
    }
}

impl From<UVec3> for Value {
    fn from(v: UVec3) -> Self {
        v.to_array().into()
    }
}

impl From<UVec4> for Value {
    fn from(v: UVec4) -> Self {
        v.to_array().into()
    }
}

impl From<Mat2> for Value {
    fn from(m: Mat2) -> Self {
        Value::List((0..2).map(|r| m.row(r).to_array().into()).collect())
    }
}

impl From<Mat3> for Value {
    fn from(m: Mat3) -> Self {
        Value::List((0..3).map(|r| m.row(r).to_array().into()).collect())
    }
}

impl From<Mat4> for Value {
    fn from(m: Mat4) -> Self {
        Value::List((0..4).map(|r| m.row(r).to_array().into()).collect())
    }
}
