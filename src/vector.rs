//! Vector type descriptors
//!
//! Fixed-arity (2/3/4) homogeneous tuples of a scalar, stored contiguously.
//! Components are addressed by index or through the x/y/z/w accessors.

use crate::scalar::ScalarType;
use crate::value::Value;

/// Arity of a vector, or edge length of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Dim {
    /// Component count
    pub const fn count(self) -> usize {
        self as usize
    }
}

/// Alignment rule for a vector.
///
/// The default matches the original layout behavior (a vector aligns like
/// its component). `Natural` opts into the stricter rule some shading
/// languages use: vec2 aligns to 2x the component alignment, vec3 and vec4
/// to 4x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VecAlign {
    #[default]
    Component,
    Natural,
}

/// Vector layout type: `size` components of `component`, contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorType {
    size: Dim,
    component: ScalarType,
    align: VecAlign,
}

impl VectorType {
    /// Declare a vector with the default (component) alignment rule.
    ///
    /// Any scalar is a valid component, so this cannot fail.
    pub const fn new(size: Dim, component: ScalarType) -> Self {
        Self {
            size,
            component,
            align: VecAlign::Component,
        }
    }

    /// Declare a vector with an explicit alignment rule.
    pub const fn with_align(size: Dim, component: ScalarType, align: VecAlign) -> Self {
        Self {
            size,
            component,
            align,
        }
    }

    pub const fn size(&self) -> Dim {
        self.size
    }

    pub const fn component(&self) -> ScalarType {
        self.component
    }

    pub const fn byte_size(&self) -> usize {
        self.component.byte_size() * self.size.count()
    }

    pub const fn alignment(&self) -> usize {
        match self.align {
            VecAlign::Component => self.component.alignment(),
            VecAlign::Natural => match self.size {
                Dim::Two => 2 * self.component.alignment(),
                Dim::Three | Dim::Four => 4 * self.component.alignment(),
            },
        }
    }

    /// Read component `i`.
    ///
    /// # Panics
    /// Panics if `i >= size` or the buffer is too short.
    pub fn component_at(&self, bytes: &[u8], i: usize, offset: usize) -> Value {
        assert!(i < self.size.count(), "component index {i} out of range");
        self.component
            .read(bytes, offset + i * self.component.byte_size())
    }

    /// Write component `i`.
    ///
    /// # Panics
    /// Panics if `i >= size`, the buffer is too short, or the value kind
    /// does not match the component.
    pub fn set_component(&self, bytes: &mut [u8], i: usize, value: &Value, offset: usize) {
        assert!(i < self.size.count(), "component index {i} out of range");
        self.component
            .write(bytes, value, offset + i * self.component.byte_size());
    }

    pub fn x(&self, bytes: &[u8], offset: usize) -> Value {
        self.component_at(bytes, 0, offset)
    }

    pub fn y(&self, bytes: &[u8], offset: usize) -> Value {
        self.component_at(bytes, 1, offset)
    }

    pub fn z(&self, bytes: &[u8], offset: usize) -> Value {
        self.component_at(bytes, 2, offset)
    }

    pub fn w(&self, bytes: &[u8], offset: usize) -> Value {
        self.component_at(bytes, 3, offset)
    }

    pub fn set_x(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        self.set_component(bytes, 0, value, offset);
    }

    pub fn set_y(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        self.set_component(bytes, 1, value, offset);
    }

    pub fn set_z(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        self.set_component(bytes, 2, value, offset);
    }

    pub fn set_w(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        self.set_component(bytes, 3, value, offset);
    }

    /// Read all components in order as a [`Value::List`].
    pub fn read(&self, bytes: &[u8], offset: usize) -> Value {
        Value::List(
            (0..self.size.count())
                .map(|i| self.component_at(bytes, i, offset))
                .collect(),
        )
    }

    /// Write all components in order from a [`Value::List`].
    ///
    /// # Panics
    /// Panics if the list length does not equal the vector arity.
    pub fn write(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        let items = value.expect_list(self.size.count(), "vector");
        for (i, item) in items.iter().enumerate() {
            self.set_component(bytes, i, item, offset);
        }
    }
}
