//! Fixed-length array type descriptors
//!
//! Homogeneous repetition of any element type (scalar, vector, matrix,
//! struct, or nested array), stored contiguously with the element's own
//! stride.

use crate::error::LayoutError;
use crate::layout::LayoutType;
use crate::value::Value;

/// Array layout type: `length` contiguous values of `element`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    element: Box<LayoutType>,
    length: usize,
}

impl ArrayType {
    /// Declare a fixed-length array.
    ///
    /// Fails fast with [`LayoutError::ZeroLengthArray`] if `length == 0`.
    pub fn new(element: LayoutType, length: usize) -> Result<Self, LayoutError> {
        if length == 0 {
            return Err(LayoutError::ZeroLengthArray);
        }
        Ok(Self {
            element: Box::new(element),
            length,
        })
    }

    pub fn element(&self) -> &LayoutType {
        &self.element
    }

    /// Fixed element count
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        false // length >= 1 by construction
    }

    pub fn byte_size(&self) -> usize {
        self.element.byte_size() * self.length
    }

    pub fn alignment(&self) -> usize {
        self.element.alignment()
    }

    /// Read element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len` or the buffer is too short.
    pub fn get(&self, bytes: &[u8], i: usize, offset: usize) -> Value {
        assert!(i < self.length, "array index {i} out of range");
        self.element.read_at(bytes, i, offset)
    }

    /// Write element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`, the buffer is too short, or the value shape
    /// does not match the element type.
    pub fn set(&self, bytes: &mut [u8], i: usize, value: &Value, offset: usize) {
        assert!(i < self.length, "array index {i} out of range");
        self.element.write_at(bytes, value, i, offset);
    }

    /// Read all elements in order as a [`Value::List`].
    pub fn read(&self, bytes: &[u8], offset: usize) -> Value {
        Value::List(
            (0..self.length)
                .map(|i| self.element.read_at(bytes, i, offset))
                .collect(),
        )
    }

    /// Write all elements in order from a [`Value::List`].
    ///
    /// # Panics
    /// Panics if the list length does not equal the array length.
    pub fn write(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        let items = value.expect_list(self.length, "array");
        for (i, item) in items.iter().enumerate() {
            self.element.write_at(bytes, item, i, offset);
        }
    }
}
