//! Matrix type descriptors
//!
//! Square (2x2/3x3/4x4) grids of a numeric scalar, stored row-major: the
//! cell at (row, col) lives at flat index `row * dim + col`. Bool components
//! are rejected at declaration time.

use crate::error::LayoutError;
use crate::scalar::ScalarType;
use crate::value::Value;
use crate::vector::Dim;

/// Matrix layout type: `dim x dim` cells of `component`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixType {
    dim: Dim,
    component: ScalarType,
}

impl MatrixType {
    /// Declare a square matrix.
    ///
    /// Fails fast with [`LayoutError::InvalidComponentType`] if `component`
    /// is not numeric.
    pub fn new(dim: Dim, component: ScalarType) -> Result<Self, LayoutError> {
        if !component.is_numeric() {
            return Err(LayoutError::InvalidComponentType(component));
        }
        Ok(Self { dim, component })
    }

    /// Construct without the numeric check. Callers guarantee `component`
    /// is numeric; used by the crate's shorthand constructors.
    pub(crate) const fn from_parts(dim: Dim, component: ScalarType) -> Self {
        Self { dim, component }
    }

    pub const fn dim(&self) -> Dim {
        self.dim
    }

    pub const fn component(&self) -> ScalarType {
        self.component
    }

    pub const fn byte_size(&self) -> usize {
        self.component.byte_size() * self.dim.count() * self.dim.count()
    }

    pub const fn alignment(&self) -> usize {
        self.component.alignment()
    }

    fn cell_offset(&self, row: usize, col: usize) -> usize {
        let dim = self.dim.count();
        assert!(row < dim && col < dim, "cell ({row}, {col}) out of range");
        (row * dim + col) * self.component.byte_size()
    }

    /// Read the cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if the cell is out of range or the buffer is too short.
    pub fn get(&self, bytes: &[u8], row: usize, col: usize, offset: usize) -> Value {
        self.component
            .read(bytes, offset + self.cell_offset(row, col))
    }

    /// Write the cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if the cell is out of range, the buffer is too short, or the
    /// value kind does not match the component.
    pub fn set(&self, bytes: &mut [u8], row: usize, col: usize, value: &Value, offset: usize) {
        self.component
            .write(bytes, value, offset + self.cell_offset(row, col));
    }

    /// Read the whole matrix as a list of row lists.
    pub fn read(&self, bytes: &[u8], offset: usize) -> Value {
        let dim = self.dim.count();
        Value::List(
            (0..dim)
                .map(|row| {
                    Value::List((0..dim).map(|col| self.get(bytes, row, col, offset)).collect())
                })
                .collect(),
        )
    }

    /// Write the whole matrix from a list of row lists.
    ///
    /// # Panics
    /// Panics if the nested list shape is not `dim` rows of `dim` cells.
    pub fn write(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        let dim = self.dim.count();
        let rows = value.expect_list(dim, "matrix");
        for (row, row_value) in rows.iter().enumerate() {
            let cells = row_value.expect_list(dim, "matrix row");
            for (col, cell) in cells.iter().enumerate() {
                self.set(bytes, row, col, cell, offset);
            }
        }
    }
}
