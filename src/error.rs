//! Layout declaration error types

use crate::scalar::ScalarType;

/// Errors raised while declaring a layout type.
///
/// All of these surface at construction time. Once a descriptor exists it is
/// a pure value and its per-call operations do not return errors; violated
/// call preconditions (short buffers, mismatched value shapes) panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Matrix declared over a non-numeric component (bool)
    #[error("matrix component must be a numeric scalar, got {0:?}")]
    InvalidComponentType(ScalarType),

    /// Struct field declared out of index order
    #[error("struct field `{name}` has index {index}, expected {expected} (declare fields in index order)")]
    FieldOutOfOrder {
        name: String,
        index: usize,
        expected: usize,
    },

    /// Two struct fields share a name
    #[error("duplicate struct field `{0}`")]
    DuplicateField(String),

    /// Array declared with length 0
    #[error("array length must be at least 1")]
    ZeroLengthArray,

    /// Struct declared with no fields
    #[error("struct must declare at least one field")]
    EmptyStruct,
}
