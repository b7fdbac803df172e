//! Struct type descriptors
//!
//! Ordered, named, heterogeneous aggregates. Offsets are assigned by walking
//! fields in declaration order: each field's offset is the running cursor
//! padded up to the field's alignment, and the final size is the cursor
//! padded up to the struct's own alignment.
//!
//! # Layout example
//!
//! ```text
//! struct { tint: vec4<f32>, model: mat4x4<f32> }
//!
//! 0x00: tint  (16 bytes, align 4)
//! 0x10: model (64 bytes, align 4)
//! size: 80 bytes (already a multiple of the struct alignment, 4)
//! ```

use tracing::debug;

use crate::error::LayoutError;
use crate::layout::LayoutType;
use crate::value::Value;

/// Struct alignment rule.
///
/// The default reproduces the original behavior: every struct aligns to 4
/// bytes regardless of its members. The other modes opt into the stricter
/// rules used by shading-language uniform/storage blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignPolicy {
    /// Fixed 4-byte struct alignment
    #[default]
    Fixed4,
    /// Max of the member alignments
    MaxField,
    /// Max of the member alignments, rounded up to 16 (uniform-block style)
    MaxFieldRound16,
}

/// One placed struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Declared index; always equals the field's position in [`StructType::fields`]
    pub index: usize,
    pub ty: LayoutType,
    /// Computed byte offset from the start of the struct
    pub offset: usize,
}

/// Struct layout type: named fields with computed padded offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    fields: Vec<Field>,
    byte_size: usize,
    alignment: usize,
}

impl StructType {
    /// Declare a struct under the default alignment policy.
    ///
    /// Fields are `(name, index, type)` and must be passed in index order
    /// with `index` equal to the declaration position; anything else fails
    /// fast (see [`LayoutError`]).
    pub fn new<N, I>(fields: I) -> Result<Self, LayoutError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, usize, LayoutType)>,
    {
        Self::with_align(fields, AlignPolicy::default())
    }

    /// Declare a struct under an explicit alignment policy.
    pub fn with_align<N, I>(fields: I, policy: AlignPolicy) -> Result<Self, LayoutError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, usize, LayoutType)>,
    {
        let mut placed: Vec<Field> = Vec::new();
        let mut cursor = 0usize;

        for (position, (name, index, ty)) in fields.into_iter().enumerate() {
            let name = name.into();
            if index != position {
                return Err(LayoutError::FieldOutOfOrder {
                    name,
                    index,
                    expected: position,
                });
            }
            if placed.iter().any(|f| f.name == name) {
                return Err(LayoutError::DuplicateField(name));
            }

            let offset = cursor.next_multiple_of(ty.alignment());
            cursor = offset + ty.byte_size();
            placed.push(Field {
                name,
                index,
                ty,
                offset,
            });
        }

        if placed.is_empty() {
            return Err(LayoutError::EmptyStruct);
        }

        let alignment = match policy {
            AlignPolicy::Fixed4 => 4,
            AlignPolicy::MaxField => placed
                .iter()
                .map(|f| f.ty.alignment())
                .max()
                .unwrap_or(1),
            AlignPolicy::MaxFieldRound16 => placed
                .iter()
                .map(|f| f.ty.alignment())
                .max()
                .unwrap_or(1)
                .next_multiple_of(16),
        };
        let byte_size = cursor.next_multiple_of(alignment);

        debug!(
            "struct layout: {} fields, {} bytes, align {}",
            placed.len(),
            byte_size,
            alignment
        );

        Ok(Self {
            fields: placed,
            byte_size,
            alignment,
        })
    }

    /// Fields in declaration order; the slice position is the declared index.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Byte offset of a field, if it exists.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset)
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Read every field as a [`Value::Struct`] in declaration order.
    pub fn read(&self, bytes: &[u8], offset: usize) -> Value {
        Value::Struct(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.ty.read(bytes, offset + f.offset)))
                .collect(),
        )
    }

    /// Write every field from a [`Value::Struct`], matched by name.
    ///
    /// Entries that name no field are ignored.
    ///
    /// # Panics
    /// Panics if a field has no matching entry, or a field value's shape
    /// does not match its type.
    pub fn write(&self, bytes: &mut [u8], value: &Value, offset: usize) {
        let entries = value.expect_struct("struct");
        for f in &self.fields {
            let (_, field_value) = entries
                .iter()
                .find(|(name, _)| name == &f.name)
                .unwrap_or_else(|| panic!("missing value for struct field `{}`", f.name));
            f.ty.write(bytes, field_value, offset + f.offset);
        }
    }
}
