//! Zero-copy typed views into buffer storage
//!
//! A view shares the buffer's bytes: writes through a view are writes into
//! the buffer, which is how per-field in-place updates avoid re-encoding a
//! whole struct every frame.
//!
//! Homogeneous types (scalars, vectors, matrices, and arrays of them)
//! project to a flat component slice: viewing 6 `vec2<f32>` values yields
//! one `&[f32]` of 12 components, cast straight out of the byte storage
//! with `bytemuck`. Struct views are built per field with `split_at_mut`,
//! recursing into nested structs.
//!
//! Casts require the storage to be aligned for the component type; buffers
//! from [`allocate`](crate::allocate) always are.

use crate::f16::{F16Slice, F16SliceMut};
use crate::layout::LayoutType;
use crate::scalar::ScalarType;
use crate::structure::StructType;
use crate::value::Value;

/// Read-only flat component view of one scalar kind.
#[derive(Debug)]
pub enum ScalarSlice<'a> {
    /// Bool storage words (0 = false, nonzero = true)
    Bool(&'a [u32]),
    Sint32(&'a [i32]),
    Uint32(&'a [u32]),
    Float16(F16Slice<'a>),
    Float32(&'a [f32]),
}

impl ScalarSlice<'_> {
    pub fn len(&self) -> usize {
        match self {
            ScalarSlice::Bool(s) => s.len(),
            ScalarSlice::Sint32(s) => s.len(),
            ScalarSlice::Uint32(s) => s.len(),
            ScalarSlice::Float16(s) => s.len(),
            ScalarSlice::Float32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode component `i`.
    pub fn get(&self, i: usize) -> Value {
        match self {
            ScalarSlice::Bool(s) => Value::Bool(s[i] != 0),
            ScalarSlice::Sint32(s) => Value::Sint(s[i]),
            ScalarSlice::Uint32(s) => Value::Uint(s[i]),
            ScalarSlice::Float16(s) => Value::Float(s.get(i)),
            ScalarSlice::Float32(s) => Value::Float(s[i]),
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            ScalarSlice::Float32(s) => Some(s),
            _ => None,
        }
    }
}

/// Mutable flat component view of one scalar kind.
#[derive(Debug)]
pub enum ScalarSliceMut<'a> {
    /// Bool storage words (0 = false, nonzero = true)
    Bool(&'a mut [u32]),
    Sint32(&'a mut [i32]),
    Uint32(&'a mut [u32]),
    Float16(F16SliceMut<'a>),
    Float32(&'a mut [f32]),
}

impl ScalarSliceMut<'_> {
    pub fn len(&self) -> usize {
        match self {
            ScalarSliceMut::Bool(s) => s.len(),
            ScalarSliceMut::Sint32(s) => s.len(),
            ScalarSliceMut::Uint32(s) => s.len(),
            ScalarSliceMut::Float16(s) => s.len(),
            ScalarSliceMut::Float32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode component `i`.
    pub fn get(&self, i: usize) -> Value {
        match self {
            ScalarSliceMut::Bool(s) => Value::Bool(s[i] != 0),
            ScalarSliceMut::Sint32(s) => Value::Sint(s[i]),
            ScalarSliceMut::Uint32(s) => Value::Uint(s[i]),
            ScalarSliceMut::Float16(s) => Value::Float(s.get(i)),
            ScalarSliceMut::Float32(s) => Value::Float(s[i]),
        }
    }

    /// Encode `value` into component `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds or the value kind does not match.
    pub fn set(&mut self, i: usize, value: &Value) {
        match self {
            ScalarSliceMut::Bool(s) => {
                s[i] = if value.expect_bool("bool component") { 1 } else { 0 }
            }
            ScalarSliceMut::Sint32(s) => s[i] = value.expect_i32("i32 component"),
            ScalarSliceMut::Uint32(s) => s[i] = value.expect_u32("u32 component"),
            ScalarSliceMut::Float16(s) => s.set(i, value.expect_f32("f16 component")),
            ScalarSliceMut::Float32(s) => s[i] = value.expect_f32("f32 component"),
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            ScalarSliceMut::Float32(s) => Some(s),
            _ => None,
        }
    }

    /// Direct mutable `f32` access, for handing to math routines.
    pub fn as_f32_mut(&mut self) -> Option<&mut [f32]> {
        match self {
            ScalarSliceMut::Float32(s) => Some(&mut s[..]),
            _ => None,
        }
    }

    pub fn as_u32_mut(&mut self) -> Option<&mut [u32]> {
        match self {
            ScalarSliceMut::Uint32(s) => Some(&mut s[..]),
            _ => None,
        }
    }

    pub fn as_i32_mut(&mut self) -> Option<&mut [i32]> {
        match self {
            ScalarSliceMut::Sint32(s) => Some(&mut s[..]),
            _ => None,
        }
    }
}

/// Read-only typed view of any layout type.
#[derive(Debug)]
pub enum View<'a> {
    /// Flat component view (scalars, vectors, matrices, arrays of them)
    Scalars(ScalarSlice<'a>),
    /// One view object per struct value
    Structs(Vec<StructView<'a>>),
}

impl<'a> View<'a> {
    pub fn as_scalars(&self) -> Option<&ScalarSlice<'a>> {
        match self {
            View::Scalars(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        self.as_scalars()?.as_f32()
    }

    pub fn as_structs(&self) -> Option<&[StructView<'a>]> {
        match self {
            View::Structs(s) => Some(s),
            _ => None,
        }
    }
}

/// Mutable typed view of any layout type.
#[derive(Debug)]
pub enum ViewMut<'a> {
    /// Flat component view (scalars, vectors, matrices, arrays of them)
    Scalars(ScalarSliceMut<'a>),
    /// One view object per struct value
    Structs(Vec<StructViewMut<'a>>),
}

impl<'a> ViewMut<'a> {
    pub fn as_scalars_mut(&mut self) -> Option<&mut ScalarSliceMut<'a>> {
        match self {
            ViewMut::Scalars(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f32_mut(&mut self) -> Option<&mut [f32]> {
        self.as_scalars_mut()?.as_f32_mut()
    }

    pub fn as_structs_mut(&mut self) -> Option<&mut [StructViewMut<'a>]> {
        match self {
            ViewMut::Structs(s) => Some(s),
            _ => None,
        }
    }
}

/// Per-field view object of one struct value.
#[derive(Debug)]
pub struct StructView<'a> {
    fields: Vec<(String, View<'a>)>,
}

impl<'a> StructView<'a> {
    pub fn fields(&self) -> &[(String, View<'a>)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&View<'a>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// Per-field mutable view object of one struct value.
///
/// Lets a caller mutate a single field (say, a 4x4 matrix) in place without
/// re-encoding the rest of the struct.
#[derive(Debug)]
pub struct StructViewMut<'a> {
    fields: Vec<(String, ViewMut<'a>)>,
}

impl<'a> StructViewMut<'a> {
    pub fn fields_mut(&mut self) -> &mut [(String, ViewMut<'a>)] {
        &mut self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ViewMut<'a>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut ViewMut<'a>> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

impl LayoutType {
    /// Project a read-only typed view over `len` contiguous values starting
    /// at `offset`.
    ///
    /// Arrays compose with their element's view: an array of 6 `vec2<f32>`
    /// viewed as one value is a flat 12-component view.
    ///
    /// # Panics
    /// Panics if the buffer is too short or the storage is misaligned for
    /// the component type.
    pub fn view<'a>(&self, bytes: &'a [u8], offset: usize, len: usize) -> View<'a> {
        match self {
            LayoutType::Array(a) => a.element().view(bytes, offset, a.len() * len),
            LayoutType::Struct(s) => View::Structs(
                (0..len)
                    .map(|i| struct_view(s, bytes, offset + i * s.byte_size()))
                    .collect(),
            ),
            _ => {
                let (kind, per_value) = flat_shape(self);
                View::Scalars(scalar_slice(kind, bytes, offset, per_value * len))
            }
        }
    }

    /// Project a mutable typed view over `len` contiguous values starting
    /// at `offset`. See [`view`](Self::view).
    ///
    /// # Panics
    /// Panics if the buffer is too short or the storage is misaligned for
    /// the component type.
    pub fn view_mut<'a>(&self, bytes: &'a mut [u8], offset: usize, len: usize) -> ViewMut<'a> {
        match self {
            LayoutType::Array(a) => a.element().view_mut(bytes, offset, a.len() * len),
            LayoutType::Struct(s) => {
                let size = s.byte_size();
                let span = &mut bytes[offset..offset + size * len];
                let mut views = Vec::with_capacity(len);
                let mut rest = span;
                for _ in 0..len {
                    let (element, tail) = rest.split_at_mut(size);
                    rest = tail;
                    views.push(struct_view_mut(s, element));
                }
                ViewMut::Structs(views)
            }
            _ => {
                let (kind, per_value) = flat_shape(self);
                ViewMut::Scalars(scalar_slice_mut(kind, bytes, offset, per_value * len))
            }
        }
    }
}

/// Component scalar and components-per-value for the flat (non-struct,
/// non-array) kinds.
fn flat_shape(ty: &LayoutType) -> (ScalarType, usize) {
    match ty {
        LayoutType::Scalar(s) => (*s, 1),
        LayoutType::Vector(v) => (v.component(), v.size().count()),
        LayoutType::Matrix(m) => (m.component(), m.dim().count() * m.dim().count()),
        // Arrays recurse and structs take the view-object path before this
        LayoutType::Array(_) | LayoutType::Struct(_) => {
            unreachable!("flat_shape called on a composite type")
        }
    }
}

fn scalar_slice(kind: ScalarType, bytes: &[u8], offset: usize, components: usize) -> ScalarSlice<'_> {
    let span = &bytes[offset..offset + components * kind.byte_size()];
    match kind {
        ScalarType::Bool => ScalarSlice::Bool(bytemuck::cast_slice(span)),
        ScalarType::Sint32 => ScalarSlice::Sint32(bytemuck::cast_slice(span)),
        ScalarType::Uint32 => ScalarSlice::Uint32(bytemuck::cast_slice(span)),
        ScalarType::Float16 => ScalarSlice::Float16(F16Slice::new(span)),
        ScalarType::Float32 => ScalarSlice::Float32(bytemuck::cast_slice(span)),
    }
}

fn scalar_slice_mut(
    kind: ScalarType,
    bytes: &mut [u8],
    offset: usize,
    components: usize,
) -> ScalarSliceMut<'_> {
    let span = &mut bytes[offset..offset + components * kind.byte_size()];
    match kind {
        ScalarType::Bool => ScalarSliceMut::Bool(bytemuck::cast_slice_mut(span)),
        ScalarType::Sint32 => ScalarSliceMut::Sint32(bytemuck::cast_slice_mut(span)),
        ScalarType::Uint32 => ScalarSliceMut::Uint32(bytemuck::cast_slice_mut(span)),
        ScalarType::Float16 => ScalarSliceMut::Float16(F16SliceMut::new(span)),
        ScalarType::Float32 => ScalarSliceMut::Float32(bytemuck::cast_slice_mut(span)),
    }
}

fn struct_view<'a>(s: &StructType, bytes: &'a [u8], base: usize) -> StructView<'a> {
    StructView {
        fields: s
            .fields()
            .iter()
            .map(|f| (f.name.clone(), f.ty.view(bytes, base + f.offset, 1)))
            .collect(),
    }
}

fn struct_view_mut<'a>(s: &StructType, element: &'a mut [u8]) -> StructViewMut<'a> {
    let mut fields = Vec::with_capacity(s.fields().len());
    let mut rest = element;
    let mut pos = 0;
    for f in s.fields() {
        // Drop any padding before the field, then split off its bytes
        let (_padding, tail) = rest.split_at_mut(f.offset - pos);
        let (field_bytes, tail) = tail.split_at_mut(f.ty.byte_size());
        rest = tail;
        pos = f.offset + f.ty.byte_size();
        fields.push((f.name.clone(), f.ty.view_mut(field_bytes, 0, 1)));
    }
    StructViewMut { fields }
}
