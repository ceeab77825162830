use serde::Serialize;
use std::mem;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub struct TypeLayout {
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    pub fn of<T>() -> TypeLayout {
        TypeLayout {
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
        }
    }
}

/// One aggregate member's byte range, plus the single character used to mark
/// its bytes in the visualization.
///
/// Offsets and sizes come straight from the compiler. Nothing here computes
/// layout; ranges are taken on faith to be in bounds and non-overlapping.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub struct FieldLayout {
    pub name: &'static str,
    pub tag: char,
    pub offset: usize,
    pub size: usize,
}

impl FieldLayout {
    pub fn new(name: &'static str, tag: char, offset: usize, size: usize) -> FieldLayout {
        FieldLayout {
            name,
            tag,
            offset,
            size,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct StructLayout {
    pub name: &'static str,
    pub layout: TypeLayout,
    pub fields: Vec<FieldLayout>,
}
