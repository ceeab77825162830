use crate::layout::{FieldLayout, StructLayout, TypeLayout};
use std::mem;
use std::os::raw::{c_char, c_double, c_int};

/// Two pointers. 16 bytes on 64-bit targets, no padding anywhere.
#[repr(C)]
pub struct Name {
    pub first: *const c_char,
    pub last: *const c_char,
}

/// Members are deliberately ordered so the compiler has to pad: the char is
/// followed by an int with alignment 4, which leaves a 3 byte hole.
#[repr(C)]
pub struct Human {
    pub first_initial: c_char,
    pub age: c_int,
    pub height: c_double,
    pub name: Name,
}

pub fn name_layout() -> StructLayout {
    StructLayout {
        name: "Name",
        layout: TypeLayout::of::<Name>(),
        fields: vec![
            FieldLayout::new(
                "first",
                'F',
                mem::offset_of!(Name, first),
                mem::size_of::<*const c_char>(),
            ),
            FieldLayout::new(
                "last",
                'L',
                mem::offset_of!(Name, last),
                mem::size_of::<*const c_char>(),
            ),
        ],
    }
}

pub fn human_layout() -> StructLayout {
    StructLayout {
        name: "Human",
        layout: TypeLayout::of::<Human>(),
        fields: vec![
            FieldLayout::new(
                "first_initial",
                'F',
                mem::offset_of!(Human, first_initial),
                mem::size_of::<c_char>(),
            ),
            FieldLayout::new(
                "age",
                'A',
                mem::offset_of!(Human, age),
                mem::size_of::<c_int>(),
            ),
            FieldLayout::new(
                "height",
                'H',
                mem::offset_of!(Human, height),
                mem::size_of::<c_double>(),
            ),
            FieldLayout::new(
                "name",
                'N',
                mem::offset_of!(Human, name),
                mem::size_of::<Name>(),
            ),
        ],
    }
}

/// The aggregates the report studies, in print order.
pub fn subjects() -> Vec<StructLayout> {
    vec![name_layout(), human_layout()]
}
