use crate::layout::{StructLayout, TypeLayout};
use crate::render;
use crate::subjects::{self, Name};
use std::os::raw::{c_char, c_double, c_int};

fn fact_block(entries: &[(&str, TypeLayout)]) -> String {
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0)
        + "size_of()".len();

    let mut out = String::new();

    for (label, layout) in entries {
        let size_label = format!("size_of({})", label);
        let align_label = format!("align_of({})", label);

        out.push_str(&format!(
            "{:<width$} = {}, {:<align_width$} = {}\n",
            size_label,
            layout.size,
            align_label,
            layout.align,
            width = width,
            align_width = width + 1,
        ));
    }

    out
}

fn offsets_block(subject: &StructLayout) -> String {
    let width = subject.fields.iter().map(|f| f.name.len()).max().unwrap_or(0)
        + subject.name.len()
        + "offset_of(, )".len();

    let mut out = String::new();

    for field in &subject.fields {
        let label = format!("offset_of({}, {})", subject.name, field.name);
        out.push_str(&format!(
            "{:<width$} = {}\n",
            label,
            field.offset,
            width = width
        ));
    }

    let size_label = format!("size_of({})", subject.name);
    let align_label = format!("align_of({})", subject.name);

    out.push_str(&format!(
        "{:<width$} = {}\n",
        size_label,
        subject.layout.size,
        width = width
    ));
    out.push_str(&format!(
        "{:<width$} = {}\n",
        align_label,
        subject.layout.align,
        width = width
    ));

    out
}

/// The full fixed report: primitive size/alignment facts, field offsets of
/// the padded aggregate, and one visualization block per aggregate.
pub fn report() -> String {
    let mut out = String::new();

    out.push_str(&fact_block(&[
        ("c_char", TypeLayout::of::<c_char>()),
        ("c_int", TypeLayout::of::<c_int>()),
        ("c_double", TypeLayout::of::<c_double>()),
        ("Name", TypeLayout::of::<Name>()),
    ]));

    out.push('\n');
    out.push_str(&offsets_block(&subjects::human_layout()));

    for subject in subjects::subjects() {
        out.push('\n');
        out.push_str(&render::render(
            subject.name,
            subject.layout.size,
            &subject.fields,
        ));
    }

    out
}
