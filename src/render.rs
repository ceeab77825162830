use crate::layout::FieldLayout;

/// Largest aggregate the visualization will draw. Anything bigger gets a
/// one-line diagnostic instead of a byte map.
pub const MAX_VISUAL_BYTES: usize = 64;

pub const PADDING_TAG: char = 'P';

const UNCLAIMED: char = '.';

/// Build one character per byte of the aggregate. Every byte starts out
/// unclaimed, each field stamps its tag over its own range, and whatever is
/// still unclaimed afterwards is padding the compiler inserted.
pub fn byte_map(total_size: usize, fields: &[FieldLayout]) -> Vec<char> {
    let mut map = vec![UNCLAIMED; total_size];

    for field in fields {
        for slot in &mut map[field.offset..field.end()] {
            *slot = field.tag;
        }
    }

    for slot in &mut map {
        if *slot == UNCLAIMED {
            *slot = PADDING_TAG;
        }
    }

    map
}

fn column_width(total_size: usize) -> usize {
    let mut width = 1;
    let mut max_index = total_size.saturating_sub(1);

    while max_index >= 10 {
        width += 1;
        max_index /= 10;
    }

    width.max(2)
}

/// Render the byte map of one aggregate: a byte-index row, a tag row with
/// the same column count, and a legend naming every tag.
///
/// Rendering never touches memory past the map it allocates. The only error
/// path is an aggregate larger than [`MAX_VISUAL_BYTES`], which degrades to
/// a single diagnostic line.
pub fn render(title: &str, total_size: usize, fields: &[FieldLayout]) -> String {
    if total_size > MAX_VISUAL_BYTES {
        return format!(
            "layout of {} is {} bytes, larger than the {} byte visual buffer\n",
            title, total_size, MAX_VISUAL_BYTES
        );
    }

    let map = byte_map(total_size, fields);
    let width = column_width(total_size);

    let mut out = String::new();

    out.push_str(&format!(
        "Byte offsets 0..{} of {}:\n",
        total_size.saturating_sub(1),
        title
    ));

    for i in 0..total_size {
        out.push_str(&format!("{:>width$}", i, width = width));
    }
    out.push('\n');

    for tag in &map {
        out.push_str(&format!("{:>width$}", tag, width = width));
    }
    out.push('\n');

    out.push_str("Legend: ");
    for field in fields {
        out.push_str(&format!("{}={}, ", field.tag, field.name));
    }
    out.push_str(&format!("{}=padding\n", PADDING_TAG));

    out
}
