use insta::assert_snapshot;
use padviz::layout::FieldLayout;
use padviz::render::{render, MAX_VISUAL_BYTES};

#[test]
fn packed_head() {
    let fields = [
        FieldLayout::new("first_initial", 'F', 0, 1),
        FieldLayout::new("age", 'A', 4, 4),
        FieldLayout::new("height", 'H', 8, 8),
    ];

    assert_snapshot!("packed_head", render("packed_head", 16, &fields));
}

#[test]
fn record_tail() {
    let fields = [
        FieldLayout::new("name", 'N', 0, 16),
        FieldLayout::new("height", 'H', 16, 8),
        FieldLayout::new("age", 'A', 24, 4),
        FieldLayout::new("first_initial", 'F', 28, 1),
    ];

    assert_snapshot!("record_tail", render("record_tail", 32, &fields));
}

#[test]
fn oversized_aggregate_is_reported_not_drawn() {
    let rendered = render("colossus", 2 * MAX_VISUAL_BYTES, &[]);

    assert!(rendered.contains("colossus"));
    assert!(rendered.contains("128"));
    assert_eq!(rendered.lines().count(), 1);
}
