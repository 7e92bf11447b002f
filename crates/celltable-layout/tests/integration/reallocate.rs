//! Reallocation integration tests
//!
//! These tests verify the final rectangles a table hands its widgets:
//! surplus distribution, shrinking, alignment, margins and spacing.

use std::rc::Rc;

use celltable_core::{Alignment, FixedSizeWidget, FlowWidget, Margin, Orientation};
use celltable_layout::{AttachOptions, PlacementOptions, Table};

use crate::support::*;

#[test]
fn test_empty_table_allocates_nothing() {
    let table = Table::new();
    assert!(table.reallocate(200.0, 100.0).is_empty());
}

#[test]
fn test_natural_grid_layout() {
    init_tracing();
    let mut table = Table::new();
    let ids: Vec<_> = [(0, 0), (1, 0), (0, 1), (1, 1)]
        .into_iter()
        .map(|(left, top)| table.add(fixed(50.0, 20.0), left, top, 1, 1).unwrap())
        .collect();

    let allocations = table.reallocate(106.0, 46.0);
    assert_eq!(allocations.len(), 4);

    assert_rect(rect_of(&allocations, ids[0]), 0.0, 0.0, 50.0, 20.0);
    assert_rect(rect_of(&allocations, ids[1]), 56.0, 0.0, 50.0, 20.0);
    assert_rect(rect_of(&allocations, ids[2]), 0.0, 26.0, 50.0, 20.0);
    assert_rect(rect_of(&allocations, ids[3]), 56.0, 26.0, 50.0, 20.0);
}

#[test]
fn test_surplus_goes_to_expanding_column() {
    let mut table = compact_table();
    let a = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();
    let b = table
        .add(
            Rc::new(FixedSizeWidget::new(50.0, 20.0).with_expand(Orientation::Horizontal, true)),
            1,
            0,
            1,
            1,
        )
        .unwrap();

    let allocations = table.reallocate(200.0, 20.0);
    assert_rect(rect_of(&allocations, a), 0.0, 0.0, 50.0, 20.0);
    assert_rect(rect_of(&allocations, b), 50.0, 0.0, 150.0, 20.0);
}

#[test]
fn test_surplus_remainder_goes_to_first_cell() {
    let mut table = compact_table();
    let options = PlacementOptions::default().expand(Orientation::Horizontal, true);
    let a = table.add_placement(fixed(50.0, 20.0), 0, 1, 0, 1, options).unwrap();
    let b = table.add_placement(fixed(50.0, 20.0), 1, 2, 0, 1, options).unwrap();

    let allocations = table.reallocate(201.0, 20.0);
    assert_rect(rect_of(&allocations, a), 0.0, 0.0, 101.0, 20.0);
    assert_rect(rect_of(&allocations, b), 101.0, 0.0, 100.0, 20.0);
}

#[test]
fn test_without_expanding_cells_surplus_is_unused() {
    let mut table = compact_table();
    let a = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();

    let allocations = table.reallocate(300.0, 300.0);
    assert_rect(rect_of(&allocations, a), 0.0, 0.0, 50.0, 20.0);
}

#[test]
fn test_shrink_takes_from_large_cells_first() {
    let mut table = compact_table();
    let a = table.add(fixed(100.0, 10.0), 0, 0, 1, 1).unwrap();
    let b = table.add(fixed(50.0, 10.0), 1, 0, 1, 1).unwrap();

    let allocations = table.reallocate(120.0, 10.0);
    assert_rect(rect_of(&allocations, a), 0.0, 0.0, 70.0, 10.0);
    assert_rect(rect_of(&allocations, b), 70.0, 0.0, 50.0, 10.0);
}

#[test]
fn test_collapsed_axis_yields_empty_rects() {
    init_tracing();
    let mut table = Table::new();
    let a = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();
    let b = table.add(fixed(50.0, 20.0), 1, 0, 1, 1).unwrap();

    let allocations = table.reallocate(5.0, 20.0);
    assert_rect(rect_of(&allocations, a), 0.0, 0.0, 0.0, 20.0);
    assert_rect(rect_of(&allocations, b), 6.0, 0.0, 0.0, 20.0);
}

#[test]
fn test_center_alignment_keeps_natural_width() {
    let mut table = compact_table();
    let small = table
        .add(
            Rc::new(
                FixedSizeWidget::new(30.0, 10.0)
                    .with_alignment(Orientation::Horizontal, Alignment::Center),
            ),
            0,
            0,
            1,
            1,
        )
        .unwrap();
    let wide = table.add(fixed(80.0, 10.0), 0, 1, 1, 1).unwrap();

    let allocations = table.reallocate(80.0, 20.0);
    assert_rect(rect_of(&allocations, small), 25.0, 0.0, 30.0, 10.0);
    assert_rect(rect_of(&allocations, wide), 0.0, 10.0, 80.0, 10.0);
}

#[test]
fn test_end_alignment_from_placement_options() {
    let mut table = compact_table();
    let options = PlacementOptions::default().align(Orientation::Horizontal, Alignment::End);
    let small = table.add_placement(fixed(30.0, 10.0), 0, 1, 0, 1, options).unwrap();
    table.add(fixed(80.0, 10.0), 0, 1, 1, 1).unwrap();

    let allocations = table.reallocate(80.0, 20.0);
    assert_rect(rect_of(&allocations, small), 50.0, 0.0, 30.0, 10.0);
}

#[test]
fn test_attach_without_fill_centers() {
    let mut table = compact_table();
    let small = table
        .attach(fixed(30.0, 10.0), 0, 1, 0, 1, Some(AttachOptions::EXPAND), None)
        .unwrap();

    // The only column expands to 100, the widget keeps its width centered in it
    let allocations = table.reallocate(100.0, 10.0);
    assert_rect(rect_of(&allocations, small), 35.0, 0.0, 30.0, 10.0);

    let filled = table
        .attach(
            fixed(30.0, 10.0),
            0,
            1,
            1,
            2,
            Some(AttachOptions::EXPAND | AttachOptions::FILL),
            None,
        )
        .unwrap();
    let allocations = table.reallocate(100.0, 20.0);
    assert_rect(rect_of(&allocations, filled), 0.0, 10.0, 100.0, 10.0);
}

#[test]
fn test_margins_are_removed_from_rect() {
    let mut table = compact_table();
    let id = table
        .add(
            Rc::new(FixedSizeWidget::new(40.0, 20.0).with_margin(Margin::new(5.0, 2.0, 3.0, 4.0))),
            0,
            0,
            1,
            1,
        )
        .unwrap();

    let allocations = table.reallocate(48.0, 26.0);
    assert_rect(rect_of(&allocations, id), 5.0, 2.0, 40.0, 20.0);
}

#[test]
fn test_spanning_widget_covers_inner_spacing() {
    init_tracing();
    let mut table = Table::new();
    let wide = table.add(fixed(100.0, 10.0), 0, 0, 1, 2).unwrap();
    let left = table.add(fixed(30.0, 10.0), 0, 1, 1, 1).unwrap();
    let right = table.add(fixed(30.0, 10.0), 1, 1, 1, 1).unwrap();

    // Columns grow to 47 each so that 47 + 6 + 47 covers the spanning widget
    let allocations = table.reallocate(100.0, 26.0);
    assert_rect(rect_of(&allocations, wide), 0.0, 0.0, 100.0, 10.0);
    assert_rect(rect_of(&allocations, left), 0.0, 16.0, 47.0, 10.0);
    assert_rect(rect_of(&allocations, right), 53.0, 16.0, 47.0, 10.0);
}

#[test]
fn test_rows_follow_allocated_widths() {
    let mut table = compact_table();
    let flow = table
        .add(Rc::new(FlowWidget::new(100.0, 10.0)), 0, 0, 1, 1)
        .unwrap();

    let allocations = table.reallocate(40.0, 100.0);
    assert_rect(rect_of(&allocations, flow), 0.0, 0.0, 40.0, 25.0);
}

#[test]
fn test_hidden_widgets_are_not_allocated() {
    let mut table = compact_table();
    let hidden = Rc::new(FixedSizeWidget::new(50.0, 20.0));
    hidden.set_visible(false);

    let shown = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();
    table.add(hidden, 1, 0, 1, 1).unwrap();

    let allocations = table.reallocate(50.0, 20.0);
    assert_eq!(allocations.len(), 1);
    assert_eq!(allocations[0].placement, shown);
}

#[test]
fn test_rects_stay_within_table() {
    init_tracing();
    let mut table = Table::new();
    table.add(fixed(70.0, 30.0), 0, 0, 2, 1).unwrap();
    table.add(fixed(45.0, 12.0), 1, 0, 1, 2).unwrap();
    table.add(Rc::new(FlowWidget::new(60.0, 20.0)), 1, 1, 1, 1).unwrap();
    table.add(fixed(33.0, 33.0), 2, 1, 1, 1).unwrap();

    let natural = table.preferred_size(
        celltable_core::SizeConstraint::Unconstrained,
        celltable_core::SizeConstraint::Unconstrained,
    );
    for allocation in table.reallocate(natural.width, natural.height) {
        assert_within(allocation.rect, natural.width, natural.height);
    }
}
