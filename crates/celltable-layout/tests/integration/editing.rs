//! Editing integration tests
//!
//! Structural edits followed by layout: row insertion, span changes,
//! widget replacement and removal.

use std::cell::Cell;
use std::rc::Rc;

use celltable_core::SizeConstraint;
use celltable_layout::{Table, TableError, TableEvent};

use crate::support::*;

const FREE: SizeConstraint = SizeConstraint::Unconstrained;

#[test]
fn test_inserted_empty_row_adds_no_height() {
    init_tracing();
    let mut table = Table::new();
    let first = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();
    let second = table.add(fixed(50.0, 20.0), 0, 1, 1, 1).unwrap();

    table.insert_row(1, 2);
    assert_eq!(table.placement(first).unwrap().top(), 0);
    assert_eq!(table.placement(second).unwrap().top(), 2);

    assert_size(table.preferred_size(FREE, FREE), 50.0, 46.0);
    let allocations = table.reallocate(50.0, 46.0);
    assert_rect(rect_of(&allocations, second), 0.0, 26.0, 50.0, 20.0);
}

#[test]
fn test_shift_keeps_rows_above() {
    let mut table = compact_table();
    let ids: Vec<_> = (0..4)
        .map(|top| table.add(fixed(10.0, 10.0), 0, top, 1, 1).unwrap())
        .collect();

    table.shift_rows_from(2, 3);

    let tops: Vec<_> = ids
        .iter()
        .map(|&id| table.placement(id).unwrap().top())
        .collect();
    assert_eq!(tops, vec![0, 1, 5, 6]);
}

#[test]
fn test_set_span_moves_widget() {
    let mut table = compact_table();
    table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();
    let moved = table.add(fixed(50.0, 20.0), 1, 0, 1, 1).unwrap();
    assert_size(table.preferred_size(FREE, FREE), 100.0, 20.0);

    table.set_span(moved, 0, 1, 1, 2).unwrap();
    assert_size(table.preferred_size(FREE, FREE), 50.0, 40.0);

    let allocations = table.reallocate(50.0, 40.0);
    assert_rect(rect_of(&allocations, moved), 0.0, 20.0, 50.0, 20.0);
}

#[test]
fn test_replace_widget_relayouts() {
    let mut table = compact_table();
    let id = table.add(fixed(50.0, 20.0), 0, 0, 1, 1).unwrap();

    table.replace_widget(id, fixed(80.0, 30.0)).unwrap();
    assert_size(table.preferred_size(FREE, FREE), 80.0, 30.0);
}

#[test]
fn test_remove_and_clear() {
    let mut table = compact_table();
    let kept = fixed(50.0, 20.0);
    let dropped = fixed(70.0, 20.0);
    table.add(kept.clone(), 0, 0, 1, 1).unwrap();
    let dropped_id = table.add(dropped.clone(), 1, 0, 1, 1).unwrap();

    assert!(table.remove(&dropped));
    assert!(table.placement(dropped_id).is_none());
    assert_size(table.preferred_size(FREE, FREE), 50.0, 20.0);

    table.clear();
    assert!(table.is_empty());
    assert_size(table.preferred_size(FREE, FREE), 0.0, 0.0);
}

#[test]
fn test_edits_on_removed_placement_fail() {
    let mut table = compact_table();
    let id = table.add(fixed(10.0, 10.0), 0, 0, 1, 1).unwrap();
    assert!(table.remove_placement(id).is_some());
    assert!(table.remove_placement(id).is_none());

    assert_eq!(
        table.replace_widget(id, fixed(10.0, 10.0)).err(),
        Some(TableError::PlacementNotFound(id))
    );
}

#[test]
fn test_listener_sees_every_edit() {
    let edits = Rc::new(Cell::new(0));
    let spacing_changes = Rc::new(Cell::new(0));

    let mut table = Table::new();
    {
        let edits = edits.clone();
        let spacing_changes = spacing_changes.clone();
        table.subscribe(move |event| match event {
            TableEvent::SpacingChanged { .. } => spacing_changes.set(spacing_changes.get() + 1),
            _ => edits.set(edits.get() + 1),
        });
    }

    let id = table.add(fixed(10.0, 10.0), 0, 0, 1, 1).unwrap();
    table.add(fixed(10.0, 10.0), 0, 1, 1, 1).unwrap();
    table.set_default_column_spacing(2.0);
    table.set_row_spacing(1, 4.0);
    table.insert_row(0, 1);
    table.replace_widget(id, fixed(20.0, 20.0)).unwrap();
    table.remove_placement(id);

    // 2 adds, 2 shifted placements, 1 replacement, 1 removal
    assert_eq!(edits.get(), 6);
    assert_eq!(spacing_changes.get(), 2);
}
