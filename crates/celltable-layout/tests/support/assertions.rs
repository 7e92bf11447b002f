//! Custom assertions for layout tests.

use celltable_core::{Rect, Size};

/// Assert that a rectangle matches exactly.
#[track_caller]
pub fn assert_rect(actual: Rect, x: f64, y: f64, width: f64, height: f64) {
    let expected = Rect::new(x, y, width, height);
    assert_eq!(
        actual, expected,
        "Rect mismatch: expected ({}, {}, {}x{}), got ({}, {}, {}x{})",
        expected.x, expected.y, expected.width, expected.height, actual.x, actual.y, actual.width, actual.height
    );
}

/// Assert that a size matches exactly.
#[track_caller]
pub fn assert_size(actual: Size, width: f64, height: f64) {
    assert!(
        actual.width == width && actual.height == height,
        "Size mismatch: expected {}x{}, got {}x{}",
        width,
        height,
        actual.width,
        actual.height
    );
}

/// Assert that a rectangle lies inside the table bounds.
#[track_caller]
pub fn assert_within(rect: Rect, width: f64, height: f64) {
    assert!(
        rect.x >= 0.0 && rect.y >= 0.0 && rect.right() <= width && rect.bottom() <= height,
        "Rect ({}, {}, {}x{}) escapes table bounds {}x{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        width,
        height
    );
}
