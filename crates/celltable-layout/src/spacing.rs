//! Row and column spacing tables.
//!
//! Spacing for cell `n` is the gap placed immediately before it, between cell
//! `n - 1` and cell `n`. Cell 0 never has leading spacing in a layout pass.

use std::collections::BTreeMap;

use celltable_core::Orientation;

/// Default gap between rows and between columns.
pub const DEFAULT_SPACING: f64 = 6.0;

/// Spacing for one axis: a default plus sparse per-cell overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingTable {
    default: f64,
    overrides: BTreeMap<usize, f64>,
}

impl SpacingTable {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Spacing before the given cell.
    pub fn get(&self, cell: usize) -> f64 {
        self.overrides.get(&cell).copied().unwrap_or(self.default)
    }

    pub fn set(&mut self, cell: usize, spacing: f64) {
        self.overrides.insert(cell, spacing);
    }

    pub fn default_spacing(&self) -> f64 {
        self.default
    }

    pub fn set_default_spacing(&mut self, spacing: f64) {
        self.default = spacing;
    }
}

impl Default for SpacingTable {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

/// Row and column spacing of a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spacing {
    pub rows: SpacingTable,
    pub columns: SpacingTable,
}

impl Spacing {
    pub fn new(row_spacing: f64, column_spacing: f64) -> Self {
        Self {
            rows: SpacingTable::new(row_spacing),
            columns: SpacingTable::new(column_spacing),
        }
    }

    /// Columns for horizontal passes, rows for vertical ones.
    pub fn along(&self, orientation: Orientation) -> &SpacingTable {
        match orientation {
            Orientation::Horizontal => &self.columns,
            Orientation::Vertical => &self.rows,
        }
    }
}
