//! # Cell Table Layout
//!
//! Grid layout solver for widgets placed on rectangular cell spans.
//!
//! ## Features
//!
//! - **Spans**: widgets cover `[left, right)` columns and `[top, bottom)` rows
//! - **Expansion**: surplus space goes to cells of expanding widgets
//! - **Shrinking**: deficits are taken from the largest cells first
//! - **Spacing**: per-row and per-column gaps with table-wide defaults
//! - **Height-for-width**: rows are measured against allocated column widths
//!
//! ## Pipeline
//!
//! 1. [`visibility`] drops hidden widgets
//! 2. [`preferred`] queries widget sizes, optionally against cross-axis allocations
//! 3. [`estimate`] derives natural cell sizes per axis
//! 4. [`allocate`] fits those sizes into the available space
//! 5. [`solver`] combines both axes into preferred sizes and final rectangles

pub mod allocate;
pub mod estimate;
pub mod placement;
pub mod preferred;
pub mod solver;
pub mod spacing;
pub mod splitter;
pub mod table;
pub mod visibility;

use celltable_core::Orientation;
use thiserror::Error;

pub use placement::{AttachOptions, Placement, PlacementId, PlacementOptions, Span};
pub use solver::{compute_allocations, compute_preferred_size, Allocation};
pub use spacing::{Spacing, SpacingTable, DEFAULT_SPACING};
pub use table::{Table, TableConfig, TableEvent};

/// Errors that can occur while editing a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Invalid {orientation:?} span: end {end} must be greater than start {start}")]
    InvalidSpan {
        orientation: Orientation,
        start: usize,
        end: usize,
    },

    #[error("Placement not found: {0:?}")]
    PlacementNotFound(PlacementId),
}
