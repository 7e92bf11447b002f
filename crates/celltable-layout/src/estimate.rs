//! # Cell-Size Estimator
//!
//! Computes the natural size every cell needs along one axis.
//!
//! ## Algorithm
//!
//! 1. Widgets spanning a single cell fix that cell's minimum size (largest request wins).
//! 2. Widgets spanning several cells ask for whatever their span still lacks once
//!    the fixed sizes and the spacing inside the span are subtracted, split evenly
//!    over the cells of the span.
//! 3. Where several multi-cell widgets share a cell, the largest request for that
//!    cell wins. Every other widget sharing it gets the extra space for free and
//!    asks for correspondingly less in the rest of its span.
//! 4. Each cell's size is its fixed size plus the largest adjusted request over it.
//! 5. Spacing is counted only before occupied cells, never before cell 0.
//!
//! Estimates are built fresh for every pass: widget preferred sizes change
//! with the cross-axis constraint.

use std::collections::{BTreeMap, BTreeSet};

use celltable_core::{Orientation, Size};
use tracing::trace;

use crate::placement::Span;
use crate::spacing::SpacingTable;
use crate::Placement;

/// Natural cell sizes for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSizeEstimate {
    /// Axis this estimate was computed for.
    pub orientation: Orientation,
    /// Required size of each occupied cell.
    pub fixed_sizes: BTreeMap<usize, f64>,
    /// Cells covered by at least one widget that expands along this axis.
    pub expandable: BTreeSet<usize>,
    /// Natural size of each visible widget along this axis, margins included.
    pub natural_sizes: Vec<f64>,
    /// Total spacing between occupied cells.
    pub spacing: f64,
}

impl CellSizeEstimate {
    /// Natural size of the whole axis: cells plus spacing.
    pub fn total_size(&self) -> f64 {
        self.spacing + self.fixed_sizes.values().sum::<f64>()
    }

    pub fn cell_count(&self) -> usize {
        self.fixed_sizes.len()
    }
}

/// Per-cell growth requested by a widget spanning more than one cell.
#[derive(Debug, Clone)]
struct SpanGrowth {
    span: Span,
    grow: Vec<f64>,
}

impl SpanGrowth {
    fn at(&self, cell: usize) -> f64 {
        self.grow[cell - self.span.start]
    }
}

/// Estimate natural cell sizes along `orientation`.
///
/// `sizes` must be index-aligned with `visible`.
pub fn estimate_cell_sizes(
    visible: &[Placement],
    sizes: &[Size],
    orientation: Orientation,
    spacing: &SpacingTable,
) -> CellSizeEstimate {
    debug_assert_eq!(visible.len(), sizes.len());

    let mut last_cell = 0;
    let mut fixed_sizes: BTreeMap<usize, f64> = BTreeMap::new();
    let mut expandable = BTreeSet::new();
    let mut occupied = BTreeSet::new();
    let mut natural_sizes = Vec::with_capacity(visible.len());

    for (placement, size) in visible.iter().zip(sizes) {
        let span = placement.span(orientation);
        last_cell = last_cell.max(span.end);

        let expand = placement.expands(orientation);
        for cell in span.cells() {
            occupied.insert(cell);
            if expand {
                expandable.insert(cell);
            }
        }

        let natural = size.along(orientation);
        natural_sizes.push(natural);

        if span.len() == 1 {
            let fixed = fixed_sizes.entry(span.start).or_insert(0.0);
            if natural > *fixed {
                *fixed = natural;
            }
        }
    }

    let mut growths = span_growths(visible, &natural_sizes, &fixed_sizes, orientation, spacing);
    resolve_span_conflicts(&mut growths, &occupied);

    // Largest adjusted request per cell, never below zero
    let mut final_grow: BTreeMap<usize, f64> = BTreeMap::new();
    for growth in &growths {
        for (cell, &value) in growth.span.cells().zip(&growth.grow) {
            let current = final_grow.entry(cell).or_insert(0.0);
            if value > *current {
                *current = value;
            }
        }
    }
    for (cell, grow) in final_grow {
        *fixed_sizes.entry(cell).or_insert(0.0) += grow;
    }

    let total_spacing: f64 = (1..last_cell)
        .filter(|cell| occupied.contains(cell))
        .map(|cell| spacing.get(cell))
        .sum();

    trace!(
        ?orientation,
        cells = fixed_sizes.len(),
        multi_span = growths.len(),
        expandable = expandable.len(),
        spacing = total_spacing,
        "estimated cell sizes"
    );

    CellSizeEstimate {
        orientation,
        fixed_sizes,
        expandable,
        natural_sizes,
        spacing: total_spacing,
    }
}

/// Initial per-cell requests of every multi-cell widget.
fn span_growths(
    visible: &[Placement],
    natural_sizes: &[f64],
    fixed_sizes: &BTreeMap<usize, f64>,
    orientation: Orientation,
    spacing: &SpacingTable,
) -> Vec<SpanGrowth> {
    visible
        .iter()
        .zip(natural_sizes)
        .filter_map(|(placement, &natural)| {
            let span = placement.span(orientation);
            if span.len() == 1 {
                return None;
            }

            let fixed: f64 = span
                .cells()
                .map(|cell| fixed_sizes.get(&cell).copied().unwrap_or(0.0))
                .sum();
            // The widget itself covers the gaps inside its span
            let inner_spacing: f64 = span.inner_boundaries().map(|cell| spacing.get(cell)).sum();

            let size_to_grow = natural - fixed - inner_spacing;
            let part = size_to_grow / span.len() as f64;

            Some(SpanGrowth {
                span,
                grow: vec![part; span.len()],
            })
        })
        .collect()
}

/// Let widgets that share a cell with a larger request ask for less elsewhere.
///
/// Cells are visited in ascending order and each adjustment sees the previous ones.
/// A widget's total request over its span is unchanged by an adjustment.
fn resolve_span_conflicts(growths: &mut [SpanGrowth], occupied: &BTreeSet<usize>) {
    for &cell in occupied {
        let sharing: Vec<usize> = growths
            .iter()
            .enumerate()
            .filter(|(_, growth)| growth.span.contains(cell))
            .map(|(index, _)| index)
            .collect();
        if sharing.len() < 2 {
            continue;
        }

        let mut max_value = 0.0;
        let mut max_owner = None;
        for &index in &sharing {
            let value = growths[index].at(cell);
            if value > max_value {
                max_value = value;
                max_owner = Some(index);
            }
        }

        for &index in &sharing {
            if Some(index) == max_owner {
                continue;
            }

            let growth = &mut growths[index];
            let local = cell - growth.span.start;
            let extra = max_value - growth.grow[local];
            if extra <= 0.0 {
                continue;
            }

            let share = extra / (growth.grow.len() - 1) as f64;
            for (position, value) in growth.grow.iter_mut().enumerate() {
                if position == local {
                    *value = max_value;
                } else {
                    *value -= share;
                }
            }

            trace!(cell, extra, share, span = ?growth.span, "absorbed shared cell growth");
        }
    }
}
