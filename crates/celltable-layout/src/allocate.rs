//! # Cell-Size Allocator
//!
//! Fits an estimate into the size actually available along one axis, then
//! derives each widget's size and offset.
//!
//! Three regimes, decided on `available - spacing`:
//!
//! - **Collapsed**: nothing left after spacing, every cell becomes zero.
//! - **Shrink**: less than the natural total. Cells larger than an even split
//!   give up space first, proportionally to their size, then every cell is
//!   scaled to close the remaining gap, and sizes are rounded to whole units.
//! - **Surplus**: at least the natural total. The extra space is split evenly
//!   among expandable cells; other cells keep their natural size.

use std::collections::{BTreeMap, BTreeSet};

use celltable_core::Orientation;
use tracing::trace;

use crate::estimate::CellSizeEstimate;
use crate::spacing::SpacingTable;
use crate::splitter::SizeSplitter;
use crate::Placement;

/// Tolerance when handing back whole units after flooring.
const ROUNDING_EPSILON: f64 = 1e-6;

/// Which sizing regime an allocation ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationRegime {
    Collapsed,
    Shrink,
    Surplus,
}

/// Result of allocating one axis, index-aligned with the visible placements.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAllocation {
    pub orientation: Orientation,
    pub regime: AllocationRegime,
    /// Final size of each occupied cell.
    pub cell_sizes: BTreeMap<usize, f64>,
    /// Offset of each widget: relative to its first cell, or to the table
    /// origin when offsets were requested.
    pub offsets: Vec<f64>,
    /// Size given to each widget, margins included.
    pub sizes: Vec<f64>,
}

/// Allocate `available` along the estimate's axis.
///
/// With `calc_offsets` unset, only sizes are needed (cross-axis estimation)
/// and offsets stay relative to each widget's first cell.
pub fn allocate_cells(
    estimate: &CellSizeEstimate,
    visible: &[Placement],
    spacing: &SpacingTable,
    available: f64,
    calc_offsets: bool,
) -> AxisAllocation {
    let orientation = estimate.orientation;
    let mut cells = estimate.fixed_sizes.clone();

    let natural: f64 = cells.values().sum();
    let usable = available - estimate.spacing;
    let remaining = usable - natural;

    let regime = if usable <= 0.0 {
        cells.values_mut().for_each(|size| *size = 0.0);
        AllocationRegime::Collapsed
    } else if remaining < 0.0 {
        shrink_cells(&mut cells, usable);
        AllocationRegime::Shrink
    } else {
        expand_cells(&mut cells, &estimate.expandable, remaining);
        AllocationRegime::Surplus
    };

    trace!(
        ?orientation,
        ?regime,
        available,
        natural,
        spacing = estimate.spacing,
        "allocated cells"
    );

    let mut offsets = Vec::with_capacity(visible.len());
    let mut sizes = Vec::with_capacity(visible.len());

    for (index, placement) in visible.iter().enumerate() {
        let span = placement.span(orientation);
        let mut allocated: f64 = span
            .cells()
            .map(|cell| cells.get(&cell).copied().unwrap_or(0.0))
            .sum::<f64>()
            + span.inner_boundaries().map(|cell| spacing.get(cell)).sum::<f64>();
        let mut offset = 0.0;

        if let Some(fraction) = placement.alignment(orientation).fraction() {
            let natural = estimate.natural_sizes[index];
            if natural < allocated {
                offset = (allocated - natural) * fraction;
                allocated = natural;
            }
        }

        offsets.push(offset);
        sizes.push(allocated);
    }

    if calc_offsets {
        add_cell_origins(&cells, visible, orientation, spacing, &mut offsets);
    }

    AxisAllocation {
        orientation,
        regime,
        cell_sizes: cells,
        offsets,
        sizes,
    }
}

/// Shift in-cell offsets by the origin of each widget's first cell.
fn add_cell_origins(
    cells: &BTreeMap<usize, f64>,
    visible: &[Placement],
    orientation: Orientation,
    spacing: &SpacingTable,
    offsets: &mut [f64],
) {
    let mut order: Vec<usize> = (0..visible.len()).collect();
    order.sort_by_key(|&index| visible[index].span(orientation).start);

    let mut origin = 0.0;
    let mut next = 0;
    for (&cell, &size) in cells {
        if cell > 0 {
            origin += spacing.get(cell);
        }
        while next < order.len() && visible[order[next]].span(orientation).start == cell {
            offsets[order[next]] += origin;
            next += 1;
        }
        origin += size;
    }
}

/// Shrink cells so they sum to `usable`, then round to whole units.
pub(crate) fn shrink_cells(cells: &mut BTreeMap<usize, f64>, usable: f64) {
    if cells.is_empty() {
        return;
    }

    let split = usable / cells.len() as f64;

    let below_split: f64 = cells
        .values()
        .filter(|&&size| size < split)
        .map(|size| split - size)
        .sum();
    let big_cells: Vec<usize> = cells
        .iter()
        .filter(|&(_, &size)| size > split)
        .map(|(&cell, _)| cell)
        .collect();
    let over_split: f64 = big_cells
        .iter()
        .filter_map(|cell| cells.get(cell))
        .map(|size| size - split)
        .sum();

    // Big cells first, so small cells keep what they need
    reduce_proportional(cells, &big_cells, (over_split - below_split).max(0.0));

    let new_total: f64 = cells.values().sum();
    let all_cells: Vec<usize> = cells.keys().copied().collect();
    reduce_proportional(cells, &all_cells, new_total - usable);

    round_sizes(cells);
}

/// Reduce each listed cell by its share of `amount`, proportional to its size.
///
/// Single pass: a cell goes negative if `amount` exceeds the listed total.
pub(crate) fn reduce_proportional(cells: &mut BTreeMap<usize, f64>, indexes: &[usize], amount: f64) {
    let total: f64 = indexes.iter().filter_map(|cell| cells.get(cell)).sum();
    if total == 0.0 {
        return;
    }

    for cell in indexes {
        if let Some(size) = cells.get_mut(cell) {
            *size -= amount * (*size / total);
        }
    }
}

/// Floor every cell, then hand whole units lost to flooring back in index order.
///
/// Units go back by incrementing floored cells rather than decrementing
/// unfloored ones, so the rounded total is the integer part of the original total.
pub(crate) fn round_sizes(cells: &mut BTreeMap<usize, f64>) {
    let mut remainder = 0.0;
    for size in cells.values_mut() {
        let floored = size.floor();
        remainder += *size - floored;
        *size = floored;
    }

    while remainder >= 1.0 - ROUNDING_EPSILON {
        for size in cells.values_mut() {
            *size += 1.0;
            remainder -= 1.0;
            if remainder < 1.0 - ROUNDING_EPSILON {
                break;
            }
        }
    }
}

/// Split surplus space among expandable cells.
fn expand_cells(cells: &mut BTreeMap<usize, f64>, expandable: &BTreeSet<usize>, remaining: f64) {
    let mut splitter = SizeSplitter::new(remaining, expandable.len());
    for &cell in expandable {
        *cells.entry(cell).or_insert(0.0) += splitter.next_part();
    }
}
