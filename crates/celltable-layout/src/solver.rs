//! Preferred-size aggregation and reallocation.
//!
//! Both entry points take a snapshot of the placements and spacing and run
//! the visibility filter, preferred-size collector, estimator and allocator
//! once per axis. Columns are always settled before rows when widths are
//! known, because widget heights may depend on the width they get.

use std::fmt;

use celltable_core::{Margin, Orientation, Rect, SharedWidget, Size, SizeConstraint};
use tracing::debug;

use crate::allocate::{allocate_cells, AxisAllocation};
use crate::estimate::{estimate_cell_sizes, CellSizeEstimate};
use crate::preferred::{collect_preferred_sizes, CrossConstraint};
use crate::spacing::Spacing;
use crate::visibility::visible_placements;
use crate::{Placement, PlacementId};

/// Final geometry of one visible widget.
#[derive(Clone)]
pub struct Allocation {
    pub placement: PlacementId,
    pub widget: SharedWidget,
    /// Margins removed, components rounded, size never negative.
    pub rect: Rect,
}

impl fmt::Debug for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocation")
            .field("placement", &self.placement)
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

fn estimate(
    visible: &[Placement],
    sizes: &[Size],
    spacing: &Spacing,
    orientation: Orientation,
) -> CellSizeEstimate {
    estimate_cell_sizes(visible, sizes, orientation, spacing.along(orientation))
}

fn allocate(
    estimate: &CellSizeEstimate,
    visible: &[Placement],
    spacing: &Spacing,
    available: f64,
    calc_offsets: bool,
) -> AxisAllocation {
    allocate_cells(
        estimate,
        visible,
        spacing.along(estimate.orientation),
        available,
        calc_offsets,
    )
}

/// Offset and size of a widget along one axis, margins removed.
fn content_extent(allocation: &AxisAllocation, index: usize, margin: Margin) -> (f64, f64) {
    let orientation = allocation.orientation;
    (
        allocation.offsets[index] + margin.start(orientation),
        allocation.sizes[index] - margin.along(orientation),
    )
}

/// Size the table wants under the given constraints.
pub fn compute_preferred_size(
    placements: &[Placement],
    spacing: &Spacing,
    width: SizeConstraint,
    height: SizeConstraint,
) -> Size {
    let visible = visible_placements(placements);
    if visible.is_empty() {
        return Size::zero();
    }
    let natural = collect_preferred_sizes(&visible, CrossConstraint::None);

    let size = match (width.available_size(), height.available_size()) {
        (None, None) => {
            let columns = estimate(&visible, &natural, spacing, Orientation::Horizontal);
            let rows = estimate(&visible, &natural, spacing, Orientation::Vertical);
            Size::new(columns.total_size(), rows.total_size())
        }
        (None, Some(available_height)) => {
            let rows = estimate(&visible, &natural, spacing, Orientation::Vertical);
            let row_allocation = allocate(&rows, &visible, spacing, available_height, false);

            let sizes = collect_preferred_sizes(&visible, CrossConstraint::Height(&row_allocation.sizes));
            let columns = estimate(&visible, &sizes, spacing, Orientation::Horizontal);
            Size::new(columns.total_size(), available_height)
        }
        (Some(available_width), None) => {
            let columns = estimate(&visible, &natural, spacing, Orientation::Horizontal);
            let column_allocation = allocate(&columns, &visible, spacing, available_width, false);

            let sizes = collect_preferred_sizes(&visible, CrossConstraint::Width(&column_allocation.sizes));
            let rows = estimate(&visible, &sizes, spacing, Orientation::Vertical);
            Size::new(available_width, rows.total_size())
        }
        (Some(available_width), Some(available_height)) => {
            let columns = estimate(&visible, &natural, spacing, Orientation::Horizontal);
            let rows = estimate(&visible, &natural, spacing, Orientation::Vertical);

            if columns.total_size() <= available_width {
                Size::new(columns.total_size(), rows.total_size())
            } else {
                let column_allocation = allocate(&columns, &visible, spacing, available_width, false);
                let sizes =
                    collect_preferred_sizes(&visible, CrossConstraint::Width(&column_allocation.sizes));
                let rows = estimate(&visible, &sizes, spacing, Orientation::Vertical);
                Size::new(available_width, available_height.min(rows.total_size()))
            }
        }
    };

    debug!(
        visible = visible.len(),
        ?width,
        ?height,
        result_width = size.width,
        result_height = size.height,
        "Table preferred size computed"
    );

    size
}

/// Place every visible widget inside a table of the given size.
pub fn compute_allocations(
    placements: &[Placement],
    spacing: &Spacing,
    width: f64,
    height: f64,
) -> Vec<Allocation> {
    let visible = visible_placements(placements);

    let sizes = collect_preferred_sizes(&visible, CrossConstraint::None);
    let columns = estimate(&visible, &sizes, spacing, Orientation::Horizontal);
    let horizontal = allocate(&columns, &visible, spacing, width, true);

    let sizes = collect_preferred_sizes(&visible, CrossConstraint::Width(&horizontal.sizes));
    let rows = estimate(&visible, &sizes, spacing, Orientation::Vertical);
    let vertical = allocate(&rows, &visible, spacing, height, true);

    let allocations: Vec<Allocation> = visible
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let margin = placement.widget().margin();
            let (x, width) = content_extent(&horizontal, index, margin);
            let (y, height) = content_extent(&vertical, index, margin);
            let rect = Rect::new(x, y, width, height).round().with_positive_size();

            Allocation {
                placement: placement.id(),
                widget: placement.widget().clone(),
                rect,
            }
        })
        .collect();

    debug!(
        "Table layout complete: {} columns, {} rows, {} widgets in {}x{}",
        horizontal.cell_sizes.len(),
        vertical.cell_sizes.len(),
        allocations.len(),
        width,
        height
    );

    allocations
}
