//! Preferred-size collector.

use celltable_core::{Size, SizeConstraint};

use crate::Placement;

/// Cross-axis constraint applied when querying widgets.
///
/// The slices hold per-widget allocated sizes (margins included) from a
/// previous allocation pass, index-aligned with the visible placements.
#[derive(Debug, Clone, Copy)]
pub enum CrossConstraint<'a> {
    None,
    Width(&'a [f64]),
    Height(&'a [f64]),
}

/// Preferred size of each visible placement, margins included.
pub fn collect_preferred_sizes(visible: &[Placement], constraint: CrossConstraint<'_>) -> Vec<Size> {
    visible
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let widget = placement.widget();
            let margin = widget.margin();
            let (width, height) = match constraint {
                CrossConstraint::None => (SizeConstraint::Unconstrained, SizeConstraint::Unconstrained),
                CrossConstraint::Width(widths) => (
                    SizeConstraint::fixed(widths[index] - margin.horizontal()),
                    SizeConstraint::Unconstrained,
                ),
                CrossConstraint::Height(heights) => (
                    SizeConstraint::Unconstrained,
                    SizeConstraint::fixed(heights[index] - margin.vertical()),
                ),
            };

            let size = widget.preferred_size(width, height);
            Size::new(size.width + margin.horizontal(), size.height + margin.vertical())
        })
        .collect()
}
