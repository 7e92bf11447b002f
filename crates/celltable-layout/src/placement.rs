//! Child placements: which cells a widget occupies and how it behaves inside them.

use std::fmt;
use std::ops::{BitOr, Range};

use celltable_core::{Alignment, Orientation, SharedWidget, Widget};

use crate::TableError;

/// Handle to a placement inside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacementId(u64);

impl PlacementId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Half-open range of cell indices `[start, end)` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span, rejecting empty or inverted ranges.
    pub fn new(orientation: Orientation, start: usize, end: usize) -> Result<Self, TableError> {
        if end <= start {
            return Err(TableError::InvalidSpan {
                orientation,
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn cells(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Cell indices whose leading spacing falls inside the span.
    pub fn inner_boundaries(&self) -> Range<usize> {
        (self.start + 1)..self.end
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.start <= cell && cell < self.end
    }

    fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

/// Expansion and alignment of a placement on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementOptions {
    pub expand_horizontal: bool,
    pub expand_vertical: bool,
    pub align_horizontal: Alignment,
    pub align_vertical: Alignment,
}

impl PlacementOptions {
    /// Take the widget's own answers for both axes.
    pub fn from_widget(widget: &dyn Widget) -> Self {
        Self {
            expand_horizontal: widget.expands(Orientation::Horizontal),
            expand_vertical: widget.expands(Orientation::Vertical),
            align_horizontal: widget.alignment(Orientation::Horizontal),
            align_vertical: widget.alignment(Orientation::Vertical),
        }
    }

    pub fn expand(mut self, orientation: Orientation, expand: bool) -> Self {
        match orientation {
            Orientation::Horizontal => self.expand_horizontal = expand,
            Orientation::Vertical => self.expand_vertical = expand,
        }
        self
    }

    pub fn align(mut self, orientation: Orientation, alignment: Alignment) -> Self {
        match orientation {
            Orientation::Horizontal => self.align_horizontal = alignment,
            Orientation::Vertical => self.align_vertical = alignment,
        }
        self
    }

    pub fn expands(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.expand_horizontal,
            Orientation::Vertical => self.expand_vertical,
        }
    }

    pub fn alignment(&self, orientation: Orientation) -> Alignment {
        match orientation {
            Orientation::Horizontal => self.align_horizontal,
            Orientation::Vertical => self.align_vertical,
        }
    }

    /// Apply legacy attach flags to one axis.
    fn apply_attach(self, orientation: Orientation, options: AttachOptions) -> Self {
        let alignment = if options.contains(AttachOptions::FILL) {
            Alignment::Fill
        } else {
            Alignment::Center
        };
        self.expand(orientation, options.contains(AttachOptions::EXPAND))
            .align(orientation, alignment)
    }
}

/// Legacy attach flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttachOptions(u8);

impl AttachOptions {
    pub const EXPAND: Self = Self(1);
    pub const FILL: Self = Self(2);
    /// Accepted for compatibility; cells always shrink when space runs out.
    pub const SHRINK: Self = Self(4);

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AttachOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Resolve attach flags for both axes. `None` keeps the widget's own answer.
pub(crate) fn attach_options(
    widget: &dyn Widget,
    x_options: Option<AttachOptions>,
    y_options: Option<AttachOptions>,
) -> PlacementOptions {
    let mut options = PlacementOptions::from_widget(widget);
    if let Some(x) = x_options {
        options = options.apply_attach(Orientation::Horizontal, x);
    }
    if let Some(y) = y_options {
        options = options.apply_attach(Orientation::Vertical, y);
    }
    options
}

/// A widget assigned to a rectangular range of cells.
#[derive(Clone)]
pub struct Placement {
    id: PlacementId,
    widget: SharedWidget,
    columns: Span,
    rows: Span,
    options: PlacementOptions,
}

impl Placement {
    pub(crate) fn new(
        id: PlacementId,
        widget: SharedWidget,
        columns: Span,
        rows: Span,
        options: PlacementOptions,
    ) -> Self {
        Self {
            id,
            widget,
            columns,
            rows,
            options,
        }
    }

    pub fn id(&self) -> PlacementId {
        self.id
    }

    pub fn widget(&self) -> &SharedWidget {
        &self.widget
    }

    pub fn left(&self) -> usize {
        self.columns.start
    }

    pub fn right(&self) -> usize {
        self.columns.end
    }

    pub fn top(&self) -> usize {
        self.rows.start
    }

    pub fn bottom(&self) -> usize {
        self.rows.end
    }

    /// The cells covered along the given axis.
    pub fn span(&self, orientation: Orientation) -> Span {
        match orientation {
            Orientation::Horizontal => self.columns,
            Orientation::Vertical => self.rows,
        }
    }

    pub fn expands(&self, orientation: Orientation) -> bool {
        self.options.expands(orientation)
    }

    pub fn alignment(&self, orientation: Orientation) -> Alignment {
        self.options.alignment(orientation)
    }

    pub(crate) fn set_spans(&mut self, columns: Span, rows: Span) {
        self.columns = columns;
        self.rows = rows;
    }

    pub(crate) fn shift_rows(&mut self, by: usize) {
        self.rows = self.rows.shifted(by);
    }

    pub(crate) fn replace_widget(&mut self, widget: SharedWidget) -> SharedWidget {
        std::mem::replace(&mut self.widget, widget)
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placement")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
