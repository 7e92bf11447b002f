//! The Table container.
//!
//! Owns the placement list and spacing configuration, hands out placement
//! handles, and notifies subscribers of every structural change. Layout
//! itself is delegated to [`crate::solver`] with a snapshot of this state.
//!
//! A table is driven from a single UI thread. Mutating it from inside a
//! widget's preferred-size query or from a change listener is not supported.

use std::fmt;
use std::rc::Rc;

use celltable_core::{Orientation, SharedWidget, Size, SizeConstraint};
use tracing::trace;

use crate::placement::{attach_options, AttachOptions, Placement, PlacementOptions, Span};
use crate::solver::{compute_allocations, compute_preferred_size, Allocation};
use crate::spacing::{Spacing, DEFAULT_SPACING};
use crate::{PlacementId, TableError};

/// Table configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Gap between rows unless overridden per row.
    pub default_row_spacing: f64,
    /// Gap between columns unless overridden per column.
    pub default_column_spacing: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_row_spacing: DEFAULT_SPACING,
            default_column_spacing: DEFAULT_SPACING,
        }
    }
}

/// Structural change notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    PlacementAdded { id: PlacementId },
    PlacementRemoved { id: PlacementId },
    /// Span of a placement changed.
    PlacementChanged { id: PlacementId },
    WidgetReplaced { id: PlacementId },
    Cleared,
    SpacingChanged { orientation: Orientation },
}

type Listener = Box<dyn FnMut(&TableEvent)>;

/// A grid container placing widgets on cell spans.
pub struct Table {
    placements: Vec<Placement>,
    spacing: Spacing,
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Table {
    /// Create a table with default spacing.
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            placements: Vec::new(),
            spacing: Spacing::new(config.default_row_spacing, config.default_column_spacing),
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: TableEvent) {
        trace!(?event, "table changed");
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    fn allocate_id(&mut self) -> PlacementId {
        let id = PlacementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: PlacementId) -> Result<usize, TableError> {
        self.placements
            .iter()
            .position(|p| p.id() == id)
            .ok_or(TableError::PlacementNotFound(id))
    }

    // ==================== Placements ====================

    /// Place a widget on columns `[left, right)` and rows `[top, bottom)`.
    pub fn add_placement(
        &mut self,
        widget: SharedWidget,
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
        options: PlacementOptions,
    ) -> Result<PlacementId, TableError> {
        let columns = Span::new(Orientation::Horizontal, left, right)?;
        let rows = Span::new(Orientation::Vertical, top, bottom)?;

        let id = self.allocate_id();
        self.placements
            .push(Placement::new(id, widget, columns, rows, options));
        self.emit(TableEvent::PlacementAdded { id });
        Ok(id)
    }

    /// Place a widget at `(left, top)` spanning the given number of rows and
    /// columns, using the widget's own expansion and alignment.
    ///
    /// Expansion and alignment are read once here. Later changes on the widget
    /// take effect only after the placement is removed and added again.
    pub fn add(
        &mut self,
        widget: SharedWidget,
        left: usize,
        top: usize,
        row_span: usize,
        col_span: usize,
    ) -> Result<PlacementId, TableError> {
        let options = PlacementOptions::from_widget(&*widget);
        self.add_placement(widget, left, left + col_span, top, top + row_span, options)
    }

    /// Place a widget using legacy attach flags. `None` keeps the widget's own answer.
    #[allow(clippy::too_many_arguments)]
    pub fn attach(
        &mut self,
        widget: SharedWidget,
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
        x_options: Option<AttachOptions>,
        y_options: Option<AttachOptions>,
    ) -> Result<PlacementId, TableError> {
        let options = attach_options(&*widget, x_options, y_options);
        self.add_placement(widget, left, right, top, bottom, options)
    }

    pub fn remove_placement(&mut self, id: PlacementId) -> Option<Placement> {
        let index = self.position(id).ok()?;
        let placement = self.placements.remove(index);
        self.emit(TableEvent::PlacementRemoved { id });
        Some(placement)
    }

    /// Remove the first placement holding this widget.
    pub fn remove(&mut self, widget: &SharedWidget) -> bool {
        let found = self
            .placements
            .iter()
            .find(|p| std::ptr::addr_eq(Rc::as_ptr(p.widget()), Rc::as_ptr(widget)))
            .map(|p| p.id());

        match found {
            Some(id) => self.remove_placement(id).is_some(),
            None => false,
        }
    }

    /// Remove every placement.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.emit(TableEvent::Cleared);
    }

    /// Move a placement to new cell bounds.
    pub fn set_span(
        &mut self,
        id: PlacementId,
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
    ) -> Result<(), TableError> {
        let columns = Span::new(Orientation::Horizontal, left, right)?;
        let rows = Span::new(Orientation::Vertical, top, bottom)?;
        let index = self.position(id)?;

        self.placements[index].set_spans(columns, rows);
        self.emit(TableEvent::PlacementChanged { id });
        Ok(())
    }

    /// Swap the widget of a placement, returning the previous one.
    pub fn replace_widget(
        &mut self,
        id: PlacementId,
        widget: SharedWidget,
    ) -> Result<SharedWidget, TableError> {
        let index = self.position(id)?;
        let old = self.placements[index].replace_widget(widget);
        self.emit(TableEvent::WidgetReplaced { id });
        Ok(old)
    }

    /// Move every placement starting at or below `row` down by `by` rows.
    pub fn shift_rows_from(&mut self, row: usize, by: usize) {
        let mut shifted = Vec::new();
        for placement in &mut self.placements {
            if placement.top() >= row {
                placement.shift_rows(by);
                shifted.push(placement.id());
            }
        }
        for id in shifted {
            self.emit(TableEvent::PlacementChanged { id });
        }
    }

    /// Open empty rows `[top, bottom)` by pushing later placements down.
    pub fn insert_row(&mut self, top: usize, bottom: usize) {
        self.shift_rows_from(top, bottom.saturating_sub(top));
    }

    pub fn placement(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id() == id)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Widgets in placement order.
    pub fn children(&self) -> impl Iterator<Item = &SharedWidget> {
        self.placements.iter().map(|p| p.widget())
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    // ==================== Spacing ====================

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub fn default_row_spacing(&self) -> f64 {
        self.spacing.rows.default_spacing()
    }

    pub fn set_default_row_spacing(&mut self, spacing: f64) {
        self.spacing.rows.set_default_spacing(spacing);
        self.emit(TableEvent::SpacingChanged {
            orientation: Orientation::Vertical,
        });
    }

    pub fn default_column_spacing(&self) -> f64 {
        self.spacing.columns.default_spacing()
    }

    pub fn set_default_column_spacing(&mut self, spacing: f64) {
        self.spacing.columns.set_default_spacing(spacing);
        self.emit(TableEvent::SpacingChanged {
            orientation: Orientation::Horizontal,
        });
    }

    /// Spacing before `row`.
    pub fn row_spacing(&self, row: usize) -> f64 {
        self.spacing.rows.get(row)
    }

    /// Override the spacing before `row`.
    pub fn set_row_spacing(&mut self, row: usize, spacing: f64) {
        self.spacing.rows.set(row, spacing);
        self.emit(TableEvent::SpacingChanged {
            orientation: Orientation::Vertical,
        });
    }

    /// Spacing before `column`.
    pub fn column_spacing(&self, column: usize) -> f64 {
        self.spacing.columns.get(column)
    }

    /// Override the spacing before `column`.
    pub fn set_column_spacing(&mut self, column: usize, spacing: f64) {
        self.spacing.columns.set(column, spacing);
        self.emit(TableEvent::SpacingChanged {
            orientation: Orientation::Horizontal,
        });
    }

    // ==================== Layout ====================

    /// Size the table wants under the given constraints.
    pub fn preferred_size(&self, width: SizeConstraint, height: SizeConstraint) -> Size {
        compute_preferred_size(&self.placements, &self.spacing, width, height)
    }

    /// Final rectangles of every visible widget for a table of the given size.
    pub fn reallocate(&self, width: f64, height: f64) -> Vec<Allocation> {
        compute_allocations(&self.placements, &self.spacing, width, height)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("placements", &self.placements)
            .field("spacing", &self.spacing)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
