//! Widget capability trait.
//!
//! The solver never sees a concrete widget type. Each toolkit backend supplies
//! an adapter implementing [`Widget`], and the table holds it behind a
//! [`SharedWidget`] handle shared with the container that owns the native view.
//!
//! Layout runs on a single UI thread, so handles are `Rc` and widgets use
//! interior mutability for state that changes between passes. A widget must
//! not mutate its table (visibility, placements, spacing) from inside
//! [`Widget::preferred_size`]; doing so while a pass is running is not
//! supported.

use std::rc::Rc;

use crate::{Margin, Orientation, Size, SizeConstraint};

/// Shared handle to a widget adapter.
pub type SharedWidget = Rc<dyn Widget>;

/// Position of a widget inside the space allocated to it along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Alignment {
    /// Take the whole allocated size.
    #[default]
    Fill,
    Start,
    Center,
    End,
    /// Arbitrary fraction in `[0, 1]` of the free space placed before the widget.
    Fraction(f64),
}

impl Alignment {
    /// Fraction of the free space placed before the widget, or `None` for `Fill`.
    pub fn fraction(self) -> Option<f64> {
        match self {
            Alignment::Fill => None,
            Alignment::Start => Some(0.0),
            Alignment::Center => Some(0.5),
            Alignment::End => Some(1.0),
            Alignment::Fraction(f) => Some(f.clamp(0.0, 1.0)),
        }
    }
}

/// Capabilities the layout solver needs from a child widget.
pub trait Widget {
    /// Desired size without margins.
    ///
    /// Repeated unconstrained queries must return the same answer and must not
    /// have side effects; the solver may ask several times in one pass.
    fn preferred_size(&self, width: SizeConstraint, height: SizeConstraint) -> Size;

    /// Whether the widget takes part in layout.
    fn is_visible(&self) -> bool {
        true
    }

    fn margin(&self) -> Margin {
        Margin::default()
    }

    /// Alignment used when the widget is added without an explicit one.
    fn alignment(&self, _orientation: Orientation) -> Alignment {
        Alignment::Fill
    }

    /// Expansion flag used when the widget is added without an explicit one.
    fn expands(&self, _orientation: Orientation) -> bool {
        false
    }
}
