//! Geometry value types used by the layout solver.

use serde::Serialize;

/// Layout axis.
///
/// Horizontal passes size columns, vertical passes size rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// The extent along the given axis.
    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Round every component to the nearest integer (half away from zero).
    pub fn round(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
        }
    }

    /// Clamp negative width/height to zero, keeping the origin.
    pub fn with_positive_size(&self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..*self
        }
    }
}

/// Four-sided margin around a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Margin {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margin {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Total thickness along the given axis.
    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.horizontal(),
            Orientation::Vertical => self.vertical(),
        }
    }

    /// Leading edge (left or top) along the given axis.
    pub fn start(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }
}

/// Constraint passed to a preferred-size query for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeConstraint {
    /// The widget may pick any size.
    #[default]
    Unconstrained,
    /// The widget must fit in the given size.
    Fixed(f64),
}

impl SizeConstraint {
    /// A fixed constraint, clamped to be non-negative.
    pub fn fixed(size: f64) -> Self {
        SizeConstraint::Fixed(size.max(0.0))
    }

    /// The available size, if constrained.
    pub fn available_size(&self) -> Option<f64> {
        match self {
            SizeConstraint::Unconstrained => None,
            SizeConstraint::Fixed(size) => Some(*size),
        }
    }
}
