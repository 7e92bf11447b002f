//! # CellTable Core
//!
//! Shared value types for the CellTable grid layout solver.
//!
//! ## Contents
//!
//! 1. **Geometry**: sizes, rectangles, margins and size constraints
//! 2. **Orientation**: the horizontal/vertical axis tag every solver pass is keyed on
//! 3. **Widget capability**: the trait a toolkit backend implements so the solver
//!    can query preferred sizes, margins, alignment, expansion and visibility
//! 4. **Stock widgets**: simple adapters with fixed or reflowing content

pub mod geometry;
pub mod stock;
pub mod widget;

pub use geometry::{Margin, Orientation, Rect, Size, SizeConstraint};
pub use stock::{FixedSizeWidget, FlowWidget};
pub use widget::{Alignment, SharedWidget, Widget};
