//! Stock widget adapters.
//!
//! These carry no native view. They are useful for headless layout (tests,
//! the smoke harness) and as reference adapters for backend authors.

use std::cell::Cell;

use crate::{Alignment, Margin, Orientation, Size, SizeConstraint, Widget};

/// Layout attributes shared by the stock widgets.
#[derive(Debug)]
struct Attributes {
    visible: Cell<bool>,
    margin: Cell<Margin>,
    expand: Cell<(bool, bool)>,
    alignment: Cell<(Alignment, Alignment)>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            visible: Cell::new(true),
            margin: Cell::new(Margin::default()),
            expand: Cell::new((false, false)),
            alignment: Cell::new((Alignment::Fill, Alignment::Fill)),
        }
    }
}

impl Attributes {
    fn set_expand(&self, orientation: Orientation, expand: bool) {
        let (h, v) = self.expand.get();
        self.expand.set(match orientation {
            Orientation::Horizontal => (expand, v),
            Orientation::Vertical => (h, expand),
        });
    }

    fn expands(&self, orientation: Orientation) -> bool {
        let (h, v) = self.expand.get();
        match orientation {
            Orientation::Horizontal => h,
            Orientation::Vertical => v,
        }
    }

    fn set_alignment(&self, orientation: Orientation, alignment: Alignment) {
        let (h, v) = self.alignment.get();
        self.alignment.set(match orientation {
            Orientation::Horizontal => (alignment, v),
            Orientation::Vertical => (h, alignment),
        });
    }

    fn alignment(&self, orientation: Orientation) -> Alignment {
        let (h, v) = self.alignment.get();
        match orientation {
            Orientation::Horizontal => h,
            Orientation::Vertical => v,
        }
    }
}

macro_rules! attribute_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn with_margin(self, margin: Margin) -> Self {
                self.attrs.margin.set(margin);
                self
            }

            pub fn with_expand(self, orientation: Orientation, expand: bool) -> Self {
                self.attrs.set_expand(orientation, expand);
                self
            }

            pub fn with_alignment(self, orientation: Orientation, alignment: Alignment) -> Self {
                self.attrs.set_alignment(orientation, alignment);
                self
            }

            pub fn set_visible(&self, visible: bool) {
                self.attrs.visible.set(visible);
            }

            pub fn set_margin(&self, margin: Margin) {
                self.attrs.margin.set(margin);
            }
        }
    };
}

/// A widget with a constant natural size.
#[derive(Debug)]
pub struct FixedSizeWidget {
    size: Cell<Size>,
    attrs: Attributes,
}

impl FixedSizeWidget {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Cell::new(Size::new(width, height)),
            attrs: Attributes::default(),
        }
    }

    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }
}

attribute_setters!(FixedSizeWidget);

impl Widget for FixedSizeWidget {
    fn preferred_size(&self, _width: SizeConstraint, _height: SizeConstraint) -> Size {
        self.size.get()
    }

    fn is_visible(&self) -> bool {
        self.attrs.visible.get()
    }

    fn margin(&self) -> Margin {
        self.attrs.margin.get()
    }

    fn alignment(&self, orientation: Orientation) -> Alignment {
        self.attrs.alignment(orientation)
    }

    fn expands(&self, orientation: Orientation) -> bool {
        self.attrs.expands(orientation)
    }
}

/// A widget whose content keeps a constant area and reflows under a constraint,
/// like wrapped text.
///
/// Width constraints take precedence over height constraints.
#[derive(Debug)]
pub struct FlowWidget {
    natural: Size,
    attrs: Attributes,
}

impl FlowWidget {
    pub fn new(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural: Size::new(natural_width, natural_height),
            attrs: Attributes::default(),
        }
    }

    fn area(&self) -> f64 {
        self.natural.width * self.natural.height
    }
}

attribute_setters!(FlowWidget);

impl Widget for FlowWidget {
    fn preferred_size(&self, width: SizeConstraint, height: SizeConstraint) -> Size {
        match (width.available_size(), height.available_size()) {
            (Some(w), _) if w > 0.0 => {
                let w = w.min(self.natural.width);
                Size::new(w, (self.area() / w).ceil())
            }
            (_, Some(h)) if h > 0.0 => {
                let h = h.min(self.natural.height);
                Size::new((self.area() / h).ceil(), h)
            }
            _ => self.natural,
        }
    }

    fn is_visible(&self) -> bool {
        self.attrs.visible.get()
    }

    fn margin(&self) -> Margin {
        self.attrs.margin.get()
    }

    fn alignment(&self, orientation: Orientation) -> Alignment {
        self.attrs.alignment(orientation)
    }

    fn expands(&self, orientation: Orientation) -> bool {
        self.attrs.expands(orientation)
    }
}
