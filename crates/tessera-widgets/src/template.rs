//! Row templates.

use crate::cell::CellSpec;
use crate::gradient::GradientCache;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use tessera_core::Color;

/// Visual definition of a row: height, background, cells and border.
///
/// Height and border size clamp negative input to 0. Mutating a template
/// does not trigger any recompute; rows re-read it on their next draw.
#[derive(Debug, Clone)]
pub struct RowTemplate {
    height: i32,
    /// Background gradient
    pub gradient: GradientCache,
    /// Cells, in template order
    pub cells: Vec<CellSpec>,
    /// Border color, skipped when transparent
    pub border_color: Color,
    border_size: i32,
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self {
            height: 40,
            gradient: GradientCache::default(),
            cells: Vec::new(),
            border_color: Color::BLACK,
            border_size: 0,
        }
    }
}

impl RowTemplate {
    /// Create a template with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height.
    #[must_use]
    pub fn height(mut self, height: i32) -> Self {
        self.set_height(height);
        self
    }

    /// Set the background gradient colors.
    #[must_use]
    pub fn gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient.set_start(start);
        self.gradient.set_end(end);
        self
    }

    /// Set the border color and width.
    #[must_use]
    pub fn border(mut self, color: Color, size: i32) -> Self {
        self.border_color = color;
        self.set_border_size(size);
        self
    }

    /// Append a cell.
    #[must_use]
    pub fn cell(mut self, cell: CellSpec) -> Self {
        self.cells.push(cell);
        self
    }

    /// Row height in pixels.
    #[must_use]
    pub const fn row_height(&self) -> i32 {
        self.height
    }

    /// Set the row height, clamping negatives to 0.
    pub fn set_height(&mut self, height: i32) {
        self.height = height.max(0);
    }

    /// Border pen width.
    #[must_use]
    pub const fn border_size(&self) -> i32 {
        self.border_size
    }

    /// Set the border pen width, clamping negatives to 0.
    pub fn set_border_size(&mut self, size: i32) {
        self.border_size = size.max(0);
    }

    /// Wrap into a shareable handle.
    #[must_use]
    pub fn into_ref(self) -> TemplateRef {
        TemplateRef::new(self)
    }
}

/// Shared handle to a [`RowTemplate`].
///
/// Rows and the list hold clones of the same handle, so edits made through
/// one are seen by every row using the template. Equality is identity.
#[derive(Clone, Default)]
pub struct TemplateRef(Rc<RefCell<RowTemplate>>);

impl TemplateRef {
    /// Share a template.
    #[must_use]
    pub fn new(template: RowTemplate) -> Self {
        Self(Rc::new(RefCell::new(template)))
    }

    /// Borrow the template.
    ///
    /// # Panics
    ///
    /// Panics if the template is currently borrowed mutably.
    #[must_use]
    pub fn read(&self) -> Ref<'_, RowTemplate> {
        self.0.borrow()
    }

    /// Borrow the template mutably.
    ///
    /// # Panics
    ///
    /// Panics if the template is currently borrowed.
    #[must_use]
    pub fn write(&self) -> RefMut<'_, RowTemplate> {
        self.0.borrow_mut()
    }

    /// True when both handles point at the same template.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TemplateRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(template) => f.debug_tuple("TemplateRef").field(&*template).finish(),
            Err(_) => f.write_str("TemplateRef(<borrowed>)"),
        }
    }
}

impl From<RowTemplate> for TemplateRef {
    fn from(template: RowTemplate) -> Self {
        Self::new(template)
    }
}
