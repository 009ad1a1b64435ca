//! Cell renderers.
//!
//! A cell is a sub-rectangle of a row bound to one data slot. Every cell
//! shares the base background/border behavior; [`CellKind`] adds text or
//! image+text drawing on top of it. Dispatch happens in [`CellSpec::render`].

use crate::row::CellValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tessera_core::{Bitmap, Canvas, Color, HorAlign, Rect, TextAlignment, TextStyle, VerAlign};

/// Where a cell takes its data from.
///
/// Stored in configuration as a signed integer: `-1` positional, `-2`
/// constant, `n >= 0` an explicit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DataBinding {
    /// Use the row value at the cell's own position in the template.
    #[default]
    Positional,
    /// Ignore row data and show the cell's stored text.
    Constant,
    /// Use the row value at this slot.
    Slot(usize),
    /// Any other negative index; never resolves to data.
    Unbound(i32),
}

impl From<i32> for DataBinding {
    fn from(index: i32) -> Self {
        match index {
            -1 => Self::Positional,
            -2 => Self::Constant,
            n if n >= 0 => Self::Slot(n as usize),
            n => Self::Unbound(n),
        }
    }
}

impl From<DataBinding> for i32 {
    fn from(binding: DataBinding) -> Self {
        match binding {
            DataBinding::Positional => -1,
            DataBinding::Constant => -2,
            DataBinding::Slot(n) => Self::try_from(n).unwrap_or(Self::MAX),
            DataBinding::Unbound(n) => n,
        }
    }
}

/// Data handed to a cell for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellData<'a> {
    /// A value from the row
    Value(&'a CellValue),
    /// The cell's own constant text
    Constant(&'a str),
}

impl fmt::Display for CellData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => v.fmt(f),
            Self::Constant(s) => f.write_str(s),
        }
    }
}

/// Text rendering fields shared by text and image+text cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCell {
    /// Font and foreground color
    pub style: TextStyle,
    /// Constant text shown for [`DataBinding::Constant`]
    pub text: String,
    /// Horizontal placement
    pub align_horizontal: HorAlign,
    /// Vertical placement
    pub align_vertical: VerAlign,
}

impl Default for TextCell {
    fn default() -> Self {
        Self {
            style: TextStyle {
                family: "Tahoma".to_string(),
                size: 10.0,
                color: Color::WHITE,
                ..TextStyle::default()
            },
            text: "TextCell".to_string(),
            align_horizontal: HorAlign::Left,
            align_vertical: VerAlign::Middle,
        }
    }
}

impl TextCell {
    fn render(&self, canvas: &mut dyn Canvas, rect: Rect, data: Option<CellData<'_>>) {
        if let Some(data) = data {
            let align = TextAlignment::new(self.align_horizontal, self.align_vertical);
            canvas.draw_text(&data.to_string(), rect, &self.style, align);
        }
    }
}

/// Text plus an optional picture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageTextCell {
    /// Text fields
    pub text: TextCell,
    image: Option<Arc<Bitmap>>,
    image_bounds: Rect,
}

impl ImageTextCell {
    /// An image+text cell without a picture.
    #[must_use]
    pub fn with_text(text: TextCell) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// The picture, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&Arc<Bitmap>> {
        self.image.as_ref()
    }

    /// Where the picture is drawn, relative to the row.
    #[must_use]
    pub const fn image_bounds(&self) -> Rect {
        self.image_bounds
    }

    /// Assign a picture. Resets the image bounds' size to the picture's
    /// native size, keeping its position.
    pub fn set_image(&mut self, image: Option<Arc<Bitmap>>) {
        if let Some(img) = &image {
            self.image_bounds = self.image_bounds.with_size(img.size());
        }
        self.image = image;
    }

    /// Move or rescale the picture.
    pub fn set_image_bounds(&mut self, bounds: Rect) {
        self.image_bounds = bounds;
    }

    fn render(&self, canvas: &mut dyn Canvas, container: Rect) {
        if let Some(image) = &self.image {
            let dest = self.image_bounds.offset(container.x, container.y);
            canvas.draw_image(image, dest, image.bounds());
        }
    }
}

/// Variant-specific cell content.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellKind {
    /// Background and border only
    #[default]
    Base,
    /// Background, border and the bound value as text
    Text(TextCell),
    /// Text cell plus a picture
    ImageText(ImageTextCell),
}

/// One cell definition inside a row template.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    /// Display name
    pub name: String,
    /// Position relative to the row; negative width/height stretch to the
    /// row's right/bottom edge
    pub bounds: Rect,
    /// Data source
    pub data_index: DataBinding,
    /// Background fill, skipped when transparent
    pub back_color: Color,
    /// Border color, skipped when transparent
    pub border_color: Color,
    /// Border pen width, no border when zero
    pub border_size: i32,
    /// Variant content
    pub kind: CellKind,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            name: "rowCell".to_string(),
            bounds: Rect::new(0, 0, 100, 20),
            data_index: DataBinding::Positional,
            back_color: Color::TRANSPARENT,
            border_color: Color::TEAL,
            border_size: 0,
            kind: CellKind::Base,
        }
    }
}

impl CellSpec {
    /// A background/border-only cell.
    #[must_use]
    pub fn base() -> Self {
        Self::default()
    }

    /// A text cell.
    #[must_use]
    pub fn text() -> Self {
        Self {
            kind: CellKind::Text(TextCell::default()),
            ..Self::default()
        }
    }

    /// An image+text cell.
    #[must_use]
    pub fn image_text() -> Self {
        Self {
            kind: CellKind::ImageText(ImageTextCell::default()),
            ..Self::default()
        }
    }

    /// Set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bounds.
    #[must_use]
    pub const fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the data binding.
    #[must_use]
    pub fn data_index(mut self, binding: impl Into<DataBinding>) -> Self {
        self.data_index = binding.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    /// Set the border color and width.
    #[must_use]
    pub const fn border(mut self, color: Color, size: i32) -> Self {
        self.border_color = color;
        self.border_size = size;
        self
    }

    /// Set the constant text (no-op on base cells).
    #[must_use]
    pub fn constant_text(mut self, text: impl Into<String>) -> Self {
        if let Some(cell) = self.text_cell_mut() {
            cell.text = text.into();
        }
        self
    }

    /// Set the text alignment (no-op on base cells).
    #[must_use]
    pub fn align(mut self, horizontal: HorAlign, vertical: VerAlign) -> Self {
        if let Some(cell) = self.text_cell_mut() {
            cell.align_horizontal = horizontal;
            cell.align_vertical = vertical;
        }
        self
    }

    /// Set the font and text color (no-op on base cells).
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        if let Some(cell) = self.text_cell_mut() {
            cell.style = style;
        }
        self
    }

    /// Set the picture (no-op unless this is an image+text cell).
    #[must_use]
    pub fn image(mut self, image: Arc<Bitmap>) -> Self {
        if let CellKind::ImageText(cell) = &mut self.kind {
            cell.set_image(Some(image));
        }
        self
    }

    /// Text fields, for text and image+text cells.
    #[must_use]
    pub const fn text_cell(&self) -> Option<&TextCell> {
        match &self.kind {
            CellKind::Base => None,
            CellKind::Text(cell) => Some(cell),
            CellKind::ImageText(cell) => Some(&cell.text),
        }
    }

    /// Mutable text fields, for text and image+text cells.
    pub fn text_cell_mut(&mut self) -> Option<&mut TextCell> {
        match &mut self.kind {
            CellKind::Base => None,
            CellKind::Text(cell) => Some(cell),
            CellKind::ImageText(cell) => Some(&mut cell.text),
        }
    }

    /// Pick this cell's data from a row.
    ///
    /// `position` is the cell's ordinal in its template. Out-of-range slots
    /// resolve to `None`, as does a constant binding on a cell without text.
    #[must_use]
    pub fn resolve<'a>(&'a self, position: usize, values: &'a [CellValue]) -> Option<CellData<'a>> {
        match self.data_index {
            DataBinding::Positional => values.get(position).map(CellData::Value),
            DataBinding::Constant => self
                .text_cell()
                .map(|cell| CellData::Constant(cell.text.as_str())),
            DataBinding::Slot(slot) => values.get(slot).map(CellData::Value),
            DataBinding::Unbound(_) => None,
        }
    }

    /// Absolute rectangle of this cell inside `container`.
    #[must_use]
    pub const fn absolute_rect(&self, container: Rect) -> Rect {
        let mut rect = self.bounds.offset(container.x, container.y);
        if self.bounds.width < 0 {
            rect.width = container.width - self.bounds.x;
        }
        if self.bounds.height < 0 {
            rect.height = container.height - self.bounds.y;
        }
        rect
    }

    /// Draw the cell with its data into the row rectangle `container`.
    pub fn render(&self, canvas: &mut dyn Canvas, container: Rect, data: Option<CellData<'_>>) {
        let rect = self.absolute_rect(container);

        if !self.back_color.is_transparent() {
            canvas.fill_rect(rect, self.back_color);
        }
        if self.border_size > 0 && !self.border_color.is_transparent() {
            canvas.stroke_rect(rect, self.border_color, self.border_size);
        }

        match &self.kind {
            CellKind::Base => {}
            CellKind::Text(cell) => cell.render(canvas, rect, data),
            CellKind::ImageText(cell) => {
                cell.text.render(canvas, rect, data);
                cell.render(canvas, container);
            }
        }
    }
}
