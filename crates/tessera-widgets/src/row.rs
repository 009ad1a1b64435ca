//! List rows.

use crate::error::ListError;
use crate::template::TemplateRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tessera_core::{Canvas, Rect};

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a row, independent of its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    fn next() -> Self {
        Self(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// A value held in one row data slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Number(f64),
    /// Text value
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Pick the template that governs a row.
///
/// The selected template wins only while the row is selected and one is set.
#[must_use]
pub fn effective_template<'a>(
    selected: bool,
    selected_template: Option<&'a TemplateRef>,
    default_template: Option<&'a TemplateRef>,
) -> Option<&'a TemplateRef> {
    match selected_template {
        Some(template) if selected => Some(template),
        _ => default_template,
    }
}

/// One list entry: data values plus the templates that draw them.
#[derive(Debug)]
pub struct Row {
    id: RowId,
    default_template: Option<TemplateRef>,
    selected_template: Option<TemplateRef>,
    values: Vec<CellValue>,
    selected: bool,
    visible: bool,
    container_y: Option<i32>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            id: RowId::next(),
            default_template: None,
            selected_template: None,
            values: Vec::new(),
            selected: false,
            visible: true,
            container_y: None,
        }
    }
}

impl Row {
    /// Create an empty, visible, unselected row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row holding `values`.
    #[must_use]
    pub fn with_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut row = Self::new();
        row.set_values(values);
        row
    }

    /// Set both templates.
    #[must_use]
    pub fn with_templates(
        mut self,
        default_template: Option<TemplateRef>,
        selected_template: Option<TemplateRef>,
    ) -> Self {
        self.default_template = default_template;
        self.selected_template = selected_template;
        self
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> RowId {
        self.id
    }

    /// Replace all data values.
    pub fn set_values<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.values = values.into_iter().map(Into::into).collect();
    }

    /// All data values.
    #[must_use]
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Read a data slot. Out-of-range slots are absent.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    /// Overwrite an existing data slot, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::DataIndexOutOfRange`] when `index` is past the
    /// end; the data is never grown.
    pub fn set_value(
        &mut self,
        index: usize,
        value: impl Into<CellValue>,
    ) -> Result<CellValue, ListError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ListError::DataIndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Template used when not selected.
    #[must_use]
    pub const fn default_template(&self) -> Option<&TemplateRef> {
        self.default_template.as_ref()
    }

    /// Set the template used when not selected.
    pub fn set_default_template(&mut self, template: Option<TemplateRef>) {
        self.default_template = template;
    }

    /// Template used while selected.
    #[must_use]
    pub const fn selected_template(&self) -> Option<&TemplateRef> {
        self.selected_template.as_ref()
    }

    /// Set the template used while selected.
    pub fn set_selected_template(&mut self, template: Option<TemplateRef>) {
        self.selected_template = template;
    }

    /// The template currently governing this row.
    #[must_use]
    pub fn effective_template(&self) -> Option<&TemplateRef> {
        effective_template(
            self.selected,
            self.selected_template.as_ref(),
            self.default_template.as_ref(),
        )
    }

    /// Height of the effective template, 0 when none resolves.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.effective_template()
            .map_or(0, |template| template.read().row_height())
    }

    /// Whether the row is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Whether the row takes part in layout and hit-testing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the row.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Top of the row in list coordinates as of the last layout pass.
    #[must_use]
    pub const fn container_y(&self) -> Option<i32> {
        self.container_y
    }

    pub(crate) fn reset_container(&mut self) {
        self.container_y = None;
    }

    /// True when `y` falls in this row's span from the last layout pass.
    #[must_use]
    pub fn contains_y(&self, y: i32) -> bool {
        if !self.visible {
            return false;
        }
        self.container_y
            .is_some_and(|top| y >= top && y < top.saturating_add(self.height()))
    }

    /// Draw the row into `clip`, recording `clip.y` for hit-testing.
    ///
    /// Invisible rows and rows without a template draw nothing.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, clip: Rect) {
        if !self.visible {
            return;
        }
        let Some(template) = self.effective_template().cloned() else {
            return;
        };
        self.container_y = Some(clip.y);

        let mut template = template.write();
        let rect = clip.with_height(template.row_height());
        tracing::trace!(row = %self.id, y = rect.y, height = rect.height, "drawing row");

        template.gradient.draw(canvas, rect);

        for (position, cell) in template.cells.iter().enumerate() {
            cell.render(canvas, rect, cell.resolve(position, &self.values));
        }

        let size = template.border_size();
        if size > 0 && !template.border_color.is_transparent() {
            let half = size / 2;
            let border = Rect::new(half, half, rect.width - size, rect.height - size)
                .offset(rect.x, rect.y);
            canvas.stroke_rect(border, template.border_color, size);
        }
    }
}
