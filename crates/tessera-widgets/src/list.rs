//! Templated list view with drag scrolling and tap selection.
//!
//! [`ListView`] owns the rows, the templates and the scroll/selection state.
//! Every state-changing call recomputes the scroll bounds and regenerates the
//! backbuffer before returning; [`Widget::paint`] only replays it.
//!
//! Coordinates passed to the `pointer_*` methods and stored as row offsets are
//! local to the viewport. [`Widget::event`] converts from the host's
//! coordinates using the bounds given to [`Widget::layout`].

use crate::error::ListError;
use crate::row::{Row, RowId};
use crate::template::{RowTemplate, TemplateRef};
use std::any::Any;
use tessera_core::{
    Canvas, Color, Event, LayoutResult, ListChanged, MouseButton, ObservableVec, Point,
    RecordingCanvas, Rect, Size, Widget,
};

/// Message emitted when a row's selection state flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The row whose state changed
    pub row: RowId,
    /// Its position in the list
    pub index: usize,
    /// New state
    pub selected: bool,
}

/// Message emitted when a drag moves the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListScrolled {
    /// New scroll position
    pub offset: i32,
}

/// Single-pointer press/drag state.
#[derive(Debug, Clone, Copy, Default)]
struct PointerTracker {
    pressed: bool,
    press: Point,
    last: Point,
}

/// Templated, selectable, drag-scrollable list.
#[derive(Debug)]
pub struct ListView {
    rows: ObservableVec<Row>,
    templates: ObservableVec<TemplateRef>,
    bounds: Rect,
    viewport: Size,
    scroll_offset: i32,
    scroll_max: i32,
    /// Selected rows, in selection order
    selected: Vec<RowId>,
    multi_select: bool,
    separator_size: i32,
    touch_sensitivity: i32,
    template_default: Option<usize>,
    template_selected: Option<usize>,
    back_color: Color,
    backbuffer: RecordingCanvas,
    pointer: PointerTracker,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            rows: ObservableVec::new(),
            templates: ObservableVec::new(),
            bounds: Rect::default(),
            viewport: Size::ZERO,
            scroll_offset: 0,
            scroll_max: 0,
            selected: Vec::new(),
            multi_select: false,
            separator_size: 0,
            touch_sensitivity: 10,
            template_default: None,
            template_selected: None,
            back_color: Color::GRAY,
            backbuffer: RecordingCanvas::new(),
            pointer: PointerTracker::default(),
        }
    }
}

impl ListView {
    /// Create an empty list with a zero-sized viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport size.
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.resize(width, height);
        self
    }

    /// Set the gap between rows.
    #[must_use]
    pub fn with_separator_size(mut self, size: i32) -> Self {
        self.set_separator_size(size);
        self
    }

    /// Allow several rows to be selected at once.
    #[must_use]
    pub fn with_multi_select(mut self, enabled: bool) -> Self {
        self.set_multi_select(enabled);
        self
    }

    /// Set the tap/drag threshold in pixels.
    #[must_use]
    pub fn with_touch_sensitivity(mut self, sensitivity: i32) -> Self {
        self.set_touch_sensitivity(sensitivity);
        self
    }

    /// Set the viewport background.
    #[must_use]
    pub fn with_back_color(mut self, color: Color) -> Self {
        self.set_back_color(color);
        self
    }

    /// Set which templates new rows receive.
    #[must_use]
    pub const fn with_template_indices(
        mut self,
        default_index: Option<usize>,
        selected_index: Option<usize>,
    ) -> Self {
        self.template_default = default_index;
        self.template_selected = selected_index;
        self
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// All rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.rows.as_slice()
    }

    /// Row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the row with this id.
    #[must_use]
    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    /// Observe row collection changes.
    pub fn subscribe_rows<F>(&mut self, callback: F)
    where
        F: FnMut(&ListChanged<'_, Row>) + 'static,
    {
        self.rows.subscribe(callback);
    }

    /// Append a row, assigning the configured templates. Returns its index.
    pub fn push_row(&mut self, row: Row) -> usize {
        let index = self.rows.push(row);
        self.apply_templates_to_row(index);
        self.refresh();
        index
    }

    /// Insert a row at `index`, assigning the configured templates.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index > row_count()`.
    pub fn insert_row(&mut self, index: usize, row: Row) -> Result<(), ListError> {
        self.rows.insert(index, row)?;
        self.apply_templates_to_row(index);
        self.refresh();
        Ok(())
    }

    /// Replace the row at `index`, returning the old one deselected.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn set_row(&mut self, index: usize, row: Row) -> Result<Row, ListError> {
        let mut old = self.rows.set(index, row)?;
        self.forget_selection(&mut old);
        self.refresh();
        Ok(old)
    }

    /// Modify the row at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn update_row<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Row) -> R,
    ) -> Result<R, ListError> {
        let result = self.rows.update(index, f)?;
        self.refresh();
        Ok(result)
    }

    /// Remove the row at `index`, returning it deselected.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> Result<Row, ListError> {
        let mut row = self.rows.remove(index)?;
        self.forget_selection(&mut row);
        self.refresh();
        Ok(row)
    }

    /// Remove every row.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
        self.selected.clear();
        self.scroll_offset = 0;
        self.refresh();
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// All templates in order.
    #[must_use]
    pub fn templates(&self) -> &[TemplateRef] {
        self.templates.as_slice()
    }

    /// Template at `index`.
    #[must_use]
    pub fn template(&self, index: usize) -> Option<&TemplateRef> {
        self.templates.get(index)
    }

    /// Observe template collection changes.
    pub fn subscribe_templates<F>(&mut self, callback: F)
    where
        F: FnMut(&ListChanged<'_, TemplateRef>) + 'static,
    {
        self.templates.subscribe(callback);
    }

    /// Append a template and back-fill rows whose slots are still unset.
    /// Returns its index.
    pub fn push_template(&mut self, template: impl Into<TemplateRef>) -> usize {
        let index = self.templates.push(template.into());
        self.backfill_templates();
        self.refresh();
        index
    }

    /// Insert a template and back-fill rows whose slots are still unset.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index > templates().len()`.
    pub fn insert_template(
        &mut self,
        index: usize,
        template: impl Into<TemplateRef>,
    ) -> Result<(), ListError> {
        self.templates.insert(index, template.into())?;
        self.backfill_templates();
        self.refresh();
        Ok(())
    }

    /// Replace the template at `index`. Rows keep the template they hold.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn set_template(
        &mut self,
        index: usize,
        template: impl Into<TemplateRef>,
    ) -> Result<TemplateRef, ListError> {
        let old = self.templates.set(index, template.into())?;
        self.refresh();
        Ok(old)
    }

    /// Modify the template at `index`; every row sharing it sees the change.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn update_template<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut RowTemplate) -> R,
    ) -> Result<R, ListError> {
        let result = self
            .templates
            .update(index, |template| f(&mut template.write()))?;
        self.refresh();
        Ok(result)
    }

    /// Remove the template at `index`. Rows keep the template they hold.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Collection`] when `index` is out of range.
    pub fn remove_template(&mut self, index: usize) -> Result<TemplateRef, ListError> {
        let old = self.templates.remove(index)?;
        self.refresh();
        Ok(old)
    }

    /// Remove every template. Rows keep the templates they hold.
    pub fn clear_templates(&mut self) {
        self.templates.clear();
        self.refresh();
    }

    /// Template index assigned as the default template of new rows.
    #[must_use]
    pub const fn template_index_default(&self) -> Option<usize> {
        self.template_default
    }

    /// Set the default template index used by future propagation.
    pub fn set_template_index_default(&mut self, index: Option<usize>) {
        self.template_default = index;
    }

    /// Template index assigned as the selected template of new rows.
    #[must_use]
    pub const fn template_index_selected(&self) -> Option<usize> {
        self.template_selected
    }

    /// Set the selected template index used by future propagation.
    pub fn set_template_index_selected(&mut self, index: Option<usize>) {
        self.template_selected = index;
    }

    fn indexed_template(&self, index: Option<usize>) -> Option<TemplateRef> {
        index.and_then(|i| self.templates.get(i)).cloned()
    }

    fn apply_templates_to_row(&mut self, index: usize) {
        let default_template = self.indexed_template(self.template_default);
        let selected_template = self.indexed_template(self.template_selected);
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if let Some(template) = default_template {
            row.set_default_template(Some(template));
        }
        if let Some(template) = selected_template {
            row.set_selected_template(Some(template));
        }
        tracing::debug!(row = %row.id(), index, "assigned templates to new row");
    }

    fn backfill_templates(&mut self) {
        let default_template = self.indexed_template(self.template_default);
        let selected_template = self.indexed_template(self.template_selected);
        let mut filled = 0_usize;
        for row in self.rows.iter_mut() {
            if row.default_template().is_none() {
                if let Some(template) = &default_template {
                    row.set_default_template(Some(template.clone()));
                    filled += 1;
                }
            }
            if row.selected_template().is_none() {
                if let Some(template) = &selected_template {
                    row.set_selected_template(Some(template.clone()));
                    filled += 1;
                }
            }
        }
        if filled > 0 {
            tracing::debug!(filled, "back-filled unset row templates");
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Gap between consecutive visible rows.
    #[must_use]
    pub const fn separator_size(&self) -> i32 {
        self.separator_size
    }

    /// Set the row gap, clamping negatives to 0.
    pub fn set_separator_size(&mut self, size: i32) {
        let size = size.max(0);
        if size != self.separator_size {
            self.separator_size = size;
            self.refresh();
        }
    }

    /// Whether several rows may be selected at once.
    #[must_use]
    pub const fn multi_select(&self) -> bool {
        self.multi_select
    }

    /// Enable or disable multi-select. Disabling keeps only the most
    /// recently selected row.
    pub fn set_multi_select(&mut self, enabled: bool) {
        self.multi_select = enabled;
        if enabled || self.selected.len() <= 1 {
            return;
        }
        let keep = self.selected.len() - 1;
        let dropped: Vec<RowId> = self.selected.drain(..keep).collect();
        for row in self.rows.iter_mut() {
            if dropped.contains(&row.id()) {
                row.set_selected(false);
            }
        }
        tracing::debug!(dropped = dropped.len(), "multi-select disabled");
        self.refresh();
    }

    /// Squared-distance threshold root separating taps from drags.
    #[must_use]
    pub const fn touch_sensitivity(&self) -> i32 {
        self.touch_sensitivity
    }

    /// Set the tap threshold, clamping to at least 1.
    pub fn set_touch_sensitivity(&mut self, sensitivity: i32) {
        self.touch_sensitivity = sensitivity.max(1);
    }

    /// Viewport background color.
    #[must_use]
    pub const fn back_color(&self) -> Color {
        self.back_color
    }

    /// Set the viewport background color.
    pub fn set_back_color(&mut self, color: Color) {
        if color != self.back_color {
            self.back_color = color;
            self.redraw();
        }
    }

    /// Viewport size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport, clamping negative sizes to 0.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport = Size::new(width.max(0), height.max(0));
        self.bounds = self.bounds.with_size(self.viewport);
        tracing::debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            "list resized"
        );
        self.refresh();
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Current scroll position, in `[-scroll_max, 0]`.
    #[must_use]
    pub const fn scroll_position(&self) -> i32 {
        self.scroll_offset
    }

    /// Largest distance the content can scroll.
    #[must_use]
    pub const fn scroll_max(&self) -> i32 {
        self.scroll_max
    }

    /// Scroll to `offset`, clamped to `[-scroll_max, 0]`.
    ///
    /// Returns `false` without redrawing when the clamped value equals the
    /// current position.
    pub fn set_scroll_position(&mut self, offset: i32) -> bool {
        let offset = offset.clamp(-self.scroll_max, 0);
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        self.redraw();
        true
    }

    /// Total height of visible rows plus the separators between them.
    #[must_use]
    pub fn content_height(&self) -> i32 {
        let heights = self
            .rows
            .iter()
            .filter(|row| row.is_visible())
            .map(Row::height)
            .filter(|h| *h > 0);
        let (count, total) = heights.fold((0_i32, 0_i32), |(n, sum), h| {
            (n.saturating_add(1), sum.saturating_add(h))
        });
        if count == 0 {
            return 0;
        }
        total.saturating_add(self.separator_size.saturating_mul(count - 1))
    }

    fn recompute_scroll_bounds(&mut self) {
        let scroll_max = self
            .content_height()
            .saturating_sub(self.viewport.height)
            .max(0);
        if scroll_max != self.scroll_max {
            tracing::debug!(
                old = self.scroll_max,
                new = scroll_max,
                "scroll bounds changed"
            );
            self.scroll_max = scroll_max;
        }
        self.scroll_offset = self.scroll_offset.clamp(-self.scroll_max, 0);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selected rows, in the order they were selected.
    pub fn selected_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.selected
            .iter()
            .filter_map(|id| self.rows.iter().find(|row| row.id() == *id))
    }

    /// Ids of the selected rows, in selection order.
    #[must_use]
    pub fn selected_ids(&self) -> &[RowId] {
        &self.selected
    }

    /// Flip the selection state of the row at `index`.
    ///
    /// Out-of-range indices are ignored. Selecting a row with multi-select
    /// disabled deselects every other row first.
    pub fn toggle_selection(&mut self, index: usize) -> Option<SelectionChanged> {
        let Some(row) = self.rows.get(index) else {
            tracing::debug!(index, "ignoring selection toggle out of range");
            return None;
        };
        let id = row.id();
        let selected = !row.is_selected();

        if selected {
            if !self.multi_select {
                for other in self.rows.iter_mut() {
                    if other.id() != id && other.is_selected() {
                        other.set_selected(false);
                    }
                }
                self.selected.clear();
            }
            self.selected.push(id);
        } else {
            self.selected.retain(|s| *s != id);
        }
        if let Some(row) = self.rows.get_mut(index) {
            row.set_selected(selected);
        }

        tracing::debug!(row = %id, index, selected, "selection changed");
        self.refresh();
        Some(SelectionChanged {
            row: id,
            index,
            selected,
        })
    }

    /// Flip the selection state of the row with this id.
    pub fn toggle_selection_by_id(&mut self, id: RowId) -> Option<SelectionChanged> {
        let index = self.row_index(id)?;
        self.toggle_selection(index)
    }

    fn forget_selection(&mut self, row: &mut Row) {
        if row.is_selected() {
            let id = row.id();
            self.selected.retain(|s| *s != id);
            row.set_selected(false);
        }
    }

    // =========================================================================
    // Hit-testing and pointer input
    // =========================================================================

    /// Index of the visible row whose last drawn span contains `y`.
    ///
    /// Spans are as of the latest layout pass.
    #[must_use]
    pub fn row_at(&self, y: i32) -> Option<usize> {
        let hit = self.rows.iter().position(|row| row.contains_y(y));
        tracing::trace!(y, ?hit, "hit-test");
        hit
    }

    /// Start tracking a press at a viewport-local point.
    pub fn pointer_down(&mut self, position: Point) {
        self.pointer = PointerTracker {
            pressed: true,
            press: position,
            last: position,
        };
    }

    /// Drag-scroll by the vertical movement since the last pointer point.
    pub fn pointer_move(&mut self, position: Point) -> Option<ListScrolled> {
        if !self.pointer.pressed {
            return None;
        }
        let dy = position.y.saturating_sub(self.pointer.last.y);
        self.pointer.last = position;
        if dy != 0 && self.set_scroll_position(self.scroll_offset.saturating_add(dy)) {
            Some(ListScrolled {
                offset: self.scroll_offset,
            })
        } else {
            None
        }
    }

    /// Finish a press. A release closer to the press point than the touch
    /// sensitivity is a tap and toggles the row under the press point.
    pub fn pointer_up(&mut self, position: Point) -> Option<SelectionChanged> {
        if !self.pointer.pressed {
            return None;
        }
        self.pointer.pressed = false;

        let press = self.pointer.press;
        let sensitivity = i64::from(self.touch_sensitivity);
        if press.distance_squared(&position) >= sensitivity * sensitivity {
            tracing::trace!(?press, ?position, "drag completed");
            return None;
        }
        let index = self.row_at(press.y)?;
        self.toggle_selection(index)
    }

    fn to_local(&self, position: Point) -> Point {
        position - self.bounds.origin()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The composite display list from the latest layout pass.
    #[must_use]
    pub const fn backbuffer(&self) -> &RecordingCanvas {
        &self.backbuffer
    }

    fn refresh(&mut self) {
        self.recompute_scroll_bounds();
        self.redraw();
    }

    fn redraw(&mut self) {
        let _span = tracing::debug_span!(
            "list_redraw",
            rows = self.rows.len(),
            offset = self.scroll_offset
        )
        .entered();

        self.backbuffer.clear();
        for row in self.rows.iter_mut() {
            row.reset_container();
        }

        let viewport = self.viewport;
        if viewport.is_empty() {
            return;
        }
        self.backbuffer
            .fill_rect(Rect::from_size(viewport), self.back_color);

        let mut y = self.scroll_offset;
        for row in self.rows.iter_mut() {
            if viewport.height.saturating_sub(y) <= 0 {
                break;
            }
            let height = row.height();
            if y.saturating_add(height) > 0 {
                row.draw(
                    &mut self.backbuffer,
                    Rect::new(0, y, viewport.width, viewport.height),
                );
            }
            if row.is_visible() && height > 0 {
                y = y.saturating_add(height).saturating_add(self.separator_size);
            }
        }
    }
}

impl Widget for ListView {
    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.resize(bounds.width, bounds.height);
        LayoutResult {
            size: self.viewport,
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.backbuffer.replay_at(canvas, self.bounds.origin());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>> {
        match *event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer_down(self.to_local(position));
                None
            }
            Event::MouseMove { position } => {
                let position = self.to_local(position);
                self.pointer_move(position)
                    .map(|msg| Box::new(msg) as Box<dyn Any>)
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let position = self.to_local(position);
                self.pointer_up(position)
                    .map(|msg| Box::new(msg) as Box<dyn Any>)
            }
            Event::Resize { width, height } => {
                self.resize(width, height);
                None
            }
            _ => None,
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::DrawCommand;

    fn list_with_rows(heights: &[i32], viewport: i32) -> ListView {
        let mut list = ListView::new().with_size(100, viewport);
        for h in heights {
            let template = RowTemplate::new().height(*h).into_ref();
            list.push_row(Row::new().with_templates(Some(template), None));
        }
        list
    }

    // =========================================================================
    // Scroll Tests
    // =========================================================================

    #[test]
    fn test_scroll_max_sums_rows_and_separators() {
        let list = list_with_rows(&[40, 40, 40], 100).with_separator_size(5);
        assert_eq!(list.content_height(), 130);
        assert_eq!(list.scroll_max(), 30);
    }

    #[test]
    fn test_scroll_max_skips_invisible_and_zero_height() {
        let mut list = list_with_rows(&[40, 0, 40, 40], 50).with_separator_size(10);
        list.update_row(2, |row| row.set_visible(false)).unwrap();
        // two rows of 40 and one separator
        assert_eq!(list.scroll_max(), 40);
    }

    #[test]
    fn test_huge_separator_saturates_content_height() {
        let mut list = list_with_rows(&[10, 10, 10], 100);
        list.set_separator_size(i32::MAX);
        assert_eq!(list.content_height(), i32::MAX);
        assert_eq!(list.scroll_max(), i32::MAX - 100);
        assert_eq!(list.rows()[0].container_y(), Some(0));
        assert_eq!(list.rows()[1].container_y(), None);

        assert!(list.set_scroll_position(i32::MIN));
        assert_eq!(list.scroll_position(), -(i32::MAX - 100));
        assert_eq!(list.row_at(0), None);
    }

    #[test]
    fn test_extreme_drag_saturates() {
        let mut list = list_with_rows(&[50, 50, 50], 100);
        list.pointer_down(Point::new(0, i32::MAX));
        let scrolled = list.pointer_move(Point::new(0, i32::MIN)).unwrap();
        assert_eq!(scrolled.offset, -50);
        assert_eq!(list.pointer_up(Point::new(0, i32::MIN)), None);
    }

    #[test]
    fn test_scroll_max_zero_when_content_fits() {
        let list = list_with_rows(&[10, 10], 100);
        assert_eq!(list.scroll_max(), 0);
        assert_eq!(ListView::new().with_size(10, 10).scroll_max(), 0);
    }

    #[test]
    fn test_set_scroll_position_clamps() {
        let mut list = list_with_rows(&[50, 50, 50], 100);
        assert!(list.set_scroll_position(-500));
        assert_eq!(list.scroll_position(), -50);
        assert!(list.set_scroll_position(20));
        assert_eq!(list.scroll_position(), 0);
    }

    #[test]
    fn test_set_scroll_position_same_value_is_noop() {
        let mut list = list_with_rows(&[50, 50, 50], 100);
        assert!(!list.set_scroll_position(0));
        assert!(!list.set_scroll_position(10));
    }

    #[test]
    fn test_removing_rows_reclamps_scroll() {
        let mut list = list_with_rows(&[50, 50, 50], 100);
        list.set_scroll_position(-50);
        list.remove_row(0).unwrap();
        assert_eq!(list.scroll_max(), 0);
        assert_eq!(list.scroll_position(), 0);
    }

    // =========================================================================
    // Layout Tests
    // =========================================================================

    #[test]
    fn test_layout_records_container_offsets() {
        let list = list_with_rows(&[30, 30, 30], 100).with_separator_size(2);
        let offsets: Vec<Option<i32>> = list.rows().iter().map(Row::container_y).collect();
        assert_eq!(offsets, vec![Some(0), Some(32), Some(64)]);
    }

    #[test]
    fn test_layout_skips_rows_above_viewport() {
        let mut list = list_with_rows(&[30, 30, 30, 30], 60);
        list.set_scroll_position(-30);
        assert_eq!(list.row(0).and_then(Row::container_y), None);
        assert_eq!(list.row(1).and_then(Row::container_y), Some(0));
        assert_eq!(list.row(2).and_then(Row::container_y), Some(30));
        assert_eq!(list.row(3).and_then(Row::container_y), None);
    }

    #[test]
    fn test_layout_fills_background_first() {
        let list = list_with_rows(&[10], 50).with_back_color(Color::WHITE);
        assert_eq!(
            list.backbuffer().commands()[0],
            DrawCommand::FillRect {
                rect: Rect::new(0, 0, 100, 50),
                color: Color::WHITE
            }
        );
    }

    #[test]
    fn test_empty_viewport_draws_nothing() {
        let list = list_with_rows(&[10], 0);
        assert!(list.backbuffer().is_empty());
    }

    #[test]
    fn test_paint_replays_at_bounds_origin() {
        let mut list = list_with_rows(&[10], 0);
        list.layout(Rect::new(5, 7, 100, 50));
        let mut canvas = RecordingCanvas::new();
        list.paint(&mut canvas);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::FillRect {
                rect: Rect::new(5, 7, 100, 50),
                color: Color::GRAY
            }
        );
    }

    // =========================================================================
    // Selection Tests
    // =========================================================================

    #[test]
    fn test_single_select_replaces_previous() {
        let mut list = list_with_rows(&[20, 20, 20], 100);
        list.toggle_selection(0);
        let changed = list.toggle_selection(2).unwrap();
        assert!(changed.selected);
        assert_eq!(changed.index, 2);
        assert!(!list.rows()[0].is_selected());
        assert!(list.rows()[2].is_selected());
        assert_eq!(list.selected_ids(), &[list.rows()[2].id()]);
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut list = list_with_rows(&[20], 100);
        list.toggle_selection(0);
        let changed = list.toggle_selection(0).unwrap();
        assert!(!changed.selected);
        assert_eq!(list.selected_rows().count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut list = list_with_rows(&[20], 100);
        assert_eq!(list.toggle_selection(5), None);
        assert!(list.selected_ids().is_empty());
    }

    #[test]
    fn test_multi_select_keeps_all() {
        let mut list = list_with_rows(&[20, 20, 20], 100).with_multi_select(true);
        list.toggle_selection(0);
        list.toggle_selection(2);
        assert_eq!(list.selected_rows().count(), 2);
    }

    #[test]
    fn test_disabling_multi_select_keeps_latest() {
        let mut list = list_with_rows(&[20, 20, 20], 100).with_multi_select(true);
        list.toggle_selection(1);
        list.toggle_selection(0);
        list.set_multi_select(false);
        let ids: Vec<RowId> = list.selected_rows().map(Row::id).collect();
        assert_eq!(ids, vec![list.rows()[0].id()]);
        assert!(!list.rows()[1].is_selected());
    }

    #[test]
    fn test_remove_selected_row_updates_set() {
        let mut list = list_with_rows(&[20, 20], 100);
        list.toggle_selection(1);
        let removed = list.remove_row(1).unwrap();
        assert!(!removed.is_selected());
        assert!(list.selected_ids().is_empty());
    }

    #[test]
    fn test_selected_template_changes_height() {
        let mut list = ListView::new().with_size(100, 100);
        list.push_template(RowTemplate::new().height(20));
        list.push_template(RowTemplate::new().height(60));
        list.set_template_index_default(Some(0));
        list.set_template_index_selected(Some(1));
        list.push_row(Row::new());
        list.push_row(Row::new());

        list.toggle_selection(0);
        assert_eq!(list.rows()[0].height(), 60);
        assert_eq!(list.rows()[1].container_y(), Some(60));
    }

    // =========================================================================
    // Template Propagation Tests
    // =========================================================================

    #[test]
    fn test_row_append_receives_indexed_templates() {
        let mut list = ListView::new()
            .with_size(100, 100)
            .with_template_indices(Some(0), Some(1));
        list.push_template(RowTemplate::new());
        list.push_template(RowTemplate::new());
        list.push_row(Row::new());

        let row = &list.rows()[0];
        assert_eq!(row.default_template(), list.template(0));
        assert_eq!(row.selected_template(), list.template(1));
    }

    #[test]
    fn test_template_append_backfills_unset_slots_only() {
        let own = RowTemplate::new().height(5).into_ref();
        let mut list = ListView::new()
            .with_size(100, 100)
            .with_template_indices(Some(0), None);
        list.push_row(Row::new());
        list.push_row(Row::new().with_templates(Some(own.clone()), None));

        list.push_template(RowTemplate::new());
        assert_eq!(list.rows()[0].default_template(), list.template(0));
        assert_eq!(list.rows()[1].default_template(), Some(&own));
    }

    #[test]
    fn test_out_of_range_template_index_skipped() {
        let mut list = ListView::new()
            .with_size(100, 100)
            .with_template_indices(Some(3), None);
        list.push_template(RowTemplate::new());
        list.push_row(Row::new());
        assert!(list.rows()[0].default_template().is_none());
        assert_eq!(list.rows()[0].height(), 0);
    }

    #[test]
    fn test_update_template_redraws_with_new_height() {
        let mut list = ListView::new()
            .with_size(100, 100)
            .with_template_indices(Some(0), None);
        list.push_template(RowTemplate::new().height(10));
        list.push_row(Row::new());
        list.push_row(Row::new());
        list.update_template(0, |t| t.set_height(25)).unwrap();
        assert_eq!(list.rows()[1].container_y(), Some(25));
    }

    // =========================================================================
    // Pointer Tests
    // =========================================================================

    #[test]
    fn test_tap_selects_row_under_press() {
        let mut list = list_with_rows(&[30, 30, 30], 100);
        list.pointer_down(Point::new(10, 45));
        let changed = list.pointer_up(Point::new(13, 49)).unwrap();
        assert_eq!(changed.index, 1);
        assert!(list.rows()[1].is_selected());
    }

    #[test]
    fn test_release_past_sensitivity_is_drag() {
        let mut list = list_with_rows(&[30, 30, 30], 100);
        list.pointer_down(Point::new(0, 10));
        assert_eq!(list.pointer_up(Point::new(6, 18)), None);
        assert!(list.selected_ids().is_empty());
    }

    #[test]
    fn test_drag_scrolls_by_vertical_delta() {
        let mut list = list_with_rows(&[50, 50, 50, 50], 100);
        list.pointer_down(Point::new(0, 90));
        let scrolled = list.pointer_move(Point::new(0, 60)).unwrap();
        assert_eq!(scrolled.offset, -30);
        assert_eq!(list.pointer_move(Point::new(0, 60)), None);
        list.pointer_up(Point::new(0, 60));
        assert_eq!(list.scroll_position(), -30);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut list = list_with_rows(&[50, 50, 50], 100);
        assert_eq!(list.pointer_move(Point::new(0, -40)), None);
        assert_eq!(list.scroll_position(), 0);
    }

    #[test]
    fn test_event_tap_emits_selection_changed() {
        let mut list = list_with_rows(&[30, 30], 100);
        list.layout(Rect::new(0, 100, 100, 100));
        let down = Event::MouseDown {
            position: Point::new(5, 105),
            button: MouseButton::Left,
        };
        let up = Event::MouseUp {
            position: Point::new(5, 105),
            button: MouseButton::Left,
        };
        assert!(list.event(&down).is_none());
        let msg = list.event(&up).unwrap();
        let changed = msg.downcast_ref::<SelectionChanged>().unwrap();
        assert_eq!(changed.index, 0);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut list = list_with_rows(&[30], 100);
        let down = Event::MouseDown {
            position: Point::new(5, 5),
            button: MouseButton::Right,
        };
        let up = Event::MouseUp {
            position: Point::new(5, 5),
            button: MouseButton::Right,
        };
        assert!(list.event(&down).is_none());
        assert!(list.event(&up).is_none());
        assert!(list.selected_ids().is_empty());
    }

    #[test]
    fn test_resize_event_clamps_and_recomputes() {
        let mut list = list_with_rows(&[50, 50], 100);
        list.event(&Event::Resize {
            width: 100,
            height: 40,
        });
        assert_eq!(list.scroll_max(), 60);
        list.resize(-5, -5);
        assert_eq!(list.size(), Size::ZERO);
    }

    #[test]
    fn test_touch_sensitivity_clamps() {
        let list = ListView::new().with_touch_sensitivity(0);
        assert_eq!(list.touch_sensitivity(), 1);
        assert_eq!(ListView::new().touch_sensitivity(), 10);
    }

    #[test]
    fn test_separator_negative_clamps() {
        let list = ListView::new().with_separator_size(-4);
        assert_eq!(list.separator_size(), 0);
    }
}
