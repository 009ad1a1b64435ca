//! Integration tests for the list engine.
//!
//! These drive a `ListView` through its public API and observe rendering
//! through the recorded display list.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tessera_core::{
    Canvas, Color, DrawCommand, Event, ListAction, MouseButton, Point, RecordingCanvas, Rect,
    Widget,
};
use tessera_widgets::{
    CellSpec, GradientCache, ListConfig, ListScrolled, ListView, Row, RowTemplate,
    SelectionChanged,
};

fn fixed_rows(heights: &[i32], separator: i32, viewport: i32) -> ListView {
    let mut list = ListView::new()
        .with_size(200, viewport)
        .with_separator_size(separator);
    for h in heights {
        let template = RowTemplate::new().height(*h).into_ref();
        list.push_row(Row::new().with_templates(Some(template), None));
    }
    list
}

fn press(list: &mut ListView, at: Point) {
    list.event(&Event::MouseDown {
        position: at,
        button: MouseButton::Left,
    });
}

fn release(list: &mut ListView, at: Point) -> Option<SelectionChanged> {
    list.event(&Event::MouseUp {
        position: at,
        button: MouseButton::Left,
    })
    .and_then(|msg| msg.downcast_ref::<SelectionChanged>().copied())
}

// =============================================================================
// Gradient Tests
// =============================================================================

#[test]
fn test_gradient_black_to_white_height_two() {
    let mut gradient = GradientCache::new(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255));
    let bmp = gradient.render(5, 2);
    assert!(bmp.row(0).unwrap().iter().all(|c| *c == Color::rgb(0, 0, 0)));
    assert!(bmp
        .row(1)
        .unwrap()
        .iter()
        .all(|c| *c == Color::rgb(127, 127, 127)));
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_single_select_moves_selection() {
    let mut list = fixed_rows(&[30, 30, 30], 0, 200);
    list.toggle_selection(0);
    let s = list.rows()[0].id();
    let r = list.rows()[1].id();

    let changed = list.toggle_selection(1).unwrap();
    assert_eq!(changed.row, r);
    assert!(!list.rows()[0].is_selected());
    assert!(list.rows()[1].is_selected());
    let selected: Vec<_> = list.selected_rows().map(Row::id).collect();
    assert_eq!(selected, vec![r]);
    assert_ne!(s, r);
}

#[test]
fn test_selection_by_id_survives_reordering() {
    let mut list = fixed_rows(&[30, 30], 0, 200);
    let id = list.rows()[1].id();
    list.insert_row(0, Row::new()).unwrap();
    let changed = list.toggle_selection_by_id(id).unwrap();
    assert_eq!(changed.index, 2);
    assert!(list.rows()[2].is_selected());
}

#[test]
fn test_clear_rows_empties_selection() {
    let mut list = fixed_rows(&[30, 30], 0, 200).with_multi_select(true);
    list.toggle_selection(0);
    list.toggle_selection(1);
    list.clear_rows();
    assert!(list.selected_ids().is_empty());
    assert_eq!(list.row_count(), 0);
    assert_eq!(list.scroll_max(), 0);
}

#[test]
fn test_replacing_selected_row_drops_it_from_selection() {
    let mut list = fixed_rows(&[30], 0, 200);
    list.toggle_selection(0);
    let old = list.set_row(0, Row::new()).unwrap();
    assert!(!old.is_selected());
    assert_eq!(list.selected_rows().count(), 0);
}

// =============================================================================
// Hit-test Tests
// =============================================================================

#[test]
fn test_hit_test_inside_rows_gaps_and_hidden_rows() {
    let mut list = fixed_rows(&[20, 20, 20], 10, 200);
    // rows at 0..20, 30..50, 60..80
    assert_eq!(list.row_at(0), Some(0));
    assert_eq!(list.row_at(19), Some(0));
    assert_eq!(list.row_at(25), None);
    assert_eq!(list.row_at(45), Some(1));
    assert_eq!(list.row_at(80), None);

    list.update_row(1, |row| row.set_visible(false)).unwrap();
    // hidden row consumes no space; row 2 moves up to 30..50
    assert_eq!(list.row_at(35), Some(2));
    assert_eq!(list.rows()[1].container_y(), None);
}

#[test]
fn test_hit_test_after_scroll() {
    let mut list = fixed_rows(&[50, 50, 50, 50], 0, 100);
    list.set_scroll_position(-75);
    assert_eq!(list.row_at(0), Some(1));
    assert_eq!(list.row_at(30), Some(2));
    assert_eq!(list.rows()[0].container_y(), None);
}

// =============================================================================
// Pointer Tests
// =============================================================================

#[test]
fn test_tap_toggles_exactly_once() {
    let mut list = fixed_rows(&[40, 40], 0, 200);
    let log = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&log);
    list.subscribe_rows(move |_| *sink.borrow_mut() += 1);

    press(&mut list, Point::new(10, 50));
    let changed = release(&mut list, Point::new(12, 51)).unwrap();
    assert_eq!(changed.index, 1);
    assert!(changed.selected);
    assert_eq!(list.selected_rows().count(), 1);
    assert_eq!(*log.borrow(), 0, "selection does not mutate the row collection");
}

#[test]
fn test_release_at_threshold_is_drag() {
    let mut list = fixed_rows(&[40, 40], 0, 200).with_touch_sensitivity(5);
    press(&mut list, Point::new(0, 10));
    assert_eq!(release(&mut list, Point::new(3, 14)), None);
    assert!(list.selected_ids().is_empty());
}

#[test]
fn test_drag_emits_scrolled_messages() {
    let mut list = fixed_rows(&[60, 60, 60], 0, 100);
    press(&mut list, Point::new(0, 80));
    let msg = list
        .event(&Event::MouseMove {
            position: Point::new(0, 20),
        })
        .unwrap();
    assert_eq!(
        msg.downcast_ref::<ListScrolled>(),
        Some(&ListScrolled { offset: -60 })
    );
    // clamped at the bottom
    list.event(&Event::MouseMove {
        position: Point::new(0, -500),
    });
    assert_eq!(list.scroll_position(), -80);
    assert_eq!(release(&mut list, Point::new(0, -500)), None);
}

// =============================================================================
// Template Propagation Tests
// =============================================================================

#[test]
fn test_append_assigns_both_templates_and_backfill_keeps_existing() {
    let mut list = ListView::new().with_size(200, 200);
    list.push_template(RowTemplate::new().height(20));
    list.push_template(RowTemplate::new().height(30));
    list.set_template_index_default(Some(0));
    list.set_template_index_selected(Some(1));

    list.push_row(Row::new());
    assert_eq!(list.rows()[0].default_template(), list.template(0));
    assert_eq!(list.rows()[0].selected_template(), list.template(1));

    list.push_template(RowTemplate::new().height(99));
    assert_eq!(list.rows()[0].default_template(), list.template(0));
    assert_eq!(list.rows()[0].selected_template(), list.template(1));
}

#[test]
fn test_template_notifications() {
    let mut list = ListView::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    list.subscribe_templates(move |change| sink.borrow_mut().push(change.action));

    list.push_template(RowTemplate::new());
    list.update_template(0, |t| t.set_height(12)).unwrap();
    list.remove_template(0).unwrap();
    list.clear_templates();
    assert_eq!(
        *log.borrow(),
        vec![
            ListAction::Add,
            ListAction::Update,
            ListAction::Remove,
            ListAction::Clear
        ]
    );
}

#[test]
fn test_update_and_remove_do_not_propagate() {
    let mut list = ListView::new()
        .with_size(200, 200)
        .with_template_indices(Some(0), None);
    list.push_row(Row::new());
    list.push_template(RowTemplate::new());
    list.push_row(Row::new());
    list.set_row(1, Row::new()).unwrap();
    assert!(list.rows()[1].default_template().is_none());
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_row_draw_order_background_cells_border() {
    let mut list = ListView::new()
        .with_size(100, 100)
        .with_template_indices(Some(0), None);
    list.push_template(
        RowTemplate::new()
            .height(30)
            .border(Color::BLACK, 2)
            .cell(CellSpec::text().back_color(Color::WHITE)),
    );
    list.push_row(Row::with_values(["hello"]));

    let kinds: Vec<&'static str> = list
        .backbuffer()
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::FillRect { .. } => "fill",
            DrawCommand::StrokeRect { .. } => "stroke",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Image { .. } => "image",
            DrawCommand::Text { .. } => "text",
        })
        .collect();
    assert_eq!(kinds, vec!["fill", "image", "fill", "text", "stroke"]);
}

#[test]
fn test_constant_cell_ignores_row_data() {
    let mut list = ListView::new()
        .with_size(100, 100)
        .with_template_indices(Some(0), None);
    list.push_template(
        RowTemplate::new().cell(CellSpec::text().data_index(-2).constant_text("Label")),
    );
    list.push_row(Row::with_values(["data"]));

    let text = list.backbuffer().commands().iter().find_map(|c| match c {
        DrawCommand::Text { text, .. } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(text.as_deref(), Some("Label"));
}

#[test]
fn test_paint_matches_backbuffer() {
    let mut list = fixed_rows(&[30, 30], 0, 100);
    list.layout(Rect::new(0, 0, 200, 100));
    let mut canvas = RecordingCanvas::new();
    list.paint(&mut canvas);
    assert_eq!(canvas.commands(), list.backbuffer().commands());
    canvas.fill_rect(Rect::new(0, 0, 1, 1), Color::BLACK);
    assert_ne!(canvas.command_count(), list.backbuffer().command_count());
}

#[test]
fn test_config_built_list_accepts_rows() {
    let yaml = r##"
separator_size: 4
template_default: 0
templates:
  - height: 25
    cells:
      - kind: text
        bounds: [0, 0, -1, -1]
"##;
    let mut list = ListConfig::load(yaml).unwrap();
    list.resize(100, 100);
    list.push_row(Row::with_values(["a"]));
    list.push_row(Row::with_values(["b"]));
    assert_eq!(list.rows()[1].container_y(), Some(29));
    assert_eq!(list.content_height(), 54);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_scroll_position_is_clamped(
        heights in prop::collection::vec(0i32..80, 0..12),
        separator in 0i32..10,
        viewport in 0i32..300,
        requested in -2000i32..2000
    ) {
        let mut list = fixed_rows(&heights, separator, viewport);
        list.set_scroll_position(requested);
        let max = list.scroll_max();
        prop_assert_eq!(list.scroll_position(), requested.clamp(-max, 0));
    }

    #[test]
    fn prop_scroll_max_formula(
        heights in prop::collection::vec(0i32..80, 0..12),
        separator in 0i32..10,
        viewport in 0i32..300
    ) {
        let list = fixed_rows(&heights, separator, viewport);
        let visible: Vec<i32> = heights.iter().copied().filter(|h| *h > 0).collect();
        let n = visible.len() as i32;
        let content = if n == 0 {
            0
        } else {
            visible.iter().sum::<i32>() + separator * (n - 1)
        };
        prop_assert_eq!(list.scroll_max(), (content - viewport).max(0));
    }

    #[test]
    fn prop_single_select_keeps_at_most_one(toggles in prop::collection::vec(0usize..6, 0..20)) {
        let mut list = fixed_rows(&[10, 10, 10, 10], 0, 100);
        for index in toggles {
            list.toggle_selection(index);
            prop_assert!(list.selected_ids().len() <= 1);
            let flagged = list.rows().iter().filter(|r| r.is_selected()).count();
            prop_assert_eq!(flagged, list.selected_ids().len());
        }
    }

    #[test]
    fn prop_tap_vs_drag(dx in -20i32..20, dy in -20i32..20) {
        let mut list = fixed_rows(&[200], 0, 200);
        list.pointer_down(Point::new(50, 100));
        let result = list.pointer_up(Point::new(50 + dx, 100 + dy));
        let is_tap = dx * dx + dy * dy < 100;
        prop_assert_eq!(result.is_some(), is_tap);
    }
}
