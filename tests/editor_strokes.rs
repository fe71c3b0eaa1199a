use pixel_paint::settings::DEFAULT_CANVAS_SIZE;
use pixel_paint::{
    BrushShape, BrushSize, CanvasError, Color, Editor, EditorSettings, GestureOutcome, Grid,
    ToolType,
};

const RED: Color = Color::rgb(255, 0, 0);
const HALF_RED: Color = Color::rgba(255, 0, 0, 0.5);

fn editor_with(tool: ToolType, color: Color) -> Editor {
    let settings = EditorSettings {
        tool,
        color,
        ..Default::default()
    };
    Editor::with_grid(Grid::create_empty(16, 16).unwrap(), settings)
}

#[test]
fn test_default_session() {
    let editor = Editor::default();
    assert_eq!(editor.grid().width(), DEFAULT_CANVAS_SIZE);
    assert_eq!(editor.grid().height(), DEFAULT_CANVAS_SIZE);
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn test_drag_stroke_commits_once() {
    let mut editor = editor_with(ToolType::Pencil, RED);

    assert_eq!(editor.pointer_down(0, 0), GestureOutcome::Painted);
    for x in 1..6 {
        assert_eq!(editor.pointer_move(x, 0), GestureOutcome::Painted);
    }
    assert!(editor.is_stroke_active());
    // Preview shows the stroke before anything is committed.
    assert_eq!(editor.grid().get(5, 0).unwrap().color(), RED);
    assert!(editor.committed_grid().is_blank());
    assert_eq!(editor.history().len(), 1);

    assert_eq!(editor.pointer_up(), GestureOutcome::Committed);
    assert!(!editor.is_stroke_active());
    assert_eq!(editor.history().len(), 2);
    for x in 0..6 {
        assert_eq!(editor.committed_grid().get(x, 0).unwrap().color(), RED);
    }
}

#[test]
fn test_stroke_paints_each_cell_once() {
    let mut editor = editor_with(ToolType::Pencil, HALF_RED);

    editor.pointer_down(2, 2);
    assert_eq!(editor.pointer_move(2, 2), GestureOutcome::Ignored);
    editor.pointer_move(3, 2);
    editor.pointer_move(2, 2);
    editor.pointer_move(3, 2);
    editor.pointer_up();

    assert_eq!(editor.grid().get(2, 2).unwrap().color(), HALF_RED);
    assert_eq!(editor.grid().get(3, 2).unwrap().color(), HALF_RED);
}

#[test]
fn test_undo_redo_whole_stroke() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(1, 1);
    editor.pointer_move(2, 1);
    editor.pointer_up();
    let painted = editor.grid().clone();

    assert!(editor.undo().unwrap());
    assert!(editor.grid().is_blank());
    assert!(!editor.undo().unwrap());

    assert!(editor.redo().unwrap());
    assert_eq!(editor.grid(), &painted);
    assert!(!editor.redo().unwrap());
}

#[test]
fn test_pointer_leave_finishes_stroke() {
    let mut editor = editor_with(ToolType::Eraser, RED);
    editor.pointer_down(0, 0);
    assert_eq!(editor.pointer_leave(), GestureOutcome::Committed);
    assert_eq!(editor.pointer_leave(), GestureOutcome::Ignored);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_pointer_down_outside_is_ignored() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    assert_eq!(editor.pointer_down(-1, 4), GestureOutcome::Ignored);
    assert_eq!(editor.pointer_down(4, 16), GestureOutcome::Ignored);
    assert!(!editor.is_stroke_active());
    assert_eq!(editor.pointer_up(), GestureOutcome::Ignored);
}

#[test]
fn test_brush_stroke_uses_settings() {
    let mut editor = editor_with(ToolType::Brush, RED);
    editor.settings_mut().brush.shape = BrushShape::Square;
    editor.settings_mut().brush.size = BrushSize::new(3).unwrap();

    editor.pointer_down(5, 5);
    editor.pointer_up();

    let painted = editor.grid().pixels().filter(|(_, _, p)| !p.is_empty()).count();
    assert_eq!(painted, 9);
}

#[test]
fn test_fill_commits_on_click() {
    let mut editor = editor_with(ToolType::Fill, RED);
    assert_eq!(editor.pointer_down(4, 4), GestureOutcome::Committed);
    assert!(!editor.is_stroke_active());
    assert_eq!(editor.pointer_up(), GestureOutcome::Ignored);
    assert_eq!(editor.history().len(), 2);
    assert!(editor.grid().pixels().all(|(_, _, p)| p.color() == RED));

    // Same color again: nothing to do, no history entry.
    assert_eq!(editor.pointer_down(0, 0), GestureOutcome::Ignored);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_eyedropper_picks_without_history() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(3, 3);
    editor.pointer_up();

    editor.settings_mut().tool = ToolType::Eyedropper;
    editor.settings_mut().color = Color::BLACK;
    assert_eq!(editor.pointer_down(3, 3), GestureOutcome::ColorPicked(RED));
    assert_eq!(editor.settings().color, RED);
    assert_eq!(editor.pointer_down(0, 0), GestureOutcome::Ignored);
    assert_eq!(editor.settings().color, RED);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_custom_color_is_remembered() {
    let custom = Color::rgb(12, 34, 56);
    let mut editor = editor_with(ToolType::Pencil, custom);
    editor.pointer_down(0, 0);
    editor.pointer_up();
    assert_eq!(editor.settings().recent_colors.colors()[0], custom);

    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(0, 0);
    editor.pointer_up();
    assert!(!editor.settings().recent_colors.colors().contains(&RED));
}

#[test]
fn test_clear_and_resize_commit() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(0, 0);
    editor.pointer_up();

    editor.clear().unwrap();
    assert!(editor.grid().is_blank());
    assert_eq!(editor.history().len(), 3);

    editor.resize(8, 12).unwrap();
    assert_eq!((editor.grid().width(), editor.grid().height()), (8, 12));
    assert!(matches!(
        editor.resize(4, 12),
        Err(CanvasError::InvalidDimensions { .. })
    ));
    assert_eq!(editor.history().len(), 4);

    editor.undo().unwrap();
    assert_eq!(editor.grid().width(), 16);
}

#[test]
fn test_undo_mid_stroke_finishes_it_first() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(0, 0);
    assert!(editor.undo().unwrap());
    assert!(!editor.is_stroke_active());
    assert!(editor.grid().is_blank());
    assert!(editor.can_redo());
}

#[test]
fn test_load_snapshot_resets_history() {
    let mut source = editor_with(ToolType::Pencil, RED);
    source.pointer_down(7, 7);
    source.pointer_up();
    let snapshot = source.snapshot();

    let mut editor = Editor::default();
    editor.clear().unwrap();
    editor.load_snapshot(snapshot).unwrap();
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.can_undo());
    assert_eq!(editor.grid().get(7, 7).unwrap().color(), RED);
}

#[test]
fn test_fill_over_open_stroke_in_same_color_adds_nothing() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(0, 0);

    editor.fill(0, 0);
    assert!(!editor.is_stroke_active());
    // Only the stroke itself was committed.
    assert_eq!(editor.history().len(), 2);
    let entries = editor.history().entries();
    assert_ne!(entries[0].grid(), entries[1].grid());
}

#[test]
fn test_rejected_resize_preserving_keeps_open_stroke() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    editor.pointer_down(3, 3);

    assert!(matches!(
        editor.resize_preserving(4, 4),
        Err(CanvasError::InvalidDimensions { .. })
    ));
    assert!(editor.is_stroke_active());
    assert_eq!(editor.history().len(), 1);

    editor.resize_preserving(8, 8).unwrap();
    assert_eq!(editor.history().len(), 3);
    assert_eq!(editor.grid().get(3, 3).unwrap().color(), RED);
}

#[test]
fn test_pointer_move_without_stroke_is_ignored() {
    let mut editor = editor_with(ToolType::Pencil, RED);
    assert_eq!(editor.pointer_move(1, 1), GestureOutcome::Ignored);
    assert!(editor.grid().is_blank());
}
