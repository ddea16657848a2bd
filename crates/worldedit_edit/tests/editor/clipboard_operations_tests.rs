//! Tests for clipboard capture, size queries and transforms

use pretty_assertions::assert_eq;
use worldedit_edit::{
    Alignment, EngineError, HeaderConvention, MemoryCounterStore, NoProtection, NoViewers, PasteRequest, Position, Rectangle, Size, TileGrid, World,
    WorldEditor,
};

use crate::helpers::{create_editor, numbered_tile, numbered_world};

const ACCOUNT: &str = "builder";

/// Pastes the clipboard into an empty world at (50, 50) so its contents can be inspected
fn pasted_clipboard(editor: &WorldEditor<MemoryCounterStore>) -> TileGrid {
    let mut world = TileGrid::new((100, 100));
    let request = PasteRequest::new((50, 50), Alignment::TOP_LEFT);
    editor.paste(ACCOUNT, &request, &mut world, &NoProtection, &mut NoViewers).unwrap();
    world
}

#[test]
fn test_clipboard_size() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);

    assert!(matches!(editor.clipboard_size(ACCOUNT), Err(EngineError::NotFound { .. })));
    editor.capture_clipboard(ACCOUNT, Rectangle::from_corners(3, 4, 13, 9), &world).unwrap();
    assert_eq!(editor.clipboard_size(ACCOUNT).unwrap(), Size::new(11, 6));
}

#[test]
fn test_selection_size() {
    let (_dir, editor) = create_editor();
    assert_eq!(editor.selection_size(Rectangle::from_corners(10, 6, 3, 4)), Size::new(8, 3));
    assert_eq!(editor.selection_size(Rectangle::from_min_size((0, 0), (-2, 5))), Size::new(0, 5));
}

#[test]
fn test_capture_replaces_previous_clipboard() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);

    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((0, 0), (5, 5)), &world).unwrap();
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((10, 10), (2, 3)), &world).unwrap();
    assert_eq!(editor.clipboard_size(ACCOUNT).unwrap(), Size::new(2, 3));
    assert_eq!(pasted_clipboard(&editor).tile(50, 50), Some(numbered_tile(10, 10)));
}

#[test]
fn test_flip_clipboard() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((0, 0), (3, 2)), &world).unwrap();

    editor.flip_clipboard(ACCOUNT, true, false).unwrap();
    let pasted = pasted_clipboard(&editor);
    assert_eq!(pasted.tile(50, 50), Some(numbered_tile(2, 0)));
    assert_eq!(pasted.tile(52, 51), Some(numbered_tile(0, 1)));

    editor.flip_clipboard(ACCOUNT, true, true).unwrap();
    let pasted = pasted_clipboard(&editor);
    assert_eq!(pasted.tile(50, 50), Some(numbered_tile(0, 1)));
}

#[test]
fn test_flip_keeps_reserved_fields() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((5, 7), (3, 2)), &world).unwrap();

    editor.flip_clipboard(ACCOUNT, false, true).unwrap();
    let header = editor
        .format()
        .read_header(&editor.storage().clipboard_path(ACCOUNT), HeaderConvention::Region)
        .unwrap();
    assert_eq!(header.origin(), Position::new(5, 7));
    assert_eq!(header.size(), Size::new(3, 2));
}

#[test]
fn test_rotate_clipboard() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((0, 0), (3, 2)), &world).unwrap();

    editor.rotate_clipboard(ACCOUNT, 90).unwrap();
    assert_eq!(editor.clipboard_size(ACCOUNT).unwrap(), Size::new(2, 3));
    let pasted = pasted_clipboard(&editor);
    assert_eq!(pasted.tile(51, 50), Some(numbered_tile(0, 0)));
    assert_eq!(pasted.tile(50, 50), Some(numbered_tile(0, 1)));
    assert_eq!(pasted.tile(50, 52), Some(numbered_tile(2, 1)));
}

#[test]
fn test_rotate_back_and_forth() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((4, 4), (4, 3)), &world).unwrap();
    let before = pasted_clipboard(&editor);

    editor.rotate_clipboard(ACCOUNT, -90).unwrap();
    editor.rotate_clipboard(ACCOUNT, 450).unwrap();
    assert_eq!(pasted_clipboard(&editor), before);

    editor.rotate_clipboard(ACCOUNT, 180).unwrap();
    editor.rotate_clipboard(ACCOUNT, -180).unwrap();
    assert_eq!(pasted_clipboard(&editor), before);
}

#[test]
fn test_rotate_rejects_odd_angles() {
    let (_dir, editor) = create_editor();
    let world = numbered_world(40, 40);
    editor.capture_clipboard(ACCOUNT, Rectangle::from_min_size((0, 0), (3, 2)), &world).unwrap();

    assert!(matches!(editor.rotate_clipboard(ACCOUNT, 45), Err(EngineError::InvalidRotation { degrees: 45 })));
    assert!(matches!(editor.rotate_clipboard(ACCOUNT, 360), Err(EngineError::InvalidRotation { degrees: 360 })));
    assert_eq!(editor.clipboard_size(ACCOUNT).unwrap(), Size::new(3, 2));
}
