use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use pixel_paint::codec::{self, ImportJob};
use pixel_paint::paint;
use pixel_paint::{CanvasError, Color, Editor, GestureOutcome, Grid};

fn encode(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn striped_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 128])
        }
    });
    encode(&image)
}

#[test]
fn test_export_decodes_back() {
    let grid = Grid::create_empty(8, 10).unwrap();
    let grid = paint::pencil(&grid, 1, 2, Color::rgb(255, 0, 0));
    let grid = paint::pencil(&grid, 3, 4, Color::rgba(0, 0, 255, 0.5));

    let exported = codec::export_png(&grid).unwrap();
    assert!(exported.file_name.starts_with("pixel-art-"));
    assert!(exported.file_name.ends_with(".png"));

    let decoded = image::load_from_memory(&exported.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (8, 10));
    assert_eq!(decoded.get_pixel(1, 2).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(3, 4).0, [0, 0, 255, 128]);
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
}

#[test]
fn test_export_file_name() {
    assert_eq!(codec::export_file_name(1234), "pixel-art-1234.png");
}

#[test]
fn test_import_downscales_wide_image() {
    let grid = codec::import_image(&striped_png(300, 100)).unwrap();
    assert_eq!((grid.width(), grid.height()), (128, 42));
    assert_eq!(grid.get(0, 0).unwrap().color(), Color::rgb(255, 0, 0));

    let right = grid.get(127, 41).unwrap().color();
    assert_eq!((right.r, right.g, right.b), (0, 0, 255));
    assert!((right.a - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_import_small_image_keeps_size() {
    let grid = codec::import_image(&striped_png(20, 10)).unwrap();
    assert_eq!((grid.width(), grid.height()), (20, 10));

    let tiny = codec::import_image(&striped_png(4, 2)).unwrap();
    assert_eq!((tiny.width(), tiny.height()), (8, 8));
}

#[test]
fn test_import_rejects_garbage() {
    let err = codec::import_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, CanvasError::Decode(_)));
}

#[test]
fn test_import_job_delivers_grid() {
    let job = ImportJob::spawn(striped_png(16, 16));
    let grid = job.wait().unwrap();
    assert_eq!((grid.width(), grid.height()), (16, 16));
}

#[test]
fn test_editor_import_commits_once() {
    let mut editor = Editor::default();
    editor.import_now(&striped_png(300, 100)).unwrap();
    assert_eq!((editor.grid().width(), editor.grid().height()), (128, 42));
    assert_eq!(editor.history().len(), 2);

    editor.undo().unwrap();
    assert_eq!(editor.grid().width(), 32);
}

#[test]
fn test_failed_import_leaves_grid() {
    let mut editor = Editor::default();
    editor.pointer_down(0, 0);
    editor.pointer_up();
    let before = editor.grid().clone();

    assert!(editor.import_now(b"nope").is_err());
    assert_eq!(editor.grid(), &before);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_pending_import_blocks_edits() {
    let mut editor = Editor::default();
    editor.begin_import(striped_png(64, 64)).unwrap();
    assert!(editor.is_import_pending());

    assert_eq!(editor.pointer_down(1, 1), GestureOutcome::Ignored);
    assert!(matches!(editor.clear(), Err(CanvasError::ImportPending)));
    assert!(matches!(editor.undo(), Err(CanvasError::ImportPending)));
    assert!(matches!(
        editor.begin_import(Vec::new()),
        Err(CanvasError::ImportPending)
    ));

    assert!(editor.wait_for_import().unwrap().is_ok());
    assert!(!editor.is_import_pending());
    assert_eq!(editor.grid().width(), 64);
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.pointer_down(1, 1), GestureOutcome::Painted);
}

#[test]
fn test_failed_background_import() {
    let mut editor = Editor::default();
    editor.begin_import(b"garbage".to_vec()).unwrap();
    let result = editor.wait_for_import().unwrap();
    assert!(matches!(result, Err(CanvasError::Decode(_))));
    assert!(editor.grid().is_blank());
    assert_eq!(editor.history().len(), 1);
    assert!(editor.wait_for_import().is_none());
}
