use eframe_sketch::file_handler::{export_canvas, load_background, save_canvas, save_image};
use eframe_sketch::config::DEFAULT_MAX_TEXTURE_SIDE;
use eframe_sketch::{Background, CanvasController, FileError, Mode};
use egui::Pos2;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn controller_with_line() -> CanvasController {
    let mut controller = CanvasController::default();
    controller.set_mode(Mode::Line);
    controller.on_pointer_down(Pos2::new(0.0, 20.0));
    controller.on_pointer_up(Pos2::new(40.0, 20.0));
    controller
}

#[test]
fn test_save_appends_png_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let controller = controller_with_line();

    let written = save_canvas(&controller, 40, 30, &dir.path().join("drawing")).unwrap();
    assert_eq!(written, dir.path().join("drawing.png"));

    let decoded = image::open(&written).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (40, 30));
    assert_eq!(*decoded.get_pixel(20, 20), BLACK);
    assert_eq!(*decoded.get_pixel(20, 5), WHITE);
}

#[test]
fn test_export_excludes_preview() {
    let mut controller = CanvasController::default();
    controller.set_mode(Mode::Rectangle);
    controller.on_pointer_down(Pos2::new(2.0, 2.0));
    controller.on_pointer_drag(Pos2::new(18.0, 18.0));

    let image = export_canvas(&controller, 20, 20).unwrap();
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_background_drawn_under_shapes() {
    let mut controller = controller_with_line();
    let red = Rgba([255, 0, 0, 255]);
    controller.set_background(Background::new(RgbaImage::from_pixel(10, 40, red)));

    let image = export_canvas(&controller, 40, 30).unwrap();
    assert_eq!(*image.get_pixel(5, 5), red);
    assert_eq!(*image.get_pixel(5, 20), BLACK);
    assert_eq!(*image.get_pixel(30, 5), WHITE);
}

#[test]
fn test_load_replaces_background_but_keeps_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bg.png");
    save_image(&RgbaImage::from_pixel(7, 3, Rgba([0, 128, 0, 255])), &path).unwrap();

    let mut controller = controller_with_line();
    controller.set_background(Background::new(RgbaImage::new(1, 1)));
    controller.set_background(load_background(&path, DEFAULT_MAX_TEXTURE_SIDE).unwrap());

    let background = controller.background().unwrap();
    assert_eq!((background.width(), background.height()), (7, 3));
    assert_eq!(controller.scene().len(), 1);
}

#[test]
fn test_decode_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    let err = load_background(&path, DEFAULT_MAX_TEXTURE_SIDE).unwrap_err();
    assert!(matches!(err, FileError::Decode { .. }));
    assert!(err.to_string().contains("broken.png"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let err = load_background(&missing, DEFAULT_MAX_TEXTURE_SIDE).unwrap_err();
    assert!(matches!(err, FileError::Read { .. }));
}

#[test]
fn test_oversized_background_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panorama.png");
    save_image(&RgbaImage::new(40, 10), &path).unwrap();

    let err = load_background(&path, 32).unwrap_err();
    assert!(matches!(
        err,
        FileError::TooLarge {
            width: 40,
            height: 10,
            max_side: 32,
            ..
        }
    ));
    assert!(load_background(&path, 40).is_ok());
}

#[test]
fn test_encode_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("out.png");

    let err = save_image(&RgbaImage::new(2, 2), &target).unwrap_err();
    assert!(matches!(err, FileError::Encode { .. }));
}
