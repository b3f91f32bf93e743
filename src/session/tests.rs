use super::*;
use crate::draw::{BLACK, RED, ShapeKind};
use crate::input::Tool;
use crate::raster::ImageFormat;
use crate::util::{Point, Rect};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn test_session(dir: &Path) -> Session {
    let save_target = SaveTarget {
        directory: dir.join("saves"),
        filename_template: "drawing".to_string(),
        format: ImageFormat::Png,
    };
    Session::new(
        PaintContext::new(Tool::Line, BLACK, 2),
        FontDescriptor::default(),
        save_target,
        64,
        48,
    )
}

fn line() -> Shape {
    Shape::new(ShapeKind::Line, Point::new(0, 0), Point::new(5, 5), BLACK, 2)
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([0, 128, 255]))
        .save(&path)
        .unwrap();
    path
}

fn no_text(_: &str) -> Option<String> {
    None
}

#[test]
fn append_undo_redo_scenario() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());

    assert_eq!(
        session.dispatch(Command::Append(line())).unwrap(),
        Outcome::Changed
    );
    assert_eq!(session.shapes(), &[line()]);

    session.dispatch(Command::Undo).unwrap();
    assert!(session.shapes().is_empty());

    session.dispatch(Command::Redo).unwrap();
    assert_eq!(session.shapes(), &[line()]);
}

#[test]
fn undo_on_empty_document_is_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.take_redraw();

    assert_eq!(session.dispatch(Command::Undo).unwrap(), Outcome::Unchanged);
    assert_eq!(session.dispatch(Command::Redo).unwrap(), Outcome::Unchanged);
    assert!(!session.take_redraw());
}

#[test]
fn mutations_request_redraw() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.take_redraw();

    session.dispatch(Command::Append(line())).unwrap();
    assert!(session.take_redraw());
    session.dispatch(Command::Undo).unwrap();
    assert!(session.take_redraw());
}

#[test]
fn new_clears_drawing_and_redo() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();
    session.dispatch(Command::Append(line())).unwrap();
    session.dispatch(Command::Undo).unwrap();

    assert!(session.document().can_redo());

    session.dispatch(Command::New).unwrap();
    assert!(session.shapes().is_empty());
    assert!(!session.document().can_redo());
    assert_eq!(session.dispatch(Command::Redo).unwrap(), Outcome::Unchanged);
}

#[test]
fn open_replaces_document_with_single_image() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();
    let path = write_png(temp.path(), "photo.png", 200, 100);

    session.dispatch(Command::Open(path)).unwrap();

    assert_eq!(session.shapes().len(), 1);
    let shape = &session.shapes()[0];
    assert_eq!(shape.kind(), ShapeKind::Image);
    assert_eq!(
        shape.bounding_box(),
        Rect {
            x: 0,
            y: 0,
            width: 200,
            height: 100
        }
    );
}

#[test]
fn open_loads_jpeg_files() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();
    let path = temp.path().join("photo.jpg");
    RgbImage::from_pixel(120, 90, Rgb([200, 40, 40]))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();

    assert_eq!(session.dispatch(Command::Open(path)).unwrap(), Outcome::Changed);

    assert_eq!(session.shapes().len(), 1);
    let shape = &session.shapes()[0];
    assert_eq!(shape.kind(), ShapeKind::Image);
    assert_eq!(shape.bounding_box().width, 120);
    assert_eq!(shape.bounding_box().height, 90);
    let [r, g, b, a] = shape.bitmap().unwrap().pixels().get_pixel(60, 45).0;
    assert!(r > 150 && g < 100 && b < 100);
    assert_eq!(a, 255);
}

#[test]
fn failed_open_leaves_document_untouched() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();

    let missing = temp.path().join("missing.png");
    assert!(session.dispatch(Command::Open(missing)).is_err());

    let garbage = temp.path().join("garbage.jpg");
    std::fs::write(&garbage, b"nope").unwrap();
    assert!(session.dispatch(Command::Open(garbage)).is_err());

    assert_eq!(session.shapes(), &[line()]);
}

#[test]
fn save_writes_canvas_sized_image() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session
        .dispatch(Command::Append(Shape::new(
            ShapeKind::Rectangle,
            Point::new(10, 10),
            Point::new(30, 30),
            RED,
            2,
        )))
        .unwrap();

    let target = temp.path().join("out.png");
    let outcome = session
        .dispatch(Command::Save {
            path: Some(target.clone()),
            format: None,
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Saved(target.clone()));

    let saved = image::open(&target).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (64, 48));
    assert_eq!(saved.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(saved.get_pixel(10, 20).0, [255, 0, 0]);
    assert_eq!(session.shapes().len(), 1);
}

#[test]
fn save_without_path_uses_save_directory() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());

    let outcome = session
        .dispatch(Command::Save {
            path: None,
            format: Some(ImageFormat::Jpeg),
        })
        .unwrap();
    let Outcome::Saved(path) = outcome else {
        panic!("expected a saved path");
    };
    assert_eq!(path.file_name().unwrap(), "drawing.jpg");
    assert!(path.exists());
}

#[test]
fn failed_save_keeps_document() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();

    let target = temp.path().join("no-such-dir").join("out.png");
    let err = session
        .dispatch(Command::Save {
            path: Some(target),
            format: None,
        })
        .unwrap_err();
    assert!(matches!(err, RasterError::Encode { .. }));
    assert_eq!(session.shapes(), &[line()]);
}

#[test]
fn saved_image_round_trips_through_open() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.dispatch(Command::Append(line())).unwrap();
    let target = temp.path().join("again.png");
    session
        .dispatch(Command::Save {
            path: Some(target.clone()),
            format: Some(ImageFormat::Png),
        })
        .unwrap();

    session.dispatch(Command::Open(target)).unwrap();
    let bitmap = session.shapes()[0].bitmap().expect("image shape");
    assert_eq!((bitmap.width(), bitmap.height()), (64, 48));
}

#[test]
fn pointer_gesture_appends_through_dispatch() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.input.context.set_tool(Tool::Triangle);

    session.on_mouse_press(MouseButton::Left, 0, 0);
    session.on_mouse_motion(4, 8);
    assert!(session.shapes().is_empty());
    session.on_mouse_release(MouseButton::Left, 10, 20, &mut no_text);

    assert_eq!(session.shapes().len(), 1);
    assert_eq!(
        session.shapes()[0].triangle_vertices()[2],
        Point::new(-10, 20)
    );
}

#[test]
fn sketch_drag_appends_each_segment_and_undoes_one_at_a_time() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.input.context.set_tool(Tool::Sketch);

    session.on_mouse_press(MouseButton::Left, 0, 0);
    session.on_mouse_motion(1, 1);
    session.on_mouse_motion(2, 3);
    session.on_mouse_release(MouseButton::Left, 4, 4, &mut no_text);
    assert_eq!(session.shapes().len(), 3);

    session.dispatch(Command::Undo).unwrap();
    assert_eq!(session.shapes().len(), 2);
    assert_eq!(session.shapes()[1].end(), Point::new(2, 3));
}

#[test]
fn empty_text_leaves_document_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.input.context.set_tool(Tool::Text);

    session.on_mouse_press(MouseButton::Left, 30, 40);
    session.on_mouse_release(MouseButton::Left, 30, 40, &mut |_: &str| {
        Some(String::new())
    });
    assert!(session.shapes().is_empty());
}

#[test]
fn render_shows_preview_without_committing_it() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.input.context.set_color(RED);
    session.input.context.set_tool(Tool::Line);
    session.on_mouse_press(MouseButton::Left, 0, 24);
    session.on_mouse_motion(64, 24);

    let mut surface = cairo::ImageSurface::create(cairo::Format::Rgb24, 64, 48).unwrap();
    {
        let ctx = cairo::Context::new(&surface).unwrap();
        session.render(&ctx);
    }
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = 24 * stride + 32 * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    assert_eq!(word & 0x00FF_FFFF, 0x00FF_0000);
    assert!(session.shapes().is_empty());
}

#[test]
fn resize_changes_saved_image_size() {
    let temp = TempDir::new().unwrap();
    let mut session = test_session(temp.path());
    session.resize(20, 10);
    assert_eq!(session.canvas_size(), (20, 10));

    let target = temp.path().join("small.png");
    session
        .dispatch(Command::Save {
            path: Some(target.clone()),
            format: None,
        })
        .unwrap();
    assert_eq!(image::open(&target).unwrap().to_rgb8().dimensions(), (20, 10));
}
