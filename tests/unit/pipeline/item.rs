use std::io::Cursor;

use super::*;
use crate::foundation::{core::TRANSPARENT, error::ThumbError};

const RED: [u8; 4] = [255, 0, 0, 255];

fn params(target_size: u32, corner_radius: u32) -> ItemParams {
    ItemParams {
        target_size,
        corner_radius,
    }
}

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.put_pixel(x, y, [(x % 256) as u8, (y % 256) as u8, 0, 255]);
        }
    }
    buf
}

#[test]
fn landscape_item_has_transparent_bands_and_rounded_corners() {
    let source = PixelBuffer::filled(400, 200, RED);
    let item = build_item(&source, params(100, 10));

    assert_eq!((item.width(), item.height()), (100, 100));
    for y in (0..25).chain(75..100) {
        assert!(item.row(y).iter().all(|&b| b == 0), "row {y} should be clear");
    }

    for (x, y) in [(0, 25), (99, 25), (0, 74), (99, 74), (2, 27), (97, 72)] {
        assert_eq!(item.pixel(x, y)[3], 0, "corner pixel ({x},{y})");
    }
    for (x, y) in [(50, 25), (50, 74), (0, 50), (99, 50), (50, 50), (11, 25)] {
        assert_eq!(item.pixel(x, y), RED, "opaque pixel ({x},{y})");
    }
}

#[test]
fn content_is_scaled_four_to_one_and_centered() {
    let source = gradient(400, 200);
    let item = build_item(&source, params(100, 10));

    // canvas (cx, cy) -> fitted (cx, cy - 25) -> source (4cx + 2, 4(cy - 25) + 2)
    assert_eq!(item.pixel(40, 50), [162, 102, 0, 255]);
    assert_eq!(item.pixel(20, 30), [82, 22, 0, 255]);
}

#[test]
fn cut_corners_keep_source_rgb() {
    let source = PixelBuffer::filled(10, 10, [7, 8, 9, 255]);
    let item = build_item(&source, params(10, 3));
    assert_eq!(item.pixel(0, 0), [7, 8, 9, 0]);
    assert_eq!(item.pixel(5, 5), [7, 8, 9, 255]);
}

#[test]
fn zero_radius_keeps_square_corners() {
    let source = PixelBuffer::filled(400, 200, RED);
    let item = build_item(&source, params(100, 0));
    assert_eq!(item.pixel(0, 25), RED);
    assert_eq!(item.pixel(99, 74), RED);
    assert_eq!(item.pixel(0, 24), TRANSPARENT);
}

#[test]
fn zero_target_gives_empty_canvas() {
    let source = PixelBuffer::filled(4, 4, RED);
    let item = build_item(&source, params(0, 5));
    assert_eq!((item.width(), item.height()), (0, 0));
}

#[test]
fn vanishing_short_side_gives_transparent_canvas() {
    let source = PixelBuffer::filled(1000, 1, RED);
    let item = build_item(&source, params(100, 5));
    assert_eq!((item.width(), item.height()), (100, 100));
    assert!(item.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn default_params_match_item_defaults() {
    let p = ItemParams::default();
    assert_eq!(p.target_size, DEFAULT_TARGET_SIZE);
    assert_eq!(p.corner_radius, DEFAULT_CORNER_RADIUS);

    let partial: ItemParams = serde_json::from_str(r#"{ "corner_radius": 4 }"#).unwrap();
    assert_eq!(partial, params(DEFAULT_TARGET_SIZE, 4));
}

#[test]
fn create_item_from_bytes_decodes_png() {
    let img = image::RgbaImage::from_pixel(8, 4, image::Rgba(RED));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let item = create_item_from_bytes(&buf, params(16, 2)).unwrap();
    assert_eq!((item.width(), item.height()), (16, 16));
    assert_eq!(item.pixel(8, 8), RED);
    assert_eq!(item.pixel(8, 2)[3], 0);
}

#[test]
fn create_item_from_bytes_rejects_garbage() {
    let err = create_item_from_bytes(b"definitely not an image", params(16, 2)).unwrap_err();
    assert!(matches!(err, ThumbError::Decode(_)));
}

#[test]
fn create_item_from_image_rejects_empty_images() {
    let err = create_item_from_image(DynamicImage::new_rgba8(0, 0), params(16, 2)).unwrap_err();
    assert!(matches!(err, ThumbError::InvalidImage(_)));
}

#[test]
fn create_item_reports_missing_files_as_io() {
    let missing = std::env::temp_dir().join("item_thumb_missing_input_does_not_exist.png");
    let err = create_item(&missing, 16, 2).unwrap_err();
    assert!(matches!(err, ThumbError::Io { .. }));
}
