use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "item_thumb_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn encoded_png_decodes_to_same_pixels() {
    let mut buf = PixelBuffer::new(3, 2);
    buf.put_pixel(0, 0, [255, 0, 0, 255]);
    buf.put_pixel(2, 1, [1, 2, 3, 0]);

    let bytes = encode_png(&buf).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Png
    );
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.as_raw(), buf.as_bytes());
}

#[test]
fn strided_buffers_encode_without_padding() {
    let mut data = vec![0xEEu8; 2 * 8];
    data[0..4].copy_from_slice(&[1, 2, 3, 4]);
    data[8..12].copy_from_slice(&[5, 6, 7, 8]);
    let buf = PixelBuffer::from_raw_with_stride(1, 2, 8, data).unwrap();

    let decoded = image::load_from_memory(&encode_png(&buf).unwrap())
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.as_raw(), &vec![1u8, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn empty_buffers_cannot_be_encoded() {
    let err = encode_png(&PixelBuffer::new(0, 0)).unwrap_err();
    assert!(matches!(err, ThumbError::Encode(_)));
}

#[test]
fn save_png_writes_a_readable_file() {
    let dir = temp_dir("save_png");
    let path = dir.join("nested").join("item.png");
    ensure_parent_dir(&path).unwrap();

    let buf = PixelBuffer::filled(4, 4, [9, 8, 7, 255]);
    save_png(&buf, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (4, 4));
    assert_eq!(decoded.get_pixel(3, 3).0, [9, 8, 7, 255]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn save_png_into_missing_directory_is_io_error() {
    let path = temp_dir("save_png_missing").join("absent").join("item.png");
    let err = save_png(&PixelBuffer::filled(1, 1, [0, 0, 0, 255]), &path).unwrap_err();
    assert!(matches!(err, ThumbError::Io { .. }));
}

#[test]
fn save_png_of_empty_buffer_is_encode_error() {
    let dir = temp_dir("save_png_empty");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.png");
    let err = save_png(&PixelBuffer::new(5, 0), &path).unwrap_err();
    assert!(matches!(err, ThumbError::Encode(_)));
    assert!(!path.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_save_keeps_previous_output() {
    let dir = temp_dir("save_png_keep");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("item.png");

    save_png(&PixelBuffer::filled(4, 4, [1, 2, 3, 255]), &path).unwrap();
    let before = std::fs::read(&path).unwrap();
    assert!(!before.is_empty());

    let err = save_png(&PixelBuffer::new(0, 0), &path).unwrap_err();
    assert!(matches!(err, ThumbError::Encode(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(Path::new("item.png")).unwrap();
}
