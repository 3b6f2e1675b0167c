use super::*;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_frame").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn new_checks_buffer_length() {
    assert!(FrameRGBA::new(2, 2, vec![0; 16], true).is_ok());
    assert!(FrameRGBA::new(2, 2, vec![0; 15], true).is_err());
}

#[test]
fn opaque_conversion_fills_transparent_pixels_with_background() {
    let f = FrameRGBA::new(2, 1, vec![0, 0, 0, 0, 9, 8, 7, 255], true).unwrap();
    assert!(!f.is_opaque());
    let out = f.to_opaque_rgba8([255, 255, 255, 255]).unwrap();
    assert_eq!(out, vec![255, 255, 255, 255, 9, 8, 7, 255]);
}

#[test]
fn png_write_then_read_keeps_pixels() {
    let dir = scratch_dir("png");
    let path = dir.join("f.png");
    let data: Vec<u8> = (0..4 * 3 * 2)
        .map(|i| if i % 4 == 3 { 255 } else { (i * 10) as u8 })
        .collect();
    let f = FrameRGBA::new(3, 2, data, true).unwrap();
    f.write_png(&path, [255, 255, 255, 255]).unwrap();

    let back = FrameRGBA::read_image(&path).unwrap();
    assert_eq!(back, f);
}

#[test]
fn read_missing_file_names_the_path() {
    let err = FrameRGBA::read_image(std::path::Path::new("target/does/not/exist.png")).unwrap_err();
    assert!(err.to_string().contains("exist.png"));
}
