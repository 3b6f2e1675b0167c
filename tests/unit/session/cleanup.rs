use super::*;

#[test]
fn removes_nested_directory() {
    let dir = PathBuf::from("target").join("unit_cleanup").join("frames");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("frame_0000.png"), b"x").unwrap();
    std::fs::write(dir.join("nested").join("y"), b"y").unwrap();

    assert_eq!(remove_frame_dir(&dir), None);
    assert!(!dir.exists());
}

#[test]
fn missing_directory_is_a_not_found_warning() {
    let dir = PathBuf::from("target")
        .join("unit_cleanup")
        .join("never_created");
    let _ = std::fs::remove_dir_all(&dir);

    let w = remove_frame_dir(&dir).expect("warning");
    assert_eq!(w.kind, CleanupWarningKind::NotFound);
    assert_eq!(w.path, dir);
    assert!(w.to_string().contains("never_created"));
    assert!(w.to_string().contains("directory not found"));
}

#[test]
fn io_errors_are_classified() {
    let cases = [
        (io::ErrorKind::NotFound, CleanupWarningKind::NotFound),
        (
            io::ErrorKind::DirectoryNotEmpty,
            CleanupWarningKind::NotEmpty,
        ),
        (
            io::ErrorKind::PermissionDenied,
            CleanupWarningKind::PermissionDenied,
        ),
        (io::ErrorKind::Interrupted, CleanupWarningKind::Other),
    ];
    for (kind, expected) in cases {
        assert_eq!(
            CleanupWarningKind::classify(&io::Error::from(kind)),
            expected
        );
    }
}
