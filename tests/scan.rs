mod common;

use common::*;
use photos2map::{scan_dir, Error, ScanOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn corrupt_image_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "good.jpg", &jpeg_with(&san_francisco()));
    write_file(dir.path(), "bad.jpg", b"truncated");

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(scan.points.len(), 1);
    assert_eq!(scan.points[0].name(), "good");
    assert_eq!(scan.skipped.len(), 1);
    assert!(scan.skipped[0].path.ends_with("bad.jpg"));
    assert!(scan.skipped[0].reason.is_per_file());
}

#[test]
fn unsupported_extensions_are_never_read() {
    let dir = tempdir().unwrap();
    let jpeg = jpeg_with(&san_francisco());
    write_file(dir.path(), "notes.txt", &jpeg);
    write_file(dir.path(), "scan.bmp", &jpeg);
    write_file(dir.path(), "raw.dng", &jpeg);

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();

    assert!(scan.points.is_empty());
    assert!(scan.skipped.is_empty());
}

#[test]
fn extended_formats_include_raw() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "raw.DNG", &tiff_with(&sydney()));
    write_file(dir.path(), "photo.jpg", &jpeg_with(&san_francisco()));

    let standard = scan_dir(dir.path(), &ScanOptions::standard()).unwrap();
    assert_eq!(standard.points.len(), 1);

    let extended = scan_dir(dir.path(), &ScanOptions::extended()).unwrap();
    let names: Vec<&str> = extended.points.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["photo", "raw"]);
}

#[test]
fn walk_is_recursive_and_ordered() {
    let dir = tempdir().unwrap();
    let sf = jpeg_with(&san_francisco());
    write_file(dir.path(), "b/IMG_0002.jpeg", &sf);
    write_file(dir.path(), "a/deeper/IMG_0001.JPG", &sf);
    write_file(dir.path(), "c.png", &jpeg_with(&sydney()));
    write_file(dir.path(), "a/IMG_0003.jpg", &sf);

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();
    let names: Vec<&str> = scan.points.iter().map(|p| p.name()).collect();

    assert_eq!(names, vec!["IMG_0003", "IMG_0001", "IMG_0002", "c"]);
}

#[test]
fn duplicate_names_are_kept() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "day1/IMG.jpg", &jpeg_with(&san_francisco()));
    write_file(dir.path(), "day2/IMG.jpg", &jpeg_with(&sydney()));

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(scan.points.len(), 2);
    assert_eq!(scan.points[0].name(), "IMG");
    assert_eq!(scan.points[1].name(), "IMG");
    assert!(scan.points[0].latitude() > 0.0);
    assert!(scan.points[1].latitude() < 0.0);
}

#[test]
fn images_without_gps_give_empty_scan() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "indoor1.jpg", &jpeg_with(&no_gps()));
    write_file(dir.path(), "indoor2.jpg", &jpeg_with(&no_gps()));

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();

    assert!(scan.is_empty());
    assert_eq!(scan.skipped.len(), 2);
}

#[test]
fn empty_directory_gives_empty_scan() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nothing-here")).unwrap();

    let scan = scan_dir(dir.path(), &ScanOptions::default()).unwrap();

    assert!(scan.is_empty());
    assert!(scan.skipped.is_empty());
}

#[test]
fn file_as_root_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "photo.jpg", &jpeg_with(&sydney()));

    let err = scan_dir(&path, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)), "{}", err);
    assert!(!err.is_per_file());
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.jpg", &jpeg_with(&san_francisco()));
    write_file(dir.path(), "locked/b.jpg", &jpeg_with(&sydney()));

    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .unwrap();
        return;
    }

    let result = scan_dir(dir.path(), &ScanOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Walk(_)), "{}", err);
    assert!(!err.is_per_file());
}
