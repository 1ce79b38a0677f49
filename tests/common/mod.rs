#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub fn dms(degrees: u32, minutes: u32, seconds_x100: u32) -> Value {
    Value::Rational(vec![
        Rational { num: degrees, denom: 1 },
        Rational { num: minutes, denom: 1 },
        Rational { num: seconds_x100, denom: 100 },
    ])
}

pub fn ascii(s: &str) -> Value {
    Value::Ascii(vec![s.as_bytes().to_vec()])
}

pub fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

pub fn gps_fields(lat: Value, lat_ref: &str, lon: Value, lon_ref: &str)
                  -> Vec<Field> {
    vec![
        field(Tag::GPSLatitudeRef, ascii(lat_ref)),
        field(Tag::GPSLatitude, lat),
        field(Tag::GPSLongitudeRef, ascii(lon_ref)),
        field(Tag::GPSLongitude, lon),
    ]
}

// San Francisco, 37.7749 N 122.4194 W
pub fn san_francisco() -> Vec<Field> {
    gps_fields(dms(37, 46, 2964), "N", dms(122, 25, 984), "W")
}

// Sydney, 33.8688 S 151.2093 E
pub fn sydney() -> Vec<Field> {
    gps_fields(dms(33, 52, 768), "S", dms(151, 12, 3348), "E")
}

// EXIF block without any GPS tag
pub fn no_gps() -> Vec<Field> {
    vec![field(Tag::ImageDescription, ascii("holiday"))]
}

pub fn tiff_with(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for f in fields {
        writer.push_field(f);
    }

    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).expect("failed to write EXIF block");
    buf.into_inner()
}

// Smallest JPEG the EXIF reader accepts: SOI, an APP1 Exif segment, EOI.
pub fn jpeg_with(fields: &[Field]) -> Vec<u8> {
    let tiff = tiff_with(fields);
    let len = (2 + 6 + tiff.len()) as u16;

    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create test directory");
    }
    fs::write(&path, data).expect("failed to write test file");
    path
}
