use crate::error::{Error, Result};

use exif::{Exif, In, Reader, Tag, Value};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Image formats with a working coordinate extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Heif,
    // TIFF structured raw files (DNG and friends)
    Raw,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Heif,
        ImageFormat::Raw,
    ];

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormat::Jpeg => &["jpg", "jpeg"],
            ImageFormat::Png  => &["png"],
            ImageFormat::Heif => &["heif", "heic"],
            ImageFormat::Raw  => &["dng", "tif", "tiff"],
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();

        ImageFormat::ALL.into_iter()
            .find(|f| f.extensions().contains(&ext.as_str()))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png  => "PNG",
            ImageFormat::Heif => "HEIF",
            ImageFormat::Raw  => "RAW",
        };

        formatter.write_str(name)
    }
}

/// Read the GPS position of an image as `(latitude, longitude)`.
///
/// The EXIF block is located by the container reader, so JPEG, PNG, HEIF and
/// TIFF based raw files all go through the same path. The file extension is
/// not checked here.
pub fn read_coordinates(path: &Path) -> Result<(f64, f64)> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader)?;

    coordinates(&exif)
}

pub fn coordinates(exif: &Exif) -> Result<(f64, f64)> {
    let lat = signed_degrees(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef,
                             b'S')?;
    let lon = signed_degrees(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef,
                             b'W')?;

    Ok((lat, lon))
}

fn signed_degrees(exif: &Exif, tag: Tag, ref_tag: Tag, negative: u8)
                  -> Result<f64> {
    let field = exif.get_field(tag, In::PRIMARY)
        .ok_or(Error::MissingTag(tag))?;
    let ref_field = exif.get_field(ref_tag, In::PRIMARY)
        .ok_or(Error::MissingTag(ref_tag))?;

    let degrees = to_degrees(&field.value)
        .ok_or(Error::MalformedTag(tag))?;
    let hemisphere = hemisphere(&ref_field.value)
        .ok_or(Error::MalformedTag(ref_tag))?;

    if hemisphere.eq_ignore_ascii_case(&negative) {
        Ok(-degrees)
    }
    else {
        Ok(degrees)
    }
}

// Degrees/minutes/seconds triple, or a single rational already in degrees.
fn to_degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(r) if r.len() >= 3 => {
            let d = r[0].to_f64();
            let m = r[1].to_f64();
            let s = r[2].to_f64();

            Some(d + m/60.0 + s/3600.0)
        },
        Value::Rational(r) if r.len() == 1 => {
            Some(r[0].to_f64())
        },
        _ => None,
    }
}

// First non-blank character of an N/S/E/W reference.
fn hemisphere(value: &Value) -> Option<u8> {
    match value {
        Value::Ascii(strings) => {
            strings.first()?
                .iter()
                .copied()
                .find(|c| !c.is_ascii_whitespace())
        },
        _ => None,
    }
}
