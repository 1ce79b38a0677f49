use crate::error::{Error, Result};
use crate::extract::{read_coordinates, ImageFormat};
use crate::point::GeoPoint;

use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which image formats are handed to the EXIF reader.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOptions {
    pub formats: Vec<ImageFormat>,
}

impl ScanOptions {
    // JPEG and PNG only
    pub fn standard() -> Self {
        Self {
            formats: vec![ImageFormat::Jpeg, ImageFormat::Png],
        }
    }

    pub fn extended() -> Self {
        Self {
            formats: ImageFormat::ALL.to_vec(),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        match ImageFormat::from_path(path) {
            Some(format) => self.formats.contains(&format),
            None => false,
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// An image that matched the format filter but gave no coordinates.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: Error,
}

/// Result of walking one directory tree. Points are in traversal order.
#[derive(Debug, Default)]
pub struct Scan {
    pub points: Vec<GeoPoint>,
    pub skipped: Vec<Skipped>,
}

impl Scan {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Walk `root` recursively and collect the GPS position of every supported
/// image below it.
///
/// Images without usable GPS data are recorded in [`Scan::skipped`] and the
/// walk goes on. Any error reading the tree itself ends the scan.
pub fn scan_dir(root: &Path, options: &ScanOptions) -> Result<Scan> {
    let meta = root.metadata().map_err(|e| Error::Root {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut scan = Scan::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() || !options.accepts(entry.path()) {
            continue;
        }

        let path = entry.path();

        match read_coordinates(path) {
            Ok((lat, lon)) => {
                let p = GeoPoint::from_image(path, lat, lon);
                debug!("Found {}", p);
                scan.points.push(p);
            },
            Err(e) if e.is_per_file() => {
                debug!("Skipping {}: {}", path.display(), e);
                scan.skipped.push(Skipped {
                    path: path.to_path_buf(),
                    reason: e,
                });
            },
            Err(e) => return Err(e),
        }
    }

    info!("Scanned {}: {} located, {} skipped", root.display(),
          scan.points.len(), scan.skipped.len());

    Ok(scan)
}
