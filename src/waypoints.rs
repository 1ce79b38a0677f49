use crate::error::{Error, Result};
use crate::point::GeoPoint;

use geo_types::Point;
use gpx::{Gpx, GpxVersion, Waypoint};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const GPX_FILE_NAME: &str = "output.gpx";
pub const GPX_CREATOR: &str = "photos2map";

// One waypoint per point, in order. No timestamps, so the document only
// depends on the points.
pub fn to_gpx(points: &[GeoPoint]) -> Gpx {
    let waypoints = points.iter()
        .map(|p| {
            let mut wp = Waypoint::new(Point::new(p.longitude(), p.latitude()));
            wp.name = Some(p.name().to_string());
            wp
        })
        .collect();

    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.to_string()),
        metadata: None,
        waypoints,
        tracks: vec![],
        routes: vec![],
    }
}

pub fn write_gpx_to<W: Write>(points: &[GeoPoint], writer: W) -> Result<()> {
    gpx::write(&to_gpx(points), writer)
        .map_err(|e| Error::render("GPX document", e))
}

/// Write the points as GPX 1.1 waypoints to `output.gpx` in `out_dir`,
/// replacing any existing file. Returns the path written.
///
/// The document is serialized before the file is created, so a failure
/// never leaves a truncated file behind.
pub fn write_gpx(points: &[GeoPoint], out_dir: &Path) -> Result<PathBuf> {
    let mut data = vec![];
    write_gpx_to(points, &mut data)?;

    let path = out_dir.join(GPX_FILE_NAME);
    fs::write(&path, data).map_err(|e| Error::output(&path, e))?;

    info!("GPX file generated successfully: {}", path.display());

    Ok(path)
}
