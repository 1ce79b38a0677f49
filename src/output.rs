use crate::error::{Error, Result};
use crate::map::{write_map, MapStyle, MAP_FILE_NAME};
use crate::point::GeoPoint;
use crate::waypoints::{write_gpx, GPX_FILE_NAME};

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Gpx,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => MAP_FILE_NAME,
            OutputFormat::Gpx  => GPX_FILE_NAME,
        }
    }
}

// "gpx" selects GPX, everything else means the HTML map.
impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("gpx") {
            Ok(OutputFormat::Gpx)
        }
        else {
            Ok(OutputFormat::Html)
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => formatter.write_str("html"),
            OutputFormat::Gpx  => formatter.write_str("gpx"),
        }
    }
}

/// Write the points in the given format below `out_dir`, creating the
/// directory first if needed. Returns the path of the file written.
pub fn render(points: &[GeoPoint], format: OutputFormat, out_dir: &Path,
              style: &MapStyle) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|e| Error::output(out_dir, e))?;

    match format {
        OutputFormat::Gpx  => write_gpx(points, out_dir),
        OutputFormat::Html => write_map(points, style, out_dir),
    }
}
