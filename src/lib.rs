mod app;
mod config;
mod error;
mod extract;
mod map;
mod output;
mod point;
mod scan;
mod waypoints;

pub use crate::app::{App, RunOutcome, NO_GPS_DATA};
pub use crate::config::{command, load_env_file, Config, CONFIG};
pub use crate::error::{Error, Result};
pub use crate::extract::{coordinates, read_coordinates, ImageFormat};
pub use crate::map::{render_map, write_map, MapStyle, MAP_FILE_NAME};
pub use crate::output::{render, OutputFormat};
pub use crate::point::GeoPoint;
pub use crate::scan::{scan_dir, Scan, ScanOptions, Skipped};
pub use crate::waypoints::{to_gpx, write_gpx, write_gpx_to, GPX_CREATOR,
                           GPX_FILE_NAME};
