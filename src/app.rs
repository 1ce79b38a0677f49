use crate::config::Config;
use crate::error::Result;
use crate::map::MapStyle;
use crate::output::{render, OutputFormat};
use crate::scan::{scan_dir, Scan, ScanOptions};

use log::info;
use std::path::PathBuf;

pub const NO_GPS_DATA: &str = "No GPS data found in the images.";

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    // One output file was written
    Written {
        path: PathBuf,
        points: usize,
        skipped: usize,
    },
    NoGpsData,
}

/// One scan-and-render invocation.
pub struct App {
    dir: PathBuf,
    out_dir: PathBuf,
    format: OutputFormat,
    options: ScanOptions,
    style: MapStyle,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            dir: config.dir().to_path_buf(),
            out_dir: config.out_dir().to_path_buf(),
            format: config.output_format(),
            options: config.scan_options(),
            style: config.map_style(),
        }
    }

    pub fn scan(&self) -> Result<Scan> {
        scan_dir(&self.dir, &self.options)
    }

    // Scan the input directory and write the output file. Nothing is
    // written when no image carries GPS data.
    pub fn run(&self) -> Result<RunOutcome> {
        info!("Scanning {} for {} output", self.dir.display(), self.format);
        let scan = self.scan()?;

        if scan.is_empty() {
            return Ok(RunOutcome::NoGpsData);
        }

        let path = render(&scan.points, self.format, &self.out_dir,
                          &self.style)?;

        Ok(RunOutcome::Written {
            path,
            points: scan.points.len(),
            skipped: scan.skipped.len(),
        })
    }
}
