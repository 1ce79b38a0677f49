use crate::error::{Error, Result};
use crate::map::MapStyle;
use crate::output::OutputFormat;
use crate::scan::ScanOptions;

use clap::builder::BoolishValueParser;
use clap::{arg, Arg, ArgMatches};
use config::{*, ext::*};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io;
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub dir: String,
    pub output: String,
    pub out_dir: String,
    pub map_region: String,
    pub debug: bool,
    pub extended_formats: bool,
}

lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

pub const CLAP_STYLING: clap::builder::styling::Styles =
    clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

const DEFAULTS: &[(&str, &str)] = &[
    ("dir", "."),
    ("output", "html"),
    ("out_dir", "out"),
    ("map_region", "USA"),
    ("debug", "false"),
    ("extended_formats", "false"),
];

// Value options and the settings they fill in
const VALUE_ARGS: &[(&str, &str)] = &[
    ("dir", "dir"),
    ("output", "output"),
    ("out-dir", "out_dir"),
    ("map-region", "map_region"),
];

pub fn command() -> clap::Command {
    clap::command!()
        .about("Generates a map on a HTML page or GPX file from GPS \
                coordinates in images")
        .styles(CLAP_STYLING)
        .args([
            arg!(-i --dir <DIR> "Directory to scan for images")
                .env("PHOTOS2MAP_DIR"),
            arg!(-o --output <FORMAT> "Output format: html or gpx")
                .env("PHOTOS2MAP_OUTPUT"),
            Arg::new("out-dir")
                .long("out-dir")
                .value_name("DIR")
                .env("PHOTOS2MAP_OUT_DIR")
                .help("Directory the output file is written to"),
            Arg::new("map-region")
                .long("map-region")
                .value_name("REGION")
                .env("PHOTOS2MAP_MAP_REGION")
                .help("Base map shown in the HTML output"),
            // Environment values such as 1, yes or on count as true
            arg!(-d --debug "Enable debug-level logging")
                .env("PHOTOS2MAP_DEBUG")
                .value_parser(BoolishValueParser::new()),
            arg!(-x --extended "Also read HEIF and DNG/TIFF images")
                .env("PHOTOS2MAP_EXTENDED")
                .value_parser(BoolishValueParser::new()),
        ])
}

/// Apply a `.env` file to the process environment. Variables that are
/// already set keep their value. A missing file is not an error; returns
/// whether a file was loaded.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Ok(false)
        },
        Err(e) => Err(Error::Config(format!("Error loading {}: {}",
                                            path.display(), e))),
    }
}

impl Config {
    // Settings from the process command line. Prints usage and exits on
    // invalid arguments, --help and --version.
    pub fn new() -> Self {
        let matches = command().get_matches();

        match Config::from_matches(&matches) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            },
        }
    }

    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)
            .map_err(|e| Error::Config(e.to_string()))?;

        Config::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut overrides: Vec<(&str, &str)> = vec![];

        for &(id, key) in VALUE_ARGS {
            if let Some(value) = matches.get_one::<String>(id) {
                overrides.push((key, value.as_str()));
            }
        }

        if matches.get_flag("debug") {
            overrides.push(("debug", "true"));
        }

        if matches.get_flag("extended") {
            overrides.push(("extended_formats", "true"));
        }

        // Later providers win over earlier ones
        let config = DefaultConfigurationBuilder::new()
            .add_in_memory(DEFAULTS)
            .add_in_memory(overrides.as_slice())
            .build()
            .map_err(|e| Error::Config(format!("{:?}", e)))?;

        Ok(config.reify())
    }

    pub fn dir(&self) -> &Path {
        Path::new(&self.dir)
    }

    pub fn out_dir(&self) -> &Path {
        Path::new(&self.out_dir)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.parse().unwrap_or_default()
    }

    pub fn scan_options(&self) -> ScanOptions {
        if self.extended_formats {
            ScanOptions::extended()
        }
        else {
            ScanOptions::standard()
        }
    }

    pub fn map_style(&self) -> MapStyle {
        MapStyle::with_region(&self.map_region)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            output: "html".to_string(),
            out_dir: "out".to_string(),
            map_region: "USA".to_string(),
            debug: false,
            extended_formats: false,
        }
    }
}
