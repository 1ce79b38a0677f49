use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot decode EXIF data: {0}")]
    Exif(#[from] exif::Error),

    #[error("GPS tag {0} not found")]
    MissingTag(exif::Tag),

    #[error("GPS tag {0} has an unexpected value")]
    MalformedTag(exif::Tag),

    #[error("Cannot open directory {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error walking the directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot render {what}: {message}")]
    Render {
        what: &'static str,
        message: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    pub fn render(what: &'static str, message: impl ToString) -> Self {
        Self::Render {
            what,
            message: message.to_string(),
        }
    }

    // Errors that only affect a single image, as opposed to the whole run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Error::Io { .. }
                | Error::Exif(_)
                | Error::MissingTag(_)
                | Error::MalformedTag(_)
        )
    }
}
