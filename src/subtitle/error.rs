//! Subtitle loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a subtitle file.
///
/// Parsing never fails; these only cover getting text off the disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a text file (expected UTF-8)", path.display())]
    NotText {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
