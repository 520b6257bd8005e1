//! Error types shared across the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Everything that can abort a generation run.
///
/// Font problems are deliberately absent: font resolution falls back to the
/// built-in bitmap font and never surfaces an error.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Filesystem failure (unwritable target, permission denied, ...)
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// JPEG encoding failed while writing a placeholder image
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// No usable base directory (no desktop, no home) and none given
    #[error("could not determine an output directory; pass --path")]
    NoOutputDir,

    /// Base path exists but is not a directory we can generate into
    #[error("base path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
