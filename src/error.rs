use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with [`PhotoSvgError`].
pub type PhotoSvgResult<T> = std::result::Result<T, PhotoSvgError>;

/// Error types that can occur while vectorizing an image.
///
/// Argument errors are not part of this enum; they belong to the CLI layer.
#[derive(Debug, Error)]
pub enum PhotoSvgError {
    /// The input could not be read or decoded as an image.
    #[error("Could not open image file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The serialized SVG could not be written to the output path.
    #[error("Could not write SVG file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
