//! Threshold a grayscale raster, trace the outer boundary of every foreground
//! region and write the result as closed black SVG paths.
//!
//! ```no_run
//! use photo_to_svg::Vectorizer;
//!
//! let summary = Vectorizer::new()
//!     .with_threshold(100)
//!     .convert("photo.jpg", "photo.svg")?;
//! println!("{} paths written", summary.paths);
//! # Ok::<(), photo_to_svg::PhotoSvgError>(())
//! ```
//!
//! The [`greeting`] module holds the unrelated greeting card picker used by the
//! `greeting-card` binary.

pub mod config;
pub mod contour;
pub mod decode;
pub mod error;
pub mod greeting;
pub mod mask;
pub mod path;
pub mod svg;
pub mod vectorizer;

pub use config::{DEFAULT_THRESHOLD, PathStyle, VectorizeOptions};
pub use contour::{Contour, ContourExtractor, ImageprocContourExtractor, Point};
pub use decode::{GrayscaleDecoder, ImageFileDecoder};
pub use error::{PhotoSvgError, PhotoSvgResult};
pub use svg::{PlainSvgWriter, SvgDocument, SvgWriter};
pub use vectorizer::{ConversionSummary, Vectorizer, convert};
