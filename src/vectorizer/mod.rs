use std::fs;
use std::path::{Path, PathBuf};

use image::GrayImage;
use tracing::{debug, info};

use crate::config::{PathStyle, VectorizeOptions};
use crate::contour::{ContourExtractor, ImageprocContourExtractor};
use crate::decode::{GrayscaleDecoder, ImageFileDecoder};
use crate::mask::{is_empty_mask, threshold_mask};
use crate::path::path_data;
use crate::svg::{PlainSvgWriter, SvgDocument, SvgWriter};
use crate::{PhotoSvgError, PhotoSvgResult};

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Contours returned by the extractor, degenerate ones included.
    pub contours: usize,
    /// Paths actually written to the document.
    pub paths: usize,
}

/// Threshold-and-trace pipeline built from a decoder, a contour extractor and
/// an SVG writer.
#[derive(Debug, Clone)]
pub struct Vectorizer<D = ImageFileDecoder, E = ImageprocContourExtractor, W = PlainSvgWriter> {
    decoder: D,
    extractor: E,
    writer: W,
    options: VectorizeOptions,
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::from_options(VectorizeOptions::default())
    }
}

impl Vectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline using the default backends and the given options.
    pub fn from_options(options: VectorizeOptions) -> Self {
        Self {
            decoder: ImageFileDecoder,
            extractor: ImageprocContourExtractor,
            writer: PlainSvgWriter,
            options,
        }
    }
}

impl<D, E, W> Vectorizer<D, E, W>
where
    D: GrayscaleDecoder,
    E: ContourExtractor,
    W: SvgWriter,
{
    /// Set the binarization threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.options.threshold = threshold;
        self
    }

    /// Set the paint used for every path.
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Swap the image decoder.
    pub fn with_decoder<D2: GrayscaleDecoder>(self, decoder: D2) -> Vectorizer<D2, E, W> {
        Vectorizer {
            decoder,
            extractor: self.extractor,
            writer: self.writer,
            options: self.options,
        }
    }

    /// Swap the contour extractor.
    pub fn with_extractor<E2: ContourExtractor>(self, extractor: E2) -> Vectorizer<D, E2, W> {
        Vectorizer {
            decoder: self.decoder,
            extractor,
            writer: self.writer,
            options: self.options,
        }
    }

    /// Swap the SVG serializer.
    pub fn with_writer<W2: SvgWriter>(self, writer: W2) -> Vectorizer<D, E, W2> {
        Vectorizer {
            decoder: self.decoder,
            extractor: self.extractor,
            writer,
            options: self.options,
        }
    }

    pub fn options(&self) -> &VectorizeOptions {
        &self.options
    }

    /// Binarize a grayscale raster and trace its external contours into a document.
    pub fn trace(&self, gray: &GrayImage) -> PhotoSvgResult<SvgDocument> {
        self.trace_counted(gray).map(|(doc, _)| doc)
    }

    /// Render a document with the configured writer.
    pub fn render(&self, document: &SvgDocument) -> String {
        self.writer.serialize(document)
    }

    /// Decode `input`, trace it and write the SVG to `output`.
    ///
    /// Nothing is written when decoding fails.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> PhotoSvgResult<ConversionSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        let gray = self.decoder.decode(input)?;
        debug!(
            input = %input.display(),
            width = gray.width(),
            height = gray.height(),
            "decoded image"
        );

        let (document, contours) = self.trace_counted(&gray)?;
        let svg = self.render(&document);
        fs::write(output, svg).map_err(|source| PhotoSvgError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        info!(output = %output.display(), paths = document.paths.len(), "wrote svg");

        Ok(ConversionSummary {
            output: output.to_path_buf(),
            width: document.width,
            height: document.height,
            contours,
            paths: document.paths.len(),
        })
    }

    fn trace_counted(&self, gray: &GrayImage) -> PhotoSvgResult<(SvgDocument, usize)> {
        let (width, height) = gray.dimensions();
        let mut document = SvgDocument::new(width, height, self.options.style.clone());

        let mask = threshold_mask(gray, self.options.threshold);
        if is_empty_mask(&mask) {
            debug!(threshold = self.options.threshold, "mask has no foreground");
            return Ok((document, 0));
        }

        let contours = self.extractor.extract(&mask)?;
        let found = contours.len();
        for contour in &contours {
            match path_data(&contour.points) {
                Some(d) => document.push_path(d),
                None => debug!(points = contour.points.len(), "skipping degenerate contour"),
            }
        }
        debug!(contours = found, paths = document.paths.len(), "traced mask");

        Ok((document, found))
    }
}

/// Convert `input` to an SVG at `output` with the default backends.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    threshold: i32,
) -> PhotoSvgResult<ConversionSummary> {
    Vectorizer::new()
        .with_threshold(threshold)
        .convert(input, output)
}
