use svg::Document;
use svg::node::element::Path;

use crate::config::PathStyle;

/// A canvas of a fixed size holding closed polygon paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    /// Path data strings, drawn in order.
    pub paths: Vec<String>,
    pub style: PathStyle,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32, style: PathStyle) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
            style,
        }
    }

    pub fn push_path(&mut self, d: String) {
        self.paths.push(d);
    }
}

/// Turns an [`SvgDocument`] into its textual form.
pub trait SvgWriter {
    fn serialize(&self, document: &SvgDocument) -> String;
}

/// Serializer built on the `svg` crate's node tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSvgWriter;

impl SvgWriter for PlainSvgWriter {
    fn serialize(&self, document: &SvgDocument) -> String {
        let SvgDocument {
            width,
            height,
            paths,
            style,
        } = document;

        paths
            .iter()
            .fold(
                Document::new()
                    .set("xmlns", "http://www.w3.org/2000/svg")
                    .set("version", "1.1")
                    .set("width", *width)
                    .set("height", *height)
                    .set("viewBox", format!("0 0 {width} {height}")),
                |doc, d| {
                    doc.add(
                        Path::new()
                            .set("d", d.as_str())
                            .set("fill", style.fill.as_str())
                            .set("stroke", style.stroke.as_str()),
                    )
                },
            )
            .to_string()
    }
}
