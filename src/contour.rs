use image::GrayImage;
use image::imageops::replace;
use imageproc::contours::{BorderType, find_contours};

use crate::PhotoSvgResult;

/// An integer pixel coordinate on a traced boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The ordered boundary points of one connected foreground region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// A contour with fewer than two points cannot be drawn as a path.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

/// Extracts external contours from a binary mask (non-zero is foreground).
pub trait ContourExtractor {
    fn extract(&self, binary: &GrayImage) -> PhotoSvgResult<Vec<Contour>>;
}

/// Border following from `imageproc`, reduced to outer boundaries with
/// collinear runs collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract(&self, binary: &GrayImage) -> PhotoSvgResult<Vec<Contour>> {
        // find_contours never starts a border on the outermost pixel ring, so
        // regions touching the edge are traced on a copy with a 1px black frame
        let padded = pad_with_background(binary);
        let contours = find_contours::<i32>(&padded)
            .into_iter()
            // top-level outer borders only; holes and anything nested in them are skipped
            .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
            .map(|c| {
                let points: Vec<Point> = c
                    .points
                    .iter()
                    .map(|p| Point::new(p.x - 1, p.y - 1))
                    .collect();
                Contour::new(simplify_collinear(&points))
            })
            .collect();
        Ok(contours)
    }
}

/// Copy the mask onto a background canvas one pixel larger on every side.
fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let (w, h) = mask.dimensions();
    let mut padded = GrayImage::new(w + 2, h + 2);
    replace(&mut padded, mask, 1, 1);
    padded
}

/// Collapse straight runs of a closed boundary to their endpoints.
///
/// The list is treated as a ring. A point is dropped when the step entering it
/// has the same direction as the step leaving it, so horizontal, vertical and
/// diagonal runs keep only their corners. Rings shorter than three points are
/// returned as-is.
pub fn simplify_collinear(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |from: Point, to: Point| ((to.x - from.x).signum(), (to.y - from.y).signum());

    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            step(prev, curr) != step(curr, next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        // every step identical only happens when all points coincide
        vec![points[0]]
    } else {
        kept
    }
}
