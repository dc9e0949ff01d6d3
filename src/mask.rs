use image::{GrayImage, Luma};
use imageproc::contrast::{ThresholdType, threshold as ip_threshold};

/// Threshold the grayscale image to produce a binary mask.
///
/// Pixels strictly greater than `thr` become 255, everything else 0. A
/// negative threshold turns every pixel on, one above 255 turns every pixel off.
pub fn threshold_mask(gray: &GrayImage, thr: i32) -> GrayImage {
    match u8::try_from(thr) {
        Ok(value) => ip_threshold(gray, value, ThresholdType::Binary),
        Err(_) => {
            let fill = if thr < 0 { 255 } else { 0 };
            let (w, h) = gray.dimensions();
            GrayImage::from_pixel(w, h, Luma([fill]))
        }
    }
}

/// Returns true when every pixel of the mask is background.
pub fn is_empty_mask(mask: &GrayImage) -> bool {
    mask.pixels().all(|p| p.0[0] == 0)
}
