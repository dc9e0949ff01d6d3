use std::path::Path;

use image::{ColorType, DynamicImage, GrayImage, Luma};

use crate::{PhotoSvgError, PhotoSvgResult};

/// Something that can load a file as a single-channel 8-bit raster.
pub trait GrayscaleDecoder {
    fn decode(&self, path: &Path) -> PhotoSvgResult<GrayImage>;
}

/// Decoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileDecoder;

impl GrayscaleDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> PhotoSvgResult<GrayImage> {
        let img = image::open(path).map_err(|source| PhotoSvgError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(to_gray_bt601(img))
    }
}

/// Reduce an image to 8-bit luma.
///
/// Grayscale inputs keep their values, colour inputs are weighted with the
/// BT.601 coefficients. Alpha is dropped, not composited.
pub fn to_gray_bt601(img: DynamicImage) -> GrayImage {
    match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => img.into_luma8(),
        _ => {
            let rgb = img.into_rgb8();
            let (w, h) = rgb.dimensions();
            GrayImage::from_fn(w, h, |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([bt601_luma(r, g, b)])
            })
        }
    }
}

fn bt601_luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    // weights sum to 1000, so this never exceeds 255
    ((weighted + 500) / 1000) as u8
}
