use image::{DynamicImage, GenericImageView};

use crate::core::geometry::compute_crop;
use crate::core::params::CropParams;
use crate::core::random::RandomSource;
use crate::types::{CropRect, CropSkipped, ImageBounds, Quadrant};

/// Produces quadrant-biased crops from decoded images.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrantCropper {
    params: CropParams,
}

impl QuadrantCropper {
    pub fn new(params: CropParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CropParams {
        &self.params
    }

    /// Draws a rectangle for `quadrant` and copies that region out of `img`.
    pub fn crop<R: RandomSource + ?Sized>(
        &self,
        img: &DynamicImage,
        quadrant: Quadrant,
        rng: &mut R,
    ) -> Result<(CropRect, DynamicImage), CropSkipped> {
        let (width, height) = img.dimensions();
        let bounds = ImageBounds::new(width, height);
        let rect = compute_crop(bounds, quadrant, &self.params, rng)?;
        let region = img.crop_imm(
            rect.x0 - bounds.x,
            rect.y0 - bounds.y,
            rect.width(),
            rect.height(),
        );
        Ok((rect, region))
    }

    /// Top-left then bottom-right, drawing from `rng` in that order.
    pub fn crop_pair<R: RandomSource + ?Sized>(
        &self,
        img: &DynamicImage,
        rng: &mut R,
    ) -> [(Quadrant, Result<(CropRect, DynamicImage), CropSkipped>); 2] {
        Quadrant::ALL.map(|quadrant| (quadrant, self.crop(img, quadrant, rng)))
    }
}
