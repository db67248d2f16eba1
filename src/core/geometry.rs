use tracing::debug;

use crate::core::params::CropParams;
use crate::core::random::RandomSource;
use crate::types::{CropRect, CropSkipped, ImageBounds, Quadrant};

/// Draws a crop size and a quadrant-biased start offset inside `bounds`.
///
/// Four draws are taken in order: width fraction, height fraction, start X,
/// start Y. A skipped crop takes only the two fraction draws.
///
/// The start range is half of the free space on each axis (`free / 2`,
/// raised to 1 when it truncates to 0). Top-left starts in `[0, half)`,
/// bottom-right in `[half, 2 * half)`. For odd free space the bottom-right
/// range stops one short of the far edge.
pub fn compute_crop<R: RandomSource + ?Sized>(
    bounds: ImageBounds,
    quadrant: Quadrant,
    params: &CropParams,
    rng: &mut R,
) -> Result<CropRect, CropSkipped> {
    let width_frac = params.fraction(rng.next_f64());
    let height_frac = params.fraction(rng.next_f64());

    let crop_width = scaled(bounds.width, width_frac);
    let crop_height = scaled(bounds.height, height_frac);

    if bounds.width <= crop_width
        || bounds.height <= crop_height
        || crop_width == 0
        || crop_height == 0
    {
        return Err(CropSkipped {
            quadrant,
            crop_width,
            crop_height,
            width: bounds.width,
            height: bounds.height,
        });
    }

    let half_x = half_free(bounds.width - crop_width);
    let half_y = half_free(bounds.height - crop_height);

    let (start_x, start_y) = match quadrant {
        Quadrant::TopLeft => (rng.next_below(half_x), rng.next_below(half_y)),
        Quadrant::BottomRight => (
            half_x + rng.next_below(half_x),
            half_y + rng.next_below(half_y),
        ),
    };

    let rect = CropRect {
        x0: bounds.x + start_x,
        y0: bounds.y + start_y,
        x1: bounds.x + start_x + crop_width,
        y1: bounds.y + start_y + crop_height,
    };
    debug!(
        "{} crop: {}x{} (fractions {:.3}/{:.3}) at {}",
        quadrant, crop_width, crop_height, width_frac, height_frac, rect
    );
    Ok(rect)
}

fn scaled(dim: u32, frac: f64) -> u32 {
    (f64::from(dim) * frac).floor() as u32
}

fn half_free(free: u32) -> u32 {
    (free / 2).max(1)
}
