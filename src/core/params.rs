/// Smallest fraction of each dimension a crop may keep.
pub const MIN_CROP_PERCENT: f64 = 0.6;

/// Upper (exclusive) fraction of each dimension a crop may keep.
pub const MAX_CROP_PERCENT: f64 = 0.9;

/// Crop size range, as fractions of the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropParams {
    pub min_crop_percent: f64,
    pub max_crop_percent: f64,
}

impl CropParams {
    /// Maps a uniform draw in [0, 1) onto [min, max).
    pub fn fraction(&self, unit: f64) -> f64 {
        self.min_crop_percent + unit * (self.max_crop_percent - self.min_crop_percent)
    }
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            min_crop_percent: MIN_CROP_PERCENT,
            max_crop_percent: MAX_CROP_PERCENT,
        }
    }
}
