//! Shared types used across quadcrop.
//! Includes `Quadrant`, the `ImageBounds`/`CropRect` geometry pair and the
//! `CropSkipped` outcome reported when an image is too small for a draw.

/// Corner a crop's start offset is biased toward.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Quadrant {
    TopLeft,
    BottomRight,
}

impl Quadrant {
    /// Both quadrants in processing order.
    pub const ALL: [Quadrant; 2] = [Quadrant::TopLeft, Quadrant::BottomRight];

    /// 1-based crop number used in output file names.
    pub fn crop_number(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::BottomRight => 2,
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::BottomRight => "bottom-right",
        };
        write!(f, "{}", s)
    }
}

/// Extent of a decoded image. `x`/`y` is the origin offset, zero for
/// anything freshly decoded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ImageBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn with_origin(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Half-open rectangle `[x0, x1) x [y0, y1)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// True when the rectangle is non-empty and lies inside `bounds`.
    pub fn fits_within(&self, bounds: &ImageBounds) -> bool {
        self.x0 >= bounds.x
            && self.y0 >= bounds.y
            && self.x0 < self.x1
            && self.y0 < self.y1
            && self.x1 <= bounds.x + bounds.width
            && self.y1 <= bounds.y + bounds.height
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{} - {},{}]", self.x0, self.y0, self.x1, self.y1)
    }
}

/// A crop that was not produced because the drawn size leaves no free space.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropSkipped {
    pub quadrant: Quadrant,
    pub crop_width: u32,
    pub crop_height: u32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for CropSkipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "image too small for {} crop {} ({}x{} drawn from {}x{})",
            self.quadrant,
            self.quadrant.crop_number(),
            self.crop_width,
            self.crop_height,
            self.width,
            self.height
        )
    }
}
