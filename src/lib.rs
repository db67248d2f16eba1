#![doc = r#"
quadcrop — offline crop augmentation for PNG training sets.

For every PNG under a source tree, quadcrop cuts two random crops and writes
them flat into a destination directory:

- crop 1 is biased toward the top-left of the image,
- crop 2 is biased toward the bottom-right.

Each crop keeps between 60% and 90% of each source dimension
(`MIN_CROP_PERCENT`, `MAX_CROP_PERCENT`). Outputs are named
`<stem>_crop_1<ext>` and `<stem>_crop_2<ext>`.

Quick start: augment a directory
--------------------------------
```rust,no_run
use std::path::Path;
use quadcrop::{augment_directory, CropParams, RngSource};

fn main() -> quadcrop::Result<()> {
    let mut rng = RngSource::from_entropy();
    let report = augment_directory(
        Path::new("/data/train"),
        Path::new("/data/train_crops"),
        &CropParams::default(),
        &mut rng,
    )?;
    println!("images={} written={}", report.images, report.crops_written);
    Ok(())
}
```

Deterministic geometry
----------------------
Geometry takes its randomness from a `RandomSource`, so draws can be
replayed exactly:

```rust
use quadcrop::{compute_crop, CropParams, ImageBounds, Quadrant, SequenceSource};

let mut rng = SequenceSource::new(vec![0.55; 4]);
let rect = compute_crop(
    ImageBounds::new(100, 100),
    Quadrant::TopLeft,
    &CropParams::default(),
    &mut rng,
)
.unwrap();
assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (6, 6, 82, 82));
```

Useful modules
--------------
- [`api`] — file and directory entry points.
- [`core`] — crop parameters, random sources, geometry and the cropper.
- [`io`] — PNG codec, source discovery and output naming.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::api::{BatchReport, FileReport, augment_directory, augment_file, prepare_destination};
pub use crate::core::cropper::QuadrantCropper;
pub use crate::core::geometry::compute_crop;
pub use crate::core::params::{CropParams, MAX_CROP_PERCENT, MIN_CROP_PERCENT};
pub use crate::core::random::{RandomSource, RngSource, SequenceSource};
pub use crate::error::{Error, Result};
pub use crate::types::{CropRect, CropSkipped, ImageBounds, Quadrant};
