//! I/O layer around the cropper: PNG decode/encode (`png`), recursive
//! source discovery (`discovery`) and output file naming (`naming`).
pub mod discovery;
pub mod naming;
pub mod png;

pub use discovery::{is_png_file_name, png_files};
pub use naming::crop_output_path;
pub use png::{load_png, write_png};
