//! Command Line Interface (CLI) layer for quadcrop.
//!
//! Defines argument parsing (`args`), error types (`errors`) and the
//! orchestration logic (`runner`). If you are embedding quadcrop into
//! another application, use `quadcrop::api` instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
