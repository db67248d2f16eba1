use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Augmentation failed: {0}")]
    Augment(#[from] quadcrop::Error),
}
