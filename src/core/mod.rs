// pixfit/src/core/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod processor;

pub use processor::ImageResizer;

/// Limits applied to every file in a run. Defaults reproduce the original
/// fixed constants (1200x1200, JPEG quality 50).
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 1200,
            quality: 50,
        }
    }
}

impl ResizeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(PixfitError::InvalidParameter(
                "Maximum dimensions must be nonzero".to_string(),
            ));
        }

        if self.max_width > 100_000 || self.max_height > 100_000 {
            return Err(PixfitError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(PixfitError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resized { from: (u32, u32), to: (u32, u32) },
    Skipped { width: u32, height: u32 },
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub resized: usize,
    pub skipped: usize,
    pub errors: Vec<(PathBuf, String)>,
}

#[derive(Error, Debug)]
pub enum PixfitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),

    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("No images found in: {0}")]
    NoImagesFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, PixfitError>;

pub fn validate_config(config: &ResizeConfig) -> Result<()> {
    config.validate()
}
