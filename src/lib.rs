mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use core::{
    validate_config, ImageResizer, Outcome, PixfitError, ResizeConfig, Result, RunSummary,
};
pub use processors::{DirectoryProcessor, Encoder, Loader, Resizer};
pub use utils::{format_file_size, get_file_extension, is_supported_filename, SUPPORTED_EXTENSIONS};

pub mod prelude {
    pub use crate::{
        DirectoryProcessor, Encoder, ImageResizer, Loader, Outcome, ResizeConfig, Resizer,
        RunSummary,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
