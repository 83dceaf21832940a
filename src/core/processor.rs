// pixfit/src/core/processor.rs
use super::{Outcome, ResizeConfig, Result};
use crate::processors::{Encoder, Loader, Resizer};
use image::GenericImageView;
use std::path::Path;

/// Per-file pipeline: decode, fit within the configured limits, resample,
/// re-encode and replace the original.
pub struct ImageResizer {
    config: ResizeConfig,
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
}

impl ImageResizer {
    pub fn new(config: ResizeConfig) -> Self {
        let encoder = Encoder::new(config.quality);

        Self {
            config,
            loader: Loader::new(),
            resizer: Resizer::new(),
            encoder,
        }
    }

    /// Resizes one file in place. The original is only replaced after the
    /// new encoding is complete, so a failure partway leaves it untouched.
    pub fn process<P: AsRef<Path>>(&self, input_path: P) -> Result<Outcome> {
        let input_path = input_path.as_ref();

        let image = self.loader.load(input_path)?;
        let (width, height) = image.dimensions();

        let Some((new_width, new_height)) =
            self.resizer
                .fit_within(width, height, self.config.max_width, self.config.max_height)
        else {
            log::debug!(
                "{} is {}x{}, within {}x{}",
                input_path.display(),
                width,
                height,
                self.config.max_width,
                self.config.max_height
            );
            return Ok(Outcome::Skipped { width, height });
        };

        let resized = self.resizer.downscale(&image, new_width, new_height);
        let encoded = self.encoder.encode_for_path(&resized, input_path)?;
        self.encoder.replace_file(input_path, &encoded)?;

        Ok(Outcome::Resized {
            from: (width, height),
            to: (new_width, new_height),
        })
    }
}
