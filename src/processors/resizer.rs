// pixfit/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Computes fitted dimensions and performs the resample with a fixed
/// Lanczos3 filter.
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Returns the target dimensions for an image that must fit within
    /// `max_w` x `max_h`, or `None` when it already does.
    ///
    /// The scale factor is `min(max_w/w, max_h/h)` and both products are
    /// floored, so the dimension that overflows more lands exactly on its
    /// limit (or one pixel under) and the other shrinks proportionally.
    pub fn fit_within(&self, width: u32, height: u32, max_w: u32, max_h: u32) -> Option<(u32, u32)> {
        if width <= max_w && height <= max_h {
            return None;
        }

        let ratio_w = max_w as f64 / width as f64;
        let ratio_h = max_h as f64 / height as f64;
        let ratio = ratio_w.min(ratio_h);

        let new_w = (width as f64 * ratio).floor() as u32;
        let new_h = (height as f64 * ratio).floor() as u32;

        Some((new_w.max(1), new_h.max(1)))
    }

    /// Resamples to exactly `width` x `height`. The fitted dimensions are
    /// computed by `fit_within`, so no further aspect handling happens here.
    pub fn downscale(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.filter)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
