// pixfit/src/processors/encoder.rs
use crate::core::{PixfitError, Result};
use crate::utils::{format_file_size, get_file_extension};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Encodes images for saving over their original path. PNG inputs stay PNG
/// (lossless, oxipng-optimized); everything else becomes JPEG at the
/// configured quality.
pub struct Encoder {
    quality: u8,
    optimize_png: bool,
}

impl Encoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
            optimize_png: true,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Encodes in the format implied by the file's extension. The extension
    /// check is case-insensitive, unlike the directory scan filter.
    pub fn encode_for_path(&self, image: &DynamicImage, path: &Path) -> Result<Vec<u8>> {
        match get_file_extension(path).as_deref() {
            Some("png") => self.encode_png(image),
            _ => self.encode_jpeg(image),
        }
    }

    fn encode_jpeg(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
        // JPEG has no alpha channel, flatten before encoding.
        image
            .to_rgb8()
            .write_with_encoder(encoder)
            .map_err(|e| PixfitError::ProcessingError(format!("JPEG encode failed: {}", e)))?;

        Ok(buffer.into_inner())
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| PixfitError::ProcessingError(format!("PNG encode failed: {}", e)))?;

        if !self.optimize_png {
            return Ok(buffer.into_inner());
        }

        optimize_from_memory(&buffer.into_inner(), &Options::default())
            .map_err(|e| PixfitError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }

    /// Writes `data` to a temp file beside `path`, then renames it over the
    /// original. The original survives any failure before the rename.
    pub fn replace_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.persist(path).map_err(|e| PixfitError::Io(e.error))?;

        log::debug!(
            "Saved image: {} ({})",
            path.display(),
            format_file_size(data.len() as u64)
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_bytes_have_jpeg_magic() {
        let encoder = Encoder::new(50);
        let image = DynamicImage::new_rgb8(10, 10);
        let data = encoder.encode_for_path(&image, Path::new("photo.jpg")).unwrap();

        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn png_bytes_have_png_magic() {
        let encoder = Encoder::new(50);
        let image = DynamicImage::new_rgb8(10, 10);
        let data = encoder.encode_for_path(&image, Path::new("photo.png")).unwrap();

        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn uppercase_png_extension_encodes_png() {
        let encoder = Encoder::new(50).with_png_optimization(false);
        let image = DynamicImage::new_rgb8(4, 4);
        let data = encoder.encode_for_path(&image, Path::new("photo.PNG")).unwrap();

        assert_eq!(&data[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn rgba_input_encodes_as_jpeg() {
        let encoder = Encoder::new(50);
        let image = DynamicImage::new_rgba8(10, 10);
        let data = encoder.encode_for_path(&image, Path::new("photo.jpeg")).unwrap();

        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn replace_file_swaps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"before").unwrap();

        let encoder = Encoder::new(50);
        encoder.replace_file(&path, b"after").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"after");
    }
}
