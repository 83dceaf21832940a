use crate::core::{ImageResizer, Outcome, PixfitError, ResizeConfig, Result, RunSummary};
use crate::utils::is_supported_filename;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Drives one run: scan the directory, resize every matching file in place,
/// report each outcome on the console.
pub struct DirectoryProcessor {
    config: ResizeConfig,
    resizer: ImageResizer,
}

impl DirectoryProcessor {
    pub fn new(config: ResizeConfig) -> Self {
        let resizer = ImageResizer::new(config.clone());
        Self { config, resizer }
    }

    /// Processes every supported image directly inside `input_dir`, one file
    /// at a time. A failing file is reported and the loop moves on; only a
    /// missing directory or an empty file set ends the run early.
    pub fn process_directory(&self, input_dir: &Path) -> Result<RunSummary> {
        self.config.validate()?;

        if !input_dir.exists() || !input_dir.is_dir() {
            return Err(PixfitError::MissingDirectory(input_dir.to_path_buf()));
        }

        let image_paths = self.collect_image_paths(input_dir)?;

        if image_paths.is_empty() {
            log::warn!("No image files found in {}", input_dir.display());
            return Err(PixfitError::NoImagesFound(input_dir.to_path_buf()));
        }

        log::info!(
            "Processing {} images from {}",
            image_paths.len(),
            input_dir.display()
        );

        println!("Found {} images to resize...", image_paths.len());
        println!(
            "Max dimensions: {}x{}, Quality: {}",
            self.config.max_width, self.config.max_height, self.config.quality
        );
        println!("{}", "-".repeat(50));

        let mut summary = RunSummary::default();
        for input_path in &image_paths {
            self.process_one(input_path, &mut summary);
        }

        println!("{}", "-".repeat(50));
        println!("Done!");

        Ok(summary)
    }

    fn process_one(&self, input_path: &Path, summary: &mut RunSummary) {
        let name = input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_path.display().to_string());

        match self.resizer.process(input_path) {
            Ok(Outcome::Resized { from, to }) => {
                println!(
                    "✓ Resized: {} ({}x{} -> {}x{})",
                    name, from.0, from.1, to.0, to.1
                );
                summary.resized += 1;
            }
            Ok(Outcome::Skipped { .. }) => {
                println!("- Skipped: {} (already small enough)", name);
                summary.skipped += 1;
            }
            Err(e) => {
                println!("✗ Error processing {}: {}", input_path.display(), e);
                summary
                    .errors
                    .push((input_path.to_path_buf(), e.to_string()));
            }
        }
    }

    fn collect_image_paths(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let paths: Vec<PathBuf> = WalkDir::new(input_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_filename(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        Ok(paths)
    }
}
