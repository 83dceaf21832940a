use clap::Parser;
use log::LevelFilter;
use pixfit::{Cli, DirectoryProcessor, PixfitError, ResizeConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = ResizeConfig {
        max_width: cli.max_width,
        max_height: cli.max_height,
        quality: cli.quality,
    };

    let processor = DirectoryProcessor::new(config);

    match processor.process_directory(&cli.input) {
        Ok(summary) => {
            log::info!(
                "Run complete: {} resized, {} skipped, {} errors",
                summary.resized,
                summary.skipped,
                summary.errors.len()
            );
        }
        // Both run-level exits are messages, not failures: the original tool
        // prints and falls through with a zero exit code.
        Err(PixfitError::MissingDirectory(dir)) => {
            println!("Error: '{}' directory not found!", dir.display());
        }
        Err(PixfitError::NoImagesFound(dir)) => {
            println!("No images found in '{}' directory!", dir.display());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
