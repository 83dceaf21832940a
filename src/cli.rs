// pixfit/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Downsizes every oversized image in a directory, overwriting the originals.
#[derive(Parser, Debug)]
#[command(name = "pixfit", version, about)]
pub struct Cli {
    /// Directory to scan for images
    #[arg(short, long, default_value = "images")]
    pub input: PathBuf,

    /// Maximum output width in pixels
    #[arg(long, default_value_t = 1200)]
    pub max_width: u32,

    /// Maximum output height in pixels
    #[arg(long, default_value_t = 1200)]
    pub max_height: u32,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = 50)]
    pub quality: u8,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
