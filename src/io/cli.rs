//! Command-line interface for photo-mosaic generation

use crate::io::configuration::{
    DEFAULT_MAX_WIDTH, DEFAULT_NUM_SOURCES, DEFAULT_NUM_TILES, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::save_composite;
use crate::io::progress::ProgressManager;
use crate::mosaic::pipeline::{MosaicConfig, mosaicify};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tessella")]
#[command(
    author,
    version,
    about = "Build a photo mosaic of a target image from a directory of source images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Target image to reproduce
    #[arg(short, long, value_name = "PATH")]
    pub target: PathBuf,

    /// Directory of candidate source images
    #[arg(short, long, value_name = "DIR")]
    pub sources: PathBuf,

    /// Number of source images to sample from the directory
    #[arg(short = 'n', long = "num_sources", default_value_t = DEFAULT_NUM_SOURCES)]
    pub num_sources: usize,

    /// Number of tiles per axis in the output grid
    #[arg(short = 'l', long = "num_tiles", default_value_t = DEFAULT_NUM_TILES)]
    pub num_tiles: u32,

    /// Output width budget in pixels before tile rounding
    #[arg(short = 'w', long = "max_width", default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: u32,

    /// Random seed for reproducible source sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Where to write the composite (defaults to the target name with a suffix)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration derived from the arguments
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            target: self.target.clone(),
            sources_dir: self.sources.clone(),
            num_sources: self.num_sources,
            num_tiles: self.num_tiles,
            max_width: self.max_width,
            seed: self.seed,
        }
    }
}

/// Runs the pipeline for one target and writes the composite to disk
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the pipeline and write the output image
    ///
    /// # Errors
    ///
    /// Returns any pipeline or export error; nothing is written on failure.
    // Allow print for completion feedback
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.cli.target));

        let config = self.cli.to_config();
        let canvas = mosaicify(&config, self.progress_manager.as_mut())?;
        save_composite(&canvas, &output_path)?;

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} ({}x{}) in {:.1}s",
                output_path.display(),
                canvas.width(),
                canvas.height(),
                start_time.elapsed().as_secs_f64()
            );
        }

        Ok(())
    }

    fn default_output_path(target: &Path) -> PathBuf {
        let stem = target.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
