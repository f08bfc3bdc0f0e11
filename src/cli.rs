//! Command-line surface: flags layered over `defaults.ini` over built-in
//! defaults.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::ini::IniDefaults;
use crate::error::{Result, TrackerError};
use crate::tracker::{DEFAULT_ALPHA, DEFAULT_MAX_AGE, DEFAULT_MAX_DIST};

/// Frame-by-frame object tracker: assigns stable ids to detections across a
/// JSON stream of timestamped frames.
#[derive(Parser, Debug)]
#[command(name = "frame-tracker")]
#[command(about = "Track detections across frames and emit stable ids", long_about = None)]
pub struct Args {
    /// Path to the input JSON frame stream.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path to write the output JSON labeling to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory to write per-frame PNG visualizations to.
    #[arg(long = "vis-dir")]
    pub vis_dir: Option<PathBuf>,

    /// Gating radius on centre distance, normalized coordinates.
    #[arg(long = "max-dist")]
    pub max_dist: Option<f64>,

    /// Frames a track may coast without a matching detection.
    #[arg(long = "max-age")]
    pub max_age: Option<u32>,

    /// IoU/centre-distance cost weight, in [0, 1].
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Verbose (debug-level) logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved configuration: every tunable and required path, merged
/// from CLI flags, `defaults.ini`, and built-in defaults in that order of
/// precedence.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub vis_dir: PathBuf,
    pub max_dist: f64,
    pub max_age: u32,
    pub alpha: f64,
}

const DEFAULTS_INI_PATH: &str = "defaults.ini";

impl Args {
    /// Merges this invocation's flags with `defaults.ini` (if present) and
    /// the engine's built-in defaults.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.resolve_with_ini_path(Path::new(DEFAULTS_INI_PATH))
    }

    fn resolve_with_ini_path(&self, ini_path: &Path) -> Result<ResolvedConfig> {
        let ini = IniDefaults::load(ini_path)?;

        let input = self
            .input
            .clone()
            .or_else(|| ini.input.clone().map(PathBuf::from))
            .ok_or_else(|| TrackerError::malformed("missing required flag --input"))?;

        let output = self
            .output
            .clone()
            .or_else(|| ini.output.clone().map(PathBuf::from))
            .ok_or_else(|| TrackerError::malformed("missing required flag --output"))?;

        let vis_dir = self
            .vis_dir
            .clone()
            .or_else(|| ini.vis_dir.clone().map(PathBuf::from))
            .ok_or_else(|| TrackerError::malformed("missing required flag --vis-dir"))?;

        let max_dist = self.max_dist.or(ini.max_dist).unwrap_or(DEFAULT_MAX_DIST);
        let max_age = self.max_age.or(ini.max_age).unwrap_or(DEFAULT_MAX_AGE);
        let alpha = self.alpha.or(ini.alpha).unwrap_or(DEFAULT_ALPHA);

        Ok(ResolvedConfig {
            input,
            output,
            vis_dir,
            max_dist,
            max_age,
            alpha,
        })
    }
}
