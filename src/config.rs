/// Command line and config file handling
///
/// Settings come from an optional TOML file in the user's config
/// directory; command line flags override individual values.
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::picsum::DEFAULT_BASE_URL;

/// Default log spec: our crate at info, noisy GPU crates silenced
pub const DEFAULT_LOG_SPEC: &str = "info, iced=error, wgpu_hal=error, wgpu_core=error";

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<f32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<f32>,

    /// Root of the Picsum API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible sequence of images
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub window_width: f32,
    pub window_height: f32,
    pub request_timeout_secs: u64,
    pub log_spec: Option<String>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_BASE_URL.to_string(),
            window_width: 420.0,
            window_height: 800.0,
            request_timeout_secs: 30,
            log_spec: None,
            seed: None,
        }
    }
}

impl Config {
    /// `~/.config/random-gallery/config.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("random-gallery");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Overlay the flags that were given on the command line
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(width) = args.width {
            self.window_width = width;
        }
        if let Some(height) = args.height {
            self.window_height = height;
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    pub fn log_spec(&self) -> &str {
        self.log_spec.as_deref().unwrap_or(DEFAULT_LOG_SPEC)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn window_size(&self) -> iced::Size {
        iced::Size::new(self.window_width, self.window_height)
    }
}
