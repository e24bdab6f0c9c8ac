use common::{PlotConfig, SeriesFormat, STEP};
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub batch: PathBuf,
  pub incremental: PathBuf,
  pub format: SeriesFormat,
  pub step: i64,
  pub plot: PlotConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      batch: PathBuf::from("batch-time.txt"),
      incremental: PathBuf::from("inc-time.txt"),
      format: SeriesFormat::Lines,
      step: STEP,
      plot: PlotConfig::default(),
    }
  }
}

impl Config {
  /// `TIME_PLOT_CONFIG` if set, else the `config.yaml` shipped with this crate.
  pub fn read() -> anyhow::Result<Self> {
    match std::env::var("TIME_PLOT_CONFIG") {
      Ok(path) => Self::from_file(path),
      Err(_) => {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml");
        if !path.exists() {
          info!("No config at {}, using defaults", path.display());
          return Ok(Self::default());
        }
        Self::from_file(path)
      }
    }
  }

  pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let contents = std::fs::read_to_string(path.as_ref())
      .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.as_ref().display(), e))?;
    Self::from_yaml(&contents)
  }

  pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
    Ok(serde_yaml::from_str(contents)?)
  }
}
