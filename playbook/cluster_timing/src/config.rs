use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which clusterers to time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
  Batch,
  #[default]
  Incremental,
  Both,
}

impl Mode {
  pub fn batch(&self) -> bool {
    matches!(self, Mode::Batch | Mode::Both)
  }

  pub fn incremental(&self) -> bool {
    matches!(self, Mode::Incremental | Mode::Both)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub eps: f64,
  pub min_pts: usize,
  pub input: PathBuf,
  pub num_points: usize,
  pub labelled: bool,
  pub sample_every: usize,
  pub batch_out: PathBuf,
  pub inc_out: PathBuf,
  pub mode: Mode,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      eps: 35.0,
      min_pts: 8,
      input: PathBuf::from("covtype_train"),
      num_points: 100_000,
      labelled: false,
      sample_every: common::STEP as usize,
      batch_out: PathBuf::from("batch-time.txt"),
      inc_out: PathBuf::from("inc-time.txt"),
      mode: Mode::Incremental,
    }
  }
}

impl Config {
  /// `CLUSTER_TIMING_CONFIG` if set, else the `config.yaml` shipped with this crate.
  pub fn read() -> anyhow::Result<Self> {
    match std::env::var("CLUSTER_TIMING_CONFIG") {
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
    Ok(serde_yaml::from_str(&contents)?)
  }
}
