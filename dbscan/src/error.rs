use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DbscanError {
  #[error("DBSCAN params out of range: eps = {eps}, min_pts = {min_pts}")]
  InvalidParams { eps: f64, min_pts: usize },
  #[error("Failed to read points from {}: {source}", path.display())]
  Csv { path: PathBuf, source: csv::Error },
  #[error("Invalid coordinate {value:?} at {}:{line}", path.display())]
  Parse {
    path: PathBuf,
    line: u64,
    value: String,
  },
}
