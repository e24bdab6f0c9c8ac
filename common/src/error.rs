use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
  #[error("Series file not found: {}", path.display())]
  NotFound { path: PathBuf },
  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("Invalid number {value:?} at {}:{line}", path.display())]
  Parse {
    path: PathBuf,
    line: u64,
    value: String,
  },
  #[error("Failed to read csv {}: {source}", path.display())]
  Csv { path: PathBuf, source: csv::Error },
  #[error("Column {column:?} not found in {}", path.display())]
  MissingColumn { path: PathBuf, column: String },
}

impl SeriesError {
  pub fn path(&self) -> &PathBuf {
    match self {
      SeriesError::NotFound { path }
      | SeriesError::Io { path, .. }
      | SeriesError::Parse { path, .. }
      | SeriesError::Csv { path, .. }
      | SeriesError::MissingColumn { path, .. } => path,
    }
  }
}
