use crate::SeriesError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Number of points received between two consecutive samples.
pub const STEP: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
  pub x: i64,
  pub y: f64,
}

/// How a series file is laid out on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesFormat {
  /// One number per line.
  #[default]
  Lines,
  /// Comma-delimited rows with a header. Values come from `column`, or the first column.
  Csv {
    #[serde(default)]
    column: Option<String>,
  },
}

/// Timing measurements in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series(pub Vec<f64>);

impl Series {
  pub fn new(values: Vec<f64>) -> Self {
    Self(values)
  }

  pub fn load(path: impl AsRef<Path>, format: &SeriesFormat) -> Result<Self, SeriesError> {
    match format {
      SeriesFormat::Lines => Self::from_lines(path),
      SeriesFormat::Csv { column } => Self::from_csv(path, column.as_deref()),
    }
  }

  /// Read one float per line. Surrounding whitespace is ignored, blank lines are not.
  pub fn from_lines(path: impl AsRef<Path>) -> Result<Self, SeriesError> {
    let path = path.as_ref();
    let reader = BufReader::new(open(path)?);

    let mut values = vec![];
    for (i, line) in reader.lines().enumerate() {
      let line = line.map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
      })?;
      values.push(parse(path, i as u64 + 1, &line)?);
    }
    Ok(Self(values))
  }

  /// Read a single column of a CSV file with a header row.
  pub fn from_csv(path: impl AsRef<Path>, column: Option<&str>) -> Result<Self, SeriesError> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| SeriesError::Csv {
      path: path.to_path_buf(),
      source,
    };
    let mut rdr = csv::ReaderBuilder::new()
      .has_headers(true)
      .trim(csv::Trim::All)
      .from_reader(open(path)?);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    if headers.is_empty() {
      return Ok(Self::default());
    }
    let index = match column {
      None => 0,
      Some(name) => headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SeriesError::MissingColumn {
          path: path.to_path_buf(),
          column: name.to_string(),
        })?,
    };

    let mut values = vec![];
    for record in rdr.records() {
      let record = record.map_err(csv_err)?;
      let line = record.position().map(|p| p.line()).unwrap_or_default();
      values.push(parse(path, line, record.get(index).unwrap_or_default())?);
    }
    Ok(Self(values))
  }

  pub fn values(&self) -> &[f64] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn index_axis(&self, step: i64) -> Vec<i64> {
    index_axis(self.len(), step)
  }

  /// Pair each value with its x coordinate. Both sides must have the same length.
  pub fn with_axis(&self, axis: &[i64]) -> anyhow::Result<Vec<Data>> {
    if axis.len() != self.len() {
      return Err(anyhow::anyhow!(
        "Axis length {} does not match series length {}",
        axis.len(),
        self.len()
      ));
    }
    Ok(
      axis
        .iter()
        .zip(self.0.iter())
        .map(|(x, y)| Data { x: *x, y: *y })
        .collect(),
    )
  }
}

/// `0, step, 2*step, ...` with exactly `len` elements.
pub fn index_axis(len: usize, step: i64) -> Vec<i64> {
  (0..len as i64).map(|i| i * step).collect()
}

fn open(path: &Path) -> Result<File, SeriesError> {
  File::open(path).map_err(|source| match source.kind() {
    ErrorKind::NotFound => SeriesError::NotFound {
      path: path.to_path_buf(),
    },
    _ => SeriesError::Io {
      path: path.to_path_buf(),
      source,
    },
  })
}

fn parse(path: &Path, line: u64, value: &str) -> Result<f64, SeriesError> {
  value.trim().parse::<f64>().map_err(|_| SeriesError::Parse {
    path: path.to_path_buf(),
    line,
    value: value.to_string(),
  })
}
