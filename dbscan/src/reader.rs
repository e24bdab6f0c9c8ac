use crate::{DbscanError, Point};
use std::path::Path;

/// Read up to `limit` comma-separated rows of coordinates, without a header.
///
/// With `labelled`, the last column is taken as the integer ground-truth class instead
/// of a coordinate.
pub fn read_points(path: impl AsRef<Path>, limit: usize, labelled: bool) -> Result<Vec<Point>, DbscanError> {
  let path = path.as_ref();
  let csv_err = |source: csv::Error| DbscanError::Csv {
    path: path.to_path_buf(),
    source,
  };
  let mut rdr = csv::ReaderBuilder::new()
    .has_headers(false)
    .trim(csv::Trim::All)
    .from_path(path)
    .map_err(csv_err)?;

  let mut points = vec![];
  for record in rdr.records().take(limit) {
    let record = record.map_err(csv_err)?;
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let parse_err = |value: &str| DbscanError::Parse {
      path: path.to_path_buf(),
      line,
      value: value.to_string(),
    };

    let mut fields: Vec<&str> = record.iter().collect();
    let label = match labelled {
      true => {
        let value = fields.pop().unwrap_or_default();
        value.parse::<i32>().map_err(|_| parse_err(value))?
      }
      false => -1,
    };
    let position = fields
      .into_iter()
      .map(|v| v.parse::<f64>().map_err(|_| parse_err(v)))
      .collect::<Result<Vec<f64>, DbscanError>>()?;

    points.push(Point::new(position, points.len(), label));
  }
  Ok(points)
}
