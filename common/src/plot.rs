use crate::{Data, Series};
use plotters::prelude::*;
use plotters::style::full_palette::GREY_400;
use plotters::style::{BLACK, WHITE};
use serde::Deserialize;
use std::ops::Range;
use std::path::PathBuf;

const FIRST: RGBColor = RGBColor(31, 119, 180);
const SECOND: RGBColor = RGBColor(255, 127, 14);
const OTHER: RGBColor = GREY_400;

/// Pixels per figure unit.
pub const DPI: u32 = 100;
/// Width and height in figure units.
pub const FIGURE_SIZE: (u32, u32) = (8, 6);
pub const X_LABEL: &str = "Number of points received";
pub const Y_LABEL: &str = "Time Elapsed";
const FONT_SIZE: f64 = 18.0;

pub struct PlotSeries {
  pub data: Vec<Data>,
  pub label: String,
}

impl PlotSeries {
  pub fn new(label: &str, series: &Series, axis: &[i64]) -> anyhow::Result<Self> {
    Ok(Self {
      data: series.with_axis(axis)?,
      label: label.to_string(),
    })
  }
}

/// Only the output path can be set. Size, labels and fonts are fixed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
  pub out_file: PathBuf,
}

impl Default for PlotConfig {
  fn default() -> Self {
    Self {
      out_file: PathBuf::from("time-result.png"),
    }
  }
}

pub struct Plot;

impl Plot {
  pub const fn pixels() -> (u32, u32) {
    (FIGURE_SIZE.0 * DPI, FIGURE_SIZE.1 * DPI)
  }

  /// Overlay every series as a line on one chart and write it to `cfg.out_file`,
  /// replacing any existing file.
  pub fn plot(series: &[PlotSeries], cfg: &PlotConfig) -> anyhow::Result<()> {
    let (x_range, y_range) = Self::ranges(series);
    let font = FONT_SIZE;

    let root = BitMapBackend::new(&cfg.out_file, Self::pixels()).into_drawing_area();
    root
      .fill(&WHITE)
      .map_err(|e| anyhow::anyhow!("Failed to fill drawing area with white: {}", e))?;
    let mut chart = ChartBuilder::on(&root)
      .margin(20)
      .x_label_area_size(70)
      .y_label_area_size(90)
      .build_cartesian_2d(x_range, y_range)
      .map_err(|e| anyhow::anyhow!("Failed to build cartesian 2d: {}", e))?;

    chart
      .configure_mesh()
      .light_line_style(WHITE)
      .label_style(("sans-serif", font, &BLACK).into_text_style(&root))
      .axis_desc_style(("sans-serif", font, &BLACK).into_text_style(&root))
      .x_desc(X_LABEL)
      .y_desc(Y_LABEL)
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to draw mesh: {}", e))?;

    for (i, s) in series.iter().enumerate() {
      let color = match i {
        0 => FIRST,
        1 => SECOND,
        _ => OTHER,
      };
      chart
        .draw_series(LineSeries::new(
          s.data.iter().map(|data| (data.x, data.y)),
          ShapeStyle {
            color: color.to_rgba(),
            filled: true,
            stroke_width: 2,
          },
        ))
        .map_err(|e| anyhow::anyhow!("Failed to draw series {}: {}", s.label, e))?
        .label(s.label.as_str())
        .legend(move |(x, y)| PathElement::new([(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
      .configure_series_labels()
      .position(SeriesLabelPosition::UpperLeft)
      .margin(10)
      .border_style(BLACK)
      .background_style(WHITE.mix(0.8))
      .label_font(("sans-serif", font))
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to configure series labels: {}", e))?;

    root
      .present()
      .map_err(|e| anyhow::anyhow!("Failed to present root: {}", e))?;

    Ok(())
  }

  /// Axis ranges covering every finite point. Empty or single-valued data still
  /// yields a non-degenerate range.
  fn ranges(series: &[PlotSeries]) -> (Range<i64>, Range<f64>) {
    let mut min_x = i64::MAX;
    let mut max_x = i64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for datum in series.iter().flat_map(|s| &s.data) {
      if datum.x < min_x {
        min_x = datum.x;
      }
      if datum.x > max_x {
        max_x = datum.x;
      }
      if !datum.y.is_finite() {
        continue;
      }
      if datum.y < min_y {
        min_y = datum.y;
      }
      if datum.y > max_y {
        max_y = datum.y;
      }
    }

    let x_range = match min_x.cmp(&max_x) {
      std::cmp::Ordering::Greater => 0..1,
      std::cmp::Ordering::Equal => min_x..min_x + 1,
      std::cmp::Ordering::Less => min_x..max_x,
    };
    let y_range = if min_y > max_y {
      0.0..1.0
    } else if min_y == max_y {
      let pad = if min_y == 0.0 { 0.5 } else { min_y.abs() * 0.05 };
      min_y - pad..max_y + pad
    } else {
      min_y..max_y
    };
    (x_range, y_range)
  }
}

/// Batch and incremental timings on one chart, in that legend order.
pub fn render_comparison(
  batch: &Series,
  batch_axis: &[i64],
  inc: &Series,
  inc_axis: &[i64],
  cfg: &PlotConfig,
) -> anyhow::Result<()> {
  let series = [
    PlotSeries::new("Batch", batch, batch_axis)?,
    PlotSeries::new("Incremental", inc, inc_axis)?,
  ];
  Plot::plot(&series, cfg)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::STEP;

  fn out_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("common_plot_{}_{}", std::process::id(), name))
  }

  fn series(label: &str, values: Vec<f64>) -> PlotSeries {
    let series = Series::new(values);
    let axis = series.index_axis(STEP);
    PlotSeries::new(label, &series, &axis).unwrap()
  }

  #[test]
  fn ranges_cover_all_series() {
    let (x, y) = Plot::ranges(&[
      series("Batch", vec![1.0, 2.0, 3.0]),
      series("Incremental", vec![0.5, 0.4]),
    ]);
    assert_eq!(x, 0..200);
    assert_eq!(y, 0.4..3.0);
  }

  #[test]
  fn ranges_of_empty_series() {
    let (x, y) = Plot::ranges(&[series("Batch", vec![]), series("Incremental", vec![])]);
    assert_eq!(x, 0..1);
    assert_eq!(y, 0.0..1.0);
  }

  #[test]
  fn ranges_of_single_point() {
    let (x, y) = Plot::ranges(&[series("Batch", vec![2.0])]);
    assert_eq!(x, 0..1);
    assert!(y.start < 2.0 && y.end > 2.0);
  }

  #[test]
  fn pixels_follow_figure_size() {
    assert_eq!(Plot::pixels(), (800, 600));
  }

  #[test]
  fn renders_png_and_overwrites() {
    let cfg = PlotConfig {
      out_file: out_file("time-result.png"),
    };
    let batch = Series::new(vec![1.0, 2.0, 3.0]);
    let inc = Series::new(vec![0.5, 0.4]);

    render_comparison(&batch, &batch.index_axis(STEP), &inc, &inc.index_axis(STEP), &cfg).unwrap();
    let first = std::fs::read(&cfg.out_file).unwrap();
    assert!(!first.is_empty());
    assert_eq!(&first[1..4], b"PNG");
    // IHDR width and height
    assert_eq!(u32::from_be_bytes([first[16], first[17], first[18], first[19]]), 800);
    assert_eq!(u32::from_be_bytes([first[20], first[21], first[22], first[23]]), 600);

    render_comparison(&batch, &batch.index_axis(STEP), &inc, &inc.index_axis(STEP), &cfg).unwrap();
    let second = std::fs::read(&cfg.out_file).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn renders_empty_series() {
    let cfg = PlotConfig {
      out_file: out_file("empty-result.png"),
    };
    let empty = Series::default();
    render_comparison(&empty, &[], &empty, &[], &cfg).unwrap();
    assert!(std::fs::metadata(&cfg.out_file).unwrap().len() > 0);
  }

  #[test]
  fn mismatched_axis_writes_nothing() {
    let cfg = PlotConfig {
      out_file: out_file("mismatch-result.png"),
    };
    let batch = Series::new(vec![1.0, 2.0]);
    assert!(render_comparison(&batch, &[0], &batch, &[0, 100], &cfg).is_err());
    assert!(!cfg.out_file.exists());
  }
}
