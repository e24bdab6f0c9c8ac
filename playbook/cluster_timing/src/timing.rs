use common::Timer;
use dbscan::{BatchDbscan, IncDbscan, Point};
use log::{debug, info};
use std::io::Write;

/// Appends the elapsed seconds since creation every `every` points.
pub struct Sampler<W: Write> {
  out: W,
  every: usize,
  timer: Timer,
  samples: usize,
}

impl<W: Write> Sampler<W> {
  pub fn new(out: W, every: usize) -> Self {
    Self {
      out,
      every: every.max(1),
      timer: Timer::new(),
      samples: 0,
    }
  }

  /// Called after the `iter`-th point (0-based) has been processed.
  pub fn record(&mut self, iter: usize) -> std::io::Result<()> {
    if iter % self.every == 0 {
      writeln!(self.out, "{}", self.timer.seconds())?;
      self.samples += 1;
      info!("Processed points: {}", iter);
    }
    Ok(())
  }

  pub fn finish(mut self) -> std::io::Result<(usize, f64)> {
    self.out.flush()?;
    Ok((self.samples, self.timer.seconds()))
  }
}

/// Outcome of one timed run.
#[derive(Debug)]
pub struct Timing {
  pub clusters: usize,
  pub samples: usize,
  pub seconds: f64,
  /// Points with their final cluster ids.
  pub points: Vec<Point>,
}

/// Re-run batch DBSCAN after every new point.
pub fn time_batch<W: Write>(
  points: Vec<Point>,
  eps: f64,
  min_pts: usize,
  every: usize,
  out: W,
) -> anyhow::Result<Timing> {
  let mut dbscan = BatchDbscan::new(eps, min_pts)?;
  let mut received = Vec::with_capacity(points.len());
  let mut sampler = Sampler::new(out, every);

  for (iter, point) in points.into_iter().enumerate() {
    received.push(point);
    dbscan.cluster(&mut received);
    sampler.record(iter)?;
  }

  let (samples, seconds) = sampler.finish()?;
  Ok(Timing {
    clusters: dbscan.num_clusters(),
    samples,
    seconds,
    points: received,
  })
}

/// Feed points one by one into incremental DBSCAN.
pub fn time_incremental<W: Write>(
  points: Vec<Point>,
  eps: f64,
  min_pts: usize,
  every: usize,
  out: W,
) -> anyhow::Result<Timing> {
  let mut dbscan = IncDbscan::new(eps, min_pts)?;
  let mut sampler = Sampler::new(out, every);
  let mut searches = 0;

  for (iter, point) in points.into_iter().enumerate() {
    dbscan.insert(point);
    searches += dbscan.neighbor_searches();
    sampler.record(iter)?;
  }
  debug!("Incremental DBSCAN ran {} neighbor searches", searches);

  let (samples, seconds) = sampler.finish()?;
  Ok(Timing {
    clusters: dbscan.num_clusters(),
    samples,
    seconds,
    points: dbscan.snapshot(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use common::{Series, STEP};

  fn grid(n: usize) -> Vec<Point> {
    // two clumps of points far apart, alternating
    (0..n)
      .map(|i| {
        let base = if i % 2 == 0 { 0.0 } else { 1_000.0 };
        let offset = (i / 2) as f64 * 0.01;
        Point::new(vec![base + offset, base], i, (i % 2) as i32)
      })
      .collect()
  }

  #[test]
  fn samples_every_hundred_points() {
    let mut out = vec![];
    let timing = time_incremental(grid(250), 1.0, 4, STEP as usize, &mut out).unwrap();
    // after points 0, 100 and 200
    assert_eq!(timing.samples, 3);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
  }

  #[test]
  fn batch_and_incremental_find_the_same_clumps() {
    let batch = time_batch(grid(60), 1.0, 4, 10, std::io::sink()).unwrap();
    let inc = time_incremental(grid(60), 1.0, 4, 10, std::io::sink()).unwrap();
    assert_eq!(batch.clusters, 2);
    assert_eq!(inc.clusters, 2);
    assert_eq!(batch.points.len(), 60);
    assert_eq!(inc.points.len(), 60);
  }

  #[test]
  fn output_is_readable_by_the_plotter() {
    let path = std::env::temp_dir().join(format!("cluster_timing_{}_inc-time.txt", std::process::id()));
    let file = std::fs::File::create(&path).unwrap();
    time_incremental(grid(301), 1.0, 4, STEP as usize, file).unwrap();

    let series = Series::from_lines(&path).unwrap();
    assert_eq!(series.len(), 4);
    assert_eq!(series.index_axis(STEP), vec![0, 100, 200, 300]);
    assert!(series.values().windows(2).all(|w| w[0] <= w[1]));
  }

  #[test]
  fn zero_interval_samples_every_point() {
    let mut out = vec![];
    let timing = time_incremental(grid(5), 1.0, 4, 0, &mut out).unwrap();
    assert_eq!(timing.samples, 5);
  }

  #[test]
  fn invalid_params_fail_before_sampling() {
    let mut out = vec![];
    assert!(time_incremental(grid(5), -1.0, 4, 1, &mut out).is_err());
    assert!(out.is_empty());
  }
}
