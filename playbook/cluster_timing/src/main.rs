use common::*;
use config::Config;
use dbscan::*;
use log::*;
use std::fs::File;
use std::io::BufWriter;
use timing::*;

mod config;
mod timing;

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger()?;

  let cfg = Config::read()?;
  let timer = Timer::new();
  let points = read_points(&cfg.input, cfg.num_points, cfg.labelled)?;
  info!(
    "Read {} points from {} in {}ms",
    points.len(),
    cfg.input.display(),
    timer.millis()
  );

  if cfg.mode.batch() {
    let out = BufWriter::new(File::create(&cfg.batch_out)?);
    let result = time_batch(points.clone(), cfg.eps, cfg.min_pts, cfg.sample_every, out)?;
    report("Batch", &result, cfg.labelled);
  }
  if cfg.mode.incremental() {
    let out = BufWriter::new(File::create(&cfg.inc_out)?);
    let result = time_incremental(points, cfg.eps, cfg.min_pts, cfg.sample_every, out)?;
    report("Incremental", &result, cfg.labelled);
  }
  Ok(())
}

fn report(name: &str, result: &Timing, labelled: bool) {
  info!(
    "{} DBSCAN: {} clusters, {} samples, {}s",
    name,
    result.clusters,
    result.samples,
    trunc!(result.seconds, 3)
  );
  if labelled {
    info!("{} purity: {}", name, trunc!(Evaluator::purity(&result.points), 4));
  }
  info!("{} SSQ: {}", name, trunc!(Evaluator::ssq(&result.points), 4));
}
