use common::*;
use config::Config;
use log::*;

mod config;

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger()?;

  let cfg = Config::read()?;
  run(&cfg)
}

/// Load both timing series, index them by points received and chart them.
/// Both inputs are loaded before the chart file is touched.
fn run(cfg: &Config) -> anyhow::Result<()> {
  let batch = Series::load(&cfg.batch, &cfg.format)?;
  let inc = Series::load(&cfg.incremental, &cfg.format)?;
  info!(
    "Loaded {} batch samples from {} and {} incremental samples from {}",
    batch.len(),
    cfg.batch.display(),
    inc.len(),
    cfg.incremental.display()
  );

  let batch_axis = batch.index_axis(cfg.step);
  let inc_axis = inc.index_axis(cfg.step);
  render_comparison(&batch, &batch_axis, &inc, &inc_axis, &cfg.plot)?;

  info!("Saved {}", cfg.plot.out_file.display());
  Ok(())
}
