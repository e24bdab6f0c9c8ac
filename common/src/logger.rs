use log::*;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Maps a `LOG_LEVEL` value to a filter, falling back to info.
pub fn log_level(level: &str) -> LevelFilter {
  match level.to_lowercase().as_str() {
    "trace" => LevelFilter::Trace,
    "debug" => LevelFilter::Debug,
    "info" => LevelFilter::Info,
    "warn" => LevelFilter::Warn,
    "error" => LevelFilter::Error,
    "off" => LevelFilter::Off,
    _ => LevelFilter::Info,
  }
}

pub fn init_logger() -> anyhow::Result<()> {
  let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

  let mut cfg = ConfigBuilder::new();
  // stays on UTC when the local offset cannot be determined
  let _ = cfg.set_time_offset_to_local();
  let cfg = cfg.build();

  TermLogger::init(log_level(&level), cfg, TerminalMode::Mixed, ColorChoice::Auto)
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))
}
