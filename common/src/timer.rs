use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Timer {
  start: Instant,
}

impl Default for Timer {
  fn default() -> Self {
    Self::new()
  }
}

impl Timer {
  pub fn new() -> Self {
    Self {
      start: Instant::now(),
    }
  }

  /// Fractional seconds since the timer started.
  pub fn seconds(&self) -> f64 {
    self.start.elapsed().as_secs_f64()
  }

  pub fn millis(&self) -> u128 {
    self.start.elapsed().as_millis()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn elapsed_is_monotonic() {
    let timer = Timer::new();
    let first = timer.seconds();
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(timer.seconds() > first);
    assert!(timer.millis() >= 2);
  }
}
