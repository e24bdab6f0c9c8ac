#[macro_export]
macro_rules! trunc {
  ($num:expr, $decimals:expr) => {{
    let factor = 10.0_f64.powi($decimals);
    ($num * factor).round() / factor
  }};
}

#[cfg(test)]
mod tests {
  #[test]
  fn trunc_rounds_to_decimals() {
    assert_eq!(trunc!(1.23456, 3), 1.235);
    assert_eq!(trunc!(0.5, 0), 1.0);
  }
}
