use crate::Point;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Points on a line at the given coordinates, labelled `label`.
pub fn line(xs: &[f64], label: i32) -> Vec<Point> {
  xs.iter()
    .enumerate()
    .map(|(i, x)| Point::new(vec![*x], i, label))
    .collect()
}

/// `n` points jittered by at most `radius` around `center`, labelled `label`.
pub fn blob(rng: &mut StdRng, center: (f64, f64), radius: f64, n: usize, label: i32) -> Vec<Point> {
  (0..n)
    .map(|i| {
      let x = center.0 + rng.gen_range(-radius..radius);
      let y = center.1 + rng.gen_range(-radius..radius);
      Point::new(vec![x, y], i, label)
    })
    .collect()
}

/// Two dense blobs far apart plus one isolated point, shuffled and re-indexed.
pub fn two_blobs_and_outlier(seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut points = blob(&mut rng, (0.0, 0.0), 0.5, 30, 0);
  points.extend(blob(&mut rng, (50.0, 50.0), 0.5, 30, 1));
  points.push(Point::new(vec![-40.0, 40.0], 0, 2));
  points.shuffle(&mut rng);
  for (i, p) in points.iter_mut().enumerate() {
    p.index = i;
  }
  points
}
