/// Cluster id of a point that belongs to no cluster.
pub const NOISE: i32 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
  pub position: Vec<f64>,
  /// Position of the point in the input stream.
  pub index: usize,
  /// Ground-truth class, -1 when unknown.
  pub label: i32,
  pub cluster: i32,
  /// Size of the eps-neighborhood as last counted.
  pub eps_neighbors: usize,
  pub visited: bool,
}

impl Point {
  pub fn new(position: Vec<f64>, index: usize, label: i32) -> Self {
    Self {
      position,
      index,
      label,
      cluster: NOISE,
      eps_neighbors: 1,
      visited: false,
    }
  }

  pub fn euclid_dist(&self, other: &Point) -> f64 {
    self
      .position
      .iter()
      .zip(other.position.iter())
      .map(|(a, b)| (a - b) * (a - b))
      .sum::<f64>()
      .sqrt()
  }

  pub fn is_noise(&self) -> bool {
    self.cluster == NOISE
  }
}
