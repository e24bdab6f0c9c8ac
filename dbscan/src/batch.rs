use crate::{DbscanError, Point, NOISE};
use log::trace;

/// Classic DBSCAN over a whole point set.
///
/// A point is core when at least `min_pts` *other* points lie within `eps`.
/// Every call starts over: previous labels and cluster ids are discarded.
#[derive(Debug, Clone)]
pub struct BatchDbscan {
  eps: f64,
  min_pts: usize,
  next_cluster: i32,
}

impl BatchDbscan {
  pub fn new(eps: f64, min_pts: usize) -> Result<Self, DbscanError> {
    if !eps.is_finite() || eps < 0.0 {
      return Err(DbscanError::InvalidParams { eps, min_pts });
    }
    Ok(Self {
      eps,
      min_pts,
      next_cluster: 0,
    })
  }

  /// Number of clusters found by the last call to `cluster`.
  pub fn num_clusters(&self) -> usize {
    self.next_cluster as usize
  }

  pub fn cluster(&mut self, points: &mut [Point]) {
    self.next_cluster = 0;
    for p in points.iter_mut() {
      p.visited = false;
      p.cluster = NOISE;
    }

    for i in 0..points.len() {
      if points[i].visited {
        continue;
      }
      points[i].visited = true;
      let neighbors = self.neighbors(i, points);

      if neighbors.len() >= self.min_pts {
        points[i].cluster = self.next_cluster;
        self.expand(neighbors, points);
        trace!("cluster {} seeded by point {}", self.next_cluster, points[i].index);
        self.next_cluster += 1;
      } else {
        // may still become a border point of a later cluster
        points[i].cluster = NOISE;
      }
    }
  }

  /// Absorb every point density-reachable from the seed neighborhood.
  fn expand(&self, neighbors: Vec<usize>, points: &mut [Point]) {
    let mut seeds = neighbors;
    let mut idx = 0;
    while idx < seeds.len() {
      let current = seeds[idx];
      if !points[current].visited {
        points[current].visited = true;
        points[current].cluster = self.next_cluster;
        let current_neighbors = self.neighbors(current, points);
        if current_neighbors.len() >= self.min_pts {
          seeds.extend(
            current_neighbors
              .into_iter()
              .filter(|n| !points[*n].visited),
          );
        }
      }

      // border point
      if points[current].cluster == NOISE {
        points[current].visited = true;
        points[current].cluster = self.next_cluster;
      }
      idx += 1;
    }
  }

  /// Indices of the points within `eps` of `points[i]`, excluding `i` itself.
  fn neighbors(&self, i: usize, points: &mut [Point]) -> Vec<usize> {
    let neighbors: Vec<usize> = (0..points.len())
      .filter(|&j| j != i && points[i].euclid_dist(&points[j]) <= self.eps)
      .collect();
    points[i].eps_neighbors = neighbors.len();
    neighbors
  }
}
