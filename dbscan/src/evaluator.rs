use crate::{Point, NOISE};
use std::collections::HashMap;

/// Clustering quality measures.
pub struct Evaluator;

impl Evaluator {
  /// Average over ground-truth classes of the share of the class that landed in
  /// its dominant cluster. Noise counts as a cluster of its own.
  pub fn purity(points: &[Point]) -> f64 {
    let mut classes: HashMap<i32, Vec<&Point>> = HashMap::new();
    for p in points {
      classes.entry(p.label).or_default().push(p);
    }
    if classes.is_empty() {
      return 0.0;
    }

    let sum: f64 = classes
      .values()
      .map(|members| Self::dominant(members) as f64 / members.len() as f64)
      .sum();
    sum / classes.len() as f64
  }

  /// Sum of squared distances from every clustered point to its cluster centroid.
  pub fn ssq(points: &[Point]) -> f64 {
    let mut clusters: HashMap<i32, Vec<&Point>> = HashMap::new();
    for p in points.iter().filter(|p| p.cluster != NOISE) {
      clusters.entry(p.cluster).or_default().push(p);
    }

    clusters
      .values()
      .map(|members| {
        let centroid = Self::centroid(members);
        members
          .iter()
          .map(|p| {
            p.position
              .iter()
              .zip(centroid.iter())
              .map(|(a, c)| (a - c) * (a - c))
              .sum::<f64>()
          })
          .sum::<f64>()
      })
      .sum()
  }

  /// Size of the most common cluster among `members`.
  fn dominant(members: &[&Point]) -> usize {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for p in members {
      *counts.entry(p.cluster).or_default() += 1;
    }
    counts.values().copied().max().unwrap_or(0)
  }

  fn centroid(members: &[&Point]) -> Vec<f64> {
    let dims = members.iter().map(|p| p.position.len()).max().unwrap_or(0);
    let mut centroid = vec![0.0; dims];
    for p in members {
      for (c, x) in centroid.iter_mut().zip(p.position.iter()) {
        *c += x;
      }
    }
    let n = members.len() as f64;
    centroid.iter_mut().for_each(|c| *c /= n);
    centroid
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;
  use crate::BatchDbscan;

  fn labelled(position: Vec<f64>, label: i32, cluster: i32) -> Point {
    let mut p = Point::new(position, 0, label);
    p.cluster = cluster;
    p
  }

  #[test]
  fn perfect_clustering_is_pure() {
    let mut points = two_blobs_and_outlier(3);
    let mut dbscan = BatchDbscan::new(2.0, 5).unwrap();
    dbscan.cluster(&mut points);
    assert_eq!(Evaluator::purity(&points), 1.0);
  }

  #[test]
  fn purity_averages_over_classes() {
    let points = vec![
      labelled(vec![0.0], 0, 0),
      labelled(vec![0.0], 0, 0),
      labelled(vec![0.0], 0, 1),
      labelled(vec![0.0], 0, 1),
      labelled(vec![0.0], 1, 2),
    ];
    // class 0: 2 of 4 in its dominant cluster, class 1: 1 of 1
    assert_eq!(Evaluator::purity(&points), 0.75);
    assert_eq!(Evaluator::purity(&[]), 0.0);
  }

  #[test]
  fn ssq_of_points_on_their_centroid_is_zero() {
    let points = vec![labelled(vec![1.0, 1.0], 0, 0), labelled(vec![1.0, 1.0], 0, 0)];
    assert_eq!(Evaluator::ssq(&points), 0.0);
  }

  #[test]
  fn ssq_ignores_noise() {
    let points = vec![
      labelled(vec![0.0, 0.0], 0, 0),
      labelled(vec![2.0, 0.0], 0, 0),
      labelled(vec![100.0, 100.0], 0, NOISE),
    ];
    // centroid (1, 0), each point at squared distance 1
    assert_eq!(Evaluator::ssq(&points), 2.0);
  }
}
