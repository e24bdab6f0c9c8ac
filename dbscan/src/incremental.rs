use crate::{DbscanError, Point, NOISE};
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};

/// What inserting a point did to the clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
  /// No core point changed; the new point is noise.
  Noise,
  /// Former noise points formed a new cluster.
  Created(i32),
  /// The new core neighborhood joined one existing cluster.
  Absorbed(i32),
  /// Several clusters were merged under a new id.
  Merged(i32),
}

impl Insertion {
  /// When one point changes several components, the reported outcome is the
  /// first one with the highest rank.
  fn rank(&self) -> u8 {
    match self {
      Insertion::Noise => 0,
      Insertion::Absorbed(_) => 1,
      Insertion::Created(_) => 2,
      Insertion::Merged(_) => 3,
    }
  }
}

/// Incremental DBSCAN: clusters are updated point by point instead of being
/// recomputed.
///
/// Neighborhoods include the point itself, so a point is core when its
/// neighborhood holds at least `min_pts` points. Merged clusters are kept as a
/// tree of ids whose roots map to themselves.
#[derive(Debug, Clone)]
pub struct IncDbscan {
  points: Vec<Point>,
  eps: f64,
  min_pts: usize,
  next_cluster: i32,
  searches: usize,
  mapping: HashMap<i32, i32>,
}

impl IncDbscan {
  pub fn new(eps: f64, min_pts: usize) -> Result<Self, DbscanError> {
    if !eps.is_finite() || eps < 0.0 || min_pts < 1 {
      return Err(DbscanError::InvalidParams { eps, min_pts });
    }
    Ok(Self {
      points: vec![],
      eps,
      min_pts,
      next_cluster: 0,
      searches: 0,
      mapping: HashMap::new(),
    })
  }

  pub fn insert(&mut self, point: Point) -> Insertion {
    let p = self.points.len();
    self.points.push(point);
    self.points[p].cluster = NOISE;
    self.searches = 0;

    // q': points that are core in D + p but were not in D
    let mut candidates = vec![];
    let neighbors = self.neighbors(p);
    for &n in &neighbors {
      if n == p {
        self.points[p].eps_neighbors = neighbors.len();
        if neighbors.len() >= self.min_pts {
          candidates.push(p);
        }
      } else {
        self.points[n].eps_neighbors += 1;
        if self.points[n].eps_neighbors == self.min_pts {
          candidates.push(n);
        }
      }
    }

    // UpdSeed, grouped by the q' each seed was found around. Core points in
    // one such neighborhood are density-connected through that q'.
    let mut groups = vec![];
    for &q_prime in &candidates {
      let neighbors = self.neighbors(q_prime);
      let seeds: BTreeSet<usize> = neighbors
        .into_iter()
        .filter(|&q| self.points[q].eps_neighbors >= self.min_pts)
        .collect();
      groups.push(seeds);
    }
    let components = self.components(groups);

    let mut insertion = Insertion::Noise;
    for (seeds, roots) in &components {
      let outcome = match roots.as_slice() {
        [] => {
          let id = self.new_cluster();
          for &seed in seeds {
            self.expand(seed, id);
          }
          Insertion::Created(id)
        }
        [id] => {
          let id = *id;
          for &seed in seeds {
            self.expand(seed, id);
          }
          Insertion::Absorbed(id)
        }
        _ => {
          let id = self.new_cluster();
          for root in roots {
            self.mapping.insert(*root, id);
          }
          for &seed in seeds {
            self.expand(seed, id);
          }
          Insertion::Merged(id)
        }
      };
      if outcome.rank() > insertion.rank() {
        insertion = outcome;
      }
    }

    self.points[p].visited = true;
    debug!(
      "point {} -> {:?} ({} components, {} searches)",
      self.points[p].index,
      insertion,
      components.len(),
      self.searches
    );
    insertion
  }

  /// Join seed groups that share a core point or an existing cluster, since
  /// both connect them. Each component comes with its distinct root clusters.
  fn components(&mut self, groups: Vec<BTreeSet<usize>>) -> Vec<(BTreeSet<usize>, Vec<i32>)> {
    let mut components: Vec<(BTreeSet<usize>, BTreeSet<i32>)> = vec![];
    for seeds in groups {
      let clusters: Vec<i32> = seeds
        .iter()
        .map(|&s| self.points[s].cluster)
        .filter(|&c| c != NOISE)
        .collect();
      let roots: BTreeSet<i32> = clusters.into_iter().map(|c| self.find_root(c)).collect();

      let mut joined = (seeds, roots);
      let mut rest = vec![];
      for component in components.drain(..) {
        if component.0.is_disjoint(&joined.0) && component.1.is_disjoint(&joined.1) {
          rest.push(component);
        } else {
          joined.0.extend(component.0);
          joined.1.extend(component.1);
        }
      }
      rest.push(joined);
      components = rest;
    }

    components.sort_by_key(|(seeds, _)| seeds.iter().next().copied());
    components
      .into_iter()
      .map(|(seeds, roots)| (seeds, roots.into_iter().collect()))
      .collect()
  }

  /// Neighborhood queries run by the last insertion.
  pub fn neighbor_searches(&self) -> usize {
    self.searches
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Root cluster of the i-th inserted point, `None` for noise.
  pub fn cluster_of(&self, i: usize) -> Option<i32> {
    let point = self.points.get(i)?;
    match point.cluster {
      NOISE => None,
      id => Some(self.root(id)),
    }
  }

  /// Stored points with every cluster id resolved to its root.
  pub fn snapshot(&self) -> Vec<Point> {
    self
      .points
      .iter()
      .enumerate()
      .map(|(i, p)| Point {
        cluster: self.cluster_of(i).unwrap_or(NOISE),
        ..p.clone()
      })
      .collect()
  }

  pub fn num_clusters(&self) -> usize {
    count_clusters(&self.mapping)
  }

  pub fn cluster_mapping(&self) -> &HashMap<i32, i32> {
    &self.mapping
  }

  fn new_cluster(&mut self) -> i32 {
    let id = self.next_cluster;
    self.mapping.insert(id, id);
    self.next_cluster += 1;
    id
  }

  fn root(&self, id: i32) -> i32 {
    let mut root = id;
    while let Some(&parent) = self.mapping.get(&root) {
      if parent == root {
        break;
      }
      root = parent;
    }
    root
  }

  /// Root of `id` in the merge tree, compressing the path on the way.
  fn find_root(&mut self, id: i32) -> i32 {
    if !self.mapping.contains_key(&id) {
      warn!("Cluster {} missing from merge tree", id);
    }
    let root = self.root(id);

    let mut id = id;
    while id != root {
      match self.mapping.insert(id, root) {
        Some(parent) => id = parent,
        None => break,
      }
    }
    root
  }

  /// Label every noise point density-reachable from `seed` with `id`.
  fn expand(&mut self, seed: usize, id: i32) {
    let mut seeds = self.neighbors(seed);
    let mut idx = 0;
    while idx < seeds.len() {
      let current = seeds[idx];
      if self.points[current].cluster == NOISE {
        self.points[current].cluster = id;
        let current_neighbors = self.neighbors(current);
        if current_neighbors.len() >= self.min_pts {
          let points = &self.points;
          seeds.extend(
            current_neighbors
              .into_iter()
              .filter(|n| points[*n].cluster == NOISE),
          );
        }
      }
      idx += 1;
    }
  }

  /// Indices of the stored points within `eps` of `points[i]`, including `i`.
  fn neighbors(&mut self, i: usize) -> Vec<usize> {
    self.searches += 1;
    let point = &self.points[i];
    self
      .points
      .iter()
      .enumerate()
      .filter(|(_, other)| point.euclid_dist(other) <= self.eps)
      .map(|(j, _)| j)
      .collect()
  }
}

/// Number of root clusters in a merge tree.
pub fn count_clusters(mapping: &HashMap<i32, i32>) -> usize {
  mapping.iter().filter(|(id, parent)| id == parent).count()
}
