//! Implementations for structs within `models.rs`

use crate::error::Result;
use crate::models::{AssignmentCandidate, Cluster, PairCandidate};
use crate::utils::geometry::{centroid, Point};
use std::fmt;

impl Cluster {
    /// Creates a cluster owning a single point, which is its own centroid
    pub fn singleton(point: Point) -> Self {
        Cluster {
            centroid: point,
            points: vec![point],
        }
    }

    /// Creates a cluster from a non-empty point set, computing the centroid
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let centroid = centroid(&points)?;
        Ok(Cluster { centroid, points })
    }

    /// True if any owned point exactly equals `point`
    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|p| p == point)
    }

    /// Structural equality: same point count and every owned point is a
    /// member of `other`
    pub fn matches(&self, other: &Cluster) -> bool {
        if self.points.len() != other.points.len() {
            // unequal counts can never match, skip the scan
            return false;
        }
        self.points.iter().all(|p| other.contains(p))
    }

    /// Returns a new cluster owning the points of both inputs, with the
    /// centroid recomputed over the union
    pub fn merge(&self, other: &Cluster) -> Result<Cluster> {
        let mut points = Vec::with_capacity(self.points.len() + other.points.len());
        points.extend_from_slice(&self.points);
        points.extend_from_slice(&other.points);
        Cluster::from_points(points)
    }

    /// Returns a new cluster with `point` appended
    ///
    /// The returned centroid is the mean of the membership as it was
    /// *before* the append, so it lags the point list by one point until
    /// the next absorb.
    pub fn absorb(&self, point: Point) -> Result<Cluster> {
        let centroid = centroid(&self.points)?;
        let mut points = self.points.clone();
        points.push(point);
        Ok(Cluster { centroid, points })
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cluster:")?;
        for point in &self.points {
            writeln!(f, "{point}")?;
        }
        writeln!(f, "Centroid: {}", self.centroid)
    }
}

impl PairCandidate {
    /// Proposes merging two list-adjacent clusters
    pub fn new(first: Cluster, second: Cluster) -> Self {
        let distance = first.centroid.distance_squared(&second.centroid);
        PairCandidate {
            first,
            second,
            distance,
        }
    }
}

impl AssignmentCandidate {
    /// Proposes assigning `point` to `cluster`
    pub fn new(cluster: Cluster, point: Point) -> Self {
        let distance = cluster.centroid.distance_squared(&point);
        AssignmentCandidate {
            cluster,
            point,
            distance,
        }
    }
}

/// Returns a new collection with the first structural match of `target`
/// removed
///
/// Matching uses [`Cluster::matches`], so two clusters built from the same
/// points compare as the same cluster regardless of point order. If nothing
/// matches, the result is a plain copy.
pub fn remove_cluster(clusters: &[Cluster], target: &Cluster) -> Vec<Cluster> {
    let mut result = Vec::with_capacity(clusters.len().saturating_sub(1));
    let mut removed = false;

    for cluster in clusters {
        if !removed && cluster.matches(target) {
            removed = true;
            continue;
        }
        result.push(cluster.clone());
    }

    result
}
