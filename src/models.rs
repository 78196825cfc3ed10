//! Data structures for `clustrs`

use crate::utils::geometry::Point;

/// A group of sample points with their centroid
#[derive(Debug, Clone)]
pub struct Cluster {
    /// The arithmetic mean of the owned points
    pub centroid: Point,
    /// The points owned by this cluster
    pub points: Vec<Point>,
}

/// A proposed merge of two clusters that sit next to each other in the
/// current cluster list
#[derive(Debug, Clone)]
pub struct PairCandidate {
    /// The cluster closer to the head of the list
    pub first: Cluster,
    /// The cluster directly after `first`
    pub second: Cluster,
    /// Squared distance between the two centroids
    pub distance: f64,
}

/// A proposed assignment of an unclustered point to a cluster
#[derive(Debug, Clone)]
pub struct AssignmentCandidate {
    /// The receiving cluster
    pub cluster: Cluster,
    /// The point to absorb
    pub point: Point,
    /// Squared distance between the cluster centroid and the point
    pub distance: f64,
}
