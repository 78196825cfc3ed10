//! Agglomerative clustering with centroid linkage
//!
//! Every input point starts as its own singleton cluster. Each iteration
//! computes the squared centroid distance for every pair of clusters that
//! sit next to each other in the current list, merges the closest such
//! pair, and appends the merged cluster at the tail. Candidates are only
//! taken from neighbouring list positions, so the list order influences
//! which clusters merge.

use crate::error::{ClusterError, Result};
use crate::impls::remove_cluster;
use crate::models::{Cluster, PairCandidate};
use crate::utils::geometry::Point;
use rayon::prelude::*;

/// Merges clusters until exactly `target` remain
///
/// `target` must be in `1..=points.len()`. A target equal to the point
/// count returns the singleton clusters unchanged.
pub fn cluster(points: &[Point], target: usize) -> Result<Vec<Cluster>> {
    if target == 0 || target > points.len() {
        return Err(ClusterError::TargetOutOfRange {
            target,
            available: points.len(),
        });
    }

    let mut clusters = singleton_clusters(points);
    while clusters.len() > target {
        let Some(winner) = closest_pair(adjacent_candidates(&clusters)) else {
            break;
        };

        let merged = winner.first.merge(&winner.second)?;
        clusters = remove_cluster(&clusters, &winner.first);
        clusters = remove_cluster(&clusters, &winner.second);
        clusters.push(merged);
    }

    Ok(clusters)
}

/// One singleton cluster per input point, in input order
fn singleton_clusters(points: &[Point]) -> Vec<Cluster> {
    points.iter().copied().map(Cluster::singleton).collect()
}

/// Computes a [`PairCandidate`] for every neighbouring cluster pair
///
/// The pair distances are independent, so they are fanned out across the
/// rayon pool, one task per pair index with its own result slot. `collect`
/// waits for every task before the selection step runs.
fn adjacent_candidates(clusters: &[Cluster]) -> Vec<PairCandidate> {
    if clusters.len() < 2 {
        return Vec::new();
    }

    (0..clusters.len() - 1)
        .into_par_iter()
        .map(|i| PairCandidate::new(clusters[i].clone(), clusters[i + 1].clone()))
        .collect()
}

/// Picks the candidate with the smallest distance, keeping the first one
/// encountered on ties
fn closest_pair(candidates: Vec<PairCandidate>) -> Option<PairCandidate> {
    candidates.into_iter().reduce(|closest, candidate| {
        if candidate.distance < closest.distance {
            candidate
        } else {
            closest
        }
    })
}
