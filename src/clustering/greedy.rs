//! Greedy clustering: farthest-point seeding, then sequential assignment
//!
//! Phase 1 picks the first seed at random and then repeatedly selects the
//! remaining point with the single largest squared distance to any already
//! selected seed, spreading the initial clusters apart. Phase 2 repeatedly
//! finds the globally closest (cluster, point) pair and absorbs that point,
//! one at a time, until the pool is empty. Both phases are sequential.

use crate::error::{ClusterError, Result};
use crate::impls::remove_cluster;
use crate::models::{AssignmentCandidate, Cluster};
use crate::utils::geometry::{remove_point, Point};
use rand::Rng;

/// Groups `points` into `k` clusters
///
/// `k` must not exceed the point count, and may only be zero when `points`
/// is empty. The generator is only used to pick the first seed.
pub fn cluster<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Result<Vec<Cluster>> {
    let (clusters, pool) = seed_clusters(points, k, rng)?;
    assign(clusters, pool)
}

/// Selects `k` well-separated seed points, each becoming a singleton cluster
///
/// Returns the seed clusters together with the pool of points that remain
/// unassigned. `k == 0` returns an empty collection and the untouched pool.
pub fn seed_clusters<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    rng: &mut R,
) -> Result<(Vec<Cluster>, Vec<Point>)> {
    if k == 0 {
        return Ok((Vec::new(), points.to_vec()));
    }
    if k > points.len() {
        return Err(ClusterError::TooFewPoints {
            requested: k,
            available: points.len(),
        });
    }

    let start = points[rng.random_range(0..points.len())];
    Ok(seed_clusters_from(start, points, k))
}

/// Farthest-point seeding with a fixed first seed
///
/// `start` must be a member of `points` and `k` at least 1. Each further
/// seed is the pool point with the largest squared distance to any seed
/// selected so far, scanning every (candidate, seed) pair and keeping a
/// running maximum.
pub fn seed_clusters_from(start: Point, points: &[Point], k: usize) -> (Vec<Cluster>, Vec<Point>) {
    let mut selected = vec![start];
    let mut pool = remove_point(points, &start);

    while selected.len() < k {
        let mut max_distance = 0.0;
        let mut farthest = None;

        for candidate in &pool {
            for seed in &selected {
                let distance = seed.distance_squared(candidate);
                if distance > max_distance {
                    max_distance = distance;
                    farthest = Some(*candidate);
                }
            }
        }

        // every remaining candidate coincides with a seed, take the next
        // pool point so the requested seed count is still reached
        let Some(next) = farthest.or_else(|| pool.first().copied()) else {
            break;
        };
        selected.push(next);
        pool = remove_point(&pool, &next);
    }

    let clusters = selected.into_iter().map(Cluster::singleton).collect();
    (clusters, pool)
}

/// Assigns every pool point to its nearest cluster, one point per step
///
/// Each step scans all (cluster, point) pairs, absorbs the globally
/// closest pair (first encountered wins on ties) and replaces the grown
/// cluster in the collection.
pub fn assign(mut clusters: Vec<Cluster>, mut pool: Vec<Point>) -> Result<Vec<Cluster>> {
    if clusters.is_empty() && !pool.is_empty() {
        return Err(ClusterError::NoSeedClusters {
            unassigned: pool.len(),
        });
    }

    while !pool.is_empty() {
        let Some(winner) = closest_assignment(&clusters, &pool) else {
            break;
        };

        let grown = winner.cluster.absorb(winner.point)?;
        clusters = remove_cluster(&clusters, &winner.cluster);
        clusters.push(grown);
        pool = remove_point(&pool, &winner.point);
    }

    Ok(clusters)
}

/// Finds the (cluster, point) pair with the smallest squared distance
fn closest_assignment(clusters: &[Cluster], pool: &[Point]) -> Option<AssignmentCandidate> {
    let mut best: Option<AssignmentCandidate> = None;

    for cluster in clusters {
        for point in pool {
            let distance = cluster.centroid.distance_squared(point);
            if best.as_ref().is_none_or(|b| distance < b.distance) {
                best = Some(AssignmentCandidate {
                    cluster: cluster.clone(),
                    point: *point,
                    distance,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn second_seed_is_the_farthest_point_from_the_first() {
        let input = points(&[(0.0, 0.0), (100.0, 100.0), (1.0, 1.0)]);
        let (clusters, pool) = seed_clusters_from(Point::new(0.0, 0.0), &input, 2);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].points, vec![Point::new(0.0, 0.0)]);
        assert_eq!(clusters[1].points, vec![Point::new(100.0, 100.0)]);
        assert_eq!(pool, vec![Point::new(1.0, 1.0)]);
    }

    #[test]
    fn zero_seeds_leaves_the_pool_untouched() {
        let input = points(&[(0.0, 0.0), (5.0, 5.0)]);
        let mut rng = StdRng::seed_from_u64(1);
        let (clusters, pool) = seed_clusters(&input, 0, &mut rng).unwrap();
        assert!(clusters.is_empty());
        assert_eq!(pool, input);
    }

    #[test]
    fn seed_count_beyond_point_count_is_rejected() {
        let input = points(&[(0.0, 0.0)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            seed_clusters(&input, 2, &mut rng).unwrap_err(),
            ClusterError::TooFewPoints {
                requested: 2,
                available: 1
            }
        );
    }

    #[test]
    fn duplicate_points_still_yield_the_requested_seed_count() {
        let input = points(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        let (clusters, pool) = seed_clusters_from(Point::new(3.0, 3.0), &input, 2);
        assert_eq!(clusters.len(), 2);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn one_seed_absorbs_every_point() {
        let input = points(&[(0.0, 0.0), (1.0, 0.0), (50.0, 50.0), (2.0, 2.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let clusters = cluster(&input, 1, &mut rng).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points.len(), input.len());
        for point in &input {
            assert!(clusters[0].contains(point));
        }
    }

    #[test]
    fn no_points_are_lost_or_duplicated() {
        let input = points(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (90.0, 90.0),
            (89.0, 91.0),
            (45.0, 10.0),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let clusters = cluster(&input, 2, &mut rng).unwrap();

        assert_eq!(clusters.len(), 2);
        let total: usize = clusters.iter().map(|c| c.points.len()).sum();
        assert_eq!(total, input.len());
        for point in &input {
            assert_eq!(clusters.iter().filter(|c| c.contains(point)).count(), 1);
        }
    }

    #[test]
    fn assignment_keeps_the_pre_append_centroid() {
        let seeds = vec![Cluster::singleton(Point::new(0.0, 0.0))];
        let pool = points(&[(4.0, 0.0)]);
        let clusters = assign(seeds, pool).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points.len(), 2);
        // the centroid still reflects the membership before the absorb
        assert_eq!(clusters[0].centroid, Point::new(0.0, 0.0));
    }

    #[test]
    fn closest_point_is_assigned_first() {
        // two seeds; the pool point at (2, 0) is closer to the (0, 0) seed
        // than the one at (20, 0), so it must be absorbed first and pull
        // nothing toward the far seed
        let seeds = vec![
            Cluster::singleton(Point::new(0.0, 0.0)),
            Cluster::singleton(Point::new(30.0, 0.0)),
        ];
        let pool = points(&[(20.0, 0.0), (2.0, 0.0)]);
        let clusters = assign(seeds, pool).unwrap();

        let near = clusters
            .iter()
            .find(|c| c.contains(&Point::new(0.0, 0.0)))
            .unwrap();
        assert!(near.contains(&Point::new(2.0, 0.0)));
        let far = clusters
            .iter()
            .find(|c| c.contains(&Point::new(30.0, 0.0)))
            .unwrap();
        assert!(far.contains(&Point::new(20.0, 0.0)));
    }

    #[test]
    fn zero_clusters_with_a_non_empty_pool_is_rejected() {
        let input = points(&[(0.0, 0.0)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            cluster(&input, 0, &mut rng).unwrap_err(),
            ClusterError::NoSeedClusters { unassigned: 1 }
        );
    }

    #[test]
    fn empty_input_with_zero_seeds_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let clusters = cluster(&[], 0, &mut rng).unwrap();
        assert!(clusters.is_empty());
    }
}
