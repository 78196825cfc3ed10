use crate::utils::geometry::Point;
use rand::Rng;

/// Samples `n` points uniformly from `[0, bound) x [0, bound)`
///
/// `bound` must be positive. The generator is a parameter so callers can
/// seed it for reproducible samples.
pub fn generate_points<R: Rng + ?Sized>(n: usize, bound: f64, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..bound), rng.random_range(0.0..bound)))
        .collect()
}
