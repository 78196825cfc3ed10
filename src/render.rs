//! Scatter-plot rendering of a cluster collection
//!
//! Member points are drawn as filled circles, one palette color per
//! cluster, and each centroid as a black cross. Coordinates are scaled
//! from the sampling bound to the canvas size.

use crate::models::Cluster;
use crate::utils::geometry::Point;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_filled_circle_mut};

const POINT_RADIUS: i32 = 3;

const PALETTE: [Rgb<u8>; 8] = [
    Rgb([220, 57, 18]),
    Rgb([51, 102, 204]),
    Rgb([16, 150, 24]),
    Rgb([255, 153, 0]),
    Rgb([153, 0, 153]),
    Rgb([0, 153, 198]),
    Rgb([221, 68, 119]),
    Rgb([102, 170, 0]),
];

/// Draws `clusters` onto a fresh square canvas of `size` pixels
///
/// `bound` is the exclusive upper limit of the sampled coordinates; points
/// outside `[0, bound)` are clamped to the canvas edge. Palette colors
/// repeat once more than eight clusters are drawn.
pub fn render_scatter(clusters: &[Cluster], bound: f64, size: u32) -> RgbImage {
    let size = size.max(2);
    let mut canvas = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    let scale = f64::from(size - 1) / bound;

    for (index, cluster) in clusters.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        for point in &cluster.points {
            let (x, y) = to_pixel(point, scale, size);
            draw_filled_circle_mut(&mut canvas, (x, y), POINT_RADIUS, color);
        }

        let (cx, cy) = to_pixel(&cluster.centroid, scale, size);
        draw_cross_mut(&mut canvas, Rgb([0, 0, 0]), cx, cy);
    }

    canvas
}

/// Renders `clusters` and saves the image to `path` (format by extension)
pub fn save_scatter(
    clusters: &[Cluster],
    bound: f64,
    size: u32,
    path: &str,
) -> image::ImageResult<()> {
    render_scatter(clusters, bound, size).save(path)
}

fn to_pixel(point: &Point, scale: f64, size: u32) -> (i32, i32) {
    let limit = (size - 1) as f64;
    let x = (point.x * scale).clamp(0.0, limit);
    let y = (point.y * scale).clamp(0.0, limit);
    (x as i32, y as i32)
}
