//! Text report for a finished clustering run

use crate::models::Cluster;
use std::time::Duration;

/// Renders the cluster collection and the elapsed wall-clock time as a
/// human-readable report
pub fn render_report(clusters: &[Cluster], elapsed: Duration) -> String {
    let mut result = format!("{} resulting clusters\n", clusters.len());
    result += &format!("Clustering took {elapsed:?}\n");

    for cluster in clusters {
        result += "-------------------\n";
        result += &cluster.to_string();
    }

    result
}
