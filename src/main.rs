use clustrs::choices::{Algorithm, ScatterOutput};
use clustrs::clustering::{greedy, hierarchical};
use clustrs::models::Cluster;
use clustrs::render;
use clustrs::report::render_report;
use clustrs::utils::duration::timed;
use clustrs::utils::sampling::generate_points;
use indicatif::ProgressBar;
use std::time::Duration;

const COORDINATE_BOUND: f64 = 100.0;
const SCATTER_SIZE: u32 = 800;

fn main() -> anyhow::Result<()> {
    let point_count = inquire::prompt_u32("How many points should be sampled?")? as usize;
    let target = inquire::prompt_u32("How many clusters should remain?")? as usize;
    let algorithm =
        Algorithm::choice("Which clustering strategy should run?").expect("Failed to get user input");

    let mut rng = rand::rng();
    let points = generate_points(point_count, COORDINATE_BOUND, &mut rng);
    println!(
        "Sampled {} points within a {COORDINATE_BOUND}x{COORDINATE_BOUND} region",
        points.len()
    );

    let mut runs: Vec<(&str, Vec<Cluster>)> = Vec::new();

    if matches!(algorithm, Algorithm::Hierarchical | Algorithm::Both) {
        let clusters = run_engine("hierarchical", || hierarchical::cluster(&points, target))?;
        runs.push(("hierarchical", clusters));
    }

    if matches!(algorithm, Algorithm::GreedySeed | Algorithm::Both) {
        let clusters = run_engine("greedy-seed", || greedy::cluster(&points, target, &mut rng))?;
        runs.push(("greedy-seed", clusters));
    }

    let output =
        ScatterOutput::choice("Should the results be rendered?").expect("Failed to get user input");

    if output == ScatterOutput::Save {
        for (name, clusters) in &runs {
            let path = format!("clusters-{name}.png");
            render::save_scatter(clusters, COORDINATE_BOUND, SCATTER_SIZE, &path)?;
            println!("Saved {path}");
        }
    }

    Ok(())
}

fn run_engine(
    name: &str,
    run: impl FnOnce() -> clustrs::Result<Vec<Cluster>>,
) -> anyhow::Result<Vec<Cluster>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Running {name} clustering..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let (outcome, elapsed) = timed(run);
    spinner.finish_and_clear();

    let clusters = outcome?;
    println!("=== {name} ===");
    println!("{}", render_report(&clusters, elapsed));
    Ok(clusters)
}
