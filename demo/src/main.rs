// demo/src/main.rs
mod scenario;
mod simulation;

use std::path::PathBuf;
use colly_core::{Result, constants::FIXED_DT, logging::logging::init_logger, status_info, status_warn};
use directories_next::ProjectDirs;
use crate::{scenario::Scenario, simulation::*};

fn main() -> Result<()> {
    let scenario_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config").join("demo.ron"));

    let log_dir = ProjectDirs::from("com", "colly", "demo").map(|dirs| dirs.data_dir().join("logs"));
    let _logger = init_logger(log_dir.as_deref(), "info")?;

    let scenario = Scenario::load(&scenario_path)?;
    let mut world = scenario.build_world()?;
    let mut body = Body::new(scenario.body, scenario.velocity);

    status_info!("Running {} frames of {}.", scenario.frames, scenario_path.display());

    for frame in 0..scenario.frames {
        update_physics(&mut world, &mut body, scenario.grid.steps, scenario.gravity, FIXED_DT)?;
        log::debug!("Frame {frame}: {:?}", body.bounds.position());
    }

    if body.collected.is_empty() {
        status_warn!("No pickups collected.");
    }

    println!(
        "Body settled at ({:.2}, {:.2}) after collecting {} pickup(s).",
        body.bounds.x,
        body.bounds.y,
        body.collected.len()
    );
    Ok(())
}
