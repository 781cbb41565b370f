// demo/src/simulation.rs
use colly_core::{CollisionType, GridWorld, Rect, Result, TileContact, constants::EMPTY_TILE};
use glam::Vec2;

/// The moving body and what it has picked up so far.
#[derive(Debug, Clone)]
pub struct Body {
    pub bounds: Rect,
    pub velocity: Vec2,
    pub collected: Vec<TileContact>,
}

impl Body {
    pub fn new(bounds: Rect, velocity: Vec2) -> Self {
        Self { bounds, velocity, collected: Vec::new() }
    }
}

/// Advances the body by one frame. Blocked axes lose their velocity and
/// touched pickups are removed from the grid.
pub fn update_physics(
    world: &mut GridWorld,
    body: &mut Body,
    steps: u32,
    gravity: f32,
    dt: f32,
) -> Result<()> {
    body.velocity.y += gravity * dt;
    let goal = body.bounds.position() + body.velocity * dt;

    let mut pickups = Vec::new();
    let sweep = world.sweep_with(steps, body.bounds, goal, |contact, world| {
        if world.classify(contact.id) == CollisionType::Cross && !pickups.contains(&(contact.column, contact.row)) {
            pickups.push((contact.column, contact.row));
            body.collected.push(contact);
        }
    })?;

    body.bounds = body.bounds.with_position(sweep.position);
    if sweep.blocked_x {
        body.velocity.x = 0.0;
    }
    if sweep.blocked_y {
        body.velocity.y = 0.0;
    }

    // The sweep borrows the grid, so pickups are cleared once it is done
    for (column, row) in pickups {
        world.set_tile(column, row, EMPTY_TILE)?;
        log::info!("Picked up tile at ({column}, {row}).");
    }
    Ok(())
}
