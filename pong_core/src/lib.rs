pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the simulation by exactly one tick
///
/// Stage order matters: each stage operates on the result of the one
/// before it. Events describe this tick only.
pub fn step(
    world: &mut World,
    config: &Config,
    target: &PlayerTarget,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    // 1. Player paddle follows the latest pointer sample
    apply_player_target(world, target, config);

    // 2. Ball integration
    move_ball(world);

    // 3-5. Walls, then player paddle, then opponent paddle
    check_collisions(world, config, events);

    // 6-7. Points, with a fresh serve on each one
    check_scoring(world, config, score, events, rng);

    // 8. Opponent tracks the ball
    drive_opponent(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
