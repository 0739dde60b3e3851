use hecs::World;

use crate::components::{Paddle, Side};
use crate::config::Config;
use crate::resources::PlayerTarget;

/// Steer the player paddle toward the latest pointer sample
///
/// The sample is the desired pointer y in field coordinates; the paddle
/// is centered on it and clamped into the field here, not at the input
/// boundary. While no sample has ever arrived the paddle holds position.
pub fn apply_player_target(world: &mut World, target: &PlayerTarget, config: &Config) {
    let target_y = match target.get() {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(target_y - config.paddle_height / 2.0);
        }
    }
}
