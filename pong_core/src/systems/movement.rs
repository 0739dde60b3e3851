use hecs::World;

use crate::components::Ball;

/// Advance the ball by one tick of velocity
///
/// Plain explicit Euler, whole ticks only. No substepping: a ball fast
/// enough to cross a paddle in one tick passes through it.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
