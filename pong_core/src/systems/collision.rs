use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Resolve ball collisions: walls first, then player paddle, then opponent
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top/bottom walls: clamp back inside and reflect. The two cases are
    // mutually exclusive since the field is taller than the ball.
    if ball_pos.y <= 0.0 {
        ball_pos.y = 0.0;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    } else if ball_pos.y + config.ball_size >= config.field_h {
        ball_pos.y = config.field_h - config.ball_size;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    }

    // Player paddle: the ball's left edge reached the paddle face while
    // their vertical extents overlap.
    if let Some(paddle_y) = paddle_top(world, Side::Player) {
        let face = config.player_x + config.paddle_width;
        if ball_pos.x <= face
            && ball_pos.y + config.ball_size >= paddle_y
            && ball_pos.y <= paddle_y + config.paddle_height
        {
            // Flush to the face so the hit cannot re-trigger next tick
            ball_pos.x = face;
            ball_vel.x = -ball_vel.x;
            ball_vel.y = deflect_vy(ball_pos.y, paddle_y, config);
            events.ball_hit_paddle = true;
        }
    }

    // Opponent paddle, mirrored in x
    if let Some(paddle_y) = paddle_top(world, Side::Opponent) {
        if ball_pos.x + config.ball_size >= config.opponent_x
            && ball_pos.y + config.ball_size >= paddle_y
            && ball_pos.y <= paddle_y + config.paddle_height
        {
            ball_pos.x = config.opponent_x - config.ball_size;
            ball_vel.x = -ball_vel.x;
            ball_vel.y = deflect_vy(ball_pos.y, paddle_y, config);
            events.ball_hit_paddle = true;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}

/// Vertical return speed from where the ball struck the paddle
///
/// The impact offset is the ball center's distance from the paddle
/// center, normalized by the paddle half-height: about -1 at the top
/// edge, +1 at the bottom, slightly past that on a corner graze. Center
/// strikes return flat, edge strikes return steep.
fn deflect_vy(ball_y: f32, paddle_y: f32, config: &Config) -> f32 {
    let ball_center = ball_y + config.ball_size / 2.0;
    let paddle_center = paddle_y + config.paddle_height / 2.0;
    let offset = (ball_center - paddle_center) / (config.paddle_height / 2.0);
    offset * config.deflect_speed_y
}

fn paddle_top(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| p.y)
}
