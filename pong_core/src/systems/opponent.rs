use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;

/// Reactive tracking policy for the opponent paddle
///
/// Chases the current ball center at a fixed speed, with a deadband so
/// the paddle does not jitter while the ball is roughly level with it.
/// No prediction of where the ball will land, which keeps the defense
/// beatable.
pub fn drive_opponent(world: &mut World, config: &Config) {
    let ball_center = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| ball.center_y(config.ball_size))
    };

    let ball_center = match ball_center {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.y + config.paddle_height / 2.0;
        if ball_center < center - config.opponent_deadzone {
            paddle.y -= config.opponent_speed;
        } else if ball_center > center + config.opponent_deadzone {
            paddle.y += config.opponent_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
