use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Award a point when the ball has left the field, then serve anew
///
/// Both edges are checked independently each tick; a serve re-centers
/// the ball, so at most one side can score per tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.point_for_opponent();
            events.opponent_scored = true;
            ball.serve(config, rng);
        }
        if ball.pos.x + config.ball_size > config.field_w {
            score.point_for_player();
            events.player_scored = true;
            ball.serve(config, rng);
        }
    }
}
