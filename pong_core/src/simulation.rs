use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, PlayerTarget, Score};
use crate::{create_ball, create_paddle, step};

/// Read-only view of everything a presenter needs for one frame
///
/// Velocity is included so presenters can interpolate between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player_y: f32,
    pub opponent_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub score_player: u32,
    pub score_opponent: u32,
    pub tick: u64,
}

/// One complete simulation instance
///
/// Owns the world and every resource, so multiple games can run side by
/// side and tests never share fixtures. An external driver calls
/// `advance` once per frame and hands `snapshot` to the presenter; the
/// input adapter pushes pointer samples through `set_player_target` at
/// whatever rate they arrive.
pub struct Simulation {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub target: PlayerTarget,
    pub rng: GameRng,
    pub tick: u64,
}

impl Simulation {
    /// New game: paddles centered, ball served from the middle
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Player, spawn_y);
        create_paddle(&mut world, Side::Opponent, spawn_y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            target: PlayerTarget::new(),
            rng,
            tick: 0,
        }
    }

    /// Record the latest pointer/touch sample, unclamped
    ///
    /// Last write wins; the value is clamped when the next tick consumes
    /// it, never here.
    pub fn set_player_target(&mut self, y: f32) {
        self.target.set(y);
    }

    /// Advance by one tick
    pub fn advance(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &self.target,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
    }

    /// Advance by a batch of whole ticks
    pub fn advance_by(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.advance();
        }
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or_default()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .ball()
            .unwrap_or_else(|| Ball::new(self.config.ball_spawn(), Vec2::ZERO));
        Snapshot {
            player_y: self.paddle_y(Side::Player),
            opponent_y: self.paddle_y(Side::Opponent),
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_vx: ball.vel.x,
            ball_vy: ball.vel.y,
            score_player: self.score.player,
            score_opponent: self.score.opponent,
            tick: self.tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let sim = Simulation::new(1);
        let snap = sim.snapshot();

        assert_eq!(snap.player_y, sim.config.paddle_spawn_y());
        assert_eq!(snap.opponent_y, sim.config.paddle_spawn_y());
        assert_eq!(snap.ball_x, sim.config.ball_spawn().x);
        assert_eq!(snap.ball_y, sim.config.ball_spawn().y);
        assert_eq!(snap.ball_vx.abs(), sim.config.serve_speed_x);
        assert_eq!(snap.score_player, 0);
        assert_eq!(snap.score_opponent, 0);
        assert_eq!(snap.tick, 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Simulation::new(7);
        let mut b = Simulation::new(7);

        for i in 0..600 {
            // Identical input streams
            let target = 250.0 + (i % 200) as f32;
            a.set_player_target(target);
            b.set_player_target(target);
            a.advance();
            b.advance();
            assert_eq!(a.snapshot(), b.snapshot(), "Diverged at tick {}", i);
        }
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut sim = Simulation::new(3);
        sim.advance_by(25);
        assert_eq!(sim.snapshot().tick, 25);
    }
}
