use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which side of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by pointer/touch input
    Player,
    /// Right paddle, driven by the reactive controller
    Opponent,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, kept inside the field after every mutation
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - position is the top-left corner of its bounding square
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, size: f32) -> f32 {
        self.pos.y + size / 2.0
    }

    /// Re-center the ball and roll a fresh serve velocity
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_spawn();

        let vx = if rng.0.gen_bool(0.5) {
            config.serve_speed_x
        } else {
            -config.serve_speed_x
        };
        let vy = rng
            .0
            .gen_range(-config.serve_spread_y..config.serve_spread_y);
        self.vel = Vec2::new(vx, vy);
    }
}
