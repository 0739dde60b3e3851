use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_w: f32,
    pub field_h: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_x: f32,
    pub opponent_x: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_spread_y: f32,
    pub deflect_speed_y: f32,
    pub opponent_speed: f32,
    pub opponent_deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_w: Params::FIELD_W,
            field_h: Params::FIELD_H,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_x: Params::PLAYER_X,
            opponent_x: Params::OPPONENT_X,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_spread_y: Params::SERVE_SPREAD_Y,
            deflect_speed_y: Params::DEFLECT_SPEED_Y,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_deadzone: Params::OPPONENT_DEADZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed X anchor for a paddle side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_x,
            Side::Opponent => self.opponent_x,
        }
    }

    /// Clamp a paddle top edge to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_h - self.paddle_height)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_h - self.paddle_height) / 2.0
    }

    /// Top-left corner of a centered ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.field_w / 2.0 - self.ball_size / 2.0,
            self.field_h / 2.0 - self.ball_size / 2.0,
        )
    }
}
