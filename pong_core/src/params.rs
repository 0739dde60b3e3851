/// Simulation tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (logical coordinate space; scaling to pixels is the presenter's job)
    pub const FIELD_W: f32 = 800.0;
    pub const FIELD_H: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_X: f32 = 20.0;
    pub const OPPONENT_X: f32 = Self::FIELD_W - 20.0 - Self::PADDLE_WIDTH;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const SERVE_SPEED_X: f32 = 5.0; // units per tick, direction chosen at random
    pub const SERVE_SPREAD_Y: f32 = 4.0; // serve vy drawn uniformly from +/- this
    pub const DEFLECT_SPEED_Y: f32 = 6.0; // vy at a full-edge paddle strike

    // Opponent controller
    pub const OPPONENT_SPEED: f32 = 5.0; // units per tick
    pub const OPPONENT_DEADZONE: f32 = 10.0; // hold while ball center is this close
}
