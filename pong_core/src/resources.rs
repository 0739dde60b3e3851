/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_for_player(&mut self) {
        self.player += 1;
    }

    pub fn point_for_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Latest raw pointer/touch sample for the player paddle
///
/// Holds exactly what the input adapter delivered, in field coordinates
/// and unclamped; the step clamps at consumption time. Writes are
/// last-write-wins. `None` until the first sample arrives, in which
/// case the paddle holds position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerTarget(Option<f32>);

impl PlayerTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, y: f32) {
        self.0 = Some(y);
    }

    pub fn get(&self) -> Option<f32> {
        self.0
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_point_for_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.point_for_player();
        assert_eq!(score.player, 1);
        score.point_for_player();
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_score_point_for_opponent() {
        let mut score = Score::new();
        score.point_for_opponent();
        assert_eq!(score.opponent, 1);
        assert_eq!(score.player, 0);
    }

    #[test]
    fn test_player_target_starts_unset() {
        let target = PlayerTarget::new();
        assert_eq!(target.get(), None);
    }

    #[test]
    fn test_player_target_last_write_wins() {
        let mut target = PlayerTarget::new();
        target.set(120.0);
        target.set(-40.0);
        target.set(333.5);
        assert_eq!(target.get(), Some(333.5));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
