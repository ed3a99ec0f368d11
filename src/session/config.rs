use crate::session::constants::{COUNTDOWN_WIDTH, THINK_SECONDS};
use crate::solver::SolverConfig;
use crate::tiles::DrawConfig;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of the countdown shown while the player thinks
    pub think_seconds: u64,
    /// Number of characters in the countdown bar
    pub countdown_width: usize,
    pub draw: DrawConfig,
    pub solver: SolverConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_seconds: THINK_SECONDS,
            countdown_width: COUNTDOWN_WIDTH,
            draw: DrawConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}
