//! Le Compte est Bon - reach a target number from six drawn tiles
//!
//! This library draws plates and a target from the standard tile pool, searches
//! every combination of the plates under `+`, `-`, `x` and exact `/`, and plays
//! interactive rounds where the search runs alongside the player's countdown.

pub mod expression;
pub mod session;
pub mod solver;
pub mod tiles;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Node};
pub use session::{Console, GameOutcome, Session, SessionConfig, SessionError, TerminalConsole};
pub use solver::{Solution, Solver, SolverConfig};
pub use tiles::{Draw, DrawConfig, DrawError, TilePool};

/// Find the value closest to `target` reachable from `plates`
///
/// This is a convenience function that runs a default solver. Any subset of the
/// plates may be used, each at most once.
///
/// # Examples
///
/// ```
/// use compte_est_bon::solve;
///
/// let solution = solve(&[25, 50, 75, 100, 3, 6], 952);
/// assert!(solution.is_exact());
/// println!("{}", solution.best().text());
/// ```
pub fn solve(plates: &[u32], target: u32) -> Solution {
    Solver::default().solve(plates, target)
}
