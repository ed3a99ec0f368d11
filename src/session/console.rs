use std::io;

use crate::solver::Solution;
use crate::tiles::Draw;

/// Display and input side of a game.
///
/// The session only talks to the player through this trait, so rounds can be
/// played against a terminal or a scripted console alike.
pub trait Console {
    fn clear(&mut self) -> io::Result<()>;

    fn show_title(&mut self) -> io::Result<()>;

    /// Render the plates and the target before the search starts
    fn show_draw(&mut self, draw: &Draw) -> io::Result<()>;

    /// Block for `seconds` while drawing a bar `width` characters long
    fn countdown(&mut self, seconds: u64, width: usize) -> io::Result<()>;

    /// Wait for the player to press Enter. Returns `false` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<bool>;

    fn show_solution(&mut self, solution: &Solution) -> io::Result<()>;

    fn show_help(&mut self) -> io::Result<()>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;
}
