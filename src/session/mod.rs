//! Game rounds: draw, concurrent search and countdown, reveal

pub mod constants;
mod config;
mod console;
mod errors;
mod round;
mod terminal;

pub use config::SessionConfig;
pub use console::Console;
pub use errors::SessionError;
pub use round::{GameOutcome, Session};
pub use terminal::TerminalConsole;
