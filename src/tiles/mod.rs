//! Tile pool and random draws

pub mod constants;
mod draw;
mod errors;
mod pool;

pub use draw::{Draw, DrawConfig};
pub use errors::DrawError;
pub use pool::TilePool;
