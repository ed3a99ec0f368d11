use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Tile pool cannot be empty")]
    EmptyPool,
    #[error("Tile pool cannot contain a zero tile")]
    ZeroTile,
    #[error("A draw needs at least 2 tiles, got {0}")]
    DrawTooSmall(usize),
    #[error("Cannot draw {requested} tiles from a pool of {available}")]
    DrawTooLarge { requested: usize, available: usize },
    #[error("Invalid target range: min={min}, max={max}")]
    InvalidTargetRange { min: u32, max: u32 },
}
