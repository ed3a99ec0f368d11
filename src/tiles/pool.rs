use log::{debug, warn};
use rand::Rng;
use rand::seq::index;

use crate::tiles::constants::{LARGE_TILES, SMALL_TILE_COPIES, SMALL_TILES};
use crate::tiles::errors::DrawError;

/// The multiset of tiles a draw is taken from, stored as a flat array with
/// repeats so that sampling positions without replacement respects every
/// tile's multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<u32>,
}

impl TilePool {
    /// Two decades of small tiles followed by the four large tiles.
    pub fn standard() -> Self {
        let mut tiles =
            Vec::with_capacity(SMALL_TILES.len() * SMALL_TILE_COPIES + LARGE_TILES.len());
        for _ in 0..SMALL_TILE_COPIES {
            tiles.extend_from_slice(&SMALL_TILES);
        }
        tiles.extend_from_slice(&LARGE_TILES);
        Self { tiles }
    }

    /// # Errors
    ///
    /// Returns an error if the pool is empty or holds a zero tile.
    pub fn from_tiles(tiles: Vec<u32>) -> Result<Self, DrawError> {
        if tiles.is_empty() {
            warn!("Rejecting empty tile pool");
            return Err(DrawError::EmptyPool);
        }
        if tiles.contains(&0) {
            warn!("Rejecting tile pool with a zero tile: {:?}", tiles);
            return Err(DrawError::ZeroTile);
        }
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Pick `count` distinct positions uniformly at random and return their tiles
    /// in the order they were picked.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the number of tiles in the pool.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<u32>, DrawError> {
        if count > self.tiles.len() {
            return Err(DrawError::DrawTooLarge {
                requested: count,
                available: self.tiles.len(),
            });
        }

        let picked: Vec<u32> = index::sample(rng, self.tiles.len(), count)
            .into_iter()
            .filter_map(|i| self.tiles.get(i).copied())
            .collect();
        debug!("Sampled {:?} from a pool of {}", picked, self.tiles.len());
        Ok(picked)
    }
}

impl Default for TilePool {
    fn default() -> Self {
        Self::standard()
    }
}
