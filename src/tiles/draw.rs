use log::{debug, warn};
use rand::Rng;

use crate::tiles::constants::{DRAW_SIZE, TARGET_MAX, TARGET_MIN};
use crate::tiles::errors::DrawError;
use crate::tiles::pool::TilePool;

/// Configuration for drawing plates and a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawConfig {
    pub draw_size: usize,
    pub target_min: u32,
    pub target_max: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            draw_size: DRAW_SIZE,
            target_min: TARGET_MIN,
            target_max: TARGET_MAX,
        }
    }
}

impl DrawConfig {
    /// # Errors
    ///
    /// Returns an error if the draw size is below 2 or larger than the pool,
    /// or if the target range is empty or starts at zero.
    pub fn validate(&self, pool: &TilePool) -> Result<(), DrawError> {
        if self.draw_size < 2 {
            warn!("Draw size {} is too small", self.draw_size);
            return Err(DrawError::DrawTooSmall(self.draw_size));
        }
        if self.draw_size > pool.len() {
            warn!(
                "Draw size {} exceeds pool size {}",
                self.draw_size,
                pool.len()
            );
            return Err(DrawError::DrawTooLarge {
                requested: self.draw_size,
                available: pool.len(),
            });
        }
        if self.target_min == 0 || self.target_min > self.target_max {
            warn!(
                "Invalid target range {}..={}",
                self.target_min, self.target_max
            );
            return Err(DrawError::InvalidTargetRange {
                min: self.target_min,
                max: self.target_max,
            });
        }
        Ok(())
    }
}

/// Plates shown to the player and the target to reach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    plates: Vec<u32>,
    target: u32,
}

impl Draw {
    pub fn new(plates: Vec<u32>, target: u32) -> Self {
        Self { plates, target }
    }

    /// Draw plates from a fresh standard pool, then pick the target
    /// independently.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate against the standard pool.
    pub fn random<R: Rng + ?Sized>(config: &DrawConfig, rng: &mut R) -> Result<Self, DrawError> {
        Self::random_from(&TilePool::standard(), config, rng)
    }

    /// # Errors
    ///
    /// Returns an error if `config` does not validate against `pool`.
    pub fn random_from<R: Rng + ?Sized>(
        pool: &TilePool,
        config: &DrawConfig,
        rng: &mut R,
    ) -> Result<Self, DrawError> {
        config.validate(pool)?;

        let plates = pool.sample(rng, config.draw_size)?;
        let target = rng.random_range(config.target_min..=config.target_max);
        debug!("Drew plates {:?} with target {}", plates, target);

        Ok(Self { plates, target })
    }

    pub fn plates(&self) -> &[u32] {
        &self.plates
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}
