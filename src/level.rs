// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tower height generation.
//!
//! Heights follow a geometric distribution with p = 0.5, truncated at the
//! configured maximum. One 64-bit draw supplies all the coin flips a single
//! height needs: the height is one plus the number of trailing one bits.

use rand_core::OsRng;
use rand_core::RngCore;

/// Hard cap on tower height. 32 levels is plenty for 2^32 elements at p = 0.5.
pub const MAX_LEVEL: usize = 32;

/// Construction parameters for a [`SkipSet`](crate::SkipSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Tallest tower any node may get. Clamped to `1..=MAX_LEVEL`.
    pub max_level: u8,
    /// Seed for the height generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            max_level: MAX_LEVEL as u8,
            seed: None,
        };
    }
}

impl Config {
    /// Same as the default config, but with a fixed seed.
    pub fn seeded(seed: u64) -> Config {
        return Config {
            seed: Some(seed),
            ..Config::default()
        };
    }

    pub(crate) fn max_level(&self) -> usize {
        return (self.max_level as usize).clamp(1, MAX_LEVEL);
    }
}

/// Xorshift64 generator used to draw tower heights.
///
/// Not cryptographic; it only has to be cheap and roughly uniform.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    state: u64,
    max_level: usize,
}

impl LevelGenerator {
    pub fn new(config: &Config) -> LevelGenerator {
        let seed = match config.seed {
            Some(seed) => seed,
            None => OsRng.next_u64(),
        };
        return LevelGenerator {
            // xorshift gets stuck at zero
            state: seed | 1,
            max_level: config.max_level(),
        };
    }

    pub fn max_level(&self) -> usize {
        return self.max_level;
    }

    /// Draw a tower height in `1..=max_level`.
    pub fn random_level(&mut self) -> usize {
        let flips = self.next_u64();
        let height = 1 + flips.trailing_ones() as usize;
        return height.min(self.max_level);
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        return self.state;
    }
}
