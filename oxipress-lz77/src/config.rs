//! LZ77 configuration.

use oxipress_core::error::{OxipressError, Result};

/// Largest window the 16-bit distance field can address.
pub const MAX_WINDOW_SIZE: usize = u16::MAX as usize;

/// Longest match the 8-bit length field can carry.
pub const MAX_LOOKAHEAD_SIZE: usize = u8::MAX as usize;

/// Shortest match worth a back-reference record.
pub const MIN_MATCH: usize = 3;

/// LZ77 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// History length searched for matches.
    pub window_size: usize,
    /// Maximum match length attempted.
    pub lookahead_size: usize,
}

impl Lz77Config {
    /// Reference configuration: 4 KiB window, 16-byte lookahead.
    pub const DEFAULT: Self = Self {
        window_size: 4096,
        lookahead_size: 16,
    };

    /// Create a validated configuration.
    ///
    /// - `window_size` must be in `1..=65535`
    /// - `lookahead_size` must be in `1..=255`
    pub fn new(window_size: usize, lookahead_size: usize) -> Result<Self> {
        let config = Self {
            window_size,
            lookahead_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both sizes fit the record format.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(OxipressError::invalid_config(format!(
                "window size {} must be between 1 and {}",
                self.window_size, MAX_WINDOW_SIZE
            )));
        }
        if self.lookahead_size == 0 || self.lookahead_size > MAX_LOOKAHEAD_SIZE {
            return Err(OxipressError::invalid_config(format!(
                "lookahead size {} must be between 1 and {}",
                self.lookahead_size, MAX_LOOKAHEAD_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
