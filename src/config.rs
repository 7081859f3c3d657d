//! Navigator configuration.

use crate::edge::EdgeConsume;

/// Default fraction of the focused cell's height scrolled on a down-edge
/// press before refocusing.
pub const SCROLL_STEP_RATIO: f32 = 0.8;

/// Default number of center-key auto-repeats that count as a long press.
pub const LONG_PRESS_REPEATS: u32 = 3;

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Scroll step ratio outside `(0.0, 1.0]`.
    #[error("scroll step ratio must be in (0.0, 1.0], got {0}")]
    ScrollRatio(f32),
    /// Long-press threshold of zero would fire on the initial press.
    #[error("long-press repeat threshold must be at least 1, got {0}")]
    PressThreshold(u32),
}

/// Tunables for a [`FocusNavigator`](crate::navigator::FocusNavigator) and
/// its driver.
#[derive(Debug, Clone, Copy)]
pub struct NavConfig {
    /// Edge-consumption policy.
    pub edge_consume: EdgeConsume,
    /// Fraction of a cell height scrolled per down-edge press.
    pub scroll_step_ratio: f32,
    /// Center-key auto-repeats counted as a long press.
    pub long_press_repeats: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            edge_consume: EdgeConsume::default(),
            scroll_step_ratio: SCROLL_STEP_RATIO,
            long_press_repeats: LONG_PRESS_REPEATS,
        }
    }
}

impl NavConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge-consumption policy.
    #[must_use]
    pub fn edge_consume(mut self, flags: EdgeConsume) -> Self {
        self.edge_consume = flags;
        self
    }

    /// Set the down-edge scroll step ratio.
    #[must_use]
    pub fn scroll_step_ratio(mut self, ratio: f32) -> Self {
        self.scroll_step_ratio = ratio;
        self
    }

    /// Set the long-press repeat threshold.
    #[must_use]
    pub fn long_press_repeats(mut self, repeats: u32) -> Self {
        self.long_press_repeats = repeats;
        self
    }

    /// Validate ranges, returning the config unchanged on success.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.scroll_step_ratio > 0.0 && self.scroll_step_ratio <= 1.0) {
            return Err(ConfigError::ScrollRatio(self.scroll_step_ratio));
        }
        if self.long_press_repeats == 0 {
            return Err(ConfigError::PressThreshold(self.long_press_repeats));
        }
        Ok(self)
    }
}
