//! Frame-count pacing for growth inside a redraw loop.

use crate::ConfigError;

/// Frames between growth steps in the viewer.
pub const DEFAULT_PERIOD: u64 = 5;

/// Decides on which frames the tree grows.
///
/// The counter starts at 1 and is tested before it is incremented, so with a
/// period of 5 the first growth happens on the fifth tick.
#[derive(Debug, Clone)]
pub struct GrowthTicker {
    counter: u64,
    period: u64,
}

impl Default for GrowthTicker {
    fn default() -> Self {
        Self {
            counter: 1,
            period: DEFAULT_PERIOD,
        }
    }
}

impl GrowthTicker {
    /// Creates a ticker that fires once every `period` ticks.
    pub fn new(period: u64) -> Result<Self, ConfigError> {
        if period == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        Ok(Self { counter: 1, period })
    }

    /// Returns the configured period.
    #[inline]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Advances one frame. Returns `true` if this frame should grow the tree.
    pub fn tick(&mut self) -> bool {
        let due = self.counter % self.period == 0;
        self.counter = self.counter.wrapping_add(1);
        due
    }
}
