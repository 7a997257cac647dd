//! Configuration errors for the growth engine.

use std::fmt;

/// Rejected construction parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sampling radius was zero, negative, not finite, or too large to square.
    InvalidRadius(f32),
    /// Step threshold was zero, negative, or not finite.
    InvalidThreshold(f32),
    /// Growth ticker period was zero.
    InvalidPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(r) => {
                write!(f, "sampling radius must be positive and finite, got {r}")
            }
            ConfigError::InvalidThreshold(t) => {
                write!(f, "step threshold must be positive and finite, got {t}")
            }
            ConfigError::InvalidPeriod => write!(f, "growth period must be at least one frame"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_value() {
        let msg = ConfigError::InvalidRadius(-1.0).to_string();
        assert!(msg.contains("radius"));
        assert!(msg.contains("-1"));

        let msg = ConfigError::InvalidThreshold(0.0).to_string();
        assert!(msg.contains("threshold"));
    }
}
