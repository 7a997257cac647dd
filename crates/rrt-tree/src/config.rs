//! Growth parameters.

use crate::ConfigError;

/// Default radius of the sphere targets are sampled from.
pub const DEFAULT_RADIUS: f32 = 200.0;

/// Default maximum edge length per growth step.
pub const DEFAULT_THRESHOLD: f32 = 3.0;

/// Parameters of an [`RrtEngine`](crate::RrtEngine).
///
/// Both values must be positive and finite. Use [`RrtConfig::new`] or call
/// [`validate`](RrtConfig::validate) after the builder setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RrtConfig {
    /// Sampling sphere radius `R`.
    pub radius: f32,
    /// Step threshold `T`.
    pub threshold: f32,
}

impl Default for RrtConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RrtConfig {
    /// Creates a validated configuration.
    pub fn new(radius: f32, threshold: f32) -> Result<Self, ConfigError> {
        Self { radius, threshold }.validate()
    }

    /// Sets the sampling radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the step threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configuration unchanged if both parameters are usable.
    ///
    /// The radius must also be small enough that squared distances across
    /// the sampling sphere, up to `(2R)²`, stay finite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let diameter = 2.0 * self.radius;
        if !(self.radius > 0.0 && (diameter * diameter).is_finite()) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = RrtConfig::default();
        assert_eq!(config.radius, 200.0);
        assert_eq!(config.threshold, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            RrtConfig::new(0.0, 3.0),
            Err(ConfigError::InvalidRadius(0.0))
        );
        assert_eq!(
            RrtConfig::new(-5.0, 3.0),
            Err(ConfigError::InvalidRadius(-5.0))
        );
    }

    #[test]
    fn rejects_non_positive_threshold() {
        assert_eq!(
            RrtConfig::new(200.0, 0.0),
            Err(ConfigError::InvalidThreshold(0.0))
        );
        assert_eq!(
            RrtConfig::new(200.0, -1.0),
            Err(ConfigError::InvalidThreshold(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(RrtConfig::new(f32::NAN, 3.0).is_err());
        assert!(RrtConfig::new(f32::INFINITY, 3.0).is_err());
        assert!(RrtConfig::new(200.0, f32::NAN).is_err());
    }

    #[test]
    fn rejects_radius_whose_square_overflows() {
        assert_eq!(
            RrtConfig::new(1e20, 3.0),
            Err(ConfigError::InvalidRadius(1e20))
        );
        assert!(RrtConfig::new(1e18, 3.0).is_ok());
    }

    #[test]
    fn builder_then_validate() {
        let config = RrtConfig::default()
            .with_radius(50.0)
            .with_threshold(1.5)
            .validate()
            .unwrap();
        assert_eq!(config.radius, 50.0);
        assert_eq!(config.threshold, 1.5);

        assert!(RrtConfig::default().with_threshold(0.0).validate().is_err());
    }
}
