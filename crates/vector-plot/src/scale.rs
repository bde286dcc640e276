//! Character scale

use crate::LayoutConfig;

/// Scale input error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: f32, min: f32, max: f32 },
}

/// Inclusive range of accepted character heights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: 4.0,
            max: 10.0,
        }
    }
}

impl ScaleBounds {
    /// Validate a character height. Values are never clamped.
    pub fn check(&self, height: f32) -> Result<f32, ScaleError> {
        if height.is_finite() && height >= self.min && height <= self.max {
            Ok(height)
        } else {
            Err(ScaleError::OutOfRange {
                value: height,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Parse user input as a character height and turn it into a [ScaleFactor].
    pub fn parse(&self, input: &str, config: &LayoutConfig) -> Result<ScaleFactor, ScaleError> {
        let input = input.trim();
        let height = input
            .parse::<f32>()
            .map_err(|_| ScaleError::NotANumber(input.to_owned()))?;
        ScaleFactor::from_height(height, self, config)
    }
}

/// Multiplier applied to all font geometry for one document.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Scale so that one character cell is `height` device units wide.
    pub fn from_height(
        height: f32,
        bounds: &ScaleBounds,
        config: &LayoutConfig,
    ) -> Result<Self, ScaleError> {
        let height = bounds.check(height)?;
        Ok(Self(height / config.char_width))
    }

    /// Use `multiplier` as is, without any bounds check.
    pub fn from_multiplier(multiplier: f32) -> Self {
        Self(multiplier)
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = ScaleBounds::default();
        let config = LayoutConfig::default();

        assert_eq!(bounds.parse("4", &config).unwrap().get(), 4.0 / 18.0);
        assert_eq!(bounds.parse(" 10\n", &config).unwrap().get(), 10.0 / 18.0);
    }

    #[test]
    fn test_rejects_instead_of_clamping() {
        let bounds = ScaleBounds::default();
        let config = LayoutConfig::default();

        assert_eq!(
            bounds.parse("10.5", &config),
            Err(ScaleError::OutOfRange {
                value: 10.5,
                min: 4.0,
                max: 10.0
            })
        );
        assert!(matches!(
            bounds.parse("3.99", &config),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert_eq!(
            bounds.parse("big", &config),
            Err(ScaleError::NotANumber("big".into()))
        );
        assert!(matches!(
            bounds.parse("NaN", &config),
            Err(ScaleError::OutOfRange { .. })
        ));
    }
}
