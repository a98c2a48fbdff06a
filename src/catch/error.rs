use std::{error::Error as StdError, fmt};

/// `Result<_, DifficultyError>`
pub type DifficultyResult<T> = Result<T, DifficultyError>;

/// Invalid configuration of a difficulty calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DifficultyError {
    /// The clock rate must be positive and finite.
    InvalidClockRate(f64),
    /// The half catcher width must be positive and finite.
    InvalidHalfCatcherWidth(f32),
}

impl DifficultyError {
    pub(crate) fn check_clock_rate(clock_rate: f64) -> DifficultyResult<f64> {
        if clock_rate.is_finite() && clock_rate > 0.0 {
            Ok(clock_rate)
        } else {
            Err(Self::InvalidClockRate(clock_rate).logged())
        }
    }

    pub(crate) fn check_half_catcher_width(half_catcher_width: f32) -> DifficultyResult<f32> {
        if half_catcher_width.is_finite() && half_catcher_width > 0.0 {
            Ok(half_catcher_width)
        } else {
            Err(Self::InvalidHalfCatcherWidth(half_catcher_width).logged())
        }
    }

    #[cfg(feature = "tracing")]
    fn logged(self) -> Self {
        tracing::error!(error = %self, "rejected difficulty configuration");

        self
    }

    #[cfg(not(feature = "tracing"))]
    const fn logged(self) -> Self {
        self
    }
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClockRate(clock_rate) => {
                write!(f, "clock rate must be positive and finite, got {clock_rate}")
            }
            Self::InvalidHalfCatcherWidth(width) => {
                write!(f, "half catcher width must be positive and finite, got {width}")
            }
        }
    }
}

impl StdError for DifficultyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_clock_rate() {
        assert_eq!(DifficultyError::check_clock_rate(1.5), Ok(1.5));
        assert_eq!(
            DifficultyError::check_clock_rate(0.0),
            Err(DifficultyError::InvalidClockRate(0.0))
        );
        assert!(DifficultyError::check_clock_rate(-1.0).is_err());
        assert!(DifficultyError::check_clock_rate(f64::NAN).is_err());
    }

    #[test]
    fn rejects_invalid_half_catcher_width() {
        assert!(DifficultyError::check_half_catcher_width(f32::INFINITY).is_err());
        assert!(DifficultyError::check_half_catcher_width(0.0).is_err());
        assert_eq!(DifficultyError::check_half_catcher_width(20.0), Ok(20.0));
    }
}
