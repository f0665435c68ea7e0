//! Simulation and configuration error types.
//!
//! The simulation is pure in-memory arithmetic, so every error here is a
//! caller mistake surfaced immediately. Nothing is retried.

use std::fmt;

/// Top-level error enum for Bubble Pop.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A tick input was malformed (negative or non-finite time, non-finite click).
    InvalidArgument {
        /// Name of the offending input.
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// An operation was called in a state that does not allow it.
    ///
    /// Ticking a terminal session is *not* this error; that is a documented no-op.
    PreconditionViolated {
        /// Human-readable description of where the violation occurred.
        context: &'static str,
    },

    /// A configuration value is outside its valid range.
    InvalidConfig {
        /// Name of the setting (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument { name, value } => {
                write!(f, "invalid tick input '{}' = {}", name, value)
            }
            SimError::PreconditionViolated { context } => {
                write!(f, "precondition violated during '{}'", context)
            }
            SimError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config '{}' = {} is outside valid range {}",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

/// Returns an error unless `value` is finite and non-negative.
pub fn require_non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidArgument { name, value })
    }
}

/// Returns an error unless `value` is finite.
pub fn require_finite(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidArgument { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("dt", 0.0).is_ok());
        assert!(require_non_negative("dt", 0.016).is_ok());
        assert_eq!(
            require_non_negative("dt", -0.1),
            Err(SimError::InvalidArgument {
                name: "dt",
                value: -0.1
            })
        );
        assert!(require_non_negative("dt", f32::NAN).is_err());
        assert!(require_non_negative("dt", f32::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = SimError::InvalidConfig {
            name: "lives",
            value: 0.0,
            expected: "[1, ∞)",
        };
        assert_eq!(
            err.to_string(),
            "config 'lives' = 0 is outside valid range [1, ∞)"
        );
    }
}
