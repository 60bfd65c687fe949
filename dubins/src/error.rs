/*
 * Copyright (C) 2023 Open Source Robotics Foundation
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
*/

pub use thiserror::Error as ThisError;

/// Invalid inputs rejected at the API boundary. Geometric infeasibility is
/// never reported through this type; an infeasible query produces an empty
/// [`crate::DubinsPath`] instead.
#[derive(ThisError, Debug, Clone, Copy, PartialEq)]
pub enum DubinsError {
    #[error("provided with an invalid turning radius (must be finite and >0.0): {0}")]
    InvalidTurningRadius(f64),
    #[error("provided with an invalid distance tolerance (must be finite and >0.0): {0}")]
    InvalidTolerance(f64),
    #[error("provided with an invalid sampling interval (must be finite and >0.0): {0}")]
    InvalidInterval(f64),
    #[error("provided with an invalid speed (must be finite and >0.0): {0}")]
    InvalidSpeed(f64),
    #[error("a pose contains a non-finite coordinate or heading")]
    NonFinitePose,
}

/// Returns the value if it is finite and strictly positive, otherwise passes
/// the value to `err` to build the error.
pub(crate) fn require_positive(
    value: f64,
    err: impl FnOnce(f64) -> DubinsError,
) -> Result<f64, DubinsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(0.5, DubinsError::InvalidInterval), Ok(0.5));
        assert_eq!(
            require_positive(0.0, DubinsError::InvalidInterval),
            Err(DubinsError::InvalidInterval(0.0))
        );
        assert_eq!(
            require_positive(-2.0, DubinsError::InvalidSpeed),
            Err(DubinsError::InvalidSpeed(-2.0))
        );
        assert!(require_positive(f64::NAN, DubinsError::InvalidTurningRadius).is_err());
        assert!(require_positive(f64::INFINITY, DubinsError::InvalidTolerance).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = DubinsError::InvalidTurningRadius(-1.0);
        assert_eq!(
            err.to_string(),
            "provided with an invalid turning radius (must be finite and >0.0): -1"
        );
    }

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = DubinsError::NonFinitePose.into();
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), DubinsError::NonFinitePose.to_string());
    }
}
