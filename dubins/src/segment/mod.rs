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

pub mod arc;
pub use arc::Arc;

pub mod line;
pub use line::Line;

use crate::{
    error::{require_positive, DubinsError},
    geometry::{Position, DEFAULT_DISTANCE_TOLERANCE},
    sample::Samples,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One piece of a Dubins path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathSegment {
    Arc(Arc),
    Line(Line),
}

impl PathSegment {
    /// Distance travelled along the segment: the arclength of an arc or the
    /// euclidean length of a line.
    pub fn length(&self) -> f64 {
        match self {
            Self::Arc(arc) => arc.length(),
            Self::Line(line) => line.length(),
        }
    }

    pub fn pose_at(&self, arclength: f64) -> Position {
        match self {
            Self::Arc(arc) => arc.pose_at(arclength),
            Self::Line(line) => line.pose_at(arclength),
        }
    }

    pub fn start_pose(&self) -> Position {
        match self {
            Self::Arc(arc) => arc.start_pose(),
            Self::Line(line) => line.start_pose(),
        }
    }

    pub fn end_pose(&self) -> Position {
        match self {
            Self::Arc(arc) => arc.end_pose(),
            Self::Line(line) => line.end_pose(),
        }
    }

    /// Evenly spaced poses along this segment, `interval` apart in arclength,
    /// finishing with the end pose of the segment. Positions within
    /// [`DEFAULT_DISTANCE_TOLERANCE`] of the end are covered by the end pose.
    pub fn sample(&self, interval: f64) -> Result<Samples<'_>, DubinsError> {
        let interval = require_positive(interval, DubinsError::InvalidInterval)?;
        Ok(Samples::new(
            std::slice::from_ref(self),
            interval,
            DEFAULT_DISTANCE_TOLERANCE,
        ))
    }

    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Arc(_) => None,
            Self::Line(line) => Some(line),
        }
    }
}

impl From<Arc> for PathSegment {
    fn from(value: Arc) -> Self {
        Self::Arc(value)
    }
}

impl From<Line> for PathSegment {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, RotationSense};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn test_line_samples() {
        let segment: PathSegment = Line::new(Point::origin(), Point::new(1.0, 0.0)).into();
        let xs: Vec<f64> = segment
            .sample(0.3)
            .unwrap()
            .map(|p| p.translation.vector[0])
            .collect();
        assert_eq!(xs.len(), 5);
        for (x, expected) in xs.iter().zip([0.0, 0.3, 0.6, 0.9, 1.0]) {
            assert_relative_eq!(*x, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arc_samples_follow_rotation() {
        let segment: PathSegment =
            Arc::new(Point::origin(), 0.0, PI, RotationSense::Clockwise, 2.0).into();
        assert_relative_eq!(segment.length(), 2.0 * PI);

        let samples: Vec<Position> = segment.sample(PI / 2.0).unwrap().collect();
        assert_eq!(samples.len(), 5);
        // Clockwise from +x passes through -y.
        assert_abs_diff_eq!(samples[1].translation.vector[0], 2.0 * (-PI / 4.0).cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(samples[2].translation.vector[1], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(samples[4].translation.vector[0], -2.0, epsilon = 1e-12);
        for pair in samples.windows(2) {
            let d = (pair[1].translation.vector - pair[0].translation.vector).norm();
            assert_relative_eq!(d, 4.0 * (PI / 8.0).sin(), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_zero_length_segment_yields_its_end() {
        let segment: PathSegment = Line::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0)).into();
        let samples: Vec<Position> = segment.sample(0.1).unwrap().collect();
        assert_eq!(samples, vec![segment.end_pose()]);
    }

    #[test]
    fn test_invalid_interval() {
        let segment: PathSegment = Line::new(Point::origin(), Point::new(1.0, 0.0)).into();
        assert_eq!(segment.sample(0.0).err(), Some(DubinsError::InvalidInterval(0.0)));
        assert!(segment.sample(-1.0).is_err());
        assert!(segment.sample(f64::NAN).is_err());
    }

    #[test]
    fn test_accessors() {
        let arc: PathSegment = Arc::new(Point::origin(), 0.0, 1.0, RotationSense::Clockwise, 1.0).into();
        assert!(arc.as_arc().is_some());
        assert!(arc.as_line().is_none());
        let line: PathSegment = Line::new(Point::origin(), Point::new(0.0, 2.0)).into();
        assert_relative_eq!(line.as_line().unwrap().length(), 2.0);
        assert_relative_eq!(line.end_pose().translation.vector[1], 2.0);
    }
}
