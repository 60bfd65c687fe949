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

use crate::{
    error::{require_positive, DubinsError},
    geometry::{Point, Position, RotationSense, DEFAULT_DISTANCE_TOLERANCE},
    sample::Samples,
    segment::PathSegment,
    waypoint::WaypointSE2,
};
use arrayvec::ArrayVec;
use time_point::{Duration, TimePoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two shapes that a Dubins path can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathFamily {
    /// Curve, straight, curve
    CSC,
    /// Curve, curve, curve
    CCC,
}

/// The six Dubins path types. L is a counter-clockwise (left) turn, R is a
/// clockwise (right) turn, and S is a straight line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathType {
    LSL,
    LSR,
    RSL,
    RSR,
    LRL,
    RLR,
}

impl PathType {
    /// Every path type in the order that candidates are evaluated. When two
    /// candidates have exactly the same length, the earlier one is chosen, so
    /// CSC paths beat CCC paths and RLR beats LRL.
    pub const ALL: [PathType; 6] = [
        PathType::LSL,
        PathType::LSR,
        PathType::RSL,
        PathType::RSR,
        PathType::RLR,
        PathType::LRL,
    ];

    pub fn family(self) -> PathFamily {
        match self {
            Self::LSL | Self::LSR | Self::RSL | Self::RSR => PathFamily::CSC,
            Self::LRL | Self::RLR => PathFamily::CCC,
        }
    }

    pub fn is_csc(self) -> bool {
        self.family() == PathFamily::CSC
    }

    pub fn is_ccc(self) -> bool {
        self.family() == PathFamily::CCC
    }

    /// Sense of the circle tangent to the start pose.
    pub fn start_sense(self) -> RotationSense {
        match self {
            Self::LSL | Self::LSR | Self::LRL => RotationSense::CounterClockwise,
            Self::RSL | Self::RSR | Self::RLR => RotationSense::Clockwise,
        }
    }

    /// Sense of the circle tangent to the goal pose.
    pub fn goal_sense(self) -> RotationSense {
        match self {
            Self::LSL | Self::RSL | Self::LRL => RotationSense::CounterClockwise,
            Self::LSR | Self::RSR | Self::RLR => RotationSense::Clockwise,
        }
    }
}

/// The result of a Dubins query.
///
/// A feasible path has exactly three segments and a length equal to the sum
/// of their lengths. When no candidate is feasible the path is empty and its
/// length is infinite; this is a normal outcome rather than an error.
///
/// The path remembers the distance tolerance of the solver that produced it
/// and uses it when sampling and looking up poses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DubinsPath {
    segments: ArrayVec<PathSegment, 3>,
    path_type: Option<PathType>,
    length: f64,
    distance_tolerance: f64,
}

impl DubinsPath {
    pub(crate) fn new(
        path_type: PathType,
        segments: [PathSegment; 3],
        distance_tolerance: f64,
    ) -> Self {
        let length = segments.iter().map(PathSegment::length).sum();
        Self {
            segments: ArrayVec::from(segments),
            path_type: Some(path_type),
            length,
            distance_tolerance,
        }
    }

    /// A path that signals that no solution exists.
    pub fn empty() -> Self {
        Self {
            segments: ArrayVec::new(),
            path_type: None,
            length: f64::INFINITY,
            distance_tolerance: DEFAULT_DISTANCE_TOLERANCE,
        }
    }

    pub fn is_feasible(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total length of the path, or infinity if the path is empty.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn path_type(&self) -> Option<PathType> {
        self.path_type
    }

    /// Lengths up to this size are treated as zero.
    pub fn distance_tolerance(&self) -> f64 {
        self.distance_tolerance
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> ArrayVec<PathSegment, 3> {
        self.segments
    }

    pub fn start(&self) -> Option<Position> {
        self.segments.first().map(PathSegment::start_pose)
    }

    pub fn finish(&self) -> Option<Position> {
        self.segments.last().map(PathSegment::end_pose)
    }

    /// Pose after travelling `arclength` along the path, clamped to the
    /// extent of the path. Returns None for an empty path.
    pub fn pose_at(&self, arclength: f64) -> Option<Position> {
        let last = self.segments.last()?;
        let mut remaining = arclength.max(0.0);
        for segment in &self.segments {
            let length = segment.length();
            // Degenerate segments carry no reliable heading of their own
            if length > self.distance_tolerance && remaining <= length {
                return Some(segment.pose_at(remaining));
            }
            remaining -= length;
        }

        Some(last.end_pose())
    }

    /// Lazily sample poses along the path, `interval` apart in arclength
    /// within each segment, ending with the final pose of the path. Positions
    /// within [`Self::distance_tolerance`] of a segment's end are not sampled
    /// separately. An empty path produces no samples.
    pub fn sample(&self, interval: f64) -> Result<Samples<'_>, DubinsError> {
        let interval = require_positive(interval, DubinsError::InvalidInterval)?;
        Ok(Samples::new(&self.segments, interval, self.distance_tolerance))
    }

    /// Same as [`Self::sample`] but without the headings.
    pub fn points(
        &self,
        interval: f64,
    ) -> Result<impl Iterator<Item = Point> + Clone + '_, DubinsError> {
        Ok(self
            .sample(interval)?
            .map(|p| Point::from(p.translation.vector)))
    }

    /// Timed waypoints for a vehicle that begins the path at `start_time` and
    /// travels along it at a constant `speed`.
    pub fn waypoints(
        &self,
        start_time: TimePoint,
        speed: f64,
        interval: f64,
    ) -> Result<Vec<WaypointSE2>, DubinsError> {
        let speed = require_positive(speed, DubinsError::InvalidSpeed)?;
        Ok(self
            .sample(interval)?
            .with_arclength()
            .map(|(s, position)| WaypointSE2 {
                time: start_time + Duration::from_secs_f64(s / speed),
                position,
            })
            .collect())
    }
}

impl Default for DubinsPath {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Arc, Line};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Quarter turn left, two units straight, quarter turn right.
    fn zigzag() -> DubinsPath {
        DubinsPath::new(
            PathType::LSR,
            [
                Arc::new(Point::new(0.0, 1.0), -FRAC_PI_2, 0.0, RotationSense::CounterClockwise, 1.0).into(),
                Line::new(Point::new(1.0, 1.0), Point::new(1.0, 3.0)).into(),
                Arc::new(Point::new(2.0, 3.0), PI, FRAC_PI_2, RotationSense::Clockwise, 1.0).into(),
            ],
            DEFAULT_DISTANCE_TOLERANCE,
        )
    }

    #[test]
    fn test_path_type_table() {
        for path_type in PathType::ALL {
            assert_ne!(path_type.is_csc(), path_type.is_ccc());
        }
        assert_eq!(PathType::ALL.iter().filter(|t| t.is_csc()).count(), 4);
        assert_eq!(PathType::LSR.start_sense(), RotationSense::CounterClockwise);
        assert_eq!(PathType::LSR.goal_sense(), RotationSense::Clockwise);
        assert_eq!(PathType::RLR.start_sense(), RotationSense::Clockwise);
        assert_eq!(PathType::RLR.goal_sense(), RotationSense::Clockwise);
        assert_eq!(PathType::LRL.family(), PathFamily::CCC);
    }

    #[test]
    fn test_length_is_sum_of_segments() {
        let path = zigzag();
        assert!(path.is_feasible());
        assert_eq!(path.segments().len(), 3);
        assert_relative_eq!(path.length(), PI + 2.0, max_relative = 1e-12);
        let sum: f64 = path.segments().iter().map(|s| s.length()).sum();
        assert_eq!(path.length(), sum);
    }

    #[test]
    fn test_endpoints_and_pose_at() {
        let path = zigzag();
        let start = path.start().unwrap();
        assert_abs_diff_eq!(start.translation.vector.norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.rotation.angle(), 0.0, epsilon = 1e-12);

        let finish = path.finish().unwrap();
        assert_relative_eq!(finish.translation.vector[0], 2.0, max_relative = 1e-12);
        assert_relative_eq!(finish.translation.vector[1], 4.0, max_relative = 1e-12);
        assert_abs_diff_eq!(finish.rotation.angle(), 0.0, epsilon = 1e-12);

        let on_line = path.pose_at(FRAC_PI_2 + 1.0).unwrap();
        assert_relative_eq!(on_line.translation.vector[0], 1.0, max_relative = 1e-12);
        assert_relative_eq!(on_line.translation.vector[1], 2.0, max_relative = 1e-12);
        assert_relative_eq!(on_line.rotation.angle(), FRAC_PI_2, max_relative = 1e-12);

        assert_eq!(path.pose_at(-1.0), path.pose_at(0.0));
        assert_eq!(path.pose_at(1e3), path.finish());
    }

    #[test]
    fn test_sample_points() {
        let path = zigzag();
        let points: Vec<Point> = path.points(0.5).unwrap().collect();
        // Each quarter arc has length PI/2: samples at 0, 0.5, 1.0, 1.5.
        // The line has length 2: samples at 0, 0.5, 1.0, 1.5. Then the end.
        assert_eq!(points.len(), 13);
        for pair in points.windows(2) {
            assert!((pair[1] - pair[0]).norm() <= 0.5 + 1e-9);
        }
        assert_abs_diff_eq!(points[0].coords.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[12].x, 2.0, max_relative = 1e-12);
        assert_relative_eq!(points[12].y, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_waypoints_are_timed_by_arclength() {
        let path = zigzag();
        let t0 = TimePoint::from_secs_f64(10.0);
        let waypoints = path.waypoints(t0, 2.0, 0.5).unwrap();
        assert_eq!(waypoints.len(), 13);
        assert_eq!(waypoints[0].time, t0);
        assert_relative_eq!(
            waypoints.last().unwrap().time.as_secs_f64(),
            10.0 + (PI + 2.0) / 2.0,
            max_relative = 1e-6
        );
        for pair in waypoints.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }

        assert_eq!(
            path.waypoints(t0, 0.0, 0.5).err(),
            Some(DubinsError::InvalidSpeed(0.0))
        );
    }

    #[test]
    fn test_empty_path() {
        let path = DubinsPath::default();
        assert!(path.is_empty());
        assert!(!path.is_feasible());
        assert_eq!(path.length(), f64::INFINITY);
        assert_eq!(path.path_type(), None);
        assert_eq!(path.start(), None);
        assert_eq!(path.pose_at(0.0), None);
        assert_eq!(path.sample(0.1).unwrap().count(), 0);
        assert!(path.waypoints(TimePoint::zero(), 1.0, 0.1).unwrap().is_empty());
        assert_eq!(path.sample(-0.1).err(), Some(DubinsError::InvalidInterval(-0.1)));
    }
}
