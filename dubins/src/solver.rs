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
    geometry::{
        is_finite_pose, point_of, Position, Rotation, RotationSense, Vector,
        DEFAULT_DISTANCE_TOLERANCE,
    },
    path::{DubinsPath, PathFamily, PathType},
    segment::{Arc, Line, PathSegment},
    tangent_circle::{TangentCircle, TangentCircles},
    util::Minimum,
};
use arrayvec::ArrayVec;
use float_ord::FloatOrd;
use log::{debug, trace, warn};
use std::f64::consts::{FRAC_PI_2, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Finds the shortest path between two poses for a vehicle that can only
/// drive forward and cannot turn tighter than `turning_radius`.
///
/// This holds only configuration. Every query is an independent pure
/// calculation, so a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DubinsCurve {
    /// Radius of the tightest turn the vehicle can make
    turning_radius: f64,

    /// Circle centers closer than this are considered to be coincident.
    distance_tolerance: f64,
}

impl DubinsCurve {
    /// Make a new solver. The turning radius must be finite and greater than
    /// zero.
    pub fn new(turning_radius: f64) -> Result<Self, DubinsError> {
        Ok(Self {
            turning_radius: require_positive(turning_radius, DubinsError::InvalidTurningRadius)?,
            distance_tolerance: DEFAULT_DISTANCE_TOLERANCE,
        })
    }

    pub fn set_turning_radius(&mut self, value: f64) -> Result<(), DubinsError> {
        self.turning_radius = require_positive(value, DubinsError::InvalidTurningRadius)?;
        Ok(())
    }

    pub fn set_distance_tolerance(&mut self, value: f64) -> Result<(), DubinsError> {
        self.distance_tolerance = require_positive(value, DubinsError::InvalidTolerance)?;
        Ok(())
    }

    pub fn with_distance_tolerance(mut self, value: f64) -> Result<Self, DubinsError> {
        self.set_distance_tolerance(value)?;
        Ok(self)
    }

    pub fn turning_radius(&self) -> f64 {
        self.turning_radius
    }

    pub fn distance_tolerance(&self) -> f64 {
        self.distance_tolerance
    }

    /// Compute the shortest path from `start` to `goal`.
    ///
    /// All six path types are evaluated in the order of [`PathType::ALL`] and
    /// the first one with the strictly smallest length is kept, so a CSC path
    /// wins any exact tie with a CCC path and RLR wins an exact tie with LRL.
    /// If no path type is feasible, the returned path is empty and has an
    /// infinite length.
    pub fn compute(&self, start: &Position, goal: &Position) -> Result<DubinsPath, DubinsError> {
        let mut shortest = Minimum::new(|a: &DubinsPath, b: &DubinsPath| {
            FloatOrd(a.length()).cmp(&FloatOrd(b.length()))
        });

        for candidate in self.candidates(start, goal)? {
            shortest.consider_take(candidate);
        }

        let path = shortest.result().unwrap_or_default();
        match path.path_type() {
            Some(path_type) => debug!("shortest path is {path_type:?} with length {}", path.length()),
            None => debug!("no feasible path from {start:?} to {goal:?}"),
        }
        Ok(path)
    }

    /// Every feasible candidate path from `start` to `goal`, in the order of
    /// [`PathType::ALL`].
    pub fn candidates(
        &self,
        start: &Position,
        goal: &Position,
    ) -> Result<ArrayVec<DubinsPath, 6>, DubinsError> {
        self.validate(start, goal)?;
        let start_circles = TangentCircles::for_pose(start, self.turning_radius);
        let goal_circles = TangentCircles::for_pose(goal, self.turning_radius);

        Ok(PathType::ALL
            .into_iter()
            .filter_map(|path_type| {
                self.build(path_type, start, goal, &start_circles, &goal_circles)
            })
            .collect())
    }

    /// Compute the path of one specific type, if that type is feasible.
    pub fn compute_type(
        &self,
        path_type: PathType,
        start: &Position,
        goal: &Position,
    ) -> Result<Option<DubinsPath>, DubinsError> {
        self.validate(start, goal)?;
        let start_circles = TangentCircles::for_pose(start, self.turning_radius);
        let goal_circles = TangentCircles::for_pose(goal, self.turning_radius);
        Ok(self.build(path_type, start, goal, &start_circles, &goal_circles))
    }

    fn validate(&self, start: &Position, goal: &Position) -> Result<(), DubinsError> {
        if !is_finite_pose(start) || !is_finite_pose(goal) {
            return Err(DubinsError::NonFinitePose);
        }

        Ok(())
    }

    fn build(
        &self,
        path_type: PathType,
        start: &Position,
        goal: &Position,
        start_circles: &TangentCircles,
        goal_circles: &TangentCircles,
    ) -> Option<DubinsPath> {
        let start_circle = start_circles.get(path_type.start_sense());
        let goal_circle = goal_circles.get(path_type.goal_sense());
        let segments = match path_type.family() {
            PathFamily::CSC => self.csc_segments(start, goal, start_circle, goal_circle),
            PathFamily::CCC => self.ccc_segments(start, goal, start_circle, goal_circle),
        };

        match segments {
            Some(segments) => Some(DubinsPath::new(
                path_type,
                segments,
                self.distance_tolerance,
            )),
            None => {
                trace!("{path_type:?} is infeasible from {start:?} to {goal:?}");
                None
            }
        }
    }

    /// Arc, line, arc. The line lies on the tangent shared by both circles
    /// that is consistent with their senses of travel: an outer tangent when
    /// the senses match and an inner tangent when they differ.
    fn csc_segments(
        &self,
        start: &Position,
        goal: &Position,
        start_circle: &TangentCircle,
        goal_circle: &TangentCircle,
    ) -> Option<[PathSegment; 3]> {
        let r = self.turning_radius;
        let delta = goal_circle.center - start_circle.center;
        let mut distance = delta.norm();
        let direction = if distance < self.distance_tolerance {
            distance = self.distance_tolerance;
            Vector::x()
        } else {
            delta / distance
        };

        let same_sense = start_circle.rotation == goal_circle.rotation;
        if !same_sense && distance < 2.0 * r {
            // The circles overlap so no inner tangent exists.
            return None;
        }

        let (dtheta_start, dtheta_end) = if same_sense {
            let dtheta = match start_circle.rotation {
                RotationSense::Clockwise => FRAC_PI_2,
                RotationSense::CounterClockwise => -FRAC_PI_2,
            };
            (dtheta, dtheta)
        } else {
            let dtheta = (2.0 * r / distance).acos();
            let dtheta = match start_circle.rotation {
                RotationSense::Clockwise => dtheta,
                RotationSense::CounterClockwise => -dtheta,
            };
            (dtheta, PI + dtheta)
        };

        let tangent_start = Rotation::new(dtheta_start) * direction * r;
        let tangent_end = Rotation::new(dtheta_end) * direction * r;

        Some([
            Arc::between(
                start_circle.center,
                &start_circle.radial(&point_of(start)),
                &tangent_start,
                start_circle.rotation,
                r,
            )
            .into(),
            Line::new(
                start_circle.center + tangent_start,
                goal_circle.center + tangent_end,
            )
            .into(),
            Arc::between(
                goal_circle.center,
                &tangent_end,
                &goal_circle.radial(&point_of(goal)),
                goal_circle.rotation,
                r,
            )
            .into(),
        ])
    }

    /// Arc, arc, arc. The middle arc lies on a bridge circle of the same
    /// radius that touches both end circles and turns against them. The
    /// bridge is travelled in its own sense, which usually means sweeping
    /// more than half of it.
    fn ccc_segments(
        &self,
        start: &Position,
        goal: &Position,
        start_circle: &TangentCircle,
        goal_circle: &TangentCircle,
    ) -> Option<[PathSegment; 3]> {
        if start_circle.rotation != goal_circle.rotation {
            warn!(
                "a bridge circle cannot join a {:?} circle to a {:?} circle",
                start_circle.rotation, goal_circle.rotation,
            );
            return None;
        }

        let r = self.turning_radius;
        let delta = goal_circle.center - start_circle.center;
        let distance = delta.norm();
        if distance < self.distance_tolerance {
            return None;
        }

        if distance >= 4.0 * r {
            // Too far apart for a bridge circle to touch both.
            return None;
        }

        let direction = delta / distance;
        let dtheta = (distance / (4.0 * r)).acos();
        let dtheta_start = match start_circle.rotation {
            RotationSense::Clockwise => -dtheta,
            RotationSense::CounterClockwise => dtheta,
        };
        let dtheta_end = PI - dtheta_start;

        let tangent_start = Rotation::new(dtheta_start) * direction * r;
        let tangent_end = Rotation::new(dtheta_end) * direction * r;
        let contact_start = start_circle.center + tangent_start;
        let contact_end = goal_circle.center + tangent_end;
        let bridge = TangentCircle::new(
            start_circle.center + 2.0 * tangent_start,
            start_circle.rotation.opposite(),
        );

        Some([
            Arc::between(
                start_circle.center,
                &start_circle.radial(&point_of(start)),
                &tangent_start,
                start_circle.rotation,
                r,
            )
            .into(),
            Arc::between(
                bridge.center,
                &bridge.radial(&contact_start),
                &bridge.radial(&contact_end),
                bridge.rotation,
                r,
            )
            .into(),
            Arc::between(
                goal_circle.center,
                &tangent_end,
                &goal_circle.radial(&point_of(goal)),
                goal_circle.rotation,
                r,
            )
            .into(),
        ])
    }
}

/// Compute the shortest path from `start` to `goal` for the given turning
/// radius. See [`DubinsCurve::compute`].
pub fn solve(
    start: &Position,
    goal: &Position,
    turning_radius: f64,
) -> Result<DubinsPath, DubinsError> {
    DubinsCurve::new(turning_radius)?.compute(start, goal)
}
