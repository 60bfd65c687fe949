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

use crate::geometry::{point_of, Point, Position, RotationSense, Vector};

/// A circle of the turning radius that a vehicle would trace if it turned
/// fully in one direction from some pose. The radius itself is owned by the
/// solver, so only the center and the sense of travel are kept here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCircle {
    pub center: Point,
    pub rotation: RotationSense,
}

impl TangentCircle {
    pub fn new(center: Point, rotation: RotationSense) -> Self {
        Self { center, rotation }
    }

    /// The circle that a vehicle at `pose` would follow when turning with the
    /// given sense. Its center lies `turning_radius` away from the pose,
    /// perpendicular to the heading: to the left for counter-clockwise and to
    /// the right for clockwise.
    pub fn from_pose(pose: &Position, turning_radius: f64, rotation: RotationSense) -> Self {
        let angle = pose.rotation.angle() + rotation.heading_offset();
        let offset = turning_radius * Vector::new(angle.cos(), angle.sin());
        Self::new(point_of(pose) + offset, rotation)
    }

    /// Vector from the center of this circle to the given point.
    pub fn radial(&self, p: &Point) -> Vector {
        *p - self.center
    }
}

/// The pair of circles tangent to a single pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCircles {
    pub counter_clockwise: TangentCircle,
    pub clockwise: TangentCircle,
}

impl TangentCircles {
    pub fn for_pose(pose: &Position, turning_radius: f64) -> Self {
        Self {
            counter_clockwise: TangentCircle::from_pose(
                pose,
                turning_radius,
                RotationSense::CounterClockwise,
            ),
            clockwise: TangentCircle::from_pose(pose, turning_radius, RotationSense::Clockwise),
        }
    }

    pub fn get(&self, rotation: RotationSense) -> &TangentCircle {
        match rotation {
            RotationSense::Clockwise => &self.clockwise,
            RotationSense::CounterClockwise => &self.counter_clockwise,
        }
    }
}
