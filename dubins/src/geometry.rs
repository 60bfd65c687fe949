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

use std::f64::consts::{FRAC_PI_2, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A planar pose: translation plus heading.
pub type Position = nalgebra::geometry::Isometry2<f64>;
pub type Point = nalgebra::geometry::Point2<f64>;
pub type Vector = nalgebra::Vector2<f64>;
pub type Rotation = nalgebra::UnitComplex<f64>;

/// Two points closer than this are treated as coincident.
pub const DEFAULT_DISTANCE_TOLERANCE: f64 = 1e-5;

/// Sweeps within this many radians of a full turn are collapsed to zero.
/// Such sweeps only arise from rounding when an arc starts and ends on the
/// same radius vector.
pub(crate) const FULL_TURN_TOLERANCE: f64 = 1e-9;

/// Make a pose from its coordinates and heading (in radians).
pub fn pose(x: f64, y: f64, yaw: f64) -> Position {
    Position::new(Vector::new(x, y), yaw)
}

pub fn point_of(position: &Position) -> Point {
    Point::from(position.translation.vector)
}

/// Angle from the global +x axis to the vector, in (-PI, PI].
pub fn vector_angle(v: &Vector) -> f64 {
    v[1].atan2(v[0])
}

pub(crate) fn is_finite_pose(position: &Position) -> bool {
    position.translation.vector.iter().all(|v| v.is_finite())
        && position.rotation.re.is_finite()
        && position.rotation.im.is_finite()
}

/// The direction in which a circle or arc is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationSense {
    Clockwise,
    CounterClockwise,
}

impl RotationSense {
    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// +1.0 for counter-clockwise and -1.0 for clockwise, matching the sign
    /// of the angular velocity while travelling in this sense.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }

    /// Angle between the radius vector and the direction of travel.
    pub fn heading_offset(self) -> f64 {
        self.sign() * FRAC_PI_2
    }

    /// How far an arc must turn, travelling in this sense, to get from
    /// `from_angle` to `to_angle`. The result is in [0, 2*PI).
    ///
    /// The input angles do not need to be normalized.
    pub fn sweep(self, from_angle: f64, to_angle: f64) -> f64 {
        let sweep = match self {
            Self::Clockwise => from_angle - to_angle,
            Self::CounterClockwise => to_angle - from_angle,
        }
        .rem_euclid(TAU);

        if TAU - sweep < FULL_TURN_TOLERANCE {
            0.0
        } else {
            sweep
        }
    }
}
