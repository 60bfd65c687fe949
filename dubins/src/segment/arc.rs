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

use crate::geometry::{vector_angle, Point, Position, RotationSense, Vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circular arc. The start and end angles are measured from the global +x
/// axis to the radius vector and are kept exactly as given; the sweep
/// between them is always taken in the direction of `rotation`, even when
/// that is the long way around.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub start_angle: f64,
    pub end_angle: f64,
    pub rotation: RotationSense,
    pub radius: f64,
}

impl Arc {
    pub fn new(
        center: Point,
        start_angle: f64,
        end_angle: f64,
        rotation: RotationSense,
        radius: f64,
    ) -> Self {
        Self {
            center,
            start_angle,
            end_angle,
            rotation,
            radius,
        }
    }

    /// Make an arc that starts at the radius vector `from` and ends at the
    /// radius vector `to`.
    pub fn between(
        center: Point,
        from: &Vector,
        to: &Vector,
        rotation: RotationSense,
        radius: f64,
    ) -> Self {
        Self::new(center, vector_angle(from), vector_angle(to), rotation, radius)
    }

    /// Magnitude of the angle turned while travelling the arc, in [0, 2*PI).
    pub fn sweep(&self) -> f64 {
        self.rotation.sweep(self.start_angle, self.end_angle)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Pose of a vehicle that has travelled `arclength` along the arc. The
    /// arclength is clamped to the extent of the arc.
    pub fn pose_at(&self, arclength: f64) -> Position {
        let s = arclength.clamp(0.0, self.length());
        let angle = self.start_angle + self.rotation.sign() * s / self.radius;
        let p = self.center + self.radius * Vector::new(angle.cos(), angle.sin());
        Position::new(p.coords, angle + self.rotation.heading_offset())
    }

    pub fn start_pose(&self) -> Position {
        self.pose_at(0.0)
    }

    pub fn end_pose(&self) -> Position {
        let p = self.center
            + self.radius * Vector::new(self.end_angle.cos(), self.end_angle.sin());
        Position::new(p.coords, self.end_angle + self.rotation.heading_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_counter_clockwise_quarter() {
        let arc = Arc::new(Point::origin(), 0.0, FRAC_PI_2, RotationSense::CounterClockwise, 2.0);
        assert_relative_eq!(arc.sweep(), FRAC_PI_2);
        assert_relative_eq!(arc.length(), PI);

        let start = arc.start_pose();
        assert_abs_diff_eq!(start.translation.vector[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.translation.vector[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(start.rotation.angle(), FRAC_PI_2, max_relative = 1e-12);

        let end = arc.pose_at(arc.length());
        assert_abs_diff_eq!(end.translation.vector[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.translation.vector[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(end.rotation.angle().abs(), PI, max_relative = 1e-12);
    }

    #[test]
    fn test_clockwise_takes_the_long_way() {
        let arc = Arc::new(Point::origin(), 0.0, FRAC_PI_2, RotationSense::Clockwise, 1.0);
        assert_relative_eq!(arc.sweep(), 3.0 * FRAC_PI_2);
        assert_relative_eq!(arc.length(), 3.0 * FRAC_PI_2);

        // Two thirds of the way along, a clockwise arc from +x has reached -x
        // heading up.
        let mid = arc.pose_at(arc.length() / 3.0 * 2.0);
        assert_abs_diff_eq!(mid.translation.vector[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.translation.vector[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(mid.rotation.angle(), FRAC_PI_2, max_relative = 1e-12);
    }

    #[test]
    fn test_pose_at_clamps() {
        let arc = Arc::new(Point::new(1.0, 1.0), PI, 0.0, RotationSense::Clockwise, 1.0);
        assert_eq!(arc.pose_at(-1.0), arc.start_pose());
        let beyond = arc.pose_at(100.0);
        let end = arc.end_pose();
        assert_abs_diff_eq!(beyond.translation.vector[0], end.translation.vector[0], epsilon = 1e-12);
        assert_abs_diff_eq!(beyond.translation.vector[1], end.translation.vector[1], epsilon = 1e-12);
        assert_abs_diff_eq!((beyond.rotation / end.rotation).angle(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_between_radius_vectors() {
        let arc = Arc::between(
            Point::new(5.0, 5.0),
            &Vector::new(0.0, -3.0),
            &Vector::new(0.0, 3.0),
            RotationSense::CounterClockwise,
            3.0,
        );
        assert_relative_eq!(arc.start_angle, -FRAC_PI_2);
        assert_relative_eq!(arc.end_angle, FRAC_PI_2);
        assert_relative_eq!(arc.length(), 3.0 * PI);
    }

    #[test]
    fn test_zero_sweep() {
        let arc = Arc::new(Point::origin(), 1.0, 1.0, RotationSense::Clockwise, 4.0);
        assert_eq!(arc.length(), 0.0);
        assert_eq!(arc.pose_at(0.5), arc.start_pose());
    }
}
