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

use crate::geometry::{Point, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment travelled from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Direction of travel. A degenerate line whose endpoints coincide
    /// reports a heading of zero.
    pub fn heading(&self) -> f64 {
        let delta = self.end - self.start;
        delta[1].atan2(delta[0])
    }

    /// Pose of a vehicle that has travelled `arclength` along the line. The
    /// arclength is clamped to the extent of the line.
    pub fn pose_at(&self, arclength: f64) -> Position {
        let length = self.length();
        let p = if length > 0.0 {
            self.start + (self.end - self.start) * (arclength.clamp(0.0, length) / length)
        } else {
            self.start
        };

        Position::new(p.coords, self.heading())
    }

    pub fn start_pose(&self) -> Position {
        Position::new(self.start.coords, self.heading())
    }

    pub fn end_pose(&self) -> Position {
        Position::new(self.end.coords, self.heading())
    }
}
