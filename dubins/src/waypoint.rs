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

use crate::geometry::{Position, Vector};
use time_point::TimePoint;

/// A pose that the vehicle passes through at a specific time.
#[derive(Clone, Copy, PartialEq)]
pub struct WaypointSE2 {
    pub time: TimePoint,
    pub position: Position,
}

impl WaypointSE2 {
    pub fn new(time: TimePoint, x: f64, y: f64, yaw: f64) -> Self {
        return WaypointSE2 {
            time,
            position: Position::new(Vector::new(x, y), yaw),
        };
    }

    pub fn new_f64(time: f64, x: f64, y: f64, yaw: f64) -> Self {
        return WaypointSE2 {
            time: TimePoint::from_secs_f64(time),
            position: Position::new(Vector::new(x, y), yaw),
        };
    }
}

impl std::fmt::Debug for WaypointSE2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f
            .debug_struct("WaypointSE2")
            .field("time", &self.time.as_secs_f64())
            .field("position", &self.position)
            .finish()
    }
}
