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

//! Shortest paths for a vehicle that only drives forward and has a minimum
//! turning radius (a Dubins vehicle).
//!
//! A path is made of three segments: either arc, line, arc (CSC) or three
//! arcs (CCC). [`DubinsCurve::compute`] evaluates all six path types between
//! two poses and returns the shortest one, which can then be sampled into
//! evenly spaced poses for collision checking.
//!
//! ```
//! use dubins::{pose, solve};
//!
//! let path = solve(&pose(0.0, 0.0, 0.0), &pose(10.0, 0.0, 0.0), 1.0).unwrap();
//! assert!((path.length() - 10.0).abs() < 1e-9);
//! let points: Vec<_> = path.points(0.5).unwrap().collect();
//! assert_eq!(points.len(), 21);
//! ```

pub mod error;
pub use error::DubinsError;

pub mod geometry;
pub use geometry::*;

pub mod segment;
pub use segment::{Arc, Line, PathSegment};

pub mod tangent_circle;
pub use tangent_circle::{TangentCircle, TangentCircles};

pub mod sample;
pub use sample::{ArclengthSamples, Samples};

pub mod path;
pub use path::{DubinsPath, PathFamily, PathType};

pub mod solver;
pub use solver::{solve, DubinsCurve};

pub mod waypoint;
pub use waypoint::WaypointSE2;

mod util;
