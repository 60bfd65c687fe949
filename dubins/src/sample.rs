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
    geometry::Position,
    segment::PathSegment,
};

/// Lazily walks a sequence of segments, producing a pose every `interval`
/// units of arclength within each segment and a final pose at the end of the
/// last segment. Each segment is sampled independently starting from its own
/// beginning, so the gap across a segment boundary may be shorter than the
/// interval. Positions within the distance tolerance of a segment's end are
/// left to the next segment, which starts there.
///
/// A clone is an independent cursor at the same place in the sequence. Ask the
/// path or segment for a new iterator to start over from the beginning.
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    segments: &'a [PathSegment],
    interval: f64,
    tolerance: f64,
    index: usize,
    step: usize,
    /// Arclength of the segments before `index`
    offset: f64,
    finished: bool,
}

impl<'a> Samples<'a> {
    pub(crate) fn new(segments: &'a [PathSegment], interval: f64, tolerance: f64) -> Self {
        Self {
            segments,
            interval,
            tolerance,
            index: 0,
            step: 0,
            offset: 0.0,
            finished: segments.is_empty(),
        }
    }

    /// Pair every sample with the arclength at which it was taken, measured
    /// from the start of the first segment.
    pub fn with_arclength(self) -> ArclengthSamples<'a> {
        ArclengthSamples(self)
    }

    fn next_with_arclength(&mut self) -> Option<(f64, Position)> {
        while let Some(segment) = self.segments.get(self.index) {
            let length = segment.length();
            let s = self.step as f64 * self.interval;
            if length - s > self.tolerance {
                self.step += 1;
                return Some((self.offset + s, segment.pose_at(s)));
            }

            self.offset += length;
            self.index += 1;
            self.step = 0;
        }

        if self.finished {
            return None;
        }

        self.finished = true;
        self.segments.last().map(|last| (self.offset, last.end_pose()))
    }
}

impl<'a> Iterator for Samples<'a> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_arclength().map(|(_, p)| p)
    }
}

impl<'a> std::iter::FusedIterator for Samples<'a> {}

/// Produced by [`Samples::with_arclength`].
#[derive(Debug, Clone)]
pub struct ArclengthSamples<'a>(Samples<'a>);

impl<'a> Iterator for ArclengthSamples<'a> {
    type Item = (f64, Position);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_with_arclength()
    }
}

impl<'a> std::iter::FusedIterator for ArclengthSamples<'a> {}
