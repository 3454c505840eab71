// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

use crate::geometry::{Aabb, Point2};
use crate::numeric::scalar::Scalar;

type IndexedPoint = GeomWithData<[f64; 2], usize>;
type IndexedBox = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// R*-tree over a point sequence, answering closed-disk range queries with
/// the original point indices.
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl PointIndex {
    pub fn build<T: Scalar>(points: &[Point2<T>]) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(i, p)| GeomWithData::new(p.to_array(), i))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Indices of every point at distance `<= radius` from `center`.
    pub fn within_radius<T: Scalar>(&self, center: &Point2<T>, radius: T) -> Vec<usize> {
        let r = radius.as_f64();
        let mut found: Vec<usize> = self
            .tree
            .locate_within_distance(center.to_array(), r * r)
            .map(|entry| entry.data)
            .collect();
        found.sort_unstable();
        found
    }
}

/// Bounding boxes keyed by an arbitrary id, queried by box intersection.
pub struct RingIndex {
    tree: RTree<IndexedBox>,
}

impl RingIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn bulk_load<T: Scalar>(boxes: impl IntoIterator<Item = (usize, Aabb<T>)>) -> Self {
        let entries = boxes
            .into_iter()
            .map(|(id, bb)| GeomWithData::new(rectangle(&bb), id))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn insert<T: Scalar>(&mut self, id: usize, bb: &Aabb<T>) {
        self.tree.insert(GeomWithData::new(rectangle(bb), id));
    }

    /// Ids whose box intersects `bb`, ascending.
    pub fn intersecting<T: Scalar>(&self, bb: &Aabb<T>) -> Vec<usize> {
        let envelope: AABB<[f64; 2]> = bb.to_envelope();
        let mut found: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
            .collect();
        found.sort_unstable();
        found
    }
}

impl Default for RingIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn rectangle<T: Scalar>(bb: &Aabb<T>) -> Rectangle<[f64; 2]> {
    Rectangle::from_corners(bb.min.to_array(), bb.max.to_array())
}
