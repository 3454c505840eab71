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

use rstar::AABB;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// An axis-aligned bounding box in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Aabb<T> {
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Aabb { min, max }
    }

    pub fn min(&self) -> &Point2<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &Point2<T> {
        &self.max
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point2<T>, b: &Point2<T>) -> Self {
        Aabb::new(
            Point2::new(a.x.min(b.x), a.y.min(b.y)),
            Point2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Smallest AABB around a non-empty point sequence.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2<T>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut bb = Aabb::from_points(first, first);
        for p in it {
            bb = bb.union(&Aabb::from_points(p, p));
        }
        Some(bb)
    }

    pub fn union(&self, other: &Aabb<T>) -> Aabb<T> {
        Aabb::new(
            Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb<T>) -> bool {
        !(self.max.x < other.min.x
            || other.max.x < self.min.x
            || self.max.y < other.min.y
            || other.max.y < self.min.y)
    }

    pub fn contains_aabb(&self, other: &Aabb<T>) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> T {
        match i {
            0 => (self.min.x + self.max.x) * T::half(),
            _ => (self.min.y + self.max.y) * T::half(),
        }
    }

    pub fn to_envelope(&self) -> AABB<[f64; 2]> {
        AABB::from_corners(self.min.to_array(), self.max.to_array())
    }
}
