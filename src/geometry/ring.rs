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

//! Rings are cyclic sequences of point indices. They may be stored closed
//! (last index repeating the first) or open; every routine here treats the
//! closing segment as implied either way.

use crate::geometry::{Aabb, Point2};
use crate::kernel::predicates::orient2d;
use crate::numeric::scalar::Scalar;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingSide {
    Inside,
    Outside,
    OnBoundary,
}

/// Shoelace area; positive for counter-clockwise rings.
pub fn signed_area<T: Scalar>(ring: &[usize], points: &[Point2<T>]) -> T {
    let n = ring.len();
    let mut area = T::zero();
    for i in 0..n {
        let a = &points[ring[i]];
        let b = &points[ring[(i + 1) % n]];
        area = area + (a.x * b.y - a.y * b.x);
    }
    area * T::half()
}

pub fn ring_aabb<T: Scalar>(ring: &[usize], points: &[Point2<T>]) -> Option<Aabb<T>> {
    Aabb::enclosing(ring.iter().map(|&i| &points[i]))
}

/// Crossing-number classification of `q` against `ring`, boundary-inclusive.
pub fn classify_point<T: Scalar>(ring: &[usize], points: &[Point2<T>], q: &Point2<T>) -> RingSide {
    let n = ring.len();
    if n < 3 {
        return RingSide::Outside;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &points[ring[i]];
        let b = &points[ring[(i + 1) % n]];

        if on_segment(a, b, q) {
            return RingSide::OnBoundary;
        }

        if (a.y > q.y) != (b.y > q.y) {
            let x_cross = (b.x - a.x) * (q.y - a.y) / (b.y - a.y) + a.x;
            if q.x < x_cross {
                inside = !inside;
            }
        }
    }
    if inside {
        RingSide::Inside
    } else {
        RingSide::Outside
    }
}

/// Whether `outer` contains `inner`: no vertex of `inner` falls outside
/// `outer` and at least one lies strictly inside.
///
/// Only meaningful for rings that do not cross, which holds for faces of a
/// planar subdivision.
pub fn ring_contains_ring<T: Scalar>(outer: &[usize], inner: &[usize], points: &[Point2<T>]) -> bool {
    let mut strictly_inside = false;
    for &i in inner {
        match classify_point(outer, points, &points[i]) {
            RingSide::Outside => return false,
            RingSide::Inside => strictly_inside = true,
            RingSide::OnBoundary => {}
        }
    }
    strictly_inside
}

fn on_segment<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> bool {
    if !orient2d(a, b, p).is_zero() {
        return false;
    }
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}
