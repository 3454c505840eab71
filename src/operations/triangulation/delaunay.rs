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

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::error::{Result, TopoError};
use crate::geometry::{Edge, Point2};
use crate::kernel::predicates::{bbox, incircle, orient2d};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{Triangulate2D, Triangulation};

pub const SQRT_3: f64 = 1.7320508075688772;

/// How far the super-triangle reaches, in multiples of the input extent.
const SUPER_TRIANGLE_SCALE: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.0, self.1),
            Edge::new(self.1, self.2),
            Edge::new(self.2, self.0),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct Delaunay<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub triangles: Vec<Triangle>, // indices into points
}

impl<T: Scalar> Delaunay<T> {
    /// Build the Delaunay triangulation of `pts` by Bowyer-Watson insertion.
    ///
    /// Fails on fewer than three points, non-finite or coincident points and
    /// fully collinear input.
    pub fn build(pts: &[Point2<T>]) -> Result<Self> {
        validate_points(pts)?;
        if pts.len() < 3 {
            return Err(TopoError::degenerate(format!(
                "triangulation needs at least 3 points, got {}",
                pts.len()
            )));
        }
        if !has_non_collinear_triple(pts) {
            return Err(TopoError::degenerate("all points are collinear"));
        }

        let mut points = pts.to_vec();

        // Create super-triangle that contains all points
        let (minx, miny, maxx, maxy) = bbox(&points);
        let delta = (maxx - minx).max(maxy - miny);
        let cx = (minx + maxx) * T::half();
        let cy = (miny + maxy) * T::half();

        let r = T::from_f64(SUPER_TRIANGLE_SCALE) * delta + T::one();
        let sqrt_3 = T::from_f64(SQRT_3);
        let p_super0 = Point2::new(cx, cy + T::two() * r);
        let p_super1 = Point2::new(cx - sqrt_3 * r, cy - r);
        let p_super2 = Point2::new(cx + sqrt_3 * r, cy - r);

        let s0 = points.len();
        let s1 = s0 + 1;
        let s2 = s0 + 2;

        points.push(p_super0);
        points.push(p_super1);
        points.push(p_super2);

        // Initialize with super-triangle
        let mut triangles = vec![Triangle(s0, s1, s2)];

        // Insert each point using Bowyer-Watson
        for pid in 0..s0 {
            Self::bowyer_watson_insert_point(pid, &points, &mut triangles);
        }

        // Remove super-triangles
        triangles.retain(|t| t.0 < s0 && t.1 < s0 && t.2 < s0);
        points.truncate(s0);

        if triangles.is_empty() {
            return Err(TopoError::degenerate("triangulation produced no triangles"));
        }
        tracing::trace!(points = s0, triangles = triangles.len(), "delaunay built");

        Ok(Self { points, triangles })
    }

    /// Insert a single point using Bowyer-Watson algorithm
    fn bowyer_watson_insert_point(pid: usize, points: &[Point2<T>], triangles: &mut Vec<Triangle>) {
        let p = &points[pid];

        // Find triangles whose circumcircle contains p
        let mut bad_triangles = Vec::new();
        for (i, &t) in triangles.iter().enumerate() {
            if Self::point_in_circumcircle(p, t, points) {
                bad_triangles.push(i);
            }
        }

        if bad_triangles.is_empty() {
            tracing::trace!(pid, "point not inside any circumcircle, skipped");
            return;
        }

        // Find cavity boundary
        let mut edge_count: AHashMap<Edge, u32> = AHashMap::with_capacity(bad_triangles.len() * 3);
        for &i in &bad_triangles {
            for edge in triangles[i].edges() {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        // Boundary edges appear exactly once
        let mut boundary_edges: Vec<Edge> = edge_count
            .into_iter()
            .filter_map(|(edge, count)| if count == 1 { Some(edge) } else { None })
            .collect();
        boundary_edges.sort_unstable();

        // Remove bad triangles (in reverse order to preserve indices)
        for &i in bad_triangles.iter().rev() {
            triangles.swap_remove(i);
        }

        // Create new triangles by connecting boundary edges to new point
        for edge in boundary_edges {
            let new_triangle = if orient2d(&points[edge.0], &points[edge.1], p) > T::zero() {
                Triangle(edge.0, edge.1, pid)
            } else {
                Triangle(edge.0, pid, edge.1)
            };
            triangles.push(new_triangle);
        }
    }

    /// Test if point is inside circumcircle of triangle
    fn point_in_circumcircle(p: &Point2<T>, t: Triangle, points: &[Point2<T>]) -> bool {
        let (a, b, c) = (t.0, t.1, t.2);

        // Ensure CCW orientation for consistent incircle test
        let (aa, bb, cc) = if orient2d(&points[a], &points[b], &points[c]) > T::zero() {
            (a, b, c)
        } else {
            (a, c, b)
        };

        incircle(&points[aa], &points[bb], &points[cc], p) > T::zero()
    }

    pub fn into_triangulation(self) -> Triangulation<T> {
        Triangulation {
            points: self.points,
            triangles: self.triangles.iter().map(|t| [t.0, t.1, t.2]).collect(),
        }
    }
}

impl<T: Scalar> Triangulate2D<T> for Delaunay<T> {
    fn triangulate(points: &[Point2<T>]) -> Result<Triangulation<T>> {
        Ok(Self::build(points)?.into_triangulation())
    }
}

/// Rejects empty or single-point input, non-finite coordinates and
/// coincident points.
pub(crate) fn validate_points<T: Scalar>(points: &[Point2<T>]) -> Result<()> {
    if points.len() < 2 {
        return Err(TopoError::degenerate(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(TopoError::degenerate(format!("point {i} has a non-finite coordinate")));
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_unstable_by(|&a, &b| lexicographic(&points[a], &points[b]));
    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            let e = Edge::new(w[0], w[1]);
            return Err(TopoError::degenerate(format!(
                "points {} and {} coincide",
                e.0, e.1
            )));
        }
    }
    Ok(())
}

fn lexicographic<T: Scalar>(a: &Point2<T>, b: &Point2<T>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

fn has_non_collinear_triple<T: Scalar>(points: &[Point2<T>]) -> bool {
    let (a, b) = (&points[0], &points[1]);
    points[2..].iter().any(|c| !orient2d(a, b, c).is_zero())
}
