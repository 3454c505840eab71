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

//! Proximity graphs derived from the Delaunay triangulation.
//!
//! Each stage keeps a subset of the previous one's edges:
//! `relative_neighborhood_graph ⊆ gabriel_graph ⊆ delaunay_graph`.
//! Ties never remove an edge: a third point exactly on the Gabriel disk's
//! rim does, but one exactly at distance `d` from an RNG edge endpoint does
//! not.

use ahash::AHashMap;

use crate::error::Result;
use crate::geometry::{Edge, Point2, PointIndex};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::Triangulate2D;
use crate::operations::triangulation::delaunay::{Delaunay, validate_points};

/// Working state shared by the filter stages of one call.
///
/// `delaunay` holds the candidate edges the Gabriel filter started from,
/// `index` the range structure over the input points and `distances` every
/// point-to-point distance computed so far, keyed by canonical edge.
pub struct ProximityCache<T: Scalar> {
    pub delaunay: Vec<Edge>,
    pub index: Option<PointIndex>,
    pub distances: AHashMap<Edge, T>,
}

impl<T: Scalar> Default for ProximityCache<T> {
    fn default() -> Self {
        Self {
            delaunay: Vec::new(),
            index: None,
            distances: AHashMap::new(),
        }
    }
}

impl<T: Scalar> ProximityCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached distance between `a` and `b`, computed on first request.
    pub fn distance(&mut self, points: &[Point2<T>], a: usize, b: usize) -> T {
        *self
            .distances
            .entry(Edge::new(a, b))
            .or_insert_with(|| points[a].distance_to(&points[b]))
    }
}

/// Deduplicated, sorted edges of the Delaunay triangulation of `points`.
///
/// Two points yield their single connecting edge.
pub fn delaunay_graph<T: Scalar>(points: &[Point2<T>]) -> Result<Vec<Edge>> {
    let _span = tracing::debug_span!("delaunay_graph", points = points.len()).entered();
    validate_points(points)?;
    if points.len() == 2 {
        return Ok(vec![Edge(0, 1)]);
    }
    let edges = Delaunay::<T>::triangulate(points)?.edges();
    tracing::debug!(edges = edges.len(), "delaunay edges");
    Ok(edges)
}

pub fn gabriel_graph<T: Scalar>(points: &[Point2<T>]) -> Result<Vec<Edge>> {
    gabriel_graph_with(points, &mut ProximityCache::new())
}

/// Delaunay edges whose closed diametral disk holds no other point.
///
/// Fills `cache` with the Delaunay edges, the point index and the length of
/// every Delaunay edge.
pub fn gabriel_graph_with<T: Scalar>(
    points: &[Point2<T>],
    cache: &mut ProximityCache<T>,
) -> Result<Vec<Edge>> {
    let initial = delaunay_graph(points)?;
    let _span = tracing::debug_span!("gabriel_graph", candidates = initial.len()).entered();
    let index = PointIndex::build(points);

    let mut gabriel = Vec::with_capacity(initial.len());
    for &e in &initial {
        let Edge(e0, e1) = e;
        let dis = cache.distance(points, e0, e1);
        let mid = points[e0].midpoint(&points[e1]);
        let rad = dis * T::half();

        let blocked = index
            .within_radius(&mid, rad)
            .into_iter()
            .any(|i| i != e0 && i != e1);
        if !blocked {
            gabriel.push(e);
        }
    }

    tracing::debug!(edges = gabriel.len(), "gabriel edges");
    cache.delaunay = initial;
    cache.index = Some(index);
    Ok(gabriel)
}

pub fn relative_neighborhood_graph<T: Scalar>(points: &[Point2<T>]) -> Result<Vec<Edge>> {
    relative_neighborhood_graph_with(points, &mut ProximityCache::new())
}

/// Gabriel edges whose lune holds no point closer than the edge length to
/// both endpoints.
///
/// The lune lies within `d * sin(60°)` of the edge midpoint, so only points
/// returned by that radius query are tested.
pub fn relative_neighborhood_graph_with<T: Scalar>(
    points: &[Point2<T>],
    cache: &mut ProximityCache<T>,
) -> Result<Vec<Edge>> {
    let initial = gabriel_graph_with(points, cache)?;
    let _span = tracing::debug_span!("relative_neighborhood_graph", candidates = initial.len())
        .entered();
    let Some(index) = cache.index.take() else {
        return Ok(initial);
    };
    let sin60 = (T::one() + T::two()).sqrt() * T::half();

    let mut rng = Vec::with_capacity(initial.len());
    for &e in &initial {
        let Edge(e0, e1) = e;
        let dis = cache.distance(points, e0, e1);
        let mid = points[e0].midpoint(&points[e1]);

        let mut blocked = false;
        for i in index.within_radius(&mid, dis * sin60) {
            if i == e0 || i == e1 {
                continue;
            }
            let d0 = cache.distance(points, i, e0);
            let d1 = cache.distance(points, i, e1);
            if d0 < dis && d1 < dis {
                blocked = true;
                break;
            }
        }
        if !blocked {
            rng.push(e);
        }
    }

    cache.index = Some(index);
    tracing::debug!(edges = rng.len(), "relative neighborhood edges");
    Ok(rng)
}
