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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::topology::containment::Relations;

/// An outer ring followed by its holes. Rings are open: the closing point is
/// implied.
pub type HoledPolygon = Vec<Vec<usize>>;

/// Final, densely numbered polygonization result.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygonization<T: Scalar> {
    /// `polygons[i] = [outer, hole...]`, indices into `points`.
    pub polygons: Vec<HoledPolygon>,
    /// Area enclosed by each polygon's outer ring.
    pub areas: Vec<T>,
    /// Sorted neighbours of each polygon; symmetric.
    pub graph: Vec<Vec<usize>>,
    /// Covering cluster of each polygon, indexing `parent_areas`.
    pub parent: Vec<usize>,
    /// Area enclosed by each cluster's outer boundary.
    pub parent_areas: Vec<T>,
    /// Points still referenced by some ring, in original order.
    pub points: Vec<Point2<T>>,
}

impl<T: Scalar> Default for Polygonization<T> {
    fn default() -> Self {
        Self {
            polygons: Vec::new(),
            areas: Vec::new(),
            graph: Vec::new(),
            parent: Vec::new(),
            parent_areas: Vec::new(),
            points: Vec::new(),
        }
    }
}

impl<T: Scalar> Polygonization<T> {
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Largest number of rings (outer plus holes) of any polygon.
    pub fn max_rings(&self) -> usize {
        self.polygons.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Drop coverings and absorbed holes, then renumber polygons, clusters and
/// points densely.
pub fn compact<T: Scalar>(relations: &Relations<T>, points: &[Point2<T>]) -> Polygonization<T> {
    let _span = tracing::debug_span!("compact", polygons = relations.rings.len()).entered();
    let n = relations.rings.len();

    let survivors: Vec<usize> = (0..n).filter(|&i| !relations.is_negative(i)).collect();
    let mut polygon_id = vec![usize::MAX; n];
    for (new, &old) in survivors.iter().enumerate() {
        polygon_id[old] = new;
    }

    // Clusters: root coverings, renumbered by ascending covering id.
    let roots: Vec<usize> = survivors
        .iter()
        .map(|&p| relations.root_covering(relations.covering_of[p]))
        .collect();
    let mut used_roots = roots.clone();
    used_roots.sort_unstable();
    used_roots.dedup();
    let mut cluster_id = vec![usize::MAX; relations.negative.len()];
    for (new, &root) in used_roots.iter().enumerate() {
        cluster_id[root] = new;
    }
    let parent: Vec<usize> = roots.iter().map(|&r| cluster_id[r]).collect();
    let parent_areas: Vec<T> = used_roots
        .iter()
        .map(|&r| relations.signed_areas[relations.negative[r]].abs())
        .collect();

    let graph: Vec<Vec<usize>> = survivors
        .iter()
        .map(|&p| {
            relations.graph[p]
                .iter()
                .filter(|&&k| polygon_id[k] != usize::MAX)
                .map(|&k| polygon_id[k])
                .collect()
        })
        .collect();

    let mut point_id = vec![usize::MAX; points.len()];
    for &p in &survivors {
        for ring in std::iter::once(p).chain(relations.holes[p].iter().copied()) {
            for &v in &relations.rings[ring] {
                point_id[v] = 0;
            }
        }
    }
    let mut kept_points = Vec::new();
    for (v, id) in point_id.iter_mut().enumerate() {
        if *id != usize::MAX {
            *id = kept_points.len();
            kept_points.push(points[v]);
        }
    }

    let open = |ring: usize| -> Vec<usize> {
        let r = &relations.rings[ring];
        let end = if r.len() > 1 && r[0] == r[r.len() - 1] { r.len() - 1 } else { r.len() };
        r[..end].iter().map(|&v| point_id[v]).collect()
    };

    let polygons: Vec<HoledPolygon> = survivors
        .iter()
        .map(|&p| {
            std::iter::once(p)
                .chain(relations.holes[p].iter().copied())
                .map(&open)
                .collect()
        })
        .collect();
    let areas: Vec<T> = survivors.iter().map(|&p| relations.signed_areas[p]).collect();

    tracing::debug!(
        polygons = polygons.len(),
        points = kept_points.len(),
        clusters = parent_areas.len(),
        "compacted"
    );
    Polygonization {
        polygons,
        areas,
        graph,
        parent,
        parent_areas,
        points: kept_points,
    }
}
