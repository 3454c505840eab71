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

//! Hole and covering resolution over the faces produced by face tying.
//!
//! Every connected component of the tied graph has exactly one clockwise
//! face, its outer boundary, called a covering here. A component that sits
//! inside a bounded face of another component contributes its covering as a
//! hole of that face.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::{Result, TopoError};
use crate::geometry::ring::{ring_aabb, ring_contains_ring, signed_area};
use crate::geometry::{Aabb, Point2, RingIndex};
use crate::numeric::scalar::Scalar;
use crate::topology::tie::FaceTying;

/// Polygon arena plus the side tables describing how polygons nest.
///
/// Rings are never modified; absorption is recorded in `absorbed_into` and
/// `holes` and only materialized by compaction.
#[derive(Clone, Debug)]
pub struct Relations<T: Scalar> {
    /// Closed rings from face tying, indexed by polygon id.
    pub rings: Vec<Vec<usize>>,
    pub signed_areas: Vec<T>,
    /// Clockwise polygons by decreasing absolute area; a position in this list
    /// is a covering id.
    pub negative: Vec<usize>,
    /// Polygon ids of each covering's component, the covering polygon first.
    pub coverings: Vec<Vec<usize>>,
    /// Covering id of the component every polygon belongs to.
    pub covering_of: Vec<usize>,
    /// For each covering, the covering of the component hosting it, if any.
    pub host_covering: Vec<Option<usize>>,
    /// Holes appended to each polygon, as polygon ids.
    pub holes: Vec<Vec<usize>>,
    /// Host polygon of each absorbed hole.
    pub absorbed_into: Vec<Option<usize>>,
    /// Symmetric adjacency, updated as holes are absorbed.
    pub graph: Vec<BTreeSet<usize>>,
}

impl<T: Scalar> Relations<T> {
    pub fn is_negative(&self, polygon: usize) -> bool {
        self.signed_areas[polygon] < T::zero()
    }

    /// Outermost covering enclosing `covering`, following hosts upward.
    pub fn root_covering(&self, mut covering: usize) -> usize {
        while let Some(host) = self.host_covering[covering] {
            covering = host;
        }
        covering
    }
}

/// Classify the tied faces and nest holes into their enclosing polygons.
pub fn resolve_containment<T: Scalar>(
    tying: &FaceTying,
    points: &[Point2<T>],
) -> Result<Relations<T>> {
    let _span = tracing::debug_span!("resolve_containment", polygons = tying.polygons.len())
        .entered();
    let n = tying.polygons.len();

    let mut graph: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for (i, conn) in tying.graph_conn.iter().enumerate() {
        for &l in conn {
            for &k in &tying.graph_dual[l] {
                if k != i {
                    graph[i].insert(k);
                    graph[k].insert(i);
                }
            }
        }
    }

    let signed_areas: Vec<T> = tying
        .polygons
        .iter()
        .map(|ring| signed_area(ring, points))
        .collect();

    let mut negative: Vec<usize> = (0..n).filter(|&i| signed_areas[i] < T::zero()).collect();
    negative.sort_by(|&a, &b| {
        signed_areas[b]
            .abs()
            .partial_cmp(&signed_areas[a].abs())
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let (coverings, covering_of) = flood_coverings(&negative, &graph, n)?;

    let boxes: Vec<Aabb<T>> = tying
        .polygons
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            ring_aabb(ring, points)
                .ok_or_else(|| TopoError::inconsistent(format!("polygon {i} has an empty ring")))
        })
        .collect::<Result<_>>()?;

    let host_of_negative = immediate_coverings(&negative, &tying.polygons, &boxes, points);

    let mut relations = Relations {
        rings: tying.polygons.clone(),
        signed_areas,
        negative,
        coverings,
        covering_of,
        host_covering: vec![None; host_of_negative.len()],
        holes: vec![Vec::new(); n],
        absorbed_into: vec![None; n],
        graph,
    };

    // Holes grouped by the covering that immediately encloses them.
    let mut nested: Vec<Vec<usize>> = vec![Vec::new(); relations.negative.len()];
    for (c, host) in host_of_negative.iter().enumerate() {
        if let Some(h) = host {
            nested[*h].push(c);
        }
    }

    for (c, inner) in nested.iter().enumerate() {
        if inner.is_empty() {
            continue;
        }
        let faces = &relations.coverings[c][1..];
        let index = RingIndex::bulk_load(faces.iter().map(|&f| (f, boxes[f])));

        for &hole_covering in inner {
            let hole = relations.negative[hole_covering];
            let host = index
                .intersecting(&boxes[hole])
                .into_iter()
                .find(|&f| ring_contains_ring(&relations.rings[f], &relations.rings[hole], points))
                .ok_or_else(|| {
                    TopoError::inconsistent(format!(
                        "hole {hole} lies inside clockwise polygon {} but inside none of its faces",
                        relations.negative[c]
                    ))
                })?;
            absorb(&mut relations, hole, host);
            relations.host_covering[hole_covering] = Some(c);
        }
    }

    tracing::debug!(
        coverings = relations.negative.len(),
        holes = relations.absorbed_into.iter().filter(|a| a.is_some()).count(),
        "resolved containment"
    );
    Ok(relations)
}

/// Claim every polygon for the covering whose flood reaches it first,
/// largest coverings first.
fn flood_coverings(
    negative: &[usize],
    graph: &[BTreeSet<usize>],
    n: usize,
) -> Result<(Vec<Vec<usize>>, Vec<usize>)> {
    let mut covering_of: Vec<Option<usize>> = vec![None; n];
    let mut coverings = Vec::with_capacity(negative.len());

    for (c, &seed) in negative.iter().enumerate() {
        if let Some(other) = covering_of[seed] {
            return Err(TopoError::inconsistent(format!(
                "clockwise polygon {seed} is reachable from covering {}",
                negative[other]
            )));
        }
        let mut claimed = Vec::new();
        let mut stack = vec![seed];
        while let Some(cur) = stack.pop() {
            if covering_of[cur].is_some() {
                continue;
            }
            covering_of[cur] = Some(c);
            claimed.push(cur);
            stack.extend(graph[cur].iter().copied());
        }
        coverings.push(claimed);
    }

    let covering_of = covering_of
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            c.ok_or_else(|| {
                TopoError::inconsistent(format!("polygon {i} belongs to no clockwise boundary"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((coverings, covering_of))
}

/// For each covering, the smallest larger covering whose ring contains it.
fn immediate_coverings<T: Scalar>(
    negative: &[usize],
    rings: &[Vec<usize>],
    boxes: &[Aabb<T>],
    points: &[Point2<T>],
) -> Vec<Option<usize>> {
    let mut index = RingIndex::new();
    let mut hosts = Vec::with_capacity(negative.len());
    for (c, &polygon) in negative.iter().enumerate() {
        let host = index
            .intersecting(&boxes[polygon])
            .into_iter()
            .filter(|&j| ring_contains_ring(&rings[negative[j]], &rings[polygon], points))
            .max();
        hosts.push(host);
        index.insert(c, &boxes[polygon]);
    }
    hosts
}

/// Fold `hole` into `host`, moving its adjacency over.
fn absorb<T: Scalar>(relations: &mut Relations<T>, hole: usize, host: usize) {
    let neighbours = std::mem::take(&mut relations.graph[hole]);
    for &k in &neighbours {
        relations.graph[k].remove(&hole);
        if k != host {
            relations.graph[k].insert(host);
            relations.graph[host].insert(k);
        }
    }
    relations.holes[host].push(hole);
    relations.absorbed_into[hole] = Some(host);
    tracing::trace!(hole, host, "absorbed hole");
}
