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

//! Polygon reconstruction from planar edge graphs.
//!
//! [`obtain_polygons`] chains the stages, each of which is public on its own:
//!
//! 1. [`separate_lines`] splits the graph into chains between branch points.
//! 2. [`tie_polygons`] walks the chains into oriented faces.
//! 3. [`resolve_containment`] nests holes and builds the adjacency graph.
//! 4. [`compact`] renumbers the survivors densely.

pub mod compact;
pub mod containment;
pub mod lines;
pub mod tie;

pub use compact::{HoledPolygon, Polygonization, compact};
pub use containment::{Relations, resolve_containment};
pub use lines::{Line, separate_lines};
pub use tie::{DirectedLine, FaceTying, tie_polygons};

use crate::error::{Result, TopoError};
use crate::geometry::{Edge, Point2, dedup_edges};
use crate::numeric::scalar::Scalar;

/// Polygons enclosed by the undirected graph `edges` over `points`.
///
/// Edges that do not bound any face are discarded. Duplicate edges are
/// collapsed; self-loops and out-of-range indices are rejected.
pub fn obtain_polygons<T, E>(edges: &[E], points: &[Point2<T>]) -> Result<Polygonization<T>>
where
    T: Scalar,
    E: Into<Edge> + Copy,
{
    let _span =
        tracing::debug_span!("obtain_polygons", edges = edges.len(), points = points.len()).entered();

    let edges = dedup_edges(edges.iter().copied());
    for e in &edges {
        if e.is_loop() {
            return Err(TopoError::invalid_graph(format!("edge joins point {} to itself", e.0)));
        }
        if e.0.max(e.1) >= points.len() {
            return Err(TopoError::invalid_graph(format!(
                "edge ({}, {}) references a point beyond the {} given",
                e.0,
                e.1,
                points.len()
            )));
        }
    }

    let lines = separate_lines(&edges);
    let tying = tie_polygons(lines, points)?;
    let relations = resolve_containment(&tying, points)?;
    Ok(compact(&relations, points))
}
