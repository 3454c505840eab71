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

//! Face assembly from lines with an angular rotation system.
//!
//! A [`DirectedLine`] is a line together with a traversal direction. In a
//! vertex's rotation it stands for the line arriving at that vertex when
//! walked in that direction: `forward` entries sit at the line's last point,
//! backward ones at its first point.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::error::{Result, TopoError};
use crate::geometry::{Point2, Vector2};
use crate::numeric::scalar::Scalar;
use crate::topology::lines::Line;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedLine {
    pub line: usize,
    pub forward: bool,
}

impl DirectedLine {
    pub fn new(line: usize, forward: bool) -> Self {
        Self { line, forward }
    }

    pub fn reversed(self) -> Self {
        Self {
            line: self.line,
            forward: !self.forward,
        }
    }
}

type Rotation = SmallVec<[DirectedLine; 4]>;

/// Every face of the subdivision spanned by a set of lines.
#[derive(Clone, Debug, Default)]
pub struct FaceTying {
    /// The lines after closed loops were split in two.
    pub lines: Vec<Line>,
    /// Closed rings (last index repeats the first). Bounded faces run
    /// counter-clockwise, the outer face of each component clockwise.
    pub polygons: Vec<Vec<usize>>,
    /// Lines along each polygon's boundary in traversal order, each at most
    /// once.
    pub graph_conn: Vec<Vec<usize>>,
    /// Distinct polygons on the two sides of each line. Empty for pruned
    /// lines.
    pub graph_dual: Vec<Vec<usize>>,
}

/// Tie `lines` into polygons.
///
/// Dangling lines, the ones that cannot bound any face, are trimmed first.
/// Each remaining directed line is then walked exactly once: at every vertex
/// the walk continues with the line that follows the arriving one in the
/// vertex's rotation, so bounded faces stay on the left of the walk.
pub fn tie_polygons<T: Scalar>(mut lines: Vec<Line>, points: &[Point2<T>]) -> Result<FaceTying> {
    let _span = tracing::debug_span!("tie_polygons", lines = lines.len()).entered();
    split_loops(&mut lines);

    for (i, line) in lines.iter().enumerate() {
        if line.len() < 2 {
            return Err(TopoError::invalid_graph(format!("line {i} has fewer than 2 points")));
        }
        if let Some(&p) = line.iter().find(|&&p| p >= points.len()) {
            return Err(TopoError::invalid_graph(format!(
                "line {i} references point {p}, only {} points given",
                points.len()
            )));
        }
    }

    let mut ends: Vec<Rotation> = vec![SmallVec::new(); points.len()];
    for (i, line) in lines.iter().enumerate() {
        ends[line[line.len() - 1]].push(DirectedLine::new(i, true));
        ends[line[0]].push(DirectedLine::new(i, false));
    }

    let alive = prune_dangling(&lines, &mut ends);

    let mut rotations: Vec<Rotation> = vec![SmallVec::new(); points.len()];
    for (v, entries) in ends.iter().enumerate() {
        if entries.len() >= 2 {
            rotations[v] = rotation_at(v, entries, &lines, points)?;
        }
    }

    let mut unvisited: BTreeSet<DirectedLine> = alive
        .iter()
        .enumerate()
        .filter(|(_, alive)| **alive)
        .flat_map(|(i, _)| [DirectedLine::new(i, false), DirectedLine::new(i, true)])
        .collect();

    let mut polygons = Vec::new();
    let mut graph_conn = Vec::new();
    let mut graph_dual: Vec<Vec<usize>> = vec![Vec::new(); lines.len()];

    while let Some(start) = unvisited.pop_first() {
        let pid = polygons.len();
        let mut polygon = oriented(&lines[start.line], start.forward);
        let mut conn = Vec::new();
        record(&mut conn, &mut graph_dual, start.line, pid);

        let mut current = start;
        loop {
            let at = polygon[polygon.len() - 1];
            current = next_line(&rotations[at], current, at)?;
            if current == start {
                break;
            }
            if !unvisited.remove(&current) {
                return Err(TopoError::inconsistent(format!(
                    "line {} was walked twice in the same direction",
                    current.line
                )));
            }
            polygon.extend(oriented(&lines[current.line], current.forward).into_iter().skip(1));
            record(&mut conn, &mut graph_dual, current.line, pid);
        }

        polygons.push(polygon);
        graph_conn.push(conn);
    }

    tracing::debug!(polygons = polygons.len(), "tied polygons");
    Ok(FaceTying {
        lines,
        polygons,
        graph_conn,
        graph_dual,
    })
}

/// Split every closed line at its middle so that no line starts and ends at
/// the same vertex.
fn split_loops(lines: &mut Vec<Line>) {
    let n = lines.len();
    for i in 0..n {
        let line = &mut lines[i];
        if line.len() > 2 && line[0] == line[line.len() - 1] {
            let mid = line.len() / 2;
            let tail = line[mid..].to_vec();
            line.truncate(mid + 1);
            lines.push(tail);
        }
    }
}

/// Trim lines hanging from a vertex no other line reaches, repeating until
/// every remaining vertex joins at least two line ends.
fn prune_dangling(lines: &[Line], ends: &mut [Rotation]) -> Vec<bool> {
    let mut alive = vec![true; lines.len()];
    let mut pending: Vec<(usize, usize)> = Vec::new();

    let kill = |line: usize, alive: &mut Vec<bool>, pending: &mut Vec<(usize, usize)>| {
        if alive[line] {
            alive[line] = false;
            let l = &lines[line];
            pending.push((l[0], line));
            pending.push((l[l.len() - 1], line));
            tracing::trace!(line, "pruned dangling line");
        }
    };

    for entries in ends.iter() {
        if entries.len() == 1 {
            kill(entries[0].line, &mut alive, &mut pending);
        }
    }

    while let Some((v, line)) = pending.pop() {
        ends[v].retain(|e| e.line != line);
        if ends[v].len() == 1 {
            kill(ends[v][0].line, &mut alive, &mut pending);
        }
    }

    alive
}

/// Order the line ends meeting at `v`.
///
/// The first entry stays first; the others follow by the angle between the
/// first entry's incoming direction and their outgoing direction, see
/// [`Vector2::angle_to`].
fn rotation_at<T: Scalar>(
    v: usize,
    entries: &[DirectedLine],
    lines: &[Line],
    points: &[Point2<T>],
) -> Result<Rotation> {
    let incoming = |e: &DirectedLine| -> Vector2<T> {
        let line = &lines[e.line];
        let prev = if e.forward { line[line.len() - 2] } else { line[1] };
        &points[v] - &points[prev]
    };

    let reference = incoming(&entries[0]);
    if reference.is_zero() {
        return Err(TopoError::invalid_graph(format!(
            "line {} has a zero-length segment at point {v}",
            entries[0].line
        )));
    }

    let mut keyed: SmallVec<[(T, DirectedLine); 4]> = SmallVec::with_capacity(entries.len() - 1);
    for e in &entries[1..] {
        let d = incoming(e);
        if d.is_zero() {
            return Err(TopoError::invalid_graph(format!(
                "line {} has a zero-length segment at point {v}",
                e.line
            )));
        }
        let angle = reference.angle_to(&-d);
        if angle.is_nan() || angle.is_zero() {
            return Err(TopoError::invalid_graph(format!(
                "lines {} and {} leave point {v} in the same direction",
                entries[0].line, e.line
            )));
        }
        keyed.push((angle, *e));
    }

    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    if let Some(w) = keyed.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(TopoError::invalid_graph(format!(
            "lines {} and {} leave point {v} in the same direction",
            w[0].1.line, w[1].1.line
        )));
    }

    let mut rotation = Rotation::with_capacity(entries.len());
    rotation.push(entries[0]);
    rotation.extend(keyed.into_iter().map(|(_, e)| e));
    Ok(rotation)
}

/// The directed line a walk continues with after arriving at `at` via
/// `arriving`.
fn next_line(rotation: &[DirectedLine], arriving: DirectedLine, at: usize) -> Result<DirectedLine> {
    let pos = rotation.iter().position(|e| *e == arriving).ok_or_else(|| {
        TopoError::inconsistent(format!(
            "line {} has no place in the rotation at point {at}",
            arriving.line
        ))
    })?;
    Ok(rotation[(pos + 1) % rotation.len()].reversed())
}

fn oriented(line: &Line, forward: bool) -> Vec<usize> {
    if forward {
        line.clone()
    } else {
        line.iter().rev().copied().collect()
    }
}

fn record(conn: &mut Vec<usize>, graph_dual: &mut [Vec<usize>], line: usize, pid: usize) {
    if !graph_dual[line].contains(&pid) {
        graph_dual[line].push(pid);
        conn.push(line);
    }
}
