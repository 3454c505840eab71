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

use smallvec::SmallVec;

use crate::geometry::Edge;

/// A chain of point indices whose interior vertices have degree 2.
/// Closed when the first and last index coincide.
pub type Line = Vec<usize>;

/// Split an undirected graph into maximal chains.
///
/// Chains break at every vertex whose degree is not 2. Growth starts from
/// loose ends first, then from branch vertices, and only then from whatever
/// edge remains, which can only belong to an isolated cycle. Such a cycle
/// comes back as one closed line.
///
/// `edges` must already be canonical and free of duplicates.
pub fn separate_lines(edges: &[Edge]) -> Vec<Line> {
    let n = edges.iter().map(|e| e.0.max(e.1) + 1).max().unwrap_or(0);
    let mut incident: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); n];
    for (id, e) in edges.iter().enumerate() {
        incident[e.0].push(id);
        incident[e.1].push(id);
    }
    let degree = |v: usize| incident[v].len();

    // Seeds are (edge id, vertex the chain grows from).
    let mut end_seeds: Vec<(usize, usize)> = Vec::new();
    let mut corner_seeds: Vec<(usize, usize)> = Vec::new();
    for (id, e) in edges.iter().enumerate() {
        let (c0, c1) = (degree(e.0), degree(e.1));
        if c0 == 1 {
            end_seeds.push((id, e.0));
        } else if c1 == 1 {
            end_seeds.push((id, e.1));
        } else if c0 > 2 {
            corner_seeds.push((id, e.0));
        } else if c1 > 2 {
            corner_seeds.push((id, e.1));
        }
    }

    let mut remaining = vec![true; edges.len()];
    let mut cursor = 0usize;
    let mut lines = Vec::new();

    loop {
        let seed = pop_remaining(&mut end_seeds, &remaining)
            .or_else(|| pop_remaining(&mut corner_seeds, &remaining))
            .or_else(|| {
                while cursor < edges.len() && !remaining[cursor] {
                    cursor += 1;
                }
                (cursor < edges.len()).then(|| (cursor, edges[cursor].0))
            });
        let Some((first, from)) = seed else {
            break;
        };

        remaining[first] = false;
        let mut current = first;
        let mut at = edges[first].other(from);
        let mut line = vec![from, at];

        while degree(at) == 2 {
            let next = incident[at]
                .iter()
                .copied()
                .find(|&k| k != current && remaining[k]);
            let Some(k) = next else {
                break;
            };
            remaining[k] = false;
            current = k;
            at = edges[k].other(at);
            line.push(at);
        }

        lines.push(line);
    }

    tracing::debug!(edges = edges.len(), lines = lines.len(), "separated lines");
    lines
}

fn pop_remaining(seeds: &mut Vec<(usize, usize)>, remaining: &[bool]) -> Option<(usize, usize)> {
    while let Some(seed) = seeds.pop() {
        if remaining[seed.0] {
            return Some(seed);
        }
    }
    None
}
