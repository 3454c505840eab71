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

/// An undirected edge between two point indices, stored lower index first.
///
/// Two edges compare equal whatever order their endpoints were given in,
/// so a set of `Edge`s never holds both orientations of the same pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0 == v || self.1 == v
    }

    /// The endpoint opposite to `v`. `v` must be an endpoint.
    #[inline]
    pub fn other(&self, v: usize) -> usize {
        if self.0 == v { self.1 } else { self.0 }
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}

impl From<[usize; 2]> for Edge {
    fn from([a, b]: [usize; 2]) -> Self {
        Edge::new(a, b)
    }
}

/// Canonicalize a raw edge list, keeping the first occurrence of every edge.
///
/// Hand-built `Edge`s are reordered too, since their fields are public.
pub fn dedup_edges<I, E>(edges: I) -> Vec<Edge>
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    let mut seen: ahash::AHashSet<Edge> = ahash::AHashSet::new();
    edges
        .into_iter()
        .map(|e| {
            let e: Edge = e.into();
            Edge::new(e.0, e.1)
        })
        .filter(|e| seen.insert(*e))
        .collect()
}
