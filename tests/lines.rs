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

use planar_topo::geometry::{Edge, dedup_edges};
use planar_topo::topology::separate_lines;

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    dedup_edges(pairs.iter().copied())
}

fn covered_edges(lines: &[Vec<usize>]) -> Vec<Edge> {
    let mut out: Vec<Edge> = lines
        .iter()
        .flat_map(|l| l.windows(2).map(|w| Edge::new(w[0], w[1])))
        .collect();
    out.sort_unstable();
    out
}

#[test]
fn test_path_is_one_line() {
    let lines = separate_lines(&edges(&[(0, 1), (1, 2), (2, 3)]));
    assert_eq!(lines, vec![vec![3, 2, 1, 0]]);
}

#[test]
fn test_isolated_cycle_is_closed() {
    let lines = separate_lines(&edges(&[(0, 1), (1, 2), (2, 0)]));
    assert_eq!(lines, vec![vec![0, 1, 2, 0]]);
}

#[test]
fn test_star_splits_at_center() {
    let lines = separate_lines(&edges(&[(0, 1), (0, 2), (0, 3)]));
    assert_eq!(lines, vec![vec![3, 0], vec![2, 0], vec![1, 0]]);
}

#[test]
fn test_square_with_diagonal() {
    let e = edges(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
    let lines = separate_lines(&e);
    assert_eq!(lines, vec![vec![0, 2], vec![0, 3, 2], vec![2, 1, 0]]);

    let mut expected = e.clone();
    expected.sort_unstable();
    assert_eq!(covered_edges(&lines), expected);
}

#[test]
fn test_loop_hanging_from_branch() {
    let lines = separate_lines(&edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]));
    assert_eq!(lines, vec![vec![3, 2], vec![2, 0, 1, 2]]);
}

#[test]
fn test_every_edge_in_exactly_one_line() {
    // Two triangles joined by a path, plus a separate square.
    let e = edges(&[
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 4),
        (7, 8),
        (8, 9),
        (9, 10),
        (10, 7),
    ]);
    let lines = separate_lines(&e);
    let mut expected = e.clone();
    expected.sort_unstable();
    assert_eq!(covered_edges(&lines), expected);

    let degree = |v: usize| e.iter().filter(|x| x.contains(v)).count();
    for line in &lines {
        assert!(line.len() >= 2);
        for &v in &line[1..line.len() - 1] {
            assert_eq!(degree(v), 2, "interior vertex {v} of {line:?}");
        }
    }
}

#[test]
fn test_empty_graph() {
    assert!(separate_lines(&[]).is_empty());
}
