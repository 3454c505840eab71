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

use planar_topo::geometry::ring::{RingSide, classify_point, ring_contains_ring, signed_area};
use planar_topo::geometry::{Aabb, Edge, Point2, PointIndex, RingIndex, Vector2, dedup_edges};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn unit_square() -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ]
}

#[test]
fn test_angle_to_sweeps_from_reverse() {
    let reference = Vector2::new(0.0_f64, 1.0);
    let cases = [
        ((0.0, -1.0), 0.0),
        ((1.0, -1.0), 5.497_787_143_782_138),
        ((1.0, 0.0), 4.712_388_980_384_69),
        ((1.0, 1.0), 3.926_990_816_987_241_5),
        ((0.0, 1.0), std::f64::consts::PI),
        ((-1.0, 1.0), 2.356_194_490_192_345),
        ((-1.0, 0.0), 1.570_796_326_794_896_6),
        ((-1.0, -1.0), 0.785_398_163_397_448_3),
    ];
    for ((x, y), expected) in cases {
        let angle = reference.angle_to(&Vector2::new(x, y));
        assert!(approx(angle, expected), "({x}, {y}): {angle} != {expected}");
        assert!((0.0..std::f64::consts::TAU).contains(&angle));
    }
}

#[test]
fn test_angle_to_f32() {
    let angle = Vector2::new(1.0_f32, 0.0).angle_to(&Vector2::new(0.0, 1.0));
    assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_vector_products() {
    let a = Vector2::new(2.0_f64, 0.0);
    let b = Vector2::new(0.0, 3.0);
    assert_eq!(a.dot(&b), 0.0);
    assert_eq!(a.cross(&b), 6.0);
    assert_eq!(b.cross(&a), -6.0);
    assert_eq!(a.norm(), 2.0);
    assert!(Vector2::new(0.0_f64, 0.0).is_zero());
    let n = -a;
    assert_eq!((n.x, n.y), (-2.0, 0.0));
}

#[test]
fn test_point_ops() {
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(3.0, 4.0);
    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(a.distance_squared_to(&b), 25.0);
    assert_eq!(a.midpoint(&b), Point2::new(1.5, 2.0));
    let d = &b - &a;
    assert_eq!((d.x, d.y), (3.0, 4.0));
    assert_eq!(Point2::from([1.0_f64, 2.0]), Point2::from((1.0, 2.0)));
    assert!(!Point2::new(f64::NAN, 0.0).is_finite());
}

#[test]
fn test_edge_is_canonical() {
    assert_eq!(Edge::new(3, 1), Edge(1, 3));
    assert_eq!(Edge::from((5, 2)), Edge::from([2, 5]));
    let e = Edge::new(4, 7);
    assert!(e.contains(4) && e.contains(7) && !e.contains(5));
    assert_eq!(e.other(4), 7);
    assert_eq!(e.other(7), 4);
    assert!(Edge::new(2, 2).is_loop());
}

#[test]
fn test_dedup_edges_keeps_first_occurrence() {
    let edges = dedup_edges([(2, 1), (0, 1), (1, 0), (1, 2), (3, 0)]);
    assert_eq!(edges, vec![Edge(1, 2), Edge(0, 1), Edge(0, 3)]);

    // Edges built from the public fields are reordered as well.
    let edges = dedup_edges([Edge(7, 0), Edge(0, 7), Edge(2, 1)]);
    assert_eq!(edges, vec![Edge(0, 7), Edge(1, 2)]);
}

#[test]
fn test_aabb() {
    let a = Aabb::from_points(&Point2::new(1.0_f64, 1.0), &Point2::new(0.0, 0.0));
    assert_eq!(*a.min(), Point2::new(0.0, 0.0));
    assert_eq!(*a.max(), Point2::new(1.0, 1.0));

    let b = Aabb::new(Point2::new(1.0, 0.0), Point2::new(2.0, 1.0));
    assert!(a.intersects(&b), "touching boxes intersect");
    let c = Aabb::new(Point2::new(1.5, 1.5), Point2::new(2.0, 2.0));
    assert!(!a.intersects(&c));

    let u = a.union(&c);
    assert!(u.contains_aabb(&a) && u.contains_aabb(&c));
    assert!(!a.contains_aabb(&u));
    assert_eq!(u.center(0), 1.0);

    let pts = unit_square();
    let e = Aabb::enclosing(pts.iter()).unwrap();
    assert_eq!(e, a);
    assert!(Aabb::enclosing(std::iter::empty::<&Point2<f64>>()).is_none());
}

#[test]
fn test_signed_area_orientation() {
    let pts = unit_square();
    assert!(approx(signed_area(&[0, 1, 2, 3], &pts), 1.0));
    assert!(approx(signed_area(&[0, 1, 2, 3, 0], &pts), 1.0));
    assert!(approx(signed_area(&[0, 3, 2, 1], &pts), -1.0));
    assert!(approx(signed_area(&[0, 1, 2], &pts), 0.5));
}

#[test]
fn test_classify_point() {
    let pts = unit_square();
    let ring = [0, 1, 2, 3];
    assert_eq!(classify_point(&ring, &pts, &Point2::new(0.5, 0.5)), RingSide::Inside);
    assert_eq!(classify_point(&ring, &pts, &Point2::new(1.5, 0.5)), RingSide::Outside);
    assert_eq!(classify_point(&ring, &pts, &Point2::new(1.0, 0.5)), RingSide::OnBoundary);
    assert_eq!(classify_point(&ring, &pts, &Point2::new(0.0, 0.0)), RingSide::OnBoundary);
    assert_eq!(classify_point(&[0, 3, 2, 1], &pts, &Point2::new(0.5, 0.5)), RingSide::Inside);
}

#[test]
fn test_ring_contains_ring() {
    let pts = vec![
        Point2::new(0.0_f64, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 4.0),
        Point2::new(0.0, 4.0),
        Point2::new(1.0, 1.0),
        Point2::new(3.0, 1.0),
        Point2::new(3.0, 3.0),
        Point2::new(1.0, 3.0),
        Point2::new(5.0, 1.0),
    ];
    let outer = [0, 1, 2, 3];
    let inner = [4, 5, 6, 7];
    assert!(ring_contains_ring(&outer, &inner, &pts));
    assert!(!ring_contains_ring(&inner, &outer, &pts));
    // Sharing a side still counts as long as one vertex is strictly inside.
    assert!(ring_contains_ring(&outer, &[0, 1, 6], &pts));
    assert!(!ring_contains_ring(&outer, &outer, &pts));
    assert!(!ring_contains_ring(&outer, &[4, 8, 6], &pts));
}

#[test]
fn test_point_index_radius_is_closed() {
    let pts = unit_square();
    let index = PointIndex::build(&pts);
    assert_eq!(index.len(), 4);
    assert!(!index.is_empty());
    assert!(PointIndex::build::<f64>(&[]).is_empty());
    assert_eq!(index.within_radius(&Point2::new(0.0, 0.0), 1.0), vec![0, 1, 3]);
    assert_eq!(index.within_radius(&Point2::new(0.0, 0.0), 0.5), vec![0]);
    assert!(index.within_radius(&Point2::new(5.0, 5.0), 1.0).is_empty());
}

#[test]
fn test_ring_index_queries() {
    let mut index = RingIndex::new();
    index.insert(0, &Aabb::new(Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0)));
    index.insert(1, &Aabb::new(Point2::new(20.0_f64, 0.0), Point2::new(30.0, 10.0)));
    let probe = Aabb::new(Point2::new(2.0_f64, 2.0), Point2::new(3.0, 3.0));
    assert_eq!(index.intersecting(&probe), vec![0]);

    let wide = Aabb::new(Point2::new(5.0_f64, 5.0), Point2::new(25.0, 6.0));
    assert_eq!(index.intersecting(&wide), vec![0, 1]);

    let bulk = RingIndex::bulk_load([
        (7, Aabb::new(Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0))),
        (3, Aabb::new(Point2::new(0.5_f64, 0.5), Point2::new(2.0, 2.0))),
    ]);
    assert_eq!(bulk.intersecting(&Aabb::new(Point2::new(0.75, 0.75), Point2::new(0.8, 0.8))), vec![3, 7]);
}
