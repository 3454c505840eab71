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

//! Sparse proximity graphs over 2D point sets and polygon reconstruction
//! from planar edge graphs.
//!
//! Two pipelines live here:
//!
//! * [`operations::proximity`] filters a Delaunay triangulation down to its
//!   Gabriel graph and then to its relative neighborhood graph.
//! * [`topology`] turns any undirected planar graph into closed polygons with
//!   nested holes and a polygon adjacency graph.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;
pub mod topology;

pub use error::{Result, TopoError};
pub use geometry::{Edge, Point2};
pub use operations::proximity::{delaunay_graph, gabriel_graph, relative_neighborhood_graph};
pub use topology::{Polygonization, obtain_polygons};
