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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TopoError>;

/// Failures raised by the proximity and polygonization pipelines.
///
/// None of them is recoverable inside the crate: the caller has to supply
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopoError {
    /// Too few distinct points, duplicated or non-finite coordinates, or a
    /// fully collinear point set.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// An edge references a missing point or itself, or a vertex carries two
    /// lines the rotation system cannot order.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Face tying or hole assignment found the graph is not a valid planar
    /// subdivision.
    #[error("topology inconsistency: {0}")]
    TopologyInconsistency(String),
}

impl TopoError {
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        TopoError::DegenerateInput(msg.into())
    }

    pub(crate) fn invalid_graph(msg: impl Into<String>) -> Self {
        TopoError::InvalidGraph(msg.into())
    }

    pub(crate) fn inconsistent(msg: impl Into<String>) -> Self {
        TopoError::TopologyInconsistency(msg.into())
    }
}
