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

use std::ops::{Add, Sub};

use crate::geometry::Vector2;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_vals(vals: [T; 2]) -> Self {
        Self {
            x: vals[0],
            y: vals[1],
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        let half = T::half();
        Self {
            x: (self.x + other.x) * half,
            y: (self.y + other.y) * half,
        }
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        (other - self).norm2()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `f64` image used by the spatial indices.
    pub fn to_array(&self) -> [f64; 2] {
        [self.x.as_f64(), self.y.as_f64()]
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point2<T>> for &'a Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: &'b Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        &self - &rhs
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector2<T>> for &'a Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: &'b Vector2<T>) -> Point2<T> {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> From<[T; 2]> for Point2<T> {
    fn from(vals: [T; 2]) -> Self {
        Self::from_vals(vals)
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
