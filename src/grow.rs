/**
 * TrajSim
 * Copyright (C) 2026 The trajsim developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::ops::Index;
use std::slice;
use std::slice::SliceIndex;

use crate::error::{Error, Result};

/// Append-only container with geometric capacity growth. Callers never pre-size it;
/// capacity doubles whenever an append hits the current allocation, so appends are
/// amortized O(1) and capacity stays a power-of-two multiple of the initial capacity.
///
/// The element type is fixed by the type parameter, reads and iteration only ever
/// see the logical prefix `[0, len)`.
pub struct GrowVec<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> GrowVec<T> {

    /// An empty vector with room for `initial_capacity` elements. A capacity of
    /// zero is coerced to one so that the first doubling has something to double.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(1);

        GrowVec {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.values.len() == self.capacity {
            self.capacity *= 2;
            let additional = self.capacity - self.values.len();
            self.values.reserve_exact(additional);
        }

        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logical capacity, always `initial * 2^m` for some `m >= 0`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fresh iterator over the elements appended so far, in insertion order.
    pub fn iter(&self) -> slice::Iter<T> {
        self.values.iter()
    }

    /// Read-only view of the logical contents, e.g. for bulk numeric reads.
    /// Never includes slack between the current length and the capacity.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Two-dimensional companion to [`GrowVec`]: the first axis grows by doubling,
/// the per-row width is fixed at construction. Rows live contiguously in one
/// flat allocation.
pub struct GrowMatrix<T> {
    values: Vec<T>,
    row_width: usize,
    capacity_rows: usize,
}

impl<T> GrowMatrix<T> {

    /// An empty matrix for rows of exactly `row_width` elements. As with
    /// [`GrowVec::with_capacity`], an initial row capacity of zero is coerced to one.
    ///
    /// Panics if `row_width` is zero, a row shape is not something that can
    /// grow into existence later.
    pub fn with_shape(initial_rows: usize, row_width: usize) -> Self {
        assert!(row_width > 0, "row width must be positive");

        let capacity_rows = initial_rows.max(1);

        GrowMatrix {
            values: Vec::with_capacity(capacity_rows * row_width),
            row_width,
            capacity_rows,
        }
    }

    /// Appends one row. Fails with [`Error::ShapeMismatch`] when the row does
    /// not have the width fixed at construction, nothing is written in that case.
    pub fn push_row(&mut self, row: &[T]) -> Result<()>
        where T: Clone {

        if row.len() != self.row_width {
            return Err(Error::ShapeMismatch {
                expected: self.row_width,
                actual: row.len(),
            });
        }

        if self.num_rows() == self.capacity_rows {
            self.capacity_rows *= 2;
            let additional = self.capacity_rows * self.row_width - self.values.len();
            self.values.reserve_exact(additional);
        }

        self.values.extend_from_slice(row);

        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.values.len() / self.row_width
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn capacity_rows(&self) -> usize {
        self.capacity_rows
    }

    pub fn row(&self, index: usize) -> &[T] {
        let start = index * self.row_width;
        &self.values[start..start + self.row_width]
    }

    pub fn rows(&self) -> slice::ChunksExact<T> {
        self.values.chunks_exact(self.row_width)
    }
}
