// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A table storing all the cells of a rectangle of subproblems.

use std::ops::Index;

use crate::{Cell, Error, SubproblemTable};

/// A dense, row-major table of `rows x columns` cells. It is meant to be filled
/// row after row, each row by increasing capacity (which is the order of a
/// bottom-up evaluation). Cells are appended as they are set: each row has its
/// own storage and no cell is ever overwritten.
#[derive(Debug, Clone)]
pub struct DenseTable {
    rows   : usize,
    columns: usize,
    cells  : Vec<Cell>,
}

impl DenseTable {
    /// Allocates a table for `rows x columns` cells. This fails with
    /// `Error::TableTooLarge` instead of aborting when the memory for the
    /// table cannot be obtained.
    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self, Error> {
        let too_large = || Error::TableTooLarge { rows, columns };
        let len = rows.checked_mul(columns).ok_or_else(too_large)?;

        let mut cells = vec![];
        cells.try_reserve_exact(len).map_err(|_| too_large())?;

        Ok(DenseTable { rows, columns, cells })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    #[inline]
    fn offset(&self, item: usize, capacity: usize) -> usize {
        item * self.columns + capacity
    }
}

impl SubproblemTable for DenseTable {
    #[inline]
    fn get(&self, item: usize, capacity: usize) -> Option<&Cell> {
        if item >= self.rows || capacity >= self.columns {
            None
        } else {
            self.cells.get(self.offset(item, capacity))
        }
    }
    #[inline]
    fn set(&mut self, item: usize, capacity: usize, cell: Cell) {
        debug_assert!(item < self.rows && capacity < self.columns);
        debug_assert_eq!(self.cells.len(), self.offset(item, capacity),
            "cells must be set once, row by row, by increasing capacity");
        self.cells.push(cell);
    }
    fn len(&self) -> usize {
        self.cells.len()
    }
}

impl Index<(usize, usize)> for DenseTable {
    type Output = Cell;

    #[inline]
    fn index(&self, (item, capacity): (usize, usize)) -> &Cell {
        match self.get(item, capacity) {
            Some(cell) => cell,
            None => panic!("subproblem ({item}, {capacity}) has not been computed"),
        }
    }
}
