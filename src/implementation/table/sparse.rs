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

//! A table storing only the subproblems that have actually been reached.

use std::ops::Index;

use fxhash::FxHashMap;

use crate::{Cell, SubproblemTable};

/// A sparse table backed by a hashmap. This is the storage of choice for a
/// top-down evaluation: it makes no assumption on the order in which the
/// cells are computed and only costs memory for the cells that are reached.
#[derive(Debug, Clone, Default)]
pub struct SparseTable {
    cells: FxHashMap<(usize, usize), Cell>,
}

impl SparseTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubproblemTable for SparseTable {
    #[inline]
    fn get(&self, item: usize, capacity: usize) -> Option<&Cell> {
        self.cells.get(&(item, capacity))
    }
    #[inline]
    fn set(&mut self, item: usize, capacity: usize, cell: Cell) {
        debug_assert!(!self.cells.contains_key(&(item, capacity)),
            "subproblem ({item}, {capacity}) is computed twice");
        // the first write wins
        self.cells.entry((item, capacity)).or_insert(cell);
    }
    fn len(&self) -> usize {
        self.cells.len()
    }
}

impl Index<(usize, usize)> for SparseTable {
    type Output = Cell;

    #[inline]
    fn index(&self, (item, capacity): (usize, usize)) -> &Cell {
        match self.get(item, capacity) {
            Some(cell) => cell,
            None => panic!("subproblem ({item}, {capacity}) has not been computed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, Cell, Decision, Item, ItemId, SparseTable, SubproblemTable};

    fn leave(value: isize) -> Cell {
        Cell { value, decision: Decision::LeaveItOut }
    }
    fn take(value: isize) -> Cell {
        Cell { value, decision: Decision::TakeIt }
    }

    #[test]
    fn by_default_it_is_empty() {
        let table = SparseTable::new();
        assert!(table.is_empty());
        assert_eq!(None, table.get(3, 7));
    }
    #[test]
    fn cells_can_be_set_in_any_order() {
        let mut table = SparseTable::new();
        table.set(4, 12, take(3));
        table.set(0, 1, leave(0));
        table.set(2, 5, take(8));

        assert_eq!(3, table.len());
        assert_eq!(Some(&take(3)), table.get(4, 12));
        assert_eq!(leave(0), table[(0, 1)]);
        assert_eq!(None, table.get(2, 4));
    }
    #[test]
    #[should_panic]
    fn indexing_a_cell_that_was_not_computed_panics() {
        let table = SparseTable::new();
        let _ = table[(1, 1)];
    }
    #[test]
    fn the_solution_is_rebuilt_from_the_decisions() {
        // items (id, size, value): (1, 2, 3) and (2, 3, 4) with a capacity of 5
        let catalog: Catalog = vec![Item::new(1, 2, 3), Item::new(2, 3, 4)].into();
        let mut table = SparseTable::new();
        table.set(2, 5, take(7));
        table.set(1, 2, take(3));

        let sol = table.solution(&catalog, 5);
        assert_eq!(7, sol.value);
        assert_eq!(5, sol.size);
        assert_eq!(vec![ItemId(1), ItemId(2)], sol.chosen);
    }
    #[test]
    fn the_solution_skips_the_items_that_were_left_out() {
        let catalog: Catalog = vec![Item::new(1, 2, 3), Item::new(2, 3, 4)].into();
        let mut table = SparseTable::new();
        table.set(2, 2, leave(3));
        table.set(1, 2, take(3));

        let sol = table.solution(&catalog, 2);
        assert_eq!(3, sol.value);
        assert_eq!(2, sol.size);
        assert_eq!(vec![ItemId(1)], sol.chosen);
    }
    #[test]
    fn the_solution_of_an_empty_catalog_is_empty() {
        let table = SparseTable::new();
        let sol = table.solution(&Catalog::default(), 10);
        assert_eq!(0, sol.value);
        assert!(sol.chosen.is_empty());
    }
}
