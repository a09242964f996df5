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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::{fmt, ops::Index};

use fxhash::FxHashSet;

// ----------------------------------------------------------------------------
// --- ITEM ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes the identity of an item. It is chosen by whoever builds
/// the catalog and must be unique within that catalog. It does not need to
/// match the position of the item in the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemId(pub usize);
impl ItemId {
    #[inline]
    /// This function returns the id (numeric value) of the item.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_dp::ItemId;
    /// assert_eq!(0, ItemId(0).id());
    /// assert_eq!(7, ItemId(7).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}
impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that may or may not be put in the sack. Items are immutable values:
/// once created they are only ever read by the solvers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item {
    pub id   : ItemId,
    pub size : isize,
    pub value: isize,
}
impl Item {
    pub fn new(id: usize, size: isize, value: isize) -> Self {
        Item { id: ItemId(id), size, value }
    }
    /// The value per unit of size of this item. An item of size zero is
    /// infinitely profitable when it is worth something, and worth nothing
    /// otherwise. This way, the ratio is never NaN.
    pub fn ratio(&self) -> f64 {
        if self.size == 0 {
            if self.value > 0 { f64::INFINITY } else { 0.0 }
        } else {
            self.value as f64 / self.size as f64
        }
    }
}

// ----------------------------------------------------------------------------
// --- CATALOG ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The ordered sequence of items a solver chooses from. The order of the items
/// is the input order; it defines the indexing of the DP subproblems but has
/// no impact on the optimal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

/// What the solvers learn when they check a catalog against some capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    /// The (validated) capacity of the sack
    pub capacity: usize,
    /// The sum of the sizes of all items in the catalog
    pub total_size: usize,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }
    pub fn push(&mut self, item: Item) {
        self.items.push(item)
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
    /// Looks an item up by its identity
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks that this catalog and the given capacity form a valid knapsack
    /// instance. That is: the capacity is non negative, all items have a non
    /// negative size and value, no identity is used twice and the sums of all
    /// sizes and values fit in an `isize`.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_dp::*;
    /// let catalog = Catalog::new(vec![Item::new(1, 3, 4), Item::new(2, 4, 5)]);
    /// let bounds  = catalog.check(5).unwrap();
    /// assert_eq!(5, bounds.capacity);
    /// assert_eq!(7, bounds.total_size);
    ///
    /// assert!(catalog.check(-1).is_err());
    /// ```
    pub fn check(&self, capacity: isize) -> Result<Bounds, InvalidInput> {
        if capacity < 0 {
            return Err(InvalidInput::NegativeCapacity(capacity));
        }

        let mut seen = FxHashSet::default();
        let mut total_size: isize = 0;
        let mut total_value: isize = 0;
        for item in self.items.iter() {
            if item.size < 0 {
                return Err(InvalidInput::NegativeSize { item: item.id, size: item.size });
            }
            if item.value < 0 {
                return Err(InvalidInput::NegativeValue { item: item.id, value: item.value });
            }
            if !seen.insert(item.id) {
                return Err(InvalidInput::DuplicateItem(item.id));
            }
            total_size = total_size.checked_add(item.size)
                .ok_or(InvalidInput::Overflow("size"))?;
            total_value = total_value.checked_add(item.value)
                .ok_or(InvalidInput::Overflow("value"))?;
        }

        Ok(Bounds { capacity: capacity as usize, total_size: total_size as usize })
    }
}
impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}
impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Catalog::new(items)
    }
}
impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}
impl <'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// What has been decided about the last item of a subproblem.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Decision {
    /// The item is not part of the best solution of the subproblem
    #[default]
    LeaveItOut,
    /// The item is part of the best solution of the subproblem
    TakeIt,
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The result of a solve: the achieved value, the consumed size and the items
/// that were put in the sack.
///
/// The exact solvers report the chosen items in catalog order. A solution is
/// a plain value: extending it produces a new solution and never affects the
/// records it has been derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    /// The sum of the values of the chosen items
    pub value : isize,
    /// The sum of the sizes of the chosen items
    pub size  : isize,
    /// The identities of the chosen items
    pub chosen: Vec<ItemId>,
}
impl Solution {
    /// The solution of the base case: nothing in the sack
    pub fn empty() -> Self {
        Self::default()
    }
    /// Summarizes a selection of items (typically the one returned by a
    /// greedy approximation).
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_dp::*;
    /// let items = [Item::new(1, 10, 60), Item::new(2, 20, 100)];
    /// let sol   = Solution::from_items(&items);
    /// assert_eq!(160, sol.value);
    /// assert_eq!(30, sol.size);
    /// assert_eq!(vec![ItemId(1), ItemId(2)], sol.chosen);
    /// ```
    pub fn from_items<'a, I>(items: I) -> Self
    where I: IntoIterator<Item = &'a Item> {
        items.into_iter().fold(Self::empty(), Self::including)
    }
    /// Returns the solution obtained by adding `item` to this one.
    pub fn including(mut self, item: &Item) -> Self {
        self.value += item.value;
        self.size  += item.size;
        self.chosen.push(item.id);
        self
    }
    /// Returns true iff the given item was put in the sack.
    pub fn contains(&self, id: ItemId) -> bool {
        self.chosen.contains(&id)
    }
    /// Returns true iff this solution is consistent with the given catalog
    /// and fits in the given capacity. That is: each chosen item exists and
    /// is only chosen once, the value and size of the solution are the sums
    /// of the values and sizes of its items, and the size does not exceed
    /// the capacity.
    pub fn is_feasible(&self, catalog: &Catalog, capacity: isize) -> bool {
        let mut seen  = FxHashSet::default();
        let mut size  = 0;
        let mut value = 0;
        for id in self.chosen.iter().copied() {
            if !seen.insert(id) {
                return false;
            }
            match catalog.find(id) {
                None       => return false,
                Some(item) => {
                    size  += item.size;
                    value += item.value;
                }
            }
        }
        size == self.size && value == self.value && self.size <= capacity
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The reasons why a knapsack instance can be rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The capacity of the sack is below zero
    #[error("negative capacity {0}")]
    NegativeCapacity(isize),
    /// Some item has a size below zero
    #[error("item {item} has a negative size ({size})")]
    NegativeSize { item: ItemId, size: isize },
    /// Some item has a value below zero
    #[error("item {item} has a negative value ({value})")]
    NegativeValue { item: ItemId, value: isize },
    /// Two items of the catalog share the same identity
    #[error("item {0} appears more than once in the catalog")]
    DuplicateItem(ItemId),
    /// The total size or value of the catalog does not fit in an isize
    #[error("the total {0} of the catalog overflows")]
    Overflow(&'static str),
}

/// This enumeration groups the kinds of errors a solver may report. A solver
/// that fails never produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The instance is not a valid knapsack instance
    #[error("invalid input")]
    InvalidInput(#[from] InvalidInput),
    /// The subproblem table could not be allocated
    #[error("cannot allocate a table of {rows} x {columns} subproblems")]
    TableTooLarge { rows: usize, columns: usize },
    /// The configured cutoff criterion was met before the solve completed
    #[error("the cutoff criterion was met before the solve completed")]
    CutoffOccurred,
    /// The catalog is too large for the solver at hand
    #[error("the catalog holds {count} items, the solver accepts at most {limit}")]
    TooManyItems { count: usize, limit: usize },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_item {
    use crate::{Item, ItemId};

    #[test]
    fn test_item_id() {
        assert_eq!(0, ItemId(0).id());
        assert_eq!(1, ItemId(1).id());
        assert_eq!("42", ItemId(42).to_string());
    }
    #[test]
    fn the_ratio_is_the_value_per_unit_of_size() {
        assert_eq!(6.0, Item::new(1, 10, 60).ratio());
        assert_eq!(0.5, Item::new(1, 2, 1).ratio());
    }
    #[test]
    fn a_zero_size_item_worth_something_has_an_infinite_ratio() {
        assert_eq!(f64::INFINITY, Item::new(1, 0, 3).ratio());
    }
    #[test]
    fn a_zero_size_item_worth_nothing_has_a_null_ratio() {
        let ratio = Item::new(1, 0, 0).ratio();
        assert!(!ratio.is_nan());
        assert_eq!(0.0, ratio);
    }
}


#[cfg(test)]
mod test_solution {
    use crate::{Catalog, Item, ItemId, Solution};

    #[test]
    fn the_empty_solution_has_no_value_no_size_and_no_item() {
        let s = Solution::empty();
        assert_eq!(0, s.value);
        assert_eq!(0, s.size);
        assert!(s.chosen.is_empty());
    }
    #[test]
    fn including_an_item_leaves_the_original_untouched() {
        let base = Solution::empty().including(&Item::new(1, 2, 3));
        let ext  = base.clone().including(&Item::new(2, 4, 5));

        assert_eq!(3, base.value);
        assert_eq!(vec![ItemId(1)], base.chosen);
        assert_eq!(8, ext.value);
        assert_eq!(6, ext.size);
        assert_eq!(vec![ItemId(1), ItemId(2)], ext.chosen);
    }
    #[test]
    fn contains_tells_whether_an_item_was_chosen() {
        let s = Solution::from_items(&[Item::new(4, 2, 3)]);
        assert!(s.contains(ItemId(4)));
        assert!(!s.contains(ItemId(3)));
    }
    #[test]
    fn a_consistent_solution_that_fits_is_feasible() {
        let c: Catalog = vec![Item::new(1, 3, 4), Item::new(2, 4, 5)].into();
        let s = Solution::from_items(c.iter());
        assert!(s.is_feasible(&c, 7));
        assert!(!s.is_feasible(&c, 6));
    }
    #[test]
    fn a_solution_with_a_wrong_value_is_not_feasible() {
        let c: Catalog = vec![Item::new(1, 3, 4)].into();
        let s = Solution { value: 5, size: 3, chosen: vec![ItemId(1)] };
        assert!(!s.is_feasible(&c, 7));
    }
    #[test]
    fn a_solution_choosing_an_unknown_or_repeated_item_is_not_feasible() {
        let c: Catalog = vec![Item::new(1, 3, 4)].into();
        let unknown  = Solution { value: 0, size: 0, chosen: vec![ItemId(9)] };
        let repeated = Solution { value: 8, size: 6, chosen: vec![ItemId(1), ItemId(1)] };
        assert!(!unknown.is_feasible(&c, 7));
        assert!(!repeated.is_feasible(&c, 7));
    }
}

#[cfg(test)]
mod test_error {
    use crate::{Error, InvalidInput};

    #[test]
    fn the_cause_of_an_invalid_input_is_reported_once() {
        let err   = Error::from(InvalidInput::NegativeCapacity(-5));
        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!("invalid input: negative capacity -5", chain);
    }
    #[test]
    fn the_cause_of_an_invalid_input_is_its_source() {
        let err = Error::from(InvalidInput::NegativeCapacity(-5));
        let src = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(Some("negative capacity -5".to_string()), src);
    }
}
