//! Terminal algorithms: consumers that drive a ranger and fold a result.
//!
//! Terminals never ask for an early stop themselves; upstream combinators
//! (such as [`take`](crate::ops::take)) may still end the traversal early
//! internally.

use std::ops::AddAssign;

use crate::cursor::{Cursor, CursorMut};
use crate::ranger::{ItemOf, Ranger};

/// Fold all remaining elements of `ranger` into `init` with `+=`.
///
/// ```
/// use rangeflow::{accumulate, all, filter};
///
/// let data = [1, 2, 3, 4];
/// let odd_total = accumulate(filter(|x: &i32| x % 2 == 1, all(&data)), 0);
/// assert_eq!(odd_total, 4);
/// ```
pub fn accumulate<R, T>(mut ranger: R, init: T) -> T
where
    R: Ranger,
    T: AddAssign<ItemOf<R>>,
{
    let mut acc = init;
    ranger.drive(&mut |p: &R::Cursor| {
        acc += p.get();
        true
    });
    acc
}

/// Cumulative sum: fold like [`accumulate`], writing the running total back
/// through each cursor into the source.
///
/// Requires a pipeline whose cursors support write-through assignment (see
/// [`all_mut`](crate::source::all_mut) and friends).
///
/// ```
/// use rangeflow::{partial_sum, skip_first_mut};
///
/// let mut data = [1, 2, 3, 4];
/// let total = partial_sum(skip_first_mut(&mut data), 1);
/// assert_eq!(total, 10);
/// assert_eq!(data, [1, 3, 6, 10]);
/// ```
pub fn partial_sum<R>(mut ranger: R, init: ItemOf<R>) -> ItemOf<R>
where
    R: Ranger,
    R::Cursor: CursorMut,
    ItemOf<R>: AddAssign + Clone,
{
    let mut acc = init;
    ranger.drive(&mut |p: &R::Cursor| {
        acc += p.get();
        p.set(acc.clone());
        true
    });
    acc
}
