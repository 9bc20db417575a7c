//! Fluent pipeline surface and extension points.
//!
//! [`RangerExt`] puts the combinators and terminals on every ranger as
//! chainable methods, so pipelines read top-to-bottom:
//!
//! ```
//! use rangeflow::{RangerExt, all};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let total = all(&data)
//!     .filter(|x: &i32| x % 2 == 0)
//!     .map(|x: &i32| x * 10)
//!     .take(2)
//!     .accumulate(0);
//! assert_eq!(total, 60); // 20 + 40
//! ```
//!
//! [`CompositeRanger`] packages a reusable sequence of stages into a single,
//! named component that can be applied to any compatible input with
//! [`RangerExt::apply`].

use std::ops::AddAssign;

use crate::cursor::Cursor;
use crate::iter::RangerIter;
use crate::ops::{
    Adapt, AllAdaption, Concat, Enumerate, Filter, Join, RangerAdaption, Take, Transform, Unique,
    Zip2, concat, enumerate, filter, join, join_all, take, transform, unique, zip2,
};
use crate::ranger::{ItemOf, Ranger};
use crate::terminal::accumulate;

/// A reusable, packaged sequence of pipeline stages.
///
/// Implement this to bundle several combinators into one named component.
/// Because combinator types are concrete, `Output` is spelled with function
/// pointers rather than closures:
///
/// ```
/// use rangeflow::{CompositeRanger, Filter, RangerExt, Slice, Transform, all};
///
/// struct OddSquares;
///
/// impl<'a> CompositeRanger<Slice<'a, i32>> for OddSquares {
///     type Output = Transform<fn(&'a i32) -> i32, Filter<fn(&'a i32) -> bool, Slice<'a, i32>>>;
///
///     fn expand(&self, input: Slice<'a, i32>) -> Self::Output {
///         fn is_odd(x: &i32) -> bool {
///             x % 2 == 1
///         }
///         fn square(x: &i32) -> i32 {
///             x * x
///         }
///         input
///             .filter(is_odd as fn(&'a i32) -> bool)
///             .map(square as fn(&'a i32) -> i32)
///     }
/// }
///
/// let data = [1, 2, 3];
/// assert_eq!(all(&data).apply(&OddSquares).to_vec(), vec![1, 9]);
/// ```
pub trait CompositeRanger<R: Ranger> {
    type Output: Ranger;

    /// Expand this composite into its underlying stages.
    fn expand(&self, input: R) -> Self::Output;
}

/// Chainable combinators and terminals for every ranger.
pub trait RangerExt: Ranger + Sized {
    /// Keep only elements satisfying `pred`. See [`filter`].
    fn filter<P>(self, pred: P) -> Filter<P, Self>
    where
        P: FnMut(ItemOf<Self>) -> bool,
    {
        filter(pred, self)
    }

    /// Map elements through `f`, lazily. See [`transform`].
    fn map<F, O>(self, f: F) -> Transform<F, Self>
    where
        F: Fn(ItemOf<Self>) -> O,
    {
        transform(f, self)
    }

    /// Deliver at most `n` elements, ever. See [`take`].
    fn take(self, n: usize) -> Take<Self> {
        take(n, self)
    }

    /// Collapse runs of consecutive equal elements. See [`unique`].
    fn unique(self) -> Unique<Self>
    where
        ItemOf<Self>: PartialEq,
    {
        unique(self)
    }

    /// Pair each element with a zero-based sequence number. See [`enumerate`].
    fn enumerate(self) -> Enumerate<Self> {
        enumerate(self)
    }

    /// Deliver all of `self`, then all of `other`. See [`concat`].
    fn concat<R2>(self, other: R2) -> Concat<Self, R2>
    where
        R2: Ranger<Cursor = Self::Cursor>,
    {
        concat(self, other)
    }

    /// Synchronize positionally with `other`. See [`zip2`].
    fn zip<R2: Ranger>(self, other: R2) -> Zip2<Self, R2> {
        zip2(self, other)
    }

    /// Flatten elements that already are rangers. See [`join`].
    fn flatten(self) -> Join<Self, RangerAdaption>
    where
        RangerAdaption: Adapt<ItemOf<Self>>,
    {
        join(self)
    }

    /// Flatten elements that are nested sequences. See [`join_all`].
    fn flatten_all(self) -> Join<Self, AllAdaption>
    where
        AllAdaption: Adapt<ItemOf<Self>>,
    {
        join_all(self)
    }

    /// Apply a packaged [`CompositeRanger`] stage.
    fn apply<C>(self, composite: &C) -> C::Output
    where
        C: CompositeRanger<Self>,
    {
        composite.expand(self)
    }

    /// Fold every remaining element into `init`. See
    /// [`accumulate`](crate::terminal::accumulate).
    fn accumulate<T>(self, init: T) -> T
    where
        T: AddAssign<ItemOf<Self>>,
    {
        accumulate(self, init)
    }

    /// Drain the pipeline into a vector of dereferenced elements.
    fn to_vec(mut self) -> Vec<ItemOf<Self>> {
        let mut out = Vec::new();
        self.drive(&mut |p: &Self::Cursor| {
            out.push(p.get());
            true
        });
        out
    }

    /// Drive to completion, calling `f` on each dereferenced element.
    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(ItemOf<Self>),
    {
        self.drive(&mut |p: &Self::Cursor| {
            f(p.get());
            true
        });
    }

    /// Count the remaining elements.
    fn count(mut self) -> usize {
        let mut n = 0;
        self.drive(&mut |_: &Self::Cursor| {
            n += 1;
            true
        });
        n
    }

    /// Wrap into a conventional pull-based [`Iterator`]. See
    /// [`RangerIter`](crate::iter::RangerIter).
    fn into_pull_iter(self) -> RangerIter<Self> {
        RangerIter::new(self)
    }
}

impl<R: Ranger> RangerExt for R {}
