//! One-level flattening of nested sources.
//!
//! Each element of the outer ranger is adapted into a sub-ranger and drained
//! before the next outer element is touched. The adaptation is a pluggable
//! strategy: [`RangerAdaption`] for outer elements that already are rangers,
//! [`AllAdaption`] for outer elements that are raw sequences (lifted via
//! [`all`](crate::source::all)).
//!
//! A sub-ranger stopped mid-way is moved into the combinator and resumed
//! first on the next invocation, preserving its own resume state.

use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger, Sink};
use crate::source::{Slice, all};

/// Strategy turning an outer element into a sub-ranger.
pub trait Adapt<T> {
    type Sub: Ranger;

    fn adapt(item: T) -> Self::Sub;
}

/// Outer elements already are rangers; adapt by cloning them out of the
/// source, resume state and all.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangerAdaption;

impl<'a, R> Adapt<&'a R> for RangerAdaption
where
    R: Ranger + Clone,
{
    type Sub = R;

    fn adapt(item: &'a R) -> R {
        item.clone()
    }
}

/// Outer elements are nested sequences; adapt by lifting each one with
/// [`all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AllAdaption;

impl<'a, T> Adapt<&'a Vec<T>> for AllAdaption {
    type Sub = Slice<'a, T>;

    fn adapt(item: &'a Vec<T>) -> Slice<'a, T> {
        all(item)
    }
}

impl<'a, T> Adapt<&'a [T]> for AllAdaption {
    type Sub = Slice<'a, T>;

    fn adapt(item: &'a [T]) -> Slice<'a, T> {
        all(item)
    }
}

/// Ranger flattening one level of nesting via an [`Adapt`] strategy.
pub struct Join<R, A>
where
    R: Ranger,
    A: Adapt<ItemOf<R>>,
{
    outer: R,
    active: Option<A::Sub>,
    _adaption: PhantomData<A>,
}

impl<R, A> Clone for Join<R, A>
where
    R: Ranger + Clone,
    A: Adapt<ItemOf<R>>,
    A::Sub: Clone,
{
    fn clone(&self) -> Self {
        Join {
            outer: self.outer.clone(),
            active: self.active.clone(),
            _adaption: PhantomData,
        }
    }
}

/// Flatten with an explicit adaptation strategy.
pub fn join_with<A, R>(outer: R) -> Join<R, A>
where
    R: Ranger,
    A: Adapt<ItemOf<R>>,
{
    Join {
        outer,
        active: None,
        _adaption: PhantomData,
    }
}

/// Flatten a ranger whose elements already are rangers.
///
/// ```
/// use rangeflow::{all, join, RangerExt};
///
/// let (a, b) = ([1, 2], [3]);
/// let parts = vec![all(&a), all(&b)];
/// assert_eq!(join(all(&parts)).to_vec(), vec![&1, &2, &3]);
/// ```
pub fn join<R>(outer: R) -> Join<R, RangerAdaption>
where
    R: Ranger,
    RangerAdaption: Adapt<ItemOf<R>>,
{
    join_with(outer)
}

/// Flatten a ranger whose elements are nested sequences.
///
/// ```
/// use rangeflow::{all, join_all, RangerExt};
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(join_all(all(&nested)).to_vec(), vec![&1, &2, &3]);
/// ```
pub fn join_all<R>(outer: R) -> Join<R, AllAdaption>
where
    R: Ranger,
    AllAdaption: Adapt<ItemOf<R>>,
{
    join_with(outer)
}

impl<R, A> Ranger for Join<R, A>
where
    R: Ranger,
    A: Adapt<ItemOf<R>>,
{
    type Cursor = <A::Sub as Ranger>::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let Self { outer, active, .. } = self;

        if let Some(sub) = active.as_mut() {
            if !sub.drive(sink) {
                return false;
            }
            *active = None;
        }

        outer.drive(&mut |p: &R::Cursor| {
            let mut sub = A::adapt(p.get());
            if sub.drive(sink) {
                true
            } else {
                // Keep the half-drained sub-ranger for the next invocation.
                *active = Some(sub);
                false
            }
        })
    }
}
