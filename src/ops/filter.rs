//! Predicate filtering.

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger, Sink};

/// Ranger that forwards only elements satisfying a predicate.
///
/// Stateless beyond its upstream: filtering wraps the downstream sink, and a
/// rejected element counts as "keep going" without being forwarded.
#[derive(Clone, Debug)]
pub struct Filter<P, R> {
    pred: P,
    ranger: R,
}

/// Keep only the elements of `ranger` for which `pred` holds.
///
/// ```
/// use rangeflow::{all, filter, RangerExt};
///
/// let data = [1, 2, 3, 4];
/// let odds = filter(|x: &i32| x % 2 == 1, all(&data));
/// assert_eq!(odds.accumulate(0), 4);
/// ```
pub fn filter<P, R>(pred: P, ranger: R) -> Filter<P, R>
where
    R: Ranger,
    P: FnMut(ItemOf<R>) -> bool,
{
    Filter { pred, ranger }
}

impl<P, R> Ranger for Filter<P, R>
where
    R: Ranger,
    P: FnMut(ItemOf<R>) -> bool,
{
    type Cursor = R::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let pred = &mut self.pred;
        self.ranger.drive(&mut |p: &R::Cursor| {
            if pred(p.get()) { sink.accept(p) } else { true }
        })
    }
}
