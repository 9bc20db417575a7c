//! Run deduplication.
//!
//! [`unique`] delivers only the first element of each run of consecutive
//! equal elements, using the element type's own equality. The algorithm reads
//! one element ahead of what it has delivered: the first upstream element is
//! pulled (not delivered) to bootstrap the comparison base, and from then on
//! each upstream element is compared against the retained previous one.

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger, Sink};

/// Ranger that collapses runs of consecutive equal elements.
#[derive(Clone)]
pub struct Unique<R: Ranger> {
    ranger: R,
    started: bool,
    prev: Option<R::Cursor>,
}

/// Deliver the first element of each run of consecutive equals in `ranger`.
///
/// ```
/// use rangeflow::{all, unique, RangerExt};
///
/// let data = [1, 1, 2, 2, 2, 3, 1];
/// assert_eq!(unique(all(&data)).to_vec(), vec![&1, &2, &3, &1]);
/// ```
pub fn unique<R>(ranger: R) -> Unique<R>
where
    R: Ranger,
    ItemOf<R>: PartialEq,
{
    Unique {
        ranger,
        started: false,
        prev: None,
    }
}

impl<R> Ranger for Unique<R>
where
    R: Ranger,
    ItemOf<R>: PartialEq,
{
    type Cursor = R::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let Self {
            ranger,
            started,
            prev,
        } = self;

        if !*started {
            *started = true;
            // Pull the first element without delivering it.
            let mut first = None;
            if ranger.drive(&mut |q: &R::Cursor| {
                first = Some(q.clone());
                false
            }) {
                // Empty upstream: exhausted with nothing delivered.
                return true;
            }
            let bootstrap = match first {
                Some(p) => p,
                None => return true,
            };
            let keep = sink.accept(&bootstrap);
            *prev = Some(bootstrap);
            if !keep {
                return false;
            }
        }

        let prev_cursor = match prev.as_mut() {
            Some(p) => p,
            // Bootstrap found the upstream empty on an earlier invocation.
            None => return true,
        };

        ranger.drive(&mut |q: &R::Cursor| {
            let keep = if prev_cursor.get() == q.get() {
                true
            } else {
                sink.accept(q)
            };
            // The comparison base moves whether the element was delivered or
            // suppressed; after a stop it is the last delivered element.
            *prev_cursor = q.clone();
            keep
        })
    }
}
