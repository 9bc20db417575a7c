//! Pull adapter: drive a ranger one element per [`Iterator::next`] call.
//!
//! The adapter bridges the push-based evaluator to conventional `for`-loop
//! consumption. Each `next` invokes the ranger with a sink that captures one
//! dereferenced element and immediately asks to stop; the ranger's own resume
//! state does the bookkeeping between calls.

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};

/// Iterator over the dereferenced elements of a ranger.
///
/// ```
/// use rangeflow::{RangerExt, all, filter, zip2};
///
/// let index = [0, 1, 2, 3];
/// let data = [1, 2, 3, 4];
/// let pipeline = zip2(all(&index), filter(|x: &i32| x % 2 == 1, all(&data)));
///
/// let mut total = 0;
/// for (i, e) in pipeline.into_pull_iter() {
///     total += i + e;
/// }
/// assert_eq!(total, 5);
/// ```
#[derive(Clone, Debug)]
pub struct RangerIter<R: Ranger> {
    ranger: R,
    done: bool,
}

impl<R: Ranger> RangerIter<R> {
    pub fn new(ranger: R) -> Self {
        RangerIter {
            ranger,
            done: false,
        }
    }

    /// Whether the underlying ranger has reported exhaustion.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<R: Ranger> Iterator for RangerIter<R> {
    type Item = ItemOf<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut captured = None;
        let exhausted = self.ranger.drive(&mut |p: &R::Cursor| {
            captured = Some(p.get());
            false
        });
        // A drive may deliver an element *and* report exhaustion (a quota
        // reached exactly at the natural end); yield the element now and stop
        // on the next call.
        if exhausted {
            self.done = true;
        }
        captured
    }
}
