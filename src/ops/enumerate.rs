//! Element numbering.

use crate::cursor::Cursor;
use crate::ranger::{Ranger, Sink};

/// Cursor pairing an element with its zero-based sequence number.
///
/// The number is fixed at delivery time, so repeated dereference is stable.
#[derive(Clone, Debug)]
pub struct EnumerateCursor<C> {
    index: usize,
    inner: C,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    fn get(&self) -> (usize, C::Item) {
        (self.index, self.inner.get())
    }
}

/// Ranger pairing each delivered element with a running index.
///
/// The counter is part of the combinator's persistent state: it keeps
/// increasing across suspend/resume boundaries and is never reset.
#[derive(Clone, Debug)]
pub struct Enumerate<R> {
    ranger: R,
    next_index: usize,
}

/// Pair each element of `ranger` with a zero-based sequence number.
///
/// ```
/// use rangeflow::{all, enumerate, RangerExt};
///
/// let data = [10, 20];
/// assert_eq!(enumerate(all(&data)).to_vec(), vec![(0, &10), (1, &20)]);
/// ```
pub fn enumerate<R: Ranger>(ranger: R) -> Enumerate<R> {
    Enumerate {
        ranger,
        next_index: 0,
    }
}

impl<R: Ranger> Ranger for Enumerate<R> {
    type Cursor = EnumerateCursor<R::Cursor>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let next_index = &mut self.next_index;
        self.ranger.drive(&mut |p: &R::Cursor| {
            let cursor = EnumerateCursor {
                index: *next_index,
                inner: p.clone(),
            };
            *next_index += 1;
            sink.accept(&cursor)
        })
    }
}
