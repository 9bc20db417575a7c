//! Source adaptation: lifting sequential sources into rangers.
//!
//! [`all`] walks a borrowed slice, [`all_mut`] a writable slice (through
//! [`Cell`] views, enabling write-back terminals), and [`all_owned`] takes a
//! source by value, moving it into pipeline-owned shared storage. The
//! `skip_first` / `skip_last` / `skip_both` variants apply the same walk with
//! one position trimmed from either end.
//!
//! Every adapter saves its resume position both on an early stop and on
//! exhaustion, so re-driving a drained ranger delivers nothing and reports
//! exhausted.

use std::cell::Cell;
use std::rc::Rc;

use crate::cursor::{CellCursor, SharedCursor, SliceCursor};
use crate::ranger::{Ranger, Sink};

/// Ranger over a borrowed slice.
///
/// Delivers [`SliceCursor`]s for the positions in `next..end`, advancing
/// `next` as elements are consumed.
#[derive(Debug)]
pub struct Slice<'a, T> {
    slice: &'a [T],
    next: usize,
    end: usize,
}

impl<'a, T> Clone for Slice<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Slice<'a, T> {}

impl<'a, T> Ranger for Slice<'a, T> {
    type Cursor = SliceCursor<'a, T>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        while self.next < self.end {
            let cursor = SliceCursor {
                slice: self.slice,
                pos: self.next,
            };
            self.next += 1;
            if !sink.accept(&cursor) {
                return false;
            }
        }
        true
    }
}

/// Ranger over a writable slice, viewed as `&[Cell<T>]`.
///
/// Its [`CellCursor`]s support write-through assignment, which is what the
/// [`partial_sum`](crate::terminal::partial_sum) terminal needs.
pub struct Cells<'a, T> {
    cells: &'a [Cell<T>],
    next: usize,
    end: usize,
}

impl<'a, T> Clone for Cells<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cells<'a, T> {}

impl<'a, T: Copy> Ranger for Cells<'a, T> {
    type Cursor = CellCursor<'a, T>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        while self.next < self.end {
            let cursor = CellCursor {
                cells: self.cells,
                pos: self.next,
            };
            self.next += 1;
            if !sink.accept(&cursor) {
                return false;
            }
        }
        true
    }
}

/// Ranger over storage it owns, shared behind `Rc`.
///
/// Produced by [`all_owned`]; cursors bump the reference count instead of
/// borrowing, so they remain valid for the ranger's whole lifetime.
#[derive(Debug)]
pub struct Shared<T> {
    data: Rc<[T]>,
    next: usize,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared {
            data: Rc::clone(&self.data),
            next: self.next,
        }
    }
}

impl<T: Clone> Ranger for Shared<T> {
    type Cursor = SharedCursor<T>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        while self.next < self.data.len() {
            let cursor = SharedCursor {
                data: Rc::clone(&self.data),
                pos: self.next,
            };
            self.next += 1;
            if !sink.accept(&cursor) {
                return false;
            }
        }
        true
    }
}

/// Lift a borrowed slice into a ranger over all of its elements.
///
/// ```
/// use rangeflow::{all, RangerExt};
///
/// let data = [1, 2, 3, 4];
/// assert_eq!(all(&data).accumulate(0), 10);
/// ```
pub fn all<T>(source: &[T]) -> Slice<'_, T> {
    Slice {
        slice: source,
        next: 0,
        end: source.len(),
    }
}

/// Like [`all`], but skips the source's first element.
///
/// The source must have at least two elements; this is a documented
/// precondition checked only in debug builds. A shorter source delivers
/// nothing.
pub fn skip_first<T>(source: &[T]) -> Slice<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_first requires a source with at least two elements"
    );
    Slice {
        slice: source,
        next: 1,
        end: source.len(),
    }
}

/// Like [`all`], but stops one position before the source's end.
///
/// Same precondition as [`skip_first`].
pub fn skip_last<T>(source: &[T]) -> Slice<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_last requires a source with at least two elements"
    );
    Slice {
        slice: source,
        next: 0,
        end: source.len().saturating_sub(1),
    }
}

/// Like [`all`], but skips both the first and the last element.
///
/// Same precondition as [`skip_first`].
pub fn skip_both<T>(source: &[T]) -> Slice<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_both requires a source with at least two elements"
    );
    Slice {
        slice: source,
        next: 1,
        end: source.len().saturating_sub(1),
    }
}

/// Lift a writable slice into a ranger whose cursors support write-back.
pub fn all_mut<T: Copy>(source: &mut [T]) -> Cells<'_, T> {
    let cells = Cell::from_mut(source).as_slice_of_cells();
    Cells {
        cells,
        next: 0,
        end: cells.len(),
    }
}

/// Writable variant of [`skip_first`].
pub fn skip_first_mut<T: Copy>(source: &mut [T]) -> Cells<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_first_mut requires a source with at least two elements"
    );
    let cells = Cell::from_mut(source).as_slice_of_cells();
    Cells {
        cells,
        next: 1,
        end: cells.len(),
    }
}

/// Writable variant of [`skip_last`].
pub fn skip_last_mut<T: Copy>(source: &mut [T]) -> Cells<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_last_mut requires a source with at least two elements"
    );
    let cells = Cell::from_mut(source).as_slice_of_cells();
    Cells {
        cells,
        next: 0,
        end: cells.len().saturating_sub(1),
    }
}

/// Writable variant of [`skip_both`].
pub fn skip_both_mut<T: Copy>(source: &mut [T]) -> Cells<'_, T> {
    debug_assert!(
        source.len() >= 2,
        "skip_both_mut requires a source with at least two elements"
    );
    let cells = Cell::from_mut(source).as_slice_of_cells();
    Cells {
        cells,
        next: 1,
        end: cells.len().saturating_sub(1),
    }
}

/// Lift a source taken by value, moving it into pipeline-owned storage.
///
/// Use this when the source would otherwise be a temporary: the elements are
/// moved behind a shared allocation so the resulting ranger and its cursors
/// stay valid on their own.
///
/// ```
/// use rangeflow::{all_owned, RangerExt};
///
/// let total = all_owned((1..=4).collect::<Vec<i32>>()).accumulate(0);
/// assert_eq!(total, 10);
/// ```
pub fn all_owned<T: Clone>(source: Vec<T>) -> Shared<T> {
    Shared {
        data: source.into(),
        next: 0,
    }
}
