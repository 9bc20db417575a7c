//! The evaluator protocol: [`Ranger`] and [`Sink`].
//!
//! A ranger is a resumable, push-driven evaluator over a source. Invoking it
//! with a sink ([`Ranger::drive`]) delivers zero or more cursors downstream
//! and reports whether the source was exhausted (`true`) or the sink stopped
//! the traversal early (`false`). On an early stop the ranger's internal state
//! is left so that the *next* invocation resumes immediately after the last
//! delivered element — nothing is redelivered and nothing is skipped.
//!
//! Sinks are constructed fresh per invocation, usually as closures capturing
//! caller-local state; the blanket impl below makes any `FnMut(&C) -> bool` a
//! sink. Everything is statically dispatched: composing combinators nests
//! concrete types, and the delivery path contains no virtual calls and no
//! per-element allocation.
//!
//! ```
//! use rangeflow::{all, Cursor, Ranger};
//!
//! let data = [10, 20, 30];
//! let mut ranger = all(&data);
//! let mut seen = Vec::new();
//! let exhausted = ranger.drive(&mut |p: &rangeflow::SliceCursor<'_, i32>| {
//!     seen.push(*p.get());
//!     true
//! });
//! assert!(exhausted);
//! assert_eq!(seen, vec![10, 20, 30]);
//! ```

use crate::cursor::Cursor;
use either::Either;

/// Receiver for one delivered cursor at a time.
///
/// Returning `true` means "keep delivering"; `false` means "stop now". Any
/// `FnMut(&C) -> bool` is a sink.
pub trait Sink<C> {
    fn accept(&mut self, cursor: &C) -> bool;
}

impl<C, F> Sink<C> for F
where
    F: FnMut(&C) -> bool,
{
    #[inline]
    fn accept(&mut self, cursor: &C) -> bool {
        self(cursor)
    }
}

/// A resumable, push-based lazy sequence evaluator.
pub trait Ranger {
    /// The positional handle this ranger delivers.
    type Cursor: Cursor;

    /// Deliver remaining elements to `sink`, in order.
    ///
    /// Returns `true` iff every remaining element was delivered and the sink
    /// never asked to stop. Returns `false` on an early stop, with internal
    /// state updated so the next `drive` resumes exactly where this one left
    /// off. Driving an already-exhausted ranger returns `true` and delivers
    /// nothing.
    ///
    /// A single ranger must not be driven reentrantly; its state is mutated
    /// in place on every invocation.
    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool;
}

/// Shorthand for the element type a ranger delivers.
pub type ItemOf<R> = <<R as Ranger>::Cursor as Cursor>::Item;

/// Drive through a mutable reference, leaving the ranger usable afterwards.
impl<R: Ranger> Ranger for &mut R {
    type Cursor = R::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        (**self).drive(sink)
    }
}

/// Either of two rangers with the same cursor type is itself a ranger, which
/// lets a pipeline pick between two differently-shaped arms at runtime.
impl<L, R> Ranger for Either<L, R>
where
    L: Ranger,
    R: Ranger<Cursor = L::Cursor>,
{
    type Cursor = L::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        match self {
            Either::Left(l) => l.drive(sink),
            Either::Right(r) => r.drive(sink),
        }
    }
}
