//! # Rangeflow
//!
//! A **push-based range processing library** for Rust. Rangeflow builds lazy,
//! single-pass pipelines over sequential sources using inverted control flow:
//! instead of downstream stages pulling elements one at a time, the source
//! pushes positional cursors through a chain of sinks, and the consumer stops
//! the traversal by returning `false` from its sink.
//!
//! ## Key features
//!
//! - **Composable combinators** — filter, map, take, concat, unique, flatten,
//!   zip and enumerate nest to any depth
//! - **No per-element overhead** — everything is statically dispatched; the
//!   delivery path allocates nothing per element
//! - **Early termination** — any sink can stop a traversal at any element
//! - **Resumable pipelines** — a stopped ranger picks up exactly where it
//!   left off on the next invocation, never redelivering and never skipping
//! - **Write-back terminals** — cumulative sums can mutate the source in
//!   place through write-through cursors
//! - **Pull adapter** — any pipeline can still be consumed with a plain
//!   `for` loop when push-style consumption is inconvenient
//!
//! ## Quick start
//!
//! ```
//! use rangeflow::{RangerExt, all};
//!
//! let data = [1, 2, 3, 4];
//!
//! // Sum of the odd elements: 1 + 3.
//! let total = all(&data).filter(|x: &i32| x % 2 == 1).accumulate(0);
//! assert_eq!(total, 4);
//! ```
//!
//! ## Core concepts
//!
//! ### Cursors
//!
//! A [`Cursor`] is an opaque, copy-cheap positional handle into a source.
//! Dereferencing ([`Cursor::get`]) is lazy and may happen zero or several
//! times per delivered element; [`CursorMut`] additionally supports
//! write-through assignment.
//!
//! ### Rangers
//!
//! A [`Ranger`] is a resumable evaluator: [`Ranger::drive`] pushes cursors
//! into a sink and returns `true` if the source was exhausted or `false` if
//! the sink stopped early. Combinators consume rangers by value and return
//! new rangers, so a pipeline is a tree of owned values built once and driven
//! as many times as needed.
//!
//! ### Sinks
//!
//! A [`Sink`] is any `FnMut(&C) -> bool`, constructed fresh per invocation
//! and usually capturing caller-local state. Returning `false` unwinds the
//! nested drive calls back to the caller; that is the only cancellation
//! mechanism, and the only "suspension" — there is no scheduler and no
//! background execution.
//!
//! ## Pipelines resume
//!
//! ```
//! use rangeflow::{Cursor, Ranger, RangerExt, SliceCursor, all};
//!
//! let data = [1, 2, 3, 4, 5];
//! let mut pipeline = all(&data).take(4);
//!
//! // Drive one element at a time with a single-shot sink.
//! let mut seen = Vec::new();
//! loop {
//!     let mut got = None;
//!     let done = pipeline.drive(&mut |p: &SliceCursor<'_, i32>| {
//!         got = Some(*p.get());
//!         false
//!     });
//!     seen.extend(got);
//!     if done {
//!         break;
//!     }
//! }
//! assert_eq!(seen, vec![1, 2, 3, 4]);
//! ```
//!
//! ## Module overview
//!
//! - [`ranger`] — the evaluator protocol ([`Ranger`], [`Sink`])
//! - [`cursor`] — positional handles ([`Cursor`], [`CursorMut`] and the
//!   concrete cursor types)
//! - [`source`] — lifting slices and owned sequences into rangers
//! - [`ops`] — the combinator algebra
//! - [`terminal`] — folds ([`accumulate`], [`partial_sum`])
//! - [`iter`] — the pull adapter
//! - [`extensions`] — the fluent [`RangerExt`] surface
//! - [`testing`] — assertions, builders and fixtures for pipeline tests

pub mod cursor;
pub mod extensions;
pub mod iter;
pub mod ops;
pub mod ranger;
pub mod source;
pub mod terminal;
pub mod testing;

pub use cursor::{CellCursor, Cursor, CursorMut, SharedCursor, SliceCursor};
pub use extensions::{CompositeRanger, RangerExt};
pub use iter::RangerIter;
pub use ops::{
    Adapt, AllAdaption, Concat, Enumerate, EnumerateCursor, Filter, Join, MapCursor,
    RangerAdaption, Take, Transform, Unique, Zip2, Zip2Cursor, Zip3, Zip3Cursor, Zip4, Zip4Cursor,
    concat, enumerate, filter, join, join_all, join_with, take, transform, unique, zip2, zip3,
    zip4,
};
pub use ranger::{ItemOf, Ranger, Sink};
pub use source::{
    Cells, Shared, Slice, all, all_mut, all_owned, skip_both, skip_both_mut, skip_first,
    skip_first_mut, skip_last, skip_last_mut,
};
pub use terminal::{accumulate, partial_sum};
