//! Combinators: each takes one or more rangers (plus auxiliary functions)
//! and returns a new ranger honoring the same resumable-evaluator contract.
//!
//! Every combinator is a small state-machine struct owning its upstream
//! ranger(s) by value, so pipelines form trees of owned values and compose to
//! any depth with static dispatch throughout.

pub mod concat;
pub mod enumerate;
pub mod filter;
pub mod join;
pub mod take;
pub mod transform;
pub mod unique;
pub mod zip;

pub use concat::{Concat, concat};
pub use enumerate::{Enumerate, EnumerateCursor, enumerate};
pub use filter::{Filter, filter};
pub use join::{Adapt, AllAdaption, Join, RangerAdaption, join, join_all, join_with};
pub use take::{Take, take};
pub use transform::{MapCursor, Transform, transform};
pub use unique::{Unique, unique};
pub use zip::{Zip2, Zip2Cursor, Zip3, Zip3Cursor, Zip4, Zip4Cursor, zip2, zip3, zip4};
