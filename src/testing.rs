//! Testing utilities for rangeflow pipelines.
//!
//! This module helps end-users write idiomatic tests for their pipelines:
//!
//! - **Assertions**: compare drained pipeline output with expected results
//! - **Test data builders**: construct input sequences fluently
//! - **Fixtures**: pre-built datasets for the edge cases that matter here
//!   (empty, single-element, all-duplicate, consecutive runs)
//!
//! # Quick start
//!
//! ```
//! use rangeflow::{RangerExt, all};
//! use rangeflow::testing::*;
//!
//! let data = TestDataBuilder::new().add_range(1..=4).build();
//! let out = all(&data).map(|x: &i32| x * 2).to_vec();
//! assert_collections_equal(&out, &[2, 4, 6, 8]);
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
