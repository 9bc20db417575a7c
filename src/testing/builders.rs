//! Test data builders for creating input sequences fluently.

use std::ops::RangeInclusive;

/// A fluent builder for constructing test input sequences.
///
/// # Example
///
/// ```
/// use rangeflow::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=5)
///     .add_value(100)
///     .add_repeated(7, 3)
///     .build();
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 100, 7, 7, 7]);
/// ```
#[derive(Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    /// Create a new empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append a single value.
    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Append multiple values.
    #[must_use]
    pub fn add_values(mut self, values: Vec<T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Append `count` copies of `value` — handy for building runs that
    /// `unique` should collapse.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        for _ in 0..count {
            self.data.push(value.clone());
        }
        self
    }

    /// Build and return the sequence.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Current size of the sequence being built.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence being built is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> TestDataBuilder<T>
where
    T: From<i32>,
{
    /// Append an inclusive range of values.
    ///
    /// # Example
    ///
    /// ```
    /// use rangeflow::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::<i32>::new().add_range(1..=3).build();
    /// assert_eq!(data, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        for i in range {
            self.data.push(T::from(i));
        }
        self
    }
}

/// Generate sequential numeric test data.
///
/// # Example
///
/// ```
/// use rangeflow::testing::sequential_data;
///
/// assert_eq!(sequential_data(1, 5), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn sequential_data(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}
