//! The condition of a ternary expression and its resolution.

use std::fmt;
use std::marker::PhantomData;

/// A true branch bound to its condition, waiting for the false branch.
///
/// Created by [`TrueBranch::when`](super::TrueBranch::when). Resolving it
/// with [`otherwise`](Condition::otherwise) or
/// [`otherwise_call`](Condition::otherwise_call) evaluates exactly one of the
/// two branches, exactly once.
#[must_use = "a ternary expression does nothing until it is resolved with `otherwise` or `otherwise_call`"]
pub struct Condition<T, F> {
    condition: bool,
    producer: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> Condition<T, F> {
    #[inline]
    pub(super) const fn new(condition: bool, producer: F) -> Self {
        Self {
            condition,
            producer,
            marker: PhantomData,
        }
    }

    /// Returns the condition this expression was bound to.
    #[inline]
    pub const fn condition(&self) -> bool {
        self.condition
    }
}

impl<T, F: FnOnce() -> T> Condition<T, F> {
    /// Specifies the result of the ternary expression if the condition is false.
    ///
    /// If the condition is true, the true branch is invoked and its result
    /// returned; `value` is dropped untouched. If the condition is false,
    /// `value` is returned and the true branch is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ternary::{call, value};
    ///
    /// assert_eq!(value(1).when(true).otherwise(2), 1);
    /// assert_eq!(call(|| 1).when(false).otherwise(2), 2);
    /// ```
    #[inline]
    pub fn otherwise(self, value: T) -> T {
        if self.condition {
            (self.producer)()
        } else {
            value
        }
    }

    /// Specifies the result of the ternary expression if the condition is false.
    ///
    /// Unlike [`otherwise`](Condition::otherwise) the false result is
    /// evaluated lazily: `producer` is invoked exactly once if the condition
    /// is false, and never otherwise.
    ///
    /// Failures of the selected branch reach the caller unchanged. A
    /// fallible branch is written with a `Result` result type:
    ///
    /// ```rust
    /// use ternary::call;
    ///
    /// fn port(raw: Option<&str>) -> Result<u16, std::num::ParseIntError> {
    ///     let port = call(|| raw.unwrap_or_default().parse::<u16>())
    ///         .when(raw.is_some())
    ///         .otherwise_call(|| Ok(8080))?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port(Some("443")), Ok(443));
    /// assert_eq!(port(None), Ok(8080));
    /// assert!(port(Some("http")).is_err());
    /// ```
    #[inline]
    pub fn otherwise_call<G>(self, producer: G) -> T
    where
        G: FnOnce() -> T,
    {
        if self.condition {
            (self.producer)()
        } else {
            producer()
        }
    }
}

impl<T, F> fmt::Debug for Condition<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Condition")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(true, 1)]
    #[case(false, 2)]
    fn test_otherwise_selects_branch(#[case] condition: bool, #[case] expected: i32) {
        let result = Condition::new(condition, || 1).otherwise(2);
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(true, 1, 0)]
    #[case(false, 0, 1)]
    fn test_otherwise_call_invokes_only_selected_branch(
        #[case] condition: bool,
        #[case] expected_true_calls: u32,
        #[case] expected_false_calls: u32,
    ) {
        let true_calls = Cell::new(0);
        let false_calls = Cell::new(0);

        Condition::new(condition, || true_calls.set(true_calls.get() + 1))
            .otherwise_call(|| false_calls.set(false_calls.get() + 1));

        assert_eq!(true_calls.get(), expected_true_calls);
        assert_eq!(false_calls.get(), expected_false_calls);
    }

    #[rstest]
    fn test_debug_shows_condition() {
        let condition: Condition<i32, _> = Condition::new(true, || 1);
        assert_eq!(format!("{condition:?}"), "Condition { condition: true, .. }");
    }
}
