//! Entry points of a ternary expression.
//!
//! A ternary expression starts with the result of the true branch, written
//! Python-style as `true_result if condition else false_result`. Starting
//! with the true branch lets the compiler fix the result type `T` from the
//! very first argument.
//!
//! # Examples
//!
//! ```rust
//! use ternary::{call, value};
//!
//! let eager = value("even").when(4 % 2 == 0).otherwise("odd");
//! assert_eq!(eager, "even");
//!
//! let lazy = call(|| "even".to_string()).when(3 % 2 == 0).otherwise_call(|| "odd".to_string());
//! assert_eq!(lazy, "odd");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Condition;

/// The result of a ternary expression if its condition is true.
///
/// `TrueBranch<T, F>` holds a producer `F: FnOnce() -> T` which has not been
/// invoked yet. Eager values are lifted into the same shape by [`value`],
/// deferred computations are wrapped as-is by [`call`].
///
/// The branch is consumed by [`TrueBranch::when`], so an expression can only
/// be resolved once.
///
/// # Type Parameters
///
/// * `T` - The result type of the whole expression
/// * `F` - The producer of the true result
///
/// ```compile_fail
/// let branch = ternary::call(|| 1);
/// let first = branch.when(true).otherwise(2);
/// let second = branch.when(false).otherwise(2);
/// ```
#[must_use = "a ternary expression does nothing until it is resolved with `otherwise` or `otherwise_call`"]
pub struct TrueBranch<T, F> {
    producer: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F: FnOnce() -> T> TrueBranch<T, F> {
    /// Creates a true branch from a deferred producer.
    ///
    /// This is the associated-function form of [`call`]. The producer is
    /// not invoked here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ternary::TrueBranch;
    ///
    /// let result = TrueBranch::new(|| 1).when(true).otherwise(2);
    /// assert_eq!(result, 1);
    /// ```
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            producer,
            marker: PhantomData,
        }
    }

    /// Specifies the condition of the ternary expression.
    ///
    /// The condition is an already evaluated `bool`. Only the branch results
    /// can be deferred, never the condition itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ternary::value;
    ///
    /// let temperature = 31;
    /// let condition = value("hot").when(temperature > 25);
    /// assert!(condition.condition());
    /// assert_eq!(condition.otherwise("mild"), "hot");
    /// ```
    #[inline]
    pub fn when(self, condition: bool) -> Condition<T, F> {
        Condition::new(condition, self.producer)
    }
}

impl<T, F> fmt::Debug for TrueBranch<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("TrueBranch")
            .field(&"<unevaluated>")
            .finish()
    }
}

/// Starts a ternary expression with an eagerly evaluated true result.
///
/// The value is captured by a producer that simply hands it back, so it
/// flows through the rest of the expression like any deferred result.
///
/// # Examples
///
/// ```rust
/// use ternary::value;
///
/// assert_eq!(value(1).when(true).otherwise(2), 1);
/// assert_eq!(value(1).when(false).otherwise(2), 2);
/// ```
///
/// The result type is fixed by the first value:
///
/// ```compile_fail
/// let result = ternary::value(1).when(true).otherwise("two");
/// ```
#[inline]
pub fn value<T>(value: T) -> TrueBranch<T, impl FnOnce() -> T> {
    TrueBranch::new(move || value)
}

/// Starts a ternary expression with a lazily evaluated true result.
///
/// Unlike [`value`], the result is computed only if the condition turns out
/// to be true, and then exactly once. `call` itself never invokes the
/// producer.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use ternary::call;
///
/// let invoked = Cell::new(0);
/// let result = call(|| {
///     invoked.set(invoked.get() + 1);
///     1
/// })
/// .when(false)
/// .otherwise(2);
///
/// assert_eq!(result, 2);
/// assert_eq!(invoked.get(), 0);
/// ```
#[inline]
pub const fn call<T, F: FnOnce() -> T>(producer: F) -> TrueBranch<T, F> {
    TrueBranch::new(producer)
}
