//! The `ternary!` macro for lazily evaluated conditional expressions.
//!
//! This module provides the [`ternary!`] macro, a compact spelling of a
//! lazy/lazy ternary expression.

/// Evaluates `true_result if condition else false_result`.
///
/// `ternary!(a, if c, else b)` is equivalent to
/// `call(|| a).when(c).otherwise_call(|| b)`.
///
/// Both results are wrapped in closures, so only the selected one is
/// evaluated, exactly once. The condition is evaluated first, before either
/// result.
///
/// # Control Flow
///
/// Because each result becomes the body of a closure, `?` and `return`
/// inside a result apply to that closure rather than the enclosing function.
/// Apply `?` to the whole expression instead:
///
/// ```
/// use ternary::ternary;
///
/// fn parse(raw: &str) -> Result<i64, std::num::ParseIntError> {
///     let number = ternary!(raw.parse::<i64>(), if !raw.is_empty(), else Ok(0))?;
///     Ok(number)
/// }
///
/// assert_eq!(parse("12"), Ok(12));
/// assert_eq!(parse(""), Ok(0));
/// ```
///
/// # Examples
///
/// ```
/// use ternary::ternary;
///
/// let items = vec![3, 1, 2];
/// let largest = ternary!(items.iter().max().copied(), if !items.is_empty(), else None);
/// assert_eq!(largest, Some(3));
/// ```
///
/// ## Only the selected result is evaluated
///
/// ```
/// use ternary::ternary;
///
/// fn quotient(dividend: i32, divisor: i32) -> i32 {
///     ternary!(dividend / divisor, if divisor != 0, else i32::MAX)
/// }
///
/// assert_eq!(quotient(100, 4), 25);
/// assert_eq!(quotient(100, 0), i32::MAX);
/// ```
#[macro_export]
macro_rules! ternary {
    ($true_result:expr, if $condition:expr, else $false_result:expr $(,)?) => {
        $crate::call(|| $true_result)
            .when($condition)
            .otherwise_call(|| $false_result)
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[test]
    fn test_ternary_selects_true_result() {
        let result = ternary!(1, if true, else 2);
        assert_eq!(result, 1);
    }

    #[test]
    fn test_ternary_selects_false_result() {
        let result = ternary!(1, if false, else 2);
        assert_eq!(result, 2);
    }

    #[test]
    fn test_ternary_skips_unselected_result() {
        let evaluated = Cell::new(0);
        let result = ternary!(
            {
                evaluated.set(evaluated.get() + 1);
                "left"
            },
            if false,
            else "right"
        );
        assert_eq!(result, "right");
        assert_eq!(evaluated.get(), 0);
    }
}
