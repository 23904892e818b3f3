//! # ternary
//!
//! Fluent ternary expressions with eager and lazy branches.
//!
//! ## Overview
//!
//! A ternary expression is written like Python's
//! `true_result if condition else false_result`, which lets the compiler fix
//! the result type from the first argument:
//!
//! ```rust
//! use ternary::prelude::*;
//!
//! let parity = value("even").when(7 % 2 == 0).otherwise("odd");
//! assert_eq!(parity, "odd");
//! ```
//!
//! Each side can be given as a ready value or as a closure. Closures are
//! only invoked if their branch is selected, and then exactly once:
//!
//! - [`value`] / [`Condition::otherwise`]: eagerly evaluated results
//! - [`call`] / [`Condition::otherwise_call`]: lazily evaluated results
//!
//! ```rust
//! use ternary::prelude::*;
//!
//! fn expensive() -> u64 {
//!     (1..=20).product()
//! }
//!
//! let result = call(expensive).when(false).otherwise(0);
//! assert_eq!(result, 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `macros`: The [`ternary!`] macro (enabled by default)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ternary::prelude::*;
/// ```
pub mod prelude {
    pub use crate::expression::*;

    #[cfg(feature = "macros")]
    pub use crate::ternary;
}

pub mod expression;

pub use expression::{Condition, TrueBranch, call, value};
