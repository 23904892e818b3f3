//! Fluent ternary expressions.
//!
//! A ternary expression is built in three steps, mirroring Python's
//! `true_result if condition else false_result`:
//!
//! 1. [`value`] or [`call`] supplies the true result and yields a [`TrueBranch`]
//! 2. [`TrueBranch::when`] binds the condition and yields a [`Condition`]
//! 3. [`Condition::otherwise`] or [`Condition::otherwise_call`] supplies the
//!    false result and resolves the expression
//!
//! `value` and `otherwise` take eagerly evaluated results. `call` and
//! `otherwise_call` take closures which are only invoked if their branch is
//! selected. The four combinations mix freely.
//!
//! # Examples
//!
//! ```rust
//! use ternary::{call, value};
//!
//! let retries = 0;
//! let message = value("retrying").when(retries > 0).otherwise("first attempt");
//! assert_eq!(message, "first attempt");
//!
//! let cached: Option<String> = None;
//! let page = call(|| cached.clone().unwrap_or_default())
//!     .when(cached.is_some())
//!     .otherwise_call(|| "rendered".to_string());
//! assert_eq!(page, "rendered");
//! ```

mod condition;
#[cfg(feature = "macros")]
mod ternary_macro;
mod true_branch;

pub use condition::Condition;
pub use true_branch::{TrueBranch, call, value};

static_assertions::assert_impl_all!(TrueBranch<String, fn() -> String>: Send, Sync);
static_assertions::assert_impl_all!(Condition<String, fn() -> String>: Send, Sync);
static_assertions::assert_not_impl_any!(
    TrueBranch<i32, std::rc::Rc<dyn Fn() -> i32>>: Send, Sync
);

// Stages must stay move-only even when the producer is `Copy`.
static_assertions::assert_not_impl_any!(TrueBranch<i32, fn() -> i32>: Clone, Copy);
static_assertions::assert_not_impl_any!(Condition<i32, fn() -> i32>: Clone, Copy);
