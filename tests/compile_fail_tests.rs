//! Compile-fail tests for the ownership and inference guarantees of
//! ternary expressions.
//!
//! These tests verify that builder stages are moved rather than copied,
//! including stages holding capture-free closures, and that the result type
//! is fixed by the first branch.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn ternary_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/*.rs");
}
