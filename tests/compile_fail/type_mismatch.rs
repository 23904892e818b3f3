//! The result type is fixed by the first branch.

fn main() {
    let _result: &str = ternary::value(1).when(true).otherwise(2);
}
