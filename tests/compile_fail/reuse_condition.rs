//! A bound condition is moved, never copied, so it resolves at most once.

fn main() {
    let condition = ternary::call(|| 1).when(true);
    let _first = condition;
    let _second = condition;
}
