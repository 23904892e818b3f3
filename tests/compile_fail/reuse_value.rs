//! A `value` branch is moved, never copied, so it resolves at most once.

fn main() {
    let branch = ternary::value(1);
    let _first = branch;
    let _second = branch;
}
