//! A `call` branch with a capture-free closure is still moved, never copied.

fn main() {
    let branch = ternary::call(|| 1);
    let _first = branch;
    let _second = branch;
}
