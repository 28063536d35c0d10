#[cfg(test)]
mod test;

mod logic;
mod math;
mod stack;

use gloom_eval::Bindings;

/// Names that are spelled differently but mean a native primitive.
const ALIASES: &[(&str, &str)] = &[("!", "def")];

/// Every library definition as `(name, body)`, in the order they are bound.
pub fn library() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    ALIASES
        .iter()
        .chain(stack::DEFINITIONS)
        .chain(logic::DEFINITIONS)
        .chain(math::DEFINITIONS)
}

/**
The built-in context: the native primitives plus the library macros.

Build it once and lend it to every interpreter. It is never mutated
afterwards; user definitions go into each interpreter's own table.
*/
pub fn builtins() -> Bindings {
    let mut bindings = Bindings::natives();
    for (name, body) in library() {
        bindings.define(name, body);
    }
    bindings
}
