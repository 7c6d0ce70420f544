// This file is the module declaration file for the `core` module.
// It declares the submodules in `src/core/` and exposes them to the rest
// of the crate.

// `kitchen` module:
// Turns orders into finished pizzas by driving the concrete builders.
pub mod kitchen;

// `order` module:
// The in-memory description of a single order (`OrderKind`).
pub mod order;
