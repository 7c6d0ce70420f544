//! A hierarchical builder for pizzas.
//!
//! [`builders::pizza::PizzaBuilder`] is the shared construction protocol.
//! [`builders::ny_pizza::NyPizzaBuilder`] and
//! [`builders::calzone::CalzoneBuilder`] extend it with their own steps while
//! keeping their concrete type through every chained call. The `core` module
//! turns in-memory orders into finished pizzas for the binary.
pub mod builders;
pub mod core;
pub mod utils;

#[cfg(test)]
mod tests;
