// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules hold the pizza builders themselves plus the
// helpers that check, import and report on what gets built.

// `pizza` module:
// The foundation of the hierarchy. It defines the `Topping` enum, the
// insertion-ordered `ToppingSet`, the shared `Pizza` product state and the
// `PizzaBuilder` trait whose chaining methods return the concrete builder.
pub mod pizza;

// `ny_pizza` module:
// The size-bearing variant: `Size`, `NyPizza` and `NyPizzaBuilder`, which
// takes its size up front.
pub mod ny_pizza;

// `calzone` module:
// The sauce-placement variant: `Calzone` and `CalzoneBuilder`, which adds
// the `sauce_inside` step.
pub mod calzone;

// `reporter` module:
// Turns baked pizzas into a human-readable console report or a structured
// JSON/YAML/TOML document.
pub mod reporter;

// `validator` module:
// Checks orders for requests the builders would silently absorb, such as
// a topping listed twice.
pub mod validator;
