use serde::Serialize;
use std::fmt;

use crate::builders::pizza::{Pizza, PizzaBuilder, ToppingSet, ToppingSource};

/// A folded pizza that can have its sauce inside or on top.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Calzone {
    sauce_inside: bool,
    #[serde(flatten)]
    pizza: Pizza,
}

impl Calzone {
    fn new(builder: &CalzoneBuilder) -> Self {
        Self {
            sauce_inside: builder.sauce_inside,
            pizza: Pizza::from_builder(builder),
        }
    }

    /// `true` when the builder's `sauce_inside` step was called.
    pub fn is_sauce_inside(&self) -> bool {
        self.sauce_inside
    }
}

impl AsRef<Pizza> for Calzone {
    fn as_ref(&self) -> &Pizza {
        &self.pizza
    }
}

impl fmt::Display for Calzone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sauceInside={}, {}", self.sauce_inside, self.pizza)
    }
}

/// Builds a [`Calzone`]. Sauce goes on top unless [`CalzoneBuilder::sauce_inside`]
/// is called.
#[derive(Debug, Clone, Default)]
pub struct CalzoneBuilder {
    sauce_inside: bool,
    toppings: ToppingSet,
}

impl CalzoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the sauce inside. Calling it again keeps it inside.
    pub fn sauce_inside(mut self) -> Self {
        self.sauce_inside = true;
        self
    }
}

impl ToppingSource for CalzoneBuilder {
    fn topping_set(&self) -> &ToppingSet {
        &self.toppings
    }

    fn topping_set_mut(&mut self) -> &mut ToppingSet {
        &mut self.toppings
    }
}

impl PizzaBuilder for CalzoneBuilder {
    type Product = Calzone;

    fn build(&self) -> Calzone {
        Calzone::new(self)
    }
}
