use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::builders::pizza::{Pizza, PizzaBuilder, ToppingSet, ToppingSource};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "SMALL"),
            Size::Medium => write!(f, "MEDIUM"),
            Size::Large => write!(f, "LARGE"),
        }
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => anyhow::bail!("Invalid size: {}", s),
        }
    }
}

/// A New York style pizza: a base pizza plus a size fixed at build time.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NyPizza {
    size: Size,
    #[serde(flatten)]
    pizza: Pizza,
}

impl NyPizza {
    fn new(builder: &NyPizzaBuilder) -> Self {
        Self {
            size: builder.size,
            pizza: Pizza::from_builder(builder),
        }
    }

    /// The size given to [`NyPizzaBuilder::new`].
    pub fn size(&self) -> Size {
        self.size
    }
}

impl AsRef<Pizza> for NyPizza {
    fn as_ref(&self) -> &Pizza {
        &self.pizza
    }
}

impl fmt::Display for NyPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size={}, {}", self.size, self.pizza)
    }
}

/// Builds a [`NyPizza`]. The size is a constructor argument because a New York
/// pizza has no default size.
#[derive(Debug, Clone)]
pub struct NyPizzaBuilder {
    size: Size,
    toppings: ToppingSet,
}

impl NyPizzaBuilder {
    /// Starts a New York pizza of the given size with no toppings.
    ///
    /// # Arguments
    /// * `size`: The pizza's size. It cannot be changed later.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            toppings: ToppingSet::new(),
        }
    }
}

impl ToppingSource for NyPizzaBuilder {
    fn topping_set(&self) -> &ToppingSet {
        &self.toppings
    }

    fn topping_set_mut(&mut self) -> &mut ToppingSet {
        &mut self.toppings
    }
}

impl PizzaBuilder for NyPizzaBuilder {
    type Product = NyPizza;

    fn build(&self) -> NyPizza {
        NyPizza::new(self)
    }
}
