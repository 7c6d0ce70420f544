use serde::Serialize;
use std::fmt;

use crate::builders::calzone::{Calzone, CalzoneBuilder};
use crate::builders::ny_pizza::{NyPizza, NyPizzaBuilder};
use crate::builders::pizza::{Pizza, PizzaBuilder, Topping};
use crate::core::order::OrderKind;

/// A finished pizza of either kind.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BakedPizza {
    NyPizza(NyPizza),
    Calzone(Calzone),
}

impl AsRef<Pizza> for BakedPizza {
    fn as_ref(&self) -> &Pizza {
        match self {
            BakedPizza::NyPizza(pizza) => pizza.as_ref(),
            BakedPizza::Calzone(calzone) => calzone.as_ref(),
        }
    }
}

impl From<NyPizza> for BakedPizza {
    fn from(pizza: NyPizza) -> Self {
        BakedPizza::NyPizza(pizza)
    }
}

impl From<Calzone> for BakedPizza {
    fn from(calzone: Calzone) -> Self {
        BakedPizza::Calzone(calzone)
    }
}

impl fmt::Display for BakedPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BakedPizza::NyPizza(pizza) => write!(f, "{pizza}"),
            BakedPizza::Calzone(calzone) => write!(f, "{calzone}"),
        }
    }
}

/// Turns orders into pizzas by driving the matching builder.
#[derive(Debug, Default)]
pub struct Kitchen;

impl Kitchen {
    pub fn new() -> Self {
        Self
    }

    /// Bakes a single order.
    ///
    /// The toppings are added one by one in request order, so repeats collapse
    /// and the first occurrence decides the rendering order. A calzone gets the
    /// `sauce_inside` step only when the order asks for it.
    ///
    /// # Arguments
    /// * `kind`: The order to bake.
    ///
    /// # Returns
    /// The finished pizza, equal to what the matching builder chain written by
    /// hand would produce.
    pub fn bake(&self, kind: &OrderKind) -> BakedPizza {
        match kind {
            OrderKind::NyPizza { size, toppings } => {
                dress(NyPizzaBuilder::new(*size), toppings).build().into()
            }
            OrderKind::Calzone {
                toppings,
                sauce_inside,
            } => {
                let mut builder = dress(CalzoneBuilder::new(), toppings);
                if *sauce_inside {
                    builder = builder.sauce_inside();
                }
                builder.build().into()
            }
        }
    }

    /// Bakes every order in turn.
    ///
    /// # Arguments
    /// * `orders`: The orders to bake.
    ///
    /// # Returns
    /// One pizza per order, in the same order.
    pub fn bake_all(&self, orders: &[OrderKind]) -> Vec<BakedPizza> {
        orders
            .iter()
            .enumerate()
            .map(|(index, order)| {
                let pizza = self.bake(order);
                tracing::debug!("Baked order {}: {}", index + 1, pizza);
                pizza
            })
            .collect()
    }
}

/// Adds every topping in `toppings` to `builder`, keeping its concrete type.
///
/// # Arguments
/// * `builder`: Any pizza builder.
/// * `toppings`: Toppings to add, in order. Repeats are absorbed.
///
/// # Returns
/// The same builder type, so variant-specific steps remain available.
pub fn dress<B: PizzaBuilder>(builder: B, toppings: &[Topping]) -> B {
    toppings
        .iter()
        .fold(builder, |builder, topping| builder.add_topping(*topping))
}
