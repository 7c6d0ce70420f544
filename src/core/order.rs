use std::fmt;

use crate::builders::ny_pizza::Size;
use crate::builders::pizza::Topping;

/// What to build for a single order, as requested on the command line.
///
/// The toppings are kept exactly as requested, duplicates included, so the
/// validator can point out repeats before the builder collapses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderKind {
    NyPizza { size: Size, toppings: Vec<Topping> },
    Calzone { toppings: Vec<Topping>, sauce_inside: bool },
}

impl OrderKind {
    /// The toppings exactly as requested, duplicates included.
    ///
    /// # Returns
    /// A slice in request order. Use the built pizza's `toppings()` for the
    /// de-duplicated set.
    pub fn requested_toppings(&self) -> &[Topping] {
        match self {
            OrderKind::NyPizza { toppings, .. } | OrderKind::Calzone { toppings, .. } => toppings,
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::NyPizza { .. } => write!(f, "ny-pizza"),
            OrderKind::Calzone { .. } => write!(f, "calzone"),
        }
    }
}
