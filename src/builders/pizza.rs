use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of toppings a pizza can carry.
///
/// Toppings render and serialize as their upper-case names (`HAM`, `ONION`, ...).
/// They order by declaration.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

impl Topping {
    /// Every topping, in declaration order.
    pub const ALL: [Topping; 5] = [
        Topping::Ham,
        Topping::Mushroom,
        Topping::Onion,
        Topping::Pepper,
        Topping::Sausage,
    ];
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topping::Ham => write!(f, "HAM"),
            Topping::Mushroom => write!(f, "MUSHROOM"),
            Topping::Onion => write!(f, "ONION"),
            Topping::Pepper => write!(f, "PEPPER"),
            Topping::Sausage => write!(f, "SAUSAGE"),
        }
    }
}

/// Parses a topping name case-insensitively, so `ham`, `Ham` and `HAM` are all
/// accepted on the command line. Surrounding whitespace is ignored.
impl FromStr for Topping {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ham" => Ok(Topping::Ham),
            "mushroom" => Ok(Topping::Mushroom),
            "onion" => Ok(Topping::Onion),
            "pepper" => Ok(Topping::Pepper),
            "sausage" => Ok(Topping::Sausage),
            _ => anyhow::bail!("Invalid topping: {}", s),
        }
    }
}

/// An insertion-ordered set of toppings.
///
/// Inserting a topping that is already present is a no-op, so the first
/// insertion decides where a topping appears when rendered. Two sets are
/// equal when they hold the same toppings, whatever the order.
#[derive(Debug, Serialize, Clone, Default, Eq)]
#[serde(transparent)]
pub struct ToppingSet {
    toppings: Vec<Topping>,
}

impl ToppingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `topping` if absent. Returns `true` when the set changed.
    pub fn insert(&mut self, topping: Topping) -> bool {
        if self.contains(topping) {
            return false;
        }
        self.toppings.push(topping);
        true
    }

    pub fn contains(&self, topping: Topping) -> bool {
        self.toppings.contains(&topping)
    }

    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    pub fn as_slice(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topping> {
        self.toppings.iter()
    }
}

impl PartialEq for ToppingSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(*t))
    }
}

impl FromIterator<Topping> for ToppingSet {
    fn from_iter<I: IntoIterator<Item = Topping>>(iter: I) -> Self {
        let mut set = ToppingSet::new();
        for topping in iter {
            set.insert(topping);
        }
        set
    }
}

impl fmt::Display for ToppingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, topping) in self.toppings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{topping}")?;
        }
        write!(f, "]")
    }
}

// Only this crate can name `ToppingSource`, so only this crate's builders can
// hand their accumulated toppings to `Pizza::from_builder`.
mod sealed {
    use super::ToppingSet;

    pub trait ToppingSource {
        fn topping_set(&self) -> &ToppingSet;
        fn topping_set_mut(&mut self) -> &mut ToppingSet;
    }
}

pub(crate) use sealed::ToppingSource;

/// The state every pizza shares: its finalized toppings.
///
/// `Pizza` is never built on its own. Each concrete pizza (`NyPizza`,
/// `Calzone`) embeds one, created from its builder through
/// `Pizza::from_builder`, and adds its own fields around it. There are no
/// mutators; once built, the toppings are fixed.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Pizza {
    toppings: ToppingSet,
}

impl Pizza {
    /// Copies the toppings accumulated so far by `builder`.
    ///
    /// The builder is taken by capability rather than by concrete type, so this
    /// constructor never sees the variant-specific fields.
    pub(crate) fn from_builder<B: ToppingSource + ?Sized>(builder: &B) -> Self {
        Self {
            toppings: builder.topping_set().clone(),
        }
    }

    /// The toppings in the order they were first added.
    pub fn toppings(&self) -> &[Topping] {
        self.toppings.as_slice()
    }

    pub fn topping_set(&self) -> &ToppingSet {
        &self.toppings
    }

    pub fn has_topping(&self, topping: Topping) -> bool {
        self.toppings.contains(topping)
    }
}

/// Renders as `toppings=[A, B]`. Concrete pizzas prepend their own fields.
impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toppings={}", self.toppings)
    }
}

/// The construction protocol shared by every pizza builder.
///
/// Chaining methods take and return `Self`, so a chain that starts on a
/// `NyPizzaBuilder` stays a `NyPizzaBuilder` through `add_topping` and can
/// still reach variant-specific steps afterwards. `Product` fixes which pizza a
/// builder produces.
///
/// # Example
///
/// ```
/// use pizza_builder::builders::calzone::CalzoneBuilder;
/// use pizza_builder::builders::pizza::{PizzaBuilder, Topping};
///
/// let calzone = CalzoneBuilder::new()
///     .add_topping(Topping::Ham)
///     .sauce_inside()
///     .build();
/// assert_eq!(calzone.to_string(), "sauceInside=true, toppings=[HAM]");
/// ```
pub trait PizzaBuilder: ToppingSource + Sized {
    type Product: AsRef<Pizza> + fmt::Display;

    /// Adds a topping. Adding one that is already present changes nothing.
    fn add_topping(mut self, topping: Topping) -> Self {
        self.topping_set_mut().insert(topping);
        self
    }

    /// Creates a new, immutable pizza from the builder's current state.
    ///
    /// The builder is only read, so it can be built again and yields an equal
    /// pizza each time.
    fn build(&self) -> Self::Product;
}
