use anyhow::Result;

use crate::builders::calzone::{Calzone, CalzoneBuilder};
use crate::builders::ny_pizza::{NyPizza, NyPizzaBuilder, Size};
use crate::builders::pizza::{PizzaBuilder, Topping};
use crate::builders::reporter::{BakeReport, BakeReporter, ConsoleReporter, OutputFormat};
use crate::builders::validator::{OrderValidator, StandardValidator};
use crate::core::kitchen::Kitchen;
use crate::core::order::OrderKind;

/// The two sample pizzas: a small New York pizza with sausage and onion, and
/// a ham calzone with the sauce inside.
pub fn demo_pizzas() -> (NyPizza, Calzone) {
    let pizza = NyPizzaBuilder::new(Size::Small)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Onion)
        .build();
    let calzone = CalzoneBuilder::new()
        .add_topping(Topping::Ham)
        .sauce_inside()
        .build();
    (pizza, calzone)
}

/// Prints the two sample pizzas. This is what the binary does when run
/// without a subcommand.
///
/// # Arguments
/// * `format`: How to print them. `Text` gives one rendering per line.
/// * `verbose`: Adds a summary to the text output.
pub fn run_demo(format: OutputFormat, verbose: bool) -> Result<()> {
    let (pizza, calzone) = demo_pizzas();
    let report = BakeReport::new(vec![pizza.into(), calzone.into()]);
    ConsoleReporter::new().generate_bake_report(&report, format, verbose)
}

/// Bakes a single pizza straight from the command line.
///
/// Validation issues, such as a topping given twice, are logged as warnings;
/// the pizza is still baked.
///
/// # Arguments
/// * `kind`: The order as parsed from the command line.
/// * `format`: How to print the result.
/// * `verbose`: Adds a summary to the text output.
pub fn place_order(kind: OrderKind, format: OutputFormat, verbose: bool) -> Result<()> {
    for issue in StandardValidator::new().validate_order(&kind)? {
        tracing::warn!("{}", issue);
    }

    let report = BakeReport::new(vec![Kitchen::new().bake(&kind)]);
    ConsoleReporter::new().generate_bake_report(&report, format, verbose)
}
