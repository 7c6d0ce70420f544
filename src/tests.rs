use crate::builders::calzone::CalzoneBuilder;
use crate::builders::ny_pizza::{NyPizzaBuilder, Size};
use crate::builders::pizza::{Pizza, PizzaBuilder, Topping, ToppingSet};
use crate::builders::reporter::{BakeReport, ConsoleReporter, OutputFormat};
use crate::builders::validator::{OrderValidator, StandardValidator};
use crate::core::kitchen::{BakedPizza, Kitchen, dress};
use crate::core::order::OrderKind;
use crate::utils::demo_pizzas;

fn toppings_of<P: AsRef<Pizza>>(pizza: &P) -> &[Topping] {
    pizza.as_ref().toppings()
}

#[test]
fn test_ny_pizza_sample_rendering() {
    let pizza = NyPizzaBuilder::new(Size::Small)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Onion)
        .build();

    assert_eq!(pizza.to_string(), "size=SMALL, toppings=[SAUSAGE, ONION]");
    assert_eq!(pizza.size(), Size::Small);
}

#[test]
fn test_calzone_sample_rendering() {
    let calzone = CalzoneBuilder::new()
        .add_topping(Topping::Ham)
        .sauce_inside()
        .build();

    assert_eq!(calzone.to_string(), "sauceInside=true, toppings=[HAM]");
    assert!(calzone.is_sauce_inside());
}

#[test]
fn test_duplicate_toppings_collapse() {
    let pizza = NyPizzaBuilder::new(Size::Medium)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Onion)
        .build();

    let base: &Pizza = pizza.as_ref();
    assert_eq!(base.toppings(), &[Topping::Sausage, Topping::Onion]);
    assert!(base.has_topping(Topping::Sausage));
    assert!(!base.has_topping(Topping::Ham));
}

#[test]
fn test_build_without_toppings_is_plain() {
    let pizza = NyPizzaBuilder::new(Size::Large).build();
    let calzone = CalzoneBuilder::new().build();

    assert!(toppings_of(&pizza).is_empty());
    assert!(toppings_of(&calzone).is_empty());
    assert_eq!(pizza.to_string(), "size=LARGE, toppings=[]");
    assert_eq!(calzone.to_string(), "sauceInside=false, toppings=[]");
}

#[test]
fn test_ny_rendering_starts_with_size() {
    for (size, expected) in [
        (Size::Small, "size=SMALL"),
        (Size::Medium, "size=MEDIUM"),
        (Size::Large, "size=LARGE"),
    ] {
        let pizza = NyPizzaBuilder::new(size)
            .add_topping(Topping::Pepper)
            .build();
        assert!(pizza.to_string().starts_with(expected));
    }
}

#[test]
fn test_sauce_inside_flag() {
    let plain = CalzoneBuilder::new().add_topping(Topping::Mushroom).build();
    assert!(plain.to_string().contains("sauceInside=false"));

    let repeated = CalzoneBuilder::new()
        .sauce_inside()
        .add_topping(Topping::Mushroom)
        .sauce_inside()
        .sauce_inside()
        .build();
    assert!(repeated.to_string().contains("sauceInside=true"));
}

#[test]
fn test_rendering_has_no_side_effects() {
    let (pizza, calzone) = demo_pizzas();

    assert_eq!(pizza.to_string(), pizza.to_string());
    assert_eq!(calzone.to_string(), calzone.to_string());
}

#[test]
fn test_builder_can_be_built_twice() {
    let builder = CalzoneBuilder::new().add_topping(Topping::Onion);

    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);

    let extended = builder.add_topping(Topping::Ham).build();
    assert_eq!(toppings_of(&extended), &[Topping::Onion, Topping::Ham]);
    assert_eq!(toppings_of(&first), &[Topping::Onion]);
}

#[test]
fn test_chaining_keeps_concrete_builder() {
    // `add_topping` comes from the shared trait but must still allow the
    // calzone-only step afterwards.
    let builder: CalzoneBuilder = CalzoneBuilder::new().add_topping(Topping::Ham);
    let calzone = builder.sauce_inside().build();
    assert!(calzone.is_sauce_inside());
}

#[test]
fn test_topping_order_does_not_affect_equality() {
    let a = NyPizzaBuilder::new(Size::Small)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Onion)
        .build();
    let b = NyPizzaBuilder::new(Size::Small)
        .add_topping(Topping::Onion)
        .add_topping(Topping::Sausage)
        .build();

    assert_eq!(a, b);
    assert_ne!(a.to_string(), b.to_string());

    let c = NyPizzaBuilder::new(Size::Large)
        .add_topping(Topping::Onion)
        .add_topping(Topping::Sausage)
        .build();
    assert_ne!(a, c);
}

#[test]
fn test_topping_set_insert_and_display() {
    let mut set = ToppingSet::new();
    assert!(set.insert(Topping::Pepper));
    assert!(set.insert(Topping::Ham));
    assert!(!set.insert(Topping::Pepper));

    assert_eq!(set.len(), 2);
    assert_eq!(set.to_string(), "[PEPPER, HAM]");

    let collected: ToppingSet = Topping::ALL.iter().copied().chain(Topping::ALL).collect();
    assert_eq!(collected.len(), Topping::ALL.len());
}

#[test]
fn test_parse_topping_and_size() {
    assert_eq!("ham".parse::<Topping>().unwrap(), Topping::Ham);
    assert_eq!("SAUSAGE".parse::<Topping>().unwrap(), Topping::Sausage);
    assert_eq!(" Medium ".parse::<Size>().unwrap(), Size::Medium);

    assert!("pineapple".parse::<Topping>().is_err());
    assert!("huge".parse::<Size>().is_err());
    // Only case and surrounding whitespace are forgiven.
    assert!("mush-room".parse::<Topping>().is_err());
    assert!("extra_large".parse::<Size>().is_err());
}

#[test]
fn test_kitchen_matches_direct_builder() {
    let kitchen = Kitchen::new();

    let baked = kitchen.bake(&OrderKind::NyPizza {
        size: Size::Small,
        toppings: vec![Topping::Sausage, Topping::Onion],
    });
    let (expected_pizza, expected_calzone) = demo_pizzas();
    assert_eq!(baked, BakedPizza::NyPizza(expected_pizza));

    let baked = kitchen.bake(&OrderKind::Calzone {
        toppings: vec![Topping::Ham],
        sauce_inside: true,
    });
    assert_eq!(baked, BakedPizza::Calzone(expected_calzone));
    assert_eq!(baked.to_string(), "sauceInside=true, toppings=[HAM]");
}

#[test]
fn test_dress_adds_every_topping() {
    let builder = dress(
        NyPizzaBuilder::new(Size::Medium),
        &[Topping::Ham, Topping::Pepper, Topping::Ham],
    );
    assert_eq!(
        builder.build().to_string(),
        "size=MEDIUM, toppings=[HAM, PEPPER]"
    );
}

#[test]
fn test_validator_reports_duplicates() {
    let repeated = OrderKind::NyPizza {
        size: Size::Small,
        toppings: vec![Topping::Onion, Topping::Onion, Topping::Onion],
    };
    let orders = vec![repeated.clone(), repeated];

    let issues = StandardValidator::new().validate_orders(&orders).unwrap();

    assert_eq!(
        issues,
        vec![
            "Order 1: ny-pizza topping(s) listed more than once: ONION".to_string(),
            "Order 2: ny-pizza topping(s) listed more than once: ONION".to_string(),
        ]
    );
}

#[test]
fn test_validator_reports_each_order_once() {
    // Identical orders are separate requests, not duplicates of each other,
    // and a clean order contributes nothing.
    let clean = OrderKind::Calzone {
        toppings: vec![Topping::Ham],
        sauce_inside: false,
    };
    let sloppy = OrderKind::Calzone {
        toppings: vec![Topping::Pepper, Topping::Ham, Topping::Pepper, Topping::Ham],
        sauce_inside: true,
    };
    let orders = vec![clean.clone(), clean.clone(), sloppy.clone(), sloppy];

    let issues = StandardValidator::new().validate_orders(&orders).unwrap();

    assert_eq!(issues.len(), 2);
    assert!(issues[0].starts_with("Order 3: "));
    assert!(issues[1].starts_with("Order 4: "));
    assert!(issues[0].ends_with("listed more than once: PEPPER, HAM"));
}

#[test]
fn test_validator_accepts_clean_orders() {
    let validator = StandardValidator::new();

    let plain = OrderKind::Calzone {
        toppings: vec![],
        sauce_inside: false,
    };
    assert!(validator.validate_order(&plain).unwrap().is_empty());
    assert!(validator.validate_orders(&[]).unwrap().is_empty());
}

#[test]
fn test_bake_all_keeps_order() {
    let orders = vec![
        OrderKind::Calzone {
            toppings: vec![Topping::Ham],
            sauce_inside: true,
        },
        OrderKind::NyPizza {
            size: Size::Small,
            toppings: vec![Topping::Sausage, Topping::Onion],
        },
    ];

    let baked = Kitchen::new().bake_all(&orders);
    let rendered: Vec<String> = baked.iter().map(BakedPizza::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "sauceInside=true, toppings=[HAM]",
            "size=SMALL, toppings=[SAUSAGE, ONION]",
        ]
    );
}

#[test]
fn test_console_report() {
    let (pizza, calzone) = demo_pizzas();
    let report = BakeReport::new(vec![pizza.into(), calzone.into()]);

    let text = ConsoleReporter::new().format_report(&report, false);
    assert_eq!(
        text,
        "size=SMALL, toppings=[SAUSAGE, ONION]\nsauceInside=true, toppings=[HAM]"
    );

    let verbose = ConsoleReporter::new().format_report(&report, true);
    assert!(verbose.starts_with(&text));
    assert!(verbose.contains("Total pizzas: 2"));
    assert!(verbose.contains("New York pizzas: 1"));
    assert!(verbose.contains("Toppings used: HAM, ONION, SAUSAGE"));
}

#[test]
fn test_console_report_without_toppings() {
    let report = BakeReport::new(vec![CalzoneBuilder::new().build().into()]);

    let verbose = ConsoleReporter::new().format_report(&report, true);
    assert!(verbose.contains("Toppings used: (none)"));
}

#[test]
fn test_structured_report() {
    let baked = Kitchen::new().bake(&OrderKind::NyPizza {
        size: Size::Small,
        toppings: vec![Topping::Sausage, Topping::Onion],
    });
    let report = BakeReport::new(vec![baked]);

    let json = report.render(OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let pizza = &value["pizzas"][0];
    assert_eq!(pizza["kind"], "ny-pizza");
    assert_eq!(pizza["size"], "SMALL");
    assert_eq!(pizza["toppings"], serde_json::json!(["SAUSAGE", "ONION"]));

    let yaml = report.render(OutputFormat::Yaml, false).unwrap();
    assert!(yaml.contains("ny-pizza"));

    let toml = report.render(OutputFormat::Toml, false).unwrap();
    assert!(toml.contains("SMALL"));
    assert!(!toml.ends_with('\n'));
}

#[test]
fn test_parse_output_format() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert_eq!(" toml ".parse::<OutputFormat>().unwrap(), OutputFormat::Toml);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(OutputFormat::Text.to_string(), "text");

    assert!("xml".parse::<OutputFormat>().is_err());
}
