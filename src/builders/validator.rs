use anyhow::Result;
use std::collections::HashSet;

use crate::builders::pizza::Topping;
use crate::core::order::OrderKind;

/// The `OrderValidator` trait defines the public interface for checking
/// orders before they are baked.
///
/// Validation never rejects what the builders would accept; it reports things
/// the person ordering probably did not mean, such as a topping listed twice.
pub trait OrderValidator {
    /// Validates a batch of orders and returns every issue found.
    ///
    /// # Arguments
    /// * `orders`: The orders to be validated, in the order they were placed.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` where each string describes one issue and names
    /// the 1-based position of the order it belongs to. An empty vector means
    /// every order is clean.
    fn validate_orders(&self, orders: &[OrderKind]) -> Result<Vec<String>>;

    /// Validates a single order.
    ///
    /// # Arguments
    /// * `order`: The order to be validated.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` with at most one issue per problem kind.
    fn validate_order(&self, order: &OrderKind) -> Result<Vec<String>>;
}

/// The `StandardValidator` is the validator used by the `ny` and `calzone`
/// commands.
pub struct StandardValidator;

impl StandardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Finds toppings that appear more than once in a request. They are
    /// harmless, the builder collapses them, but usually a typo.
    ///
    /// Each duplicate is reported once, in the order it was first repeated.
    fn find_duplicate_toppings(&self, toppings: &[Topping]) -> Vec<Topping> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for topping in toppings {
            if !seen.insert(*topping) && !duplicates.contains(topping) {
                duplicates.push(*topping);
            }
        }

        duplicates
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderValidator for StandardValidator {
    fn validate_orders(&self, orders: &[OrderKind]) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        for (index, order) in orders.iter().enumerate() {
            for issue in self.validate_order(order)? {
                issues.push(format!("Order {}: {}", index + 1, issue));
            }
        }

        Ok(issues)
    }

    fn validate_order(&self, order: &OrderKind) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        let duplicates = self.find_duplicate_toppings(order.requested_toppings());
        if !duplicates.is_empty() {
            let names: Vec<String> = duplicates.iter().map(|t| t.to_string()).collect();
            issues.push(format!(
                "{} topping(s) listed more than once: {}",
                order,
                names.join(", ")
            ));
        }

        Ok(issues)
    }
}
