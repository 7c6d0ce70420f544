use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::builders::pizza::{Pizza, Topping};
use crate::core::kitchen::BakedPizza;

/// How a bake report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendering per line, as `Display` prints each pizza.
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "toml" => Ok(OutputFormat::Toml),
            _ => anyhow::bail!("Unsupported format: {}", s),
        }
    }
}

/// Everything baked in one run, in order.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BakeReport {
    pub pizzas: Vec<BakedPizza>,
}

impl BakeReport {
    pub fn new(pizzas: Vec<BakedPizza>) -> Self {
        Self { pizzas }
    }

    /// Renders the report in `format`.
    ///
    /// # Arguments
    /// * `format`: The output format.
    /// * `verbose`: Only affects the text format, where it appends a summary.
    ///
    /// # Returns
    /// The rendered report without a trailing newline.
    pub fn render(&self, format: OutputFormat, verbose: bool) -> Result<String> {
        let rendered = match format {
            OutputFormat::Text => ConsoleReporter::new().format_report(self, verbose),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")?
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(self).context("Failed to serialize report to YAML")?
            }
            OutputFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize report to TOML")?
            }
        };
        Ok(rendered.trim_end().to_string())
    }
}

/// The `BakeReporter` trait is the seam through which commands hand their
/// finished pizzas to the user.
pub trait BakeReporter {
    /// Writes `report` in `format`.
    ///
    /// # Arguments
    /// * `report`: The pizzas to report on.
    /// * `format`: The output format.
    /// * `verbose`: Adds a summary to text reports.
    ///
    /// # Returns
    /// An error only when a structured format fails to serialize.
    fn generate_bake_report(
        &self,
        report: &BakeReport,
        format: OutputFormat,
        verbose: bool,
    ) -> Result<()>;
}

/// Prints bake reports to stdout.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the text report: one rendering per pizza, then a summary of
    /// counts when `verbose` is set.
    pub fn format_report(&self, report: &BakeReport, verbose: bool) -> String {
        let mut lines: Vec<String> = report.pizzas.iter().map(BakedPizza::to_string).collect();

        if !verbose {
            return lines.join("\n");
        }

        let mut ny_count = 0;
        let mut calzone_count = 0;
        let mut toppings_used = BTreeSet::new();

        for pizza in &report.pizzas {
            match pizza {
                BakedPizza::NyPizza(_) => ny_count += 1,
                BakedPizza::Calzone(_) => calzone_count += 1,
            }
            let base: &Pizza = pizza.as_ref();
            toppings_used.extend(base.toppings().iter().copied());
        }

        let toppings_used: Vec<String> = toppings_used.iter().map(Topping::to_string).collect();

        lines.push(String::new());
        lines.push("📈 Summary:".to_string());
        lines.push(format!("  Total pizzas: {}", report.pizzas.len()));
        lines.push(format!("  New York pizzas: {ny_count}"));
        lines.push(format!("  Calzones: {calzone_count}"));
        lines.push(format!(
            "  Toppings used: {}",
            if toppings_used.is_empty() {
                "(none)".to_string()
            } else {
                toppings_used.join(", ")
            }
        ));

        lines.join("\n")
    }
}

impl BakeReporter for ConsoleReporter {
    fn generate_bake_report(
        &self,
        report: &BakeReport,
        format: OutputFormat,
        verbose: bool,
    ) -> Result<()> {
        let rendered = report.render(format, verbose)?;
        if !rendered.is_empty() {
            println!("{rendered}");
        }
        Ok(())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
