//! Validate command - check identified candidates against the identification rules

use super::read_input;
use clap::Args;
use exchange1031::{
    format_usd, validate_three_property_rule, validate_two_hundred_percent_rule,
    IdentifiedProperty, ThreePropertyCheck, TwoHundredPercentCheck,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// JSON file describing the exchange ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// CSV file of candidate replacement properties (replaces those in the input)
    #[arg(short, long)]
    candidates: Option<PathBuf>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    identified_count: usize,
    three_property_rule: ThreePropertyCheck,
    two_hundred_percent_rule: TwoHundredPercentCheck,
    satisfied: bool,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input, self.candidates.as_deref())?;
        input.validate()?;

        let properties = &input.identified_properties;
        let three = validate_three_property_rule(properties);
        let two_hundred =
            validate_two_hundred_percent_rule(properties, input.relinquished.sale_price);

        // Either rule is enough on its own
        let output = ValidationOutput {
            identified_count: properties.len(),
            satisfied: three.valid || two_hundred.valid,
            three_property_rule: three,
            two_hundred_percent_rule: two_hundred,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_text(&output, &input.identified_properties);
        }

        // Exit with code 1 if no rule is satisfied
        if !output.satisfied {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn print_text(output: &ValidationOutput, properties: &[IdentifiedProperty]) {
    println!();
    println!("IDENTIFICATION RULES ({} identified)", output.identified_count);
    println!();

    for (i, p) in properties.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, p.address, format_usd(p.estimated_value));
    }
    if !properties.is_empty() {
        println!();
    }

    let three = &output.three_property_rule;
    let two_hundred = &output.two_hundred_percent_rule;
    print_rule("Three Property Rule", three.valid, &three.message);
    print_rule("200% Rule", two_hundred.valid, &two_hundred.message);
    println!();

    if output.satisfied {
        println!("\u{2713} Identification satisfies at least one rule.");
    } else {
        println!("\u{26A0} Identification satisfies neither rule.");
    }
}

fn print_rule(name: &str, valid: bool, message: &str) {
    let mark = if valid { "\u{2713}" } else { "\u{2717}" };
    println!("  {} {}: {}", mark, name, message);
}
