//! Analyze command - full exchange report: timeline, taxes, boot and candidates

use super::{format_date, format_days, read_input, reference_now};
use chrono::NaiveDateTime;
use clap::Args;
use exchange1031::{
    analyze_exchange, format_pct, format_usd, parse_datetime, ExchangeAnalysis, TaxRates,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// JSON file describing the exchange ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// CSV file of candidate replacement properties (replaces those in the input)
    #[arg(short, long)]
    candidates: Option<PathBuf>,

    /// Reference date for deadline countdowns (defaults to now)
    #[arg(long, value_parser = parse_datetime)]
    now: Option<NaiveDateTime>,

    /// Mark the exchange as completed (replacement has closed)
    #[arg(long)]
    completed: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl AnalyzeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input, self.candidates.as_deref())?;
        let mut analysis = analyze_exchange(&input, reference_now(self.now))?;
        if self.completed {
            analysis.timeline = analysis.timeline.mark_completed();
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print_report(&analysis, &input.tax_rates);
        }
        Ok(())
    }
}

fn print_report(a: &ExchangeAnalysis, rates: &TaxRates) {
    let title = a.name.as_deref().unwrap_or("Untitled Exchange");
    let t = &a.timeline;
    let tax = &a.tax;

    println!();
    println!("1031 EXCHANGE ANALYSIS - {}", title);
    if let Some(address) = &a.relinquished_address {
        println!("Relinquished: {}", address);
    }
    println!();

    println!("TIMELINE ({})", t.status.display().to_uppercase());
    println!("  Sale closed: {}", format_date(t.sale_close_date));
    println!(
        "  Identify by: {} ({}) | Close by: {} ({})",
        format_date(t.identification_deadline),
        format_days(t.days_until_identification, t.identification_expired),
        format_date(t.exchange_deadline),
        format_days(t.days_until_exchange, t.exchange_expired)
    );
    println!();

    println!("GAIN");
    println!(
        "  Adjusted Basis: {} | Realized Gain: {}",
        format_usd(tax.adjusted_basis),
        format_usd(tax.realized_gain)
    );
    println!(
        "  Capital Gain: {} | Depreciation Recapture: {}",
        format_usd(tax.capital_gain),
        format_usd(tax.depreciation_recapture)
    );
    println!();

    println!("TAX WITHOUT EXCHANGE");
    println!(
        "  Federal @ {}: {} | State @ {}: {}",
        format_pct(rates.federal_capital_gains_rate),
        format_usd(tax.federal_capital_gains_tax),
        format_pct(rates.state_capital_gains_rate),
        format_usd(tax.state_capital_gains_tax)
    );
    println!(
        "  Recapture @ {}: {} | NIIT @ {}: {}",
        format_pct(rates.depreciation_recapture_rate),
        format_usd(tax.depreciation_recapture_tax),
        format_pct(rates.net_investment_income_tax_rate),
        format_usd(tax.net_investment_income_tax)
    );
    println!("  Total: {}", format_usd(tax.total_tax_without_exchange));
    println!();

    println!("WITH EXCHANGE");
    println!(
        "  Cash Boot: {} | Mortgage Boot: {} | Total Boot: {}",
        format_usd(tax.cash_boot),
        format_usd(tax.mortgage_boot),
        format_usd(tax.total_boot)
    );
    println!(
        "  Taxable Gain from Boot: {} | Tax: {}",
        format_usd(tax.taxable_gain_from_boot),
        format_usd(tax.tax_with_exchange)
    );
    println!(
        "  Deferred Gain: {} | New Property Basis: {}",
        format_usd(tax.deferred_gain),
        format_usd(tax.new_property_basis)
    );
    println!("  Tax Savings: {}", format_usd(tax.tax_savings));
    println!();

    let r = &a.requirements;
    println!("REPLACEMENT REQUIREMENTS");
    println!(
        "  Minimum Price: {} | Minimum Equity: {} | Minimum Debt: {}",
        format_usd(r.minimum_purchase_price),
        format_usd(r.minimum_equity),
        format_usd(r.minimum_debt)
    );
    println!();

    println!("IDENTIFICATION");
    println!(
        "  Three Property Rule: {} - {}",
        pass_fail(a.three_property_rule.valid),
        a.three_property_rule.message
    );
    println!(
        "  200% Rule: {} - {}",
        pass_fail(a.two_hundred_percent_rule.valid),
        a.two_hundred_percent_rule.message
    );

    for (i, c) in a.comparisons.iter().enumerate() {
        println!(
            "  {}. {} - value {}, boot {}, savings {} [{}]",
            i + 1,
            c.property.address,
            format_usd(c.property.estimated_value),
            format_usd(c.estimated_boot),
            format_usd(c.estimated_tax_savings),
            c.recommendation
        );
    }
    println!();
}

fn pass_fail(valid: bool) -> &'static str {
    if valid {
        "\u{2713}"
    } else {
        "\u{2717}"
    }
}
