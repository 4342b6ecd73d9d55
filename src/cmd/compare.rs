//! Compare command - candidate replacement properties side by side

use super::read_input;
use clap::Args;
use exchange1031::{compare_candidates, format_usd, rank_comparisons, ReplacementComparison};
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// JSON file describing the exchange ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// CSV file of candidate replacement properties (replaces those in the input)
    #[arg(short, long)]
    candidates: Option<PathBuf>,

    /// Order best candidate first instead of input order
    #[arg(long)]
    ranked: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input, self.candidates.as_deref())?;
        input.validate()?;

        let comparisons = compare_candidates(
            &input.relinquished,
            &input.tax_rates,
            &input.identified_properties,
        );
        let ordered: Vec<&ReplacementComparison> = if self.ranked {
            rank_comparisons(&comparisons)
        } else {
            comparisons.iter().collect()
        };
        let rows: Vec<ComparisonRow> = ordered
            .iter()
            .enumerate()
            .map(|(i, c)| ComparisonRow::new(i + 1, c))
            .collect();

        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[ComparisonRow]) {
        if rows.is_empty() {
            println!("No candidate properties identified");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(3..7)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[ComparisonRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the comparison table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct ComparisonRow {
    #[tabled(rename = "#")]
    #[serde(rename = "row_num")]
    pub row_num: usize,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Address")]
    pub address: String,

    #[tabled(rename = "Asking")]
    pub asking_price: String,

    #[tabled(rename = "Est. Value")]
    pub estimated_value: String,

    #[tabled(rename = "Est. Boot")]
    pub estimated_boot: String,

    #[tabled(rename = "Tax Savings")]
    pub estimated_tax_savings: String,

    #[tabled(rename = "Min. Price")]
    pub meets_minimum_price: String,

    #[tabled(rename = "Recommendation")]
    pub recommendation: String,
}

impl ComparisonRow {
    fn new(row_num: usize, c: &ReplacementComparison) -> Self {
        ComparisonRow {
            row_num,
            id: c.property.id.clone(),
            address: c.property.address.clone(),
            asking_price: format_usd(c.property.asking_price),
            estimated_value: format_usd(c.property.estimated_value),
            estimated_boot: format_usd(c.estimated_boot),
            estimated_tax_savings: format_usd(c.estimated_tax_savings),
            meets_minimum_price: if c.meets_minimum_price { "yes" } else { "no" }.to_string(),
            recommendation: c.recommendation.display().to_string(),
        }
    }
}
