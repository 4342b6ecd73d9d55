//! Timeline command - 45-day and 180-day deadlines for a sale

use super::{format_date, format_days, reference_now};
use chrono::NaiveDateTime;
use clap::Args;
use exchange1031::{compute_timeline, parse_datetime};

#[derive(Args, Debug)]
pub struct TimelineCommand {
    /// Closing date of the relinquished sale (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_datetime)]
    sale_close: NaiveDateTime,

    /// Reference date for the countdown (defaults to now)
    #[arg(long, value_parser = parse_datetime)]
    now: Option<NaiveDateTime>,

    /// Mark the exchange as completed (replacement has closed)
    #[arg(long)]
    completed: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl TimelineCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut timeline = compute_timeline(self.sale_close, reference_now(self.now));
        if self.completed {
            timeline = timeline.mark_completed();
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&timeline)?);
            return Ok(());
        }

        println!();
        println!("EXCHANGE TIMELINE - {}", timeline.status.display().to_uppercase());
        println!();
        println!("  Sale closed:              {}", format_date(timeline.sale_close_date));
        println!(
            "  Identification deadline:  {} ({})",
            format_date(timeline.identification_deadline),
            format_days(
                timeline.days_until_identification,
                timeline.identification_expired
            )
        );
        println!(
            "  Exchange deadline:        {} ({})",
            format_date(timeline.exchange_deadline),
            format_days(timeline.days_until_exchange, timeline.exchange_expired)
        );
        println!();
        Ok(())
    }
}
