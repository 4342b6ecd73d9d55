pub mod analyze;
pub mod compare;
pub mod schema;
pub mod timeline;
pub mod validate;

use chrono::NaiveDateTime;
use exchange1031::{read_candidates_csv, read_exchange_json, ExchangeInput};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read an exchange (JSON) from a file or stdin with "-", optionally
/// replacing its candidates with those from a CSV file
pub fn read_input(path: &Path, candidates: Option<&Path>) -> anyhow::Result<ExchangeInput> {
    let mut input = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_exchange_json(BufReader::new(File::open(path)?))?
    };

    if let Some(csv_path) = candidates {
        input.identified_properties = read_candidates_csv(File::open(csv_path)?)?;
    }
    Ok(input)
}

fn read_from_stdin() -> anyhow::Result<ExchangeInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    read_exchange_json(io::Cursor::new(buffer))
}

/// Reference instant for deadline countdowns; the local clock unless overridden
pub fn reference_now(now: Option<NaiveDateTime>) -> NaiveDateTime {
    now.unwrap_or_else(|| chrono::Local::now().naive_local())
}

pub fn format_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_days(days: i64, expired: bool) -> String {
    if expired {
        "EXPIRED".to_string()
    } else if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
