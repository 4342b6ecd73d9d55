use super::property::{IdentifiedProperty, RelinquishedProperty, ReplacementProperty};
use super::rates::TaxRates;
use super::timeline::{deadline_after, EXCHANGE_PERIOD_DAYS};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: Decimal },
    #[error("accumulated depreciation {depreciation} exceeds original basis {basis}")]
    DepreciationExceedsBasis { depreciation: Decimal, basis: Decimal },
    #[error("{field} must be between 0 and 100 percent (got {value})")]
    RateOutOfRange { field: String, value: Decimal },
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Input root for an exchange JSON file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExchangeInput {
    /// Optional label for the exchange
    #[serde(default)]
    pub name: Option<String>,
    /// Optional street address of the property being sold
    #[serde(default)]
    pub relinquished_address: Option<String>,
    pub relinquished: RelinquishedProperty,
    /// Replacement under contract, if any. A zero purchase price counts as none.
    #[serde(default)]
    pub replacement: Option<ReplacementProperty>,
    pub tax_rates: TaxRates,
    /// Closing date of the relinquished sale (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
    #[serde(deserialize_with = "deserialize_datetime")]
    #[schemars(with = "String")]
    pub sale_close_date: NaiveDateTime,
    /// Candidates named during the identification period
    #[serde(default)]
    pub identified_properties: Vec<IdentifiedProperty>,
}

impl ExchangeInput {
    /// The replacement property, ignoring placeholder entries with no purchase price
    pub fn replacement(&self) -> Option<&ReplacementProperty> {
        self.replacement
            .as_ref()
            .filter(|r| !r.purchase_price.is_zero())
    }

    pub fn validate(&self) -> Result<(), InputError> {
        self.relinquished.validate()?;
        if let Some(replacement) = &self.replacement {
            replacement.validate()?;
        }
        self.tax_rates.validate()?;
        check_deadlines_fit(self.sale_close_date)?;
        for property in &self.identified_properties {
            property.validate()?;
        }
        Ok(())
    }
}

/// Read an exchange from JSON
pub fn read_exchange_json<R: Read>(reader: R) -> anyhow::Result<ExchangeInput> {
    let input: ExchangeInput = serde_json::from_reader(reader)?;
    log::info!(
        "Read exchange {:?} with {} identified properties",
        input.name.as_deref().unwrap_or("(unnamed)"),
        input.identified_properties.len()
    );
    Ok(input)
}

/// CSV record format for candidate replacement properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub address: String,
    pub asking_price: Option<Decimal>,
    pub estimated_value: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CandidateRecord {
    fn into_property(self) -> Result<IdentifiedProperty, InputError> {
        let asking_price = self.asking_price.ok_or_else(|| {
            InputError::MissingField(format!("identified_properties[{}].asking_price", self.id))
        })?;
        let estimated_value = self.estimated_value.ok_or_else(|| {
            InputError::MissingField(format!(
                "identified_properties[{}].estimated_value",
                self.id
            ))
        })?;
        Ok(IdentifiedProperty {
            id: self.id,
            address: self.address,
            asking_price,
            estimated_value,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// Read candidate replacement properties from CSV
pub fn read_candidates_csv<R: Read>(reader: R) -> anyhow::Result<Vec<IdentifiedProperty>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut candidates = Vec::new();
    for result in rdr.deserialize() {
        let record: CandidateRecord = result?;
        candidates.push(record.into_property()?);
    }
    log::info!("Read {} candidate csv records", candidates.len());
    Ok(candidates)
}

/// Parse a date string that may be date-only or datetime format.
///
/// Dates too late for a 180-day exchange period to end are rejected.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, InputError> {
    let s = s.trim();
    let dt = parse_naive(s).ok_or_else(|| InputError::InvalidDate(s.to_string()))?;
    check_deadlines_fit(dt)?;
    Ok(dt)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    // Date-only input means midnight
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn check_deadlines_fit(sale_close: NaiveDateTime) -> Result<(), InputError> {
    match deadline_after(sale_close, EXCHANGE_PERIOD_DAYS) {
        Some(_) => Ok(()),
        None => Err(InputError::InvalidDate(format!(
            "{} is too late for a {}-day exchange period",
            sale_close, EXCHANGE_PERIOD_DAYS
        ))),
    }
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(serde::de::Error::custom)
}
