pub mod analysis;
pub mod boot;
pub mod comparison;
pub mod exchange;
pub mod gain;
pub mod identification;
pub mod input;
pub mod money;
pub mod property;
pub mod rates;
pub mod requirements;
pub mod timeline;

// Flat public surface for domain types and functions.
pub use analysis::{compute_tax_analysis, TaxAnalysis};
pub use boot::{compute_boot, BootAnalysis};
pub use comparison::{compare_candidates, rank_comparisons, Recommendation, ReplacementComparison};
pub use exchange::{analyze_exchange, ExchangeAnalysis};
pub use gain::{compute_gain_and_tax, GainAnalysis, TaxComponents};
pub use identification::{
    validate_three_property_rule, validate_two_hundred_percent_rule, ThreePropertyCheck,
    TwoHundredPercentCheck,
};
pub use input::{
    parse_datetime, read_candidates_csv, read_exchange_json, CandidateRecord, ExchangeInput,
    InputError,
};
pub use money::{format_pct, format_usd};
pub use property::{IdentifiedProperty, RelinquishedProperty, ReplacementProperty};
pub use rates::TaxRates;
pub use requirements::{compute_minimum_requirements, ReplacementRequirements};
pub use timeline::{compute_timeline, deadline_after, ExchangeStatus, TimelineStatus};
