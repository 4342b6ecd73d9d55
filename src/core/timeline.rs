use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// Calendar days after the sale to identify replacement candidates
pub const IDENTIFICATION_PERIOD_DAYS: i64 = 45;
/// Calendar days after the sale to close on the replacement
pub const EXCHANGE_PERIOD_DAYS: i64 = 180;
/// Days before the identification deadline that count as urgent
pub const IDENTIFICATION_WARNING_DAYS: i64 = 7;
/// Days before the exchange deadline that count as urgent
pub const EXCHANGE_WARNING_DAYS: i64 = 30;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeStatus {
    OnTrack,
    IdentificationUrgent,
    ExchangeUrgent,
    IdentificationExpired,
    ExchangeExpired,
    /// Replacement has closed. Only ever set by the caller.
    Completed,
}

impl ExchangeStatus {
    pub fn display(&self) -> &'static str {
        match self {
            ExchangeStatus::OnTrack => "On Track",
            ExchangeStatus::IdentificationUrgent => "Identification Urgent",
            ExchangeStatus::ExchangeUrgent => "Exchange Urgent",
            ExchangeStatus::IdentificationExpired => "Identification Expired",
            ExchangeStatus::ExchangeExpired => "Exchange Expired",
            ExchangeStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ExchangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStatus {
    pub sale_close_date: NaiveDateTime,
    pub identification_deadline: NaiveDateTime,
    pub exchange_deadline: NaiveDateTime,
    pub days_until_identification: i64,
    pub days_until_exchange: i64,
    pub identification_expired: bool,
    pub exchange_expired: bool,
    pub status: ExchangeStatus,
}

impl TimelineStatus {
    /// Record that the replacement has closed.
    ///
    /// Deadlines and day counts are left as computed.
    pub fn mark_completed(mut self) -> Self {
        self.status = ExchangeStatus::Completed;
        self
    }
}

/// Compute the 45-day and 180-day deadlines for a sale closing at `sale_close`,
/// measured against the reference instant `now`.
///
/// Deadlines past the last representable date saturate to `NaiveDateTime::MAX`.
pub fn compute_timeline(sale_close: NaiveDateTime, now: NaiveDateTime) -> TimelineStatus {
    let identification_deadline = deadline_after(sale_close, IDENTIFICATION_PERIOD_DAYS)
        .unwrap_or(NaiveDateTime::MAX);
    let exchange_deadline =
        deadline_after(sale_close, EXCHANGE_PERIOD_DAYS).unwrap_or(NaiveDateTime::MAX);

    let days_until_identification = days_until(identification_deadline, now);
    let days_until_exchange = days_until(exchange_deadline, now);

    let identification_expired = days_until_identification < 0;
    let exchange_expired = days_until_exchange < 0;

    let status = if exchange_expired {
        ExchangeStatus::ExchangeExpired
    } else if identification_expired {
        ExchangeStatus::IdentificationExpired
    } else if days_until_identification <= IDENTIFICATION_WARNING_DAYS {
        ExchangeStatus::IdentificationUrgent
    } else if days_until_exchange <= EXCHANGE_WARNING_DAYS {
        ExchangeStatus::ExchangeUrgent
    } else {
        ExchangeStatus::OnTrack
    };

    log::debug!(
        "Timeline: sale={}, identify by {} ({} days), close by {} ({} days), status={}",
        sale_close,
        identification_deadline,
        days_until_identification,
        exchange_deadline,
        days_until_exchange,
        status
    );

    TimelineStatus {
        sale_close_date: sale_close,
        identification_deadline,
        exchange_deadline,
        days_until_identification,
        days_until_exchange,
        identification_expired,
        exchange_expired,
        status,
    }
}

/// `days` calendar days after `sale_close`, or `None` if the result is out of range
pub fn deadline_after(sale_close: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    sale_close.checked_add_signed(Duration::days(days))
}

/// Whole days from `now` until `deadline`, rounded up.
/// The deadline day itself yields 0.
fn days_until(deadline: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let ms = (deadline - now).num_milliseconds();
    let days = ms.div_euclid(MS_PER_DAY);
    if ms.rem_euclid(MS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}
