use chrono::{DateTime, Utc};
use common::{CustomerId, ItemId, RentalId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Lifecycle status of a rental booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentalStatus {
    /// Booked, awaiting pickup.
    #[default]
    Reserved,

    /// Picked up and currently out.
    Active,

    /// Returned in good order (terminal).
    Returned,

    /// Past its end date without a return.
    Late,

    /// Cancelled before pickup (terminal).
    Cancelled,
}

impl RentalStatus {
    /// Returns true if the rental still occupies inventory.
    pub fn is_open(&self) -> bool {
        matches!(self, RentalStatus::Reserved | RentalStatus::Active | RentalStatus::Late)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Reserved => "Reserved",
            RentalStatus::Active => "Active",
            RentalStatus::Returned => "Returned",
            RentalStatus::Late => "Late",
            RentalStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rented item line within a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalLine {
    pub item_id: ItemId,
    pub qty: u32,
    pub price_per_day: Money,
}

/// A rental booking for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub customer_id: CustomerId,
    pub items: Vec<RentalLine>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub deposit_amount: Money,
    pub total_amount: Money,
    pub status: RentalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_return: Option<Vec<String>>,
}

/// Number of chargeable rental days for a period.
///
/// The period is billed in whole days, rounding any partial day up, with a
/// floor of one day even when start and end coincide.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let secs = (end - start).num_seconds();
    if secs <= 0 {
        return 1;
    }
    let days = (secs as u64).div_ceil(86_400);
    days.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn whole_day_span_counts_exactly() {
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 4)), 3);
    }

    #[test]
    fn partial_day_rounds_up() {
        let start = date(2024, 1, 1);
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
        assert_eq!(rental_days(start, end), 2);
    }

    #[test]
    fn same_instant_bills_one_day() {
        let day = date(2024, 3, 10);
        assert_eq!(rental_days(day, day), 1);
    }

    #[test]
    fn open_statuses() {
        assert!(RentalStatus::Reserved.is_open());
        assert!(RentalStatus::Active.is_open());
        assert!(RentalStatus::Late.is_open());
        assert!(!RentalStatus::Returned.is_open());
        assert!(!RentalStatus::Cancelled.is_open());
    }

    #[test]
    fn status_serializes_pascal_case() {
        assert_eq!(
            serde_json::to_string(&RentalStatus::Reserved).unwrap(),
            "\"Reserved\""
        );
    }
}
