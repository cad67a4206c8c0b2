//! Paid-invoice revenue grouped by calendar month.

use std::collections::BTreeMap;

use chrono::Datelike;
use domain::{AppData, Money};
use serde::Serialize;

/// Revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: Money,
    /// Change versus the previous listed month, in percent. `None` for the
    /// first month or when the previous month's revenue was zero.
    pub change_pct: Option<f64>,
}

/// Groups paid invoices by the month they were created, oldest first, with
/// month-over-month change.
pub fn monthly_revenue(data: &AppData) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for invoice in data.invoices.iter().filter(|i| i.paid) {
        let key = (invoice.created_at.year(), invoice.created_at.month());
        let entry = buckets.entry(key).or_insert_with(Money::zero);
        *entry += invoice.total_amount;
    }

    let mut months = Vec::with_capacity(buckets.len());
    let mut prev: Option<Money> = None;
    for ((year, month), revenue) in buckets {
        let change_pct = prev.and_then(|p| {
            if p.is_zero() {
                None
            } else {
                Some((revenue.paise() - p.paise()) as f64 / p.paise() as f64 * 100.0)
            }
        });
        months.push(MonthlyRevenue {
            year,
            month,
            revenue,
            change_pct,
        });
        prev = Some(revenue);
    }
    months
}
