//! Headline numbers for the reports page and the dashboard.

use chrono::{DateTime, Utc};
use domain::{AppData, Money, RentalStatus};
use serde::Serialize;

/// Key metrics shown at the top of the reports page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Sum of `total_amount` over paid invoices.
    pub total_revenue: Money,
    /// Invoices containing at least one sale or purchase line.
    pub sale_invoices: usize,
    /// All rental bookings regardless of status.
    pub rental_count: usize,
    /// Custom orders not yet delivered.
    pub pending_orders: usize,
}

/// Computes the report summary for a snapshot.
pub fn report_summary(data: &AppData) -> ReportSummary {
    let total_revenue = data
        .invoices
        .iter()
        .filter(|i| i.paid)
        .map(|i| i.total_amount)
        .sum();

    let sale_invoices = data
        .invoices
        .iter()
        .filter(|i| {
            i.items.iter().any(|line| {
                line.description.starts_with("Sale:") || line.description.starts_with("Purchase:")
            })
        })
        .count();

    let pending_orders = data
        .custom_orders
        .iter()
        .filter(|o| !o.status.is_terminal())
        .count();

    ReportSummary {
        total_revenue,
        sale_invoices,
        rental_count: data.rentals.len(),
        pending_orders,
    }
}

/// Live counts for the operations dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Rentals currently out with customers.
    pub active_rentals: usize,
    /// Open rentals whose end date has passed.
    pub overdue_returns: usize,
    /// Reserved rentals due for pickup today.
    pub todays_pickups: usize,
}

/// Computes dashboard counts as of `now`.
pub fn dashboard_stats(data: &AppData, now: DateTime<Utc>) -> DashboardStats {
    let active_rentals = data
        .rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Active)
        .count();

    let overdue_returns = data
        .rentals
        .iter()
        .filter(|r| r.status.is_open() && r.end_date < now)
        .count();

    let todays_pickups = data
        .rentals
        .iter()
        .filter(|r| {
            r.status == RentalStatus::Reserved && r.start_date.date_naive() == now.date_naive()
        })
        .count();

    DashboardStats {
        active_rentals,
        overdue_returns,
        todays_pickups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain::seed::demo_data;

    #[test]
    fn summary_counts_seed_data() {
        let summary = report_summary(&demo_data());
        assert_eq!(summary.total_revenue, Money::from_rupees(2832));
        assert_eq!(summary.rental_count, 1);
        assert_eq!(summary.pending_orders, 1);
        // The seed invoice is a rental, not a sale.
        assert_eq!(summary.sale_invoices, 0);
    }

    #[test]
    fn dashboard_flags_overdue_open_rentals() {
        let data = demo_data();
        // Seed rental runs Feb 10-13 and is Active.
        let during = Utc.with_ymd_and_hms(2024, 2, 12, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap();

        let stats = dashboard_stats(&data, during);
        assert_eq!(stats.active_rentals, 1);
        assert_eq!(stats.overdue_returns, 0);

        let stats = dashboard_stats(&data, after);
        assert_eq!(stats.overdue_returns, 1);
    }

    #[test]
    fn pickup_counts_only_reserved_rentals_starting_today() {
        let mut data = demo_data();
        data.rentals[0].status = RentalStatus::Reserved;
        let pickup_day = data.rentals[0].start_date;

        let stats = dashboard_stats(&data, pickup_day);
        assert_eq!(stats.todays_pickups, 1);

        let other_day = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(dashboard_stats(&data, other_day).todays_pickups, 0);
    }
}
