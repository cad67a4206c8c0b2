//! Read-side summaries for the boutique retail system.
//!
//! Everything here is a pure function over a borrowed snapshot. The write
//! side never consults these numbers; they exist for dashboards and the
//! reports page.

pub mod monthly;
pub mod rankings;
pub mod summary;

pub use monthly::{MonthlyRevenue, monthly_revenue};
pub use rankings::{CustomerSpend, ItemQuantity, top_customers, top_purchased, top_rented};
pub use summary::{DashboardStats, ReportSummary, dashboard_stats, report_summary};
