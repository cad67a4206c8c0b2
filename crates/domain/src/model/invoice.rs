use chrono::{DateTime, Utc};
use common::{CustomerId, InvoiceId, ItemId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One billed line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub item_id: ItemId,
    pub description: String,
    pub qty: u32,
    pub unit_price: Money,
    pub total: Money,
}

/// A customer invoice.
///
/// `related_ref` links back to the originating rental or sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_ref: Option<String>,
    pub amount: Money,
    pub tax: Money,
    pub discount: Money,
    pub total_amount: Money,
    pub payment_method: String,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub items: Vec<InvoiceItem>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Returns true if `total_amount == amount + tax - discount` exactly.
    pub fn is_balanced(&self) -> bool {
        self.total_amount == self.amount + self.tax - self.discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(amount: i64, tax: i64, discount: i64, total: i64) -> Invoice {
        Invoice {
            id: "inv-1".into(),
            customer_id: "cust-1".into(),
            related_ref: None,
            amount: Money::from_rupees(amount),
            tax: Money::from_rupees(tax),
            discount: Money::from_rupees(discount),
            total_amount: Money::from_rupees(total),
            payment_method: "Cash".to_string(),
            paid: true,
            paid_at: None,
            items: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn balanced_invoice_checks_out() {
        assert!(invoice(3000, 540, 0, 3540).is_balanced());
        assert!(invoice(1000, 180, 100, 1080).is_balanced());
    }

    #[test]
    fn unbalanced_invoice_is_detected() {
        assert!(!invoice(3000, 540, 0, 3541).is_balanced());
    }
}
