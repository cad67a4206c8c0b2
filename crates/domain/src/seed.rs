//! Fixed demo dataset used to (re-)initialize an empty store.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    Customer, CustomOrder, CustomOrderStatus, Invoice, InvoiceItem, Item, ItemStatus,
    MeasurementProfile, MeasurementUnit, Notification, NotificationKind, Rental, RentalLine,
    RentalStatus, Role, User,
};
use crate::model::WorkOrder;
use crate::money::Money;
use crate::snapshot::AppData;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
}

/// Builds the seed snapshot for the demo boutique.
///
/// IDs are short and human-readable on purpose; generated entities use the
/// longer prefixed form from `common`.
pub fn demo_data() -> AppData {
    let customers = vec![
        Customer {
            id: "cust-1".into(),
            name: "Priya Nair".to_string(),
            phone: "+91 98450 11223".to_string(),
            email: "priya@example.com".to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
            measurement_profile: MeasurementProfile {
                bust: Some(36.0),
                waist: Some(28.0),
                hip: Some(38.0),
                length: Some(42.0),
                sleeve: None,
                units: MeasurementUnit::Inches,
            },
            notes: "Prefers pastel shades".to_string(),
            created_at: day(2023, 11, 4),
        },
        Customer {
            id: "cust-2".into(),
            name: "Ananya Iyer".to_string(),
            phone: "+91 99860 44556".to_string(),
            email: "ananya@example.com".to_string(),
            address: "4 Lake View Lane, Kochi".to_string(),
            measurement_profile: MeasurementProfile {
                bust: Some(34.0),
                waist: Some(27.0),
                hip: Some(36.5),
                length: None,
                sleeve: Some(22.0),
                units: MeasurementUnit::Inches,
            },
            notes: String::new(),
            created_at: day(2024, 1, 19),
        },
    ];

    let items = vec![
        Item {
            id: "i1".into(),
            sku: "SAREE-001".to_string(),
            title: "Banarasi Silk Saree".to_string(),
            category: "Sarees".to_string(),
            subcategory: Some("Silk".to_string()),
            sizes: vec!["Free".to_string()],
            color: "Maroon".to_string(),
            qty: 5,
            rent_price_per_day: Money::from_rupees(400),
            buy_price: Money::from_rupees(12_000),
            condition: "New".to_string(),
            images: vec!["/images/saree-001.jpg".to_string()],
            status: ItemStatus::Available,
            description: "Handwoven Banarasi silk with zari border".to_string(),
            tags: Some(vec!["wedding".to_string(), "silk".to_string()]),
        },
        Item {
            id: "i2".into(),
            sku: "LEHENGA-002".to_string(),
            title: "Bridal Lehenga".to_string(),
            category: "Lehengas".to_string(),
            subcategory: None,
            sizes: vec!["S".to_string(), "M".to_string()],
            color: "Red".to_string(),
            qty: 2,
            rent_price_per_day: Money::from_rupees(1500),
            buy_price: Money::from_rupees(45_000),
            condition: "New".to_string(),
            images: vec![],
            status: ItemStatus::Available,
            description: "Heavily embroidered bridal lehenga".to_string(),
            tags: None,
        },
        Item {
            id: "i3".into(),
            sku: "SHERWANI-003".to_string(),
            title: "Ivory Sherwani".to_string(),
            category: "Menswear".to_string(),
            subcategory: None,
            sizes: vec!["M".to_string(), "L".to_string(), "XL".to_string()],
            color: "Ivory".to_string(),
            qty: 3,
            rent_price_per_day: Money::from_rupees(800),
            buy_price: Money::from_rupees(18_000),
            condition: "Good".to_string(),
            images: vec![],
            status: ItemStatus::Rented,
            description: "Classic ivory sherwani with churidar".to_string(),
            tags: None,
        },
    ];

    let rentals = vec![Rental {
        id: "rent-1".into(),
        customer_id: "cust-2".into(),
        items: vec![RentalLine {
            item_id: "i3".into(),
            qty: 1,
            price_per_day: Money::from_rupees(800),
        }],
        start_date: day(2024, 2, 10),
        end_date: day(2024, 2, 13),
        deposit_amount: Money::from_rupees(4500),
        total_amount: Money::from_rupees(2400),
        status: RentalStatus::Active,
        pickup_location: Some("Store".to_string()),
        return_location: None,
        damage_notes: None,
        photos_return: None,
    }];

    let custom_orders = vec![CustomOrder {
        id: "co-1".into(),
        customer_id: "cust-1".into(),
        title: "Pastel Anarkali".to_string(),
        description: "Floor-length anarkali in powder blue georgette".to_string(),
        material_provided: false,
        material_notes: None,
        measurement_snapshot: MeasurementProfile {
            bust: Some(36.0),
            waist: Some(28.0),
            hip: Some(38.0),
            length: Some(42.0),
            sleeve: None,
            units: MeasurementUnit::Inches,
        },
        design_images: None,
        assigned_tailor_id: Some("user-3".into()),
        price_estimate: Money::from_rupees(15_000),
        actual_cost: None,
        status: CustomOrderStatus::Stitching,
        due_date: day(2024, 3, 20),
        created_at: day(2024, 2, 24),
    }];

    let work_orders = vec![WorkOrder {
        id: "wo-1".into(),
        custom_order_id: "co-1".into(),
        task_list: Some(vec![
            "Cut georgette panels".to_string(),
            "Stitch bodice".to_string(),
        ]),
        start_date: Some(day(2024, 2, 26)),
        end_date: None,
        status: CustomOrderStatus::Stitching,
        technician_notes: None,
        photos: None,
    }];

    let invoices = vec![Invoice {
        id: "inv-1".into(),
        customer_id: "cust-2".into(),
        related_ref: Some("rent-1".to_string()),
        amount: Money::from_rupees(2400),
        tax: Money::from_rupees(432),
        discount: Money::zero(),
        total_amount: Money::from_rupees(2832),
        payment_method: "Card".to_string(),
        paid: true,
        paid_at: Some(day(2024, 2, 10)),
        items: vec![InvoiceItem {
            item_id: "i3".into(),
            description: "Rental: Ivory Sherwani (3 days)".to_string(),
            qty: 1,
            unit_price: Money::from_rupees(2400),
            total: Money::from_rupees(2400),
        }],
        created_at: day(2024, 2, 10),
    }];

    let users = vec![
        User {
            id: "user-1".into(),
            name: "Meera Shah".to_string(),
            role: Role::Admin,
            email: "meera@example.com".to_string(),
        },
        User {
            id: "user-2".into(),
            name: "Rohit Verma".to_string(),
            role: Role::Manager,
            email: "rohit@example.com".to_string(),
        },
        User {
            id: "user-3".into(),
            name: "Salim Khan".to_string(),
            role: Role::Tailor,
            email: "salim@example.com".to_string(),
        },
    ];

    let notifications = vec![Notification {
        id: "notif-1".into(),
        kind: NotificationKind::Warning,
        message: "Rental rent-1 is due back on Feb 13".to_string(),
        recipient_role: Role::Manager,
        sent_at: day(2024, 2, 12),
    }];

    AppData {
        customers,
        items,
        rentals,
        custom_orders,
        work_orders,
        invoices,
        users,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_invoices_are_balanced() {
        for invoice in demo_data().invoices {
            assert!(invoice.is_balanced(), "invoice {} out of balance", invoice.id);
        }
    }

    #[test]
    fn seed_work_orders_mirror_their_orders() {
        let data = demo_data();
        for wo in &data.work_orders {
            let order = data.custom_order(&wo.custom_order_id).unwrap();
            assert_eq!(wo.status, order.status);
        }
    }

    #[test]
    fn seed_rentals_reference_known_entities() {
        let data = demo_data();
        for rental in &data.rentals {
            assert!(data.customer(&rental.customer_id).is_some());
            for line in &rental.items {
                assert!(data.item(&line.item_id).is_some());
            }
        }
    }
}
