//! Entity types making up the persisted snapshot.

pub mod custom_order;
pub mod customer;
pub mod invoice;
pub mod item;
pub mod rental;
pub mod user;

pub use custom_order::{CustomOrder, CustomOrderStatus, STAGE_SEQUENCE, WorkOrder};
pub use customer::{Customer, MeasurementOverrides, MeasurementProfile, MeasurementUnit};
pub use invoice::{Invoice, InvoiceItem};
pub use item::{Item, ItemStatus};
pub use rental::{Rental, RentalLine, RentalStatus, rental_days};
pub use user::{Notification, NotificationKind, Role, User};
