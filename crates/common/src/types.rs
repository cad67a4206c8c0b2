use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a string-backed identifier newtype.
///
/// The seed dataset uses short human-readable IDs (`"i1"`, `"cust-2"`), so
/// identifiers wrap a `String` rather than a raw UUID. Freshly generated IDs
/// carry an entity prefix followed by a v4 UUID.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a new prefixed random identifier.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4()))
            }

            /// Wraps an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a customer.
    CustomerId,
    "cust"
);
string_id!(
    /// Unique identifier for a stockable inventory item.
    ItemId,
    "item"
);
string_id!(
    /// Unique identifier for a rental booking.
    RentalId,
    "rent"
);
string_id!(
    /// Unique identifier for a custom tailoring order.
    CustomOrderId,
    "co"
);
string_id!(
    /// Unique identifier for a technician work order.
    WorkOrderId,
    "wo"
);
string_id!(
    /// Unique identifier for an invoice.
    InvoiceId,
    "inv"
);
string_id!(
    /// Unique identifier for a back-office user.
    UserId,
    "user"
);
string_id!(
    /// Unique identifier for a notification.
    NotificationId,
    "notif"
);
