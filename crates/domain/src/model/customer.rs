use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

/// Unit of measure for a measurement profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MeasurementUnit {
    #[default]
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "cm")]
    Centimeters,
}

/// Body measurements kept on a customer profile and snapshotted onto
/// custom orders at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MeasurementProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<f64>,
    pub units: MeasurementUnit,
}

/// Explicit per-order measurement overrides supplied at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MeasurementOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<MeasurementUnit>,
}

impl MeasurementProfile {
    /// Returns a copy of this profile with any override fields applied.
    pub fn merged_with(&self, overrides: &MeasurementOverrides) -> MeasurementProfile {
        MeasurementProfile {
            bust: overrides.bust.or(self.bust),
            waist: overrides.waist.or(self.waist),
            hip: overrides.hip.or(self.hip),
            length: overrides.length.or(self.length),
            sleeve: overrides.sleeve.or(self.sleeve),
            units: overrides.units.unwrap_or(self.units),
        }
    }
}

/// A customer with contact details and a measurement profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub measurement_profile: MeasurementProfile,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
