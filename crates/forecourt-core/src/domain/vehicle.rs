use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a vehicle on the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Pending,
    Sold,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Pending => "pending",
            VehicleStatus::Sold => "sold",
        }
    }
}

/// An immutable, fully-populated view of one vehicle, sourced from the
/// inventory store.
///
/// The content generator only ever borrows a snapshot; nothing in this
/// subsystem mutates it. Optional fields may be absent and every formatter
/// handles absence by omitting the line or substituting "N/A".
///
/// Posting timestamps are tracking data supplied by the store. This system
/// displays them but never writes them - generation is a pure computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub trim: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    /// Asking price in whole dollars.
    pub price: Option<i64>,
    pub mileage: Option<i64>,
    /// Ordered by display priority; generators truncate, never reorder.
    pub features: Vec<String>,
    /// Ordered image URLs or filenames; the first is the hero shot.
    pub images: Vec<String>,
    pub description: Option<String>,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_facebook_post_at: Option<DateTime<Utc>>,
    pub last_marketplace_post_at: Option<DateTime<Utc>>,
    pub facebook_post_id: Option<String>,
}

impl VehicleSnapshot {
    /// "2021 Toyota Camry" styling shared by every generated text block.
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
