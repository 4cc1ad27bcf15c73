//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forecourt_core::content::email::EmailContent;
use forecourt_core::domain::VehicleSnapshot;

/// Wire shape of a vehicle: string id, RFC 3339 timestamps, camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i64>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub last_facebook_post_date: Option<String>,
    pub last_marketplace_post_date: Option<String>,
    pub facebook_post_id: Option<String>,
}

fn rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

impl From<&VehicleSnapshot> for VehicleResponse {
    fn from(v: &VehicleSnapshot) -> Self {
        Self {
            id: v.id.to_string(),
            make: v.make.clone(),
            model: v.model.clone(),
            year: v.year,
            trim: v.trim.clone(),
            vin: v.vin.clone(),
            color: v.color.clone(),
            price: v.price,
            mileage: v.mileage,
            features: v.features.clone(),
            images: v.images.clone(),
            description: v.description.clone(),
            status: v.status.as_str().to_owned(),
            created_at: rfc3339(&v.created_at),
            updated_at: rfc3339(&v.updated_at),
            last_facebook_post_date: v.last_facebook_post_at.as_ref().map(rfc3339),
            last_marketplace_post_date: v.last_marketplace_post_at.as_ref().map(rfc3339),
            facebook_post_id: v.facebook_post_id.clone(),
        }
    }
}

impl From<VehicleSnapshot> for VehicleResponse {
    fn from(v: VehicleSnapshot) -> Self {
        Self::from(&v)
    }
}

/// Payload of the inventory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListData {
    pub results: usize,
    pub vehicles: Vec<VehicleResponse>,
}

impl VehicleListData {
    pub fn new(vehicles: Vec<VehicleResponse>) -> Self {
        Self {
            results: vehicles.len(),
            vehicles,
        }
    }
}

/// Body of the email generation POST. Every field is optional; unknown
/// scenario or holiday tags fall back instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    #[serde(alias = "emailType")]
    pub scenario: Option<String>,
    pub holiday: Option<String>,
    pub custom_message: Option<String>,
}

/// Payload of the email generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    pub subject: String,
    pub preheader: String,
    pub body: String,
    pub has_360_media: bool,
}

impl EmailData {
    pub fn new(email: EmailContent, has_360_media: bool) -> Self {
        Self {
            subject: email.subject,
            preheader: email.preheader,
            body: email.body,
            has_360_media,
        }
    }
}

/// Payload of the single-platform content response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformContent {
    pub platform: String,
    pub content: String,
    pub has_360_media: bool,
}

/// Query string of the export download endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    pub platform: Option<String>,
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use forecourt_core::domain::VehicleStatus;
    use uuid::Uuid;

    fn snapshot() -> VehicleSnapshot {
        VehicleSnapshot {
            id: Uuid::parse_str("6f9a2db8-3c4e-4f6a-9b5d-8f2f3f7a1c22").unwrap(),
            make: "Honda".to_owned(),
            model: "CR-V".to_owned(),
            year: 2022,
            trim: None,
            vin: None,
            color: Some("White".to_owned()),
            price: Some(31_000),
            mileage: None,
            features: vec!["AWD".to_owned()],
            images: vec![],
            description: None,
            status: VehicleStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            last_facebook_post_at: None,
            last_marketplace_post_at: None,
            facebook_post_id: None,
        }
    }

    #[test]
    fn vehicle_wire_shape_uses_camel_case_and_rfc3339() {
        let wire = serde_json::to_value(VehicleResponse::from(snapshot())).unwrap();
        assert_eq!(wire["id"], "6f9a2db8-3c4e-4f6a-9b5d-8f2f3f7a1c22");
        assert_eq!(wire["status"], "pending");
        assert_eq!(wire["createdAt"], "2024-01-02T03:04:05+00:00");
        assert!(wire.get("trim").is_none());
        assert!(wire.get("mileage").is_none());
        // Posting fields stay present as explicit nulls.
        assert!(wire["lastFacebookPostDate"].is_null());
    }

    #[test]
    fn email_request_accepts_the_legacy_field_name() {
        let req: EmailRequest =
            serde_json::from_str(r#"{"emailType":"price-drop","customMessage":"Hi"}"#).unwrap();
        assert_eq!(req.scenario.as_deref(), Some("price-drop"));
        assert_eq!(req.custom_message.as_deref(), Some("Hi"));

        let req: EmailRequest = serde_json::from_str(r#"{"scenario":"new-arrival"}"#).unwrap();
        assert_eq!(req.scenario.as_deref(), Some("new-arrival"));
        assert!(req.holiday.is_none());
    }

    #[test]
    fn list_payload_counts_results() {
        let data = VehicleListData::new(vec![VehicleResponse::from(snapshot())]);
        assert_eq!(data.results, 1);
    }
}
