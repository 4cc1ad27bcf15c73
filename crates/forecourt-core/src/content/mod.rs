//! Rule-based marketing copy generation.
//!
//! Every generator is a pure, synchronous mapping from a vehicle snapshot to
//! finished text. No I/O, no shared state; callers fetch the snapshot, call
//! in, and get a fresh value back. That makes concurrent generation trivially
//! safe and the whole surface testable with plain assertions.

pub mod email;
pub mod export;
pub mod format;
pub mod hashtags;
pub mod media;
pub mod social;
pub mod video;

use serde::{Deserialize, Serialize};

use crate::domain::VehicleSnapshot;
use email::{EmailContent, EmailScenario};

/// Target platform for single-platform generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    X,
    YoutubeScript,
}

impl Platform {
    /// Total parse: unknown tags fall back to Facebook, the long-form
    /// default.
    pub fn from_tag(tag: &str) -> Platform {
        match tag.trim().to_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "x" | "twitter" => Platform::X,
            "youtube" | "youtube-script" => Platform::YoutubeScript,
            _ => Platform::Facebook,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::X => "x",
            Platform::YoutubeScript => "youtube-script",
        }
    }

    /// Display name used in export document titles.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::X => "X",
            Platform::YoutubeScript => "YouTube Script",
        }
    }
}

/// Everything one generation request produces for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub facebook: String,
    pub instagram: String,
    pub x: String,
    pub youtube_script: String,
    pub email: EmailContent,
    pub has_360_media: bool,
}

/// Classifies the vehicle's media once and fans out to every generator.
pub fn generate_bundle(
    v: &VehicleSnapshot,
    scenario: EmailScenario,
    custom_message: Option<&str>,
    footer_year: i32,
) -> ContentBundle {
    let has_360 = media::has_panoramic_media(&v.images);
    ContentBundle {
        facebook: social::facebook_post(v, has_360),
        instagram: social::instagram_caption(v, has_360),
        x: social::x_post(v, has_360),
        youtube_script: video::script(v, has_360),
        email: email::render(v, has_360, scenario, custom_message, footer_year),
        has_360_media: has_360,
    }
}

/// Generates the text block for a single platform.
pub fn platform_text(v: &VehicleSnapshot, platform: Platform) -> String {
    let has_360 = media::has_panoramic_media(&v.images);
    match platform {
        Platform::Facebook => social::facebook_post(v, has_360),
        Platform::Instagram => social::instagram_caption(v, has_360),
        Platform::X => social::x_post(v, has_360),
        Platform::YoutubeScript => video::script(v, has_360),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::domain::{VehicleSnapshot, VehicleStatus};

    /// Fully populated snapshot shared by the generator tests.
    pub(crate) fn camry() -> VehicleSnapshot {
        VehicleSnapshot {
            id: Uuid::nil(),
            make: "Toyota".to_owned(),
            model: "Camry".to_owned(),
            year: 2021,
            trim: Some("XSE".to_owned()),
            vin: Some("4T1K61AK5MU123456".to_owned()),
            color: Some("Silver".to_owned()),
            price: Some(24_999),
            mileage: Some(18_500),
            features: vec![
                "Panoramic Sunroof".to_owned(),
                "Leather Seats".to_owned(),
                "Adaptive Cruise Control".to_owned(),
                "Wireless CarPlay".to_owned(),
                "Heated Steering Wheel".to_owned(),
            ],
            images: vec!["front.jpg".to_owned(), "interior.jpg".to_owned()],
            description: Some("One owner, dealer maintained, garage kept.".to_owned()),
            status: VehicleStatus::Available,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            last_facebook_post_at: None,
            last_marketplace_post_at: None,
            facebook_post_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::camry;

    #[test]
    fn platform_tags_parse_with_facebook_fallback() {
        assert_eq!(Platform::from_tag("instagram"), Platform::Instagram);
        assert_eq!(Platform::from_tag("twitter"), Platform::X);
        assert_eq!(Platform::from_tag("X"), Platform::X);
        assert_eq!(Platform::from_tag("youtube"), Platform::YoutubeScript);
        assert_eq!(Platform::from_tag("tiktok"), Platform::Facebook);
        assert_eq!(Platform::from_tag(""), Platform::Facebook);
    }

    #[test]
    fn bundle_classifies_media_once_for_every_platform() {
        let mut v = camry();
        v.images.push("interior-360.jpg".to_owned());
        let bundle = generate_bundle(&v, EmailScenario::Generic, None, 2025);
        assert!(bundle.has_360_media);
        assert!(bundle.facebook.contains("360° VIRTUAL TOUR"));
        assert!(bundle.instagram.contains("#360View"));
        assert!(bundle.x.contains("360° Tour Avail!"));
        assert!(bundle.youtube_script.contains("Full 360° Tour!"));
        assert!(bundle.email.body.contains("Take an Immersive 360° Tour!"));
    }

    #[test]
    fn bundle_without_panoramic_media_skips_every_tour_plug() {
        let bundle = generate_bundle(&camry(), EmailScenario::Generic, None, 2025);
        assert!(!bundle.has_360_media);
        assert!(!bundle.facebook.contains("[LinkTo360View]"));
        assert!(!bundle.instagram.contains("#360View"));
        assert!(!bundle.x.contains("360° Tour Avail!"));
        assert!(!bundle.email.body.contains("[LinkTo360View]"));
    }

    #[test]
    fn platform_text_matches_the_bundle_entries() {
        let v = camry();
        let bundle = generate_bundle(&v, EmailScenario::Generic, None, 2025);
        assert_eq!(platform_text(&v, Platform::Facebook), bundle.facebook);
        assert_eq!(platform_text(&v, Platform::Instagram), bundle.instagram);
        assert_eq!(platform_text(&v, Platform::X), bundle.x);
        assert_eq!(
            platform_text(&v, Platform::YoutubeScript),
            bundle.youtube_script
        );
    }

    #[test]
    fn bundle_serializes_with_wire_casing() {
        let bundle = generate_bundle(&camry(), EmailScenario::Generic, None, 2025);
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.get("youtubeScript").is_some());
        assert!(json.get("has360Media").is_some());
        assert!(json["email"].get("subject").is_some());
    }
}
