//! YouTube Shorts script generator.
//!
//! The script is a fixed six-scene outline. Each scene is a typed record,
//! so every slot (heading, camera direction, overlay, voiceover) must be
//! filled at construction.

use crate::content::format::{mileage_label, price_label};
use crate::domain::VehicleSnapshot;

/// One scene of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub heading: String,
    pub direction: String,
    pub overlay: String,
    pub voiceover: String,
}

/// Builds the six-scene outline. One scene branches on the panoramic-media
/// flag: an interactive-tour pitch when it fired, a generic comfort scene
/// otherwise.
pub fn scenes(v: &VehicleSnapshot, has_360: bool) -> Vec<Scene> {
    let name = v.display_name();
    let feature_one = v
        .features
        .first()
        .map(String::as_str)
        .unwrap_or("amazing features");
    let feature_two = v
        .features
        .get(1)
        .map(String::as_str)
        .unwrap_or("a smooth ride");

    let color_clause = match &v.color {
        Some(color) => format!(" in stunning {color}"),
        None => String::new(),
    };

    let tour_scene = if has_360 {
        Scene {
            heading: "Scene 3: 360° Interactive View (If applicable, 9-12 seconds)".to_owned(),
            direction: "A simulated \"swipe\" effect transitions to the 360° interior view, \
                        spinning slowly."
                .to_owned(),
            overlay: "🔄 Full 360° Tour!".to_owned(),
            voiceover: "\"And get this... we have a full 360-degree interactive tour. \
                        See EVERY angle online!\""
                .to_owned(),
        }
    } else {
        Scene {
            heading: "Scene 3: 360° Interactive View (If applicable, 9-12 seconds)".to_owned(),
            direction: "Another cool interior or exterior shot. Maybe a shot of the spacious \
                        trunk or back seats."
                .to_owned(),
            overlay: "Comfort & Style!".to_owned(),
            voiceover: "\"Experience true comfort and style.\"".to_owned(),
        }
    };

    vec![
        Scene {
            heading: "Hook (0-3 seconds)".to_owned(),
            direction: "Extreme close-up of the vehicle's badge or a striking headlight, \
                        then a rapid pull-back to reveal the full car. Upbeat, trendy music \
                        starts."
                .to_owned(),
            overlay: "STOP SCROLLING! You NEED to see this.".to_owned(),
            voiceover: "\"Tired of boring rides? Your upgrade is HERE.\"".to_owned(),
        },
        Scene {
            heading: "Scene 1: Exterior Showcase (3-6 seconds)".to_owned(),
            direction: "A series of quick, dynamic shots of the exterior. A low-angle shot \
                        from the front, a smooth pan across the side profile, a close-up of \
                        the wheels."
                .to_owned(),
            overlay: name.clone(),
            voiceover: format!("\"This is the {name}{color_clause}.\""),
        },
        Scene {
            heading: "Scene 2: Key Feature Highlight (6-9 seconds)".to_owned(),
            direction: "Snap to a shot of the interior, focusing on the infotainment screen \
                        or a luxury feature like a sunroof or leather seats."
                .to_owned(),
            overlay: format!("Featuring: {feature_one}!"),
            voiceover: format!("\"Packed with features like {feature_one} and {feature_two}!\""),
        },
        tour_scene,
        Scene {
            heading: "Scene 4: The Offer (12-14 seconds)".to_owned(),
            direction: "A clean, final shot of the car.".to_owned(),
            overlay: format!(
                "Price: {price} | Mileage: {mileage}",
                price = price_label(v.price),
                mileage = mileage_label(v.mileage)
            ),
            voiceover: format!(
                "\"And it can be yours for just {price}.\"",
                price = price_label(v.price)
            ),
        },
        Scene {
            heading: "Call to Action (14-15 seconds)".to_owned(),
            direction: "End card with dealership logo and contact info.".to_owned(),
            overlay: "LINK IN DESCRIPTION! 🔗".to_owned(),
            voiceover: "\"Don't wait! Click the link in the description to learn more and \
                        book your test drive!\""
                .to_owned(),
        },
    ]
}

/// Renders the outline as shareable script text.
pub fn script(v: &VehicleSnapshot, has_360: bool) -> String {
    let mut out = format!(
        "**YouTube Shorts Script: The {name} Experience**\n",
        name = v.display_name()
    );
    for scene in scenes(v, has_360) {
        out.push_str(&format!(
            "\n**{heading}:**\n\
             *   **(Scene):** {direction}\n\
             *   **(Text Overlay):** {overlay}\n\
             *   **(Voiceover):** {voiceover}\n",
            heading = scene.heading,
            direction = scene.direction,
            overlay = scene.overlay,
            voiceover = scene.voiceover,
        ));
    }
    out.trim_end().to_owned()
}
