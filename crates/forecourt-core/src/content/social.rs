//! Social post generators. Each platform gets one pure function mapping a
//! vehicle snapshot (plus the panoramic-media flag) to finished copy.
//!
//! Copy is assembled from fixed literal fragments with interpolated fields
//! in a fixed order. Bracketed tokens such as `[LinkToVehiclePage]` and
//! `[YourPhoneNumber]` are intentional placeholders the dealership replaces
//! before posting.

use crate::content::format::{clamp_with_ellipsis, price_label, thousands};
use crate::content::hashtags::{compact_tag, feature_tags};
use crate::domain::VehicleSnapshot;

/// Hard character budget for posts on X (Twitter).
pub const X_CHAR_BUDGET: usize = 280;

/// Feature keywords worth calling out by name in the short-form post.
const SPOTLIGHT_KEYWORDS: [&str; 7] = [
    "sunroof",
    "panoramic",
    "leather",
    "awd",
    "turbo",
    "navigation",
    "hybrid",
];

/// Long-form Facebook listing: banner, price line, bulleted features,
/// description snippet, optional tour plug, call to action, hashtags.
pub fn facebook_post(v: &VehicleSnapshot, has_360: bool) -> String {
    let color_clause = match &v.color {
        Some(color) => format!(" in a stunning {color}"),
        None => String::new(),
    };
    let mut post = format!(
        "🎉 JUST ARRIVED! 🎉 Feast your eyes on this incredible {name}{color_clause}!\n\n",
        name = v.display_name(),
    );

    post.push_str(&format!(
        "💲 Priced to sell at {price}",
        price = price_label(v.price)
    ));
    if let Some(mileage) = v.mileage {
        post.push_str(&format!(
            " with an impressively low {miles} miles!",
            miles = thousands(mileage)
        ));
    }
    post.push_str("\n\n");

    if v.features.is_empty() {
        post.push_str("This beauty is packed with amazing features you'll love!\n");
    } else {
        post.push_str("🌟 Key Features Include: 🌟\n");
        for feature in v.features.iter().take(3) {
            post.push_str(&format!("  - {feature}\n"));
        }
        if v.features.len() > 3 {
            post.push_str("  - And so much more!\n");
        }
    }
    post.push('\n');

    if let Some(description) = &v.description {
        let snippet = clamp_with_ellipsis(description, 150);
        post.push_str(&format!("📝 From the owner: \"{snippet}\"\n\n"));
    }

    if has_360 {
        post.push_str(
            "🔄 Don't just take our word for it – experience it yourself with our \
             full 360° VIRTUAL TOUR! Click here: [LinkTo360View]\n\n",
        );
    }

    post.push_str("Ready for a test drive? 🚗💨\n");
    post.push_str("📞 Call us at [YourPhoneNumber] or 💬 DM us for more info!\n");
    post.push_str("📍 Visit us at [YourDealershipAddress]\n\n");

    post.push_str(&format!(
        "#{make} #{model} #{year} #LuxuryCar #UsedCarsForSale #CarDealership #[YourCity]Cars",
        make = v.make,
        model = v.model,
        year = v.year,
    ));
    for tag in feature_tags(&v.features) {
        post.push(' ');
        post.push_str(tag);
    }

    post
}

/// Instagram caption: sparkle header, short stats, top-two highlights, and a
/// long discovery-focused hashtag block.
pub fn instagram_caption(v: &VehicleSnapshot, has_360: bool) -> String {
    let mut caption = format!("✨ {name} ✨\n", name = v.display_name());
    let color_sentence = match &v.color {
        Some(color) => format!("Stunning in {color}. "),
        None => String::new(),
    };
    caption.push_str(&format!(
        "Your next adventure awaits! {color_sentence}\n\n"
    ));

    caption.push_str(&format!("💰 Price: {price}", price = price_label(v.price)));
    match v.mileage {
        Some(mileage) => caption.push_str(&format!(
            " | Mileage: {miles} miles\n",
            miles = thousands(mileage)
        )),
        None => caption.push('\n'),
    }

    if !v.features.is_empty() {
        let highlights: Vec<&str> = v
            .features
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        caption.push_str(&format!(
            "Key highlights: {joined}!\n",
            joined = highlights.join(" & ")
        ));
    }

    if has_360 {
        caption
            .push_str("🔄 Full 360° interactive view available! Check the link in our bio! 👆\n");
    }
    caption.push_str("\nDM us to schedule your test drive or for more info! 📲\n\n");

    let mut hashtags = format!(
        "#{make} #{model} #{year} #CarsOfInstagram #LuxuryLifestyle #[YourCity]Cars",
        make = v.make,
        model = v.model,
        year = v.year,
    );
    if let Some(color) = &v.color {
        let compact: String = color.chars().filter(|c| !c.is_whitespace()).collect();
        hashtags.push_str(&format!(" #{compact}Car"));
    }
    for feature in v.features.iter().take(4) {
        if let Some(tag) = compact_tag(feature) {
            hashtags.push_str(&format!(" #{tag}"));
        }
    }
    if has_360 {
        hashtags.push_str(" #360View #VirtualTour #ImmersiveExperience");
    }
    hashtags.push_str(" #InstaAuto #CarGram #ForSale #DreamRide #CarShopping");
    caption.push_str(&hashtags);

    caption
}

/// Short-form post for X, clamped to [`X_CHAR_BUDGET`] characters.
pub fn x_post(v: &VehicleSnapshot, has_360: bool) -> String {
    let mut post = format!("🔥 Hot Deal! 🔥 {name}", name = v.display_name());
    if let Some(color) = &v.color {
        post.push_str(&format!(" ({color})"));
    }
    post.push_str(&format!(" - {price}", price = price_label(v.price)));
    if let Some(mileage) = v.mileage {
        post.push_str(&format!(" | {miles} mi", miles = thousands(mileage)));
    }
    post.push_str(". ");

    post.push_str(&prominent_feature(&v.features));

    if has_360 {
        post.push_str("🔄 360° Tour Avail! ");
    }

    post.push_str("Don't miss out! 👉 [LinkToVehiclePage]");

    let price_tag = match v.price {
        Some(price) if price < 20_000 => "#AffordableLuxury",
        _ => "#DreamCar",
    };
    post.push_str(&format!(
        " #{make} #{model} {price_tag} #CarSales",
        make = v.make,
        model = v.model,
    ));

    clamp_with_ellipsis(&post, X_CHAR_BUDGET)
}

/// Picks one feature to name in the short-form post: the first feature
/// containing a spotlight keyword, else the first feature when it is short
/// enough, else nothing.
fn prominent_feature(features: &[String]) -> String {
    for feature in features {
        let lowered = feature.to_lowercase();
        if SPOTLIGHT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return format!("Incl. {feature}! ");
        }
    }
    match features.first() {
        Some(first) if first.chars().count() < 25 => format!("Feat: {first}. "),
        _ => String::new(),
    }
}
