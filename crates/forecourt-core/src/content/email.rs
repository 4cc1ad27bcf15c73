//! Scenario-driven email generator.
//!
//! A scenario picks one fixed narrative (subject, preheader, headline, call
//! to action); the body is a single HTML document template interpolating the
//! narrative and the vehicle's attributes. Values that originate from vehicle
//! data or the request are escaped before insertion so field content cannot
//! alter the document structure; the template's own literals are not.

use ammonia::clean_text;
use serde::{Deserialize, Serialize};

use crate::content::format::{price_label, thousands};
use crate::domain::VehicleSnapshot;

/// Holidays the sale narrative knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    Christmas,
    NewYear,
    LaborDay,
    IndependenceDay,
    Thanksgiving,
}

impl Holiday {
    /// Parses a holiday name; unknown names yield `None` and render as the
    /// neutral "Holiday" label.
    pub fn parse(name: &str) -> Option<Holiday> {
        match name.trim().to_lowercase().as_str() {
            "christmas" => Some(Holiday::Christmas),
            "new year" | "new-year" => Some(Holiday::NewYear),
            "labor day" | "labor-day" => Some(Holiday::LaborDay),
            "july 4th" | "july-4th" | "4th of july" | "independence-day" => {
                Some(Holiday::IndependenceDay)
            }
            "thanksgiving" => Some(Holiday::Thanksgiving),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Holiday::Christmas => "Christmas",
            Holiday::NewYear => "New Year",
            Holiday::LaborDay => "Labor Day",
            Holiday::IndependenceDay => "4th of July",
            Holiday::Thanksgiving => "Thanksgiving",
        }
    }
}

/// Marketing narrative selector for the email template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailScenario {
    NewArrival,
    ManagerSpecial,
    PriceDrop,
    HolidaySale { holiday: Option<Holiday> },
    InventoryUpdate,
    Generic,
}

impl EmailScenario {
    /// Total parse: recognized kebab-case tags map to their scenario,
    /// anything else falls back to the generic narrative.
    pub fn parse(tag: &str, holiday: Option<&str>) -> EmailScenario {
        match tag.trim().to_lowercase().as_str() {
            "new-arrival" => EmailScenario::NewArrival,
            "manager-special" => EmailScenario::ManagerSpecial,
            "price-drop" => EmailScenario::PriceDrop,
            "holiday-sale" => EmailScenario::HolidaySale {
                holiday: holiday.and_then(Holiday::parse),
            },
            "inventory-update" => EmailScenario::InventoryUpdate,
            _ => EmailScenario::Generic,
        }
    }
}

/// The literal narrative slots for one scenario. Selection is an exhaustive
/// match, so adding a scenario without filling every slot fails to compile.
#[derive(Debug, Clone)]
pub struct ScenarioCopy {
    pub subject: String,
    pub preheader: String,
    pub headline: String,
    pub cta: String,
}

impl ScenarioCopy {
    pub fn select(scenario: EmailScenario, v: &VehicleSnapshot) -> ScenarioCopy {
        let name = v.display_name();
        match scenario {
            EmailScenario::NewArrival => ScenarioCopy {
                subject: format!("Just Arrived: The {name} You've Been Waiting For!"),
                preheader: format!(
                    "Be the first to test drive this stunning {make}. See photos & details.",
                    make = v.make
                ),
                headline: format!("Fresh on the Lot: A Stunning {name}!"),
                cta: "Be the first to experience this incredible vehicle. Schedule your \
                      exclusive test drive today!"
                    .to_owned(),
            },
            EmailScenario::ManagerSpecial => ScenarioCopy {
                subject: format!("⭐ Manager's Special: A Hand-Picked {name}!"),
                preheader: format!(
                    "An incredible deal on a premium {make}. Don't miss out!",
                    make = v.make
                ),
                headline: "Our Manager's Pick: Unbeatable Value!".to_owned(),
                cta: "This hand-picked vehicle won’t last long. Claim this special offer now!"
                    .to_owned(),
            },
            EmailScenario::PriceDrop => ScenarioCopy {
                subject: format!("🚨 Price Drop Alert on the {name}!"),
                preheader: format!(
                    "The {make} you were looking at just got more affordable. Act fast!",
                    make = v.make
                ),
                headline: format!("Price REDUCED on the {name}!"),
                cta: "Your dream car is now at a dream price. This is your chance—act fast \
                      before it’s gone!"
                    .to_owned(),
            },
            EmailScenario::HolidaySale { holiday } => {
                let label = holiday.map_or("Holiday", |h| h.label());
                ScenarioCopy {
                    subject: format!("🎄 {label} Special: {name} - Limited Time Offer!"),
                    preheader: format!(
                        "Exclusive {label} savings on this beautiful {make} {model}. \
                         Limited time only!",
                        make = v.make,
                        model = v.model
                    ),
                    headline: format!("Celebrate {label} with Exclusive Savings!"),
                    cta: format!(
                        "This special {label} offer is only available for a limited time. \
                         Don't miss out!"
                    ),
                }
            }
            EmailScenario::InventoryUpdate => ScenarioCopy {
                subject: format!("🚗 New Arrival: {name} - Just Arrived!"),
                preheader: format!(
                    "This {make} {model} has just arrived at our dealership. \
                     Be the first to see it!",
                    make = v.make,
                    model = v.model
                ),
                headline: format!("Just Landed: The {name}!"),
                cta: "Contact us today to schedule a test drive - these vehicles are \
                      selling fast!"
                    .to_owned(),
            },
            EmailScenario::Generic => ScenarioCopy {
                subject: format!("You'll LOVE this {name}!"),
                preheader: format!(
                    "Special offer on a {make} {model}. See details inside.",
                    make = v.make,
                    model = v.model
                ),
                headline: format!("Check Out This Amazing {name}!"),
                cta: "Interested? Contact us today to learn more or to book a test drive!"
                    .to_owned(),
            },
        }
    }
}

/// Finished email: plain-text subject and preheader, HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub preheader: String,
    pub body: String,
}

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400";

const EMAIL_STYLES: &str = "        body { font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 20px auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; border: 1px solid #dddddd; }
        .header { background-color: #004a99; color: #ffffff; padding: 20px; text-align: center; }
        .header h1 { margin: 0; }
        .content { padding: 20px; }
        .vehicle-image { width: 100%; height: auto; border-radius: 4px; }
        .details { margin: 20px 0; }
        .details p { margin: 5px 0; font-size: 16px; }
        .features-list { list-style-type: none; padding: 0; }
        .features-list li { background: url('✔️') no-repeat left center; padding-left: 25px; margin-bottom: 5px; }
        .cta-button { display: inline-block; background-color: #ff7f50; color: #ffffff; padding: 15px 25px; text-decoration: none; border-radius: 5px; font-weight: bold; text-align: center; }
        .footer { background-color: #333333; color: #aaaaaa; padding: 15px; text-align: center; font-size: 12px; }";

/// Renders the scenario email for a vehicle.
///
/// Pure: identical inputs produce byte-identical output. The footer year is
/// injected by the caller so tests can hold it constant.
pub fn render(
    v: &VehicleSnapshot,
    has_360: bool,
    scenario: EmailScenario,
    custom_message: Option<&str>,
    footer_year: i32,
) -> EmailContent {
    let copy = ScenarioCopy::select(scenario, v);

    let title = clean_text(&copy.subject);
    let headline = clean_text(&copy.headline);
    let cta = clean_text(&copy.cta);
    let alt = clean_text(&format!("{} {}", v.make, v.model));
    let price = price_label(v.price);

    let hero = match v.images.first() {
        Some(url) => clean_text(url),
        None => PLACEHOLDER_IMAGE.to_owned(),
    };

    let color = match &v.color {
        Some(color) => clean_text(color),
        None => "N/A".to_owned(),
    };

    let mileage_row = match v.mileage {
        Some(miles) => format!(
            "                <p><strong>Mileage:</strong> {}</p>\n",
            thousands(miles)
        ),
        None => String::new(),
    };

    let features = if v.features.is_empty() {
        "<li>Many great features!</li>".to_owned()
    } else {
        v.features
            .iter()
            .take(5)
            .map(|feature| format!("<li>{}</li>", clean_text(feature)))
            .collect()
    };

    let tour_button = if has_360 {
        concat!(
            "            <p><strong><a href=\"[LinkTo360View]\" class=\"cta-button\" ",
            "style=\"background-color: #007bff;\">Take an Immersive 360° Tour!",
            "</a></strong></p>\n"
        )
        .to_owned()
    } else {
        String::new()
    };

    let custom_paragraph = match custom_message {
        Some(message) if !message.is_empty() => {
            format!("            <p>{}</p>\n", clean_text(message))
        }
        _ => String::new(),
    };

    let body = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{styles}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>[Your Dealership Name]</h1>
        </div>
        <div class="content">
            <h2>{headline}</h2>
            <img src="{hero}" alt="{alt}" class="vehicle-image">
            <div class="details">
                <p><strong>Price:</strong> <span style="color: #ff7f50; font-weight: bold;">{price}</span></p>
{mileage_row}                <p><strong>Color:</strong> {color}</p>
            </div>
            <h3>Key Features:</h3>
            <ul class="features-list">
                {features}
            </ul>
{tour_button}            <p>{cta}</p>
{custom_paragraph}            <a href="[LinkToVehiclePage]" class="cta-button">View Vehicle Details & Inquire</a>
        </div>
        <div class="footer">
            <p>&copy; {footer_year} [Your Dealership Name] | [YourDealershipAddress]</p>
            <p><a href="[UnsubscribeLink]" style="color: #aaaaaa;">Unsubscribe</a></p>
        </div>
    </div>
</body>
</html>"#,
        styles = EMAIL_STYLES,
    );

    EmailContent {
        subject: copy.subject,
        preheader: copy.preheader,
        body,
    }
}
