//! Deterministic hashtag composition for the social generators.

/// One keyword-triggered hashtag. Any keyword appearing in any lowercased
/// feature string appends the tag.
pub struct TagTrigger {
    pub keywords: &'static [&'static str],
    pub tag: &'static str,
}

/// Trigger table, evaluated in order so output is reproducible. Triggers are
/// independent and may all fire on one vehicle.
pub const FEATURE_TAG_TRIGGERS: [TagTrigger; 5] = [
    TagTrigger {
        keywords: &["sunroof", "moonroof"],
        tag: "#Sunroof",
    },
    TagTrigger {
        keywords: &["v8"],
        tag: "#V8Power",
    },
    TagTrigger {
        keywords: &["turbo"],
        tag: "#Turbocharged",
    },
    TagTrigger {
        keywords: &["awd", "all-wheel drive"],
        tag: "#AWD",
    },
    TagTrigger {
        keywords: &["leather"],
        tag: "#LeatherSeats",
    },
];

/// Tags fired by the feature list, in trigger-table order.
pub fn feature_tags(features: &[String]) -> Vec<&'static str> {
    let lowered: Vec<String> = features.iter().map(|f| f.to_lowercase()).collect();
    FEATURE_TAG_TRIGGERS
        .iter()
        .filter(|trigger| {
            lowered
                .iter()
                .any(|feature| trigger.keywords.iter().any(|kw| feature.contains(kw)))
        })
        .map(|trigger| trigger.tag)
        .collect()
}

/// Compacts a feature name into a bare Instagram-style tag token: lowercase,
/// alphanumerics only. Tokens must land strictly between 2 and 20 characters
/// to be worth posting.
pub fn compact_tag(feature: &str) -> Option<String> {
    let compact: String = feature
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    (compact.len() > 2 && compact.len() < 20).then_some(compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn single_trigger_fires() {
        let tags = feature_tags(&features(&["Power Moonroof"]));
        assert_eq!(tags, vec!["#Sunroof"]);
    }

    #[test]
    fn triggers_are_independent_and_ordered() {
        let tags = feature_tags(&features(&[
            "Leather Seats",
            "Twin-Turbo V8",
            "Panoramic Sunroof",
        ]));
        assert_eq!(tags, vec!["#Sunroof", "#V8Power", "#Turbocharged", "#LeatherSeats"]);
    }

    #[test]
    fn awd_matches_either_spelling() {
        assert_eq!(feature_tags(&features(&["AWD"])), vec!["#AWD"]);
        assert_eq!(feature_tags(&features(&["All-Wheel Drive"])), vec!["#AWD"]);
    }

    #[test]
    fn no_match_yields_no_tags() {
        assert!(feature_tags(&features(&["Heated Seats", "Navigation"])).is_empty());
        assert!(feature_tags(&[]).is_empty());
    }

    #[test]
    fn compact_tag_strips_and_bounds() {
        assert_eq!(compact_tag("Heated Seats"), Some("heatedseats".to_owned()));
        assert_eq!(compact_tag("GPS"), Some("gps".to_owned()));
        assert_eq!(compact_tag("AC"), None);
        assert_eq!(
            compact_tag("Premium Harman Kardon Surround Sound System"),
            None
        );
    }
}
