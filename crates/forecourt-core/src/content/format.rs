//! Display formatting shared by every generator.

/// Renders a number with commas grouping the thousands ("24999" -> "24,999").
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// "$24,999", or "N/A" when the price is not on file.
pub fn price_label(price: Option<i64>) -> String {
    match price {
        Some(amount) => format!("${}", thousands(amount)),
        None => "N/A".to_owned(),
    }
}

/// "24,999", or "N/A" when the mileage is not on file.
pub fn mileage_label(mileage: Option<i64>) -> String {
    match mileage {
        Some(miles) => thousands(miles),
        None => "N/A".to_owned(),
    }
}

/// Clamps `text` to `max_chars` characters, replacing the tail with "..."
/// when it runs over. Counted in `char`s, so the clamp never splits a code
/// point and the result never exceeds `max_chars`.
pub fn clamp_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(24_999), "24,999");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn thousands_handles_negatives() {
        assert_eq!(thousands(-24_999), "-24,999");
        assert_eq!(thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn labels_fall_back_to_na() {
        assert_eq!(price_label(Some(18_500)), "$18,500");
        assert_eq!(price_label(None), "N/A");
        assert_eq!(mileage_label(Some(42_000)), "42,000");
        assert_eq!(mileage_label(None), "N/A");
    }

    #[test]
    fn clamp_leaves_short_text_alone() {
        assert_eq!(clamp_with_ellipsis("short", 280), "short");
        assert_eq!(clamp_with_ellipsis("exact", 5), "exact");
    }

    #[test]
    fn clamp_truncates_by_chars_not_bytes() {
        let emoji_heavy = "🚗".repeat(100);
        let clamped = clamp_with_ellipsis(&emoji_heavy, 10);
        assert_eq!(clamped.chars().count(), 10);
        assert!(clamped.ends_with("..."));
        assert_eq!(clamped.chars().filter(|c| *c == '🚗').count(), 7);
    }
}
