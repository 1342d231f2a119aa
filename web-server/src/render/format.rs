//! Display formatting helpers
//!
//! Currency and date strings are fixed to one locale (en-US) and a small
//! set of field combinations; nothing here is configurable.

use chrono::{DateTime, Datelike, FixedOffset};
use shared::{MenuItem, PriceVariant};

/// Fixed two-decimal currency string: `3.5` → `"$3.50"`
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One segment per variant, `"<S|M|L>: $<price>"`, joined by `" / "`
pub fn format_variants(variants: &[PriceVariant]) -> String {
    variants
        .iter()
        .map(|v| format!("{}: {}", v.size.abbrev(), format_price(v.price)))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// The price string for an item: its variants if present, else the base
pub fn price_line(item: &MenuItem) -> String {
    match item.variants.as_deref() {
        Some(variants) if !variants.is_empty() => format_variants(variants),
        _ => format_price(item.price),
    }
}

// ── Date formatting (en-US, offset preserved as authored) ───────────

/// `"Jan"`
pub fn short_month(date: &DateTime<FixedOffset>) -> String {
    date.format("%b").to_string()
}

/// `15`
pub fn day_of_month(date: &DateTime<FixedOffset>) -> u32 {
    date.day()
}

/// `"Thursday"`
pub fn weekday(date: &DateTime<FixedOffset>) -> String {
    date.format("%A").to_string()
}

/// `"7:00 PM"`
pub fn time_of_day(date: &DateTime<FixedOffset>) -> String {
    date.format("%-I:%M %p").to_string()
}

/// `"January 15, 2026"`
pub fn long_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `tel:` href value - digits only
pub fn phone_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Size;

    fn variant(size: Size, price: f64) -> PriceVariant {
        PriceVariant { size, price }
    }

    #[test]
    fn price_is_fixed_two_decimals() {
        assert_eq!(format_price(3.5), "$3.50");
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(0.01), "$0.01");
    }

    #[test]
    fn variants_join_with_slashes() {
        let variants = vec![
            variant(Size::Small, 3.5),
            variant(Size::Medium, 4.25),
            variant(Size::Large, 5.0),
        ];
        assert_eq!(format_variants(&variants), "S: $3.50 / M: $4.25 / L: $5.00");
    }

    #[test]
    fn unknown_size_renders_raw_value() {
        let variants = vec![variant(Size::Other("tub".to_string()), 12.0)];
        assert_eq!(format_variants(&variants), "tub: $12.00");
    }

    #[test]
    fn price_line_prefers_variants() {
        let mut item = MenuItem {
            price: 4.5,
            ..MenuItem::default()
        };
        assert_eq!(price_line(&item), "$4.50");

        item.variants = Some(vec![variant(Size::Small, 3.5), variant(Size::Medium, 4.25)]);
        assert_eq!(price_line(&item), "S: $3.50 / M: $4.25");

        // An empty variant list falls back to the base price
        item.variants = Some(Vec::new());
        assert_eq!(price_line(&item), "$4.50");
    }

    #[test]
    fn date_field_combinations() {
        let date: DateTime<FixedOffset> = "2026-01-15T19:05:00Z".parse().unwrap();
        assert_eq!(short_month(&date), "Jan");
        assert_eq!(day_of_month(&date), 15);
        assert_eq!(weekday(&date), "Thursday");
        assert_eq!(time_of_day(&date), "7:05 PM");
        assert_eq!(long_date(&date), "January 15, 2026");
    }

    #[test]
    fn times_keep_the_authored_offset() {
        let date: DateTime<FixedOffset> = "2026-01-18T19:00:00-08:00".parse().unwrap();
        assert_eq!(time_of_day(&date), "7:00 PM");
    }

    #[test]
    fn phone_href_strips_formatting() {
        assert_eq!(phone_href("(503) 555-0147"), "tel:5035550147");
    }
}
