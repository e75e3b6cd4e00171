//! Color tier mapping and badge URL construction.

use std::fmt;

/// Default badge-rendering service.
pub const DEFAULT_SERVICE: &str = "https://img.shields.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Health tier derived from a coverage percentage.
pub enum Color {
    Red,
    Yellow,
    BrightGreen,
}

impl Color {
    /// Tier thresholds: below 80 red, below 90 yellow, else bright green.
    pub fn from_pct(pct: f64) -> Self {
        if pct < 80.0 {
            Color::Red
        } else if pct < 90.0 {
            Color::Yellow
        } else {
            Color::BrightGreen
        }
    }

    /// Color name as the badge service expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::BrightGreen => "brightgreen",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the badge request URL for a percentage and optional label.
///
/// Shape: `<service>/badge/Coverage[:<label>]-<pct>%25-<color>.svg`.
/// The percentage is passed through unrounded and unclamped; `%` is
/// the only escaped character.
pub fn badge_url(service: &str, pct: f64, label: Option<&str>) -> String {
    let service = service.trim_end_matches('/');
    let color = Color::from_pct(pct);
    match label {
        Some(key) => format!("{}/badge/Coverage:{}-{}%25-{}.svg", service, key, pct, color),
        None => format!("{}/badge/Coverage-{}%25-{}.svg", service, pct, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tier_boundaries() {
        assert_eq!(Color::from_pct(0.0), Color::Red);
        assert_eq!(Color::from_pct(79.9), Color::Red);
        assert_eq!(Color::from_pct(80.0), Color::Yellow);
        assert_eq!(Color::from_pct(89.9), Color::Yellow);
        assert_eq!(Color::from_pct(90.0), Color::BrightGreen);
        assert_eq!(Color::from_pct(100.0), Color::BrightGreen);
    }

    #[test]
    fn test_url_with_label() {
        assert_eq!(
            badge_url(DEFAULT_SERVICE, 95.0, Some("lines")),
            "https://img.shields.io/badge/Coverage:lines-95%25-brightgreen.svg"
        );
        assert_eq!(
            badge_url(DEFAULT_SERVICE, 70.0, Some("functions")),
            "https://img.shields.io/badge/Coverage:functions-70%25-red.svg"
        );
    }

    #[test]
    fn test_url_without_label_and_fractional_pct() {
        // Averaged badges carry no label in their text
        assert_eq!(
            badge_url(DEFAULT_SERVICE, 91.5, None),
            "https://img.shields.io/badge/Coverage-91.5%25-brightgreen.svg"
        );
    }

    #[test]
    fn test_service_trailing_slash_and_out_of_range_passthrough() {
        assert_eq!(
            badge_url("http://127.0.0.1:8080/", 101.0, None),
            "http://127.0.0.1:8080/badge/Coverage-101%25-brightgreen.svg"
        );
    }
}
