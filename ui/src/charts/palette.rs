//! Classification categories and their chart colours.

/// Neutral gray for categories the palette does not know.
pub const FALLBACK_COLOR: &str = "#adb5bd";

/// Bars of the per-component chart.
pub const COMPONENT_BAR_FILL: &str = "#0d6efd55";
pub const COMPONENT_BAR_BORDER: &str = "#0d6efd";

/// Classification outcome of a bug report.
///
/// Adding a variant forces a colour decision in [`Category::color`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Valid,
    Invalid,
    Duplicate,
    Enhancement,
    WontFix,
    Other(String),
}

impl Category {
    /// The closed set, in the order stacked charts render it.
    pub const KNOWN: [Category; 5] = [
        Category::Valid,
        Category::Invalid,
        Category::Duplicate,
        Category::Enhancement,
        Category::WontFix,
    ];

    pub fn parse(key: &str) -> Self {
        match key {
            "valid" => Self::Valid,
            "invalid" => Self::Invalid,
            "duplicate" => Self::Duplicate,
            "enhancement" => Self::Enhancement,
            "wont_fix" => Self::WontFix,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire key as emitted by the classifier.
    pub fn key(&self) -> &str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Duplicate => "duplicate",
            Self::Enhancement => "enhancement",
            Self::WontFix => "wont_fix",
            Self::Other(key) => key,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Valid => "#198754",
            Self::Invalid => "#dc3545",
            Self::Duplicate => "#6c757d",
            Self::Enhancement => "#0dcaf0",
            Self::WontFix => "#ffc107",
            Self::Other(_) => FALLBACK_COLOR,
        }
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label used by the distribution donut: `wont_fix` → `Wont_fix`.
pub fn donut_label(key: &str) -> String {
    capitalize(key)
}

/// Label used by stacked per-cycle series: `wont_fix` → `Wont fix`.
pub fn series_label(key: &str) -> String {
    capitalize(key).replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_round_trip_their_keys() {
        for category in Category::KNOWN {
            assert_eq!(Category::parse(category.key()), category);
        }
    }

    #[test]
    fn unknown_category_gets_fallback_color() {
        let category = Category::parse("needs_info");
        assert_eq!(category, Category::Other("needs_info".into()));
        assert_eq!(category.color(), FALLBACK_COLOR);
        assert_eq!(category.key(), "needs_info");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(Category::parse("Valid").color(), FALLBACK_COLOR);
    }

    #[test]
    fn label_formats_differ_on_underscores() {
        assert_eq!(donut_label("wont_fix"), "Wont_fix");
        assert_eq!(series_label("wont_fix"), "Wont fix");
        assert_eq!(donut_label("valid"), "Valid");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
