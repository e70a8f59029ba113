//! Tag color palette shared by the tag editor and tag badges.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::Serialize;

/// Palette keys (translation keys) and hex codes, in display order.
pub const TAG_PALETTE: [(&str, &str); 8] = [
    ("Gray", "#4B5563"),
    ("Red", "#DC2626"),
    ("Orange", "#D97706"),
    ("Green", "#059669"),
    ("Blue", "#2563EB"),
    ("Indigo", "#4F46E5"),
    ("Purple", "#7C3AED"),
    ("Pink", "#DB2777"),
];

/// A selectable tag color with its localized label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub name: String,
    pub color: &'static str,
}

/// Tag color options with names passed through `translate`.
pub fn color_options<F>(translate: F) -> Vec<ColorOption>
where
    F: Fn(&str) -> String,
{
    TAG_PALETTE
        .iter()
        .map(|&(key, color)| ColorOption { name: translate(key), color })
        .collect()
}
