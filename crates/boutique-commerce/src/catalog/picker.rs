//! Size/color variant selection for the product page.

use crate::catalog::ProductVariant;

/// Distinct sizes in first-seen order. Blank sizes are skipped.
pub fn distinct_sizes(variants: &[ProductVariant]) -> Vec<&str> {
    distinct(variants.iter().map(|v| v.size.as_deref()))
}

/// Distinct colors in first-seen order. Blank colors are skipped.
pub fn distinct_colors(variants: &[ProductVariant]) -> Vec<&str> {
    distinct(variants.iter().map(|v| v.color.as_deref()))
}

fn distinct<'a>(options: impl Iterator<Item = Option<&'a str>>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for option in options.flatten() {
        if !option.is_empty() && !seen.contains(&option) {
            seen.push(option);
        }
    }
    seen
}

/// Pick the variant for a newly clicked size.
///
/// Keeps the current color when a variant exists for that combination,
/// otherwise falls back to the first variant with the size.
pub fn select_size<'a>(
    variants: &'a [ProductVariant],
    current: Option<&ProductVariant>,
    size: &str,
) -> Option<&'a ProductVariant> {
    let current_color = current.and_then(|c| c.color.as_deref());
    variants
        .iter()
        .find(|v| v.size.as_deref() == Some(size) && v.color.as_deref() == current_color)
        .or_else(|| variants.iter().find(|v| v.size.as_deref() == Some(size)))
}

/// Pick the variant for a newly clicked color.
///
/// Keeps the current size when a variant exists for that combination,
/// otherwise falls back to the first variant with the color.
pub fn select_color<'a>(
    variants: &'a [ProductVariant],
    current: Option<&ProductVariant>,
    color: &str,
) -> Option<&'a ProductVariant> {
    let current_size = current.and_then(|c| c.size.as_deref());
    variants
        .iter()
        .find(|v| v.color.as_deref() == Some(color) && v.size.as_deref() == current_size)
        .or_else(|| variants.iter().find(|v| v.color.as_deref() == Some(color)))
}

/// Whether a size button is enabled.
///
/// Looks at the first variant carrying the size; a size nobody carries is
/// reported available.
pub fn size_available(variants: &[ProductVariant], size: &str) -> bool {
    variants
        .iter()
        .find(|v| v.size.as_deref() == Some(size))
        .map_or(true, |v| v.is_in_stock)
}

/// Whether a color button is enabled. Same rule as [`size_available`].
pub fn color_available(variants: &[ProductVariant], color: &str) -> bool {
    variants
        .iter()
        .find(|v| v.color.as_deref() == Some(color))
        .map_or(true, |v| v.is_in_stock)
}
