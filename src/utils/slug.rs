//! URL slug generation for category names.

/// Builds a URL-friendly slug from free text.
///
/// # Rules
///
/// 1. Non-ASCII characters are transliterated (diacritics dropped); letters
///    without a decomposition are spelled out rather than removed, so `ß`
///    gives `ss`, `ı` gives `i` and `€` gives `eur`
/// 2. Letters are lower-cased
/// 3. Every run of characters outside `[a-z0-9]` becomes one `-`
/// 4. Leading and trailing `-` are removed
///
/// Blank input yields an empty string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("  Home & Garden "), "home-garden");
/// assert_eq!(slugify("Çay ve Kahve"), "cay-ve-kahve");
/// ```
pub fn slugify(input: &str) -> String {
    ::slug::slugify(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        assert_eq!(slugify("Electronics"), "electronics");
        assert_eq!(slugify("Updated Name"), "updated-name");
    }

    #[test]
    fn test_punctuation_collapses_to_single_dash() {
        assert_eq!(slugify("Home & Garden"), "home-garden");
        assert_eq!(slugify("a -- b __ c"), "a-b-c");
    }

    #[test]
    fn test_leading_and_trailing_separators_removed() {
        assert_eq!(slugify("  --Books!!  "), "books");
    }

    #[test]
    fn test_diacritics_are_stripped() {
        assert_eq!(slugify("Çay ve Kahve"), "cay-ve-kahve");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn test_undecomposable_letters_are_transliterated() {
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Kırmızı"), "kirmizi");
        assert_eq!(slugify("Price in €"), "price-in-eur");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(slugify("Top 10 Gadgets 2024"), "top-10-gadgets-2024");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }
}
