//! Locale-aware string ordering.
//!
//! In the browser, [`IntlCollator`] delegates to `Intl.Collator` so the
//! table orders text exactly as the page locale does. Elsewhere
//! [`UnicodeCollator`] approximates the default collation with a
//! multi-level comparison over canonically decomposed text.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// String comparison used for every non-numeric sort column.
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Multi-level collation over NFD text.
///
/// Levels, most significant first:
/// 1. base letters, case-folded, accents ignored
/// 2. accents
/// 3. case, lowercase before uppercase
/// 4. canonical (NFC) code points, so only equivalent strings tie
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCollator;

impl UnicodeCollator {
    fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
        text.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
    }

    fn accented_letters(text: &str) -> impl Iterator<Item = char> + '_ {
        text.nfd().flat_map(char::to_lowercase)
    }

    fn case_marks(text: &str) -> impl Iterator<Item = bool> + '_ {
        text.nfd().map(char::is_uppercase)
    }
}

impl Collator for UnicodeCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        Self::base_letters(a)
            .cmp(Self::base_letters(b))
            .then_with(|| Self::accented_letters(a).cmp(Self::accented_letters(b)))
            .then_with(|| Self::case_marks(a).cmp(Self::case_marks(b)))
            .then_with(|| a.nfc().cmp(b.nfc()))
    }
}

/// `Intl.Collator` with the page's default locale and options.
#[cfg(target_arch = "wasm32")]
pub struct IntlCollator {
    compare: js_sys::Function,
}

#[cfg(target_arch = "wasm32")]
impl IntlCollator {
    pub fn new() -> Self {
        let collator = js_sys::Intl::Collator::new(&js_sys::Array::new(), &js_sys::Object::new());
        Self {
            compare: collator.compare(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for IntlCollator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Collator for IntlCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        use wasm_bindgen::JsValue;

        let result = self
            .compare
            .call2(&JsValue::UNDEFINED, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        result.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

/// Collator used by the running page.
#[cfg(target_arch = "wasm32")]
pub type PlatformCollator = IntlCollator;

/// Collator used by the running page.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformCollator = UnicodeCollator;

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| UnicodeCollator.compare(a, b));
        words
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["banana", "Apple", "cherry"]), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(sorted(&["zebra", "éclair", "eagle"]), ["eagle", "éclair", "zebra"]);
        assert_eq!(UnicodeCollator.compare("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_first_on_case_tie() {
        assert_eq!(UnicodeCollator.compare("a", "A"), Ordering::Less);
        assert_eq!(sorted(&["Reader", "reader"]), ["reader", "Reader"]);
    }

    #[test]
    fn test_canonical_equivalence_ties() {
        // Precomposed vs decomposed e-acute.
        assert_eq!(UnicodeCollator.compare("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
        assert_eq!(UnicodeCollator.compare("same", "same"), Ordering::Equal);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn intl_collator_orders_case_insensitively() {
        let collator = IntlCollator::new();
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("zebra", "éclair"), Ordering::Greater);
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
    }
}
