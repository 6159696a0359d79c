use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").expect("valid disallowed-chars regex"));

/// Lowercases `text`, strips diacritics, drops everything outside
/// `[a-z0-9 ]` and collapses runs of whitespace.
///
/// `"Peluquería & Spa"` becomes `"peluqueria spa"`.
#[must_use]
pub fn normalize_category(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let stripped = DISALLOWED.replace_all(&folded, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_lowercases() {
        assert_eq!(normalize_category("Peluquería"), "peluqueria");
        assert_eq!(normalize_category("CAFETERÍA Ñandú"), "cafeteria nandu");
    }

    #[test]
    fn drops_punctuation_and_collapses_whitespace() {
        assert_eq!(
            normalize_category("  Peluquería   & Spa!! "),
            "peluqueria spa"
        );
        assert_eq!(normalize_category("Taller\tmecánico\n24h"), "taller mecanico 24h");
    }

    #[test]
    fn empty_and_symbol_only_input_normalize_to_empty() {
        assert_eq!(normalize_category(""), "");
        assert_eq!(normalize_category("¡¿—?!"), "");
    }
}
