use crate::normalize::normalize_category;
use crate::profiles::{NicheProfile, PROFILES};
use crate::table::{GENERIC_NICHE, NICHE_KEYWORDS};

/// Resolves a free-text category to a niche key.
///
/// Returns the first niche in table order with a keyword contained in the
/// normalized input, or [`GENERIC_NICHE`] when nothing matches (including
/// absent and blank input).
#[must_use]
pub fn resolve_niche(category: Option<&str>) -> &'static str {
    let Some(text) = category else {
        return GENERIC_NICHE;
    };
    let normalized = normalize_category(text);
    if normalized.is_empty() {
        return GENERIC_NICHE;
    }

    NICHE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(*kw)))
        .map_or(GENERIC_NICHE, |(key, _)| *key)
}

/// Returns the profile for a niche key, if the key is known.
#[must_use]
pub fn niche_profile(key: &str) -> Option<&'static NicheProfile> {
    PROFILES.iter().find(|profile| profile.key == key)
}

/// Resolves `category` and returns its profile, falling back to the generic
/// profile.
#[must_use]
pub fn get_solutions(category: Option<&str>) -> &'static NicheProfile {
    niche_profile(resolve_niche(category)).unwrap_or_else(generic_profile)
}

/// Keys of every matchable niche, in matching order. The generic fallback is
/// not included.
pub fn niche_keys() -> impl Iterator<Item = &'static str> {
    NICHE_KEYWORDS.iter().map(|(key, _)| *key)
}

fn generic_profile() -> &'static NicheProfile {
    // PROFILES ends with the generic entry; see the table tests.
    &PROFILES[PROFILES.len() - 1]
}
