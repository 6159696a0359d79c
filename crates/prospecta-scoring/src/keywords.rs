//! Category keyword sets used by the category-need factor.

/// Categories whose customers routinely look businesses up online before
/// visiting. Each keyword must start a word of the lowercased category or
/// type tag, so `restaurant` matches "restaurante" but `spa` does not match
/// "España".
pub(crate) const HIGH_NEED: &[&str] = &[
    // Food and drink
    "restaurant",
    "cafe",
    "bakery",
    "bar",
    "meal_takeaway",
    "meal_delivery",
    "night_club",
    // Personal care
    "beauty_salon",
    "hair_care",
    "spa",
    "gym",
    "peluqueria",
    "gimnasio",
    // Health
    "dentist",
    "dentista",
    "doctor",
    "physiotherapist",
    "veterinary_care",
    "clinica",
    // Professional services
    "lawyer",
    "abogado",
    "accounting",
    "real_estate_agency",
    "inmobiliaria",
    "insurance_agency",
    "travel_agency",
    // Trades and contractors
    "plumber",
    "electrician",
    "roofing_contractor",
    "general_contractor",
    "painter",
    "locksmith",
    "moving_company",
    "laundry",
    "taller",
    // Automotive
    "car_repair",
    "car_wash",
    "car_dealer",
    // Independent retail
    "florist",
    "furniture_store",
    "clothing_store",
    "jewelry_store",
    "shoe_store",
    "pet_store",
    "home_goods_store",
    "hardware_store",
    // Hospitality
    "lodging",
];

/// Institutions that rarely buy a website from a local agency.
pub(crate) const LOW_NEED: &[&str] = &[
    "bank",
    "atm",
    "bus_station",
    "train_station",
    "transit_station",
    "subway_station",
    "light_rail_station",
    "airport",
    "city_hall",
    "local_government_office",
    "courthouse",
    "police",
    "fire_station",
    "post_office",
    "hospital",
    "embassy",
    "gas_station",
    "parking",
];

/// Outcome of matching a business's category against the keyword sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryNeed {
    /// Matched the carried [`HIGH_NEED`] keyword.
    High(&'static str),
    /// Matched the carried [`LOW_NEED`] keyword.
    Low(&'static str),
    Neutral,
}

/// Classifies a business by its free-text category and provider type tags.
///
/// The high-need set is checked against every candidate before the low-need
/// set is consulted, so a business tagged with both resolves to `High`.
/// Keywords match at the start of a word; underscores belong to the word so
/// provider tags such as `beauty_salon` stay whole.
#[must_use]
pub fn classify_category(category: Option<&str>, types: &[String]) -> CategoryNeed {
    let candidates: Vec<String> = category
        .into_iter()
        .chain(types.iter().map(String::as_str))
        .map(str::to_lowercase)
        .collect();

    if let Some(keyword) = first_match(&candidates, HIGH_NEED) {
        return CategoryNeed::High(keyword);
    }
    if let Some(keyword) = first_match(&candidates, LOW_NEED) {
        return CategoryNeed::Low(keyword);
    }
    CategoryNeed::Neutral
}

fn first_match(candidates: &[String], keywords: &'static [&'static str]) -> Option<&'static str> {
    candidates.iter().find_map(|candidate| {
        keywords
            .iter()
            .copied()
            .find(|keyword| starts_a_word(candidate, keyword))
    })
}

fn starts_a_word(candidate: &str, keyword: &str) -> bool {
    candidate
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| word.starts_with(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn restaurant_category_is_high_need() {
        assert_eq!(
            classify_category(Some("Restaurant"), &[]),
            CategoryNeed::High("restaurant")
        );
    }

    #[test]
    fn spanish_category_matches_through_substring() {
        assert_eq!(
            classify_category(Some("Restaurante mexicano"), &[]),
            CategoryNeed::High("restaurant")
        );
    }

    #[test]
    fn type_tags_are_considered() {
        assert_eq!(
            classify_category(None, &tags(&["point_of_interest", "beauty_salon"])),
            CategoryNeed::High("beauty_salon")
        );
    }

    #[test]
    fn bank_is_low_need() {
        assert_eq!(
            classify_category(Some("Bank"), &tags(&["finance"])),
            CategoryNeed::Low("bank")
        );
    }

    #[test]
    fn high_need_wins_over_low_need() {
        // The category is low need but a type tag is high need.
        assert_eq!(
            classify_category(Some("Hospital"), &tags(&["dentist"])),
            CategoryNeed::High("dentist")
        );
    }

    #[test]
    fn short_keywords_do_not_match_inside_words() {
        assert_eq!(
            classify_category(Some("Embajada de España"), &tags(&["embassy"])),
            CategoryNeed::Low("embassy")
        );
        assert_eq!(
            classify_category(Some("Water treatment plant"), &[]),
            CategoryNeed::Neutral
        );
    }

    #[test]
    fn spa_still_matches_as_its_own_word() {
        assert_eq!(
            classify_category(Some("Day Spa Roma"), &tags(&["spa"])),
            CategoryNeed::High("spa")
        );
    }

    #[test]
    fn unknown_category_is_neutral() {
        assert_eq!(
            classify_category(Some("Cementerio municipal"), &tags(&["establishment"])),
            CategoryNeed::Neutral
        );
    }

    #[test]
    fn no_category_and_no_types_is_neutral() {
        assert_eq!(classify_category(None, &[]), CategoryNeed::Neutral);
    }

    #[test]
    fn keyword_sets_are_disjoint() {
        for high in HIGH_NEED {
            assert!(
                !LOW_NEED.contains(high),
                "'{high}' appears in both keyword sets"
            );
        }
    }
}
