//! Known chain and franchise brands.

/// Lowercase brand fragments. A business whose name contains one of these is
/// treated as part of a chain that already has corporate web presence.
pub(crate) const KNOWN_CHAINS: &[&str] = &[
    // Fast food and coffee
    "mcdonald",
    "burger king",
    "kfc",
    "subway",
    "starbucks",
    "domino's",
    "dominos",
    "pizza hut",
    "little caesars",
    "papa john",
    "telepizza",
    "100 montaditos",
    "foster's hollywood",
    "tim hortons",
    "dunkin",
    "taco bell",
    "wendy's",
    "carl's jr",
    "popeyes",
    "italianni's",
    // Supermarkets and convenience
    "oxxo",
    "7-eleven",
    "seven eleven",
    "walmart",
    "bodega aurrera",
    "soriana",
    "chedraui",
    "costco",
    "mercadona",
    "carrefour",
    "lidl",
    "aldi",
    // Retail
    "el corte ingl",
    "primark",
    "decathlon",
    "leroy merlin",
    "ikea",
    "home depot",
    "liverpool",
    "coppel",
    "elektra",
    // Pharmacies, cinemas, telecom and banks
    "farmacias guadalajara",
    "farmacias del ahorro",
    "farmacias similares",
    "cinepolis",
    "cinemex",
    "movistar",
    "telcel",
    "santander",
    "bbva",
];

/// Returns `true` if `name` contains a well-known chain brand, ignoring case.
#[must_use]
pub fn is_known_chain(name: &str) -> bool {
    let lower = name.to_lowercase();
    KNOWN_CHAINS.iter().any(|chain| lower.contains(*chain))
}
