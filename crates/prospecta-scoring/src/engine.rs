//! Additive weighted heuristic behind the web-probability score.
//!
//! Seven factors are evaluated in a fixed order, each adding points to a raw
//! score and (except the lowest photo tier) recording a [`ScoreFactor`]. The
//! raw score is then normalized to `0..=100` and the business classified as a
//! new-website, redesign or low-priority opportunity.

use crate::keywords::{classify_category, CategoryNeed};
use crate::types::{BusinessSignal, FactorImpact, OpportunityType, ScoreFactor, ScoreResult};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const NO_WEBSITE_POINTS: i32 = 40;
const WEBSITE_PENALTY: i32 = 50;
const HIGH_NEED_POINTS: i32 = 25;
const LOW_NEED_POINTS: i32 = 5;
const NEUTRAL_NEED_POINTS: i32 = 15;
const MAX_RATING_POINTS: i32 = 10;
const MAX_REVIEW_POINTS: i32 = 10;
const MAX_PRICE_POINTS: i32 = 10;
const MAX_PHOTO_POINTS: i32 = 5;
const INDEPENDENT_POINTS: i32 = 8;
const CHAIN_POINTS: i32 = 2;

/// Highest attainable raw score (no website, every factor at its top tier).
pub const MAX_SCORE: i32 = 108;

const _: () = assert!(
    NO_WEBSITE_POINTS
        + HIGH_NEED_POINTS
        + MAX_RATING_POINTS
        + MAX_REVIEW_POINTS
        + MAX_PRICE_POINTS
        + MAX_PHOTO_POINTS
        + INDEPENDENT_POINTS
        == MAX_SCORE,
    "factor maxima must sum to MAX_SCORE"
);

/// Highest attainable score once the website factor is taken out.
const MAX_STRUCTURAL_SCORE: i32 = MAX_SCORE - NO_WEBSITE_POINTS;

/// A business that already has a website never scores above this total.
pub const WEBSITE_TOTAL_CAP: u8 = 25;

const REDESIGN_HIGH_THRESHOLD: u8 = 70;
const REDESIGN_MODERATE_THRESHOLD: u8 = 50;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tally {
    raw: i32,
    factors: Vec<ScoreFactor>,
}

impl Tally {
    fn add(&mut self, name: &str, impact: FactorImpact, points: i32, description: String) {
        self.raw += points;
        self.factors.push(ScoreFactor {
            name: name.to_string(),
            impact,
            points,
            description,
        });
    }

    fn add_unrecorded(&mut self, points: i32) {
        self.raw += points;
    }
}

/// Scores a business signal.
///
/// Pure and deterministic: identical signals always produce identical
/// results, and absent optional fields fall back to documented defaults.
#[must_use]
pub fn score(signal: &BusinessSignal) -> ScoreResult {
    let mut tally = Tally::default();

    website_factor(&mut tally, signal.has_website);
    category_factor(&mut tally, signal);
    rating_factor(&mut tally, signal.rating);
    review_factor(&mut tally, signal.review_count);
    price_factor(&mut tally, signal.price_level);
    photo_factor(&mut tally, signal.photo_count);
    chain_factor(&mut tally, signal.is_chain);

    let mut total = percent_of(tally.raw, MAX_SCORE);
    if signal.has_website {
        total = total.min(WEBSITE_TOTAL_CAP);
    }

    let (opportunity_type, redesign_potential, redesign_reason) = if signal.has_website {
        let potential = percent_of(tally.raw + WEBSITE_PENALTY, MAX_STRUCTURAL_SCORE);
        let (kind, reason) = classify_redesign(signal, potential);
        (kind, potential, Some(reason))
    } else {
        (OpportunityType::NewWebsite, 0, None)
    };

    ScoreResult {
        factors: tally.factors,
        total,
        has_website: signal.has_website,
        opportunity_type,
        redesign_potential,
        redesign_reason,
    }
}

/// `round(value / max * 100)` clamped to `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_of(value: i32, max: i32) -> u8 {
    let pct = (f64::from(value) / f64::from(max) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

fn website_factor(tally: &mut Tally, has_website: bool) {
    if has_website {
        tally.add(
            "Ya tiene sitio web",
            FactorImpact::Negative,
            -WEBSITE_PENALTY,
            "Ya cuenta con presencia web; la oportunidad pasa a ser un rediseño".to_string(),
        );
    } else {
        tally.add(
            "Sin sitio web",
            FactorImpact::Positive,
            NO_WEBSITE_POINTS,
            "No tiene sitio web propio: es la señal más fuerte de necesidad".to_string(),
        );
    }
}

fn category_factor(tally: &mut Tally, signal: &BusinessSignal) {
    match classify_category(signal.category.as_deref(), &signal.types) {
        CategoryNeed::High(keyword) => tally.add(
            "Categoría de alta necesidad",
            FactorImpact::Positive,
            HIGH_NEED_POINTS,
            format!("Los negocios del rubro '{keyword}' dependen de atraer clientes en línea"),
        ),
        CategoryNeed::Low(keyword) => tally.add(
            "Categoría de baja necesidad",
            FactorImpact::Negative,
            LOW_NEED_POINTS,
            format!("El rubro '{keyword}' rara vez contrata sitios web a una agencia local"),
        ),
        CategoryNeed::Neutral => tally.add(
            "Categoría estándar",
            FactorImpact::Neutral,
            NEUTRAL_NEED_POINTS,
            "Rubro sin señales claras de necesidad digital".to_string(),
        ),
    }
}

fn rating_factor(tally: &mut Tally, rating: Option<f64>) {
    match rating {
        Some(r) if r >= 4.5 => tally.add(
            "Excelente calificación",
            FactorImpact::Positive,
            10,
            format!("Calificación de {r:.1}: clientes satisfechos que vale la pena mostrar"),
        ),
        Some(r) if r >= 4.0 => tally.add(
            "Buena calificación",
            FactorImpact::Positive,
            8,
            format!("Calificación de {r:.1}: buena reputación"),
        ),
        Some(r) if r >= 3.5 => tally.add(
            "Calificación aceptable",
            FactorImpact::Neutral,
            5,
            format!("Calificación de {r:.1}: reputación aceptable"),
        ),
        Some(r) => tally.add(
            "Calificación baja",
            FactorImpact::Neutral,
            3,
            format!("Calificación de {r:.1}: reputación mejorable"),
        ),
        None => tally.add(
            "Sin calificación",
            FactorImpact::Neutral,
            5,
            "No hay calificación disponible".to_string(),
        ),
    }
}

fn review_factor(tally: &mut Tally, review_count: Option<u32>) {
    match review_count {
        Some(n) if n >= 100 => tally.add(
            "Alto volumen de reseñas",
            FactorImpact::Positive,
            10,
            format!("{n} reseñas: negocio con mucho movimiento"),
        ),
        Some(n) if n >= 50 => tally.add(
            "Buen volumen de reseñas",
            FactorImpact::Positive,
            7,
            format!("{n} reseñas: clientela establecida"),
        ),
        Some(n) if n >= 20 => tally.add(
            "Reseñas moderadas",
            FactorImpact::Neutral,
            5,
            format!("{n} reseñas"),
        ),
        Some(n) => tally.add(
            "Pocas reseñas",
            FactorImpact::Neutral,
            3,
            format!("Solo {n} reseñas"),
        ),
        None => tally.add(
            "Sin reseñas",
            FactorImpact::Neutral,
            3,
            "No hay reseñas registradas".to_string(),
        ),
    }
}

fn price_factor(tally: &mut Tally, price_level: Option<u8>) {
    match price_level {
        Some(level) if level >= 3 => tally.add(
            "Nivel de precio alto",
            FactorImpact::Positive,
            MAX_PRICE_POINTS,
            "Ticket alto: puede invertir en su imagen digital".to_string(),
        ),
        Some(2) => tally.add(
            "Nivel de precio medio",
            FactorImpact::Positive,
            7,
            "Ticket medio".to_string(),
        ),
        Some(1) => tally.add(
            "Nivel de precio económico",
            FactorImpact::Neutral,
            5,
            "Ticket económico".to_string(),
        ),
        Some(_) => tally.add(
            "Nivel de precio muy económico",
            FactorImpact::Neutral,
            3,
            "Ticket muy económico: menor presupuesto disponible".to_string(),
        ),
        None => tally.add(
            "Nivel de precio desconocido",
            FactorImpact::Neutral,
            5,
            "El proveedor no reporta nivel de precio".to_string(),
        ),
    }
}

fn photo_factor(tally: &mut Tally, photo_count: u32) {
    if photo_count >= 10 {
        tally.add(
            "Muchas fotos",
            FactorImpact::Positive,
            MAX_PHOTO_POINTS,
            format!("{photo_count} fotos: cuida su imagen y tiene material visual"),
        );
    } else if photo_count >= 5 {
        tally.add(
            "Algunas fotos",
            FactorImpact::Neutral,
            3,
            format!("{photo_count} fotos publicadas"),
        );
    } else {
        tally.add_unrecorded(2);
    }
}

fn chain_factor(tally: &mut Tally, is_chain: bool) {
    if is_chain {
        tally.add(
            "Cadena o franquicia",
            FactorImpact::Negative,
            CHAIN_POINTS,
            "Las cadenas suelen tener un sitio corporativo".to_string(),
        );
    } else {
        tally.add(
            "Negocio independiente",
            FactorImpact::Positive,
            INDEPENDENT_POINTS,
            "Negocio independiente: más necesidad de diferenciarse".to_string(),
        );
    }
}

// ---------------------------------------------------------------------------
// Redesign classification
// ---------------------------------------------------------------------------

/// A redesign reason that replaces the previous one when `applies` holds.
struct ReasonRule {
    applies: fn(&BusinessSignal) -> bool,
    reason: fn(&BusinessSignal) -> String,
}

/// Evaluated top to bottom; the last matching rule wins.
const HIGH_POTENTIAL_RULES: &[ReasonRule] = &[
    ReasonRule {
        applies: always,
        reason: generic_high_reason,
    },
    ReasonRule {
        applies: has_excellent_rating,
        reason: rating_reason,
    },
    ReasonRule {
        applies: has_high_review_volume,
        reason: review_volume_reason,
    },
];

fn always(_: &BusinessSignal) -> bool {
    true
}

fn has_excellent_rating(signal: &BusinessSignal) -> bool {
    signal.rating.is_some_and(|r| r >= 4.5)
}

fn has_high_review_volume(signal: &BusinessSignal) -> bool {
    signal.review_count.is_some_and(|n| n >= 100)
}

fn generic_high_reason(_: &BusinessSignal) -> String {
    "Alto potencial de rediseño: negocio bien posicionado cuyo sitio web probablemente no está a su altura"
        .to_string()
}

fn rating_reason(signal: &BusinessSignal) -> String {
    format!(
        "Excelente calificación ({:.1}): su sitio web actual probablemente no refleja su reputación",
        signal.rating.unwrap_or_default()
    )
}

fn review_volume_reason(signal: &BusinessSignal) -> String {
    format!(
        "Con {} reseñas tiene tráfico suficiente para que un sitio moderno convierta más clientes",
        signal.review_count.unwrap_or_default()
    )
}

fn classify_redesign(signal: &BusinessSignal, potential: u8) -> (OpportunityType, String) {
    if potential >= REDESIGN_HIGH_THRESHOLD {
        let mut reason = String::new();
        for rule in HIGH_POTENTIAL_RULES {
            if (rule.applies)(signal) {
                reason = (rule.reason)(signal);
            }
        }
        (OpportunityType::Redesign, reason)
    } else if potential >= REDESIGN_MODERATE_THRESHOLD {
        (
            OpportunityType::Redesign,
            "Potencial moderado de rediseño: conviene revisar la calidad de su sitio actual"
                .to_string(),
        )
    } else {
        (
            OpportunityType::LowPriority,
            "Baja prioridad: probablemente ya cuenta con equipo interno o proveedor web"
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> BusinessSignal {
        BusinessSignal {
            name: "La Cocina de Doña Mary".to_string(),
            category: Some("restaurant".to_string()),
            ..BusinessSignal::default()
        }
    }

    fn factor_names(result: &ScoreResult) -> Vec<&str> {
        result.factors.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn scenario_no_website_top_restaurant_is_new_website_high_score() {
        let signal = BusinessSignal {
            has_website: false,
            rating: Some(4.6),
            review_count: Some(150),
            price_level: Some(2),
            photo_count: 12,
            is_chain: false,
            ..restaurant()
        };
        let result = score(&signal);

        // 40 + 25 + 10 + 10 + 7 + 5 + 8 = 105 -> 97
        assert_eq!(result.total, 97);
        assert!(result.total >= 70);
        assert_eq!(result.opportunity_type, OpportunityType::NewWebsite);
        assert_eq!(result.redesign_potential, 0);
        assert!(result.redesign_reason.is_none());
    }

    #[test]
    fn scenario_website_with_many_reviews_is_redesign_with_review_reason() {
        let signal = BusinessSignal {
            has_website: true,
            rating: Some(4.8),
            review_count: Some(200),
            ..restaurant()
        };
        let result = score(&signal);

        assert_eq!(result.opportunity_type, OpportunityType::Redesign);
        assert!(result.total <= WEBSITE_TOTAL_CAP);
        // -50 + 25 + 10 + 10 + 5 + 2 + 8 = 10; structural 60 / 68 -> 88
        assert_eq!(result.redesign_potential, 88);
        let reason = result.redesign_reason.expect("redesign reason");
        assert!(reason.contains("200 reseñas"), "unexpected reason: {reason}");
    }

    #[test]
    fn excellent_rating_reason_when_reviews_below_threshold() {
        let signal = BusinessSignal {
            has_website: true,
            rating: Some(4.6),
            review_count: Some(60),
            price_level: Some(2),
            ..restaurant()
        };
        let result = score(&signal);

        assert!(result.redesign_potential >= 70);
        let reason = result.redesign_reason.expect("redesign reason");
        assert!(reason.contains("4.6"), "unexpected reason: {reason}");
    }

    #[test]
    fn generic_high_reason_without_rating_or_review_override() {
        let signal = BusinessSignal {
            has_website: true,
            rating: Some(4.2),
            review_count: Some(60),
            price_level: Some(3),
            photo_count: 10,
            ..restaurant()
        };
        let result = score(&signal);

        assert_eq!(result.redesign_potential, 93);
        assert_eq!(
            result.redesign_reason.as_deref(),
            Some(generic_high_reason(&signal).as_str())
        );
    }

    #[test]
    fn moderate_potential_is_redesign() {
        let signal = BusinessSignal {
            name: "Comercial Ruiz".to_string(),
            has_website: true,
            rating: Some(4.0),
            review_count: Some(30),
            price_level: Some(1),
            photo_count: 6,
            ..BusinessSignal::default()
        };
        let result = score(&signal);

        // -50 + 15 + 8 + 5 + 5 + 3 + 8 = -6; structural 44 / 68 -> 65
        assert_eq!(result.redesign_potential, 65);
        assert_eq!(result.opportunity_type, OpportunityType::Redesign);
        assert!(result
            .redesign_reason
            .as_deref()
            .is_some_and(|r| r.starts_with("Potencial moderado")));
    }

    #[test]
    fn weak_chain_with_website_is_low_priority() {
        let signal = BusinessSignal {
            name: "Banco Central".to_string(),
            category: Some("bank".to_string()),
            has_website: true,
            rating: Some(3.0),
            review_count: Some(5),
            price_level: Some(0),
            photo_count: 0,
            is_chain: true,
            ..BusinessSignal::default()
        };
        let result = score(&signal);

        // -50 + 5 + 3 + 3 + 3 + 2 + 2 = -32; total clamps to 0, structural 18 / 68 -> 26
        assert_eq!(result.total, 0);
        assert_eq!(result.redesign_potential, 26);
        assert_eq!(result.opportunity_type, OpportunityType::LowPriority);
    }

    #[test]
    fn factors_are_recorded_in_evaluation_order() {
        let signal = BusinessSignal {
            photo_count: 7,
            ..restaurant()
        };
        let result = score(&signal);
        assert_eq!(
            factor_names(&result),
            vec![
                "Sin sitio web",
                "Categoría de alta necesidad",
                "Sin calificación",
                "Sin reseñas",
                "Nivel de precio desconocido",
                "Algunas fotos",
                "Negocio independiente",
            ]
        );
    }

    #[test]
    fn few_photos_add_points_without_a_factor() {
        let with_none = score(&restaurant());
        assert_eq!(with_none.factors.len(), 6);
        // 40 + 25 + 5 + 3 + 5 + 2 + 8 = 88 -> 81
        assert_eq!(with_none.total, 81);
    }

    #[test]
    fn factor_points_sum_to_raw_score() {
        let signal = BusinessSignal {
            rating: Some(3.9),
            review_count: Some(55),
            price_level: Some(4),
            photo_count: 20,
            ..restaurant()
        };
        let result = score(&signal);
        let sum: i32 = result.factors.iter().map(|f| f.points).sum();
        // 40 + 25 + 5 + 7 + 10 + 5 + 8
        assert_eq!(sum, 100);
        assert_eq!(result.total, 93);
    }

    #[test]
    fn tier_boundaries_for_rating_reviews_and_price() {
        let points = |signal: &BusinessSignal, name: &str| {
            score(signal)
                .factors
                .into_iter()
                .find(|f| f.name == name)
                .map(|f| f.points)
        };

        let base = restaurant();
        let with = |rating: f64, reviews: u32, price: u8| BusinessSignal {
            rating: Some(rating),
            review_count: Some(reviews),
            price_level: Some(price),
            ..base.clone()
        };

        assert_eq!(points(&with(4.5, 100, 3), "Excelente calificación"), Some(10));
        assert_eq!(points(&with(4.0, 50, 2), "Buena calificación"), Some(8));
        assert_eq!(points(&with(3.5, 20, 1), "Calificación aceptable"), Some(5));
        assert_eq!(points(&with(3.4, 19, 0), "Calificación baja"), Some(3));

        assert_eq!(points(&with(4.5, 100, 3), "Alto volumen de reseñas"), Some(10));
        assert_eq!(points(&with(4.5, 50, 3), "Buen volumen de reseñas"), Some(7));
        assert_eq!(points(&with(4.5, 20, 3), "Reseñas moderadas"), Some(5));
        assert_eq!(points(&with(4.5, 19, 3), "Pocas reseñas"), Some(3));

        assert_eq!(points(&with(4.5, 100, 4), "Nivel de precio alto"), Some(10));
        assert_eq!(points(&with(4.5, 100, 2), "Nivel de precio medio"), Some(7));
        assert_eq!(points(&with(4.5, 100, 1), "Nivel de precio económico"), Some(5));
        assert_eq!(points(&with(4.5, 100, 0), "Nivel de precio muy económico"), Some(3));
    }

    #[test]
    fn chain_scores_less_than_independent() {
        let independent = score(&restaurant());
        let chain = score(&BusinessSignal {
            is_chain: true,
            ..restaurant()
        });
        assert!(chain.total < independent.total);
        assert_eq!(
            chain.factors.last().map(|f| f.name.as_str()),
            Some("Cadena o franquicia")
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let signal = BusinessSignal {
            rating: Some(4.1),
            review_count: Some(42),
            ..restaurant()
        };
        assert_eq!(score(&signal), score(&signal));
    }

    /// A spread of signals covering every tier of every factor.
    fn signal_grid() -> Vec<BusinessSignal> {
        let categories = [None, Some("restaurant"), Some("bank"), Some("tienda")];
        let ratings = [None, Some(0.0), Some(3.6), Some(4.2), Some(5.0)];
        let reviews = [None, Some(0), Some(25), Some(75), Some(500)];
        let prices = [None, Some(0), Some(1), Some(2), Some(4)];
        let photos = [0, 5, 10];
        let mut out = Vec::new();
        for category in categories {
            for rating in ratings {
                for review_count in reviews {
                    for price_level in prices {
                        for photo_count in photos {
                            for is_chain in [false, true] {
                                out.push(BusinessSignal {
                                    name: "Negocio".to_string(),
                                    category: category.map(str::to_string),
                                    types: Vec::new(),
                                    has_website: false,
                                    rating,
                                    review_count,
                                    price_level,
                                    photo_count,
                                    is_chain,
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn website_absence_always_scores_strictly_higher() {
        for signal in signal_grid() {
            let without = score(&signal);
            let with = score(&BusinessSignal {
                has_website: true,
                ..signal.clone()
            });
            assert!(
                without.total > with.total,
                "expected {} > {} for {signal:?}",
                without.total,
                with.total
            );
        }
    }

    #[test]
    fn website_presence_caps_total_and_excludes_new_website() {
        for signal in signal_grid() {
            let result = score(&BusinessSignal {
                has_website: true,
                ..signal
            });
            assert!(result.total <= WEBSITE_TOTAL_CAP);
            assert_ne!(result.opportunity_type, OpportunityType::NewWebsite);
            assert!(result.redesign_reason.is_some());
        }
    }

    #[test]
    fn no_website_is_always_new_website_with_zero_potential() {
        for signal in signal_grid() {
            let result = score(&signal);
            assert_eq!(result.opportunity_type, OpportunityType::NewWebsite);
            assert_eq!(result.redesign_potential, 0);
        }
    }

    #[test]
    fn totals_and_potentials_stay_in_range() {
        for signal in signal_grid() {
            for has_website in [false, true] {
                let result = score(&BusinessSignal {
                    has_website,
                    ..signal.clone()
                });
                assert!(result.total <= 100);
                assert!(result.redesign_potential <= 100);
            }
        }
    }

    #[test]
    fn out_of_range_inputs_do_not_panic() {
        let signal = BusinessSignal {
            rating: Some(-3.0),
            review_count: Some(u32::MAX),
            price_level: Some(u8::MAX),
            photo_count: u32::MAX,
            ..restaurant()
        };
        let result = score(&signal);
        assert!(result.total <= 100);
    }
}
