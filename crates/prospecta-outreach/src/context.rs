//! Plain-text brief describing a lead, fed to the provider as the user
//! prompt.

use chrono::{DateTime, Utc};
use prospecta_core::Lead;
use prospecta_niche::NicheProfile;
use prospecta_scoring::{score, score_label, BusinessSignal};

const NOT_SPECIFIED: &str = "No especificada";

/// Lead web probability: the persisted value when present, otherwise the
/// score computed from the lead's observable attributes.
#[must_use]
pub fn lead_web_probability(lead: &Lead) -> u8 {
    lead.web_probability
        .unwrap_or_else(|| score(&BusinessSignal::from(lead)).total)
}

/// Renders the lead as `Label: value` lines.
#[must_use]
pub fn build_lead_context(lead: &Lead, now: DateTime<Utc>) -> String {
    let category = non_blank(lead.category.as_deref()).unwrap_or(NOT_SPECIFIED);
    let location = non_blank(lead.city.as_deref()).unwrap_or(NOT_SPECIFIED);

    let rating = match (lead.rating, lead.review_count) {
        (Some(rating), Some(count)) => format!("{rating:.1} ★ ({count} reseñas)"),
        (Some(rating), None) => format!("{rating:.1} ★"),
        (None, _) => "Sin calificación".to_string(),
    };

    let probability = lead_web_probability(lead);
    let website = match non_blank(lead.website.as_deref()) {
        Some(url) => url.to_string(),
        None => "NO TIENE (oportunidad de crear su primer sitio web)".to_string(),
    };

    let notes = non_blank(lead.notes.as_deref()).unwrap_or("Sin notas");
    let last_contact = match lead.days_since_last_contact(now) {
        None => "Nunca contactado".to_string(),
        Some(0) => "Hoy".to_string(),
        Some(1) => "Hace 1 día".to_string(),
        Some(days) => format!("Hace {days} días"),
    };

    [
        format!("Negocio: {}", lead.name),
        format!("Categoría: {category}"),
        format!("Ubicación: {location}"),
        format!("Calificación: {rating}"),
        format!(
            "Probabilidad de necesitar web: {probability}% ({})",
            score_label(probability)
        ),
        format!("Sitio web: {website}"),
        format!("Estado en CRM: {}", lead.status.label()),
        format!("Notas: {notes}"),
        format!("Último contacto: {last_contact}"),
    ]
    .join("\n")
}

/// Renders the niche's problems, solutions and hooks as bullet lists.
#[must_use]
pub fn build_niche_section(profile: &NicheProfile) -> String {
    let mut lines = vec![format!("Nicho: {}", profile.key)];
    push_list(&mut lines, "Problemas comunes del nicho", profile.problems);
    push_list(&mut lines, "Soluciones que ofrecemos", profile.solutions);
    push_list(&mut lines, "Ejemplos de ganchos", profile.hooks);
    lines.join("\n")
}

/// Full brief: lead lines, niche section and optional extra context.
#[must_use]
pub fn build_brief(
    lead: &Lead,
    profile: &NicheProfile,
    custom_context: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let mut brief = format!(
        "DATOS DEL NEGOCIO\n{}\n\nINFORMACIÓN DEL NICHO\n{}",
        build_lead_context(lead, now),
        build_niche_section(profile)
    );
    if let Some(extra) = non_blank(custom_context) {
        brief.push_str("\n\nCONTEXTO ADICIONAL\n");
        brief.push_str(extra);
    }
    brief
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[&str]) {
    lines.push(format!("{title}:"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
