//! Presentation helpers for score totals.

use serde::Serialize;

/// Badge color for a score total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Success,
    Warning,
    Danger,
}

#[must_use]
pub fn score_color(total: u8) -> ScoreColor {
    match total {
        70.. => ScoreColor::Success,
        40..=69 => ScoreColor::Warning,
        _ => ScoreColor::Danger,
    }
}

/// Qualitative label for a score total, as shown to salespeople.
#[must_use]
pub fn score_label(total: u8) -> &'static str {
    match total {
        80.. => "Muy Alta",
        60..=79 => "Alta",
        40..=59 => "Media",
        20..=39 => "Baja",
        _ => "Muy Baja",
    }
}
