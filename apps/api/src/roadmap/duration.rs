//! Duration arithmetic for roadmap generation: per-group week estimates,
//! timeline adjustment, and human-readable formatting.

use crate::roadmap::generator::RoadmapProfile;

/// Hard floor and ceiling on a roadmap's total length, regardless of what
/// the per-phase sum works out to.
pub const MIN_TOTAL_WEEKS: u32 = 12;
pub const MAX_TOTAL_WEEKS: u32 = 96;

/// Weekly-hours commitment → duration multiplier. Unrecognized values are
/// neutral.
const TIME_COMMITMENT_FACTORS: &[(&str, f64)] = &[
    ("Less than 5 hours", 1.5),
    ("5–10 hours", 1.2),
    ("10–20 hours", 1.0),
    ("Full-time learning", 0.7),
];

/// Weeks to master one skill group (1–2 skills), from a 3-week base
/// adjusted for experience, weekly commitment, and learning pace.
pub fn skill_group_weeks(profile: &RoadmapProfile) -> u32 {
    let mut weeks = 3.0_f64;

    match profile.experience_level.as_str() {
        "beginner" => weeks += 1.0,
        "advanced" => weeks -= 1.0,
        _ => {}
    }

    weeks *= time_commitment_factor(&profile.time_commitment);
    weeks *= pace_factor(profile.learning_pace.as_deref());

    weeks.ceil() as u32
}

fn time_commitment_factor(commitment: &str) -> f64 {
    TIME_COMMITMENT_FACTORS
        .iter()
        .find(|(label, _)| *label == commitment)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

fn pace_factor(pace: Option<&str>) -> f64 {
    match pace {
        Some("fast") => 0.8,
        Some("thorough") => 1.2,
        // "moderate" and anything unrecognized are neutral
        _ => 1.0,
    }
}

/// Applies the user's target timeline to the summed phase weeks, then
/// clamps into [MIN_TOTAL_WEEKS, MAX_TOTAL_WEEKS].
pub fn adjust_total_weeks(weeks: u32, career_timeline: Option<&str>) -> u32 {
    let adjusted = match career_timeline {
        // Accelerated
        Some("6months") => (weeks as f64 * 0.75).ceil() as u32,
        // Relaxed pace
        Some("5years") => (weeks as f64 * 1.2).ceil() as u32,
        _ => weeks,
    };

    adjusted.clamp(MIN_TOTAL_WEEKS, MAX_TOTAL_WEEKS)
}

/// Formats a week count for display: "14 weeks", "5 months (18 weeks)",
/// "1.3 years (16 months)".
pub fn format_duration(weeks: u32) -> String {
    let months = weeks.div_ceil(4);
    if months <= 3 {
        format!("{weeks} weeks")
    } else if months < 12 {
        format!("{months} months ({weeks} weeks)")
    } else {
        format!("{:.1} years ({months} months)", months as f64 / 12.0)
    }
}
