//! Career match scoring — weighted multi-factor fit between a user profile
//! and a catalog entry.
//!
//! Pure and total: any syntactically valid input produces a score. Missing
//! catalog data (no education requirement, empty skill list) resolves to a
//! score-reducing default, never an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::education::EducationLevel;
use crate::matching::weights::MatchWeights;
use crate::models::career::CareerPath;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The slice of a user profile the matcher scores against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchProfile {
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Per-factor scores, each 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub education_score: f64,
    pub field_score: f64,
    pub skills_score: f64,
    pub interests_score: f64,
}

/// Full match report for one career.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub career: CareerPath,
    /// Weighted composite, rounded to an integer in 0–100.
    pub score: u32,
    pub breakdown: MatchBreakdown,
    /// Required skills the user already has, in catalog order and casing.
    pub matching_skills: Vec<String>,
    /// Required skills the user still needs, in catalog order and casing.
    pub missing_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores one career against one profile.
pub fn calculate_career_match(
    profile: &MatchProfile,
    career: &CareerPath,
    starting_fresh: bool,
) -> MatchResult {
    let weights = MatchWeights::for_mode(starting_fresh);

    let education_score = score_education(profile, career);
    let field_score = score_field(profile, career);

    let (matching_skills, missing_skills) =
        partition_skills(&profile.skills, &career.required_skills);
    let skills_score = ratio_score(matching_skills.len(), career.required_skills.len());

    let interests_score = score_interests(profile, career);

    let total = education_score * weights.education
        + field_score * weights.field
        + skills_score * weights.skills
        + interests_score * weights.interests;

    MatchResult {
        career: career.clone(),
        // Rounds half away from zero; factors and weights keep the sum in [0, 100]
        score: total.round() as u32,
        breakdown: MatchBreakdown {
            education_score,
            field_score,
            skills_score,
            interests_score,
        },
        matching_skills,
        missing_skills,
    }
}

/// Scores every catalog entry, sorts descending by score, and keeps the top
/// `top_n`. The sort is stable, so equal scores preserve catalog order.
pub fn rank_matches(
    profile: &MatchProfile,
    catalog: &[CareerPath],
    starting_fresh: bool,
    top_n: usize,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|career| calculate_career_match(profile, career, starting_fresh))
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_n);
    results
}

/// Splits a career's required skills into (has, needs) for the given user
/// skills. Comparison is case-insensitive exact match; output preserves the
/// catalog's order and casing so the two halves reconstruct the requirement
/// list exactly.
pub fn partition_skills(
    user_skills: &[String],
    required_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    let user_set: HashSet<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    required_skills
        .iter()
        .cloned()
        .partition(|skill| user_set.contains(&skill.to_lowercase()))
}

// ────────────────────────────────────────────────────────────────────────────
// Per-factor rules
// ────────────────────────────────────────────────────────────────────────────

fn score_education(profile: &MatchProfile, career: &CareerPath) -> f64 {
    let user = EducationLevel::parse(&profile.education_level);
    // Missing requirement defaults to the least demanding level
    let required = career
        .required_education
        .as_ref()
        .map(|e| EducationLevel::parse(&e.level))
        .unwrap_or_default();

    if user >= required {
        100.0
    } else if user.ordinal() + 1 == required.ordinal() {
        // Exactly one level below
        50.0
    } else {
        0.0
    }
}

fn score_field(profile: &MatchProfile, career: &CareerPath) -> f64 {
    let user_field = profile.field_of_study.trim().to_lowercase();
    if user_field.is_empty() {
        return 0.0;
    }

    let matched = career.accepted_fields().iter().any(|field| {
        let field = field.to_lowercase();
        user_field.contains(&field) || field.contains(&user_field)
    });

    if matched {
        100.0
    } else {
        // Partial credit for having declared a field at all
        20.0
    }
}

fn score_interests(profile: &MatchProfile, career: &CareerPath) -> f64 {
    let user_interests: HashSet<String> =
        profile.interests.iter().map(|i| i.to_lowercase()).collect();
    let matched = career
        .related_interests
        .iter()
        .filter(|tag| user_interests.contains(&tag.to_lowercase()))
        .count();
    ratio_score(matched, career.related_interests.len())
}

/// matched/total × 100. An empty requirement list scores 0, not 100 — no
/// data earns no credit.
fn ratio_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (matched as f64 / total as f64) * 100.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::RequiredEducation;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_career(
        title: &str,
        education: Option<(&str, Vec<&str>)>,
        skills: Vec<&str>,
        interests: Vec<&str>,
    ) -> CareerPath {
        CareerPath {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category: "Technology".to_string(),
            description: String::new(),
            demand: "High".to_string(),
            avg_salary: "$90k-$160k".to_string(),
            growth_outlook: "+20%".to_string(),
            required_education: education.map(|(level, fields)| {
                Json(RequiredEducation {
                    level: level.to_string(),
                    fields: fields.into_iter().map(str::to_string).collect(),
                })
            }),
            required_skills: skills.into_iter().map(str::to_string).collect(),
            related_interests: interests.into_iter().map(str::to_string).collect(),
            learning_resources: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_profile(
        education: &str,
        field: &str,
        skills: Vec<&str>,
        interests: Vec<&str>,
    ) -> MatchProfile {
        MatchProfile {
            education_level: education.to_string(),
            field_of_study: field.to_string(),
            skills: skills.into_iter().map(str::to_string).collect(),
            interests: interests.into_iter().map(str::to_string).collect(),
        }
    }

    fn data_science_career() -> CareerPath {
        make_career(
            "Data Scientist",
            Some(("Bachelor's", vec!["Computer Science"])),
            vec!["Python", "SQL", "Machine Learning"],
            vec!["Data", "AI"],
        )
    }

    fn data_science_profile() -> MatchProfile {
        make_profile(
            "Bachelor's",
            "Computer Science",
            vec!["python", "sql"],
            vec!["data"],
        )
    }

    #[test]
    fn test_standard_weighting_reference_scenario() {
        let result = calculate_career_match(&data_science_profile(), &data_science_career(), false);

        assert_eq!(result.breakdown.education_score, 100.0);
        assert_eq!(result.breakdown.field_score, 100.0);
        assert!(
            (result.breakdown.skills_score - 200.0 / 3.0).abs() < 1e-9,
            "skills score was {}",
            result.breakdown.skills_score
        );
        assert_eq!(result.breakdown.interests_score, 50.0);
        // 25 + 20 + 20 + 12.5 = 77.5 → rounds half away from zero
        assert_eq!(result.score, 78);
    }

    #[test]
    fn test_fresh_start_weighting_reference_scenario() {
        let result = calculate_career_match(&data_science_profile(), &data_science_career(), true);
        // 100*0.25 + 100*0.25 + skills*0.0 + 50*0.50 = 75
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_fresh_start_skills_score_is_inert() {
        let career = data_science_career();
        let with_skills = make_profile("Bachelor's", "Computer Science", vec!["python", "sql"], vec!["data"]);
        let without_skills = make_profile("Bachelor's", "Computer Science", vec![], vec!["data"]);

        let a = calculate_career_match(&with_skills, &career, true);
        let b = calculate_career_match(&without_skills, &career, true);

        assert_ne!(a.breakdown.skills_score, b.breakdown.skills_score);
        assert_eq!(a.score, b.score, "skills must not move a fresh-start score");
    }

    #[test]
    fn test_score_bounded_and_integral() {
        let perfect = make_profile(
            "PhD",
            "Computer Science",
            vec!["Python", "SQL", "Machine Learning"],
            vec!["Data", "AI"],
        );
        let empty = MatchProfile::default();
        let career = data_science_career();

        assert_eq!(calculate_career_match(&perfect, &career, false).score, 100);
        assert!(calculate_career_match(&empty, &career, false).score <= 100);
    }

    #[test]
    fn test_no_required_skills_scores_zero() {
        let career = make_career("Generalist", None, vec![], vec!["Business"]);
        let profile = make_profile("Bachelor's", "", vec!["python"], vec![]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.skills_score, 0.0, "no data, no credit");
    }

    #[test]
    fn test_no_related_interests_scores_zero() {
        let career = make_career("Generalist", None, vec!["Python"], vec![]);
        let profile = make_profile("", "", vec![], vec!["data"]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.interests_score, 0.0);
    }

    #[test]
    fn test_skill_partition_reconstructs_requirements() {
        let career = data_science_career();
        let result = calculate_career_match(&data_science_profile(), &career, false);

        let mut reunion = result.matching_skills.clone();
        reunion.extend(result.missing_skills.clone());
        reunion.sort();
        let mut required = career.required_skills.clone();
        required.sort();
        assert_eq!(reunion, required, "union must reconstruct the requirement list");

        for skill in &result.matching_skills {
            assert!(
                !result.missing_skills.contains(skill),
                "{skill} appears in both halves"
            );
        }
    }

    #[test]
    fn test_skill_match_is_case_insensitive_exact() {
        let career = make_career("Dev", None, vec!["Node.js", "React"], vec![]);
        let profile = make_profile("", "", vec!["node.js", "reac"], vec![]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.matching_skills, vec!["Node.js"]);
        assert_eq!(result.missing_skills, vec!["React"], "no fuzzy matching");
    }

    #[test]
    fn test_education_one_level_below_gets_half_credit() {
        let career = make_career("Researcher", Some(("Master's", vec![])), vec![], vec![]);
        let one_below = make_profile("Bachelor's", "", vec![], vec![]);
        let two_below = make_profile("Associate", "", vec![], vec![]);

        let a = calculate_career_match(&one_below, &career, false);
        let b = calculate_career_match(&two_below, &career, false);
        assert_eq!(a.breakdown.education_score, 50.0);
        assert_eq!(b.breakdown.education_score, 0.0);
    }

    #[test]
    fn test_missing_education_requirement_always_satisfied() {
        let career = make_career("Open Role", None, vec![], vec![]);
        let profile = MatchProfile::default();
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.education_score, 100.0);
    }

    #[test]
    fn test_unrecognized_required_level_always_satisfied() {
        let career = make_career("Odd Role", Some(("apprenticeship", vec![])), vec![], vec![]);
        let profile = make_profile("high school", "", vec![], vec![]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.education_score, 100.0);
    }

    #[test]
    fn test_field_substring_matches_either_direction() {
        let career = make_career(
            "Analyst",
            Some(("Bachelor's", vec!["Computer Science"])),
            vec![],
            vec![],
        );
        let contains = make_profile("Bachelor's", "BSc Computer Science and Maths", vec![], vec![]);
        let contained = make_profile("Bachelor's", "computer", vec![], vec![]);

        assert_eq!(
            calculate_career_match(&contains, &career, false).breakdown.field_score,
            100.0
        );
        assert_eq!(
            calculate_career_match(&contained, &career, false).breakdown.field_score,
            100.0
        );
    }

    #[test]
    fn test_unrelated_field_gets_partial_credit() {
        let career = make_career(
            "Analyst",
            Some(("Bachelor's", vec!["Computer Science"])),
            vec![],
            vec![],
        );
        let profile = make_profile("Bachelor's", "History", vec![], vec![]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.field_score, 20.0);
    }

    #[test]
    fn test_empty_field_gets_no_credit() {
        let career = make_career(
            "Analyst",
            Some(("Bachelor's", vec!["Computer Science"])),
            vec![],
            vec![],
        );
        let profile = make_profile("Bachelor's", "  ", vec![], vec![]);
        let result = calculate_career_match(&profile, &career, false);
        assert_eq!(result.breakdown.field_score, 0.0);
    }

    #[test]
    fn test_rank_matches_sorts_descending_and_truncates() {
        let strong = data_science_career();
        let weak = make_career("Telemarketer", Some(("PhD", vec![])), vec!["Cold Calling"], vec![]);
        let catalog = vec![weak.clone(), strong.clone(), weak.clone(), weak];

        let ranked = rank_matches(&data_science_profile(), &catalog, false, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].career.title, "Data Scientist");
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[1].score >= ranked[2].score);
    }

    #[test]
    fn test_rank_matches_tie_break_preserves_catalog_order() {
        let a = make_career("First", None, vec!["Python"], vec![]);
        let b = make_career("Second", None, vec!["Python"], vec![]);
        let catalog = vec![a, b];
        let profile = make_profile("Bachelor's", "", vec!["python"], vec![]);

        let ranked = rank_matches(&profile, &catalog, false, 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].career.title, "First", "stable sort keeps catalog order");
        assert_eq!(ranked[1].career.title, "Second");
    }
}
