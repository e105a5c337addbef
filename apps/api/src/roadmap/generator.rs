//! Roadmap generation — turns a target career's skill gap into an ordered,
//! time-boxed learning plan.
//!
//! Pure but for the injected [`Clock`]; phases appear in a fixed order and
//! are included only when applicable. Empty inputs still produce a valid
//! (smaller) roadmap.

use serde::{Deserialize, Serialize};

use crate::models::career::{CareerPath, LearningResource};
use crate::roadmap::clock::Clock;
use crate::roadmap::duration::{adjust_total_weeks, format_duration, skill_group_weeks};
use crate::roadmap::resources::resources_for_skill_group;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The slice of a user profile the roadmap generator reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapProfile {
    #[serde(default)]
    pub experience_level: String,
    /// Skills the user already has.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Weekly hours bucket, e.g. "5–10 hours".
    #[serde(default)]
    pub time_commitment: String,
    /// "fast" | "moderate" | "thorough"
    #[serde(default)]
    pub learning_pace: Option<String>,
    /// "6months" | "5years" — anything else leaves the total unadjusted.
    #[serde(default)]
    pub career_timeline: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// One phase of a generated roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display string, e.g. "4 weeks".
    pub duration: String,
    pub skills: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub completion_criteria: Vec<String>,
    /// 1-based position in the roadmap.
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub career_path: String,
    pub total_duration: String,
    pub estimated_months: u32,
    pub total_weeks: u32,
    pub milestones: Vec<Milestone>,
    pub estimated_placement_date: String,
    pub difficulty_level: DifficultyLevel,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Missing skills beyond this many spill into the Advanced Specialization
/// phase instead of getting their own core milestones.
const CORE_SKILL_LIMIT: usize = 6;
const FOUNDATION_WEEKS: u32 = 4;
const ADVANCED_WEEKS: u32 = 6;
const PROJECT_WEEKS: u32 = 4;
const INTERVIEW_WEEKS: u32 = 4;

/// Generates a phased learning roadmap from the user's skill gap for the
/// target career.
pub fn generate_roadmap(
    profile: &RoadmapProfile,
    target_career: &CareerPath,
    missing_skills: &[String],
    clock: &dyn Clock,
) -> Roadmap {
    let mut milestones: Vec<Milestone> = Vec::new();
    let mut total_weeks: u32 = 0;
    let mut order: u32 = 1;

    // Phase 1: Foundation — beginners and near-empty skill sets only
    if profile.experience_level == "beginner" || profile.skills.len() < 3 {
        milestones.push(foundation_milestone(order));
        total_weeks += FOUNDATION_WEEKS;
        order += 1;
    }

    // Phase 2: Core Skills — the first six missing skills, in pairs
    let core_skills = &missing_skills[..missing_skills.len().min(CORE_SKILL_LIMIT)];
    for (index, group) in core_skills.chunks(2).enumerate() {
        let weeks = skill_group_weeks(profile);
        milestones.push(skill_group_milestone(group, weeks, target_career, index, order));
        total_weeks += weeks;
        order += 1;
    }

    // Phase 3: Advanced Specialization — only when the gap runs deep
    if missing_skills.len() > CORE_SKILL_LIMIT {
        milestones.push(advanced_milestone(&missing_skills[CORE_SKILL_LIMIT..], order));
        total_weeks += ADVANCED_WEEKS;
        order += 1;
    }

    // Phase 4: Real-World Projects — always
    milestones.push(projects_milestone(order));
    total_weeks += PROJECT_WEEKS;
    order += 1;

    // Phase 5: Interview Preparation — always
    milestones.push(interview_milestone(order));
    total_weeks += INTERVIEW_WEEKS;

    let total_weeks = adjust_total_weeks(total_weeks, profile.career_timeline.as_deref());
    let estimated_months = total_weeks.div_ceil(4);

    let placement_date = clock.today() + chrono::Duration::days((total_weeks * 7) as i64);

    Roadmap {
        career_path: target_career.title.clone(),
        total_duration: format_duration(total_weeks),
        estimated_months,
        total_weeks,
        milestones,
        estimated_placement_date: placement_date.format("%B %-d, %Y").to_string(),
        difficulty_level: difficulty_level(profile, missing_skills.len()),
    }
}

fn difficulty_level(profile: &RoadmapProfile, missing_count: usize) -> DifficultyLevel {
    if profile.experience_level == "beginner" || missing_count > 8 {
        DifficultyLevel::Beginner
    } else if profile.experience_level == "advanced" && missing_count < 4 {
        DifficultyLevel::Advanced
    } else {
        DifficultyLevel::Intermediate
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Milestone templates
// ────────────────────────────────────────────────────────────────────────────

fn resource(title: &str, resource_type: &str, url: Option<&str>) -> LearningResource {
    LearningResource::new(title, resource_type, url)
}

fn foundation_milestone(order: u32) -> Milestone {
    Milestone {
        id: "foundation".to_string(),
        title: "Build Strong Foundation".to_string(),
        description: "Master the fundamentals and core concepts".to_string(),
        duration: format!("{FOUNDATION_WEEKS} weeks"),
        skills: vec![
            "Programming Basics".to_string(),
            "Problem Solving".to_string(),
            "Git Basics".to_string(),
        ],
        resources: vec![
            resource(
                "CS50 Introduction to Computer Science",
                "Free Course",
                Some("https://cs50.harvard.edu"),
            ),
            resource("FreeCodeCamp", "Free Platform", Some("https://www.freecodecamp.org")),
            resource(
                "Git & GitHub Crash Course",
                "YouTube",
                Some("https://www.youtube.com/watch?v=RGOj5yH7evk"),
            ),
        ],
        completion_criteria: vec![
            "Complete 20+ coding problems on LeetCode/HackerRank".to_string(),
            "Build 2 basic projects".to_string(),
            "Understand Git workflow and version control".to_string(),
        ],
        order,
    }
}

fn skill_group_milestone(
    group: &[String],
    weeks: u32,
    career: &CareerPath,
    index: usize,
    order: u32,
) -> Milestone {
    Milestone {
        id: format!("core-skills-{}", index + 1),
        title: format!("Master {}", group.join(" & ")),
        description: format!("Deep dive into {}", group.join(" and ")),
        duration: format!("{weeks} weeks"),
        skills: group.to_vec(),
        resources: resources_for_skill_group(group, career),
        completion_criteria: vec![
            format!("Complete comprehensive course on {}", group[0]),
            format!("Build 1-2 projects using {}", group.join(" and ")),
            "Pass skill assessment or complete certification".to_string(),
        ],
        order,
    }
}

fn advanced_milestone(skills: &[String], order: u32) -> Milestone {
    Milestone {
        id: "advanced-specialization".to_string(),
        title: "Advanced Specialization".to_string(),
        description: "Master advanced concepts and specialized skills".to_string(),
        duration: format!("{ADVANCED_WEEKS} weeks"),
        skills: skills.to_vec(),
        resources: vec![
            resource("Advanced course in your specialization", "Online Course", None),
            resource("Industry-specific certifications", "Certification", None),
            resource("Open source contributions", "Practical", None),
        ],
        completion_criteria: vec![
            "Complete advanced project showcasing expertise".to_string(),
            "Contribute to 2-3 open source projects".to_string(),
            "Build impressive portfolio piece".to_string(),
        ],
        order,
    }
}

fn projects_milestone(order: u32) -> Milestone {
    Milestone {
        id: "real-world-projects".to_string(),
        title: "Build Real-World Projects".to_string(),
        description: "Apply your skills to create portfolio-worthy projects".to_string(),
        duration: format!("{PROJECT_WEEKS} weeks"),
        skills: vec![
            "Full Stack Development".to_string(),
            "Project Management".to_string(),
            "Best Practices".to_string(),
        ],
        resources: vec![
            resource("Project ideas for your domain", "Guide", None),
            resource("GitHub for portfolio", "Platform", Some("https://github.com")),
            resource("Deploy on Vercel/Netlify", "Platform", None),
        ],
        completion_criteria: vec![
            "Complete 2-3 production-ready projects".to_string(),
            "Deploy projects with live demos".to_string(),
            "Write comprehensive documentation".to_string(),
            "Create professional GitHub profile".to_string(),
        ],
        order,
    }
}

fn interview_milestone(order: u32) -> Milestone {
    Milestone {
        id: "interview-prep".to_string(),
        title: "Interview Preparation".to_string(),
        description: "Prepare for technical interviews and job applications".to_string(),
        duration: format!("{INTERVIEW_WEEKS} weeks"),
        skills: vec![
            "DSA".to_string(),
            "System Design".to_string(),
            "Behavioral Interview".to_string(),
            "Resume Building".to_string(),
        ],
        resources: vec![
            resource("LeetCode Premium", "Platform", Some("https://leetcode.com")),
            resource(
                "System Design Primer",
                "GitHub",
                Some("https://github.com/donnemartin/system-design-primer"),
            ),
            resource("Pramp - Mock Interviews", "Platform", Some("https://www.pramp.com")),
            resource("Resume templates", "Resource", None),
        ],
        completion_criteria: vec![
            "Solve 100+ DSA problems (Easy: 40, Medium: 50, Hard: 10)".to_string(),
            "Complete 5+ mock interviews".to_string(),
            "Master 10+ system design patterns".to_string(),
            "Create ATS-friendly resume".to_string(),
            "Build LinkedIn profile".to_string(),
        ],
        order,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::clock::FixedClock;
    use crate::roadmap::duration::{MAX_TOTAL_WEEKS, MIN_TOTAL_WEEKS};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn make_career(title: &str) -> CareerPath {
        CareerPath {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category: "IT".to_string(),
            description: String::new(),
            demand: "High".to_string(),
            avg_salary: "$80k-$150k".to_string(),
            growth_outlook: "+22%".to_string(),
            required_education: None,
            required_skills: vec![],
            related_interests: vec![],
            learning_resources: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_profile(experience: &str, skills: &[&str]) -> RoadmapProfile {
        RoadmapProfile {
            experience_level: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            time_commitment: "10–20 hours".to_string(),
            learning_pace: None,
            career_timeline: None,
        }
    }

    fn missing(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn test_clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap())
    }

    fn assert_orders_contiguous(roadmap: &Roadmap) {
        for (i, milestone) in roadmap.milestones.iter().enumerate() {
            assert_eq!(
                milestone.order,
                i as u32 + 1,
                "milestone '{}' out of order",
                milestone.id
            );
        }
    }

    #[test]
    fn test_advanced_user_with_no_gap_gets_minimal_roadmap() {
        let profile = make_profile("advanced", &["Rust", "Go", "Kubernetes"]);
        let roadmap = generate_roadmap(&profile, &make_career("Platform Engineer"), &[], &test_clock());

        let ids: Vec<&str> = roadmap.milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["real-world-projects", "interview-prep"]);
        assert_orders_contiguous(&roadmap);
        assert_eq!(roadmap.difficulty_level, DifficultyLevel::Advanced);
        // 4 + 4 = 8 weeks, clamped up to the floor
        assert_eq!(roadmap.total_weeks, MIN_TOTAL_WEEKS);
    }

    #[test]
    fn test_beginner_with_deep_gap_gets_every_phase() {
        let profile = make_profile("beginner", &[]);
        let gap = missing(&["React", "Node.js", "SQL", "Docker", "AWS", "Python", "Kafka", "Redis"]);
        let roadmap = generate_roadmap(&profile, &make_career("Full Stack Developer"), &gap, &test_clock());

        let ids: Vec<&str> = roadmap.milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "foundation",
                "core-skills-1",
                "core-skills-2",
                "core-skills-3",
                "advanced-specialization",
                "real-world-projects",
                "interview-prep",
            ]
        );
        assert_orders_contiguous(&roadmap);
        assert_eq!(roadmap.difficulty_level, DifficultyLevel::Beginner);

        // Advanced phase covers exactly the skills beyond the first six
        let advanced = &roadmap.milestones[4];
        assert_eq!(advanced.skills, vec!["Kafka", "Redis"]);

        // Foundation 4 + three groups of (3+1) + advanced 6 + projects 4 + interview 4
        assert_eq!(roadmap.total_weeks, 30);
        assert_eq!(roadmap.estimated_months, 8);
        assert_eq!(roadmap.total_duration, "8 months (30 weeks)");
    }

    #[test]
    fn test_core_groups_pair_skills_with_odd_remainder() {
        let profile = make_profile("intermediate", &["HTML", "CSS", "JavaScript"]);
        let gap = missing(&["React", "TypeScript", "Next.js"]);
        let roadmap = generate_roadmap(&profile, &make_career("Frontend Developer"), &gap, &test_clock());

        let groups: Vec<&Milestone> = roadmap
            .milestones
            .iter()
            .filter(|m| m.id.starts_with("core-skills"))
            .collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Master React & TypeScript");
        assert_eq!(groups[1].title, "Master Next.js");
        assert_eq!(groups[1].skills, vec!["Next.js"]);
    }

    #[test]
    fn test_foundation_included_for_sparse_skill_set() {
        // Not a declared beginner, but fewer than three current skills
        let profile = make_profile("intermediate", &["Excel"]);
        let roadmap = generate_roadmap(&profile, &make_career("Data Analyst"), &[], &test_clock());
        assert_eq!(roadmap.milestones[0].id, "foundation");
    }

    #[test]
    fn test_no_advanced_phase_at_exactly_six_missing() {
        let profile = make_profile("intermediate", &["A", "B", "C"]);
        let gap = missing(&["S1", "S2", "S3", "S4", "S5", "S6"]);
        let roadmap = generate_roadmap(&profile, &make_career("Engineer"), &gap, &test_clock());
        assert!(
            !roadmap.milestones.iter().any(|m| m.id == "advanced-specialization"),
            "six missing skills fit in core groups"
        );
    }

    #[test]
    fn test_total_weeks_always_within_bounds() {
        let cases = [
            (make_profile("advanced", &["A", "B", "C"]), vec![]),
            (make_profile("beginner", &[]), missing(&["S1"; 12])),
            (
                RoadmapProfile {
                    career_timeline: Some("5years".to_string()),
                    ..make_profile("advanced", &["A", "B", "C"])
                },
                vec![],
            ),
            (
                RoadmapProfile {
                    career_timeline: Some("6months".to_string()),
                    ..make_profile("beginner", &[])
                },
                missing(&["S1"; 12]),
            ),
        ];

        for (profile, gap) in cases {
            let roadmap = generate_roadmap(&profile, &make_career("X"), &gap, &test_clock());
            assert!(
                (MIN_TOTAL_WEEKS..=MAX_TOTAL_WEEKS).contains(&roadmap.total_weeks),
                "total {} out of bounds",
                roadmap.total_weeks
            );
            assert_orders_contiguous(&roadmap);
        }
    }

    #[test]
    fn test_accelerated_timeline_never_longer_than_default() {
        let gap = missing(&["React", "Node.js", "SQL", "Docker", "AWS"]);
        let default_profile = make_profile("intermediate", &["HTML", "CSS", "JS"]);
        let accelerated = RoadmapProfile {
            career_timeline: Some("6months".to_string()),
            ..default_profile.clone()
        };

        let career = make_career("Full Stack Developer");
        let fast = generate_roadmap(&accelerated, &career, &gap, &test_clock());
        let slow = generate_roadmap(&default_profile, &career, &gap, &test_clock());
        assert!(fast.total_weeks <= slow.total_weeks);
    }

    #[test]
    fn test_placement_date_is_deterministic_under_fixed_clock() {
        let profile = make_profile("advanced", &["A", "B", "C"]);
        let roadmap = generate_roadmap(&profile, &make_career("X"), &[], &test_clock());
        // 12 weeks = 84 days from 2025-01-06
        assert_eq!(roadmap.estimated_placement_date, "March 31, 2025");
    }

    #[test]
    fn test_difficulty_beginner_when_gap_exceeds_eight() {
        let profile = make_profile("intermediate", &["A", "B", "C"]);
        let gap = missing(&["S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9"]);
        let roadmap = generate_roadmap(&profile, &make_career("X"), &gap, &test_clock());
        assert_eq!(roadmap.difficulty_level, DifficultyLevel::Beginner);
    }

    #[test]
    fn test_difficulty_intermediate_in_the_middle() {
        let profile = make_profile("intermediate", &["A", "B", "C"]);
        let gap = missing(&["S1", "S2", "S3", "S4", "S5"]);
        let roadmap = generate_roadmap(&profile, &make_career("X"), &gap, &test_clock());
        assert_eq!(roadmap.difficulty_level, DifficultyLevel::Intermediate);

        // Advanced experience but a wide gap is still intermediate
        let profile = make_profile("advanced", &["A", "B", "C"]);
        let roadmap = generate_roadmap(&profile, &make_career("X"), &gap, &test_clock());
        assert_eq!(roadmap.difficulty_level, DifficultyLevel::Intermediate);
    }

    #[test]
    fn test_skill_group_criteria_name_the_skills() {
        let profile = make_profile("intermediate", &["A", "B", "C"]);
        let gap = missing(&["Rust", "Go"]);
        let roadmap = generate_roadmap(&profile, &make_career("X"), &gap, &test_clock());

        let group = roadmap
            .milestones
            .iter()
            .find(|m| m.id == "core-skills-1")
            .expect("core group present");
        assert_eq!(group.completion_criteria[0], "Complete comprehensive course on Rust");
        assert_eq!(group.completion_criteria[1], "Build 1-2 projects using Rust and Go");
    }
}
