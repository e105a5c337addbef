//! Resource lookup for roadmap milestones.
//!
//! A milestone's resource list combines career-supplied learning resources
//! (first, capped at 2) with one canned resource per skill from a small
//! static table, capped at 3 total.

use crate::models::career::{CareerPath, LearningResource};

const MAX_RESOURCES_PER_MILESTONE: usize = 3;
const MAX_CAREER_RESOURCES: usize = 2;

/// Builds the resource list for a skill-group milestone.
pub fn resources_for_skill_group(skills: &[String], career: &CareerPath) -> Vec<LearningResource> {
    let mut resources: Vec<LearningResource> = career
        .resources()
        .iter()
        .take(MAX_CAREER_RESOURCES)
        .cloned()
        .collect();

    for skill in skills {
        if let Some(resource) = canned_resource(skill) {
            resources.push(resource);
        }
    }

    resources.truncate(MAX_RESOURCES_PER_MILESTONE);
    resources
}

/// Canned resource for a well-known skill. Keyed by exact skill name;
/// unknown skills contribute nothing.
fn canned_resource(skill: &str) -> Option<LearningResource> {
    let (title, resource_type, url) = match skill {
        "React" => (
            "React Official Documentation",
            "Documentation",
            Some("https://react.dev"),
        ),
        "Python" => (
            "Python for Everybody",
            "Coursera",
            Some("https://www.coursera.org/specializations/python"),
        ),
        "Node.js" => ("Node.js Complete Guide", "Udemy", None),
        "SQL" => ("SQL for Data Science", "Coursera", None),
        "Machine Learning" => (
            "Andrew Ng ML Course",
            "Coursera",
            Some("https://www.coursera.org/learn/machine-learning"),
        ),
        "Docker" => ("Docker Mastery", "Udemy", None),
        "AWS" => (
            "AWS Certified Solutions Architect",
            "Certification",
            Some("https://aws.amazon.com/certification"),
        ),
        "Figma" => ("Figma Tutorial for Beginners", "YouTube", None),
        _ => return None,
    };

    Some(LearningResource::new(title, resource_type, url))
}
