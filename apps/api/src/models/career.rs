use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Education requirement attached to a catalog entry.
/// `level` is matched against the education ladder; `fields` are acceptable
/// study fields. Catalog entries created before these fields existed may
/// carry neither — the matcher treats absence as the least demanding value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredEducation {
    pub level: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

/// A learning resource suggested alongside a career or roadmap milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LearningResource {
    pub fn new(title: &str, resource_type: &str, url: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            resource_type: resource_type.to_string(),
            url: url.map(str::to_string),
        }
    }
}

/// A career catalog entry. Administrators create and edit these through the
/// catalog CRUD endpoints; the matcher only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPath {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub demand: String,
    pub avg_salary: String,
    pub growth_outlook: String,
    pub required_education: Option<Json<RequiredEducation>>,
    pub required_skills: Vec<String>,
    pub related_interests: Vec<String>,
    pub learning_resources: Option<Json<Vec<LearningResource>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CareerPath {
    /// Accepted study fields, empty when no education requirement is set.
    pub fn accepted_fields(&self) -> &[String] {
        self.required_education
            .as_ref()
            .map(|e| e.fields.as_slice())
            .unwrap_or(&[])
    }

    /// Career-supplied learning resources, empty when none are set.
    pub fn resources(&self) -> &[LearningResource] {
        self.learning_resources
            .as_ref()
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }
}
