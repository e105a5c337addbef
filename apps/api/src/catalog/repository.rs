//! Career catalog store.
//!
//! The matcher and roadmap generator never touch storage — handlers read
//! the catalog through `CareerRepository`, carried in `AppState` as
//! `Arc<dyn CareerRepository>` so tests can swap the backend.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::{CareerPath, LearningResource, RequiredEducation};

/// Write model for catalog mutations (admin CRUD).
#[derive(Debug, Clone, Deserialize)]
pub struct NewCareerPath {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub demand: String,
    #[serde(default)]
    pub avg_salary: String,
    #[serde(default)]
    pub growth_outlook: String,
    #[serde(default)]
    pub required_education: Option<RequiredEducation>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub related_interests: Vec<String>,
    #[serde(default)]
    pub learning_resources: Option<Vec<LearningResource>>,
}

#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// Full catalog in stable (insertion) order.
    async fn get_all(&self) -> Result<Vec<CareerPath>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<CareerPath>, AppError>;
    async fn create(&self, new: NewCareerPath) -> Result<CareerPath, AppError>;
    async fn update(&self, id: Uuid, changes: NewCareerPath) -> Result<Option<CareerPath>, AppError>;
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

/// PostgreSQL-backed catalog store.
pub struct PgCareerRepository {
    pool: PgPool,
}

impl PgCareerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerRepository for PgCareerRepository {
    async fn get_all(&self) -> Result<Vec<CareerPath>, AppError> {
        let careers = sqlx::query_as::<_, CareerPath>(
            "SELECT * FROM career_paths ORDER BY created_at, title",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(careers)
    }

    async fn get(&self, id: Uuid) -> Result<Option<CareerPath>, AppError> {
        let career = sqlx::query_as::<_, CareerPath>("SELECT * FROM career_paths WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(career)
    }

    async fn create(&self, new: NewCareerPath) -> Result<CareerPath, AppError> {
        let career = sqlx::query_as::<_, CareerPath>(
            r#"
            INSERT INTO career_paths
                (id, title, category, description, demand, avg_salary, growth_outlook,
                 required_education, required_skills, related_interests, learning_resources)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.category)
        .bind(&new.description)
        .bind(&new.demand)
        .bind(&new.avg_salary)
        .bind(&new.growth_outlook)
        .bind(new.required_education.as_ref().map(Json))
        .bind(&new.required_skills)
        .bind(&new.related_interests)
        .bind(new.learning_resources.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;
        Ok(career)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: NewCareerPath,
    ) -> Result<Option<CareerPath>, AppError> {
        let career = sqlx::query_as::<_, CareerPath>(
            r#"
            UPDATE career_paths SET
                title = $2,
                category = $3,
                description = $4,
                demand = $5,
                avg_salary = $6,
                growth_outlook = $7,
                required_education = $8,
                required_skills = $9,
                related_interests = $10,
                learning_resources = $11,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.category)
        .bind(&changes.description)
        .bind(&changes.demand)
        .bind(&changes.avg_salary)
        .bind(&changes.growth_outlook)
        .bind(changes.required_education.as_ref().map(Json))
        .bind(&changes.required_skills)
        .bind(&changes.related_interests)
        .bind(changes.learning_resources.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await?;
        Ok(career)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM career_paths WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM career_paths")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
