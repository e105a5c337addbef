use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved career plan: a generated roadmap plus the user's progress through
/// its milestones. The roadmap document is stored as JSONB verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub career_path: String,
    pub roadmap: Value,
    pub completed_milestones: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanRow {
    /// Number of milestones in the stored roadmap document.
    pub fn total_milestones(&self) -> usize {
        self.roadmap
            .get("milestones")
            .and_then(Value::as_array)
            .map(|m| m.len())
            .unwrap_or(0)
    }

    /// Completed-milestone percentage, rounded to the nearest integer.
    pub fn progress_percent(&self) -> u32 {
        let total = self.total_milestones();
        if total == 0 {
            return 0;
        }
        let done = self.completed_milestones.len().min(total);
        ((done as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_plan(roadmap: Value, completed: Vec<i32>) -> PlanRow {
        PlanRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Test plan".to_string(),
            career_path: "Data Scientist".to_string(),
            roadmap,
            completed_milestones: completed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_progress_counts_milestones() {
        let roadmap = json!({ "milestones": [{"order": 1}, {"order": 2}, {"order": 3}, {"order": 4}] });
        let plan = make_plan(roadmap, vec![1, 2]);
        assert_eq!(plan.total_milestones(), 4);
        assert_eq!(plan.progress_percent(), 50);
    }

    #[test]
    fn test_progress_zero_when_roadmap_has_no_milestones() {
        let plan = make_plan(json!({}), vec![1]);
        assert_eq!(plan.progress_percent(), 0);
    }

    #[test]
    fn test_progress_caps_at_100() {
        let roadmap = json!({ "milestones": [{"order": 1}] });
        // More completions recorded than milestones — stale client state
        let plan = make_plan(roadmap, vec![1, 2, 3]);
        assert_eq!(plan.progress_percent(), 100);
    }
}
