//! Axum route handlers for the AI mentor: chat, startup ideas, skill
//! analysis, and resume review. All LLM calls go through `llm_client`.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::mentor::cache;
use crate::mentor::prompts::{
    MENTOR_SYSTEM, RESUME_REVIEW_PROMPT_TEMPLATE, RESUME_REVIEW_SYSTEM,
    SKILL_ANALYSIS_PROMPT_TEMPLATE, SKILL_ANALYSIS_SYSTEM, STARTUP_IDEAS_PROMPT_TEMPLATE,
    STARTUP_IDEAS_SYSTEM,
};
use crate::state::AppState;

/// Cached startup-idea generations live for a day.
const STARTUP_IDEAS_TTL_SECS: u64 = 24 * 60 * 60;
/// Character budgets for resume review prompts.
const RESUME_TEXT_LIMIT: usize = 4000;
const JOB_DESCRIPTION_LIMIT: usize = 2000;

// ────────────────────────────────────────────────────────────────────────────
// Chat
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

/// Optional profile context forwarded with a chat message.
#[derive(Debug, Default, Deserialize)]
pub struct ChatContext {
    pub name: Option<String>,
    pub goal: Option<String>,
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/v1/mentor/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let user_context = build_chat_context(request.context.as_ref());
    let prompt = format!("Context: {user_context}\n\n{}", request.message);

    let response = state
        .llm
        .call_text(&prompt, MENTOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("mentor chat failed: {e}")))?;

    Ok(Json(ChatResponse { response }))
}

/// Renders the profile context line sent alongside a chat message.
fn build_chat_context(context: Option<&ChatContext>) -> String {
    let Some(context) = context else {
        return "Guest user".to_string();
    };
    let Some(name) = context.name.as_deref().filter(|n| !n.trim().is_empty()) else {
        return "Guest user".to_string();
    };

    let mut line = format!("User: {name}");
    if let Some(goal) = context.goal.as_deref().filter(|g| !g.trim().is_empty()) {
        line.push_str(&format!(", Career Goal: {goal}"));
    }
    if let Some(skills) = context.skills.as_deref().filter(|s| !s.trim().is_empty()) {
        line.push_str(&format!(", Skills: {skills}"));
    }
    line
}

// ────────────────────────────────────────────────────────────────────────────
// Startup ideas
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Hash, Deserialize)]
pub struct StartupIdeasRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub experience_level: String,
    pub preferred_domains: Vec<String>,
    #[serde(default)]
    pub time_commitment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderAnalysis {
    pub founder_type: String,
    pub core_strengths: Vec<String>,
    pub recommended_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monetization {
    pub model: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupIdea {
    pub title: String,
    pub tagline: String,
    pub problem: String,
    pub solution: String,
    pub target_users: Vec<String>,
    pub core_features: Vec<String>,
    pub why_fits_user: String,
    pub mvp_scope: String,
    pub tech_stack: Vec<String>,
    pub monetization: Monetization,
    pub validation_steps: Vec<String>,
    pub learning_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupIdeasResponse {
    pub analysis: FounderAnalysis,
    pub ideas: Vec<StartupIdea>,
}

/// POST /api/v1/mentor/startup-ideas
///
/// Generations are cached by profile — identical requests within the TTL
/// skip the LLM round trip.
pub async fn handle_startup_ideas(
    State(state): State<AppState>,
    Json(request): Json<StartupIdeasRequest>,
) -> Result<Json<StartupIdeasResponse>, AppError> {
    if request.skills.is_empty() || request.preferred_domains.is_empty() {
        return Err(AppError::Validation(
            "skills and preferred_domains are required".to_string(),
        ));
    }

    let cache_key = startup_ideas_cache_key(&request);
    if let Some(cached) = cache::get_json::<StartupIdeasResponse>(&state.redis, &cache_key).await {
        return Ok(Json(cached));
    }

    let prompt = STARTUP_IDEAS_PROMPT_TEMPLATE
        .replace("{skills}", &request.skills.join(", "))
        .replace("{goals}", request.goals.as_deref().unwrap_or("Entrepreneurship"))
        .replace("{experience_level}", &request.experience_level)
        .replace("{preferred_domains}", &request.preferred_domains.join(", "))
        .replace("{time_commitment}", &request.time_commitment);

    let response: StartupIdeasResponse = state
        .llm
        .call_json(&prompt, STARTUP_IDEAS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("startup idea generation failed: {e}")))?;

    cache::put_json(&state.redis, &cache_key, &response, STARTUP_IDEAS_TTL_SECS).await;

    Ok(Json(response))
}

fn startup_ideas_cache_key(request: &StartupIdeasRequest) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    request.hash(&mut hasher);
    format!("mentor:startup-ideas:{:016x}", hasher.finish())
}

// ────────────────────────────────────────────────────────────────────────────
// Skill analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillAnalysisRequest {
    pub skills_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub domain: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub extracted_skills: Vec<String>,
    pub categories: SkillCategories,
    pub suggested_skills: Vec<String>,
    /// 1–10 rating of the overall skill profile.
    pub strength_score: u8,
    pub recommendations: String,
    pub related_roles: Vec<String>,
}

/// POST /api/v1/mentor/skill-analysis
pub async fn handle_skill_analysis(
    State(state): State<AppState>,
    Json(request): Json<SkillAnalysisRequest>,
) -> Result<Json<SkillAnalysis>, AppError> {
    if request.skills_text.trim().is_empty() {
        return Err(AppError::Validation("skills_text cannot be empty".to_string()));
    }

    let prompt = SKILL_ANALYSIS_PROMPT_TEMPLATE.replace("{skills_text}", &request.skills_text);

    let analysis: SkillAnalysis = state
        .llm
        .call_json(&prompt, SKILL_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("skill analysis failed: {e}")))?;

    Ok(Json(analysis))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume review
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMetrics {
    pub impact: u32,
    pub keywords: u32,
    pub formatting: u32,
    pub brevity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRewrite {
    pub original: String,
    pub improved: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReview {
    pub overall_score: u32,
    pub summary: String,
    pub metrics: ResumeMetrics,
    pub key_strengths: Vec<String>,
    pub critical_issues: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_rewrites: Vec<SuggestedRewrite>,
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload: a `file` part carrying the resume PDF, plus an optional
/// `job_description` text part. The PDF is analyzed transiently and never
/// persisted.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeReview>, AppError> {
    let mut pdf_bytes: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("file") => {
                pdf_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read uploaded file: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read job_description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let resume_text = pdf_extract::extract_text_from_mem(&pdf_bytes).map_err(|e| {
        AppError::UnprocessableEntity(format!("could not extract text from PDF: {e}"))
    })?;
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }

    let (jd_clause, jd_section) = match job_description.as_deref().filter(|jd| !jd.trim().is_empty())
    {
        Some(jd) => (
            " against the job description provided",
            format!(
                "\nJOB DESCRIPTION:\n\"{}\"\n",
                truncate_chars(jd, JOB_DESCRIPTION_LIMIT)
            ),
        ),
        None => ("", String::new()),
    };

    let prompt = RESUME_REVIEW_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(&resume_text, RESUME_TEXT_LIMIT))
        .replace("{jd_clause}", jd_clause)
        .replace("{jd_section}", &jd_section);

    let review: ResumeReview = state
        .llm
        .call_json(&prompt, RESUME_REVIEW_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("resume analysis failed: {e}")))?;

    Ok(Json(review))
}

/// Truncates to at most `max` characters without splitting a codepoint.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(skills: &[&str], domains: &[&str]) -> StartupIdeasRequest {
        StartupIdeasRequest {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            goals: None,
            experience_level: "beginner".to_string(),
            preferred_domains: domains.iter().map(|d| d.to_string()).collect(),
            time_commitment: "5–10 hours".to_string(),
        }
    }

    #[test]
    fn test_chat_context_without_profile_is_guest() {
        assert_eq!(build_chat_context(None), "Guest user");
        assert_eq!(build_chat_context(Some(&ChatContext::default())), "Guest user");
    }

    #[test]
    fn test_chat_context_includes_supplied_fields_only() {
        let context = ChatContext {
            name: Some("Priya".to_string()),
            goal: Some("Data Scientist".to_string()),
            skills: None,
        };
        assert_eq!(
            build_chat_context(Some(&context)),
            "User: Priya, Career Goal: Data Scientist"
        );
    }

    #[test]
    fn test_chat_context_full_profile() {
        let context = ChatContext {
            name: Some("Priya".to_string()),
            goal: Some("Data Scientist".to_string()),
            skills: Some("python, sql".to_string()),
        };
        assert_eq!(
            build_chat_context(Some(&context)),
            "User: Priya, Career Goal: Data Scientist, Skills: python, sql"
        );
    }

    #[test]
    fn test_cache_key_is_stable_for_identical_requests() {
        let a = make_request(&["python"], &["edtech"]);
        let b = make_request(&["python"], &["edtech"]);
        assert_eq!(startup_ideas_cache_key(&a), startup_ideas_cache_key(&b));
    }

    #[test]
    fn test_cache_key_differs_across_profiles() {
        let a = make_request(&["python"], &["edtech"]);
        let b = make_request(&["rust"], &["edtech"]);
        assert_ne!(startup_ideas_cache_key(&a), startup_ideas_cache_key(&b));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multibyte input must not split a codepoint
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_startup_ideas_response_deserializes_from_schema_shape() {
        let json = r#"{
            "analysis": {
                "founder_type": "Technical",
                "core_strengths": ["Backend development"],
                "recommended_model": "SaaS"
            },
            "ideas": [
                {
                    "title": "StudyLoop",
                    "tagline": "Spaced-repetition for lecture notes",
                    "problem": "Students forget lecture content within days",
                    "solution": "Auto-generates review schedules from uploaded notes",
                    "target_users": ["University students"],
                    "core_features": ["Note upload", "Review scheduler"],
                    "why_fits_user": "Leverages existing Python skills",
                    "mvp_scope": "Single-course scheduler with manual uploads",
                    "tech_stack": ["Python", "PostgreSQL"],
                    "monetization": {
                        "model": "Freemium",
                        "explanation": "Free tier with paid multi-course support"
                    },
                    "validation_steps": ["Interview 10 students"],
                    "learning_value": "Full product lifecycle experience"
                }
            ]
        }"#;

        let response: StartupIdeasResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.analysis.founder_type, "Technical");
        assert_eq!(response.ideas.len(), 1);
        assert_eq!(response.ideas[0].monetization.model, "Freemium");
    }

    #[test]
    fn test_skill_analysis_deserializes_from_schema_shape() {
        let json = r#"{
            "extracted_skills": ["Python", "SQL"],
            "categories": {
                "technical": ["Python", "SQL"],
                "soft": ["Communication"],
                "domain": ["Finance"]
            },
            "suggested_skills": ["Pandas"],
            "strength_score": 6,
            "recommendations": "Deepen data tooling",
            "related_roles": ["Data Analyst"]
        }"#;

        let analysis: SkillAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.strength_score, 6);
        assert_eq!(analysis.categories.technical.len(), 2);
    }

    #[test]
    fn test_resume_review_deserializes_from_schema_shape() {
        let json = r#"{
            "overall_score": 72,
            "summary": "Solid but unquantified",
            "metrics": { "impact": 60, "keywords": 70, "formatting": 85, "brevity": 75 },
            "key_strengths": ["Clear structure"],
            "critical_issues": ["No metrics in bullets"],
            "missing_keywords": ["Kubernetes"],
            "suggested_rewrites": [
                {
                    "original": "Worked on backend services",
                    "improved": "Built 3 backend services handling 10k req/s",
                    "reason": "Adds scope and scale"
                }
            ]
        }"#;

        let review: ResumeReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.overall_score, 72);
        assert_eq!(review.metrics.formatting, 85);
        assert_eq!(review.suggested_rewrites.len(), 1);
    }
}
