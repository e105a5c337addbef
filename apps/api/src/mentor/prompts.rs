// All LLM prompt constants for the Mentor module.
// Every call goes through llm_client; prompts here are the only coupling
// to the provider's behavior.

/// System prompt for the career-mentor chat.
pub const MENTOR_SYSTEM: &str = "You are an expert career counselor and advisor \
    for a career-guidance platform. Provide personalized career guidance based \
    on the user's skills, interests, and goals; suggest specific learning paths \
    and resources; offer insights on industry trends and job market demand; and \
    help users identify skill gaps and create action plans. Be encouraging, \
    professional, and actionable. Keep responses concise (2-3 paragraphs max), \
    practical, and tailored to the user's context.";

/// System prompt for startup-idea generation — enforces JSON-only output.
pub const STARTUP_IDEAS_SYSTEM: &str = "You are a pragmatic startup mentor and \
    product strategist generating realistic, skill-aligned startup ideas for \
    students, freshers, and early-stage founders. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Startup-ideas prompt template. Replace `{skills}`, `{goals}`,
/// `{experience_level}`, `{preferred_domains}`, `{time_commitment}`.
pub const STARTUP_IDEAS_PROMPT_TEMPLATE: &str = r#"Generate 2-3 startup ideas for this founder profile, ranked by skill alignment and feasibility.

FOUNDER PROFILE:
- Skills: {skills}
- Career goals: {goals}
- Experience level: {experience_level}
- Preferred domains: {preferred_domains}
- Weekly time available: {time_commitment}

Work through, in order:
1. Founder-skill fit: identify core strengths, technical vs non-technical bias, and the startup type that fits (tech product, service, content).
2. Problem identification: each idea must target a real, common, painful, well-defined problem.
3. Validation: every idea must pass "can this founder realistically build an MVP in 4-6 weeks?"

Return a JSON object with this EXACT schema (no extra fields):
{
  "analysis": {
    "founder_type": "Technical | Creative | Business | Hybrid",
    "core_strengths": ["strength"],
    "recommended_model": "SaaS | Agency | D2C | Content"
  },
  "ideas": [
    {
      "title": "Working title",
      "tagline": "Short, catchy description",
      "problem": "Clear problem statement",
      "solution": "Clear description of the product or service",
      "target_users": ["group"],
      "core_features": ["feature"],
      "why_fits_user": "Alignment with the founder's skills",
      "mvp_scope": "What to build in the first 4-6 weeks",
      "tech_stack": ["tool or language"],
      "monetization": {
        "model": "Subscription | Freemium | One-time | Ads",
        "explanation": "How it makes money"
      },
      "validation_steps": ["step"],
      "learning_value": "Skills the founder gains even if it fails"
    }
  ]
}

Quality rules: no billion-dollar fantasies, no investor jargon, no vague AI buzzwords. Founder-buildable ideas with clear execution logic only."#;

/// System prompt for free-text skill analysis — enforces JSON-only output.
pub const SKILL_ANALYSIS_SYSTEM: &str = "You are a career-skills analyst. \
    Extract and categorize skills from free-text user input. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Skill-analysis prompt template. Replace `{skills_text}`.
pub const SKILL_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following skills input from a user.

User input: "{skills_text}"

Return a JSON object with this EXACT schema (no extra fields):
{
  "extracted_skills": ["clean, standardized skill names mentioned in the input"],
  "categories": {
    "technical": ["skill"],
    "soft": ["skill"],
    "domain": ["skill"]
  },
  "suggested_skills": ["3-5 related skills they might also have or should learn"],
  "strength_score": 7,
  "recommendations": "Personalized advice for improvement",
  "related_roles": ["3-5 job roles that match these skills"]
}

strength_score is an integer from 1 to 10 rating the overall skill profile."#;

/// System prompt for resume review — enforces JSON-only output.
pub const RESUME_REVIEW_SYSTEM: &str = "You are an expert ATS (Applicant Tracking \
    System) and career coach. Analyze resumes strictly and professionally. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume-review prompt template. Replace `{resume_text}`, `{jd_clause}`
/// (empty or " against the job description provided"), and `{jd_section}`
/// (empty or a "JOB DESCRIPTION:" block).
pub const RESUME_REVIEW_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text{jd_clause}.

RESUME TEXT:
"{resume_text}"
{jd_section}
Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_score": 72,
  "summary": "Professional summary of the resume's quality",
  "metrics": {
    "impact": 70,
    "keywords": 65,
    "formatting": 80,
    "brevity": 75
  },
  "key_strengths": ["strength"],
  "critical_issues": ["issue"],
  "missing_keywords": ["keyword"],
  "suggested_rewrites": [
    {
      "original": "Weak bullet point found in the text",
      "improved": "Stronger, metric-driven version of that bullet point",
      "reason": "Why the change was made"
    }
  ]
}

All metric values are integers from 0 to 100: impact scores use of numbers and
results, keywords scores relevant hard skills, formatting scores structure and
clarity, brevity scores concision."#;
