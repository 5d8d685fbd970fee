//! Plan and project-option generation: prompt assembly, strict parsing,
//! flagged fallbacks, and persistence of the results.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::exploration::prompts::{
    BUILDING_PLAN_PROMPT, BUILDING_PLAN_SYSTEM, LEARNING_PLAN_PROMPT, LEARNING_PLAN_SYSTEM,
    PROJECT_OPTIONS_PROMPT, PROJECT_OPTIONS_SYSTEM, SOCIAL_POST_PROMPT, SOCIAL_POST_SYSTEM,
};
use crate::llm_client::{AiContent, ContentSource, LlmClient};
use crate::models::profile::ProfileRow;
use crate::models::project::{BuildingPlanRow, LearningPlanRow, ProjectOptionRow};
use crate::models::versioned::write_versioned;

// ────────────────────────────────────────────────────────────────────────────
// Generated content shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedProject {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub icon_name: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOptionSet {
    pub projects: Vec<GeneratedProject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanWeek {
    pub week: u32,
    pub focus: String,
    pub resources: Vec<String>,
    pub deliverable: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPlan {
    pub overview: String,
    pub weeks: Vec<PlanWeek>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingPlan {
    pub cadence: String,
    pub channels: Vec<String>,
    pub post_ideas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub post: String,
    pub hashtags: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates project options tailored to the user's profile.
pub async fn generate_project_options(
    llm: &LlmClient,
    profile: &ProfileRow,
) -> Result<AiContent<ProjectOptionSet>, AppError> {
    let prompt = PROJECT_OPTIONS_PROMPT
        .replace("{current_role}", &profile.current_role)
        .replace("{experience}", &profile.experience)
        .replace("{background}", &profile.background)
        .replace("{ai_interest}", &profile.ai_interest)
        .replace("{goals}", &profile.goals.join(", "))
        .replace("{timeline}", &profile.timeline);

    llm.call_json_or(&prompt, PROJECT_OPTIONS_SYSTEM, fallback_project_options)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate project options: {e}")))
}

/// Generates a week-by-week learning plan for one project.
pub async fn generate_learning_plan(
    llm: &LlmClient,
    project: &ProjectOptionRow,
) -> Result<AiContent<LearningPlan>, AppError> {
    let prompt = LEARNING_PLAN_PROMPT
        .replace("{name}", &project.name)
        .replace("{description}", &project.description)
        .replace("{difficulty}", &project.difficulty)
        .replace("{duration}", &project.duration)
        .replace("{skills}", &project.skills.join(", "));

    llm.call_json_or(&prompt, LEARNING_PLAN_SYSTEM, || {
        fallback_learning_plan(&project.name)
    })
    .await
    .map_err(|e| AppError::Llm(format!("Failed to generate learning plan: {e}")))
}

/// Generates a building-in-public plan for one project.
pub async fn generate_building_plan(
    llm: &LlmClient,
    project: &ProjectOptionRow,
) -> Result<AiContent<BuildingPlan>, AppError> {
    let prompt = BUILDING_PLAN_PROMPT
        .replace("{name}", &project.name)
        .replace("{description}", &project.description)
        .replace("{skills}", &project.skills.join(", "));

    llm.call_json_or(&prompt, BUILDING_PLAN_SYSTEM, fallback_building_plan)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate building plan: {e}")))
}

/// Drafts a social post from a free-text progress update. Not persisted.
pub async fn generate_social_post(
    llm: &LlmClient,
    project_name: &str,
    update: &str,
) -> Result<AiContent<SocialPost>, AppError> {
    let prompt = SOCIAL_POST_PROMPT
        .replace("{name}", project_name)
        .replace("{update}", update);

    llm.call_json_or(&prompt, SOCIAL_POST_SYSTEM, || fallback_social_post(update))
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate social post: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

pub async fn insert_project_options(
    pool: &PgPool,
    user_id: Uuid,
    projects: &[GeneratedProject],
) -> Result<Vec<ProjectOptionRow>, AppError> {
    let mut rows = Vec::with_capacity(projects.len());
    for p in projects {
        let row = sqlx::query_as::<_, ProjectOptionRow>(
            r#"
            INSERT INTO project_options
                (id, user_id, name, description, difficulty, duration, skills, icon_name, reasoning)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&p.name)
        .bind(&p.description)
        .bind(&p.difficulty)
        .bind(&p.duration)
        .bind(&p.skills)
        .bind(&p.icon_name)
        .bind(&p.reasoning)
        .fetch_one(pool)
        .await?;
        rows.push(row);
    }
    Ok(rows)
}

pub async fn insert_learning_plan(
    pool: &PgPool,
    user_id: Uuid,
    project_id: Uuid,
    plan: &AiContent<LearningPlan>,
) -> Result<LearningPlanRow, AppError> {
    Ok(sqlx::query_as::<_, LearningPlanRow>(
        r#"
        INSERT INTO learning_plans (id, user_id, project_id, plan, source, created_at)
        VALUES ($1, $2, $3, $4, $5, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(project_id)
    .bind(write_versioned(&plan.content))
    .bind(source_str(plan.source))
    .fetch_one(pool)
    .await?)
}

pub async fn insert_building_plan(
    pool: &PgPool,
    user_id: Uuid,
    project_id: Uuid,
    plan: &AiContent<BuildingPlan>,
) -> Result<BuildingPlanRow, AppError> {
    Ok(sqlx::query_as::<_, BuildingPlanRow>(
        r#"
        INSERT INTO building_in_public_plans (id, user_id, project_id, plan, source, created_at)
        VALUES ($1, $2, $3, $4, $5, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(project_id)
    .bind(write_versioned(&plan.content))
    .bind(source_str(plan.source))
    .fetch_one(pool)
    .await?)
}

fn source_str(source: ContentSource) -> &'static str {
    match source {
        ContentSource::Generated => "generated",
        ContentSource::Fallback => "fallback",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static fallbacks
// ────────────────────────────────────────────────────────────────────────────

fn fallback_project_options() -> ProjectOptionSet {
    ProjectOptionSet {
        projects: vec![
            GeneratedProject {
                name: "Personal data dashboard".to_string(),
                description: "Collect a small dataset from your own life and build an \
                              interactive dashboard around it."
                    .to_string(),
                difficulty: "Beginner".to_string(),
                duration: "2-3 weeks".to_string(),
                skills: vec!["data cleaning".to_string(), "visualization".to_string()],
                icon_name: "chart".to_string(),
                reasoning: "A self-contained first project that produces something \
                            shareable quickly."
                    .to_string(),
            },
            GeneratedProject {
                name: "Domain Q&A assistant".to_string(),
                description: "Build a small retrieval-augmented chatbot over documents \
                              from your current field."
                    .to_string(),
                difficulty: "Intermediate".to_string(),
                duration: "3-4 weeks".to_string(),
                skills: vec!["prompting".to_string(), "retrieval".to_string()],
                icon_name: "chat".to_string(),
                reasoning: "Leverages existing domain knowledge while teaching core \
                            LLM plumbing."
                    .to_string(),
            },
            GeneratedProject {
                name: "Automation agent".to_string(),
                description: "Automate one recurring task from your week with a \
                              tool-using agent."
                    .to_string(),
                difficulty: "Advanced".to_string(),
                duration: "4-6 weeks".to_string(),
                skills: vec!["agents".to_string(), "evaluation".to_string()],
                icon_name: "agent".to_string(),
                reasoning: "A stretch project with a concrete, personally useful \
                            outcome."
                    .to_string(),
            },
        ],
    }
}

fn fallback_learning_plan(project_name: &str) -> LearningPlan {
    LearningPlan {
        overview: format!(
            "A three-week on-ramp for {project_name}: set up, build the core, then polish and share."
        ),
        weeks: vec![
            PlanWeek {
                week: 1,
                focus: "Environment setup and fundamentals".to_string(),
                resources: vec!["Official quickstart docs for your chosen stack".to_string()],
                deliverable: "A running hello-world version of the project".to_string(),
            },
            PlanWeek {
                week: 2,
                focus: "Build the core feature".to_string(),
                resources: vec!["One end-to-end tutorial covering the main technique".to_string()],
                deliverable: "The core feature working on real input".to_string(),
            },
            PlanWeek {
                week: 3,
                focus: "Polish, document, and share".to_string(),
                resources: vec!["A README template and a short demo recording".to_string()],
                deliverable: "A public repository with a demo".to_string(),
            },
        ],
    }
}

fn fallback_building_plan() -> BuildingPlan {
    BuildingPlan {
        cadence: "twice a week".to_string(),
        channels: vec!["LinkedIn".to_string()],
        post_ideas: vec![
            "Why I picked this project and what I want to learn".to_string(),
            "My setup and the first thing that broke".to_string(),
            "A small win: the first end-to-end run".to_string(),
            "The hardest bug so far and how I found it".to_string(),
            "What I would do differently, and the final demo".to_string(),
        ],
    }
}

fn fallback_social_post(update: &str) -> SocialPost {
    SocialPost {
        post: format!(
            "Progress update on my AI learning project: {update} Still plenty to figure \
             out, but it runs. What would you try next?"
        ),
        hashtags: vec![
            "buildinginpublic".to_string(),
            "careerchange".to_string(),
            "learningai".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_project_options_has_three_ordered_projects() {
        let set = fallback_project_options();
        assert_eq!(set.projects.len(), 3);
        assert_eq!(set.projects[0].difficulty, "Beginner");
        assert_eq!(set.projects[2].difficulty, "Advanced");
    }

    #[test]
    fn test_fallback_learning_plan_names_the_project() {
        let plan = fallback_learning_plan("Personal data dashboard");
        assert!(plan.overview.contains("Personal data dashboard"));
        assert_eq!(plan.weeks.len(), 3);
        assert!(plan.weeks.iter().all(|w| !w.deliverable.is_empty()));
    }

    #[test]
    fn test_fallback_building_plan_is_well_formed() {
        let plan = fallback_building_plan();
        assert!(!plan.cadence.is_empty());
        assert!(plan.post_ideas.len() >= 5);
    }

    #[test]
    fn test_fallback_social_post_quotes_the_update() {
        let post = fallback_social_post("shipped the ingestion script.");
        assert!(post.post.contains("shipped the ingestion script."));
        assert!(!post.hashtags.is_empty());
    }
}
