use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::AppError;
use crate::matching::{
    evaluate_candidates, EligibilityResult, RankTier, RankedCandidate, SelectionMode,
};
use crate::models::{validate_limit, FreelancerProfile, SearchQuery, SearchResult, SkillRecord};
use crate::requests::input::{FreelancerInput, SkillInput};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub skills: usize,
    pub categories: usize,
    pub fuzzy_threshold: f64,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Serialize)]
pub struct ScoredSkillsResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub skill: SkillRecord,
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub job_skills: Vec<String>,
    pub expanded: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    #[serde(flatten)]
    pub result: EligibilityResult,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub projects_completed: u32,
    pub rank: RankTier,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub mode: SelectionMode,
    pub scorer_backend: &'static str,
    pub candidates: Vec<RankedCandidate>,
}

/// op: health
pub fn handle_health(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        skills: state.index.len(),
        categories: state.index.all_categories().len(),
        fuzzy_threshold: state.index.options().threshold,
        scorer_backend: state.scorer.backend(),
    }
}

/// op: search
pub fn handle_search(
    state: &AppState,
    query: String,
    limit: i64,
) -> Result<SkillListResponse, AppError> {
    let query = SearchQuery::new(query, limit)?;
    Ok(SkillListResponse {
        skills: state.index.search(&query.text, query.limit),
    })
}

/// op: search_with_score
pub fn handle_search_with_score(
    state: &AppState,
    query: String,
    limit: i64,
) -> Result<ScoredSkillsResponse, AppError> {
    let query = SearchQuery::new(query, limit)?;
    Ok(ScoredSkillsResponse {
        results: state.index.search_with_score(&query.text, query.limit),
    })
}

/// op: by_category
pub fn handle_by_category(state: &AppState, category: &str) -> SkillListResponse {
    SkillListResponse {
        skills: state.index.get_by_category(category),
    }
}

/// op: categories
pub fn handle_categories(state: &AppState) -> CategoriesResponse {
    CategoriesResponse {
        categories: state.index.all_categories(),
    }
}

/// op: by_id
pub fn handle_by_id(state: &AppState, id: u32) -> Result<SkillResponse, AppError> {
    state
        .index
        .get_by_id(id)
        .cloned()
        .map(|skill| SkillResponse { skill })
        .ok_or_else(|| AppError::NotFound(format!("skill with id {id}")))
}

/// op: recommend
pub fn handle_recommend(
    state: &AppState,
    keywords: SkillInput,
    limit_per_keyword: i64,
) -> Result<SkillListResponse, AppError> {
    let limit = validate_limit(limit_per_keyword)?;
    Ok(SkillListResponse {
        skills: state.index.recommend(&keywords.into_skills(), limit),
    })
}

/// op: expand
pub fn handle_expand(state: &AppState, job_skills: SkillInput) -> ExpandResponse {
    let job_skills = job_skills.into_skills();
    let expanded = state.expander.expand(&job_skills);
    ExpandResponse {
        job_skills,
        expanded,
    }
}

/// op: eligibility
pub fn handle_eligibility(
    state: &AppState,
    freelancer_skills: SkillInput,
    job_skills: SkillInput,
) -> EligibilityResponse {
    let result = state
        .scorer
        .score(&freelancer_skills.into_skills(), &job_skills.into_skills());
    EligibilityResponse {
        result,
        scorer_backend: state.scorer.backend(),
    }
}

/// op: rank
pub fn handle_rank(projects_completed: u32) -> RankResponse {
    RankResponse {
        projects_completed,
        rank: RankTier::from_projects(projects_completed),
    }
}

/// op: match_candidates
pub fn handle_match_candidates(
    state: &AppState,
    job_skills: SkillInput,
    freelancers: Vec<FreelancerInput>,
    mode: SelectionMode,
    eligible_only: bool,
) -> CandidatesResponse {
    let job_skills = job_skills.into_skills();
    let freelancers: Vec<FreelancerProfile> = freelancers.into_iter().map(Into::into).collect();
    let candidates = evaluate_candidates(
        state.scorer.as_ref(),
        &job_skills,
        &freelancers,
        mode,
        eligible_only,
        &mut rand::rng(),
    );
    CandidatesResponse {
        mode,
        scorer_backend: state.scorer.backend(),
        candidates,
    }
}
