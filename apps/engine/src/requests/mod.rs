//! JSON-lines request protocol.
//!
//! One request object per line, tagged by `"op"`; one response object per
//! line back. Failures become the `AppError` envelope.

pub mod handlers;
pub mod input;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::SelectionMode;
use crate::state::AppState;

use input::{FreelancerInput, SkillInput};

const DEFAULT_LIMIT: i64 = 10;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Health,
    Search {
        query: String,
        #[serde(default = "default_limit")]
        limit: i64,
    },
    SearchWithScore {
        query: String,
        #[serde(default = "default_limit")]
        limit: i64,
    },
    ByCategory {
        category: String,
    },
    Categories,
    ById {
        id: u32,
    },
    Recommend {
        keywords: SkillInput,
        #[serde(default = "default_limit")]
        limit_per_keyword: i64,
    },
    Expand {
        #[serde(default)]
        job_skills: SkillInput,
    },
    Eligibility {
        #[serde(default)]
        freelancer_skills: SkillInput,
        #[serde(default)]
        job_skills: SkillInput,
    },
    Rank {
        projects_completed: u32,
    },
    MatchCandidates {
        #[serde(default)]
        job_skills: SkillInput,
        freelancers: Vec<FreelancerInput>,
        #[serde(default)]
        mode: SelectionMode,
        #[serde(default)]
        eligible_only: bool,
    },
}

/// Parses one request line and runs it.
pub fn handle_line(state: &AppState, line: &str) -> Result<Value, AppError> {
    let request: Request = serde_json::from_str(line)?;
    dispatch(state, request)
}

pub fn dispatch(state: &AppState, request: Request) -> Result<Value, AppError> {
    debug!(?request, "dispatching request");

    let value = match request {
        Request::Health => serde_json::to_value(handlers::handle_health(state)),
        Request::Search { query, limit } => {
            serde_json::to_value(handlers::handle_search(state, query, limit)?)
        }
        Request::SearchWithScore { query, limit } => {
            serde_json::to_value(handlers::handle_search_with_score(state, query, limit)?)
        }
        Request::ByCategory { category } => {
            serde_json::to_value(handlers::handle_by_category(state, &category))
        }
        Request::Categories => serde_json::to_value(handlers::handle_categories(state)),
        Request::ById { id } => serde_json::to_value(handlers::handle_by_id(state, id)?),
        Request::Recommend {
            keywords,
            limit_per_keyword,
        } => serde_json::to_value(handlers::handle_recommend(
            state,
            keywords,
            limit_per_keyword,
        )?),
        Request::Expand { job_skills } => {
            serde_json::to_value(handlers::handle_expand(state, job_skills))
        }
        Request::Eligibility {
            freelancer_skills,
            job_skills,
        } => serde_json::to_value(handlers::handle_eligibility(
            state,
            freelancer_skills,
            job_skills,
        )),
        Request::Rank { projects_completed } => {
            serde_json::to_value(handlers::handle_rank(projects_completed))
        }
        Request::MatchCandidates {
            job_skills,
            freelancers,
            mode,
            eligible_only,
        } => serde_json::to_value(handlers::handle_match_candidates(
            state,
            job_skills,
            freelancers,
            mode,
            eligible_only,
        )),
    };

    value.map_err(|e| AppError::Internal(e.into()))
}
