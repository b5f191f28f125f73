use axum::{extract::State, Json};
use tracing::info;

use hx_common::api::match_request::MatchRequest;
use hx_common::api::match_response::MatchResponse;
use hx_common::run_id;

use crate::error::ApiError;
use crate::SharedState;

pub async fn run_match(
    State(state): State<SharedState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let reference_year = state.engine.current_year();
    let request = request.validate(&state.settings, reference_year)?;

    let engine = match request.weights {
        Some(weights) => state.engine.with_weights(weights),
        None => state.engine,
    }
    .with_reference_year(reference_year);

    let match_run_id = run_id::generate();
    let results = engine.match_candidates_to_jobs(&request.candidates, &request.jobs, request.top_n);

    info!(
        %match_run_id,
        candidates = request.candidates.len(),
        jobs = request.jobs.len(),
        top_n = request.top_n,
        custom_weights = request.weights.is_some(),
        "match run completed"
    );

    Ok(Json(MatchResponse {
        match_run_id,
        weights: *engine.weights(),
        results,
    }))
}
