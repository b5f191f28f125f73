use serde::{Deserialize, Serialize};

use crate::matching::weights::MatchingWeights;
use crate::models::CandidateMatches;

/// Ranked output of one match run, with the weights that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_run_id: String,
    pub weights: MatchingWeights,
    pub results: Vec<CandidateMatches>,
}
