use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::weights::MatchingWeights;
use crate::models::{CandidateProfile, JobPosting};
use crate::settings::EngineSettings;
use crate::validation::ValidationError;

/// Body of a match call (HTTP or CLI input file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub candidates: Vec<CandidateProfile>,
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub top_n: Option<i64>,
    /// Overrides the configured weights for this call only.
    #[serde(default)]
    pub weights: Option<MatchingWeights>,
}

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("top_n must be between 1 and {max}, got {value}")]
    TopN { value: i64, max: i64 },
    #[error("candidates[{index}]: {source}")]
    Candidate {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("jobs[{index}]: {source}")]
    Job {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// A request whose records passed ingestion validation.
#[derive(Debug, Clone)]
pub struct ValidatedMatchRequest {
    pub candidates: Vec<CandidateProfile>,
    pub jobs: Vec<JobPosting>,
    pub top_n: i64,
    pub weights: Option<MatchingWeights>,
}

impl MatchRequest {
    /// Applies the `top_n` default and bound, validates every record and
    /// fills role-derived profile defaults as of `reference_year`.
    pub fn validate(
        self,
        settings: &EngineSettings,
        reference_year: i32,
    ) -> Result<ValidatedMatchRequest, RequestError> {
        let top_n = self.top_n.unwrap_or(settings.default_top_n);
        if !(1..=settings.max_top_n).contains(&top_n) {
            return Err(RequestError::TopN {
                value: top_n,
                max: settings.max_top_n,
            });
        }

        let candidates = self
            .candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                candidate
                    .validated()
                    .map(|candidate| candidate.with_role_defaults(reference_year))
                    .map_err(|source| RequestError::Candidate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let jobs = self
            .jobs
            .into_iter()
            .enumerate()
            .map(|(index, job)| {
                job.validated()
                    .map_err(|source| RequestError::Job { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedMatchRequest {
            candidates,
            jobs,
            top_n,
            weights: self.weights,
        })
    }
}
