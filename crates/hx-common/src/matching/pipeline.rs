use std::cmp::Ordering;

use chrono::{Datelike, Utc};
use tracing::debug;

use super::{
    scoring::{score_breakdown, total_score},
    weights::MatchingWeights,
};
use crate::models::{CandidateMatches, CandidateProfile, JobMatch, JobPosting};

/// Matches kept per candidate when the caller does not say.
pub const DEFAULT_TOP_N: i64 = 3;

/// Scores every candidate against every job and keeps the best `top_n` each.
///
/// Holds only the configured weights; build one per process and share it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchingEngine {
    weights: MatchingWeights,
    reference_year: Option<i32>,
}

impl MatchingEngine {
    pub fn new(weights: MatchingWeights) -> Self {
        Self {
            weights,
            reference_year: None,
        }
    }

    /// Pins the calendar year used as "now" for recency windows.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Same engine with different weights, e.g. a per-request override.
    pub fn with_weights(&self, weights: MatchingWeights) -> Self {
        Self { weights, ..*self }
    }

    pub fn weights(&self) -> &MatchingWeights {
        &self.weights
    }

    /// Year used as "now": the pinned year, or the current UTC year.
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Ranked top matches for each candidate, in candidate input order.
    ///
    /// Jobs with equal scores keep their input order. Negative `top_n` yields
    /// no matches.
    pub fn match_candidates_to_jobs(
        &self,
        candidates: &[CandidateProfile],
        jobs: &[JobPosting],
        top_n: i64,
    ) -> Vec<CandidateMatches> {
        let reference_year = self.current_year();
        let keep = usize::try_from(top_n.max(0)).unwrap_or(usize::MAX);

        candidates
            .iter()
            .map(|candidate| {
                let mut scored: Vec<JobMatch> = jobs
                    .iter()
                    .map(|job| self.score_with_year(candidate, job, reference_year))
                    .collect();

                // stable: ties stay in job input order
                scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
                scored.truncate(keep);

                debug!(
                    candidate_id = %candidate.id,
                    jobs_scored = jobs.len(),
                    matches_kept = scored.len(),
                    best_score = scored.first().map(|m| m.score),
                    "candidate ranked"
                );

                CandidateMatches {
                    candidate: candidate.clone(),
                    matches: scored,
                }
            })
            .collect()
    }

    /// Breakdown and rounded total for a single pair.
    pub fn score_pair(&self, candidate: &CandidateProfile, job: &JobPosting) -> JobMatch {
        self.score_with_year(candidate, job, self.current_year())
    }

    fn score_with_year(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
        reference_year: i32,
    ) -> JobMatch {
        let breakdown = score_breakdown(candidate, job, reference_year);
        JobMatch {
            job: job.clone(),
            score: total_score(&breakdown, &self.weights),
            breakdown,
        }
    }
}

/// One-shot form of [`MatchingEngine::match_candidates_to_jobs`].
pub fn match_candidates(
    candidates: &[CandidateProfile],
    jobs: &[JobPosting],
    weights: &MatchingWeights,
    top_n: i64,
) -> Vec<CandidateMatches> {
    MatchingEngine::new(*weights).match_candidates_to_jobs(candidates, jobs, top_n)
}
