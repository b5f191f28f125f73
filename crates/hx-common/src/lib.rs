//! Scoring and ranking of job postings for candidate profiles.
//!
//! The matching core lives in [`matching`]; [`validation`] and [`profile`]
//! belong to the ingestion side that prepares records for it.

pub mod api;
pub mod logging;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod profile;
pub mod run_id;
pub mod settings;
pub mod validation;

pub use matching::{match_candidates, MatchingEngine, MatchingWeights, DEFAULT_TOP_N};
pub use models::{
    CandidateMatches, CandidateProfile, JobMatch, JobPosting, MatchBreakdown, RoleExperience,
};
