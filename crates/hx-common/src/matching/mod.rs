pub mod domain;
pub mod experience;
pub mod industry;
pub mod location;
pub mod pipeline;
pub mod relevance;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use pipeline::{match_candidates, MatchingEngine, DEFAULT_TOP_N};
pub use relevance::{compute_relevant_years, RelevantYears, RECENT_WINDOW_YEARS};
pub use weights::MatchingWeights;
