use super::{
    experience::experience_score,
    industry::industry_score,
    location::location_score,
    relevance::compute_relevant_years,
    salary::salary_score,
    skills::skill_score,
    weights::MatchingWeights,
};
use crate::models::{CandidateProfile, JobPosting, MatchBreakdown};

/// Decimal places kept in the aggregate score.
pub const SCORE_DECIMALS: i32 = 4;

/// Computes the five sub-scores for one candidate/job pair.
pub fn score_breakdown(
    candidate: &CandidateProfile,
    job: &JobPosting,
    reference_year: i32,
) -> MatchBreakdown {
    // Role history switches experience scoring to relevance-weighted years.
    let relevant = (!candidate.roles.is_empty())
        .then(|| compute_relevant_years(candidate, job, reference_year));

    MatchBreakdown {
        skills: skill_score(
            &candidate.skills,
            &job.required_skills,
            &job.nice_to_have_skills,
        ),
        experience: experience_score(
            candidate.years_experience,
            job.minimum_years_experience,
            relevant,
        ),
        salary: salary_score(candidate.desired_salary, job.salary_min, job.salary_max),
        location: location_score(
            &candidate.preferred_locations,
            candidate.open_to_remote,
            job.location.as_deref(),
            job.remote_allowed,
        ),
        industry: industry_score(&candidate.industries, &job.industries),
    }
}

/// Weighted total rounded to [`SCORE_DECIMALS`] places. Sub-scores stay unrounded.
pub fn total_score(breakdown: &MatchBreakdown, weights: &MatchingWeights) -> f64 {
    round_to(breakdown.total(weights), SCORE_DECIMALS)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
