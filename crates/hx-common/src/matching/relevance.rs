use std::collections::HashSet;

use super::domain::shares_domain;
use crate::models::{CandidateProfile, JobPosting, RoleExperience};
use crate::normalize::{normalized_set, word_tokens};

/// Trailing window, in years, that counts as "recent".
pub const RECENT_WINDOW_YEARS: i32 = 5;

const DOMAIN_BOOST: f64 = 0.2;
const GLOBAL_SKILL_SHARE: f64 = 0.7;
const ROLE_SKILL_SHARE: f64 = 0.3;

/// Job-relevant experience of one candidate for one job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevantYears {
    pub total: f64,
    pub recent: f64,
}

/// Job-side inputs shared by every role of a candidate.
struct JobContext {
    title_tokens: HashSet<String>,
    required_skills: HashSet<String>,
    text: String,
}

impl JobContext {
    fn new(job: &JobPosting) -> Self {
        let mut text = job.title.clone();
        for skill in &job.required_skills {
            text.push(' ');
            text.push_str(skill);
        }

        Self {
            title_tokens: word_tokens(&job.title),
            required_skills: normalized_set(&job.required_skills),
            text,
        }
    }
}

/// Role title plus description, lowercased.
fn role_text(role: &RoleExperience) -> String {
    let mut text = role.title.to_lowercase();
    if let Some(description) = role.description.as_deref() {
        text.push(' ');
        text.push_str(&description.to_lowercase());
    }
    text
}

fn role_relevance(
    role: &RoleExperience,
    job: &JobContext,
    candidate_skills: &HashSet<String>,
) -> f64 {
    let title_match: f64 = if word_tokens(&role.title).is_disjoint(&job.title_tokens) {
        0.0
    } else {
        1.0
    };

    let text = role_text(role);

    let skill_overlap = if job.required_skills.is_empty() {
        0.0
    } else {
        let required = job.required_skills.len() as f64;
        let base_overlap = candidate_skills.intersection(&job.required_skills).count() as f64 / required;
        let mentioned = job
            .required_skills
            .iter()
            .filter(|skill| text.contains(skill.as_str()))
            .count() as f64;
        GLOBAL_SKILL_SHARE * base_overlap + ROLE_SKILL_SHARE * (mentioned / required)
    };

    let domain_boost = if shares_domain(&text, &job.text) {
        DOMAIN_BOOST
    } else {
        0.0
    };

    (title_match.max(skill_overlap) + domain_boost).min(1.0)
}

/// Years of `role` falling inside the trailing window ending at `reference_year`.
///
/// Roles without a start year count fully when they are no longer than the
/// window and not at all otherwise.
pub fn recent_overlap(role: &RoleExperience, window_years: i32, reference_year: i32) -> f64 {
    match role.start_year {
        Some(start_year) => {
            let recent_start = start_year.max(reference_year - window_years);
            let recent_end = role.end_year.unwrap_or(reference_year).min(reference_year);
            if recent_start <= recent_end {
                f64::from(recent_end - recent_start)
            } else {
                0.0
            }
        }
        None if role.duration_years <= f64::from(window_years) => role.duration_years,
        None => 0.0,
    }
}

/// Relevance-weighted total and recent years of `candidate` for `job`.
///
/// Without any role history all experience is assumed relevant, and at most
/// one window of it recent.
pub fn compute_relevant_years(
    candidate: &CandidateProfile,
    job: &JobPosting,
    reference_year: i32,
) -> RelevantYears {
    if candidate.roles.is_empty() {
        let years = f64::from(candidate.years_experience);
        return RelevantYears {
            total: years,
            recent: years.min(f64::from(RECENT_WINDOW_YEARS)),
        };
    }

    let context = JobContext::new(job);
    let candidate_skills = normalized_set(&candidate.skills);

    candidate.roles.iter().fold(
        RelevantYears {
            total: 0.0,
            recent: 0.0,
        },
        |acc, role| {
            let relevance = role_relevance(role, &context, &candidate_skills);
            RelevantYears {
                total: acc.total + role.duration_years * relevance,
                recent: acc.recent
                    + recent_overlap(role, RECENT_WINDOW_YEARS, reference_year) * relevance,
            }
        },
    )
}
