use serde::{Deserialize, Serialize};

use crate::matching::weights::MatchingWeights;

/// A prior position held by a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleExperience {
    pub title: String,
    pub duration_years: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    /// `None` means the role is ongoing.
    #[serde(default)]
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub full_name: String,
    pub years_experience: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub desired_salary: Option<u64>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default = "default_true")]
    pub open_to_remote: bool,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub roles: Vec<RoleExperience>,
    /// Precomputed default. The engine recomputes per job.
    #[serde(default)]
    pub relevant_years: Option<f64>,
    /// Precomputed default. The engine recomputes per job.
    #[serde(default)]
    pub recent_relevant_years: Option<f64>,
    #[serde(default)]
    pub seniority: Option<String>,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            full_name: String::new(),
            years_experience: 0,
            skills: Vec::new(),
            desired_salary: None,
            preferred_locations: Vec::new(),
            open_to_remote: true,
            industries: Vec::new(),
            roles: Vec::new(),
            relevant_years: None,
            recent_relevant_years: None,
            seniority: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default)]
    pub minimum_years_experience: u32,
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub salary_max: Option<u64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub remote_allowed: bool,
    #[serde(default)]
    pub industries: Vec<String>,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            company: None,
            required_skills: Vec::new(),
            nice_to_have_skills: Vec::new(),
            minimum_years_experience: 0,
            salary_min: None,
            salary_max: None,
            location: None,
            remote_allowed: true,
            industries: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-factor scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub salary: f64,
    pub location: f64,
    pub industry: f64,
}

impl MatchBreakdown {
    /// Weighted average of the five factors. Unrounded.
    pub fn total(&self, weights: &MatchingWeights) -> f64 {
        (self.skills * weights.skills()
            + self.experience * weights.experience()
            + self.salary * weights.salary()
            + self.location * weights.location()
            + self.industry * weights.industry())
            / weights.total_weight()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobPosting,
    pub score: f64,
    pub breakdown: MatchBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatches {
    pub candidate: CandidateProfile,
    pub matches: Vec<JobMatch>,
}
