//! Ingestion-side checks run before records reach the matching engine.
//!
//! The engine assumes well-formed input; deserialized or parsed records are
//! passed through `validated()` once, at construction.

use thiserror::Error;

use crate::models::{CandidateProfile, JobPosting, RoleExperience};
use crate::normalize::dedupe_preserving_order;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
    #[error("salary_max ({max}) cannot be lower than salary_min ({min})")]
    SalaryRange { min: u64, max: u64 },
    #[error("role '{title}' has an invalid duration: {duration}")]
    RoleDuration { title: String, duration: f64 },
    #[error("weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("matching weights must sum to a positive total")]
    ZeroTotalWeight,
}

fn required_text(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Blank { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RoleExperience {
    pub fn validated(self) -> Result<Self, ValidationError> {
        let title = required_text(self.title, "role.title")?;
        if !self.duration_years.is_finite() || self.duration_years < 0.0 {
            return Err(ValidationError::RoleDuration {
                title,
                duration: self.duration_years,
            });
        }

        Ok(Self {
            title,
            description: optional_text(self.description),
            ..self
        })
    }
}

impl CandidateProfile {
    /// Trims text, dedupes the string sets and checks role history.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let roles = self
            .roles
            .into_iter()
            .map(RoleExperience::validated)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: required_text(self.id, "candidate.id")?,
            full_name: required_text(self.full_name, "candidate.full_name")?,
            skills: dedupe_preserving_order(&self.skills),
            preferred_locations: dedupe_preserving_order(&self.preferred_locations),
            industries: dedupe_preserving_order(&self.industries),
            seniority: optional_text(self.seniority),
            roles,
            ..self
        })
    }
}

impl JobPosting {
    /// Trims text, dedupes the string sets and checks the salary range.
    pub fn validated(self) -> Result<Self, ValidationError> {
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if max < min {
                return Err(ValidationError::SalaryRange { min, max });
            }
        }

        Ok(Self {
            id: required_text(self.id, "job.id")?,
            title: required_text(self.title, "job.title")?,
            company: optional_text(self.company),
            required_skills: dedupe_preserving_order(&self.required_skills),
            nice_to_have_skills: dedupe_preserving_order(&self.nice_to_have_skills),
            industries: dedupe_preserving_order(&self.industries),
            location: optional_text(self.location),
            ..self
        })
    }
}
