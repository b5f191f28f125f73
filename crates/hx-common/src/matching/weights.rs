use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

pub const DEFAULT_SKILLS_WEIGHT: f64 = 0.45;
pub const DEFAULT_EXPERIENCE_WEIGHT: f64 = 0.20;
pub const DEFAULT_SALARY_WEIGHT: f64 = 0.15;
pub const DEFAULT_LOCATION_WEIGHT: f64 = 0.10;
pub const DEFAULT_INDUSTRY_WEIGHT: f64 = 0.10;

/// Per-factor weights. The total is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchingWeights")]
pub struct MatchingWeights {
    skills: f64,
    experience: f64,
    salary: f64,
    location: f64,
    industry: f64,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS_WEIGHT,
            experience: DEFAULT_EXPERIENCE_WEIGHT,
            salary: DEFAULT_SALARY_WEIGHT,
            location: DEFAULT_LOCATION_WEIGHT,
            industry: DEFAULT_INDUSTRY_WEIGHT,
        }
    }
}

impl MatchingWeights {
    pub fn new(
        skills: f64,
        experience: f64,
        salary: f64,
        location: f64,
        industry: f64,
    ) -> Result<Self, ValidationError> {
        for (name, value) in [
            ("skills", skills),
            ("experience", experience),
            ("salary", salary),
            ("location", location),
            ("industry", industry),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight { name, value });
            }
        }

        let weights = Self {
            skills,
            experience,
            salary,
            location,
            industry,
        };

        if weights.total_weight() <= 0.0 {
            return Err(ValidationError::ZeroTotalWeight);
        }

        Ok(weights)
    }

    pub fn skills(&self) -> f64 {
        self.skills
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn industry(&self) -> f64 {
        self.industry
    }

    pub fn total_weight(&self) -> f64 {
        self.skills + self.experience + self.salary + self.location + self.industry
    }
}

/// Wire form of [`MatchingWeights`]; omitted fields take their defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct RawMatchingWeights {
    skills: f64,
    experience: f64,
    salary: f64,
    location: f64,
    industry: f64,
}

impl Default for RawMatchingWeights {
    fn default() -> Self {
        let defaults = MatchingWeights::default();
        Self {
            skills: defaults.skills,
            experience: defaults.experience,
            salary: defaults.salary,
            location: defaults.location,
            industry: defaults.industry,
        }
    }
}

impl TryFrom<RawMatchingWeights> for MatchingWeights {
    type Error = ValidationError;

    fn try_from(raw: RawMatchingWeights) -> Result<Self, Self::Error> {
        MatchingWeights::new(
            raw.skills,
            raw.experience,
            raw.salary,
            raw.location,
            raw.industry,
        )
    }
}
