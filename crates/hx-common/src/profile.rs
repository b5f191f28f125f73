use crate::matching::relevance::{recent_overlap, RECENT_WINDOW_YEARS};
use crate::models::{CandidateProfile, RoleExperience};

/// Career level inferred from role history. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Lead,
    Senior,
    MidLevel,
    Junior,
    Manager,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Lead => "Lead",
            Seniority::Senior => "Senior",
            Seniority::MidLevel => "Mid-level",
            Seniority::Junior => "Junior",
            Seniority::Manager => "Manager",
        }
    }
}

const LEAD_TERMS: &[&str] = &["lead", "principal", "architect", "director", "vp", "head"];
const SENIOR_TERMS: &[&str] = &["senior", "sr"];
const JUNIOR_TERMS: &[&str] = &["junior", "jr", "associate", "intern"];
const MANAGER_TERMS: &[&str] = &["manager", "supervisor"];

/// Seniority from title keywords, falling back to summed role duration.
pub fn infer_seniority(roles: &[RoleExperience]) -> Option<Seniority> {
    if roles.is_empty() {
        return None;
    }

    let titles = roles
        .iter()
        .map(|role| role.title.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let mentions = |terms: &[&str]| terms.iter().any(|term| titles.contains(term));

    let seniority = if mentions(LEAD_TERMS) {
        Seniority::Lead
    } else if mentions(SENIOR_TERMS) {
        Seniority::Senior
    } else if mentions(JUNIOR_TERMS) {
        Seniority::Junior
    } else if mentions(MANAGER_TERMS) {
        Seniority::Manager
    } else {
        let total: f64 = roles.iter().map(|role| role.duration_years).sum();
        if total >= 8.0 {
            Seniority::Senior
        } else if total >= 3.0 {
            Seniority::MidLevel
        } else {
            Seniority::Junior
        }
    };

    Some(seniority)
}

/// Unweighted years of role history inside the trailing window.
pub fn recent_years(roles: &[RoleExperience], window_years: i32, reference_year: i32) -> f64 {
    roles
        .iter()
        .map(|role| recent_overlap(role, window_years, reference_year))
        .sum()
}

impl CandidateProfile {
    /// Fills absent relevant-years defaults and the seniority label from roles.
    ///
    /// Values already present are kept. Scoring never reads these fields.
    pub fn with_role_defaults(mut self, reference_year: i32) -> Self {
        if self.roles.is_empty() {
            return self;
        }

        if self.relevant_years.is_none() {
            self.relevant_years = Some(self.roles.iter().map(|role| role.duration_years).sum());
        }
        if self.recent_relevant_years.is_none() {
            self.recent_relevant_years =
                Some(recent_years(&self.roles, RECENT_WINDOW_YEARS, reference_year));
        }
        if self.seniority.is_none() {
            self.seniority = infer_seniority(&self.roles).map(|s| s.as_str().to_string());
        }

        self
    }
}
