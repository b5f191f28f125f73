use crate::normalize::normalized_set;

/// Weight of full nice-to-have coverage on top of required coverage.
const NICE_TO_HAVE_BONUS: f64 = 0.3;

/// Share of required skills covered, plus a capped nice-to-have bonus.
pub fn skill_score<S: AsRef<str>>(
    candidate_skills: &[S],
    required_skills: &[S],
    nice_to_have_skills: &[S],
) -> f64 {
    let candidate = normalized_set(candidate_skills);
    let required = normalized_set(required_skills);
    let nice_to_have = normalized_set(nice_to_have_skills);

    if candidate.is_empty() && !required.is_empty() {
        return 0.0;
    }

    // A blank profile against a blank posting is ambiguous, not a perfect fit.
    if required.is_empty() {
        return if candidate.is_empty() { 0.5 } else { 1.0 };
    }

    let base = candidate.intersection(&required).count() as f64 / required.len() as f64;

    let bonus = if nice_to_have.is_empty() {
        0.0
    } else {
        candidate.intersection(&nice_to_have).count() as f64 / nice_to_have.len() as f64
            * NICE_TO_HAVE_BONUS
    };

    (base + bonus).min(1.0)
}
