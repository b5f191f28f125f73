use super::relevance::RelevantYears;

/// Score awarded for meeting the minimum exactly.
const BASELINE: f64 = 0.7;
const RECENT_SHARE: f64 = 0.75;
const TOTAL_SHARE: f64 = 0.25;

/// Recency-weighted years: 75% recent relevant, 25% total relevant.
pub fn blended_years(relevant: RelevantYears) -> f64 {
    RECENT_SHARE * relevant.recent + TOTAL_SHARE * relevant.total
}

/// Experience score against a job minimum.
///
/// With role history (`relevant` is `Some`) the blended years are compared,
/// otherwise the raw career length.
pub fn experience_score(
    years_experience: u32,
    minimum_years: u32,
    relevant: Option<RelevantYears>,
) -> f64 {
    if minimum_years == 0 {
        return 1.0;
    }

    let years = match relevant {
        Some(relevant) => blended_years(relevant),
        None => f64::from(years_experience),
    };
    let minimum = f64::from(minimum_years);

    if years >= minimum {
        let surplus_ratio = (years - minimum) / minimum.max(1.0);
        (BASELINE + surplus_ratio.min(1.0) * (1.0 - BASELINE)).min(1.0)
    } else {
        let deficit_ratio = (minimum - years) / (minimum + 1.0);
        (BASELINE - deficit_ratio).max(0.0)
    }
}
