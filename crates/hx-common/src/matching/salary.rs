/// Largest deduction for asking below the posted floor.
const BELOW_FLOOR_MAX_PENALTY: f64 = 0.4;

/// Salary fit between a desired salary and a posted range.
///
/// Pricing above the ceiling can cost the whole score; asking below the
/// floor costs at most 0.4.
pub fn salary_score(desired: Option<u64>, salary_min: Option<u64>, salary_max: Option<u64>) -> f64 {
    let Some(desired) = desired else {
        return 1.0;
    };
    if salary_min.is_none() && salary_max.is_none() {
        return 1.0;
    }

    let desired = desired as f64;
    let mut score = 1.0;

    if let Some(max) = salary_max.map(|v| v as f64) {
        if desired > max {
            score -= ((desired - max) / max.max(1.0)).min(1.0);
        }
    }

    if let Some(min) = salary_min.map(|v| v as f64) {
        if desired < min {
            score -= ((min - desired) / min.max(1.0) * BELOW_FLOOR_MAX_PENALTY)
                .min(BELOW_FLOOR_MAX_PENALTY);
        }
    }

    f64::max(score, 0.0)
}
