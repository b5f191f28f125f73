use crate::normalize::{normalize_term, normalized_set};

/// Location fit between a candidate's preferences and a posting.
pub fn location_score<S: AsRef<str>>(
    preferred_locations: &[S],
    open_to_remote: bool,
    job_location: Option<&str>,
    job_remote: bool,
) -> f64 {
    if job_remote && open_to_remote {
        return 1.0;
    }

    let preferred = normalized_set(preferred_locations);
    let job_location = job_location.and_then(normalize_term);

    match job_location {
        Some(location) if preferred.contains(&location) => 1.0,
        // flexible candidate: any stated location is a mild constraint
        Some(_) if preferred.is_empty() => 0.8,
        None if preferred.is_empty() => 1.0,
        Some(_) => 0.2,
        None => 0.4,
    }
}
