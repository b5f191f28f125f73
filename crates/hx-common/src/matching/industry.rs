use crate::normalize::normalized_set;

/// Share of the job's industries the candidate has worked in.
///
/// Not a Jaccard index: extra candidate industries never hurt.
pub fn industry_score<S: AsRef<str>>(candidate_industries: &[S], job_industries: &[S]) -> f64 {
    let candidate = normalized_set(candidate_industries);
    let job = normalized_set(job_industries);

    match (candidate.is_empty(), job.is_empty()) {
        (true, true) => 0.5,
        (true, false) => 0.6,
        (false, true) => 0.7,
        (false, false) => candidate.intersection(&job).count() as f64 / job.len() as f64,
    }
}
