use hx_common::{
    CandidateProfile, JobPosting, MatchingEngine, MatchingWeights, RoleExperience,
};

const NOW: i32 = 2024;

fn sample_candidate() -> CandidateProfile {
    CandidateProfile {
        id: "cand-1".into(),
        full_name: "Alex Dev".into(),
        years_experience: 5,
        skills: vec!["Python".into(), "FastAPI".into(), "SQL".into()],
        desired_salary: Some(90_000),
        preferred_locations: vec!["berlin".into()],
        open_to_remote: true,
        industries: vec!["SaaS".into(), "FinTech".into()],
        ..CandidateProfile::default()
    }
}

fn sample_job() -> JobPosting {
    JobPosting {
        id: "job-1".into(),
        title: "Backend Engineer".into(),
        company: Some("Acme Corp".into()),
        required_skills: vec!["Python".into(), "FastAPI".into()],
        nice_to_have_skills: vec!["SQL".into()],
        minimum_years_experience: 4,
        salary_min: Some(85_000),
        salary_max: Some(100_000),
        location: Some("Berlin".into()),
        remote_allowed: true,
        industries: vec!["FinTech".into()],
    }
}

fn engine() -> MatchingEngine {
    MatchingEngine::default().with_reference_year(NOW)
}

#[test]
fn full_match_scores_high() {
    let mut candidate = sample_candidate();
    candidate.desired_salary = None;
    let job = sample_job();

    let results = engine().match_candidates_to_jobs(&[candidate.clone()], &[job.clone()], 1);

    assert_eq!(results[0].candidate.id, candidate.id);
    assert_eq!(results[0].matches.len(), 1);
    let top = &results[0].matches[0];
    assert_eq!(top.job.id, job.id);
    assert_eq!(top.breakdown.skills, 1.0);
    assert!(top.score >= 0.85, "score {}", top.score);
}

#[test]
fn remote_mismatch_penalizes_location_score() {
    let mut candidate = sample_candidate();
    candidate.open_to_remote = false;
    candidate.preferred_locations = vec!["Paris".into()];
    // Only half of the required stack. With a full skill match the other
    // factors alone keep the total near 0.9.
    candidate.skills = vec!["Python".into()];

    let mut job = sample_job();
    job.location = None;
    job.remote_allowed = false;

    let scored = &engine().match_candidates_to_jobs(&[candidate], &[job], 1)[0].matches[0];

    assert!(scored.breakdown.location < 0.5);
    assert_eq!(scored.breakdown.location, 0.4);
    assert!(scored.score < 0.8, "score {}", scored.score);
}

#[test]
fn better_skill_alignment_ranks_higher() {
    let mut candidate = sample_candidate();
    candidate.skills = vec!["Python".into(), "Django".into(), "SQL".into(), "Docker".into()];

    let close = JobPosting {
        id: "job-close".into(),
        required_skills: vec!["Python".into(), "Django".into()],
        nice_to_have_skills: vec!["Docker".into()],
        ..sample_job()
    };
    let weak = JobPosting {
        id: "job-weak".into(),
        required_skills: vec!["Go".into(), "Kubernetes".into()],
        nice_to_have_skills: vec!["Rust".into()],
        ..sample_job()
    };

    // weak job first in input, so the ranking has to move it
    let results = engine().match_candidates_to_jobs(&[candidate], &[weak, close], 2);

    let ids: Vec<_> = results[0].matches.iter().map(|m| m.job.id.as_str()).collect();
    assert_eq!(ids, vec!["job-close", "job-weak"]);
    assert!(results[0].matches[0].score > results[0].matches[1].score);
}

#[test]
fn custom_weights_modify_results() {
    let mut candidate = sample_candidate();
    candidate.skills = vec!["Python".into()];
    candidate.desired_salary = Some(120_000);
    let mut job = sample_job();
    job.required_skills = vec!["Python".into()];
    job.salary_max = Some(100_000);

    let salary_focus = MatchingWeights::new(0.3, 0.1, 0.4, 0.1, 0.1).unwrap();

    let default_score = engine().score_pair(&candidate, &job).score;
    let salary_score = engine().with_weights(salary_focus).score_pair(&candidate, &job).score;

    assert!(salary_score < default_score, "{salary_score} >= {default_score}");
}

#[test]
fn relevant_recent_roles_raise_experience_score() {
    let candidate = CandidateProfile {
        id: "mixed".into(),
        full_name: "Mixed Experience".into(),
        years_experience: 6,
        skills: vec!["Python".into(), "Django".into(), "SQL".into(), "Excel".into()],
        roles: vec![
            RoleExperience {
                title: "Senior Python Developer".into(),
                duration_years: 2.0,
                description: Some("Web development with Django".into()),
                start_year: Some(NOW - 2),
                end_year: None,
            },
            RoleExperience {
                title: "Data Analyst".into(),
                duration_years: 4.0,
                description: Some("Excel and SQL reporting".into()),
                start_year: Some(NOW - 7),
                end_year: Some(NOW - 3),
            },
        ],
        ..CandidateProfile::default()
    };

    let python_job = JobPosting {
        id: "python".into(),
        title: "Python Developer".into(),
        required_skills: vec!["Python".into(), "Django".into()],
        minimum_years_experience: 3,
        ..JobPosting::default()
    };
    let unrelated_job = JobPosting {
        id: "forklift".into(),
        title: "Forklift Operator".into(),
        required_skills: vec!["Forklift".into()],
        minimum_years_experience: 3,
        ..JobPosting::default()
    };

    let python = engine().score_pair(&candidate, &python_job).breakdown.experience;
    let unrelated = engine().score_pair(&candidate, &unrelated_job).breakdown.experience;

    assert!(python > unrelated, "{python} <= {unrelated}");
    assert!(python >= 0.7);
}

fn varied_candidates() -> Vec<CandidateProfile> {
    let mut out = vec![
        CandidateProfile::default(),
        sample_candidate(),
        CandidateProfile {
            id: "rich".into(),
            years_experience: 40,
            desired_salary: Some(u64::from(u32::MAX)),
            open_to_remote: false,
            preferred_locations: vec!["Tokyo".into()],
            ..CandidateProfile::default()
        },
    ];

    let mut veteran = sample_candidate();
    veteran.id = "veteran".into();
    veteran.roles = vec![
        RoleExperience {
            title: "Backend Engineer".into(),
            duration_years: 12.0,
            description: Some("python api work".into()),
            start_year: Some(2005),
            end_year: None,
        },
        RoleExperience {
            title: "Intern".into(),
            duration_years: 30.0,
            ..RoleExperience::default()
        },
    ];
    out.push(veteran);
    out
}

fn varied_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting::default(),
        sample_job(),
        JobPosting {
            id: "cheap".into(),
            title: "Mobile App Developer".into(),
            required_skills: vec!["Swift".into()],
            minimum_years_experience: 15,
            salary_min: Some(0),
            salary_max: Some(0),
            location: Some("Tokyo".into()),
            remote_allowed: false,
            ..JobPosting::default()
        },
        JobPosting {
            id: "floor".into(),
            title: "Data Engineer".into(),
            salary_min: Some(500_000),
            industries: vec!["Energy".into()],
            ..JobPosting::default()
        },
    ]
}

#[test]
fn every_score_stays_within_unit_interval() {
    let results = engine().match_candidates_to_jobs(&varied_candidates(), &varied_jobs(), 10);

    for candidate in &results {
        for m in &candidate.matches {
            let b = m.breakdown;
            for (name, value) in [
                ("total", m.score),
                ("skills", b.skills),
                ("experience", b.experience),
                ("salary", b.salary),
                ("location", b.location),
                ("industry", b.industry),
            ] {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{name}={value} for {} / {}",
                    candidate.candidate.id,
                    m.job.id
                );
            }
        }
    }
}

#[test]
fn ranking_is_deterministic_and_idempotent() {
    let candidates = varied_candidates();
    let jobs = varied_jobs();

    let first = engine().match_candidates_to_jobs(&candidates, &jobs, 3);
    let second = engine().match_candidates_to_jobs(&candidates, &jobs, 3);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        for (x, y) in a.matches.iter().zip(&b.matches) {
            assert_eq!(x.score.to_bits(), y.score.to_bits());
        }
    }
}

#[test]
fn top_n_never_exceeds_request_or_job_count() {
    let candidates = varied_candidates();
    let jobs = varied_jobs();

    for top_n in [-1, 0, 1, 2, 4, 7] {
        for result in engine().match_candidates_to_jobs(&candidates, &jobs, top_n) {
            let cap = usize::try_from(top_n.max(0)).unwrap().min(jobs.len());
            assert!(result.matches.len() <= cap);
            assert!(result
                .matches
                .windows(2)
                .all(|w| w[0].score >= w[1].score));
        }
    }
}
