use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::info;

use hx_common::api::match_request::{MatchRequest, RequestError};
use hx_common::api::match_response::MatchResponse;
use hx_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use hx_common::settings::{EngineSettings, SettingsError};
use hx_common::{run_id, CandidateMatches, MatchingEngine};

const APP_NAME: &str = "hx-match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "hx-match", about = "Rank job postings for candidate profiles")]
struct Cli {
    /// JSON file with `candidates`, `jobs` and optional `top_n`/`weights`. Reads stdin when absent or `-`.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Overrides `top_n` from the input file
    #[arg(long)]
    top_n: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Year used as "now" for recency windows
    #[arg(long)]
    reference_year: Option<i32>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid input json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_match(
    mut request: MatchRequest,
    cli: &Cli,
    settings: &EngineSettings,
) -> Result<MatchResponse, CliError> {
    if cli.top_n.is_some() {
        request.top_n = cli.top_n;
    }
    let mut engine = MatchingEngine::new(settings.weights);
    if let Some(year) = cli.reference_year {
        engine = engine.with_reference_year(year);
    }

    let request = request.validate(settings, engine.current_year())?;
    if let Some(weights) = request.weights {
        engine = engine.with_weights(weights);
    }

    let results = engine.match_candidates_to_jobs(&request.candidates, &request.jobs, request.top_n);

    Ok(MatchResponse {
        match_run_id: run_id::generate(),
        weights: *engine.weights(),
        results,
    })
}

fn render_table(results: &[CandidateMatches]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:<16} {:>6}  {:>6} {:>6} {:>6} {:>6} {:>6}\n",
        "candidate", "job", "score", "skill", "exp", "salary", "loc", "ind"
    ));

    for result in results {
        if result.matches.is_empty() {
            out.push_str(&format!("{:<16} {:<16}\n", result.candidate.id, "-"));
        }
        for m in &result.matches {
            let b = m.breakdown;
            out.push_str(&format!(
                "{:<16} {:<16} {:>6.4}  {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2}\n",
                result.candidate.id,
                m.job.id,
                m.score,
                b.skills,
                b.experience,
                b.salary,
                b.location,
                b.industry
            ));
        }
    }

    out
}

fn render(response: &MatchResponse, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Table => render_table(&response.results),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(response)? + "\n",
        OutputFormat::Json => serde_json::to_string(response)? + "\n",
    };
    Ok(rendered)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = EngineSettings::from_env()?;
    let raw = read_input(cli.input.as_ref())?;
    let request: MatchRequest = serde_json::from_str(&raw)?;

    let response = run_match(request, &cli, &settings)?;
    info!(
        match_run_id = %response.match_run_id,
        candidates = response.results.len(),
        "match run completed"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(render(&response, cli.format, cli.pretty)?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    if let Err(err) = run(Cli::parse()) {
        tracing::error!(error = %err, "hx-match failed");
        eprintln!("hx-match: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "candidates": [
            {"id": "c1", "full_name": "Ada", "years_experience": 6, "skills": ["Rust", "SQL"]}
        ],
        "jobs": [
            {"id": "j-go", "title": "Go Engineer", "required_skills": ["Go"]},
            {"id": "j-rust", "title": "Rust Engineer", "required_skills": ["Rust"], "minimum_years_experience": 3},
            {"id": "j-sql", "title": "Analyst", "required_skills": ["SQL", "Excel"]}
        ]
    }"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("hx-match").chain(args.iter().copied()))
    }

    fn request() -> MatchRequest {
        serde_json::from_str(INPUT).unwrap()
    }

    #[test]
    fn ranks_and_applies_default_top_n() {
        let response = run_match(request(), &cli(&[]), &EngineSettings::default()).unwrap();

        let ids: Vec<_> = response.results[0]
            .matches
            .iter()
            .map(|m| m.job.id.as_str())
            .collect();
        assert_eq!(ids[0], "j-rust");
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn flag_overrides_input_top_n() {
        let response =
            run_match(request(), &cli(&["--top-n", "1"]), &EngineSettings::default()).unwrap();
        assert_eq!(response.results[0].matches.len(), 1);
    }

    #[test]
    fn out_of_range_top_n_is_rejected() {
        let err = run_match(request(), &cli(&["--top-n", "0"]), &EngineSettings::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Request(RequestError::TopN { value: 0, .. })));
    }

    #[test]
    fn reference_year_is_deterministic() {
        let args = cli(&["--reference-year", "2024"]);
        let a = run_match(request(), &args, &EngineSettings::default()).unwrap();
        let b = run_match(request(), &args, &EngineSettings::default()).unwrap();
        assert_eq!(a.results, b.results);
    }

    #[test]
    fn table_lists_each_match_row() {
        let response = run_match(request(), &cli(&[]), &EngineSettings::default()).unwrap();
        let table = render(&response, OutputFormat::Table, false).unwrap();

        assert!(table.starts_with("candidate"));
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("j-rust"));
    }

    #[test]
    fn json_output_round_trips_scores() {
        let response = run_match(request(), &cli(&[]), &EngineSettings::default()).unwrap();
        let json = render(&response, OutputFormat::Json, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["results"][0]["matches"][0]["job"]["id"], "j-rust");
        assert_eq!(parsed["match_run_id"].as_str().unwrap().len(), 26);
    }
}
