use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
    http::{Method, Request},
    middleware,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use thiserror::Error;
use tracing::info;

use hx_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use hx_common::settings::{EngineSettings, SettingsError};
use hx_common::MatchingEngine;

pub mod error;
pub mod handlers;

use handlers::{health, matches};

const APP_NAME: &str = "hx-api";

/// Failures before the server accepts its first request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "hx-api", about = "HTTP API for matching candidates to job postings")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "HX_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,

    /// Maximum request body size in KiB
    #[arg(long, env = "HX_BODY_LIMIT_KB", default_value_t = 1024)]
    body_limit_kb: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, StartupError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cli.body_limit_kb == 0 {
            return Err(StartupError::Config(
                "HX_BODY_LIMIT_KB must be positive".into(),
            ));
        }
        let body_limit_bytes = cli.body_limit_kb.checked_mul(1024).ok_or_else(|| {
            StartupError::Config(format!(
                "HX_BODY_LIMIT_KB {} is too large",
                cli.body_limit_kb
            ))
        })?;

        Ok(Self {
            port: cli.port,
            cors_origins,
            body_limit_bytes,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 8000,
            cors_origins: vec!["http://localhost:3000".into()],
            body_limit_bytes: 64 * 1024,
        }
    }
}

/// Shared, read-only state. The engine is built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub settings: EngineSettings,
    pub engine: MatchingEngine,
}

impl AppState {
    pub fn new(config: AppConfig, settings: EngineSettings) -> Self {
        Self {
            engine: MatchingEngine::new(settings.weights),
            config,
            settings,
        }
    }
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

async fn attach_request_id_context(req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    error::with_request_id(request_id, next.run(req)).await
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let body_limit = state.config.body_limit_bytes;

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::livez))
        .route("/livez", get(health::livez))
        .route("/match", post(matches::run_match))
        .fallback(health::not_found)
        .layer(middleware::from_fn(attach_request_id_context))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid,
        ))
        .layer(cors)
        .with_state(state)
}

pub fn test_state() -> SharedState {
    Arc::new(AppState::new(AppConfig::for_tests(), EngineSettings::default()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;
    let settings = EngineSettings::from_env()?;

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let state = Arc::new(AppState::new(config, settings));
    let app = create_router(state);

    info!(
        %addr,
        default_top_n = settings.default_top_n,
        max_top_n = settings.max_top_n,
        weights = ?settings.weights,
        "hx-api listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("hx-api").chain(args.iter().copied()))
    }

    #[test]
    fn parses_cors_origin_list() {
        let config = AppConfig::from_cli(cli(&[
            "--cors-origins",
            "http://a.test, ,http://b.test",
        ]))
        .unwrap();

        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn rejects_zero_body_limit() {
        let err = AppConfig::from_cli(cli(&["--body-limit-kb", "0"])).unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
    }

    #[test]
    fn oversized_body_limit_is_a_config_error() {
        let huge = usize::MAX.to_string();
        let err = AppConfig::from_cli(cli(&["--body-limit-kb", &huge])).unwrap_err();
        assert!(matches!(err, StartupError::Config(ref msg) if msg.contains("too large")));
    }

    #[test]
    fn settings_errors_surface_as_startup_errors() {
        let err: StartupError = SettingsError::TopN { default: 30, max: 20 }.into();
        assert_eq!(err.to_string(), "default top_n 30 must be within 1..=20");
    }

    #[test]
    fn state_engine_uses_configured_weights() {
        let state = test_state();
        assert_eq!(state.engine.weights(), &state.settings.weights);
    }
}
