use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alpha_core::domain::equity::EquityRecord;
use alpha_core::domain::market::MacroContext;
use alpha_core::domain::pick::{PriceAlert, TopPick};
use alpha_core::screen::filter::FilterThresholds;
use alpha_core::screen::ScreenError;
use alpha_core::sentiment::{SentimentSnapshot, ThreadRngSource};

const DEFAULT_TOP_PICKS_LIMIT: usize = 15;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = alpha_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let state = AppState {
        catalog: Arc::new(alpha_core::catalog::default_equities()),
        thresholds: Arc::new(FilterThresholds::from_env()),
    };

    tracing::info!(catalog = state.catalog.len(), "screening catalog loaded");

    let app = Router::new()
        .route("/", get(service_info))
        .route("/healthz", get(healthz))
        .route("/api/v1/top-picks", get(get_top_picks))
        .route("/api/v1/macro-context", get(get_macro_context))
        .route("/api/v1/sentiment/:ticker", get(get_sentiment))
        .route("/api/v1/alerts", get(get_alerts))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Alpha Terminal API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
    }))
}

#[derive(Debug, Clone)]
struct AppState {
    catalog: Arc<Vec<EquityRecord>>,
    thresholds: Arc<FilterThresholds>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct TopPicksParams {
    limit: Option<usize>,
}

async fn get_top_picks(
    State(state): State<AppState>,
    Query(params): Query<TopPicksParams>,
) -> Result<Json<Vec<TopPick>>, (StatusCode, Json<ErrorBody>)> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_PICKS_LIMIT);
    let mut rng = ThreadRngSource;

    match alpha_core::screen::build_top_picks(&state.catalog, &state.thresholds, limit, &mut rng) {
        Ok(picks) => Ok(Json(picks)),
        Err(err) => {
            if let Some(screen_err) = err.downcast_ref::<ScreenError>() {
                return Err((
                    StatusCode::NOT_FOUND,
                    Json(ErrorBody {
                        error: screen_err.to_string(),
                    }),
                ));
            }

            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "top picks pipeline failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: format!("{err:#}"),
                }),
            ))
        }
    }
}

async fn get_macro_context() -> Json<MacroContext> {
    Json(alpha_core::market::macro_context())
}

// Any ticker string is accepted; the mock does not validate against the
// catalog.
async fn get_sentiment(Path(ticker): Path<String>) -> Json<SentimentSnapshot> {
    let mut rng = ThreadRngSource;
    Json(alpha_core::sentiment::analyze(&ticker, &mut rng))
}

async fn get_alerts(State(state): State<AppState>) -> Json<Vec<PriceAlert>> {
    Json(alpha_core::screen::build_alerts(
        &state.catalog,
        &state.thresholds,
    ))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &alpha_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
