//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::analysis::analyze_stock;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::models::{MarketSentiment, PricePoint, Quote, TechnicalAnalysis, Timeframe};
use crate::services::{
    market_sentiment, MarketDataError, MarketDataProvider, SimulatedMarketDataProvider,
};

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub market: Arc<Mutex<SimulatedMarketDataProvider>>,
    pub default_timeframe: Timeframe,
}

impl AppState {
    pub fn new(
        metrics: Arc<Metrics>,
        market: SimulatedMarketDataProvider,
        default_timeframe: Timeframe,
    ) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            market: Arc::new(Mutex::new(market)),
            default_timeframe,
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "stockscope-analysis-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct TimeframeQuery {
    timeframe: Option<String>,
}

impl TimeframeQuery {
    fn resolve(&self, default: Timeframe) -> Result<Timeframe, StatusCode> {
        match &self.timeframe {
            Some(raw) => raw.parse().map_err(|e: MarketDataError| {
                warn!(error = %e, "Rejected timeframe");
                StatusCode::BAD_REQUEST
            }),
            None => Ok(default),
        }
    }
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    symbol: String,
    timeframe: Timeframe,
    points: Vec<PricePoint>,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    symbol: String,
    timeframe: Timeframe,
    #[serde(flatten)]
    analysis: TechnicalAnalysis,
}

fn status_for(error: &MarketDataError) -> StatusCode {
    match error {
        MarketDataError::UnknownSymbol(_) => StatusCode::NOT_FOUND,
        MarketDataError::UnknownTimeframe(_) => StatusCode::BAD_REQUEST,
    }
}

/// List all quotes after one simulated refresh
async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, StatusCode> {
    let mut market = state.market.lock().await;
    market.quotes().map(Json).map_err(|e| status_for(&e))
}

/// Get a single quote by symbol
async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, StatusCode> {
    let mut market = state.market.lock().await;
    market.quote(&symbol).map(Json).map_err(|e| {
        warn!(error = %e, symbol = %symbol, "Quote lookup failed");
        status_for(&e)
    })
}

async fn load_history(
    state: &AppState,
    symbol: &str,
    timeframe: Timeframe,
) -> Result<Vec<PricePoint>, StatusCode> {
    let mut market = state.market.lock().await;
    market.historical_data(symbol, timeframe).map_err(|e| {
        warn!(error = %e, symbol = %symbol, "Price history unavailable");
        status_for(&e)
    })
}

/// Get the simulated price history for a symbol
async fn get_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<TimeframeQuery>,
) -> Result<Json<HistoryResponse>, StatusCode> {
    let timeframe = params.resolve(state.default_timeframe)?;
    let points = load_history(&state, &symbol, timeframe).await?;
    Ok(Json(HistoryResponse {
        symbol,
        timeframe,
        points,
    }))
}

/// Run the technical analysis over a freshly generated history
async fn get_analysis(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<TimeframeQuery>,
) -> Result<Json<AnalysisResponse>, StatusCode> {
    let timeframe = params.resolve(state.default_timeframe)?;
    // unknown symbols are 404, not an "Insufficient data" analysis of an empty history
    let points = load_history(&state, &symbol, timeframe).await?;

    let analysis = analyze_stock(&symbol, &points);
    state.metrics.record_analysis(&analysis);

    Ok(Json(AnalysisResponse {
        symbol,
        timeframe,
        analysis,
    }))
}

async fn get_market_sentiment(
    State(state): State<AppState>,
) -> Result<Json<MarketSentiment>, StatusCode> {
    let quotes = {
        let mut market = state.market.lock().await;
        market.quotes().map_err(|e| status_for(&e))?
    };
    Ok(Json(market_sentiment(&quotes)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/{symbol}", get(get_stock))
        .route("/api/stocks/{symbol}/history", get(get_history))
        .route("/api/stocks/{symbol}/analysis", get(get_analysis))
        .route("/api/market/sentiment", get(get_market_sentiment))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new()?);

    let market = match config.simulation_seed {
        Some(seed) => {
            info!(seed = seed, "Using seeded market simulation");
            SimulatedMarketDataProvider::with_seed(seed)
        }
        None => SimulatedMarketDataProvider::new(),
    };

    let state = AppState::new(metrics, market, config.default_timeframe);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
