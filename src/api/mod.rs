//! Salesboard REST API
//!
//! HTTP API layer for Salesboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Sales
//! - `GET /api/sales` - Full dataset, a year's record, or a filtered year
//! - `GET /api/sales/years` - Known years
//! - `GET /api/sales/summary` - Summary statistics for a year and threshold
//! - `GET /api/sales/chart` - Bar, line or pie series for a year and threshold
//!
//! ## Dashboard
//! - `GET /api/dashboard` - Filtered months, summary and chart together
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use salesboard::api::{serve, ApiConfig, AppState};
//! use salesboard::storage::{DatasetSource, DatasetStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let store = Arc::new(DatasetStore::builtin());
//!     let state = AppState::new(store, DatasetSource::Builtin, config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod params;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let api_routes = Router::new()
        // Sales routes
        .route("/sales", get(routes::sales::get_sales))
        .route("/sales/years", get(routes::sales::list_years))
        .route("/sales/summary", get(routes::summary::get_summary))
        .route("/sales/chart", get(routes::chart::get_chart))
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .with_state(shared_state);

    with_middleware(router, &config)
}

/// Apply panic recovery, timeout, CORS and tracing layers
fn with_middleware(router: Router, config: &ApiConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins, permissive when none are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Salesboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Salesboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::builtin())
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, _) = send(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["startedAt"].is_string());
    }

    #[tokio::test]
    async fn test_sales_without_parameters() {
        let (status, body) = send(create_test_app(), "/api/sales").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!([2022, 2023, 2024]));

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["year"], 2022);
        assert_eq!(data[0]["totalRevenue"], 300_045_000u64);
        assert_eq!(data[2]["data"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_sales_threshold_without_year() {
        let (status, body) = send(create_test_app(), "/api/sales?threshold=9000000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!([2022, 2023, 2024]));
        assert_eq!(body["data"][0]["data"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_sales_year_only() {
        let (status, body) = send(create_test_app(), "/api/sales?year=2023").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2023);
        assert_eq!(body["totalUnits"], 8070);
        assert_eq!(body["data"].as_array().unwrap().len(), 12);
        assert_eq!(body["data"][0]["month"], "Jan");
    }

    #[tokio::test]
    async fn test_sales_filtered() {
        let (status, body) =
            send(create_test_app(), "/api/sales?year=2024&threshold=5000000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2024);
        assert_eq!(body["totalRevenue"], 368_935_000u64);
        assert_eq!(body["totalUnits"], 8890);

        let months: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["month"].as_str().unwrap())
            .collect();
        assert_eq!(
            months,
            vec!["Mar", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[tokio::test]
    async fn test_sales_lenient_numbers() {
        let (status, body) =
            send(create_test_app(), "/api/sales?year=2024&threshold=5000000.5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 9);

        let (status, body) = send(create_test_app(), "/api/sales?year=2024abc&threshold=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2024);
        assert_eq!(body["data"].as_array().unwrap().len(), 12);

        let (status, body) = send(
            create_test_app(),
            "/api/sales?year=2024&threshold=99999999999999999999",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
        assert_eq!(body["totalUnits"], 8890);
    }

    #[tokio::test]
    async fn test_sales_filtered_to_nothing() {
        let (status, body) =
            send(create_test_app(), "/api/sales?year=2022&threshold=100000000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
        assert_eq!(body["totalUnits"], 7230);
    }

    #[tokio::test]
    async fn test_sales_invalid_parameter() {
        let (status, body) = send(create_test_app(), "/api/sales?year=2024&threshold=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
        assert_eq!(
            body["error"]["message"],
            "Invalid year or threshold parameter"
        );
        assert!(body["request_id"].is_string());

        let (status, body) = send(create_test_app(), "/api/sales?year=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid year parameter");
    }

    #[tokio::test]
    async fn test_sales_unknown_year() {
        let (status, body) = send(create_test_app(), "/api/sales?year=2025&threshold=0").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NO_DATA_FOR_YEAR");

        let (status, _) = send(create_test_app(), "/api/sales?year=2025").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_years() {
        let (status, body) = send(create_test_app(), "/api/sales/years").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!([2022, 2023, 2024]));
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = send(create_test_app(), "/api/sales/summary?year=2022").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["threshold"], 0);
        assert_eq!(body["summary"]["status"], "ok");
        assert_eq!(body["summary"]["totalSales"], 60_009_000u64);
        assert_eq!(body["summary"]["totalUnits"], 7230);
        assert_eq!(body["summary"]["monthsDisplayed"], 12);

        let response: dto::SummaryResponse = serde_json::from_value(body).unwrap();
        let stats = response.summary.stats().unwrap();
        assert_eq!(stats.rounded_avg_sales(), 5_000_750);
    }

    #[tokio::test]
    async fn test_summary_empty() {
        let (status, body) =
            send(create_test_app(), "/api/sales/summary?year=2022&threshold=99999999").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], serde_json::json!({ "status": "empty" }));
    }

    #[tokio::test]
    async fn test_summary_requires_year() {
        let (status, _) = send(create_test_app(), "/api/sales/summary?threshold=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(create_test_app(), "/api/sales/summary?year=1990").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart() {
        let (status, body) = send(
            create_test_app(),
            "/api/sales/chart?year=2024&threshold=8000000&type=pie",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chartType"], "pie");
        assert_eq!(body["title"], "2024 Sales Performance");
        assert_eq!(body["labels"], serde_json::json!(["Nov", "Dec"]));
        assert_eq!(body["shares"].as_array().unwrap().len(), 2);

        let (status, _) = send(create_test_app(), "/api/sales/chart?year=2024&type=radar").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_defaults() {
        let (status, body) = send(create_test_app(), "/api/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["year"], 2024);
        assert_eq!(body["state"]["chartType"], "bar");
        assert_eq!(body["summary"]["monthsDisplayed"], 12);
        assert_eq!(body["chart"]["values"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        async fn boom() -> &'static str {
            panic!("unexpected state")
        }

        let router = Router::new().route("/boom", get(boom));
        let app = with_middleware(router, &ApiConfig::default());

        let (status, body) = send(app, "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = send(create_test_app(), "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
