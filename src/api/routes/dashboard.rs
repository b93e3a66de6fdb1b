//! Dashboard Routes
//!
//! - GET /api/dashboard?year=&threshold=&type= - Filtered months, summary and
//!   chart in one response. Defaults: year 2024, threshold 0, bar chart.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::ApiResult;
use crate::api::params::{chart_type, defaulted_year_and_threshold};
use crate::api::state::AppState;
use crate::query::{DashboardState, DashboardView};

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<DashboardView>> {
    let chart_type = chart_type(&params.chart_type)?;
    let (year, threshold) = defaulted_year_and_threshold(&params.year, &params.threshold)?;

    let view = DashboardState::default()
        .year(year)
        .threshold(threshold as f64)
        .chart_type(chart_type)
        .view(&state.engine)?;

    Ok(Json(view))
}
