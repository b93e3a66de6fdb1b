//! Chart Routes
//!
//! - GET /api/sales/chart?year=&threshold=&type= - Series payload for a bar,
//!   line or pie chart of the filtered months

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::ApiResult;
use crate::api::params::{chart_type, required_year_and_threshold};
use crate::api::state::AppState;
use crate::query::ChartData;

/// GET /api/sales/chart
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<ChartData>> {
    let chart_type = chart_type(&params.chart_type)?;
    let (year, threshold) = required_year_and_threshold(&params.year, &params.threshold)?;

    let result = state
        .engine
        .filter_by_year_and_threshold(year, threshold as f64)?;

    Ok(Json(ChartData::build(chart_type, &result)))
}
