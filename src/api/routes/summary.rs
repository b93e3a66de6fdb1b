//! Summary Routes
//!
//! - GET /api/sales/summary?year=&threshold= - Summary statistics for the
//!   months meeting the threshold (threshold defaults to 0)

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SalesParams, SummaryResponse};
use crate::api::error::ApiResult;
use crate::api::params::required_year_and_threshold;
use crate::api::state::AppState;

/// GET /api/sales/summary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalesParams>,
) -> ApiResult<Json<SummaryResponse>> {
    let (year, threshold) = required_year_and_threshold(&params.year, &params.threshold)?;

    let summary = state.engine.summary(year, threshold as f64)?;

    Ok(Json(SummaryResponse {
        year,
        threshold,
        summary,
    }))
}
