//! Sales Routes
//!
//! Exposes the dataset and the threshold filter over HTTP.
//!
//! - GET /api/sales - Dataset, year record or filtered year, by parameters
//! - GET /api/sales/years - Known years
//!
//! `GET /api/sales` behaves as follows:
//!
//! | year    | threshold | response                       |
//! |---------|-----------|--------------------------------|
//! | absent  | absent    | `{ years, data }`              |
//! | present | absent    | full year record               |
//! | present | present   | filtered year                  |
//! | absent  | present   | `{ years, data }` (threshold ignored) |

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DatasetResponse, SalesParams, SalesResponse, YearsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::params::{parse_threshold, parse_year, present};
use crate::api::state::AppState;
use crate::query::QueryEngine;

/// GET /api/sales
pub async fn get_sales(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalesParams>,
) -> ApiResult<Response> {
    let response = resolve_sales_request(&state.engine, &params)?;
    Ok(Json(response).into_response())
}

/// GET /api/sales/years
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.store.years(),
    })
}

/// Decide the response for a set of sales parameters
pub fn resolve_sales_request<'a>(
    engine: &'a QueryEngine,
    params: &SalesParams,
) -> ApiResult<SalesResponse<'a>> {
    match (present(&params.year), present(&params.threshold)) {
        (Some(year), Some(threshold)) => {
            let (year, threshold) = match (parse_year(year), parse_threshold(threshold)) {
                (Some(year), Some(threshold)) => (year, threshold),
                _ => {
                    return Err(ApiError::InvalidParameter(
                        "Invalid year or threshold parameter".to_string(),
                    ))
                }
            };

            let result = engine.filter_by_year_and_threshold(year, threshold as f64)?;
            Ok(SalesResponse::Filtered(result))
        }
        (Some(year), None) => {
            let year = parse_year(year)
                .ok_or_else(|| ApiError::InvalidParameter("Invalid year parameter".to_string()))?;

            let record = engine.find_year(year)?;
            Ok(SalesResponse::Year(record))
        }
        // A threshold without a year is ignored
        (None, _) => {
            let store = engine.store();
            Ok(SalesResponse::All(DatasetResponse {
                years: store.years(),
                data: store.dataset(),
            }))
        }
    }
}
