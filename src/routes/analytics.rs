// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Analytics dashboard route.

use crate::analytics::{self, CategoryCount, MonthlyBucket, SummaryStats, TimeWindow};
use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/analytics", get(get_analytics))
}

#[derive(Deserialize)]
struct AnalyticsQuery {
    /// Chart time range: `3months`, `6months`, `1year` or `all`
    #[serde(default = "default_range")]
    range: String,
}

fn default_range() -> String {
    "6months".to_string()
}

/// Everything the dashboard renders for one time range.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AnalyticsResponse {
    pub stats: SummaryStats,
    pub monthly: Vec<MonthlyBucket>,
    pub boards: Vec<CategoryCount>,
    pub conditions: Vec<CategoryCount>,
}

/// Aggregate the session log for the dashboard charts.
async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsResponse>> {
    let window = TimeWindow::parse(&params.range).ok_or_else(|| {
        AppError::BadRequest(
            "Invalid 'range' parameter: expected 3months, 6months, 1year or all".to_string(),
        )
    })?;

    let sessions = state.sessions.list();
    let now = Utc::now();
    let filtered = analytics::filter_by_window(&sessions, window, now);

    Ok(Json(AnalyticsResponse {
        stats: analytics::summary_stats(&filtered),
        monthly: analytics::monthly_buckets(&filtered, window.month_span(), now),
        boards: analytics::distribution(&filtered, |s| s.board.as_str()),
        conditions: analytics::distribution(&filtered, |s| s.conditions.as_str()),
    }))
}
