//! Axum route handlers for the Opportunities API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;
use crate::opportunities::filters::{self, FilterState, TypeFilter};
use crate::opportunities::matcher::score_batch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpportunityQuery {
    /// When present and a profile exists, results carry match scores and
    /// are sorted by them.
    pub user_id: Option<Uuid>,
    pub search: Option<String>,
    #[serde(rename = "type", default)]
    pub type_filter: TypeFilter,
    pub sector: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpportunityListResponse {
    pub opportunities: Vec<Opportunity>,
    pub total: usize,
}

/// GET /api/v1/opportunities
///
/// Loads active opportunities from the datastore, attaches match scores
/// for the requesting user's profile (when available), sorts by score,
/// and applies the selected filters.
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    Query(query): Query<OpportunityQuery>,
) -> Result<Json<OpportunityListResponse>, AppError> {
    let mut opportunities = state.datastore.fetch_opportunities().await?;

    if let Some(user_id) = query.user_id {
        if let Some(profile) = state.datastore.fetch_profile(user_id).await? {
            score_batch(&mut opportunities, &profile);
            // Stable sort: ties keep the store's newest-first order.
            opportunities.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        }
    }

    let filter_state = FilterState {
        search: query.search,
        type_filter: query.type_filter,
        sector: query.sector,
        location: query.location,
    };
    let opportunities = filters::apply(opportunities, &filter_state);

    let total = opportunities.len();
    Ok(Json(OpportunityListResponse {
        opportunities,
        total,
    }))
}
