use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::infrastructure::AppState;
use crate::modules::recommendation::{GenerateRecommendationQuery, Recommendation};
use crate::shared::{AppError, AppResult, CallableRequest, CallableResponse};

/// Name the function is exposed under
pub const GENERATE_AI_RECOMMENDATION: &str = "generateAiRecommendation";

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
    pub message: String,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            recommendation: recommendation.recommendation().to_string(),
            message: recommendation.message().to_string(),
        }
    }
}

// ============================================================================
// Callable Commands
// ============================================================================

/// Callable entry point: `{"data": {"emotion", "intensity"?}}`
///
/// Only a broken envelope is refused. Any payload inside `data` gets an
/// answer; a non-object `data` reads as both fields absent.
pub async fn generate_ai_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<CallableResponse<RecommendationResponse>>> {
    let Json(body) = payload.map_err(|e| AppError::InvalidArgument(e.body_text()))?;
    let data = CallableRequest::from_body(body)?;

    let invocation_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "callable",
        function = GENERATE_AI_RECOMMENDATION,
        %invocation_id
    );

    let query = GenerateRecommendationQuery::from_fields(data.get("emotion"), data.get("intensity"));
    let recommendation = state
        .recommendations
        .generate(query)
        .instrument(span)
        .await;

    Ok(Json(CallableResponse::new(recommendation.into())))
}
