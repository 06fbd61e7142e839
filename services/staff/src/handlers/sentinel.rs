use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::sentinel::EnsureSentinelsUseCase;

#[derive(Serialize)]
pub struct SentinelsResponse {
    pub reserve_department_id: String,
    pub unemployed_position_id: String,
}

// ── GET /sentinels ───────────────────────────────────────────────────────────

/// Ids of the Reserve department and the Unemployed position, creating
/// either one if it is missing.
pub async fn get_sentinels(
    State(state): State<AppState>,
) -> Result<Json<SentinelsResponse>, StaffServiceError> {
    let usecase = EnsureSentinelsUseCase {
        store: state.staff_store(),
    };
    let sentinels = usecase.execute().await?;
    Ok(Json(SentinelsResponse {
        reserve_department_id: sentinels.reserve_department_id.to_string(),
        unemployed_position_id: sentinels.unemployed_position_id.to_string(),
    }))
}
