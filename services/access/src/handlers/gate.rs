use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::gate_code::RotateGateCodeUseCase;

#[derive(Serialize)]
pub struct GateCodeResponse {
    pub code: String,
    pub date: String,
}

/// Rotation is lazy: the first fetch on a new day mints that day's code.
pub async fn get_gate_code(
    State(state): State<AppState>,
) -> Result<Json<GateCodeResponse>, AccessServiceError> {
    let usecase = RotateGateCodeUseCase {
        passes: state.gate_pass_repo(),
    };
    let today = chrono::Local::now().date_naive();
    let pass = usecase.execute(today).await?;
    Ok(Json(GateCodeResponse {
        code: pass.code,
        date: pass.date.format("%Y-%m-%d").to_string(),
    }))
}
