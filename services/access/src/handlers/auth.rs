use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use gatepass_auth_types::cookie::{clear_verified_phone_cookie, set_verified_phone_cookie};
use gatepass_auth_types::verified::VerifiedPhone;

use crate::domain::repository::ResidentRepository as _;
use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::otp::{IssueOtpInput, IssueOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

#[derive(Deserialize)]
pub struct SendCodeRequest {
    pub phone: String,
}

/// Canonical local phone echoed back; the code itself never leaves the
/// messaging channel.
#[derive(Serialize)]
pub struct PhoneResponse {
    pub phone: String,
}

pub async fn send_code(
    State(state): State<AppState>,
    Json(body): Json<SendCodeRequest>,
) -> Result<(StatusCode, Json<PhoneResponse>), AccessServiceError> {
    let usecase = IssueOtpUseCase {
        residents: state.resident_repo(),
        challenges: state.otp_challenge_repo(),
        sender: state.sms.clone(),
    };
    let output = usecase.execute(IssueOtpInput { phone: body.phone }).await?;
    Ok((
        StatusCode::CREATED,
        Json(PhoneResponse {
            phone: output.phone.local().to_owned(),
        }),
    ))
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub phone: String,
    pub code: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CreateSessionRequest>,
) -> Result<(StatusCode, CookieJar, Json<PhoneResponse>), AccessServiceError> {
    let usecase = VerifyOtpUseCase {
        challenges: state.otp_challenge_repo(),
        max_attempts: state.max_verify_attempts,
    };
    let output = usecase
        .execute(VerifyOtpInput {
            phone: body.phone,
            code: body.code,
        })
        .await?;

    let jar = set_verified_phone_cookie(jar, &output.phone, state.secure_cookies);
    Ok((
        StatusCode::CREATED,
        jar,
        Json(PhoneResponse {
            phone: output.phone.local().to_owned(),
        }),
    ))
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub phone: String,
    pub full_name: String,
    pub house_number: String,
    pub is_admin: bool,
}

pub async fn check_session(
    State(state): State<AppState>,
    VerifiedPhone(phone): VerifiedPhone,
) -> Result<Json<SessionResponse>, AccessServiceError> {
    // A cookie can outlive its resident; a deleted resident holds a cookie
    // that no longer maps to anyone.
    let resident = state
        .resident_repo()
        .find_by_phone(phone.local())
        .await?
        .ok_or(AccessServiceError::PhoneNotRegistered)?;

    Ok(Json(SessionResponse {
        phone: resident.phone,
        full_name: resident.full_name,
        house_number: resident.house_number,
        is_admin: resident.is_admin,
    }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, CookieJar) {
    (
        StatusCode::NO_CONTENT,
        clear_verified_phone_cookie(jar, state.secure_cookies),
    )
}
