//! Sign-up endpoints

use actix_web::{web, HttpRequest, HttpResponse};
use gk_core::domain::entities::AccountProfile;
use gk_core::services::NewAccount;
use gk_shared::phone::{mask_phone_number, normalize_phone_number};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{
    AccountResponse, CompleteRegistrationRequest, ConfirmCodeRequest, ConfirmCodeResponse,
    SendCodeRequest, SendCodeResponse,
};
use crate::handlers::{client_ip, ApiError};

/// Handler for POST /api/v1/auth/signup/send-code
///
/// # Request Body
///
/// ```json
/// { "phone_number": "09123456789" }
/// ```
///
/// # Responses
/// - 200 `{ "success": true }`
/// - 400 invalid phone number
/// - 409 phone already registered
/// - 429 phone or ip banned
/// - 503 SMS transport failure
pub async fn send_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let phone = normalize_phone_number(&request.phone_number);
    let ip = client_ip(&req, state.trust_forwarded_headers);

    tracing::info!(
        event = "sign_up_code_requested",
        phone = %mask_phone_number(&phone),
        ip = %ip,
        "Processing send-code request"
    );

    state.registration.request_code(&phone, &ip).await?;

    Ok(HttpResponse::Ok().json(SendCodeResponse { success: true }))
}

/// Handler for POST /api/v1/auth/signup/confirm-code
///
/// Returns the one-time `registration_id` that completes the sign-up.
pub async fn confirm_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ConfirmCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let phone = normalize_phone_number(&request.phone_number);
    let ip = client_ip(&req, state.trust_forwarded_headers);

    let registration_id = state
        .registration
        .confirm_code(&phone, request.code.trim(), &ip)
        .await?;

    Ok(HttpResponse::Ok().json(ConfirmCodeResponse { registration_id }))
}

/// Handler for POST /api/v1/auth/signup/complete
///
/// The account is bound to the phone number the registration id was minted for.
pub async fn complete_registration(
    state: web::Data<AppState>,
    request: web::Json<CompleteRegistrationRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let request = request.into_inner();
    let fields = NewAccount::new(
        AccountProfile {
            username: request.username,
            email: request.email.unwrap_or_default(),
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
        },
        request.password,
    );

    let account = state
        .registration
        .complete_registration(&request.registration_id, fields)
        .await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}
