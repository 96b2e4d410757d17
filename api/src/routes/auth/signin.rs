//! Sign-in endpoints

use actix_web::{web, HttpRequest, HttpResponse};
use gk_shared::phone::normalize_phone_number;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{
    RefreshTokenRequest, RefreshTokenResponse, SignInRequest, SignInResponse, UserExistsRequest,
    UserExistsResponse,
};
use crate::handlers::{client_ip, ApiError};

/// Handler for POST /api/v1/auth/signin
///
/// # Responses
/// - 200 `{ "access": "...", "refresh": "...", "expires_in": 300 }`
/// - 401 wrong password or unknown account
/// - 429 phone or ip banned
pub async fn sign_in(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SignInRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let phone = normalize_phone_number(&request.phone_number);
    let ip = client_ip(&req, state.trust_forwarded_headers);

    let tokens = state.sign_in.sign_in(&phone, &request.password, &ip).await?;

    Ok(HttpResponse::Ok().json(SignInResponse::from(tokens)))
}

/// Handler for POST /api/v1/auth/signin/user-exists
pub async fn user_exists(
    state: web::Data<AppState>,
    request: web::Json<UserExistsRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let phone = normalize_phone_number(&request.phone_number);
    let exist = state.registration.account_exists(&phone).await?;

    Ok(HttpResponse::Ok().json(UserExistsResponse { exist }))
}

/// Handler for POST /api/v1/auth/token/refresh
///
/// # Responses
/// - 200 `{ "access": "...", "expires_in": 300 }`
/// - 401 invalid, expired or non-refresh token
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let tokens = state.credentials.refresh(&request.refresh).await?;

    Ok(HttpResponse::Ok().json(RefreshTokenResponse::from(tokens)))
}
