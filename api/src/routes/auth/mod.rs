//! Authentication route handlers
//!
//! - Sign-up: send code, confirm code, complete registration
//! - Sign-in: password sign-in, user-exists query, access token refresh

pub mod signin;
pub mod signup;

use actix_web::web;

/// Mount the auth routes under the current scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup/send-code", web::post().to(signup::send_code))
            .route("/signup/confirm-code", web::post().to(signup::confirm_code))
            .route("/signup/complete", web::post().to(signup::complete_registration))
            .route("/signin", web::post().to(signin::sign_in))
            .route("/signin/user-exists", web::post().to(signin::user_exists))
            .route("/token/refresh", web::post().to(signin::refresh_token)),
    );
}
