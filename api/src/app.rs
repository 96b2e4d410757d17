//! Application state and factory
//!
//! Wires storage, the SMS transport and the core services together and
//! builds the actix-web application.

use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpResponse};
use tracing_actix_web::TracingLogger;

use gk_core::domain::entities::FlowKind;
use gk_core::repositories::{
    AccountRepository, AttemptRepository, BanRepository, InMemoryAccountRepository,
    InMemoryAttemptRepository, InMemoryBanRepository, InMemoryRegistrationRepository,
    InMemoryVerificationRepository, RegistrationRepository, VerificationRepository,
};
use gk_core::services::{
    AttemptLedger, BanPolicy, BanPolicyConfig, CredentialIssuer, CredentialIssuerConfig,
    PasswordCredentialIssuer, PreRegistrationVault, RegistrationFlow, SignInGuard,
    SignInGuardConfig, SmsSender, VaultConfig, VerificationConfig, VerificationRegistry,
};
use gk_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlAttemptRepository, MySqlBanRepository,
    MySqlRegistrationRepository, MySqlVerificationRepository,
};
use gk_infra::sms::create_sms_sender;
use gk_shared::AppConfig;

use crate::handlers::ApiError;
use crate::routes;

/// Repositories backing one running instance
///
/// Sign-up and sign-in get separate attempt and ban storage.
#[derive(Clone)]
pub struct Storage {
    pub sign_up_attempts: Arc<dyn AttemptRepository>,
    pub sign_up_bans: Arc<dyn BanRepository>,
    pub sign_in_attempts: Arc<dyn AttemptRepository>,
    pub sign_in_bans: Arc<dyn BanRepository>,
    pub verifications: Arc<dyn VerificationRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub accounts: Arc<dyn AccountRepository>,
}

impl Storage {
    /// Process-local storage for development and tests
    pub fn in_memory() -> Self {
        Self {
            sign_up_attempts: Arc::new(InMemoryAttemptRepository::new()),
            sign_up_bans: Arc::new(InMemoryBanRepository::new()),
            sign_in_attempts: Arc::new(InMemoryAttemptRepository::new()),
            sign_in_bans: Arc::new(InMemoryBanRepository::new()),
            verifications: Arc::new(InMemoryVerificationRepository::new()),
            registrations: Arc::new(InMemoryRegistrationRepository::new()),
            accounts: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// MySQL-backed storage sharing one pool
    pub fn mysql(pool: &DatabasePool) -> Self {
        let pool = pool.get_pool();
        Self {
            sign_up_attempts: Arc::new(MySqlAttemptRepository::new(pool.clone(), FlowKind::SignUp)),
            sign_up_bans: Arc::new(MySqlBanRepository::new(pool.clone(), FlowKind::SignUp)),
            sign_in_attempts: Arc::new(MySqlAttemptRepository::new(pool.clone(), FlowKind::SignIn)),
            sign_in_bans: Arc::new(MySqlBanRepository::new(pool.clone(), FlowKind::SignIn)),
            verifications: Arc::new(MySqlVerificationRepository::new(pool.clone())),
            registrations: Arc::new(MySqlRegistrationRepository::new(pool.clone())),
            accounts: Arc::new(MySqlAccountRepository::new(pool.clone())),
        }
    }
}

/// Application state shared by all handlers
pub struct AppState {
    pub registration: Arc<RegistrationFlow>,
    pub sign_in: Arc<SignInGuard>,
    pub credentials: Arc<dyn CredentialIssuer>,
    pub trust_forwarded_headers: bool,
}

impl AppState {
    /// Build the services over the given storage and SMS transport
    pub fn new(storage: Storage, sms_sender: Arc<dyn SmsSender>, config: &AppConfig) -> Self {
        let sign_up_policy = Arc::new(BanPolicy::new(
            Arc::new(AttemptLedger::new(storage.sign_up_attempts, FlowKind::SignUp)),
            storage.sign_up_bans,
            BanPolicyConfig::from(&config.abuse.sign_up),
        ));
        let sign_in_policy = Arc::new(BanPolicy::new(
            Arc::new(AttemptLedger::new(storage.sign_in_attempts, FlowKind::SignIn)),
            storage.sign_in_bans,
            BanPolicyConfig::from(&config.abuse.sign_in),
        ));

        let issuer: Arc<dyn CredentialIssuer> = Arc::new(PasswordCredentialIssuer::new(
            Arc::clone(&storage.accounts),
            CredentialIssuerConfig::from(&config.auth),
        ));

        let vault = Arc::new(PreRegistrationVault::new(
            storage.registrations,
            VaultConfig::from(&config.registration),
        ));
        let registry = Arc::new(VerificationRegistry::new(
            storage.verifications,
            Arc::clone(&vault),
            Arc::clone(&sign_up_policy),
            sms_sender,
            VerificationConfig::from(&config.registration),
        ));

        let registration = Arc::new(RegistrationFlow::new(
            sign_up_policy,
            registry,
            vault,
            storage.accounts,
            Arc::clone(&issuer),
        ));
        let sign_in = Arc::new(SignInGuard::new(
            sign_in_policy,
            Arc::clone(&issuer),
            SignInGuardConfig::from(&config.auth),
        ));

        Self {
            registration,
            sign_in,
            credentials: issuer,
            trust_forwarded_headers: config.server.trust_forwarded_headers,
        }
    }
}

/// Build the application state described by `config`
///
/// `database.url = "memory://"` selects in-memory storage; anything else is a
/// MySQL url, migrated on startup when `database.run_migrations` is set.
pub async fn initialize(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = if config.database.is_memory() {
        tracing::warn!(event = "storage_selected", backend = "memory", "Using in-memory storage");
        Storage::in_memory()
    } else {
        let pool = DatabasePool::new(config.database.clone()).await?;
        if config.database.run_migrations {
            pool.run_migrations().await?;
        }
        tracing::info!(event = "storage_selected", backend = "mysql", "Using MySQL storage");
        Storage::mysql(&pool)
    };

    let sms_sender = create_sms_sender(&config.sms)?;

    Ok(AppState::new(storage, sms_sender, config))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Create and configure the application
pub fn create_app(
    state: web::Data<AppState>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .service(web::scope("/api/v1").configure(routes::auth::configure))
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(gk_shared::ErrorResponse::new(
        gk_shared::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
