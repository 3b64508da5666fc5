use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use gate_api::app::create_app;
use gate_api::routes::auth::AppState;
use gate_core::services::auth::AuthService;
use gate_core::services::registration::RegistrationService;
use gate_core::services::token::{TokenService, TokenServiceConfig};
use gate_infra::database::{create_pool, MySqlUserRepository};
use gate_infra::security::BcryptPasswordHasher;
use gate_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Gatehouse API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            panic!("JWT_SECRET must be set in production");
        }
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    // Wire up infrastructure
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool));
    let password_hasher = Arc::new(BcryptPasswordHasher::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));

    // Wire up services with dependency injection
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        password_hasher.clone(),
        token_service.clone(),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        user_repository,
        password_hasher,
        token_service,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        registration_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
