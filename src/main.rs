//! Mindful Path API server.

use std::error::Error;
use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mindful_path::adapters::access::PaymentAccessChecker;
use mindful_path::adapters::auth::JwtSessionValidator;
use mindful_path::adapters::http::{api_router, AssessmentAppState, AuthState, PaymentAppState};
use mindful_path::adapters::paypal::{PayPalConfig, PayPalGateway};
use mindful_path::adapters::postgres::{
    PostgresAssessmentReader, PostgresAssessmentRepository, PostgresPaymentReader,
    PostgresPaymentRepository,
};
use mindful_path::config::{AppConfig, ServerConfig};
use mindful_path::domain::assessment::QuestionBank;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // --- Configuration & logging ---
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;
    info!(
        environment = ?config.server.environment,
        paypal_mode = ?config.payment.paypal_mode,
        "Configuration loaded"
    );

    let question_bank = QuestionBank::standard()?;

    // --- Database ---
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // --- Adapters ---
    let payment_reader = Arc::new(PostgresPaymentReader::new(pool.clone()));
    let payment_repository = Arc::new(PostgresPaymentRepository::new(pool.clone()));
    let assessment_reader = Arc::new(PostgresAssessmentReader::new(pool.clone()));
    let assessment_repository = Arc::new(PostgresAssessmentRepository::new(pool));

    let gateway = PayPalGateway::new(PayPalConfig::new(
        config.payment.paypal_mode,
        config.payment.paypal_client_id.clone(),
        config.payment.paypal_client_secret.clone(),
    ));

    let mut validator = JwtSessionValidator::new(config.auth.jwt_secret.clone());
    if let Some(issuer) = &config.auth.issuer {
        validator = validator.with_issuer(issuer.clone());
    }
    let auth: AuthState = Arc::new(validator);

    let assessment_state = AssessmentAppState {
        access_checker: Arc::new(PaymentAccessChecker::new(payment_reader.clone())),
        assessment_repository,
        assessment_reader,
        question_bank,
    };
    let payment_state = PaymentAppState {
        gateway: Arc::new(gateway),
        payment_repository,
        payment_reader,
        frontend_url: config.payment.frontend_url.clone(),
    };

    // --- Router ---
    let app = api_router(assessment_state, payment_state, auth)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.clone()));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
}
