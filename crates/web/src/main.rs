use std::time::Duration;

use anyhow::Context;
use tkr::Store;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod refresher;
mod routes;

use config::Config;
use features::{fees, leaderboard, registrations, submissions, tournaments};

#[derive(OpenApi)]
#[openapi(
    paths(
        tournaments::handlers::list_tournaments,
        tournaments::handlers::get_config,
        tournaments::handlers::create_tournament,
        tournaments::handlers::update_config,
        registrations::handlers::list_registrations,
        registrations::handlers::register_team,
        registrations::handlers::get_registration,
        registrations::handlers::update_payment,
        submissions::handlers::check_eligibility,
        submissions::handlers::submit_game,
        submissions::handlers::list_team_submissions,
        submissions::handlers::get_submission,
        submissions::handlers::verify_submission,
        submissions::handlers::delete_submission,
        leaderboard::handlers::get_leaderboard,
        leaderboard::handlers::refresh_leaderboard,
        leaderboard::handlers::get_prize_pool,
        fees::handlers::calculate_entry_fee,
    ),
    components(
        schemas(
            tkr::dto::tournament::TournamentConfigRequest,
            tkr::dto::tournament::PlacementMultiplier,
            tkr::dto::tournament::BonusThreshold,
            tkr::dto::registration::CreateRegistrationRequest,
            tkr::dto::registration::PlayerRequest,
            tkr::dto::registration::UpdatePaymentRequest,
            tkr::dto::submission::SubmitGameRequest,
            tkr::dto::submission::VerifySubmissionRequest,
            tkr::services::submission_window::Eligibility,
            tkr::services::submission_window::WindowState,
            tkr::models::TournamentConfig,
            tkr::models::TeamSize,
            tkr::models::EntryFee,
            tkr::models::TeamRegistration,
            tkr::models::Player,
            tkr::models::PaymentStatus,
            tkr::models::GameSubmission,
            tkr::models::SubmissionStatus,
            tkr::models::LeaderboardEntry,
            tkr::models::PrizePool,
            tkr::models::FeeBreakdown,
        )
    ),
    tags(
        (name = "tournaments", description = "Tournament configuration"),
        (name = "registrations", description = "Team registrations and payments"),
        (name = "submissions", description = "Game submissions and verification"),
        (name = "leaderboard", description = "Standings and prize pool"),
        (name = "fees", description = "Entry fee previews"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting TKR tournament API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");
    tracing::info!("Registration windows use host timezone {}", config.host_utc_offset);

    let store = Store::new(config.host_utc_offset);

    let refresh_period = Duration::from_secs(config.leaderboard_refresh_secs.max(1));
    refresher::spawn(store.clone(), refresh_period);
    tracing::info!(
        "Leaderboards refresh every {} seconds",
        refresh_period.as_secs()
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::create_router(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
