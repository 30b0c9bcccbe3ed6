use chrono::Utc;
use tkr::{
    Store, dto::tournament::TournamentConfigRequest, error::Result, models::TournamentConfig,
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

/// List all tournaments
pub async fn list_tournaments(store: &Store) -> Result<Vec<TournamentConfig>> {
    let repo = TournamentRepository::new(store);
    repo.list().await
}

/// Get a tournament's configuration
pub async fn get_config(store: &Store, tournament_id: Uuid) -> Result<TournamentConfig> {
    let repo = TournamentRepository::new(store);
    repo.find(tournament_id).await
}

/// Create a new tournament
pub async fn create_tournament(
    store: &Store,
    request: TournamentConfigRequest,
) -> Result<TournamentConfig> {
    let repo = TournamentRepository::new(store);
    repo.create(request, Utc::now()).await
}

/// Replace a tournament's configuration
pub async fn update_config(
    store: &Store,
    tournament_id: Uuid,
    request: TournamentConfigRequest,
) -> Result<TournamentConfig> {
    let repo = TournamentRepository::new(store);
    repo.update_config(tournament_id, request).await
}
