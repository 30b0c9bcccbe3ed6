use std::sync::Arc;

use tkr::{
    Store,
    error::Result,
    models::{LeaderboardEntry, PrizePool},
    repository::leaderboard::LeaderboardRepository,
};
use uuid::Uuid;

/// Last published leaderboard
pub async fn get_leaderboard(store: &Store, tournament_id: Uuid) -> Result<Arc<Vec<LeaderboardEntry>>> {
    let repo = LeaderboardRepository::new(store);
    repo.current(tournament_id).await
}

/// Rebuild the leaderboard now
pub async fn refresh_leaderboard(
    store: &Store,
    tournament_id: Uuid,
) -> Result<Arc<Vec<LeaderboardEntry>>> {
    let repo = LeaderboardRepository::new(store);
    repo.refresh(tournament_id).await
}

/// Prize pool, `None` when the host keeps it hidden
pub async fn get_prize_pool(store: &Store, tournament_id: Uuid) -> Result<Option<PrizePool>> {
    let repo = LeaderboardRepository::new(store);
    let (pool, visible) = repo.prize_pool(tournament_id).await?;
    Ok(visible.then_some(pool))
}
