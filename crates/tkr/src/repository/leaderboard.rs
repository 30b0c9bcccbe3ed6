use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{LeaderboardEntry, PrizePool};
use crate::services::prize_pool;
use crate::store::Store;

pub struct LeaderboardRepository<'a> {
    store: &'a Store,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Last published standings; never waits for a writer.
    pub async fn current(&self, tournament_id: Uuid) -> Result<Arc<Vec<LeaderboardEntry>>> {
        let aggregate = self.store.tournament(tournament_id).await?;
        Ok(aggregate.snapshot().await)
    }

    /// Synchronous rebuild, queued behind any in-flight write.
    pub async fn refresh(&self, tournament_id: Uuid) -> Result<Arc<Vec<LeaderboardEntry>>> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let state = aggregate.write().await;
        Ok(aggregate.publish(&state).await)
    }

    /// Rebuilds every tournament whose writer lock is free and returns how
    /// many were skipped because a write or rebuild was still running.
    pub async fn refresh_idle(&self) -> (usize, usize) {
        let mut refreshed = 0;
        let mut skipped = 0;

        for aggregate in self.store.tournaments().await {
            match aggregate.try_write() {
                Some(state) => {
                    aggregate.publish(&state).await;
                    refreshed += 1;
                }
                None => {
                    tracing::debug!(
                        tournament_id = %aggregate.tournament_id(),
                        "Tournament busy, skipping refresh cycle"
                    );
                    skipped += 1;
                }
            }
        }

        (refreshed, skipped)
    }

    pub async fn prize_pool(&self, tournament_id: Uuid) -> Result<(PrizePool, bool)> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let state = aggregate.write().await;
        Ok((
            prize_pool::calculate(&state.registrations, &state.config),
            state.config.show_prize_pool,
        ))
    }
}
