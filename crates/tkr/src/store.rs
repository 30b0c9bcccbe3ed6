use std::collections::HashMap;
use std::sync::Arc;

use chrono::FixedOffset;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::{GameSubmission, LeaderboardEntry, TeamRegistration, TournamentConfig};
use crate::services::leaderboard;

/// Mutable state of one tournament. Only reachable through the aggregate's
/// writer lock.
#[derive(Debug)]
pub struct TournamentState {
    pub config: TournamentConfig,
    pub registrations: Vec<TeamRegistration>,
    pub submissions: Vec<GameSubmission>,
}

impl TournamentState {
    pub fn registration(&self, registration_id: Uuid) -> Option<&TeamRegistration> {
        self.registrations
            .iter()
            .find(|r| r.registration_id == registration_id)
    }

    pub fn registration_mut(&mut self, registration_id: Uuid) -> Option<&mut TeamRegistration> {
        self.registrations
            .iter_mut()
            .find(|r| r.registration_id == registration_id)
    }

    pub fn team_submissions(&self, registration_id: Uuid) -> Vec<GameSubmission> {
        self.submissions
            .iter()
            .filter(|s| s.registration_id == registration_id)
            .cloned()
            .collect()
    }

    pub fn submission_mut(&mut self, submission_id: Uuid) -> Option<&mut GameSubmission> {
        self.submissions
            .iter_mut()
            .find(|s| s.submission_id == submission_id)
    }

    pub fn rebuild_leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::rebuild(&self.registrations, &self.submissions, &self.config)
    }
}

/// Per-tournament aggregate root: one writer at a time, leaderboard reads
/// served from the last published snapshot.
#[derive(Debug)]
pub struct TournamentAggregate {
    tournament_id: Uuid,
    state: Mutex<TournamentState>,
    snapshot: RwLock<Arc<Vec<LeaderboardEntry>>>,
}

impl TournamentAggregate {
    fn new(config: TournamentConfig) -> Self {
        Self {
            tournament_id: config.tournament_id,
            state: Mutex::new(TournamentState {
                config,
                registrations: Vec::new(),
                submissions: Vec::new(),
            }),
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    pub async fn write(&self) -> MutexGuard<'_, TournamentState> {
        self.state.lock().await
    }

    /// Writer lock if nobody else holds it.
    pub fn try_write(&self) -> Option<MutexGuard<'_, TournamentState>> {
        self.state.try_lock().ok()
    }

    pub async fn snapshot(&self) -> Arc<Vec<LeaderboardEntry>> {
        self.snapshot.read().await.clone()
    }

    /// Recomputes the standings from `state` and publishes them. Callers pass
    /// the guard they hold so the rebuild sees a committed state.
    pub async fn publish(&self, state: &TournamentState) -> Arc<Vec<LeaderboardEntry>> {
        let entries = Arc::new(state.rebuild_leaderboard());
        tracing::debug!(
            tournament_id = %self.tournament_id,
            teams = entries.len(),
            "Leaderboard rebuilt"
        );
        *self.snapshot.write().await = entries.clone();
        entries
    }
}

#[derive(Debug)]
struct StoreInner {
    host_tz: FixedOffset,
    tournaments: RwLock<HashMap<Uuid, Arc<TournamentAggregate>>>,
    registration_index: RwLock<HashMap<Uuid, Uuid>>,
    submission_index: RwLock<HashMap<Uuid, Uuid>>,
}

/// In-memory home of every tournament aggregate.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(host_tz: FixedOffset) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                host_tz,
                tournaments: RwLock::new(HashMap::new()),
                registration_index: RwLock::new(HashMap::new()),
                submission_index: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Timezone registration windows are expressed in.
    pub fn host_tz(&self) -> &FixedOffset {
        &self.inner.host_tz
    }

    pub async fn insert_tournament(&self, config: TournamentConfig) -> Arc<TournamentAggregate> {
        let aggregate = Arc::new(TournamentAggregate::new(config));
        self.inner
            .tournaments
            .write()
            .await
            .insert(aggregate.tournament_id, aggregate.clone());
        aggregate
    }

    pub async fn tournament(&self, tournament_id: Uuid) -> Result<Arc<TournamentAggregate>> {
        self.inner
            .tournaments
            .read()
            .await
            .get(&tournament_id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    pub async fn tournaments(&self) -> Vec<Arc<TournamentAggregate>> {
        let mut all: Vec<_> = self.inner.tournaments.read().await.values().cloned().collect();
        all.sort_by_key(|t| t.tournament_id);
        all
    }

    pub async fn index_registration(&self, registration_id: Uuid, tournament_id: Uuid) {
        self.inner
            .registration_index
            .write()
            .await
            .insert(registration_id, tournament_id);
    }

    pub async fn tournament_for_registration(
        &self,
        registration_id: Uuid,
    ) -> Result<Arc<TournamentAggregate>> {
        let tournament_id = self
            .inner
            .registration_index
            .read()
            .await
            .get(&registration_id)
            .copied()
            .ok_or(EngineError::NotFound)?;
        self.tournament(tournament_id).await
    }

    pub async fn index_submission(&self, submission_id: Uuid, tournament_id: Uuid) {
        self.inner
            .submission_index
            .write()
            .await
            .insert(submission_id, tournament_id);
    }

    pub async fn forget_submission(&self, submission_id: Uuid) {
        self.inner.submission_index.write().await.remove(&submission_id);
    }

    pub async fn tournament_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Arc<TournamentAggregate>> {
        let tournament_id = self
            .inner
            .submission_index
            .read()
            .await
            .get(&submission_id)
            .copied()
            .ok_or(EngineError::NotFound)?;
        self.tournament(tournament_id).await
    }
}
