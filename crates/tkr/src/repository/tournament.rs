use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::tournament::TournamentConfigRequest;
use crate::error::{EngineError, Result};
use crate::models::TournamentConfig;
use crate::store::Store;

pub struct TournamentRepository<'a> {
    store: &'a Store,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        request: TournamentConfigRequest,
        now: DateTime<Utc>,
    ) -> Result<TournamentConfig> {
        let config = request.into_config(Uuid::new_v4(), now)?;
        self.store.insert_tournament(config.clone()).await;

        tracing::info!(
            tournament_id = %config.tournament_id,
            name = %config.name,
            "Tournament created"
        );
        Ok(config)
    }

    pub async fn find(&self, tournament_id: Uuid) -> Result<TournamentConfig> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let state = aggregate.write().await;
        Ok(state.config.clone())
    }

    pub async fn list(&self) -> Result<Vec<TournamentConfig>> {
        let mut configs = Vec::new();
        for aggregate in self.store.tournaments().await {
            configs.push(aggregate.write().await.config.clone());
        }
        configs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(configs)
    }

    /// Replaces the configuration. Existing submissions keep the scores they
    /// were given when submitted; only the ranking rules apply immediately.
    /// Registrations likewise keep the fee and window end computed when they
    /// registered. The team size is fixed once any team has registered.
    pub async fn update_config(
        &self,
        tournament_id: Uuid,
        request: TournamentConfigRequest,
    ) -> Result<TournamentConfig> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let mut state = aggregate.write().await;

        let config = request.into_config(tournament_id, state.config.created_at)?;
        if config.team_size != state.config.team_size && !state.registrations.is_empty() {
            return Err(EngineError::Configuration(format!(
                "team size cannot change once {} teams are registered",
                state.registrations.len()
            )));
        }

        state.config = config.clone();
        aggregate.publish(&state).await;

        tracing::info!(tournament_id = %tournament_id, "Tournament configuration replaced");
        Ok(config)
    }
}
