use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::registration::{CreateRegistrationRequest, UpdatePaymentRequest};
use crate::error::{EngineError, Result};
use crate::models::TeamRegistration;
use crate::store::Store;

pub struct RegistrationRepository<'a> {
    store: &'a Store,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        tournament_id: Uuid,
        request: CreateRegistrationRequest,
        now: DateTime<Utc>,
    ) -> Result<TeamRegistration> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let mut state = aggregate.write().await;

        let registration = request.into_registration(&state.config, &state.registrations, now)?;
        state.registrations.push(registration.clone());
        self.store
            .index_registration(registration.registration_id, tournament_id)
            .await;
        aggregate.publish(&state).await;

        tracing::info!(
            tournament_id = %tournament_id,
            registration_id = %registration.registration_id,
            team = %registration.team_name,
            "Team registered"
        );
        Ok(registration)
    }

    pub async fn find(&self, registration_id: Uuid) -> Result<TeamRegistration> {
        let aggregate = self.store.tournament_for_registration(registration_id).await?;
        let state = aggregate.write().await;
        state
            .registration(registration_id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    pub async fn list(&self, tournament_id: Uuid) -> Result<Vec<TeamRegistration>> {
        let aggregate = self.store.tournament(tournament_id).await?;
        let state = aggregate.write().await;
        Ok(state.registrations.clone())
    }

    pub async fn update_payment(
        &self,
        registration_id: Uuid,
        request: &UpdatePaymentRequest,
    ) -> Result<TeamRegistration> {
        let aggregate = self.store.tournament_for_registration(registration_id).await?;
        let mut state = aggregate.write().await;

        let registration = state
            .registration_mut(registration_id)
            .ok_or(EngineError::NotFound)?;
        request.apply(registration)?;

        tracing::info!(
            registration_id = %registration_id,
            status = ?registration.payment_status,
            "Payment record updated"
        );
        Ok(registration.clone())
    }
}
