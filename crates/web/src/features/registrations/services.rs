use chrono::Utc;
use tkr::{
    Store,
    dto::registration::{CreateRegistrationRequest, UpdatePaymentRequest},
    error::Result,
    models::TeamRegistration,
    repository::registration::RegistrationRepository,
};
use uuid::Uuid;

/// List the teams registered for a tournament
pub async fn list_registrations(store: &Store, tournament_id: Uuid) -> Result<Vec<TeamRegistration>> {
    let repo = RegistrationRepository::new(store);
    repo.list(tournament_id).await
}

/// Get a registration by ID
pub async fn get_registration(store: &Store, registration_id: Uuid) -> Result<TeamRegistration> {
    let repo = RegistrationRepository::new(store);
    repo.find(registration_id).await
}

/// Register a team
pub async fn register_team(
    store: &Store,
    tournament_id: Uuid,
    request: CreateRegistrationRequest,
) -> Result<TeamRegistration> {
    let repo = RegistrationRepository::new(store);
    repo.create(tournament_id, request, Utc::now()).await
}

/// Update a registration's payment record
pub async fn update_payment(
    store: &Store,
    registration_id: Uuid,
    request: &UpdatePaymentRequest,
) -> Result<TeamRegistration> {
    let repo = RegistrationRepository::new(store);
    repo.update_payment(registration_id, request).await
}
