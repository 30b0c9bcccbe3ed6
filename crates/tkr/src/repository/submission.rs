use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::submission::{SubmitGameRequest, VerifySubmissionRequest};
use crate::error::{EngineError, Result, ValidationError};
use crate::models::{GameSubmission, SubmissionStatus};
use crate::services::submission_validator;
use crate::services::submission_window::{self, Eligibility};
use crate::store::Store;

pub struct SubmissionRepository<'a> {
    store: &'a Store,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn eligibility(&self, registration_id: Uuid, now: DateTime<Utc>) -> Result<Eligibility> {
        let aggregate = self.store.tournament_for_registration(registration_id).await?;
        let state = aggregate.write().await;
        let registration = state
            .registration(registration_id)
            .ok_or(EngineError::NotFound)?;

        Ok(submission_window::check_eligibility(
            registration,
            now,
            self.store.host_tz(),
        ))
    }

    /// Validates, scores and stores a game as pending. Runs under the
    /// tournament writer lock so the duplicate and cap checks see every
    /// earlier submission.
    pub async fn submit(
        &self,
        registration_id: Uuid,
        request: &SubmitGameRequest,
        now: DateTime<Utc>,
    ) -> Result<GameSubmission> {
        let aggregate = self.store.tournament_for_registration(registration_id).await?;
        let mut state = aggregate.write().await;

        let registration = state
            .registration(registration_id)
            .ok_or(EngineError::NotFound)?;
        let existing = state.team_submissions(registration_id);

        let submission = submission_validator::accept_submission(
            &state.config,
            registration,
            &existing,
            request,
            now,
            self.store.host_tz(),
        )?;

        state.submissions.push(submission.clone());
        self.store
            .index_submission(submission.submission_id, aggregate.tournament_id())
            .await;

        tracing::info!(
            registration_id = %registration_id,
            submission_id = %submission.submission_id,
            game = submission.game_number,
            final_score = %submission.final_score,
            "Game submitted"
        );
        Ok(submission)
    }

    pub async fn list_for_team(&self, registration_id: Uuid) -> Result<Vec<GameSubmission>> {
        let aggregate = self.store.tournament_for_registration(registration_id).await?;
        let state = aggregate.write().await;
        if state.registration(registration_id).is_none() {
            return Err(EngineError::NotFound);
        }

        let mut submissions = state.team_submissions(registration_id);
        submissions.sort_by_key(|s| s.game_number);
        Ok(submissions)
    }

    pub async fn find(&self, submission_id: Uuid) -> Result<GameSubmission> {
        let aggregate = self.store.tournament_for_submission(submission_id).await?;
        let state = aggregate.write().await;
        state
            .submissions
            .iter()
            .find(|s| s.submission_id == submission_id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    /// Records the host's verdict and republishes the leaderboard. Scores are
    /// never touched here.
    pub async fn verify(
        &self,
        submission_id: Uuid,
        request: &VerifySubmissionRequest,
        now: DateTime<Utc>,
    ) -> Result<GameSubmission> {
        let aggregate = self.store.tournament_for_submission(submission_id).await?;
        let mut state = aggregate.write().await;

        let submission = state
            .submission_mut(submission_id)
            .ok_or(EngineError::NotFound)?;
        if request.status == SubmissionStatus::Pending {
            return Err(ValidationError::Field(
                "status must be verified or rejected".to_string(),
            )
            .into());
        }

        submission.status = request.status;
        submission.verified_by = Some(request.verified_by.clone());
        submission.verification_notes = request.notes.clone();
        submission.verified_at = Some(now);
        let updated = submission.clone();

        aggregate.publish(&state).await;

        tracing::info!(
            submission_id = %submission_id,
            status = ?updated.status,
            verified_by = %request.verified_by,
            "Submission reviewed"
        );
        Ok(updated)
    }

    /// Withdraws a submission that has not been verified.
    pub async fn delete(&self, submission_id: Uuid) -> Result<()> {
        let aggregate = self.store.tournament_for_submission(submission_id).await?;
        let mut state = aggregate.write().await;

        let position = state
            .submissions
            .iter()
            .position(|s| s.submission_id == submission_id)
            .ok_or(EngineError::NotFound)?;
        if state.submissions[position].status == SubmissionStatus::Verified {
            return Err(ValidationError::SubmissionLocked.into());
        }

        state.submissions.remove(position);
        self.store.forget_submission(submission_id).await;
        aggregate.publish(&state).await;

        tracing::info!(submission_id = %submission_id, "Submission withdrawn");
        Ok(())
    }
}
