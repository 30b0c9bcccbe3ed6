use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;
use validator::ValidateUrl;

use crate::dto::submission::SubmitGameRequest;
use crate::error::{Result, ValidationError};
use crate::models::{GameSubmission, SubmissionStatus, TeamRegistration, TournamentConfig};

use super::{scoring, submission_window};

pub const MAX_KILLS_PER_GAME: i32 = 150;

/// Checks a submission's own fields, independent of the team's history.
pub fn validate_fields(request: &SubmitGameRequest) -> std::result::Result<(), ValidationError> {
    if request.game_number < 1 {
        return Err(ValidationError::InvalidGameNumber(request.game_number));
    }

    if !(0..=MAX_KILLS_PER_GAME).contains(&request.kills) {
        return Err(ValidationError::InvalidKills {
            got: request.kills,
            max: MAX_KILLS_PER_GAME,
        });
    }

    if request.placement < 1 {
        return Err(ValidationError::InvalidPlacement(request.placement));
    }

    if !is_absolute_http_url(&request.vod_url) {
        return Err(ValidationError::InvalidVodUrl);
    }

    Ok(())
}

fn is_absolute_http_url(candidate: &str) -> bool {
    let candidate = candidate.trim();
    (candidate.starts_with("https://") || candidate.starts_with("http://")) && candidate.validate_url()
}

/// Checks a submission against the team's existing submissions.
pub fn validate_against_history(
    config: &TournamentConfig,
    request: &SubmitGameRequest,
    existing: &[GameSubmission],
) -> std::result::Result<(), ValidationError> {
    if existing.iter().any(|s| s.game_number == request.game_number) {
        return Err(ValidationError::DuplicateGameNumber(request.game_number));
    }

    if config.strict_submission_cap {
        let occupied = existing.iter().filter(|s| s.is_active()).count() as u32;
        if occupied >= config.best_games_count {
            return Err(ValidationError::SubmissionCapReached {
                cap: config.best_games_count,
            });
        }
    }

    Ok(())
}

/// Runs every intake check and scores the game with the config in effect now.
///
/// `existing` must hold only this team's submissions.
pub fn accept_submission(
    config: &TournamentConfig,
    registration: &TeamRegistration,
    existing: &[GameSubmission],
    request: &SubmitGameRequest,
    now: DateTime<Utc>,
    host_tz: &FixedOffset,
) -> Result<GameSubmission> {
    submission_window::ensure_open(registration, now, host_tz)?;
    validate_fields(request)?;
    validate_against_history(config, request, existing)?;

    let score = scoring::score_game(
        config,
        request.kills as u32,
        request.placement as u32,
        registration.team_rank,
    );

    Ok(GameSubmission {
        submission_id: Uuid::new_v4(),
        registration_id: registration.registration_id,
        tournament_id: registration.tournament_id,
        game_number: request.game_number,
        kills: request.kills,
        placement: request.placement,
        vod_url: request.vod_url.trim().to_string(),
        timestamp: request.timestamp.clone(),
        base_score: score.base_score,
        bonus_points: score.bonus_points,
        final_score: score.final_score,
        status: SubmissionStatus::Pending,
        verified_by: None,
        verification_notes: None,
        submitted_at: now,
        verified_at: None,
    })
}
