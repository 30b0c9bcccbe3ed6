use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EngineError, Result, ValidationError};
use crate::models::team_registration::{MAX_PLAYER_RANK, roster_rank, window_end};
use crate::models::{MAX_FEE_AMOUNT, PaymentStatus, Player, TeamRegistration, TournamentConfig};
use crate::services::entry_fee;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlayerRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(range(max = 100_000, message = "Player rank must be at most 100000"))]
    pub rank: u32,

    #[validate(url)]
    pub stream_url: Option<String>,
}

/// Request payload for registering a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Team name must be between 1 and 64 characters"
    ))]
    pub team_name: String,

    pub team_rank: u32,

    #[validate(length(min = 1, max = 4))]
    #[validate(nested)]
    pub players: Vec<PlayerRequest>,

    /// Window start in the tournament host timezone.
    pub start_time: NaiveDateTime,

    #[serde(default)]
    pub is_rerunning: bool,

    #[serde(default)]
    pub using_free_entry: bool,

    #[serde(default)]
    pub free_entry_players: Vec<String>,
}

impl CreateRegistrationRequest {
    /// Builds a registration, enforcing the team-rank invariant and roster rules.
    pub fn into_registration(
        self,
        config: &TournamentConfig,
        existing: &[TeamRegistration],
        registered_at: DateTime<Utc>,
    ) -> Result<TeamRegistration> {
        let expected = config.team_size.players() as usize;
        if self.players.len() != expected {
            return Err(ValidationError::RosterSize {
                expected,
                got: self.players.len(),
            }
            .into());
        }

        let players: Vec<Player> = self
            .players
            .into_iter()
            .map(|p| Player {
                name: p.name.trim().to_string(),
                rank: p.rank,
                stream_url: p.stream_url,
            })
            .collect();

        if let Some(player) = players.iter().find(|p| p.rank > MAX_PLAYER_RANK) {
            return Err(ValidationError::PlayerRankOutOfRange {
                player: player.name.clone(),
                max: MAX_PLAYER_RANK,
            }
            .into());
        }

        let actual = roster_rank(&players).ok_or_else(|| ValidationError::PlayerRankOutOfRange {
            player: players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
            max: MAX_PLAYER_RANK,
        })?;
        if actual != self.team_rank {
            return Err(EngineError::Consistency {
                declared: self.team_rank,
                actual,
            });
        }

        let team_name = self.team_name.trim().to_string();
        if existing
            .iter()
            .any(|r| r.team_name.eq_ignore_ascii_case(&team_name))
        {
            return Err(ValidationError::DuplicateTeamName(team_name).into());
        }

        let free_entry_players = if self.using_free_entry {
            let mut names: Vec<String> = Vec::new();
            for name in self.free_entry_players {
                let name = name.trim().to_string();
                if !players.iter().any(|p| p.name == name) {
                    return Err(ValidationError::UnknownFreeEntryPlayer(name).into());
                }
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            names
        } else {
            Vec::new()
        };

        let fee = entry_fee::calculate(
            config.entry_fee,
            self.is_rerunning,
            free_entry_players.len() as u32,
            config.team_size,
        );

        Ok(TeamRegistration {
            registration_id: Uuid::new_v4(),
            tournament_id: config.tournament_id,
            team_name,
            team_rank: self.team_rank,
            players,
            start_time: self.start_time,
            end_time: window_end(self.start_time, config.consecutive_hours),
            is_rerunning: self.is_rerunning,
            using_free_entry: self.using_free_entry,
            free_entry_players,
            entry_fee: fee,
            payment_status: PaymentStatus::Pending,
            payment_amount: None,
            payment_recipient: None,
            payment_notes: None,
            registered_at,
        })
    }
}

/// Staff-side update of a registration's payment record
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    pub payment_status: Option<PaymentStatus>,

    pub payment_amount: Option<Decimal>,

    #[validate(length(max = 255))]
    pub payment_recipient: Option<String>,

    #[validate(length(max = 1000))]
    pub payment_notes: Option<String>,
}

impl UpdatePaymentRequest {
    pub fn apply(&self, registration: &mut TeamRegistration) -> Result<()> {
        if let Some(amount) = self.payment_amount
            && (amount.is_sign_negative() || amount > MAX_FEE_AMOUNT)
        {
            return Err(ValidationError::Field(format!(
                "payment_amount must be between 0 and {}",
                MAX_FEE_AMOUNT
            ))
            .into());
        }

        if let Some(status) = self.payment_status {
            registration.payment_status = status;
        }
        if let Some(amount) = self.payment_amount {
            registration.payment_amount = Some(amount);
        }
        if let Some(recipient) = &self.payment_recipient {
            registration.payment_recipient = Some(recipient.clone());
        }
        if let Some(notes) = &self.payment_notes {
            registration.payment_notes = Some(notes.clone());
        }

        Ok(())
    }
}
