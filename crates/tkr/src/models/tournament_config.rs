use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{EngineError, Result};

/// Multiplier applied to placements missing from the configured table.
pub const DEFAULT_PLACEMENT_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

pub const MAX_PLACEMENT_MULTIPLIER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
pub const MAX_BONUS_POINTS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
pub const MAX_POINTS_PER_GAME: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Upper bound for entry fees and recorded payments.
pub const MAX_FEE_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Number of players each team fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamSize {
    Solo,
    Duo,
    Trio,
    Squad,
}

impl TeamSize {
    pub fn players(self) -> u32 {
        match self {
            Self::Solo => 1,
            Self::Duo => 2,
            Self::Trio => 3,
            Self::Squad => 4,
        }
    }

    pub fn from_players(players: u32) -> Option<Self> {
        match players {
            1 => Some(Self::Solo),
            2 => Some(Self::Duo),
            3 => Some(Self::Trio),
            4 => Some(Self::Squad),
            _ => None,
        }
    }
}

/// Base entry fee of a tournament. `Free` is the sentinel for no-fee events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum EntryFee {
    Free,
    Paid(Decimal),
}

impl EntryFee {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Free => Decimal::ZERO,
            Self::Paid(amount) => *amount,
        }
    }
}

/// Scoring and format settings of one TKR tournament.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentConfig {
    pub tournament_id: Uuid,
    pub name: String,
    pub map_id: String,
    pub team_size: TeamSize,
    /// Length of each team's competition window. `None` means open-ended.
    pub consecutive_hours: Option<u32>,
    pub days: u32,
    pub best_games_count: u32,
    pub placement_multipliers: BTreeMap<u32, Decimal>,
    /// Minimum kill count -> bonus points. Only the highest satisfied entry applies.
    pub bonus_point_thresholds: Option<BTreeMap<u32, Decimal>>,
    pub max_points_per_game: Option<Decimal>,
    pub entry_fee: EntryFee,
    pub host_percentage: Decimal,
    pub show_prize_pool: bool,
    /// Reject submissions once a team holds `best_games_count` pending or verified games.
    pub strict_submission_cap: bool,
    pub created_at: DateTime<Utc>,
}

impl TournamentConfig {
    /// Checks the invariants every scoring path relies on.
    pub fn validate(&self) -> Result<()> {
        if self.placement_multipliers.is_empty() {
            return Err(config_error("at least one placement multiplier is required"));
        }

        for (placement, multiplier) in &self.placement_multipliers {
            if *placement < 1 {
                return Err(config_error("placement keys start at 1"));
            }
            if multiplier.is_sign_negative() || *multiplier > MAX_PLACEMENT_MULTIPLIER {
                return Err(config_error(format!(
                    "multiplier for placement {} must be between 0 and {}",
                    placement, MAX_PLACEMENT_MULTIPLIER
                )));
            }
        }

        if let Some(thresholds) = &self.bonus_point_thresholds
            && let Some((kills, _)) = thresholds
                .iter()
                .find(|(_, bonus)| bonus.is_sign_negative() || **bonus > MAX_BONUS_POINTS)
        {
            return Err(config_error(format!(
                "bonus for {} kills must be between 0 and {}",
                kills, MAX_BONUS_POINTS
            )));
        }

        if self.best_games_count < 1 {
            return Err(config_error("best_games_count must be at least 1"));
        }

        if let Some(cap) = self.max_points_per_game
            && (cap <= Decimal::ZERO || cap > MAX_POINTS_PER_GAME)
        {
            return Err(config_error(format!(
                "max_points_per_game must be positive and at most {}",
                MAX_POINTS_PER_GAME
            )));
        }

        if self.host_percentage < Decimal::ZERO || self.host_percentage > Decimal::ONE {
            return Err(config_error("host_percentage must be between 0 and 1"));
        }

        if self.consecutive_hours == Some(0) {
            return Err(config_error("consecutive_hours must be positive"));
        }

        let fee = self.entry_fee.amount();
        if fee.is_sign_negative() || fee > MAX_FEE_AMOUNT {
            return Err(config_error(format!(
                "entry fee must be between 0 and {}",
                MAX_FEE_AMOUNT
            )));
        }

        Ok(())
    }
}

fn config_error(msg: impl Into<String>) -> EngineError {
    EngineError::Configuration(msg.into())
}
