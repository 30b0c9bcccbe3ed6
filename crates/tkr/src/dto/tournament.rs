use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EngineError, Result};
use crate::models::{EntryFee, TeamSize, TournamentConfig};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlacementMultiplier {
    pub placement: u32,
    pub multiplier: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BonusThreshold {
    pub min_kills: u32,
    pub bonus: Decimal,
}

/// Request payload for creating a tournament or replacing its configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TournamentConfigRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    pub map_id: String,

    #[validate(range(min = 1, max = 4, message = "Team size must be between 1 and 4"))]
    pub team_size: u32,

    #[validate(range(min = 1, max = 168))]
    pub consecutive_hours: Option<u32>,

    #[validate(range(min = 1, max = 60))]
    pub days: u32,

    #[validate(range(min = 1, message = "At least one game must count"))]
    pub best_games_count: u32,

    #[validate(length(min = 1, message = "At least one placement multiplier is required"))]
    pub placement_multipliers: Vec<PlacementMultiplier>,

    pub bonus_point_thresholds: Option<Vec<BonusThreshold>>,

    pub max_points_per_game: Option<Decimal>,

    #[serde(default = "default_entry_fee")]
    pub entry_fee: EntryFee,

    pub host_percentage: Decimal,

    #[serde(default)]
    pub show_prize_pool: bool,

    #[serde(default)]
    pub strict_submission_cap: bool,
}

fn default_entry_fee() -> EntryFee {
    EntryFee::Free
}

impl TournamentConfigRequest {
    /// Builds the domain config, rejecting duplicate table keys and any
    /// invariant violation as a configuration error.
    pub fn into_config(self, tournament_id: Uuid, created_at: DateTime<Utc>) -> Result<TournamentConfig> {
        let team_size = TeamSize::from_players(self.team_size).ok_or_else(|| {
            EngineError::Configuration(format!("unsupported team size {}", self.team_size))
        })?;

        let mut placement_multipliers = BTreeMap::new();
        for entry in self.placement_multipliers {
            if placement_multipliers
                .insert(entry.placement, entry.multiplier)
                .is_some()
            {
                return Err(EngineError::Configuration(format!(
                    "duplicate multiplier for placement {}",
                    entry.placement
                )));
            }
        }

        let bonus_point_thresholds = match self.bonus_point_thresholds {
            Some(entries) => {
                let mut thresholds = BTreeMap::new();
                for entry in entries {
                    if thresholds.insert(entry.min_kills, entry.bonus).is_some() {
                        return Err(EngineError::Configuration(format!(
                            "duplicate bonus threshold for {} kills",
                            entry.min_kills
                        )));
                    }
                }
                Some(thresholds)
            }
            None => None,
        };

        let config = TournamentConfig {
            tournament_id,
            name: self.name,
            map_id: self.map_id,
            team_size,
            consecutive_hours: self.consecutive_hours,
            days: self.days,
            best_games_count: self.best_games_count,
            placement_multipliers,
            bonus_point_thresholds,
            max_points_per_game: self.max_points_per_game,
            entry_fee: self.entry_fee,
            host_percentage: self.host_percentage,
            show_prize_pool: self.show_prize_pool,
            strict_submission_cap: self.strict_submission_cap,
            created_at,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_request() -> TournamentConfigRequest {
        TournamentConfigRequest {
            name: "Friday TKR".to_string(),
            map_id: "rebirth".to_string(),
            team_size: 4,
            consecutive_hours: Some(3),
            days: 3,
            best_games_count: 2,
            placement_multipliers: vec![
                PlacementMultiplier {
                    placement: 1,
                    multiplier: Decimal::new(25, 1),
                },
                PlacementMultiplier {
                    placement: 2,
                    multiplier: Decimal::from(2),
                },
            ],
            bonus_point_thresholds: Some(vec![BonusThreshold {
                min_kills: 15,
                bonus: Decimal::from(5),
            }]),
            max_points_per_game: Some(Decimal::from(40)),
            entry_fee: EntryFee::Paid(Decimal::from(40)),
            host_percentage: Decimal::new(2, 1),
            show_prize_pool: true,
            strict_submission_cap: false,
        }
    }

    #[test]
    fn builds_config_from_request() {
        let config = sample_request()
            .into_config(Uuid::new_v4(), Utc::now())
            .unwrap();
        assert_eq!(config.team_size, TeamSize::Squad);
        assert_eq!(config.placement_multipliers.len(), 2);
        assert_eq!(
            config.bonus_point_thresholds.unwrap().get(&15),
            Some(&Decimal::from(5))
        );
    }

    #[test]
    fn duplicate_placement_is_a_configuration_error() {
        let mut request = sample_request();
        request.placement_multipliers.push(PlacementMultiplier {
            placement: 1,
            multiplier: Decimal::from(3),
        });
        assert!(matches!(
            request.into_config(Uuid::new_v4(), Utc::now()),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn validator_rejects_bad_team_size() {
        let mut request = sample_request();
        request.team_size = 5;
        assert!(request.validate().is_err());
    }

    #[test]
    fn entry_fee_deserializes_from_tagged_json() {
        let fee: EntryFee = serde_json::from_str(r#"{"kind":"paid","amount":"12.50"}"#).unwrap();
        assert_eq!(fee, EntryFee::Paid(Decimal::new(1250, 2)));
        let free: EntryFee = serde_json::from_str(r#"{"kind":"free"}"#).unwrap();
        assert_eq!(free, EntryFee::Free);
    }
}
