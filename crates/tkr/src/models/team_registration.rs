use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::entry_fee::FeeBreakdown;

/// Highest rank a single player may declare.
pub const MAX_PLAYER_RANK: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub name: String,
    pub rank: u32,
    pub stream_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
}

/// A team entered into a tournament, with its personal competition window.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamRegistration {
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub team_name: String,
    pub team_rank: u32,
    pub players: Vec<Player>,
    /// Window start, in the tournament host timezone.
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub is_rerunning: bool,
    pub using_free_entry: bool,
    pub free_entry_players: Vec<String>,
    pub entry_fee: FeeBreakdown,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<Decimal>,
    pub payment_recipient: Option<String>,
    pub payment_notes: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl TeamRegistration {
    /// Number of seats covered by free entries.
    pub fn free_entry_count(&self) -> u32 {
        if self.using_free_entry {
            self.free_entry_players.len() as u32
        } else {
            0
        }
    }

    /// Payment counted towards the prize pool.
    pub fn effective_payment(&self) -> Decimal {
        match self.payment_status {
            PaymentStatus::Rejected => Decimal::ZERO,
            _ => self.payment_amount.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Sum of player ranks, `None` if it does not fit a `u32`.
pub fn roster_rank(players: &[Player]) -> Option<u32> {
    players
        .iter()
        .try_fold(0u32, |total, p| total.checked_add(p.rank))
}

pub fn window_end(start: NaiveDateTime, consecutive_hours: Option<u32>) -> Option<NaiveDateTime> {
    consecutive_hours.map(|hours| start + Duration::hours(i64::from(hours)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player(name: &str, rank: u32) -> Player {
        Player {
            name: name.to_string(),
            rank,
            stream_url: None,
        }
    }

    #[test]
    fn roster_rank_sums_players() {
        let players = vec![player("a", 12), player("b", 8), player("c", 20)];
        assert_eq!(roster_rank(&players), Some(40));
        assert_eq!(roster_rank(&[]), Some(0));
    }

    #[test]
    fn roster_rank_overflow_is_none() {
        let players = vec![player("a", u32::MAX), player("b", 1)];
        assert_eq!(roster_rank(&players), None);
    }

    #[test]
    fn window_end_adds_consecutive_hours() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let end = window_end(start, Some(3)).unwrap();
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2025, 6, 2)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
        assert!(window_end(start, None).is_none());
    }
}
