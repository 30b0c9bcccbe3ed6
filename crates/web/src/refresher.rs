use std::time::Duration;

use tkr::{Store, repository::leaderboard::LeaderboardRepository};
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Periodically rebuilds every leaderboard. Tournaments busy with a write or a
/// previous rebuild are left for the next tick.
pub fn spawn(store: Store, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let (refreshed, skipped) = LeaderboardRepository::new(&store).refresh_idle().await;
            tracing::debug!(refreshed, skipped, "Periodic leaderboard refresh");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use serde_json::json;
    use tkr::dto::{registration::CreateRegistrationRequest, tournament::TournamentConfigRequest};
    use tkr::repository::tournament::TournamentRepository;

    #[tokio::test]
    async fn publishes_state_written_without_a_rebuild() {
        let store = Store::new(FixedOffset::east_opt(0).unwrap());
        let request: TournamentConfigRequest = serde_json::from_value(json!({
            "name": "Solo Sunday",
            "map_id": "rebirth",
            "team_size": 1,
            "days": 1,
            "best_games_count": 1,
            "placement_multipliers": [{ "placement": 1, "multiplier": "2" }],
            "host_percentage": "0"
        }))
        .unwrap();
        let config = TournamentRepository::new(&store)
            .create(request, Utc::now())
            .await
            .unwrap();

        let aggregate = store.tournament(config.tournament_id).await.unwrap();
        {
            let mut state = aggregate.write().await;
            let registration = CreateRegistrationRequest {
                team_name: "Lone Wolf".to_string(),
                team_rank: 12,
                players: vec![tkr::dto::registration::PlayerRequest {
                    name: "wolf".to_string(),
                    rank: 12,
                    stream_url: None,
                }],
                start_time: NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
                is_rerunning: false,
                using_free_entry: false,
                free_entry_players: Vec::new(),
            }
            .into_registration(&state.config, &state.registrations, Utc::now())
            .unwrap();
            state.registrations.push(registration);
        }
        assert!(aggregate.snapshot().await.is_empty());

        let handle = spawn(store.clone(), Duration::from_millis(10));
        time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        let board = aggregate.snapshot().await;
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].team_name, "Lone Wolf");
    }
}
