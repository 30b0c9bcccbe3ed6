use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    GameSubmission, LeaderboardEntry, SubmissionStatus, TeamRegistration, TournamentConfig,
};

use super::scoring::round_score;

/// Picks the games that count for one team: best `n` verified games by final
/// score, earlier submissions first on ties.
pub fn select_counted_games<'a>(
    submissions: impl IntoIterator<Item = &'a GameSubmission>,
    n: u32,
) -> Vec<&'a GameSubmission> {
    let mut verified: Vec<&GameSubmission> = submissions
        .into_iter()
        .filter(|s| s.status == SubmissionStatus::Verified)
        .collect();

    verified.sort_by(|a, b| {
        b.final_score
            .cmp(&a.final_score)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.game_number.cmp(&b.game_number))
    });
    verified.truncate(n as usize);
    verified
}

/// Full recompute of the standings of every registered team.
pub fn rebuild(
    registrations: &[TeamRegistration],
    submissions: &[GameSubmission],
    config: &TournamentConfig,
) -> Vec<LeaderboardEntry> {
    let mut by_team: HashMap<Uuid, Vec<&GameSubmission>> = HashMap::new();
    for submission in submissions {
        by_team
            .entry(submission.registration_id)
            .or_default()
            .push(submission);
    }

    let mut standings: Vec<(&TeamRegistration, LeaderboardEntry)> = registrations
        .iter()
        .map(|registration| {
            let team_games = by_team
                .get(&registration.registration_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (registration, team_entry(registration, team_games, config))
        })
        .collect();

    standings.sort_by(|(reg_a, a), (reg_b, b)| compare_standings(reg_a, a, reg_b, b));

    standings
        .into_iter()
        .enumerate()
        .map(|(idx, (_, mut entry))| {
            entry.rank = idx as u32 + 1;
            entry
        })
        .collect()
}

fn team_entry(
    registration: &TeamRegistration,
    games: &[&GameSubmission],
    config: &TournamentConfig,
) -> LeaderboardEntry {
    let counted = select_counted_games(games.iter().copied(), config.best_games_count);

    let total_kills: i64 = counted.iter().map(|g| i64::from(g.kills)).sum();
    let total_score: Decimal = counted.iter().map(|g| g.final_score).sum();
    let total_placement: i64 = counted.iter().map(|g| i64::from(g.placement)).sum();

    let (average_kills, average_placement) = if counted.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let n = Decimal::from(counted.len() as u64);
        (
            round_score(Decimal::from(total_kills) / n),
            round_score(Decimal::from(total_placement) / n),
        )
    };

    LeaderboardEntry {
        rank: 0,
        registration_id: registration.registration_id,
        team_name: registration.team_name.clone(),
        total_kills,
        total_score: round_score(total_score),
        games_submitted: games.len() as u32,
        games_counted: counted.len() as u32,
        average_kills,
        average_placement,
    }
}

fn compare_standings(
    reg_a: &TeamRegistration,
    a: &LeaderboardEntry,
    reg_b: &TeamRegistration,
    b: &LeaderboardEntry,
) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| b.total_kills.cmp(&a.total_kills))
        .then_with(|| reg_a.registered_at.cmp(&reg_b.registered_at))
        .then_with(|| reg_a.registration_id.cmp(&reg_b.registration_id))
}
