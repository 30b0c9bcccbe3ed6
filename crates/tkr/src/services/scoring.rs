use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DEFAULT_PLACEMENT_MULTIPLIER, ScoreBreakdown, TournamentConfig};

/// Scores a single game.
///
/// Formula: base = kills × multiplier / max(team_rank × 0.1, 1)
///
/// The bonus is the largest value among thresholds the kill count reaches. The
/// optional cap only limits the final score, never the reported parts.
/// Inputs are expected to be within the bounds `TournamentConfig::validate`
/// enforces.
pub fn compute_score(
    kills: u32,
    placement: u32,
    team_rank: u32,
    multipliers: &BTreeMap<u32, Decimal>,
    bonus_thresholds: Option<&BTreeMap<u32, Decimal>>,
    cap: Option<Decimal>,
) -> ScoreBreakdown {
    let multiplier = multipliers
        .get(&placement)
        .copied()
        .unwrap_or(DEFAULT_PLACEMENT_MULTIPLIER);

    let base_score = round_score(Decimal::from(kills) * multiplier / ten_percent_rank(team_rank));
    let bonus_points = round_score(
        bonus_thresholds
            .map(|thresholds| select_bonus(kills, thresholds))
            .unwrap_or(Decimal::ZERO),
    );

    // Reported parts always add up to the uncapped final score.
    let mut final_score = base_score + bonus_points;
    if let Some(cap) = cap {
        final_score = final_score.min(round_score(cap));
    }

    ScoreBreakdown {
        base_score,
        bonus_points,
        final_score,
    }
}

/// Scores a game with the tables of `config`.
pub fn score_game(config: &TournamentConfig, kills: u32, placement: u32, team_rank: u32) -> ScoreBreakdown {
    compute_score(
        kills,
        placement,
        team_rank,
        &config.placement_multipliers,
        config.bonus_point_thresholds.as_ref(),
        config.max_points_per_game,
    )
}

/// Normalization divisor, floored at 1 for low-ranked teams.
pub fn ten_percent_rank(team_rank: u32) -> Decimal {
    (Decimal::from(team_rank) * Decimal::new(1, 1)).max(Decimal::ONE)
}

/// Highest bonus whose kill requirement is met. Thresholds do not stack.
pub fn select_bonus(kills: u32, thresholds: &BTreeMap<u32, Decimal>) -> Decimal {
    thresholds
        .range(..=kills)
        .map(|(_, bonus)| *bonus)
        .max()
        .unwrap_or(Decimal::ZERO)
}

pub fn round_score(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u32, Decimal)]) -> BTreeMap<u32, Decimal> {
        entries.iter().copied().collect()
    }

    #[test]
    fn winning_game_for_rank_forty_team() {
        let multipliers = table(&[(1, Decimal::new(25, 1))]);
        let score = compute_score(20, 1, 40, &multipliers, None, None);

        assert_eq!(score.base_score, Decimal::new(125, 1));
        assert_eq!(score.bonus_points, Decimal::ZERO);
        assert_eq!(score.final_score, Decimal::new(125, 1));
    }

    #[test]
    fn base_score_matches_formula_for_mapped_placements() {
        let multipliers = table(&[
            (1, Decimal::new(25, 1)),
            (2, Decimal::new(2, 0)),
            (3, Decimal::new(175, 2)),
        ]);

        for kills in [0u32, 1, 7, 19, 33, 64] {
            for placement in 1..=3u32 {
                for team_rank in [0u32, 3, 9, 10, 11, 27, 40, 133] {
                    let expected = round_score(
                        Decimal::from(kills) * multipliers[&placement]
                            / (Decimal::from(team_rank) * Decimal::new(1, 1)).max(Decimal::ONE),
                    );
                    let score = compute_score(kills, placement, team_rank, &multipliers, None, None);
                    assert_eq!(score.base_score, expected, "k={kills} p={placement} r={team_rank}");
                    assert_eq!(score.final_score, expected);
                }
            }
        }
    }

    #[test]
    fn unmapped_placement_uses_half_multiplier() {
        let multipliers = table(&[(1, Decimal::new(25, 1))]);
        let score = compute_score(10, 8, 20, &multipliers, None, None);
        // 10 * 0.5 / 2
        assert_eq!(score.base_score, Decimal::new(25, 1));
    }

    #[test]
    fn low_rank_teams_are_not_amplified() {
        let multipliers = table(&[(1, Decimal::ONE)]);
        let score = compute_score(12, 1, 4, &multipliers, None, None);
        assert_eq!(score.base_score, Decimal::from(12));
        assert_eq!(ten_percent_rank(0), Decimal::ONE);
        assert_eq!(ten_percent_rank(25), Decimal::new(25, 1));
    }

    #[test]
    fn highest_satisfied_threshold_wins() {
        let thresholds = table(&[
            (5, Decimal::from(2)),
            (10, Decimal::from(5)),
            (20, Decimal::from(12)),
        ]);

        assert_eq!(select_bonus(4, &thresholds), Decimal::ZERO);
        assert_eq!(select_bonus(5, &thresholds), Decimal::from(2));
        assert_eq!(select_bonus(19, &thresholds), Decimal::from(5));
        assert_eq!(select_bonus(25, &thresholds), Decimal::from(12));
    }

    #[test]
    fn bonus_is_max_even_when_table_is_not_monotonic() {
        let thresholds = table(&[(5, Decimal::from(8)), (10, Decimal::from(3))]);
        assert_eq!(select_bonus(12, &thresholds), Decimal::from(8));
    }

    #[test]
    fn bonus_adds_to_final_score() {
        let multipliers = table(&[(1, Decimal::from(2))]);
        let thresholds = table(&[(10, Decimal::from(5))]);
        let score = compute_score(10, 1, 10, &multipliers, Some(&thresholds), None);

        assert_eq!(score.base_score, Decimal::from(20));
        assert_eq!(score.bonus_points, Decimal::from(5));
        assert_eq!(score.final_score, Decimal::from(25));
    }

    #[test]
    fn cap_limits_only_the_total() {
        let multipliers = table(&[(1, Decimal::from(3))]);
        let thresholds = table(&[(10, Decimal::from(10))]);
        let cap = Some(Decimal::from(30));

        let capped = compute_score(12, 1, 10, &multipliers, Some(&thresholds), cap);
        assert_eq!(capped.base_score, Decimal::from(36));
        assert_eq!(capped.bonus_points, Decimal::from(10));
        assert_eq!(capped.final_score, Decimal::from(30));

        let under = compute_score(5, 1, 10, &multipliers, Some(&thresholds), cap);
        assert_eq!(under.final_score, Decimal::from(15));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_score(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_score(Decimal::new(1004, 3)), Decimal::new(100, 2));

        let multipliers = table(&[(1, Decimal::ONE)]);
        // 1 / 3 = 0.333..
        let score = compute_score(1, 1, 30, &multipliers, None, None);
        assert_eq!(score.base_score, Decimal::new(33, 2));
    }

    #[test]
    fn final_score_is_sum_of_rounded_parts() {
        let multipliers = table(&[(1, Decimal::ONE)]);
        let thresholds = table(&[(0, Decimal::new(125, 3))]);

        // 1 / 8 = 0.125 and a 0.125 bonus both round up.
        let score = compute_score(1, 1, 80, &multipliers, Some(&thresholds), None);
        assert_eq!(score.base_score, Decimal::new(13, 2));
        assert_eq!(score.bonus_points, Decimal::new(13, 2));
        assert_eq!(score.final_score, Decimal::new(26, 2));
        assert_eq!(score.final_score, score.base_score + score.bonus_points);
    }

    #[test]
    fn scoring_is_deterministic() {
        let multipliers = table(&[(1, Decimal::new(25, 1)), (2, Decimal::new(15, 1))]);
        let thresholds = table(&[(8, Decimal::from(3))]);
        let first = compute_score(11, 2, 37, &multipliers, Some(&thresholds), Some(Decimal::from(9)));
        let second = compute_score(11, 2, 37, &multipliers, Some(&thresholds), Some(Decimal::from(9)));
        assert_eq!(first, second);
    }
}
