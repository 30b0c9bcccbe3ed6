use rust_decimal::Decimal;

use crate::models::{PrizePool, TeamRegistration, TournamentConfig};

use super::scoring::round_score;

/// Folds the recorded payments of every registration into the displayed pool.
///
/// Always computed; whether the result is shown is decided by the caller via
/// `config.show_prize_pool`.
pub fn calculate(registrations: &[TeamRegistration], config: &TournamentConfig) -> PrizePool {
    let total_collected: Decimal = registrations
        .iter()
        .map(TeamRegistration::effective_payment)
        .sum();
    let host_cut = round_score(total_collected * config.host_percentage);

    PrizePool {
        total_registrations: registrations.len() as u32,
        base_entry_fee: config.entry_fee,
        total_collected,
        host_cut,
        final_pool: total_collected - host_cut,
    }
}
