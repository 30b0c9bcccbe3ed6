use rust_decimal::Decimal;

use crate::models::{EntryFee, FeeBreakdown, TeamSize};

use super::scoring::round_score;

/// Share of the base fee waived for teams re-running the event.
const RERUN_DISCOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Fee a team owes. Rerun and free-entry discounts stack; the result never goes below zero.
/// `base_fee` is at most `MAX_FEE_AMOUNT` on every path that reaches here.
pub fn calculate(
    base_fee: EntryFee,
    is_rerunning: bool,
    free_entry_players: u32,
    team_size: TeamSize,
) -> FeeBreakdown {
    let EntryFee::Paid(original) = base_fee else {
        return FeeBreakdown::default();
    };

    let rerun_discount = if is_rerunning {
        original * RERUN_DISCOUNT
    } else {
        Decimal::ZERO
    };
    let free_entry_discount =
        original / Decimal::from(team_size.players()) * Decimal::from(free_entry_players);

    let discount = round_score(rerun_discount + free_entry_discount);
    let final_fee = (original - discount).max(Decimal::ZERO);

    FeeBreakdown {
        original,
        discount,
        final_fee: round_score(final_fee),
    }
}
