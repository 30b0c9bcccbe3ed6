use tkr::{
    models::{EntryFee, FeeBreakdown, TeamSize},
    services::entry_fee,
};

/// Preview the fee a team would owe
pub fn calculate_entry_fee(
    base_fee: EntryFee,
    is_rerunning: bool,
    free_entry_count: u32,
    team_size: TeamSize,
) -> FeeBreakdown {
    entry_fee::calculate(base_fee, is_rerunning, free_entry_count, team_size)
}
