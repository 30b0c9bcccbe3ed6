pub mod entry_fee;
pub mod game_submission;
pub mod leaderboard_entry;
pub mod prize_pool;
pub mod team_registration;
pub mod tournament_config;

pub use entry_fee::FeeBreakdown;
pub use game_submission::{GameSubmission, ScoreBreakdown, SubmissionStatus};
pub use leaderboard_entry::LeaderboardEntry;
pub use prize_pool::PrizePool;
pub use team_registration::{PaymentStatus, Player, TeamRegistration};
pub use tournament_config::{
    DEFAULT_PLACEMENT_MULTIPLIER, EntryFee, MAX_FEE_AMOUNT, TeamSize, TournamentConfig,
};
