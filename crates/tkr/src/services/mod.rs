pub mod entry_fee;
pub mod leaderboard;
pub mod prize_pool;
pub mod scoring;
pub mod submission_validator;
pub mod submission_window;
