pub mod leaderboard;
pub mod registration;
pub mod submission;
pub mod tournament;
