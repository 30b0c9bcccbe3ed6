pub mod fees;
pub mod leaderboard;
pub mod registrations;
pub mod submissions;
pub mod tournaments;
