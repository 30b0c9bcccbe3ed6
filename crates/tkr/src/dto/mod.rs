pub mod fee;
pub mod registration;
pub mod submission;
pub mod tournament;
