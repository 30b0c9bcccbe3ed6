//! Scoring, submission-window and leaderboard engine for time-windowed kill
//! race (TKR) tournaments.

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use error::{EngineError, Result};
pub use store::Store;
