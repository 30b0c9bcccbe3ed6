use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Eligibility(#[from] EligibilityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Team rank {declared} does not match the sum of player ranks ({actual})")]
    Consistency { declared: u32, actual: u32 },

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Submission attempted outside the team's window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    #[error("Submissions open at {opens_at}")]
    NotYetOpen { opens_at: NaiveDateTime },

    #[error("Submission window closed at {closed_at}")]
    Expired { closed_at: NaiveDateTime },
}

impl EligibilityError {
    /// The instant (host timezone) the caller should be shown with the rejection.
    pub fn deadline(&self) -> NaiveDateTime {
        match self {
            Self::NotYetOpen { opens_at } => *opens_at,
            Self::Expired { closed_at } => *closed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Game number must be at least 1, got {0}")]
    InvalidGameNumber(i32),

    #[error("Kills must be between 0 and {max}, got {got}")]
    InvalidKills { got: i32, max: i32 },

    #[error("Placement must be at least 1, got {0}")]
    InvalidPlacement(i32),

    #[error("VOD reference must be an absolute URL")]
    InvalidVodUrl,

    #[error("Game {0} has already been submitted by this team")]
    DuplicateGameNumber(i32),

    #[error("Team already has {cap} submitted games, which is the limit for this tournament")]
    SubmissionCapReached { cap: u32 },

    #[error("Team name '{0}' is already registered in this tournament")]
    DuplicateTeamName(String),

    #[error("Roster must contain exactly {expected} players, got {got}")]
    RosterSize { expected: usize, got: usize },

    #[error("Rank of player '{player}' must be at most {max}")]
    PlayerRankOutOfRange { player: String, max: u32 },

    #[error("Free-entry player '{0}' is not on the roster")]
    UnknownFreeEntryPlayer(String),

    #[error("Submission is already verified and can no longer change")]
    SubmissionLocked,

    #[error("{0}")]
    Field(String),
}

impl EngineError {
    /// Whether this is an expected, user-facing rejection rather than a fault.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Eligibility(_) | Self::Validation(_))
    }
}
