use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{EntryFee, MAX_FEE_AMOUNT, TeamSize};

/// Query for previewing an entry fee. A missing `base_fee` means a free event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
pub struct EntryFeeQuery {
    pub base_fee: Option<Decimal>,

    #[serde(default)]
    pub is_rerunning: bool,

    #[serde(default)]
    #[validate(range(max = 4))]
    pub free_entry_count: u32,

    #[validate(range(min = 1, max = 4))]
    pub team_size: u32,
}

impl EntryFeeQuery {
    pub fn base_fee(&self) -> Result<EntryFee, String> {
        match self.base_fee {
            None => Ok(EntryFee::Free),
            Some(amount) if amount.is_sign_negative() => {
                Err("base_fee cannot be negative".to_string())
            }
            Some(amount) if amount > MAX_FEE_AMOUNT => {
                Err(format!("base_fee must be at most {}", MAX_FEE_AMOUNT))
            }
            Some(amount) => Ok(EntryFee::Paid(amount)),
        }
    }

    pub fn team_size(&self) -> Result<TeamSize, String> {
        TeamSize::from_players(self.team_size)
            .ok_or_else(|| "team_size must be between 1 and 4".to_string())
    }
}
