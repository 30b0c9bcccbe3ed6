use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::EligibilityError;
use crate::models::TeamRegistration;

/// Time after the window end during which results are still accepted.
pub const GRACE_PERIOD_HOURS: i64 = 24;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    NotStarted,
    Active,
    GracePeriod,
    Expired,
}

impl WindowState {
    pub fn accepts_submissions(self) -> bool {
        matches!(self, Self::Active | Self::GracePeriod)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Eligibility {
    pub state: WindowState,
    pub message: String,
    /// Last instant (host timezone) a result can be submitted.
    pub deadline: Option<NaiveDateTime>,
    /// Seconds left before `deadline`, reported during the grace period.
    pub remaining_seconds: Option<i64>,
}

/// Converts the caller's clock into the tournament host timezone.
pub fn to_host_time(now: DateTime<Utc>, host_tz: &FixedOffset) -> NaiveDateTime {
    now.with_timezone(host_tz).naive_local()
}

pub fn grace_deadline(end: NaiveDateTime) -> NaiveDateTime {
    end + Duration::hours(GRACE_PERIOD_HOURS)
}

/// Window state for a team whose window runs from `start` to `end`, both host-local.
pub fn window_state(start: NaiveDateTime, end: Option<NaiveDateTime>, now: NaiveDateTime) -> WindowState {
    let Some(end) = end else {
        return WindowState::Active;
    };

    if now < start {
        WindowState::NotStarted
    } else if now <= end {
        WindowState::Active
    } else if now <= grace_deadline(end) {
        WindowState::GracePeriod
    } else {
        WindowState::Expired
    }
}

/// Recomputes eligibility from scratch; nothing is cached between calls.
pub fn check_eligibility(
    registration: &TeamRegistration,
    now: DateTime<Utc>,
    host_tz: &FixedOffset,
) -> Eligibility {
    let now = to_host_time(now, host_tz);
    let start = registration.start_time;
    let state = window_state(start, registration.end_time, now);
    let deadline = registration.end_time.map(grace_deadline);

    match (state, registration.end_time, deadline) {
        (WindowState::NotStarted, _, _) => Eligibility {
            state,
            message: format!("Submissions open at {}", start.format(DISPLAY_FORMAT)),
            deadline: None,
            remaining_seconds: None,
        },
        (WindowState::Active, Some(end), deadline) => Eligibility {
            state,
            message: format!(
                "Competition window open until {}",
                end.format(DISPLAY_FORMAT)
            ),
            deadline,
            remaining_seconds: None,
        },
        (WindowState::GracePeriod, _, Some(deadline)) => {
            let remaining = deadline - now;
            Eligibility {
                state,
                message: format!(
                    "Grace period: {}h {}m remaining to submit",
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                ),
                deadline: Some(deadline),
                remaining_seconds: Some(remaining.num_seconds()),
            }
        }
        (WindowState::Expired, _, deadline) => Eligibility {
            state,
            message: match deadline {
                Some(at) => format!("Submission window closed at {}", at.format(DISPLAY_FORMAT)),
                None => "Submission window closed".to_string(),
            },
            deadline,
            remaining_seconds: None,
        },
        _ => Eligibility {
            state: WindowState::Active,
            message: "Submissions are open".to_string(),
            deadline: None,
            remaining_seconds: None,
        },
    }
}

/// Fails unless the team may submit at `now`.
pub fn ensure_open(
    registration: &TeamRegistration,
    now: DateTime<Utc>,
    host_tz: &FixedOffset,
) -> Result<Eligibility, EligibilityError> {
    let eligibility = check_eligibility(registration, now, host_tz);

    match eligibility.state {
        WindowState::NotStarted => Err(EligibilityError::NotYetOpen {
            opens_at: registration.start_time,
        }),
        WindowState::Expired => Err(EligibilityError::Expired {
            closed_at: eligibility.deadline.unwrap_or(registration.start_time),
        }),
        WindowState::Active | WindowState::GracePeriod => Ok(eligibility),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{FeeBreakdown, PaymentStatus};
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    pub(crate) fn registration_with_window(
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> TeamRegistration {
        TeamRegistration {
            registration_id: Uuid::new_v4(),
            tournament_id: Uuid::new_v4(),
            team_name: "Night Owls".to_string(),
            team_rank: 40,
            players: Vec::new(),
            start_time: start,
            end_time: end,
            is_rerunning: false,
            using_free_entry: false,
            free_entry_players: Vec::new(),
            entry_fee: FeeBreakdown::default(),
            payment_status: PaymentStatus::Pending,
            payment_amount: None,
            payment_recipient: None,
            payment_notes: None,
            registered_at: Utc::now(),
        }
    }

    fn t() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 10)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(local: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&local)
    }

    #[test]
    fn walks_through_every_state() {
        let reg = registration_with_window(t(), Some(t() + Duration::hours(3)));

        let before = check_eligibility(&reg, at(t() - Duration::minutes(1)), &utc());
        assert_eq!(before.state, WindowState::NotStarted);
        assert!(before.message.contains("2025-05-10 20:00"));
        assert!(before.deadline.is_none());

        let during = check_eligibility(&reg, at(t() + Duration::hours(1)), &utc());
        assert_eq!(during.state, WindowState::Active);
        assert_eq!(during.deadline, Some(t() + Duration::hours(27)));

        let grace = check_eligibility(&reg, at(t() + Duration::hours(3) + Duration::minutes(1)), &utc());
        assert_eq!(grace.state, WindowState::GracePeriod);
        assert_eq!(grace.remaining_seconds, Some((23 * 60 + 59) * 60));
        assert_eq!(grace.message, "Grace period: 23h 59m remaining to submit");

        let after = check_eligibility(&reg, at(t() + Duration::hours(27) + Duration::minutes(1)), &utc());
        assert_eq!(after.state, WindowState::Expired);
        assert_eq!(after.deadline, Some(t() + Duration::hours(27)));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let end = t() + Duration::hours(3);
        assert_eq!(window_state(t(), Some(end), t()), WindowState::Active);
        assert_eq!(window_state(t(), Some(end), end), WindowState::Active);
        assert_eq!(
            window_state(t(), Some(end), grace_deadline(end)),
            WindowState::GracePeriod
        );
        assert_eq!(
            window_state(t(), Some(end), grace_deadline(end) + Duration::seconds(1)),
            WindowState::Expired
        );
    }

    #[test]
    fn open_ended_registration_is_always_active() {
        let reg = registration_with_window(t(), None);
        let eligibility = check_eligibility(&reg, at(t() - Duration::days(3)), &utc());
        assert_eq!(eligibility.state, WindowState::Active);
        assert!(eligibility.deadline.is_none());
        assert!(ensure_open(&reg, at(t() + Duration::days(30)), &utc()).is_ok());
    }

    #[test]
    fn compares_in_host_timezone() {
        // Window starts 20:00 in UTC-5, i.e. 01:00 UTC the next day.
        let host = FixedOffset::west_opt(5 * 3600).unwrap();
        let reg = registration_with_window(t(), Some(t() + Duration::hours(3)));

        let utc_now = at(t() + Duration::hours(1));
        assert_eq!(check_eligibility(&reg, utc_now, &host).state, WindowState::NotStarted);

        let utc_now = at(t() + Duration::hours(6));
        assert_eq!(check_eligibility(&reg, utc_now, &host).state, WindowState::Active);
    }

    #[test]
    fn ensure_open_maps_rejections() {
        let end = t() + Duration::hours(3);
        let reg = registration_with_window(t(), Some(end));

        assert_eq!(
            ensure_open(&reg, at(t() - Duration::hours(1)), &utc()),
            Err(EligibilityError::NotYetOpen { opens_at: t() })
        );
        assert_eq!(
            ensure_open(&reg, at(end + Duration::hours(30)), &utc()),
            Err(EligibilityError::Expired {
                closed_at: grace_deadline(end)
            })
        );
        assert!(ensure_open(&reg, at(end + Duration::hours(2)), &utc()).is_ok());
    }
}
