//! Streak calculation over a user's check-in history.
//!
//! A streak is the number of consecutive calendar days, ending today or
//! yesterday, on which the user checked in at least once. The walk itself is
//! a pure function over calendar dates; [`checkin_stats`] wraps it over the
//! stored history.

use crate::{
    entities::{Checkin, checkin},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::prelude::*;
use serde::{Deserialize, Serialize};

/// Check-in statistics returned by the stats endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinStats {
    /// Total number of check-ins the user has ever recorded
    pub total_checkins: u64,
    /// Current consecutive-day streak, 0 when broken
    pub current_streak: u32,
}

/// Computes check-in statistics from a set of check-in dates.
///
/// `total_checkins` is simply the record count. The streak walk sorts the
/// dates newest-first, deduplicates equal days (several records on one day
/// count as that day checked in, never as a broken streak), and then counts
/// how many dates run in exactly-one-day steps from the most recent one. A
/// most recent date two or more days before `today` means the user missed
/// both yesterday and today, so the streak is 0.
///
/// Dates are calendar days in a single reference timezone (the crate uses
/// UTC throughout); `today` is supplied by the caller so the function stays
/// pure.
#[must_use]
pub fn calculate_streak(dates: &[NaiveDate], today: NaiveDate) -> CheckinStats {
    let total_checkins = dates.len() as u64;

    let mut days = dates.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&most_recent) = days.first() else {
        return CheckinStats {
            total_checkins,
            current_streak: 0,
        };
    };

    // Streak only survives if the most recent check-in is today or yesterday.
    if (today - most_recent).num_days() > 1 {
        return CheckinStats {
            total_checkins,
            current_streak: 0,
        };
    }

    let mut current_streak = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            current_streak += 1;
        } else {
            break;
        }
    }

    CheckinStats {
        total_checkins,
        current_streak,
    }
}

/// Retrieves the given user's full check-in history and computes their
/// statistics as of `today`.
pub async fn checkin_stats(
    db: &DatabaseConnection,
    user_id: i64,
    today: NaiveDate,
) -> Result<CheckinStats> {
    let dates: Vec<NaiveDate> = Checkin::find()
        .filter(checkin::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|checkin| checkin.date)
        .collect();

    Ok(calculate_streak(&dates, today))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_checkin, setup_with_user};
    use chrono::Days;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_no_checkins() {
        let stats = calculate_streak(&[], date(2026, 3, 14));
        assert_eq!(stats.total_checkins, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_single_checkin_today() {
        let today = date(2026, 3, 14);
        let stats = calculate_streak(&[today], today);
        assert_eq!(stats.total_checkins, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_single_checkin_yesterday_keeps_streak() {
        let today = date(2026, 3, 14);
        let stats = calculate_streak(&[date(2026, 3, 13)], today);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_single_checkin_two_days_ago_breaks_streak() {
        let today = date(2026, 3, 14);
        let stats = calculate_streak(&[date(2026, 3, 12)], today);
        assert_eq!(stats.total_checkins, 1);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_consecutive_days_count_fully() {
        let today = date(2026, 3, 14);
        let dates: Vec<NaiveDate> = (0..7u64)
            .map(|offset| today.checked_sub_days(Days::new(offset)).unwrap())
            .collect();
        let stats = calculate_streak(&dates, today);
        assert_eq!(stats.total_checkins, 7);
        assert_eq!(stats.current_streak, 7);
    }

    #[test]
    fn test_gap_stops_the_walk() {
        // Today, yesterday, 2 days ago are consecutive; the 5-days-ago entry
        // sits past a gap and never counts.
        let today = date(2026, 3, 14);
        let dates = [
            date(2026, 3, 14),
            date(2026, 3, 13),
            date(2026, 3, 12),
            date(2026, 3, 9),
        ];
        let stats = calculate_streak(&dates, today);
        assert_eq!(stats.total_checkins, 4);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_unsorted_input_is_sorted_internally() {
        let today = date(2026, 3, 14);
        let dates = [date(2026, 3, 12), date(2026, 3, 14), date(2026, 3, 13)];
        let stats = calculate_streak(&dates, today);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_same_day_duplicates_do_not_truncate() {
        // Legacy data may hold several check-ins on one day; the duplicate
        // must count as that day checked in, not as a zero-day gap.
        let today = date(2026, 3, 14);
        let dates = [
            date(2026, 3, 14),
            date(2026, 3, 13),
            date(2026, 3, 13),
            date(2026, 3, 12),
        ];
        let stats = calculate_streak(&dates, today);
        assert_eq!(stats.total_checkins, 4);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_total_independent_of_streak() {
        let today = date(2026, 3, 14);
        let dates = [date(2026, 1, 1), date(2026, 1, 2), date(2026, 2, 20)];
        let stats = calculate_streak(&dates, today);
        assert_eq!(stats.total_checkins, 3);
        assert_eq!(stats.current_streak, 0);
    }

    #[tokio::test]
    async fn test_checkin_stats_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let today = date(2026, 3, 14);

        create_test_checkin(&db, user.id, today).await?;
        create_test_checkin(&db, user.id, date(2026, 3, 13)).await?;
        create_test_checkin(&db, user.id, date(2026, 3, 10)).await?;

        let stats = checkin_stats(&db, user.id, today).await?;
        assert_eq!(stats.total_checkins, 3);
        assert_eq!(stats.current_streak, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkin_stats_scoped_to_user() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let other = crate::test_utils::create_custom_user(&db, "other", "other@example.com").await?;
        let today = date(2026, 3, 14);

        create_test_checkin(&db, other.id, today).await?;

        let stats = checkin_stats(&db, user.id, today).await?;
        assert_eq!(stats.total_checkins, 0);
        assert_eq!(stats.current_streak, 0);

        Ok(())
    }
}
