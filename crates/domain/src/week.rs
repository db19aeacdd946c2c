use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Weekday};

use crate::{Minutes, WorkoutRecord};

/// Midnight of the most recent `week_start` day at or before `now`.
#[must_use]
pub fn start_of_week(now: NaiveDateTime, week_start: Weekday) -> NaiveDateTime {
    let days_since_start = u64::from(now.weekday().days_since(week_start));
    let date = now
        .date()
        .checked_sub_days(Days::new(days_since_start))
        .unwrap_or(now.date());
    date.and_time(NaiveTime::MIN)
}

/// Total duration of all workouts created since the start of the current week.
#[must_use]
pub fn weekly_minutes_completed(
    workout_records: &[WorkoutRecord],
    now: NaiveDateTime,
    week_start: Weekday,
) -> Minutes {
    let start = start_of_week(now, week_start);
    workout_records
        .iter()
        .filter(|r| r.created_at >= start)
        .map(|r| r.duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{WorkoutRecordID, WorkoutType};

    use super::*;

    #[rstest]
    #[case::thursday(date(2025, 5, 15, 15, 30, 0), Weekday::Sun, date(2025, 5, 11, 0, 0, 0))]
    #[case::sunday(date(2025, 5, 11, 0, 0, 0), Weekday::Sun, date(2025, 5, 11, 0, 0, 0))]
    #[case::saturday_night(
        date(2025, 5, 17, 23, 59, 59),
        Weekday::Sun,
        date(2025, 5, 11, 0, 0, 0)
    )]
    #[case::monday_start(date(2025, 5, 11, 9, 0, 0), Weekday::Mon, date(2025, 5, 5, 0, 0, 0))]
    #[case::across_year(date(2025, 1, 2, 8, 0, 0), Weekday::Sun, date(2024, 12, 29, 0, 0, 0))]
    fn test_start_of_week(
        #[case] now: NaiveDateTime,
        #[case] week_start: Weekday,
        #[case] expected: NaiveDateTime,
    ) {
        assert_eq!(start_of_week(now, week_start), expected);
    }

    #[test]
    fn test_weekly_minutes_completed() {
        let now = date(2025, 5, 15, 15, 30, 0);
        let records = vec![
            record(1, 30, now),
            record(2, 45, now - Duration::days(10)),
        ];

        assert_eq!(
            weekly_minutes_completed(&records, now, Weekday::Sun),
            Minutes::new(30)
        );
    }

    #[rstest]
    #[case::no_records(vec![], Weekday::Sun, 0)]
    #[case::boundary_included(
        vec![record(1, 20, date(2025, 5, 11, 0, 0, 0))],
        Weekday::Sun,
        20
    )]
    #[case::before_boundary_excluded(
        vec![record(1, 20, date(2025, 5, 10, 23, 59, 59))],
        Weekday::Sun,
        0
    )]
    #[case::all_in_week(
        vec![
            record(1, 30, date(2025, 5, 15, 15, 30, 0)),
            record(2, 45, date(2025, 5, 14, 10, 20, 0)),
            record(3, 20, date(2025, 5, 13, 18, 45, 0)),
        ],
        Weekday::Sun,
        95
    )]
    #[case::monday_start_excludes_sunday(
        vec![
            record(1, 30, date(2025, 5, 12, 7, 0, 0)),
            record(2, 45, date(2025, 5, 11, 10, 0, 0)),
        ],
        Weekday::Mon,
        30
    )]
    fn test_weekly_minutes_completed_cases(
        #[case] records: Vec<WorkoutRecord>,
        #[case] week_start: Weekday,
        #[case] expected: u32,
    ) {
        assert_eq!(
            weekly_minutes_completed(&records, date(2025, 5, 16, 12, 0, 0), week_start),
            Minutes::new(expected)
        );
    }

    fn record(id: u32, duration: u32, created_at: NaiveDateTime) -> WorkoutRecord {
        WorkoutRecord {
            id: WorkoutRecordID::from(id),
            workout_type: WorkoutType::Cardio,
            type_name: WorkoutType::Cardio.label().to_string(),
            content: "Jogging".to_string(),
            duration: Minutes::new(duration),
            created_at,
        }
    }

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }
}
