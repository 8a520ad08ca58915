//! Reporting windows in server-local calendar time

use chrono::{DateTime, Duration, TimeZone};
use shared::models::ReportPeriod;

use crate::utils::time::{
    day_end_millis, day_start_millis, first_of_month, first_of_next_month, local_date,
};

/// Half-open `[start, end)` window with a display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: i64,
    pub end: i64,
    pub label: String,
}

impl ReportWindow {
    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

/// Window containing `now` for the given period.
///
/// - daily: today
/// - weekly: the last seven calendar days, today included
/// - monthly: the current calendar month
pub fn window_for<Tz: TimeZone>(period: ReportPeriod, now: &DateTime<Tz>) -> ReportWindow {
    let tz = now.timezone();
    let today = local_date(now);

    match period {
        ReportPeriod::Daily => ReportWindow {
            start: day_start_millis(today, &tz),
            end: day_end_millis(today, &tz),
            label: today.format("%Y-%m-%d").to_string(),
        },
        ReportPeriod::Weekly => {
            let first = today - Duration::days(6);
            ReportWindow {
                start: day_start_millis(first, &tz),
                end: day_end_millis(today, &tz),
                label: format!("{} to {}", first.format("%Y-%m-%d"), today.format("%Y-%m-%d")),
            }
        }
        ReportPeriod::Monthly => ReportWindow {
            start: day_start_millis(first_of_month(today), &tz),
            end: day_start_millis(first_of_next_month(today), &tz),
            label: today.format("%Y-%m").to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    const DAY: i64 = 24 * 60 * 60 * 1000;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn test_daily_window() {
        let now = at(2026, 3, 15, 14);
        let w = window_for(ReportPeriod::Daily, &now);
        assert_eq!(w.label, "2026-03-15");
        assert_eq!(w.start, 1_773_532_800_000);
        assert_eq!(w.end - w.start, DAY);
        assert!(w.contains(now.timestamp_millis()));
        assert!(w.contains(w.start));
        assert!(!w.contains(w.end));
    }

    #[test]
    fn test_weekly_window_covers_seven_days() {
        let now = at(2026, 3, 3, 9);
        let w = window_for(ReportPeriod::Weekly, &now);
        assert_eq!(w.label, "2026-02-25 to 2026-03-03");
        assert_eq!(w.end - w.start, 7 * DAY);
        assert!(w.contains(now.timestamp_millis()));
    }

    #[test]
    fn test_monthly_window() {
        let now = at(2028, 2, 10, 0);
        let w = window_for(ReportPeriod::Monthly, &now);
        assert_eq!(w.label, "2028-02");
        // Leap year February
        assert_eq!(w.end - w.start, 29 * DAY);

        let dec = window_for(ReportPeriod::Monthly, &at(2026, 12, 31, 23));
        assert_eq!(dec.label, "2026-12");
        assert_eq!(dec.end - dec.start, 31 * DAY);
    }

    #[test]
    fn test_local_offset_shifts_day() {
        // 20:00 UTC on the 15th is already the 16th in UTC+05:30
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 3, 15, 20, 0, 0)
            .unwrap()
            .with_timezone(&ist);
        let w = window_for(ReportPeriod::Daily, &now);
        assert_eq!(w.label, "2026-03-16");
        assert!(w.contains(now.timestamp_millis()));
        assert_eq!(w.start, 1_773_532_800_000 + DAY - (5 * 3600 + 1800) * 1000);
    }
}
