//! 时间工具函数: 本地日历边界
//!
//! 报表窗口按服务器本地时区的自然日计算；repository 层只接收 `i64` Unix millis。

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// 日期 00:00:00 → Unix millis (指定时区)
///
/// DST gap fallback: 如果本地零点不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn day_start_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期结束 → 次日 00:00:00 的 Unix millis
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// 当月第一天
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// 下个月第一天
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// 当前时刻所在的本地日期
pub fn local_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_day_bounds_utc() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let start = day_start_millis(date, &Utc);
        let end = day_end_millis(date, &Utc);
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
        assert_eq!(start, 1_773_532_800_000);
    }

    #[test]
    fn test_day_start_respects_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        // Local midnight in UTC+05:30 is 18:30 UTC on the previous day
        assert_eq!(
            day_start_millis(date, &ist),
            day_start_millis(date, &Utc) - (5 * 3600 + 1800) * 1000
        );
    }

    #[test]
    fn test_month_boundaries() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 17).unwrap();
        assert_eq!(first_of_month(date), NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(
            first_of_next_month(date),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
        );

        let feb = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        assert_eq!(
            first_of_next_month(feb),
            NaiveDate::from_ymd_opt(2028, 3, 1).unwrap()
        );
    }
}
