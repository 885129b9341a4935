use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};

use super::{DateError, ONE_DAY_MILLIS, SHORT_FORMAT};

type Result<T> = core::result::Result<T, DateError>;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Whole seconds from `two` to `one`; positive when `one` is later.
pub fn diff_seconds(one: &NaiveDateTime, two: &NaiveDateTime) -> i64 {
    one.signed_duration_since(*two).num_seconds()
}

/// Whole minutes from `two` to `one`; positive when `one` is later.
pub fn diff_minutes(one: &NaiveDateTime, two: &NaiveDateTime) -> i64 {
    one.signed_duration_since(*two).num_minutes()
}

/// Calendar days between the two dates, ignoring the time of day.
///
/// Positive when `start` falls on a later day than `end`. 23:59 and 00:01 of
/// the next day are one day apart.
pub fn diff_days(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    start.date().signed_duration_since(end.date()).num_days()
}

pub fn add_years(dt: &NaiveDateTime, span: i32) -> Result<NaiveDateTime> {
    add_months(dt, span.checked_mul(12).ok_or(DateError::OutOfRange)?)
}

/// Shifts by calendar months, clamping to the end of shorter months
/// (`01-31` plus one month is `02-28` or `02-29`).
pub fn add_months(dt: &NaiveDateTime, span: i32) -> Result<NaiveDateTime> {
    let months = Months::new(span.unsigned_abs());
    if span >= 0 {
        dt.checked_add_months(months)
    } else {
        dt.checked_sub_months(months)
    }
    .ok_or(DateError::OutOfRange)
}

pub fn add_days(dt: &NaiveDateTime, span: i64) -> Result<NaiveDateTime> {
    let days = Days::new(span.unsigned_abs());
    if span >= 0 {
        dt.checked_add_days(days)
    } else {
        dt.checked_sub_days(days)
    }
    .ok_or(DateError::OutOfRange)
}

pub fn add_hours(dt: &NaiveDateTime, hours: i64) -> Result<NaiveDateTime> {
    add_delta(dt, TimeDelta::try_hours(hours))
}

pub fn add_minutes(dt: &NaiveDateTime, minutes: i64) -> Result<NaiveDateTime> {
    add_delta(dt, TimeDelta::try_minutes(minutes))
}

pub fn add_seconds(dt: &NaiveDateTime, seconds: i64) -> Result<NaiveDateTime> {
    add_delta(dt, TimeDelta::try_seconds(seconds))
}

fn add_delta(dt: &NaiveDateTime, delta: Option<TimeDelta>) -> Result<NaiveDateTime> {
    delta
        .and_then(|d| dt.checked_add_signed(d))
        .ok_or(DateError::OutOfRange)
}

/// Whether `dt`, read as local time, is already in the past.
pub fn is_before_now(dt: &NaiveDateTime) -> bool {
    *dt < Local::now().naive_local()
}

fn parse_short(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, SHORT_FORMAT).map_err(|error| {
        tracing::error!(date, %error, "failed to parse short date");
        DateError::from(error)
    })
}

/// The `yyyyMMdd` date `span` days before `date`. A negative span moves
/// forward.
pub fn before_day_string(date: &str, span: i64) -> Result<String> {
    let date = parse_short(date)?;
    let days = Days::new(span.unsigned_abs());
    let shifted = if span >= 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
    .ok_or(DateError::OutOfRange)?;
    Ok(shifted.format(SHORT_FORMAT).to_string())
}

/// The `yyyyMMdd` date `span` months before `date`, clamped to month end.
pub fn before_month_string(date: &str, span: i32) -> Result<String> {
    let date = parse_short(date)?;
    let months = Months::new(span.unsigned_abs());
    let shifted = if span >= 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    }
    .ok_or(DateError::OutOfRange)?;
    Ok(shifted.format(SHORT_FORMAT).to_string())
}

pub fn tomorrow_string(date: &str) -> Result<String> {
    before_day_string(date, -1)
}

pub fn yesterday_string(date: &str) -> Result<String> {
    before_day_string(date, 1)
}

/// Fills `dd`, `hh` and `mm` in `pattern` with the days, hours and minutes
/// from `start` to `end`. A negative range renders as zeros.
///
/// ```
/// use chrono::NaiveDate;
/// use loadup_common_util::date::format_time_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(11, 30, 0).unwrap();
/// assert_eq!(format_time_range(&start, &end, "dd天hh小时mm分"), "2天3小时30分");
/// ```
pub fn format_time_range(start: &NaiveDateTime, end: &NaiveDateTime, pattern: &str) -> String {
    let range = end.signed_duration_since(*start).num_milliseconds();
    let (day, hour, minute) = if range < 0 {
        (0, 0, 0)
    } else {
        (
            range / ONE_DAY_MILLIS,
            range % ONE_DAY_MILLIS / MILLIS_PER_HOUR,
            range % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
        )
    };
    pattern
        .replace("dd", &day.to_string())
        .replace("hh", &hour.to_string())
        .replace("mm", &minute.to_string())
}

/// Same time of day on the first of the month.
pub fn first_day_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
    (dt.date() - Days::new(u64::from(dt.day0()))).and_time(dt.time())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn second_and_minute_diffs_truncate() {
        let one = at(2024, 1, 1, 0, 2, 30);
        let two = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(diff_seconds(&one, &two), 150);
        assert_eq!(diff_minutes(&one, &two), 2);
        assert_eq!(diff_minutes(&two, &one), -2);
    }

    #[test]
    fn day_diff_counts_calendar_days() {
        let late = at(2024, 1, 2, 0, 1, 0);
        let early = at(2024, 1, 1, 23, 59, 0);
        assert_eq!(diff_days(&late, &early), 1);
        assert_eq!(diff_days(&early, &late), -1);

        // across a leap year boundary
        assert_eq!(
            diff_days(&at(2025, 1, 1, 0, 0, 0), &at(2024, 1, 1, 0, 0, 0)),
            366
        );
        assert_eq!(
            diff_days(&at(2024, 5, 5, 1, 0, 0), &at(2024, 5, 5, 23, 0, 0)),
            0
        );
    }

    #[test]
    fn month_arithmetic_clamps() {
        let jan31 = at(2024, 1, 31, 12, 0, 0);
        assert_eq!(add_months(&jan31, 1).unwrap(), at(2024, 2, 29, 12, 0, 0));
        assert_eq!(add_months(&jan31, -2).unwrap(), at(2023, 11, 30, 12, 0, 0));
        assert_eq!(
            add_years(&at(2024, 2, 29, 0, 0, 0), 1).unwrap(),
            at(2025, 2, 28, 0, 0, 0)
        );
        assert_eq!(add_years(&jan31, i32::MAX), Err(DateError::OutOfRange));
    }

    #[test]
    fn fixed_arithmetic() {
        let dt = at(2024, 12, 31, 23, 0, 0);
        assert_eq!(add_days(&dt, 1).unwrap(), at(2025, 1, 1, 23, 0, 0));
        assert_eq!(add_days(&dt, -31).unwrap(), at(2024, 11, 30, 23, 0, 0));
        assert_eq!(add_hours(&dt, 2).unwrap(), at(2025, 1, 1, 1, 0, 0));
        assert_eq!(add_minutes(&dt, -61).unwrap(), at(2024, 12, 31, 21, 59, 0));
        assert_eq!(add_seconds(&dt, 3600).unwrap(), at(2025, 1, 1, 0, 0, 0));
        assert_eq!(add_hours(&dt, i64::MAX), Err(DateError::OutOfRange));
    }

    #[test]
    fn before_strings() {
        assert_eq!(before_day_string("20240301", 1).unwrap(), "20240229");
        assert_eq!(before_day_string("20240301", -1).unwrap(), "20240302");
        assert_eq!(before_month_string("20240331", 1).unwrap(), "20240229");
        assert_eq!(before_month_string("20240131", -1).unwrap(), "20240229");
        assert_eq!(tomorrow_string("20241231").unwrap(), "20250101");
        assert_eq!(yesterday_string("20250101").unwrap(), "20241231");
        assert!(matches!(
            before_day_string("2024-03-01", 1),
            Err(DateError::Parse(_))
        ));
    }

    #[test]
    fn time_range_rendering() {
        let start = at(2024, 1, 1, 0, 0, 0);
        let end = at(2024, 1, 2, 5, 7, 59);
        assert_eq!(format_time_range(&start, &end, "dd:hh:mm"), "1:5:7");
        assert_eq!(format_time_range(&end, &start, "dd:hh:mm"), "0:0:0");
    }

    #[test]
    fn first_day_keeps_time() {
        assert_eq!(
            first_day_of_month(&at(2024, 2, 29, 13, 14, 15)),
            at(2024, 2, 1, 13, 14, 15)
        );
        assert_eq!(
            first_day_of_month(&at(2024, 2, 1, 0, 0, 0)),
            at(2024, 2, 1, 0, 0, 0)
        );
    }

    #[test]
    fn past_is_before_now() {
        assert!(is_before_now(&at(2000, 1, 1, 0, 0, 0)));
        assert!(!is_before_now(&at(9999, 1, 1, 0, 0, 0)));
    }
}
