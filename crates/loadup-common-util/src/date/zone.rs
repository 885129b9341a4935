use chrono::{
    DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, SecondsFormat, TimeZone, Utc,
};
use tracing::instrument;

use super::format::{format, parse_naive, rendered_len};
use super::{DEFAULT_DATE_FORMAT, DateError, TZ_UTC};
use crate::pool::char_pool;

type Result<T> = core::result::Result<T, DateError>;

const ISO_DATE_LENGTH: usize = 25;
const UTC_ISO_DATE_LENGTH: usize = 20;

/// Parses a zone written as `UTC`, `GMT`, `Z`, or an offset with an optional
/// `UTC`/`GMT` prefix: `GMT+08:00`, `UTC-5`, `+0800`.
///
/// ```
/// use chrono::FixedOffset;
/// use loadup_common_util::date::parse_time_zone;
///
/// assert_eq!(parse_time_zone("GMT+08:00").unwrap(), FixedOffset::east_opt(8 * 3600).unwrap());
/// assert_eq!(parse_time_zone("UTC-5").unwrap(), FixedOffset::west_opt(5 * 3600).unwrap());
/// assert!(parse_time_zone("Mars/Olympus").is_err());
/// ```
pub fn parse_time_zone(tz: &str) -> Result<FixedOffset> {
    let invalid = || DateError::InvalidTimeZone(tz.to_owned());
    let trimmed = tz.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let rest = ["UTC", "GMT"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(*prefix))
        .unwrap_or(trimmed);
    if rest.is_empty() || rest == "Z" {
        return Ok(Utc.fix());
    }

    let (sign, offset) = if let Some(offset) = rest.strip_prefix(char_pool::PLUS) {
        (1, offset)
    } else if let Some(offset) = rest.strip_prefix(char_pool::DASH) {
        (-1, offset)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = match offset.split_once(char_pool::COLON) {
        Some(parts) => parts,
        None if offset.len() == 4 && offset.is_ascii() => offset.split_at(2),
        None => (offset, "0"),
    };
    let component = |s: &str, max: i32| {
        (!s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit()))
            .then(|| s.parse::<i32>().ok())
            .flatten()
            .filter(|v| *v <= max)
    };
    let hours = component(hours, 23).ok_or_else(invalid)?;
    let minutes = component(minutes, 59).ok_or_else(invalid)?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Renders `dt` with `pattern` in the zone `tz`.
pub fn date_string_with_tz<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    pattern: &str,
    tz: &str,
) -> Result<String> {
    let offset = parse_time_zone(tz)?;
    Ok(format(&dt.with_timezone(&offset).naive_local(), pattern))
}

pub fn utc_date_string<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> String {
    format(&dt.with_timezone(&Utc).naive_utc(), pattern)
}

/// Parses `s` with `pattern` as wall time in the zone `tz`.
///
/// With `check_format` the input must be exactly as long as the pattern
/// renders; otherwise only blank input is rejected up front. Failures are
/// logged and yield `None`.
#[instrument(level = "trace")]
pub fn parse_with_tz(
    s: &str,
    pattern: &str,
    tz: &str,
    check_format: bool,
) -> Option<DateTime<FixedOffset>> {
    let offset = match parse_time_zone(tz) {
        Ok(offset) => offset,
        Err(error) => {
            tracing::error!(input = s, pattern, tz, %error, "failed to parse zoned date");
            return None;
        }
    };
    if check_format {
        if s.chars().count() != rendered_len(pattern) {
            return None;
        }
    } else if s.trim().is_empty() {
        return None;
    }
    match parse_naive(s, pattern) {
        Ok(naive) => offset.from_local_datetime(&naive).single(),
        Err(error) => {
            tracing::error!(input = s, pattern, tz, %error, "failed to parse zoned date");
            None
        }
    }
}

pub fn parse_utc_date(s: &str, pattern: &str) -> Option<DateTime<FixedOffset>> {
    parse_with_tz(s, pattern, TZ_UTC, true)
}

/// Midnight of the day `dt` falls on in `offset`.
pub fn day_begin<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let day = dt.with_timezone(&offset).date_naive();
    at_local(offset, day.and_time(NaiveTime::MIN))
}

/// `23:59:59.999` of the day `dt` falls on in `offset`.
pub fn day_end<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let day = dt.with_timezone(&offset).date_naive();
    let end = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or(DateError::OutOfRange)?;
    at_local(offset, end)
}

fn at_local(offset: FixedOffset, local: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
    offset
        .from_local_datetime(&local)
        .single()
        .ok_or(DateError::OutOfRange)
}

/// ISO 8601 with second precision, `Z` for a zero offset and `+hh:mm`
/// otherwise.
pub fn iso_date_time_string<Tz: TimeZone>(dt: &DateTime<Tz>, offset: FixedOffset) -> String {
    dt.with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn utc_iso_date_time_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    iso_date_time_string(dt, Utc.fix())
}

/// Parses an ISO 8601 date time such as `2024-03-09T07:05:03+08:00` or
/// `2024-03-09T07:05:03Z`.
pub fn parse_iso_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.trim().is_empty() {
        return None;
    }
    let min_len = if s.ends_with('Z') {
        UTC_ISO_DATE_LENGTH
    } else {
        ISO_DATE_LENGTH
    };
    if s.len() < min_len {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .inspect_err(|error| tracing::error!(input = s, %error, "failed to parse ISO date time"))
        .ok()
}

/// Renders `yyyy-MM-dd HH:mm:ss.SSS|<tz>` with the wall time in `tz`.
pub fn format_with_zone<Tz: TimeZone>(dt: &DateTime<Tz>, tz: &str) -> Result<String> {
    let tz = tz.trim();
    let offset = parse_time_zone(tz)?;
    let local = dt.with_timezone(&offset).naive_local();
    Ok(format!(
        "{}{}{tz}",
        format(&local, DEFAULT_DATE_FORMAT),
        char_pool::PIPE
    ))
}

/// Inverse of [`format_with_zone`].
pub fn parse_with_zone(s: &str) -> Result<DateTime<FixedOffset>> {
    let (date, tz) = split_zone(s)?;
    let offset = parse_time_zone(tz)?;
    let local = NaiveDateTime::parse_from_str(date, DEFAULT_DATE_FORMAT)?;
    at_local(offset, local)
}

/// The zone part of a string produced by [`format_with_zone`].
pub fn zone_of(s: &str) -> Result<FixedOffset> {
    let (_, tz) = split_zone(s)?;
    parse_time_zone(tz)
}

fn split_zone(s: &str) -> Result<(&str, &str)> {
    if s.trim().is_empty() {
        return Err(DateError::Blank);
    }
    s.split_once(char_pool::PIPE)
        .ok_or_else(|| DateError::MissingZoneDelimiter(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{MONTH_FORMAT, NEW_FORMAT, SHORT_FORMAT};

    fn gmt8() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn time_zone_spellings() {
        for tz in ["UTC", "GMT", "Z", " UTC ", "GMT+00:00", "+0000"] {
            assert_eq!(parse_time_zone(tz).unwrap(), Utc.fix(), "{tz}");
        }
        for tz in ["GMT+08:00", "UTC+8", "+0800", "+08:00", "GMT+0800"] {
            assert_eq!(parse_time_zone(tz).unwrap(), gmt8(), "{tz}");
        }
        assert_eq!(
            parse_time_zone("GMT-05:30").unwrap(),
            FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
        );
        for tz in ["", "Asia/Shanghai", "GMT+24", "+08:60", "+123", "UTC*8"] {
            assert!(parse_time_zone(tz).is_err(), "{tz}");
        }
    }

    #[test]
    fn month_pattern_in_zone() {
        let parsed = parse_with_tz("202403", MONTH_FORMAT, "GMT+8", true).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), utc(2024, 2, 29, 16, 0, 0));
    }

    #[test]
    fn multibyte_offset_is_invalid() {
        for tz in ["+aéb", "GMT-é1", "+0é"] {
            assert!(
                matches!(parse_time_zone(tz), Err(DateError::InvalidTimeZone(_))),
                "{tz}"
            );
        }
        assert!(parse_with_tz("20240309", SHORT_FORMAT, "+aéb", true).is_none());
    }

    #[test]
    fn zoned_rendering() {
        let dt = utc(2024, 3, 8, 20, 0, 0);
        assert_eq!(
            date_string_with_tz(&dt, NEW_FORMAT, "GMT+08:00").unwrap(),
            "2024-03-09 04:00:00"
        );
        assert_eq!(utc_date_string(&dt, SHORT_FORMAT), "20240308");
    }

    #[test]
    fn zoned_parsing() {
        let dt = parse_with_tz("2024-03-09 04:00:00", NEW_FORMAT, "GMT+08:00", true).unwrap();
        assert_eq!(dt, utc(2024, 3, 8, 20, 0, 0));

        assert!(parse_with_tz("2024-03-09 04:00", NEW_FORMAT, "UTC", true).is_none());
        assert!(parse_with_tz("  ", NEW_FORMAT, "UTC", false).is_none());
        assert!(parse_with_tz("2024-03-09 04:00:00", NEW_FORMAT, "Moon", true).is_none());

        let day = parse_utc_date("20240309", SHORT_FORMAT).unwrap();
        assert_eq!(day, utc(2024, 3, 9, 0, 0, 0));
    }

    #[test]
    fn day_bounds_follow_offset() {
        // 20:00 UTC is already the next day in GMT+8
        let dt = utc(2024, 3, 8, 20, 0, 0);
        let begin = day_begin(&dt, gmt8()).unwrap();
        let end = day_end(&dt, gmt8()).unwrap();
        assert_eq!(begin, utc(2024, 3, 8, 16, 0, 0));
        assert_eq!(end.to_rfc3339(), "2024-03-09T23:59:59.999+08:00");

        let begin = day_begin(&dt, Utc.fix()).unwrap();
        assert_eq!(begin, utc(2024, 3, 8, 0, 0, 0));
    }

    #[test]
    fn iso_round_trip() {
        let dt = utc(2024, 3, 9, 7, 5, 3) + chrono::TimeDelta::milliseconds(500);
        assert_eq!(utc_iso_date_time_string(&dt), "2024-03-09T07:05:03Z");
        assert_eq!(
            iso_date_time_string(&dt, gmt8()),
            "2024-03-09T15:05:03+08:00"
        );

        let parsed = parse_iso_date_time("2024-03-09T15:05:03+08:00").unwrap();
        assert_eq!(parsed, utc(2024, 3, 9, 7, 5, 3));
        assert!(parse_iso_date_time("2024-03-09T07:05:03Z").is_some());
        assert!(parse_iso_date_time("2024-03-09T07:05Z").is_none());
        assert!(parse_iso_date_time("2024-03-09T15:05:03+8").is_none());
        assert!(parse_iso_date_time("").is_none());
    }

    #[test]
    fn zone_suffixed_strings() {
        let dt = utc(2024, 3, 8, 20, 0, 0) + chrono::TimeDelta::milliseconds(7);
        let s = format_with_zone(&dt, "GMT+08:00").unwrap();
        assert_eq!(s, "2024-03-09 04:00:00.007|GMT+08:00");

        let back = parse_with_zone(&s).unwrap();
        assert_eq!(back, dt);
        assert_eq!(zone_of(&s).unwrap(), gmt8());

        assert_eq!(parse_with_zone(" "), Err(DateError::Blank));
        assert!(matches!(
            parse_with_zone("2024-03-09 04:00:00.007"),
            Err(DateError::MissingZoneDelimiter(_))
        ));
    }
}
