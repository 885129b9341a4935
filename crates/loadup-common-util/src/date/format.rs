use core::fmt::Write;

use chrono::format::{ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{
    CHINESE_DT_FORMAT, DateError, LONG_FORMAT, MONTH_FORMAT, NEW_FORMAT, NO_SECOND_FORMAT,
    SHORT_FORMAT, TIME_FORMAT, WEB_FORMAT,
};

/// Renders `dt` with a `strftime` pattern.
///
/// An invalid pattern renders as the empty string and is logged.
pub fn format(dt: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        tracing::warn!(pattern, "invalid date pattern");
        out.clear();
    }
    out
}

/// Parses `s` with a `strftime` pattern. Patterns without time fields yield
/// midnight, patterns without a day field the first of the month.
pub fn parse(s: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
    Ok(parse_naive(s, pattern)?)
}

pub(crate) fn parse_naive(s: &str, pattern: &str) -> ParseResult<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(s, pattern) {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => parse_partial(s, pattern),
        other => other,
    }
}

/// Fills the fields a pattern leaves out: midnight for a missing time, the
/// first of the month for a missing day.
fn parse_partial(s: &str, pattern: &str) -> ParseResult<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, s, StrftimeItems::new(pattern))?;
    let date = match parsed.to_naive_date() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough && parsed.day().is_none() => {
            parsed.set_day(1)?;
            parsed.to_naive_date()?
        }
        other => other?,
    };
    let time = match parsed.to_naive_time() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => NaiveTime::MIN,
        other => other?,
    };
    Ok(date.and_time(time))
}

/// Number of characters a date rendered with `pattern` occupies.
pub(crate) fn rendered_len(pattern: &str) -> usize {
    format(&NaiveDateTime::default(), pattern).chars().count()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn date_string(dt: &NaiveDateTime) -> String {
    format(dt, SHORT_FORMAT)
}

pub fn long_date_string(dt: &NaiveDateTime) -> String {
    format(dt, LONG_FORMAT)
}

pub fn new_format_date_string(dt: &NaiveDateTime) -> String {
    format(dt, NEW_FORMAT)
}

pub fn web_date_string(dt: &NaiveDateTime) -> String {
    format(dt, WEB_FORMAT)
}

pub fn chinese_date_string(dt: &NaiveDateTime) -> String {
    format(dt, CHINESE_DT_FORMAT)
}

pub fn time_string(dt: &NaiveDateTime) -> String {
    format(dt, TIME_FORMAT)
}

pub fn month_string(dt: &NaiveDateTime) -> String {
    format(dt, MONTH_FORMAT)
}

/// `yyyy年MM月dd日HH:mm:ss`, as used in mail bodies.
pub fn email_date_string(dt: &NaiveDateTime) -> String {
    format(dt, "%Y年%m月%d日%H:%M:%S")
}

/// `MM月dd日HH:mm`, as used in text messages.
pub fn sms_date_string(dt: &NaiveDateTime) -> String {
    format(dt, "%m月%d日%H:%M")
}

/// Today in local time as `yyyyMMdd`.
pub fn today_string() -> String {
    date_string(&Local::now().naive_local())
}

/// Today in UTC as `yyyyMMdd`.
pub fn utc_today_string() -> String {
    date_string(&Utc::now().naive_utc())
}

/// Today in local time as `yyyy-MM-dd`.
pub fn web_today_string() -> String {
    web_date_string(&Local::now().naive_local())
}

/// Parses an eight digit `yyyyMMdd` date.
pub fn parse_date_no_time(s: &str) -> Result<NaiveDate, DateError> {
    let actual = s.chars().count();
    if actual < SHORT_FORMAT_LEN {
        return Err(DateError::TooShort {
            expected: SHORT_FORMAT_LEN,
            actual,
        });
    }
    if !is_digits(s) {
        return Err(DateError::NotNumeric(s.to_owned()));
    }
    Ok(NaiveDate::parse_from_str(s, SHORT_FORMAT)?)
}

/// Parses `s` with `pattern`, rejecting input shorter than the pattern
/// renders.
pub fn parse_date_with_format(s: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
    if pattern.trim().is_empty() {
        return Err(DateError::Blank);
    }
    let expected = rendered_len(pattern);
    let actual = s.chars().count();
    if actual < expected {
        return Err(DateError::TooShort { expected, actual });
    }
    parse(s, pattern)
}

const SHORT_FORMAT_LEN: usize = 8;
const LONG_FORMAT_LEN: usize = 14;
const NEW_FORMAT_LEN: usize = 19;
const NO_SECOND_FORMAT_LEN: usize = 16;

/// Parses `yyyyMMddHHmmss`; anything else is `None`.
pub fn parse_long_format(s: &str) -> Option<NaiveDateTime> {
    (s.chars().count() == LONG_FORMAT_LEN)
        .then(|| NaiveDateTime::parse_from_str(s, LONG_FORMAT).ok())
        .flatten()
}

/// Parses `yyyy-MM-dd HH:mm:ss`; anything else is `None`.
pub fn parse_new_format(s: &str) -> Option<NaiveDateTime> {
    (s.chars().count() == NEW_FORMAT_LEN)
        .then(|| NaiveDateTime::parse_from_str(s, NEW_FORMAT).ok())
        .flatten()
}

/// Parses a leading `yyyy-MM-dd HH:mm`; trailing input such as seconds is
/// ignored.
pub fn parse_no_second_format(s: &str) -> Result<NaiveDateTime, DateError> {
    let actual = s.chars().count();
    if actual < NO_SECOND_FORMAT_LEN {
        return Err(DateError::TooShort {
            expected: NO_SECOND_FORMAT_LEN,
            actual,
        });
    }
    let (dt, _) = NaiveDateTime::parse_and_remainder(s, NO_SECOND_FORMAT)?;
    Ok(dt)
}

/// `0` to `23`, digits only.
pub fn is_valid_hour(s: &str) -> bool {
    is_digits(s) && s.parse::<u32>().is_ok_and(|h| h <= 23)
}

/// `0` to `59`, digits only.
pub fn is_valid_minute_or_second(s: &str) -> bool {
    is_digits(s) && s.parse::<u32>().is_ok_and(|m| m <= 59)
}

/// Whether `s` is a real calendar date written as `yyyyMMdd`.
pub fn is_valid_short_date_format(s: &str) -> bool {
    s.len() == SHORT_FORMAT_LEN
        && is_digits(s)
        && NaiveDate::parse_from_str(s, SHORT_FORMAT).is_ok()
}

/// Whether `s` is a real date and time written as `yyyyMMddHHmmss`.
pub fn is_valid_long_date_format(s: &str) -> bool {
    s.len() == LONG_FORMAT_LEN
        && is_digits(s)
        && NaiveDateTime::parse_from_str(s, LONG_FORMAT).is_ok()
}

/// Strips `-` and `/` from `s` and returns it if what is left is a valid
/// `yyyyMMdd` date.
pub fn short_date_string(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return None;
    }
    let stripped: String = s.chars().filter(|c| !matches!(c, '-' | '/')).collect();
    is_valid_short_date_format(&stripped).then_some(stripped)
}

/// Re-renders a date string from one pattern into another. Unparseable
/// input yields the empty string.
pub fn convert(s: &str, pattern_in: &str, pattern_out: &str) -> String {
    match parse_naive(s, pattern_in) {
        Ok(dt) => format(&dt, pattern_out),
        Err(error) => {
            tracing::warn!(input = s, %error, "failed to convert date");
            String::new()
        }
    }
}

/// `yyyyMMdd` to `yyyy-MM-dd`.
pub fn convert_to_web_format(s: &str) -> String {
    convert(s, SHORT_FORMAT, WEB_FORMAT)
}

/// `yyyyMMdd` to `yyyy年MM月dd日`.
pub fn convert_to_chinese_format(s: &str) -> String {
    convert(s, SHORT_FORMAT, CHINESE_DT_FORMAT)
}

/// `yyyy-MM-dd` to `yyyyMMdd`.
pub fn convert_from_web_format(s: &str) -> String {
    convert(s, WEB_FORMAT, SHORT_FORMAT)
}

/// Whether `a` is not before `b`, both parsed with `pattern`. Unparseable
/// input compares as `false`.
pub fn date_not_less_than(a: &str, b: &str, pattern: &str) -> bool {
    match (parse_naive(a, pattern), parse_naive(b, pattern)) {
        (Ok(a), Ok(b)) => a >= b,
        _ => false,
    }
}

pub fn web_date_not_less_than(a: &str, b: &str) -> bool {
    date_not_less_than(a, b, WEB_FORMAT)
}
