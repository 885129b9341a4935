//! Date and time helpers built on [`chrono`].
//!
//! Zone-less helpers work on [`NaiveDateTime`] read as local wall time.
//! Helpers that care about the zone take a [`FixedOffset`] or a zone string
//! understood by [`parse_time_zone`], e.g. `UTC` or `GMT+08:00`.
//!
//! Patterns are `strftime` strings; the `*_FORMAT` constants cover the ones
//! used across loadup services.
//!
//! [`NaiveDateTime`]: chrono::NaiveDateTime
//! [`FixedOffset`]: chrono::FixedOffset

mod calc;
mod error;
mod format;
mod zone;

pub use calc::*;
pub use error::*;
pub use format::*;
pub use zone::*;

/// `yyyyMMdd`
pub const SHORT_FORMAT: &str = "%Y%m%d";
/// `yyyyMMddHHmmss`
pub const LONG_FORMAT: &str = "%Y%m%d%H%M%S";
/// `yyyy-MM-dd`
pub const WEB_FORMAT: &str = "%Y-%m-%d";
/// `HHmmss`
pub const TIME_FORMAT: &str = "%H%M%S";
/// `yyyyMM`
pub const MONTH_FORMAT: &str = "%Y%m";
/// `yyyy年MM月dd日`
pub const CHINESE_DT_FORMAT: &str = "%Y年%m月%d日";
/// `yyyy-MM-dd HH:mm:ss`
pub const NEW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `yyyy-MM-dd HH:mm`
pub const NO_SECOND_FORMAT: &str = "%Y-%m-%d %H:%M";
/// `yyyy-MM-dd HH:mm:ss.SSS`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub const TZ_UTC: &str = "UTC";
pub const TZ_GMT8: &str = "GMT+08:00";

pub const ONE_DAY_SECONDS: i64 = 86_400;
pub const ONE_DAY_MILLIS: i64 = 86_400_000;
