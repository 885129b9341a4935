//! Log wrappers that prefix every message with the caller's invoke id.
//!
//! Messages look like `[<invoke_id>,,,]part1part2`; the two empty slots are
//! reserved for trace and span ids. Parts are concatenated with no
//! separator, so callers put their own punctuation in.
//!
//! Plain messages go to the `loadup` target. [`alert`] writes to `CRITICAL`
//! and [`exception`] to `ERROR` so both can be routed to dedicated sinks with
//! an `EnvFilter` directive such as `CRITICAL=error`.

use core::fmt::{self, Display, Write};
use std::error::Error;

use tracing::Level;

use crate::pool::{char_pool, string_pool};
use crate::uniqueid::context_id;

/// Target of [`info`], [`warn`], [`debug`] and [`error`].
pub const TARGET: &str = "loadup";
/// Target of [`alert`] and [`named_alert`].
pub const ALERT_TARGET: &str = "CRITICAL";
/// Target of [`exception`].
pub const EXCEPTION_TARGET: &str = "ERROR";

/// Identifier of the current execution context, the same discriminator the
/// [`UniqueId`](crate::uniqueid::UniqueId) generator embeds in IDs.
pub fn invoke_id() -> String {
    context_id().to_string()
}

fn prefix(out: &mut String) {
    out.push(char_pool::LEFT_SQ_BRACKET);
    out.push_str(&invoke_id());
    out.push_str(string_pool::COMMA);
    out.push_str(string_pool::COMMA);
    out.push_str(string_pool::COMMA);
    out.push(char_pool::RIGHT_SQ_BRACKET);
}

fn append(out: &mut String, parts: &[&dyn Display]) {
    for part in parts {
        // writing into a String cannot fail
        let _ = write!(out, "{part}");
    }
}

/// `[<invoke_id>,,,]` followed by every part.
///
/// ```
/// use loadup_common_util::log::{invoke_id, log_string};
///
/// let line = log_string(&[&"order ", &42, &" paid"]);
/// assert_eq!(line, format!("[{},,,]order 42 paid", invoke_id()));
/// ```
pub fn log_string(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    prefix(&mut out);
    append(&mut out, parts);
    out
}

/// `[<invoke_id>,,,][<name>]` followed by every part.
pub fn named_log_string(name: &str, parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    prefix(&mut out);
    out.push(char_pool::LEFT_SQ_BRACKET);
    out.push_str(name);
    out.push(char_pool::RIGHT_SQ_BRACKET);
    append(&mut out, parts);
    out
}

/// Displays an error followed by its `source()` chain, `: ` separated.
pub struct ErrorChain<'a>(pub &'a (dyn Error + 'a));

impl Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}

pub fn info(parts: &[&dyn Display]) {
    if tracing::enabled!(target: TARGET, Level::INFO) {
        tracing::info!(target: TARGET, "{}", log_string(parts));
    }
}

pub fn warn(parts: &[&dyn Display]) {
    if tracing::enabled!(target: TARGET, Level::WARN) {
        tracing::warn!(target: TARGET, "{}", log_string(parts));
    }
}

pub fn debug(parts: &[&dyn Display]) {
    if tracing::enabled!(target: TARGET, Level::DEBUG) {
        tracing::debug!(target: TARGET, "{}", log_string(parts));
    }
}

pub fn error(parts: &[&dyn Display]) {
    if tracing::enabled!(target: TARGET, Level::ERROR) {
        tracing::error!(target: TARGET, "{}", log_string(parts));
    }
}

/// Logs at `error` to the `CRITICAL` target.
pub fn alert(parts: &[&dyn Display]) {
    if tracing::enabled!(target: ALERT_TARGET, Level::ERROR) {
        tracing::error!(target: ALERT_TARGET, "{}", log_string(parts));
    }
}

pub fn named_alert(name: &str, parts: &[&dyn Display]) {
    if tracing::enabled!(target: ALERT_TARGET, Level::ERROR) {
        tracing::error!(target: ALERT_TARGET, "{}", named_log_string(name, parts));
    }
}

/// Logs `err` and its source chain at `error` to the `ERROR` target.
pub fn exception(err: &dyn Error, parts: &[&dyn Display]) {
    if tracing::enabled!(target: EXCEPTION_TARGET, Level::ERROR) {
        tracing::error!(
            target: EXCEPTION_TARGET,
            error = %ErrorChain(err),
            "{}",
            log_string(parts)
        );
    }
}

/// [`alert`] plus [`exception`].
pub fn alert_error(err: &dyn Error, parts: &[&dyn Display]) {
    alert(parts);
    exception(err, parts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("settlement failed")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn log_string_prefixes_invoke_id() {
        let id = invoke_id();
        assert_eq!(log_string(&[]), format!("[{id},,,]"));
        assert_eq!(
            log_string(&[&"amount=", &12.5, &", currency=", &"CNY"]),
            format!("[{id},,,]amount=12.5, currency=CNY")
        );
    }

    #[test]
    fn named_log_string_adds_name_tag() {
        let id = invoke_id();
        assert_eq!(
            named_log_string("PAY", &[&"ok"]),
            format!("[{id},,,][PAY]ok")
        );
    }

    #[test]
    fn invoke_id_is_per_thread() {
        let here = invoke_id();
        let there = std::thread::spawn(invoke_id).join().unwrap();
        assert_ne!(here, there);
        assert_eq!(here, invoke_id());
    }

    #[test]
    fn error_chain_walks_sources() {
        let err = Wrapped(io::Error::new(io::ErrorKind::TimedOut, "bank timeout"));
        assert_eq!(
            ErrorChain(&err).to_string(),
            "settlement failed: bank timeout"
        );
    }

    #[test]
    fn wrappers_are_quiet_without_subscriber() {
        let err = io::Error::other("boom");
        info(&[&"i"]);
        warn(&[&"w"]);
        debug(&[&"d"]);
        error(&[&"e"]);
        alert(&[&"a"]);
        named_alert("N", &[&"a"]);
        exception(&err, &[&"x"]);
        alert_error(&err, &[&"x"]);
    }
}
