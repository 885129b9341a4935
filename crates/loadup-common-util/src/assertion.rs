//! Business assertions that fail with an [`AssertionError`] carrying a
//! [`ResultCode`].
//!
//! The error message is the concatenation of the `parts`, or the result
//! code's default message when the parts render blank.
//!
//! ```
//! use loadup_common_lang::CommonResultCode;
//! use loadup_common_util::assertion;
//!
//! fn transfer(amount: i64) -> Result<(), loadup_common_lang::AssertionError> {
//!     assertion::is_true(amount > 0, &CommonResultCode::ParamIllegal, &[&"amount=", &amount])?;
//!     Ok(())
//! }
//!
//! let err = transfer(-5).unwrap_err();
//! assert_eq!(err.to_string(), "amount=-5");
//! assert_eq!(err.result_code().code, "PARAM_ILLEGAL");
//! ```

use core::fmt::{Display, Write};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use loadup_common_lang::{AssertionError, ResultCode};

type Result = core::result::Result<(), AssertionError>;

/// Collections and strings that can be empty.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

/// `None` counts as empty.
impl<C: IsEmpty> IsEmpty for Option<C> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty)
    }
}

impl<C: IsEmpty + ?Sized> IsEmpty for &C {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

fn message(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for part in parts {
        // writing into a String cannot fail
        let _ = write!(out, "{part}");
    }
    out
}

/// Fails with `code` unless `value` holds.
pub fn is_true(value: bool, code: &(impl ResultCode + ?Sized), parts: &[&dyn Display]) -> Result {
    if value {
        return Ok(());
    }
    let message = message(parts);
    if message.trim().is_empty() {
        Err(AssertionError::new(code))
    } else {
        Err(AssertionError::with_message(code, message))
    }
}

pub fn is_false(value: bool, code: &(impl ResultCode + ?Sized), parts: &[&dyn Display]) -> Result {
    is_true(!value, code, parts)
}

pub fn equals<T: PartialEq + ?Sized>(
    a: &T,
    b: &T,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(a == b, code, parts)
}

pub fn not_equals<T: PartialEq + ?Sized>(
    a: &T,
    b: &T,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(a != b, code, parts)
}

/// Fails unless `collection` is non-empty and holds `value`.
pub fn contains<T: PartialEq>(
    value: &T,
    collection: &[T],
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    not_empty(collection, code, parts)?;
    is_true(collection.contains(value), code, parts)
}

/// Fails unless `value` is one of `candidates`.
pub fn is_in<T: PartialEq>(
    value: &T,
    candidates: &[T],
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(candidates.contains(value), code, parts)
}

/// Fails when `value` is one of `candidates`.
pub fn not_in<T: PartialEq>(
    value: &T,
    candidates: &[T],
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(!candidates.contains(value), code, parts)
}

/// Fails unless `s` is empty or whitespace only.
pub fn blank(s: &str, code: &(impl ResultCode + ?Sized), parts: &[&dyn Display]) -> Result {
    is_true(s.trim().is_empty(), code, parts)
}

pub fn not_blank(s: &str, code: &(impl ResultCode + ?Sized), parts: &[&dyn Display]) -> Result {
    is_true(!s.trim().is_empty(), code, parts)
}

pub fn is_none<T>(
    value: &Option<T>,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(value.is_none(), code, parts)
}

pub fn is_some<T>(
    value: &Option<T>,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(value.is_some(), code, parts)
}

pub fn not_empty<C: IsEmpty + ?Sized>(
    collection: &C,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(!collection.is_empty(), code, parts)
}

pub fn empty<C: IsEmpty + ?Sized>(
    collection: &C,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    is_true(collection.is_empty(), code, parts)
}

/// [`not_blank`], checked only when `condition` holds.
pub fn deduct_not_blank(
    condition: bool,
    s: &str,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    if condition {
        not_blank(s, code, parts)
    } else {
        Ok(())
    }
}

/// [`is_true`], checked only when `condition` holds.
pub fn deduct_true(
    condition: bool,
    value: bool,
    code: &(impl ResultCode + ?Sized),
    parts: &[&dyn Display],
) -> Result {
    if condition {
        is_true(value, code, parts)
    } else {
        Ok(())
    }
}
