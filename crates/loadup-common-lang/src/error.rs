//! The error raised when a business assertion does not hold.
//!
//! [`AssertionError`] carries the [`ResultInfo`] the caller asserted with so
//! that outer layers can translate it straight into a [`BaseResponse`].
//!
//! [`BaseResponse`]: crate::BaseResponse

use crate::{ResultCode, ResultInfo};

/// A failed business assertion tagged with its result code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    result: ResultInfo,
    message: String,
}

impl AssertionError {
    /// Creates an error whose message is the result code's default message.
    pub fn new(code: &(impl ResultCode + ?Sized)) -> Self {
        Self {
            result: ResultInfo::of(code),
            message: code.message().to_owned(),
        }
    }

    /// Creates an error with a custom message.
    pub fn with_message(code: &(impl ResultCode + ?Sized), message: impl Into<String>) -> Self {
        Self {
            result: ResultInfo::of(code),
            message: message.into(),
        }
    }

    /// The result code this assertion failed with.
    #[must_use]
    pub fn result_code(&self) -> &ResultInfo {
        &self.result
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AssertionError> for ResultInfo {
    fn from(err: AssertionError) -> Self {
        Self {
            message: err.message,
            ..err.result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommonResultCode;

    #[test]
    fn default_message_comes_from_code() {
        let err = AssertionError::new(&CommonResultCode::ParamIllegal);
        assert_eq!(err.to_string(), "Parameter Illegal");
        assert_eq!(err.result_code().code, "PARAM_ILLEGAL");
    }

    #[test]
    fn custom_message_is_kept_in_result_info() {
        let err = AssertionError::with_message(&CommonResultCode::ProcessFail, "order 42 locked");
        assert_eq!(err.message(), "order 42 locked");
        let info = ResultInfo::from(err);
        assert_eq!(info.code, "PROCESS_FAIL");
        assert_eq!(info.message, "order 42 locked");
    }
}
