use crate::{CodeEnum, define_code_enum};
use serde::{Deserialize, Serialize};

define_code_enum!(
    /// Coarse outcome of a call: succeeded, failed, or unknown (e.g. timed
    /// out before the outcome could be observed).
    ResultStatus {
        Success => ("S", "success"),
        Fail => ("F", "fail"),
        Unknown => ("U", "unknown"),
    }
);

/// A result code: a stable `code`, a [`ResultStatus`] code and a default
/// human readable message.
pub trait ResultCode {
    /// Stable identifier of the result.
    fn code(&self) -> &str;

    /// The [`ResultStatus`] code (`S`, `F` or `U`).
    fn status(&self) -> &str;

    /// Default message attached to the result.
    fn message(&self) -> &str;
}

/// Result codes shared by every loadup service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CommonResultCode {
    Success,
    UnknownException,
    ParamIllegal,
    ProcessFail,
    InvalidApi,
    InvalidCode,
    InvalidClient,
    InvalidSignature,
    MethodNotSupported,
    MediaNotSupported,
    BusinessNotSupported,
    KeyNotFound,
    AccessDenied,
}

impl CommonResultCode {
    const ALL: [Self; 13] = [
        Self::Success,
        Self::UnknownException,
        Self::ParamIllegal,
        Self::ProcessFail,
        Self::InvalidApi,
        Self::InvalidCode,
        Self::InvalidClient,
        Self::InvalidSignature,
        Self::MethodNotSupported,
        Self::MediaNotSupported,
        Self::BusinessNotSupported,
        Self::KeyNotFound,
        Self::AccessDenied,
    ];

    const fn parts(self) -> (&'static str, ResultStatus, &'static str) {
        match self {
            Self::Success => ("SUCCESS", ResultStatus::Success, "Success"),
            Self::UnknownException => ("UNKNOWN_EXCEPTION", ResultStatus::Unknown, "Unknown Error"),
            Self::ParamIllegal => ("PARAM_ILLEGAL", ResultStatus::Fail, "Parameter Illegal"),
            Self::ProcessFail => ("PROCESS_FAIL", ResultStatus::Fail, "Process Fail"),
            Self::InvalidApi => ("INVALID_API", ResultStatus::Fail, "Invalid API"),
            Self::InvalidCode => ("INVALID_CODE", ResultStatus::Fail, "Invalid Code"),
            Self::InvalidClient => ("INVALID_CLIENT", ResultStatus::Fail, "Invalid Client"),
            Self::InvalidSignature => ("INVALID_SIGNATURE", ResultStatus::Fail, "Invalid Signature"),
            Self::MethodNotSupported => {
                ("METHOD_NOT_SUPPORTED", ResultStatus::Fail, "HTTP Method Not Support")
            }
            Self::MediaNotSupported => {
                ("MEDIA_NOT_SUPPORTED", ResultStatus::Fail, "Media Type Not Support")
            }
            Self::BusinessNotSupported => {
                ("BUSINESS_NOT_SUPPORTED", ResultStatus::Fail, "Business Not Support")
            }
            Self::KeyNotFound => ("KEY_NOT_FOUND", ResultStatus::Fail, "Key Not Found"),
            Self::AccessDenied => ("ACCESS_DENIED", ResultStatus::Fail, "Access Deny"),
        }
    }

    /// Looks a result code up by its code, e.g. `"PARAM_ILLEGAL"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.parts().0 == code)
    }

    /// All common result codes in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &Self::ALL
    }

    /// The typed status of this code.
    #[must_use]
    pub const fn result_status(self) -> ResultStatus {
        self.parts().1
    }
}

impl ResultCode for CommonResultCode {
    fn code(&self) -> &str {
        self.parts().0
    }

    fn status(&self) -> &str {
        self.parts().1.code()
    }

    fn message(&self) -> &str {
        self.parts().2
    }
}

/// An owned, serializable snapshot of a [`ResultCode`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    pub code: String,
    pub status: String,
    pub message: String,
}

impl ResultInfo {
    /// Captures the code, status and message of any [`ResultCode`].
    pub fn of(code: &(impl ResultCode + ?Sized)) -> Self {
        Self {
            code: code.code().to_owned(),
            status: code.status().to_owned(),
            message: code.message().to_owned(),
        }
    }

    /// Same as [`ResultInfo::of`] but with a caller supplied message.
    pub fn with_message(code: &(impl ResultCode + ?Sized), message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::of(code)
        }
    }

    /// Whether the status is [`ResultStatus::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        ResultStatus::from_code(&self.status) == Some(ResultStatus::Success)
    }
}

impl ResultCode for ResultInfo {
    fn code(&self) -> &str {
        &self.code
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl From<CommonResultCode> for ResultInfo {
    fn from(code: CommonResultCode) -> Self {
        Self::of(&code)
    }
}

/// Envelope every service response carries its [`ResultInfo`] in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub result: Option<ResultInfo>,
}

impl BaseResponse {
    /// A response carrying [`CommonResultCode::Success`].
    #[must_use]
    pub fn success() -> Self {
        Self::from_code(&CommonResultCode::Success)
    }

    /// A response carrying the given result code.
    pub fn from_code(code: &(impl ResultCode + ?Sized)) -> Self {
        Self {
            result: Some(ResultInfo::of(code)),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.as_ref().is_some_and(ResultInfo::is_success)
    }
}
