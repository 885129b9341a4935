//! Shared vocabulary types for loadup services: code enums, result codes,
//! response envelopes and the assertion error raised by
//! `loadup-common-util`'s assertion helpers.

mod enums;
mod error;
mod json;
mod result;

pub use crate::enums::*;
pub use crate::error::*;
pub use crate::json::*;
pub use crate::result::*;

#[doc(hidden)]
pub use serde as __serde;
