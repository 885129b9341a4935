//! Utilities shared by loadup services.
//!
//! The centrepiece is [`uniqueid::UniqueId`], a thread-safe generator of
//! process-unique correlation IDs. Alongside it live small helpers for AES
//! encryption, dates, ZIP archives, prefixed logging and business assertions.

pub mod assertion;
pub mod crypto;
pub mod date;
pub mod log;
pub mod pool;
pub mod uniqueid;
pub mod zip;
