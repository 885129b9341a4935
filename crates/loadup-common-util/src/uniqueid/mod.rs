//! Process-unique correlation identifiers.
//!
//! [`UniqueId`] composes a strictly increasing millisecond timestamp, a
//! four digit random number, the host address and a per-thread
//! discriminator into `<timestamp>-<random>-<host>-<context>`. A hashed,
//! fixed-length variant is available through [`UniqueId::next_id_hash`].
//!
//! The clock, random source, host resolver and digest are all pluggable
//! through [`UniqueIdBuilder`], which is how the tests drive the generator
//! deterministically.

mod context;
mod digest;
mod generator;
mod host;
mod random;
mod time;


pub use context::*;
pub use digest::*;
pub use generator::*;
pub use host::*;
pub use random::*;
pub use time::*;
