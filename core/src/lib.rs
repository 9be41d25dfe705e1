//! Core components for calling HMAC-signed REST APIs.
//!
//! This crate provides the foundational types shared by every reqcall
//! transport and client crate:
//!
//! - **Context**: a container holding the HTTP transport and the clock,
//!   both injectable for testing
//! - **Traits**: [`HttpSend`] for transmitting requests and [`Clock`] for
//!   the overridable time source
//! - **Utilities**: [`hash`] for the MD5/HMAC digests of the wire
//!   contract, [`time`] for RFC 3339 timestamps, and [`utils`] for data
//!   redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::HttpSend;
pub use context::SystemClock;

mod error;
pub use error::{Error, ErrorKind, Result};
