//! Client for a REST API authenticated with HMAC-SHA256 request
//! signatures.
//!
//! Every call runs the same three steps:
//!
//! 1. **Sign** — serialize the params to JSON, digest the body with MD5,
//!    take an RFC 3339 timestamp, and sign the canonical string
//!    `METHOD\nMD5\napplication/json\nDate\nBody\nEndpoint` with
//!    HMAC-SHA256 over the shared secret ([`sign`]).
//! 2. **Transmit** — send the request with its four wire headers
//!    (Content-Type, Content-MD5, Date, Authorization) through the
//!    injected transport.
//! 3. **Interpret** — decode the JSON reply per the configured contract
//!    version (v1/v2 `succeed`/`result`, v3 `items`) into an opaque
//!    [`serde_json::Value`] payload.
//!
//! ## Example
//!
//! ```no_run
//! use reqcall::{Client, Config};
//!
//! # async fn example() -> reqcall::Result<()> {
//! let client = Client::new(
//!     Config::new()
//!         .with_user_id(123)
//!         .with_secret("apisecret")
//!         .with_api_url("https://api.local")
//!         .with_api_version(1)
//!         .with_realm("REALM"),
//! )?;
//!
//! let payload = client.call("contacts/list", &["segment-a"]).await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod client;
pub use client::Client;

mod config;
pub use config::Config;

pub mod sign;

mod constants;
mod request;
mod response;

pub use reqcall_core::{Clock, Context, Error, ErrorKind, HttpSend, Result, SystemClock};
