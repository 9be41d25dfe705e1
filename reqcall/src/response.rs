//! Version-dependent response interpretation.

use reqcall_core::{Error, Result};
use serde_json::{Map, Value};

/// Apply the version-specific contract to a raw response body.
///
/// - v1/v2: `{"succeed": bool, "result": ...}`, with `message` carrying the
///   failure reason when `succeed` is false.
/// - v3: `{"items": ...}`, no success flag at all.
///
/// A body that fails to parse as a JSON object is not an error by itself;
/// only the absence of the version-required key is.
pub(crate) fn interpret(api_version: u32, endpoint: &str, raw: &[u8]) -> Result<Value> {
    let mut results: Map<String, Value> = serde_json::from_slice(raw).unwrap_or_default();

    match api_version {
        1 | 2 => {
            let succeed = match results.get("succeed") {
                Some(Value::Bool(b)) => *b,
                _ => return Err(unexpected_response(raw)),
            };
            if !succeed {
                let message = results
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                return Err(Error::api_failed(format!("{endpoint}: {message}")));
            }

            Ok(results.remove("result").unwrap_or(Value::Null))
        }
        3 => match results.remove("items") {
            Some(items) => Ok(items),
            None => Err(unexpected_response(raw)),
        },
        v => Err(Error::config_invalid(format!("unexpected api version {v}"))),
    }
}

fn unexpected_response(raw: &[u8]) -> Error {
    Error::response_unexpected(format!(
        "unexpected response from API: {}",
        String::from_utf8_lossy(raw)
    ))
}
