//! Per-call request assembly.

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::{HeaderValue, Method};
use reqcall_core::hash::hex_md5;
use reqcall_core::time::{format_rfc3339, DateTime};
use reqcall_core::{Error, Result};
use serde::Serialize;

use crate::config::Config;
use crate::constants::{CONTENT_MD5, CONTENT_TYPE_JSON};
use crate::sign;

/// Everything a single call folds into its signature.
///
/// Constructed fresh for every call and consumed right after the request
/// is assembled. Nothing here is ever stored on the shared [`crate::Client`],
/// so concurrent calls cannot race on each other's state.
///
/// Invariant: the digest and timestamp placed into the headers are these
/// exact strings, the same ones folded into the signed string.
#[derive(Debug)]
pub(crate) struct SigningContext {
    pub method: Method,
    pub endpoint: String,
    pub body: String,
    pub body_md5: String,
    pub timestamp: String,
}

impl SigningContext {
    /// Serialize the params and derive the signing inputs for one call.
    ///
    /// GET requests carry no body: the serialized params are discarded and
    /// the digest is computed over the empty string.
    pub fn new<T: Serialize + ?Sized>(
        config: &Config,
        path: &str,
        params: &T,
        method: Method,
        now: DateTime,
    ) -> Result<Self> {
        let mut body = serde_json::to_string(params).map_err(|e| {
            Error::request_invalid(format!("failed to serialize params: {e}")).with_source(e)
        })?;
        if method == Method::GET {
            body.clear();
        }

        let body_md5 = hex_md5(body.as_bytes());
        let endpoint = format!("/api/v{}/{}", config.api_version, path);
        let timestamp = format_rfc3339(now);

        Ok(Self {
            method,
            endpoint,
            body,
            body_md5,
            timestamp,
        })
    }

    /// Sign and assemble the request to transmit.
    pub fn into_request(self, config: &Config) -> Result<http::Request<Bytes>> {
        let signature = sign::sign(
            self.method.as_str(),
            &self.endpoint,
            &self.body_md5,
            &self.timestamp,
            &self.body,
            &config.secret,
        )?;

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(format!("{}{}", config.api_url, self.endpoint))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(CONTENT_MD5, &self.body_md5)
            .header(DATE, &self.timestamp)
            .body(Bytes::from(self.body))?;

        req.headers_mut().insert(AUTHORIZATION, {
            let mut value: HeaderValue =
                format!("{} {}:{}", config.realm, config.user_id, signature).parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config() -> Config {
        Config::new()
            .with_user_id(123)
            .with_secret("apisecret")
            .with_api_url("https://api.local")
            .with_api_version(1)
            .with_realm("REALM")
    }

    fn test_time() -> DateTime {
        DateTime::parse_from_rfc3339("2019-02-23T10:03:00+02:00").unwrap()
    }

    #[test]
    fn test_post_request() {
        let config = test_config();
        let ctx = SigningContext::new(
            &config,
            "unit/test",
            &["var1", "var2"],
            Method::POST,
            test_time(),
        )
        .unwrap();

        assert_eq!(ctx.endpoint, "/api/v1/unit/test");
        assert_eq!(ctx.body, r#"["var1","var2"]"#);
        assert_eq!(ctx.body_md5, "cdefd9b4ca40e984f3482ed3c7ae077a");
        assert_eq!(ctx.timestamp, "2019-02-23T10:03:00+02:00");

        let req = ctx.into_request(&config).unwrap();
        assert_eq!(req.uri(), "https://api.local/api/v1/unit/test");
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers()[CONTENT_MD5], "cdefd9b4ca40e984f3482ed3c7ae077a");
        assert_eq!(req.headers()[DATE], "2019-02-23T10:03:00+02:00");
        assert_eq!(
            req.headers()[AUTHORIZATION],
            "REALM 123:8923b1bde063c155f8f473b59ea77d2e3134793f9fdef712f1c24f3de6e836ea"
        );
        assert_eq!(req.body().as_ref(), br#"["var1","var2"]"#);
    }

    #[test]
    fn test_get_request_discards_body() {
        let config = test_config();
        let ctx = SigningContext::new(
            &config,
            "unit/test",
            &["var1", "var2"],
            Method::GET,
            test_time(),
        )
        .unwrap();

        assert_eq!(ctx.body, "");
        // MD5 of the empty string.
        assert_eq!(ctx.body_md5, "d41d8cd98f00b204e9800998ecf8427e");

        let req = ctx.into_request(&config).unwrap();
        assert!(req.body().is_empty());
        assert_eq!(req.headers()[CONTENT_MD5], "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_unserializable_params() {
        let mut broken = std::collections::HashMap::new();
        broken.insert(vec![1u8], "value");

        let err = SigningContext::new(
            &test_config(),
            "unit/test",
            &broken,
            Method::POST,
            test_time(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), reqcall_core::ErrorKind::RequestInvalid);
    }
}
