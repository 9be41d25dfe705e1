//! The pure signing half of the wire contract.

use std::fmt::Write;

use log::debug;
use reqcall_core::hash::hex_hmac_sha256;
use reqcall_core::Result;

use crate::constants::CONTENT_TYPE_JSON;

/// Construct string to sign.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// Body + "\n" +
/// Endpoint;
/// ```
///
/// The ordering and the literal `application/json` line are fixed by the
/// server; any change breaks interoperability.
pub fn string_to_sign(
    method: &str,
    endpoint: &str,
    body_md5: &str,
    timestamp: &str,
    body: &str,
) -> Result<String> {
    let mut s = String::new();
    writeln!(&mut s, "{method}")?;
    writeln!(&mut s, "{body_md5}")?;
    writeln!(&mut s, "{CONTENT_TYPE_JSON}")?;
    writeln!(&mut s, "{timestamp}")?;
    writeln!(&mut s, "{body}")?;
    write!(&mut s, "{endpoint}")?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

/// HMAC-SHA256 signature over the canonical string, hex-encoded lowercase.
///
/// Deterministic: the same inputs always produce the same signature.
pub fn sign(
    method: &str,
    endpoint: &str,
    body_md5: &str,
    timestamp: &str,
    body: &str,
    secret: &str,
) -> Result<String> {
    let string_to_sign = string_to_sign(method, endpoint, body_md5, timestamp, body)?;
    Ok(hex_hmac_sha256(
        secret.as_bytes(),
        string_to_sign.as_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const METHOD: &str = "POST";
    const ENDPOINT: &str = "/api/v1/unit/test";
    const BODY: &str = r#"["var1","var2"]"#;
    const BODY_MD5: &str = "cdefd9b4ca40e984f3482ed3c7ae077a";
    const TIMESTAMP: &str = "2019-02-23T10:03:00+02:00";
    const SECRET: &str = "apisecret";

    #[test]
    fn test_string_to_sign() {
        let s = string_to_sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY).unwrap();
        assert_eq!(
            s,
            "POST\n\
             cdefd9b4ca40e984f3482ed3c7ae077a\n\
             application/json\n\
             2019-02-23T10:03:00+02:00\n\
             [\"var1\",\"var2\"]\n\
             /api/v1/unit/test"
        );
    }

    #[test]
    fn test_sign_known_vector() {
        let signature = sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap();
        assert_eq!(
            signature,
            "8923b1bde063c155f8f473b59ea77d2e3134793f9fdef712f1c24f3de6e836ea"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap();
        let b = sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_depends_on_every_input() {
        let base = sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap();

        let variants = [
            sign("GET", ENDPOINT, BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap(),
            sign(METHOD, "/api/v2/unit/test", BODY_MD5, TIMESTAMP, BODY, SECRET).unwrap(),
            sign(METHOD, ENDPOINT, "0a9b61dec51f0560d8bd2a4740dbfe4e", TIMESTAMP, BODY, SECRET)
                .unwrap(),
            sign(METHOD, ENDPOINT, BODY_MD5, "2019-02-23T11:03:00+02:00", BODY, SECRET).unwrap(),
            sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, r#"["var3"]"#, SECRET).unwrap(),
            sign(METHOD, ENDPOINT, BODY_MD5, TIMESTAMP, BODY, "apisecret2").unwrap(),
        ];

        for variant in variants {
            assert_ne!(base, variant);
        }
    }
}
