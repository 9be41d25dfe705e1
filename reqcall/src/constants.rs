/// Content type of every request, also folded into the signed string as a
/// literal. Changing it breaks server-side signature verification.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// The `http` crate has no named constant for this header.
pub const CONTENT_MD5: &str = "content-md5";
