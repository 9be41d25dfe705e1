use std::time::Duration;

use http::Method;
use log::debug;
use reqcall_core::{Context, Error, Result};
use reqcall_http_send_reqwest::ReqwestHttpSend;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::request::SigningContext;
use crate::response;

/// Timeout applied uniformly to every call by the default transport.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client is the façade for calling the API.
///
/// It holds only the immutable [`Config`] and the injected collaborators;
/// every per-call value (body, digest, timestamp, endpoint) lives in a
/// fresh per-call signing context, so a shared Client is safe to use from
/// concurrent tasks.
///
/// ## Example
///
/// ```no_run
/// use reqcall::{Client, Config};
///
/// # async fn example() -> reqcall::Result<()> {
/// let client = Client::new(
///     Config::new()
///         .with_user_id(123)
///         .with_secret("apisecret")
///         .with_api_url("https://api.local")
///         .with_api_version(1)
///         .with_realm("REALM"),
/// )?;
///
/// let payload = client.call("unit/test", &["var1", "var2"]).await?;
/// # let _ = payload;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    ctx: Context,
}

impl Client {
    /// Create a client with the default reqwest transport and the system
    /// clock. The transport applies a 60-second timeout to every call;
    /// callers needing retries must layer their own policy on top.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| {
                Error::unexpected(format!("failed to build http client: {e}")).with_source(e)
            })?;

        Self::with_context(config, Context::new(ReqwestHttpSend::new(client)))
    }

    /// Create a client with an injected [`Context`], so tests can
    /// substitute the transport or fix the clock.
    pub fn with_context(config: Config, ctx: Context) -> Result<Self> {
        // Catch an unsupported version here rather than on the first call.
        if !matches!(config.api_version, 1..=3) {
            return Err(Error::config_invalid(format!(
                "unexpected api version {}",
                config.api_version
            )));
        }

        Ok(Self { config, ctx })
    }

    /// Perform a POST call to the API.
    ///
    /// `params` is serialized to the JSON request body; the success payload
    /// comes back as an opaque [`Value`] for the call site to decode.
    pub async fn call<T: Serialize + ?Sized>(&self, path: &str, params: &T) -> Result<Value> {
        self.call_with_method(path, params, Method::POST).await
    }

    /// Perform a call with an explicit HTTP method.
    ///
    /// GET requests carry no body regardless of `params`.
    pub async fn call_with_method<T: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &T,
        method: Method,
    ) -> Result<Value> {
        let signing = SigningContext::new(&self.config, path, params, method, self.ctx.now())?;
        let endpoint = signing.endpoint.clone();
        debug!("calling {} {}", signing.method, endpoint);

        let req = signing.into_request(&self.config)?;
        let resp = self.ctx.http_send(req).await?;

        response::interpret(self.config.api_version, &endpoint, resp.body())
    }
}
