use crate::time::{self, DateTime};
use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the collaborators a client call depends on.
///
/// Both components are injectable so tests can substitute a canned
/// transport or a fixed clock without touching the call path.
///
/// ## Example
///
/// ```ignore
/// use reqcall_core::Context;
///
/// let ctx = Context::new(MyHttpSend).with_clock(MyFixedClock);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Context {
    /// Create a new Context with the given HTTP transport and the system
    /// clock.
    pub fn new(http: impl HttpSend) -> Self {
        Self {
            http: Arc::new(http),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the HTTP transport implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the clock implementation.
    ///
    /// # Note
    ///
    /// Production code should keep the system clock; a fixed clock is only
    /// useful to make signatures deterministic in tests.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Take the current time from the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }
}

/// HttpSend is used to transmit the signed request.
///
/// This trait is designed especially for the client's single
/// build-transmit-interpret sequence, please don't use it as a general
/// http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Clock is the overridable time source used when signing requests.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Take the current time.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the real system clock with the local UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        time::now()
    }
}
