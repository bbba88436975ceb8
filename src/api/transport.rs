use crate::config::Config;
use crate::error::{DragonError, Result};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::io::Read;
use std::num::NonZeroU32;
use std::thread;
use tracing::debug;

/// A fully-formed outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends requests. Non-2xx answers come back as ordinary responses; only
/// connection-level failures are errors.
pub trait Doer: Send + Sync {
    fn execute(&self, request: &Request) -> Result<Response>;
}

impl<D: Doer + ?Sized> Doer for std::sync::Arc<D> {
    fn execute(&self, request: &Request) -> Result<Response> {
        (**self).execute(request)
    }
}

/// Blocking HTTP transport on a shared ureq agent, throttled by a governor quota.
pub struct UreqDoer {
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl UreqDoer {
    pub fn new(config: &Config) -> Result<Self> {
        let per_second = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            DragonError::Config("requests per second must be positive".to_string())
        })?;
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Ok(UreqDoer {
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            clock: DefaultClock::default(),
        })
    }

    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            let wait = not_until.wait_time_from(self.clock.now());
            debug!(client = "data dragon", wait_ms = wait.as_millis() as u64, "throttled");
            thread::sleep(wait);
        }
    }
}

impl Doer for UreqDoer {
    fn execute(&self, request: &Request) -> Result<Response> {
        self.wait_for_slot();

        let (status, reader) = match self.agent.request(request.method, &request.url).call() {
            Ok(resp) => (resp.status(), resp.into_reader()),
            Err(ureq::Error::Status(status, resp)) => (status, resp.into_reader()),
            Err(ureq::Error::Transport(e)) => return Err(DragonError::Transport(e.to_string())),
        };

        let mut body = Vec::new();
        reader
            .take(64 * 1024 * 1024)
            .read_to_end(&mut body)
            .map_err(|e| DragonError::Transport(e.to_string()))?;

        Ok(Response { status, body })
    }
}
