use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

use super::state::WaitlistSignup;

/// Delivers a validated signup somewhere.
///
/// Enrollment cannot fail: there is no backend yet, only [`SimulatedTransport`].
/// A real integration would swap the implementation and grow an error type
/// (network, server, timeout) on this trait.
pub trait WaitlistTransport {
    fn enroll<'a>(&'a self, signup: &'a WaitlistSignup) -> LocalBoxFuture<'a, ()>;
}

/// Waits a fixed delay to stand in for a network round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn from_config() -> Self {
        Self::new(crate::config::get_submit_delay_ms())
    }
}

impl WaitlistTransport for SimulatedTransport {
    fn enroll<'a>(&'a self, signup: &'a WaitlistSignup) -> LocalBoxFuture<'a, ()> {
        match serde_json::to_string(signup) {
            Ok(body) => log::debug!("Simulating waitlist enrollment ({}ms): {}", self.delay_ms, body),
            Err(e) => log::debug!("Simulating waitlist enrollment, payload not serializable: {}", e),
        }
        TimeoutFuture::new(self.delay_ms).boxed_local()
    }
}
