//! Redirect lookup with an artificial delay.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::redirect::{RedirectSimulation, RedirectState};
use crate::domain::repositories::RedirectMap;

/// Resolves short codes against a static mapping after a fixed delay.
///
/// The delay imitates a remote lookup. Cancellation is by future drop:
/// a caller that abandons the in-flight [`resolve`](Self::resolve) before
/// the timer fires prevents the lookup and any navigation effect.
pub struct RedirectService {
    map: Arc<dyn RedirectMap>,
    delay: Duration,
}

impl RedirectService {
    pub fn new(map: Arc<dyn RedirectMap>, delay: Duration) -> Self {
        Self { map, delay }
    }

    /// Waits out the delay, then settles the lookup.
    ///
    /// Returns a terminal [`RedirectState`]: `Resolved` with the mapped
    /// destination, or `Failed` with the not-found message.
    pub async fn resolve(&self, code: &str) -> RedirectState {
        let mut simulation = RedirectSimulation::new();

        tokio::time::sleep(self.delay).await;

        let outcome = self.map.find(code).await;
        simulation.complete(outcome).clone()
    }
}
