//! Redirect simulation state machine.

/// Message shown when a code cannot be resolved.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found or expired.";

/// Lifecycle state of a redirect lookup.
///
/// A lookup starts in `Pending`, waits out the artificial delay, and then
/// settles into exactly one terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    /// The delay timer has not fired yet.
    Pending,
    /// The code was found; navigate to `location`.
    Resolved { location: String },
    /// The code is unknown or expired.
    Failed { message: String },
}

impl RedirectState {
    /// Returns true once the lookup has settled.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RedirectState::Pending)
    }
}

/// Tracks a single redirect lookup from entry to settlement.
///
/// The transition out of [`RedirectState::Pending`] happens at most once;
/// later calls to [`complete`](Self::complete) leave the settled state
/// untouched.
#[derive(Debug, Clone)]
pub struct RedirectSimulation {
    state: RedirectState,
}

impl RedirectSimulation {
    pub fn new() -> Self {
        Self {
            state: RedirectState::Pending,
        }
    }

    pub fn state(&self) -> &RedirectState {
        &self.state
    }

    /// Settles the lookup with the mapping result.
    ///
    /// `Some(location)` resolves the lookup, `None` fails it with
    /// [`NOT_FOUND_MESSAGE`]. Returns the (possibly already settled) state.
    pub fn complete(&mut self, outcome: Option<String>) -> &RedirectState {
        if matches!(self.state, RedirectState::Pending) {
            self.state = match outcome {
                Some(location) => RedirectState::Resolved { location },
                None => RedirectState::Failed {
                    message: NOT_FOUND_MESSAGE.to_string(),
                },
            };
        }
        &self.state
    }
}

impl Default for RedirectSimulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        let sim = RedirectSimulation::new();
        assert_eq!(*sim.state(), RedirectState::Pending);
        assert!(!sim.state().is_terminal());
    }

    #[test]
    fn test_complete_with_location_resolves() {
        let mut sim = RedirectSimulation::new();
        let state = sim.complete(Some("https://example.com".to_string()));
        assert_eq!(
            *state,
            RedirectState::Resolved {
                location: "https://example.com".to_string()
            }
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn test_complete_without_location_fails_with_message() {
        let mut sim = RedirectSimulation::new();
        let state = sim.complete(None);
        assert_eq!(
            *state,
            RedirectState::Failed {
                message: NOT_FOUND_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let mut sim = RedirectSimulation::new();
        sim.complete(None);
        let state = sim.complete(Some("https://example.com".to_string())).clone();
        assert!(matches!(state, RedirectState::Failed { .. }));
    }
}
