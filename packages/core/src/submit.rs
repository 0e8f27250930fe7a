//! Duplicate-submission protection for write requests.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Client-generated key the server can deduplicate a write on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotencyKey(pub Ulid);

impl IdempotencyKey {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for IdempotencyKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated request body ready to send, with its idempotency key.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub body: T,
    pub key: IdempotencyKey,
}

/// Tracks one user intent to write.
///
/// While a request is in flight further submits are refused. A failed
/// attempt keeps its key so an unchanged retry is deduplicated with it.
/// Editing the body or succeeding starts a new intent with a new key.
///
/// The key also names the attempt: a response only belongs to this guard
/// if [`SubmitGuard::owns`] accepts its key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    key: Option<IdempotencyKey>,
    in_flight: bool,
    edited: bool,
}

impl SubmitGuard {
    /// Start a submission. Returns `None` if one is already running.
    pub fn begin(&mut self) -> Option<IdempotencyKey> {
        if self.in_flight {
            tracing::debug!("submit ignored, request already in flight");
            return None;
        }
        if std::mem::take(&mut self.edited) {
            self.key = None;
        }
        self.in_flight = true;
        Some(*self.key.get_or_insert_with(IdempotencyKey::new))
    }

    /// The body changed, so the next attempt is a different write.
    ///
    /// A request already in flight keeps its key until it answers.
    pub fn invalidate(&mut self) {
        if self.in_flight {
            self.edited = true;
        } else {
            self.key = None;
        }
    }

    /// Whether a response tagged with `key` answers this guard's request.
    pub fn owns(&self, key: IdempotencyKey) -> bool {
        self.in_flight && self.key == Some(key)
    }

    pub fn fail(&mut self) {
        self.in_flight = false;
    }

    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.edited = false;
        self.key = None;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn key(&self) -> Option<IdempotencyKey> {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let mut guard = SubmitGuard::default();
        assert!(guard.begin().is_some());
        assert!(guard.begin().is_none());
        assert!(guard.in_flight());
    }

    #[test]
    fn retry_after_failure_reuses_key() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().unwrap();
        guard.fail();
        let retry = guard.begin().unwrap();
        assert_eq!(first, retry);
    }

    #[test]
    fn success_rotates_key() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().unwrap();
        guard.succeed();
        assert_eq!(guard.key(), None);
        let next = guard.begin().unwrap();
        assert_ne!(first, next);
    }

    #[test]
    fn edit_after_failure_gets_a_new_key() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().unwrap();
        guard.fail();
        guard.invalidate();
        let retry = guard.begin().unwrap();
        assert_ne!(first, retry);
    }

    #[test]
    fn edit_while_in_flight_keeps_the_key_until_it_answers() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().unwrap();
        guard.invalidate();
        assert!(guard.owns(first));
        guard.fail();
        let retry = guard.begin().unwrap();
        assert_ne!(first, retry);
    }

    #[test]
    fn only_the_in_flight_key_is_owned() {
        let mut guard = SubmitGuard::default();
        let key = guard.begin().unwrap();
        assert!(!guard.owns(IdempotencyKey::new()));
        assert!(guard.owns(key));
        guard.fail();
        assert!(!guard.owns(key));
    }
}
