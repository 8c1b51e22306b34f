//! Simulated device-authorization state machine.
//!
//! Receiver devices run with editing locked; an unlock request "sent" to
//! the paired developer device stays pending until it is allowed, denied,
//! or expires. Each of the three outcomes replaces the pending state, so a
//! request resolves exactly once and a stale timeout can never fire after
//! an answer.

use std::time::{Duration, Instant};

/// How long an unlock request stays pending before it expires.
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Editing permission for this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unlocked,
    Locked,
    RequestPending { deadline: Instant },
}

impl AccessState {
    pub fn can_edit(&self) -> bool {
        matches!(self, AccessState::Unlocked)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AccessState::RequestPending { .. })
    }

    /// Enter receiver (locked) mode.
    pub fn lock(&mut self) {
        *self = AccessState::Locked;
    }

    /// File an unlock request. Only valid from `Locked`; returns whether a
    /// request was actually started.
    pub fn request(&mut self, now: Instant) -> bool {
        if matches!(self, AccessState::Locked) {
            *self = AccessState::RequestPending {
                deadline: now + AUTH_TIMEOUT,
            };
            true
        } else {
            false
        }
    }

    /// Grant the pending request, unlocking the device.
    pub fn allow(&mut self) -> bool {
        if self.is_pending() {
            *self = AccessState::Unlocked;
            true
        } else {
            false
        }
    }

    /// Reject the pending request; the device stays locked.
    pub fn deny(&mut self) -> bool {
        if self.is_pending() {
            *self = AccessState::Locked;
            true
        } else {
            false
        }
    }

    /// Expire a pending request whose deadline has passed. Returns true
    /// exactly once per request.
    pub fn poll_expired(&mut self, now: Instant) -> bool {
        if let AccessState::RequestPending { deadline } = *self
            && now >= deadline
        {
            *self = AccessState::Locked;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_only_starts_from_locked() {
        let now = Instant::now();
        let mut access = AccessState::Unlocked;
        assert!(!access.request(now));

        access.lock();
        assert!(access.request(now));
        assert!(access.is_pending());
        // a second request while one is pending is refused
        assert!(!access.request(now));
    }

    #[test]
    fn allow_unlocks_and_deny_keeps_locked() {
        let now = Instant::now();

        let mut access = AccessState::Locked;
        access.request(now);
        assert!(access.allow());
        assert!(access.can_edit());

        let mut access = AccessState::Locked;
        access.request(now);
        assert!(access.deny());
        assert_eq!(access, AccessState::Locked);
    }

    #[test]
    fn expiry_fires_exactly_once() {
        let now = Instant::now();
        let mut access = AccessState::Locked;
        access.request(now);

        assert!(!access.poll_expired(now + AUTH_TIMEOUT - Duration::from_millis(1)));
        assert!(access.poll_expired(now + AUTH_TIMEOUT));
        assert!(!access.poll_expired(now + AUTH_TIMEOUT * 2));
        assert_eq!(access, AccessState::Locked);
    }

    #[test]
    fn answered_request_cannot_expire_later() {
        let now = Instant::now();
        let mut access = AccessState::Locked;
        access.request(now);
        access.allow();

        assert!(!access.poll_expired(now + AUTH_TIMEOUT * 2));
        assert!(access.can_edit());
    }
}
