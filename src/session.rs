//! Session gate and per-session state.
//!
//! A `SessionContext` bundles the authenticated flag with the table cache so
//! there is no hidden process-wide state; every sync-engine operation takes
//! the context explicitly, which also keeps tests independent of each other.
//!
//! The gate is deliberately simple for a single-user personal tool: one
//! shared secret, no lockout, no rate limiting, no hashing.

use crate::cache::TableCache;

/// Per-session state: the configured secret, the authenticated flag, and
/// the table cache.
#[derive(Debug)]
pub struct SessionContext {
    secret: String,
    authenticated: bool,
    cache: TableCache,
}

impl SessionContext {
    /// A new, unauthenticated session gated by `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            authenticated: false,
            cache: TableCache::new(),
        }
    }

    /// Compares the supplied secret against the configured one. On match the
    /// session becomes authenticated for its remaining lifetime; on mismatch
    /// nothing changes. An empty configured secret never authenticates.
    pub fn authenticate(&mut self, supplied: &str) -> bool {
        if !self.secret.is_empty() && supplied == self.secret {
            self.authenticated = true;
        }
        self.authenticated
    }

    /// Returns the session to the unauthenticated state.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut TableCache {
        &mut self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_secret_stays_unauthenticated() {
        let mut ctx = SessionContext::new("admin123");
        assert!(!ctx.authenticate("wrong"));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_right_secret_authenticates() {
        let mut ctx = SessionContext::new("admin123");
        assert!(ctx.authenticate("admin123"));
        assert!(ctx.is_authenticated());
    }

    #[test]
    fn test_failed_attempt_does_not_drop_existing_auth() {
        let mut ctx = SessionContext::new("admin123");
        ctx.authenticate("admin123");
        ctx.authenticate("wrong");
        assert!(ctx.is_authenticated());
    }

    #[test]
    fn test_logout() {
        let mut ctx = SessionContext::new("admin123");
        ctx.authenticate("admin123");
        ctx.logout();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_empty_configured_secret_never_authenticates() {
        let mut ctx = SessionContext::new("");
        assert!(!ctx.authenticate(""));
        assert!(!ctx.is_authenticated());
    }
}
