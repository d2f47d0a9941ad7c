//! Session-flag store interface
//!
//! The storefront keeps its login state in a small key-value store: a
//! presence flag and a bearer token per portal. The store is written only by
//! the login/logout flows; everything else (navigation guard, request
//! authenticator) reads it through [`SessionRead`], which is passed in
//! explicitly at construction time instead of living in a global.

use dashmap::DashMap;

/// Well-known session keys.
///
/// The key strings are part of the contract with the storefront and must not
/// change: login flows write exactly these, the guard and the authenticator
/// read exactly these.
pub mod keys {
    /// Presence flag: a seller is logged in.
    pub const SELLER_LOGGED_IN: &str = "sellerLoggedIn";
    /// Presence flag: a customer is logged in.
    pub const CUSTOMER_LOGGED_IN: &str = "customerLoggedIn";
    /// Bearer token for seller-portal requests.
    pub const SELLER_TOKEN: &str = "sellerToken";
    /// Bearer token for customer-portal requests.
    pub const CUSTOMER_TOKEN: &str = "customerToken";
}

/// Read-only view of the session-flag store.
///
/// Lookups are local and synchronous; absence of a key is not an error. No
/// expiry or consistency checks happen at this level, presence of a flag is
/// trusted at face value.
pub trait SessionRead: Send + Sync {
    /// Look up a session value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether a key is present, regardless of its value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory session store.
///
/// Used by tests and by standalone client setups that manage tokens
/// directly; the gateway uses its persistent store instead.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: DashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a session value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a session value.
    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Remove everything.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl SessionRead for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }
}
