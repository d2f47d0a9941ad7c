//! The two sides of the storefront
//!
//! Every access decision in the gateway reduces to one question: which
//! portal does this route or request belong to, and is that portal logged
//! in? [`Portal`] carries the per-portal constants (session keys, login
//! route) so the answer is always derived in one place.

use crate::session::{SessionRead, keys};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the shop a user belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    Seller,
    Customer,
}

impl Portal {
    /// String form matching the storefront's role metadata.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Customer => "customer",
        }
    }

    /// Session key holding this portal's logged-in flag.
    pub const fn flag_key(&self) -> &'static str {
        match self {
            Self::Seller => keys::SELLER_LOGGED_IN,
            Self::Customer => keys::CUSTOMER_LOGGED_IN,
        }
    }

    /// Session key holding this portal's bearer token.
    pub const fn token_key(&self) -> &'static str {
        match self {
            Self::Seller => keys::SELLER_TOKEN,
            Self::Customer => keys::CUSTOMER_TOKEN,
        }
    }

    /// Route name of this portal's login page.
    pub const fn login_route(&self) -> &'static str {
        match self {
            Self::Seller => "sellerLogin",
            Self::Customer => "customerLogin",
        }
    }

    /// Where a fresh login lands: the seller dashboard or the storefront.
    pub const fn entry_path(&self) -> &'static str {
        match self {
            Self::Seller => "/seller/dashboard",
            Self::Customer => "/",
        }
    }

    /// Whether this portal is currently logged in.
    ///
    /// Presence of the flag is trusted at face value; there is no expiry
    /// check at this level.
    pub fn is_logged_in(&self, session: &dyn SessionRead) -> bool {
        session.contains(self.flag_key())
    }

    /// This portal's bearer token, if one is stored.
    pub fn token(&self, session: &dyn SessionRead) -> Option<String> {
        session.get(self.token_key())
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an unknown portal/role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPortal(pub String);

impl fmt::Display for UnknownPortal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown portal: {}", self.0)
    }
}

impl std::error::Error for UnknownPortal {}

impl FromStr for Portal {
    type Err = UnknownPortal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seller" => Ok(Self::Seller),
            "customer" => Ok(Self::Customer),
            other => Err(UnknownPortal(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    #[test]
    fn test_portal_keys() {
        assert_eq!(Portal::Seller.flag_key(), "sellerLoggedIn");
        assert_eq!(Portal::Seller.token_key(), "sellerToken");
        assert_eq!(Portal::Customer.flag_key(), "customerLoggedIn");
        assert_eq!(Portal::Customer.token_key(), "customerToken");
    }

    #[test]
    fn test_portal_login_routes() {
        assert_eq!(Portal::Seller.login_route(), "sellerLogin");
        assert_eq!(Portal::Customer.login_route(), "customerLogin");
    }

    #[test]
    fn test_is_logged_in_reads_flag_key() {
        let session = MemorySession::new();
        assert!(!Portal::Seller.is_logged_in(&session));
        assert!(!Portal::Customer.is_logged_in(&session));

        session.insert("sellerLoggedIn", "true");
        assert!(Portal::Seller.is_logged_in(&session));
        assert!(!Portal::Customer.is_logged_in(&session));
    }

    #[test]
    fn test_token_never_crosses_portals() {
        let session = MemorySession::new();
        session.insert("sellerToken", "s-token");

        assert_eq!(Portal::Seller.token(&session), Some("s-token".to_string()));
        assert_eq!(Portal::Customer.token(&session), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("seller".parse(), Ok(Portal::Seller));
        assert_eq!("customer".parse(), Ok(Portal::Customer));
        assert_eq!(
            "admin".parse::<Portal>(),
            Err(UnknownPortal("admin".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Portal::Seller).unwrap(), "\"seller\"");
        let portal: Portal = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(portal, Portal::Customer);
    }
}
