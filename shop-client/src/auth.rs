//! Bearer-token policy for outgoing requests
//!
//! Mirrors the storefront contract: requests under the literal `/seller`
//! prefix carry the seller token, everything else carries the customer
//! token. A missing token means no header, never a failure.

use shared::{Portal, SessionRead};
use std::fmt;
use std::sync::Arc;

/// Literal path prefix that routes a request to the seller portal.
pub const SELLER_PREFIX: &str = "/seller";

/// Decides which bearer token (if any) an outgoing request carries.
///
/// Reads the session context handed in at construction; never mutates it
/// and never blocks the request.
#[derive(Clone)]
pub struct RequestAuthenticator {
    session: Arc<dyn SessionRead>,
}

impl RequestAuthenticator {
    pub fn new(session: Arc<dyn SessionRead>) -> Self {
        Self { session }
    }

    /// Which portal a path belongs to.
    ///
    /// The match is a literal prefix test, not segment-aware. Paths may be
    /// given relative to the API base ("seller/login") or absolute
    /// ("/seller/login").
    pub fn portal_for_path(path: &str) -> Portal {
        let matches_seller = if path.starts_with('/') {
            path.starts_with(SELLER_PREFIX)
        } else {
            path.starts_with(&SELLER_PREFIX[1..])
        };

        if matches_seller {
            Portal::Seller
        } else {
            Portal::Customer
        }
    }

    /// The `Authorization` header value for a request to `path`, if the
    /// owning portal has a stored token.
    pub fn bearer_for_path(&self, path: &str) -> Option<String> {
        let portal = Self::portal_for_path(path);
        portal
            .token(self.session.as_ref())
            .map(|t| format!("Bearer {}", t))
    }

    /// Attach the Authorization header to an outgoing request when a token
    /// is available.
    pub fn apply(&self, path: &str, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer_for_path(path) {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }
}

impl fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestAuthenticator").finish_non_exhaustive()
    }
}
