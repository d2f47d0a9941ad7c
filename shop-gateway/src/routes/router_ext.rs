//! Single-request driving of the assembled app
//!
//! Answers one request without binding a listener. Integration tests use
//! this to exercise the full middleware stack, navigation guard included.

use http::Response;
use tower::Service;

use crate::core::GatewayState;
use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::Request;

/// Response (or failure) of a single driven request
pub type OneshotResult = Result<Response<Body>>;

/// Lets a stateful `Router` answer one request directly
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a single request against the given gateway state
    ///
    /// # Example
    ///
    /// ```ignore
    /// use http::Request;
    ///
    /// let state = GatewayState::initialize(&config).await;
    /// let mut app = routes::build_app(&state);
    /// let request = Request::builder()
    ///     .uri("/seller/dashboard")
    ///     .body(Body::empty())?;
    ///
    /// let response = app.oneshot(&state, request).await?;
    /// ```
    async fn oneshot(&mut self, state: &GatewayState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<GatewayState> {
    async fn oneshot(&mut self, state: &GatewayState, request: Request<Body>) -> OneshotResult {
        // a stateless clone plus the state becomes a callable Service
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
