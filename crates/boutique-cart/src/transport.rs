//! HTTP transport for cart mutations.
//!
//! The controller talks to the [`CartTransport`] trait, never to reqwest
//! directly, so the decision flow can be driven by a scripted transport in
//! tests. [`HttpTransport`] is the production implementation: one JSON POST
//! per mutation, tagged with the AJAX marker header.

use async_trait::async_trait;
use boutique_types::{CartMutation, ServerReply};
use tracing::debug;

use crate::constants::{
    AJAX_MARKER_HEADER, AJAX_MARKER_VALUE, DEFAULT_ADD_TO_CART_PATH, DEFAULT_REMOVE_FROM_CART_PATH,
    DEFAULT_UPDATE_CART_PATH,
};

/// Errors from submitting a mutation.
///
/// All three variants are "transport/parse" failures to the rest of the
/// client: logged, surfaced as one generic message, terminal for that single
/// operation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (connection refused, DNS, reset).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered outside the 2xx range.
    #[error("server returned status {0}")]
    Status(u16),
    /// The body was not a decodable reply.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Issues cart mutations against the server.
#[async_trait]
pub trait CartTransport: Send + Sync {
    /// Submit one mutation and decode the server's reply.
    ///
    /// A reply with `success: false` is an `Ok` here — application-level
    /// rejection is the decision layer's concern, not the transport's.
    async fn submit(&self, mutation: &CartMutation) -> Result<ServerReply, TransportError>;
}

#[async_trait]
impl<T: CartTransport + ?Sized> CartTransport for std::sync::Arc<T> {
    async fn submit(&self, mutation: &CartMutation) -> Result<ServerReply, TransportError> {
        (**self).submit(mutation).await
    }
}

/// Cart endpoint URLs, one per mutation.
///
/// A deployment that moves the routes overrides the corresponding field;
/// [`Endpoints::for_base`] covers the default layout.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub add_to_cart: String,
    pub update_cart: String,
    pub remove_from_cart: String,
}

impl Endpoints {
    /// Endpoint set for a server at `base` using the default route layout.
    pub fn for_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            add_to_cart: format!("{base}{DEFAULT_ADD_TO_CART_PATH}"),
            update_cart: format!("{base}{DEFAULT_UPDATE_CART_PATH}"),
            remove_from_cart: format!("{base}{DEFAULT_REMOVE_FROM_CART_PATH}"),
        }
    }

    /// The URL a mutation posts to.
    pub fn url_for(&self, mutation: &CartMutation) -> &str {
        match mutation {
            CartMutation::AddItem { .. } => &self.add_to_cart,
            CartMutation::UpdateQuantity { .. } => &self.update_cart,
            CartMutation::RemoveItem { .. } => &self.remove_from_cart,
        }
    }
}

/// reqwest-backed transport: JSON POST, AJAX marker header.
///
/// No timeout is configured: a hung request hangs its own operation's
/// feedback and nothing else. There is no cancellation token.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_client(reqwest::Client::new(), endpoints)
    }

    /// Use a preconfigured client (cookie store, proxy) with these endpoints.
    pub fn with_client(client: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl CartTransport for HttpTransport {
    async fn submit(&self, mutation: &CartMutation) -> Result<ServerReply, TransportError> {
        let url = self.endpoints.url_for(mutation);
        debug!(url, ?mutation, "submitting cart mutation");

        let response = self
            .client
            .post(url)
            .header(AJAX_MARKER_HEADER, AJAX_MARKER_VALUE)
            .json(mutation)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ServerReply>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_for_base_joins_default_routes() {
        let endpoints = Endpoints::for_base("http://localhost:8000/");
        assert_eq!(endpoints.add_to_cart, "http://localhost:8000/cart/add");
        assert_eq!(endpoints.update_cart, "http://localhost:8000/cart/update");
        assert_eq!(
            endpoints.remove_from_cart,
            "http://localhost:8000/cart/remove"
        );
    }

    #[test]
    fn url_for_routes_by_mutation() {
        let endpoints = Endpoints::for_base("http://shop.test");
        let add = CartMutation::AddItem {
            product_id: "42".into(),
            quantity: 1,
        };
        let update = CartMutation::UpdateQuantity {
            item_id: "7".into(),
            quantity: 3,
        };
        let remove = CartMutation::RemoveItem { item_id: "7".into() };

        assert_eq!(endpoints.url_for(&add), "http://shop.test/cart/add");
        assert_eq!(endpoints.url_for(&update), "http://shop.test/cart/update");
        assert_eq!(endpoints.url_for(&remove), "http://shop.test/cart/remove");
    }
}
