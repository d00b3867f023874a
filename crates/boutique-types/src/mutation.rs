//! Wire types for the three cart mutation endpoints.
//!
//! Request bodies serialize to exactly what the server's JSON handlers
//! expect — `{product_id, quantity}`, `{item_id, quantity}`, `{item_id}` —
//! and [`ServerReply`] decodes what they return. The optional fields of the
//! reply are operation-dependent, not a shared schema: an add replies with
//! `cart_count`, update and remove with `cart_total`, and a client must
//! tolerate either being absent.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, ProductId};

/// One cart mutation, as submitted to the server.
///
/// Serializes untagged so each variant's body matches its endpoint's wire
/// format field-for-field. Quantities are validated before a mutation is
/// ever constructed (gesture routing drops unparseable input), so `u32`
/// here means "already known to be a non-negative integer".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CartMutation {
    /// Add `quantity` units of a product to the cart.
    AddItem {
        product_id: ProductId,
        quantity: u32,
    },
    /// Set an existing line item's quantity.
    UpdateQuantity { item_id: ItemId, quantity: u32 },
    /// Remove a line item entirely.
    RemoveItem { item_id: ItemId },
}

/// Server-authoritative reply to any cart mutation.
///
/// `success: false` means the server rejected the mutation (stock,
/// validation) and `message` says why, verbatim. On success `message` is a
/// human-facing confirmation. `cart_count` and `cart_total` carry the
/// recomputed authoritative values when the operation supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_total: Option<f64>,
}

impl ServerReply {
    /// A successful reply with no recomputed fields.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            cart_count: None,
            cart_total: None,
        }
    }

    /// A rejection carrying the server's reason.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            cart_count: None,
            cart_total: None,
        }
    }

    /// Attach a recomputed cart item count.
    pub fn with_count(mut self, count: u64) -> Self {
        self.cart_count = Some(count);
        self
    }

    /// Attach a recomputed cart total.
    pub fn with_total(mut self, total: f64) -> Self {
        self.cart_total = Some(total);
        self
    }
}
