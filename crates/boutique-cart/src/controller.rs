//! Cart mutation synchronization.
//!
//! Three operations share one pattern: *user gesture → confirmation
//! (removal only) → network request → server-authoritative reply → view
//! patches, or a full-reload fallback*. The decision half is pure — the
//! `decide_*` functions map a [`ServerReply`] to patches with no view or
//! network dependency — and [`CartController`] glues transport, view-model,
//! and page adapter together.
//!
//! ```text
//!   Gesture ──▶ dispatch::resolve ──▶ CartTransport::submit ──▶ decide_*
//!                                                                  │
//!                     CartView::apply ◀── DisplayedCartState ◀── patches
//! ```
//!
//! # Concurrency
//!
//! The controller is cheaply cloneable (shared transport, shared view-model
//! behind a mutex) and nothing serializes overlapping operations: each
//! mutation is an independent future, responses patch the view in **arrival
//! order**, and the last arrival wins any field it writes. That race is
//! accepted, documented behavior. No lock is held across a request, only
//! across patch application.

use std::sync::Arc;

use boutique_types::{CartMutation, ItemId, ProductId, ServerReply};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::constants::{GENERIC_ERROR_MESSAGE, REMOVE_CONFIRM_PROMPT};
use crate::dispatch::{self, Gesture};
use crate::transport::{CartTransport, TransportError};
use crate::view::{CartView, DisplayedCartState, ViewPatch};

/// What a single mutation attempt amounted to.
///
/// Every failure is consumed at the operation's own boundary — operations
/// return a status, never an `Err`, and the page keeps accepting gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationStatus {
    /// The server accepted the mutation; patches were applied.
    Completed,
    /// The server rejected the mutation (`success: false`); its message was
    /// surfaced. Update rejections also force a reload.
    Rejected { message: String },
    /// Transport or decode failure. The cause was logged and the generic
    /// message surfaced; the view was not otherwise touched.
    Failed,
    /// The user declined the confirmation prompt. No request was sent.
    Cancelled,
}

/// Client-side counterpart of the server's cart: submits mutations and keeps
/// the displayed view in sync with what the server replies.
#[derive(Clone)]
pub struct CartController<T, V> {
    transport: T,
    view: V,
    state: Arc<Mutex<DisplayedCartState>>,
}

impl<T: CartTransport, V: CartView> CartController<T, V> {
    /// Build a controller over a transport and a page adapter.
    ///
    /// `initial` is what the server-rendered page currently shows — the
    /// view-model starts from it and is folded forward by patches only.
    pub fn new(transport: T, view: V, initial: DisplayedCartState) -> Self {
        Self {
            transport,
            view,
            state: Arc::new(Mutex::new(initial)),
        }
    }

    /// Snapshot of the current view-model.
    pub fn displayed(&self) -> DisplayedCartState {
        *self.state.lock()
    }

    /// Route a delegated gesture and run the mutation it resolves to.
    ///
    /// `None` means the gesture was not ours or failed validation; nothing
    /// was sent and nothing was patched.
    pub async fn handle_gesture(&self, gesture: &Gesture) -> Option<MutationStatus> {
        let mutation = dispatch::resolve(gesture)?;
        Some(self.dispatch(mutation).await)
    }

    /// Run one already-validated mutation.
    pub async fn dispatch(&self, mutation: CartMutation) -> MutationStatus {
        match mutation {
            CartMutation::AddItem {
                product_id,
                quantity,
            } => self.add_item(product_id, quantity).await,
            CartMutation::UpdateQuantity { item_id, quantity } => {
                self.update_quantity(item_id, quantity).await
            }
            CartMutation::RemoveItem { item_id } => self.remove_item(item_id).await,
        }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// On success the badge is overwritten with the server's recomputed
    /// count — an authoritative overwrite, never a local increment.
    pub async fn add_item(&self, product_id: ProductId, quantity: u32) -> MutationStatus {
        let mutation = CartMutation::AddItem {
            product_id,
            quantity,
        };
        let reply = match self.transport.submit(&mutation).await {
            Ok(reply) => reply,
            Err(e) => return self.transport_failed("add-item", &e),
        };

        let (status, patches) = decide_add(&reply);
        self.apply(&patches);
        status
    }

    /// Set a line item's quantity.
    ///
    /// On rejection the page is reloaded: the client has no record of the
    /// prior valid quantity, so discarding all local state is the only safe
    /// recovery.
    pub async fn update_quantity(&self, item_id: ItemId, quantity: u32) -> MutationStatus {
        let mutation = CartMutation::UpdateQuantity { item_id, quantity };
        let reply = match self.transport.submit(&mutation).await {
            Ok(reply) => reply,
            Err(e) => return self.transport_failed("update-quantity", &e),
        };

        let (status, patches) = decide_update(&reply);
        self.apply(&patches);
        status
    }

    /// Remove a line item, after a blocking confirmation prompt.
    pub async fn remove_item(&self, item_id: ItemId) -> MutationStatus {
        if !self.view.confirm(REMOVE_CONFIRM_PROMPT) {
            debug!(%item_id, "removal declined at confirmation");
            return MutationStatus::Cancelled;
        }

        let mutation = CartMutation::RemoveItem {
            item_id: item_id.clone(),
        };
        let reply = match self.transport.submit(&mutation).await {
            Ok(reply) => reply,
            Err(e) => return self.transport_failed("remove-item", &e),
        };

        // Badge math uses the count displayed at arrival time. Two
        // overlapping removals can both read the same prior value; see the
        // module docs on last-arrival-wins.
        let badge_count = self.state.lock().badge_count;
        let (status, patches) = decide_remove(&reply, item_id, badge_count);
        self.apply(&patches);
        status
    }

    /// Fold patches into the view-model and hand them to the page adapter,
    /// in order.
    fn apply(&self, patches: &[ViewPatch]) {
        let mut state = self.state.lock();
        for patch in patches {
            state.absorb(patch);
            self.view.apply(patch);
        }
    }

    fn transport_failed(&self, op: &'static str, err: &TransportError) -> MutationStatus {
        error!(op, %err, "cart mutation failed in transport");
        self.apply(&[ViewPatch::NotifyError(GENERIC_ERROR_MESSAGE.to_string())]);
        MutationStatus::Failed
    }
}

// ============================================================================
// Decision logic (pure)
// ============================================================================

/// Decide patches for an add-to-cart reply.
pub fn decide_add(reply: &ServerReply) -> (MutationStatus, Vec<ViewPatch>) {
    if !reply.success {
        return (
            MutationStatus::Rejected {
                message: reply.message.clone(),
            },
            vec![ViewPatch::NotifyError(format!("Error: {}", reply.message))],
        );
    }

    let mut patches = vec![ViewPatch::Notify(reply.message.clone())];
    match reply.cart_count {
        Some(count) => patches.push(ViewPatch::SetBadge(count)),
        None => warn!("add-to-cart reply carried no cart_count, badge left as-is"),
    }

    info!(count = ?reply.cart_count, "item added to cart");
    (MutationStatus::Completed, patches)
}

/// Decide patches for an update-quantity reply.
///
/// A rejection emits the error notification and then the reload, in that
/// order — no partial patch ever precedes the fallback. Success patches the
/// total only; per-row subtotals are deliberately left alone.
pub fn decide_update(reply: &ServerReply) -> (MutationStatus, Vec<ViewPatch>) {
    if !reply.success {
        warn!(message = %reply.message, "quantity update rejected, falling back to reload");
        return (
            MutationStatus::Rejected {
                message: reply.message.clone(),
            },
            vec![
                ViewPatch::NotifyError(format!("Error updating cart: {}", reply.message)),
                ViewPatch::Reload,
            ],
        );
    }

    let mut patches = Vec::new();
    match reply.cart_total {
        Some(total) => patches.push(ViewPatch::SetTotal(total)),
        None => warn!("update reply carried no cart_total, total left as-is"),
    }

    (MutationStatus::Completed, patches)
}

/// Decide patches for a remove-item reply.
///
/// `badge_count` is the count the page displays as the reply arrives. The
/// decrement assumes one removed row equals one count unit; the server never
/// confirms that, so a row holding more than one unit still decrements the
/// badge by exactly one. Known sharp edge.
pub fn decide_remove(
    reply: &ServerReply,
    item_id: ItemId,
    badge_count: u64,
) -> (MutationStatus, Vec<ViewPatch>) {
    if !reply.success {
        return (
            MutationStatus::Rejected {
                message: reply.message.clone(),
            },
            vec![ViewPatch::NotifyError(format!(
                "Error removing item: {}",
                reply.message
            ))],
        );
    }

    info!(%item_id, total = ?reply.cart_total, "item removed from cart");

    let mut patches = vec![
        ViewPatch::Notify(reply.message.clone()),
        ViewPatch::RemoveRow(item_id),
    ];
    if let Some(total) = reply.cart_total {
        patches.push(ViewPatch::SetTotal(total));
    }
    patches.push(ViewPatch::SetBadge(badge_count.saturating_sub(1)));

    (MutationStatus::Completed, patches)
}

// ============================================================================
// TESTS
// ============================================================================
