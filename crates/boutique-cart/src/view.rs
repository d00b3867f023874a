//! View patches, the view-model, and the page adapter seam.
//!
//! The controller never touches a rendered page. Decision logic produces
//! [`ViewPatch`] values; a [`CartView`] adapter owned by the embedding page
//! applies them to real elements. This keeps the "decide what to display"
//! half pure and unit-testable without any DOM.

use boutique_types::ItemId;

use crate::constants::ROW_ID_PREFIX;

/// One instruction to the page.
///
/// Patches are applied in order; each is an authoritative overwrite of
/// whatever the page showed before, never an increment on top of it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPatch {
    /// Present a blocking confirmation-style notification.
    Notify(String),
    /// Present an error notification.
    NotifyError(String),
    /// Overwrite the cart-count badge.
    SetBadge(u64),
    /// Overwrite the displayed cart total. Render with [`format_total`].
    SetTotal(f64),
    /// Remove the row element keyed [`row_element_id`] for this item.
    RemoveRow(ItemId),
    /// Discard all local state and reload the page from the server.
    Reload,
}

/// Render a cart total the way the page displays it: two decimal places.
pub fn format_total(total: f64) -> String {
    format!("{total:.2}")
}

/// Element id of the row displaying one line item: `cart-item-<id>`.
///
/// Wire format with the template layer — must match what the server renders.
pub fn row_element_id(item_id: &ItemId) -> String {
    format!("{ROW_ID_PREFIX}{item_id}")
}

/// Applies patches to the rendered page.
///
/// Implementations are thin: look up the element, mutate it. A page without
/// the addressed element (no total display on product pages, say) applies
/// the patch as a no-op. `confirm` blocks its own operation, not the event
/// loop.
pub trait CartView: Send + Sync {
    /// Apply one patch to the page.
    fn apply(&self, patch: &ViewPatch);

    /// Blocking confirmation prompt. Returning `false` aborts the operation
    /// before any request is sent.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<V: CartView + ?Sized> CartView for std::sync::Arc<V> {
    fn apply(&self, patch: &ViewPatch) {
        (**self).apply(patch)
    }

    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Owned projection of what the page currently displays.
///
/// Seeded from the server-rendered page at construction and folded forward
/// by patch application — never read back from the page, never persisted.
/// A reload rebuilds it from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayedCartState {
    /// Cart-count badge value.
    pub badge_count: u64,
    /// Displayed cart total.
    pub total: f64,
}

impl DisplayedCartState {
    pub fn new(badge_count: u64, total: f64) -> Self {
        Self { badge_count, total }
    }

    /// Fold one patch into the model. Only badge and total patches change
    /// it; notifications and row removal live on the page alone.
    pub fn absorb(&mut self, patch: &ViewPatch) {
        match patch {
            ViewPatch::SetBadge(count) => self.badge_count = *count,
            ViewPatch::SetTotal(total) => self.total = *total,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_render_with_two_decimals() {
        assert_eq!(format_total(49.98), "49.98");
        assert_eq!(format_total(50.0), "50.00");
        assert_eq!(format_total(0.1), "0.10");
    }

    #[test]
    fn row_ids_follow_the_template_keying() {
        assert_eq!(row_element_id(&ItemId::from("7")), "cart-item-7");
    }

    #[test]
    fn model_absorbs_only_badge_and_total() {
        let mut state = DisplayedCartState::new(3, 10.0);

        state.absorb(&ViewPatch::Notify("Added".into()));
        state.absorb(&ViewPatch::RemoveRow(ItemId::from("7")));
        assert_eq!(state, DisplayedCartState::new(3, 10.0));

        state.absorb(&ViewPatch::SetBadge(5));
        state.absorb(&ViewPatch::SetTotal(49.98));
        assert_eq!(state.badge_count, 5);
        assert_eq!(state.total, 49.98);
    }
}
