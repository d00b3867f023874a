//! Delegated gesture routing.
//!
//! The page attaches exactly two document-level listeners — pointer
//! activation and input commit — and routes by CSS-class markers on the
//! originating element chain. Rows come and go as the server mutates the
//! cart, so per-element listeners would leak or miss freshly inserted rows;
//! delegation is the only wiring that survives row churn.
//!
//! Routing yields `Option<CartMutation>`: `None` means the gesture is not
//! ours or fails validation, and nothing is dispatched either way.

use std::collections::HashMap;

use boutique_types::CartMutation;
use tracing::debug;

use crate::constants::{
    ADD_TO_CART_MARKER, DATASET_ITEM_ID, DATASET_PRODUCT_ID, DATASET_QUANTITY,
    QUANTITY_INPUT_MARKER, REMOVE_FROM_CART_MARKER,
};

/// The two document-level events the controller listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Click / tap / keyboard activation.
    PointerActivate,
    /// A committed input value change (blur, enter).
    InputCommit,
}

/// Snapshot of one element on the gesture path.
///
/// Carries only what routing reads: marker classes, dataset attributes, and
/// the current input value. Page adapters build these from real events; tests
/// build them directly.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub classes: Vec<String>,
    pub dataset: HashMap<String, String>,
    pub value: Option<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn has_class(&self, marker: &str) -> bool {
        self.classes.iter().any(|c| c == marker)
    }

    fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}

/// One user gesture, as seen by a document-level delegate.
#[derive(Debug, Clone)]
pub struct Gesture {
    pub kind: GestureKind,
    /// Origin element first, then its ancestors up to the document root.
    pub path: Vec<Element>,
}

impl Gesture {
    /// A pointer activation whose origin chain is `path` (origin first).
    pub fn pointer(path: Vec<Element>) -> Self {
        Self {
            kind: GestureKind::PointerActivate,
            path,
        }
    }

    /// A committed input change on `target`.
    pub fn commit(target: Element) -> Self {
        Self {
            kind: GestureKind::InputCommit,
            path: vec![target],
        }
    }

    /// `Element.closest()`: the origin element or its nearest ancestor
    /// carrying `marker`.
    fn closest(&self, marker: &str) -> Option<&Element> {
        self.path.iter().find(|el| el.has_class(marker))
    }

    /// The element the event fired on.
    fn target(&self) -> Option<&Element> {
        self.path.first()
    }
}

/// Resolve a delegated gesture to the mutation it asks for.
pub fn resolve(gesture: &Gesture) -> Option<CartMutation> {
    match gesture.kind {
        GestureKind::PointerActivate => resolve_pointer(gesture),
        GestureKind::InputCommit => resolve_commit(gesture),
    }
}

/// Pointer path: match by closest, so a click on an icon inside a button
/// still routes. Removal is checked first, then quantity inputs (a click
/// that commits a spinner arrow lands here), then add triggers.
fn resolve_pointer(gesture: &Gesture) -> Option<CartMutation> {
    if let Some(el) = gesture.closest(REMOVE_FROM_CART_MARKER) {
        let item_id = el.data(DATASET_ITEM_ID)?;
        return Some(CartMutation::RemoveItem {
            item_id: item_id.into(),
        });
    }

    if let Some(el) = gesture.closest(QUANTITY_INPUT_MARKER) {
        return quantity_update(el);
    }

    if let Some(el) = gesture.closest(ADD_TO_CART_MARKER) {
        let product_id = el.data(DATASET_PRODUCT_ID)?;
        let quantity = match el.data(DATASET_QUANTITY) {
            Some(raw) => parse_quantity(raw)?,
            None => 1,
        };
        return Some(CartMutation::AddItem {
            product_id: product_id.into(),
            quantity,
        });
    }

    None
}

/// Commit path: the input element itself must carry the marker class.
fn resolve_commit(gesture: &Gesture) -> Option<CartMutation> {
    let target = gesture.target()?;
    if target.has_class(QUANTITY_INPUT_MARKER) {
        quantity_update(target)
    } else {
        None
    }
}

/// Shared validation for both event paths: item id present, quantity parses.
fn quantity_update(el: &Element) -> Option<CartMutation> {
    let item_id = el.data(DATASET_ITEM_ID)?;
    let quantity = parse_quantity(el.value.as_deref()?)?;
    Some(CartMutation::UpdateQuantity {
        item_id: item_id.into(),
        quantity,
    })
}

fn parse_quantity(raw: &str) -> Option<u32> {
    match raw.trim().parse() {
        Ok(quantity) => Some(quantity),
        Err(_) => {
            debug!(raw, "quantity does not parse, dropping gesture");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_types::CartMutation;

    /// Helper: a quantity input for item `id` showing `value`.
    fn quantity_input(id: &str, value: &str) -> Element {
        Element::new()
            .with_class(QUANTITY_INPUT_MARKER)
            .with_data(DATASET_ITEM_ID, id)
            .with_value(value)
    }

    // ── Pointer path ─────────────────────────────────────────────────────

    #[test]
    fn click_on_remove_button_resolves_removal() {
        let gesture = Gesture::pointer(vec![
            Element::new()
                .with_class(REMOVE_FROM_CART_MARKER)
                .with_data(DATASET_ITEM_ID, "7"),
        ]);
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::RemoveItem { item_id: "7".into() })
        );
    }

    #[test]
    fn click_inside_remove_button_resolves_via_closest() {
        // Icon inside the button: origin has no marker, its parent does.
        let icon = Element::new().with_class("icon");
        let button = Element::new()
            .with_class(REMOVE_FROM_CART_MARKER)
            .with_data(DATASET_ITEM_ID, "7");
        let gesture = Gesture::pointer(vec![icon, button]);

        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::RemoveItem { item_id: "7".into() })
        );
    }

    #[test]
    fn click_on_add_button_defaults_quantity_to_one() {
        let gesture = Gesture::pointer(vec![
            Element::new()
                .with_class(ADD_TO_CART_MARKER)
                .with_data(DATASET_PRODUCT_ID, "42"),
        ]);
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::AddItem {
                product_id: "42".into(),
                quantity: 1,
            })
        );
    }

    #[test]
    fn add_button_with_explicit_quantity() {
        let gesture = Gesture::pointer(vec![
            Element::new()
                .with_class(ADD_TO_CART_MARKER)
                .with_data(DATASET_PRODUCT_ID, "42")
                .with_data(DATASET_QUANTITY, "2"),
        ]);
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::AddItem {
                product_id: "42".into(),
                quantity: 2,
            })
        );
    }

    #[test]
    fn click_on_quantity_input_resolves_update() {
        let gesture = Gesture::pointer(vec![quantity_input("7", "3")]);
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::UpdateQuantity {
                item_id: "7".into(),
                quantity: 3,
            })
        );
    }

    #[test]
    fn unmarked_click_resolves_nothing() {
        let gesture = Gesture::pointer(vec![Element::new().with_class("nav-link")]);
        assert_eq!(resolve(&gesture), None);
    }

    // ── Commit path ──────────────────────────────────────────────────────

    #[test]
    fn committed_quantity_change_resolves_update() {
        let gesture = Gesture::commit(quantity_input("7", "3"));
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::UpdateQuantity {
                item_id: "7".into(),
                quantity: 3,
            })
        );
    }

    #[test]
    fn commit_matches_target_class_only_not_ancestors() {
        // Unlike the pointer path, a commit on a child of a marked element
        // does not route.
        let gesture = Gesture {
            kind: GestureKind::InputCommit,
            path: vec![
                Element::new().with_value("3"),
                quantity_input("7", "3"),
            ],
        };
        assert_eq!(resolve(&gesture), None);
    }

    // ── Validation, both paths ───────────────────────────────────────────

    #[test]
    fn non_numeric_quantity_never_dispatches() {
        for value in ["abc", "", "2.5", "-1", "1e3"] {
            let via_commit = Gesture::commit(quantity_input("7", value));
            assert_eq!(resolve(&via_commit), None, "commit path let {value:?} through");

            let via_pointer = Gesture::pointer(vec![quantity_input("7", value)]);
            assert_eq!(resolve(&via_pointer), None, "pointer path let {value:?} through");
        }
    }

    #[test]
    fn quantity_value_tolerates_surrounding_whitespace() {
        let gesture = Gesture::commit(quantity_input("7", " 3 "));
        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::UpdateQuantity {
                item_id: "7".into(),
                quantity: 3,
            })
        );
    }

    #[test]
    fn missing_item_id_never_dispatches() {
        let input = Element::new()
            .with_class(QUANTITY_INPUT_MARKER)
            .with_value("3");
        assert_eq!(resolve(&Gesture::commit(input)), None);

        let button = Element::new().with_class(REMOVE_FROM_CART_MARKER);
        assert_eq!(resolve(&Gesture::pointer(vec![button])), None);
    }

    #[test]
    fn remove_wins_when_markers_nest() {
        // A remove button inside a marked row region: removal is checked
        // before the other markers.
        let button = Element::new()
            .with_class(REMOVE_FROM_CART_MARKER)
            .with_data(DATASET_ITEM_ID, "7");
        let ancestor = Element::new()
            .with_class(ADD_TO_CART_MARKER)
            .with_data(DATASET_PRODUCT_ID, "42");
        let gesture = Gesture::pointer(vec![button, ancestor]);

        assert_eq!(
            resolve(&gesture),
            Some(CartMutation::RemoveItem { item_id: "7".into() })
        );
    }
}
