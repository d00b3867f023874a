//! Client configuration constants.
//!
//! Centralizes the strings shared with the template layer (markers, dataset
//! keys, row keying) and the server (routes, AJAX header). Most of these are
//! wire format: changing one here requires a matching change in the
//! server-rendered templates.

/// Default route for the add-to-cart endpoint.
pub const DEFAULT_ADD_TO_CART_PATH: &str = "/cart/add";

/// Default route for the update-quantity endpoint.
pub const DEFAULT_UPDATE_CART_PATH: &str = "/cart/update";

/// Default route for the remove-item endpoint.
pub const DEFAULT_REMOVE_FROM_CART_PATH: &str = "/cart/remove";

/// Header marking a request as programmatic. The server uses it to tell
/// controller traffic apart from full-page form submissions.
pub const AJAX_MARKER_HEADER: &str = "X-Requested-With";

/// Value sent in [`AJAX_MARKER_HEADER`].
pub const AJAX_MARKER_VALUE: &str = "XMLHttpRequest";

/// Shown for any transport-level failure. The specific cause is logged,
/// never displayed.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Blocking prompt shown before a removal is dispatched.
pub const REMOVE_CONFIRM_PROMPT: &str = "Are you sure you want to remove this item?";

/// Row elements are keyed `cart-item-<item id>` by the template layer.
pub const ROW_ID_PREFIX: &str = "cart-item-";

/// Marker class on add-to-cart triggers.
pub const ADD_TO_CART_MARKER: &str = "add-to-cart-btn";

/// Marker class on cart quantity inputs.
pub const QUANTITY_INPUT_MARKER: &str = "cart-quantity-input";

/// Marker class on remove-item triggers.
pub const REMOVE_FROM_CART_MARKER: &str = "remove-from-cart-btn";

/// Dataset key carrying the line item identifier.
pub const DATASET_ITEM_ID: &str = "item-id";

/// Dataset key carrying the product identifier.
pub const DATASET_PRODUCT_ID: &str = "product-id";

/// Dataset key carrying an explicit add quantity (defaults to 1 when absent).
pub const DATASET_QUANTITY: &str = "quantity";
