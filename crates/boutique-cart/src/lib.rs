//! Cart mutation synchronization client for boutique storefronts.
//!
//! Keeps a server-rendered cart page consistent with the server's
//! authoritative cart state across three mutations — add, update-quantity,
//! remove — issued as JSON POSTs. The server owns all business rules (stock,
//! pricing); this crate owns the client half: gesture routing, request
//! dispatch, and patching the displayed view from each reply.
//!
//! # Layers
//!
//! - [`dispatch`] — delegated gesture routing by CSS-class marker; validates
//!   before anything is sent.
//! - [`transport`] — [`CartTransport`] seam with the reqwest-backed
//!   [`HttpTransport`] implementation.
//! - [`controller`] — the operations and their pure `decide_*` logic.
//! - [`view`] — [`ViewPatch`] instructions, the owned [`DisplayedCartState`]
//!   view-model, and the [`CartView`] page adapter seam.
//!
//! Failures never escape an operation: server rejections surface the
//! server's message (a rejected quantity update additionally forces a full
//! reload), transport failures surface one generic message, and a declined
//! confirmation does nothing at all.

pub mod constants;
pub mod controller;
pub mod dispatch;
pub mod transport;
pub mod view;

pub use controller::{CartController, MutationStatus, decide_add, decide_remove, decide_update};
pub use dispatch::{Element, Gesture, GestureKind, resolve};
pub use transport::{CartTransport, Endpoints, HttpTransport, TransportError};
pub use view::{CartView, DisplayedCartState, ViewPatch, format_total, row_element_id};
