//! Shared identifier and cart wire types for boutique.
//!
//! This crate is the endpoint contract: typed IDs plus the request and reply
//! bodies exchanged with the server's cart routes. It has **no internal
//! boutique dependencies** — a pure leaf crate that the cart controller
//! builds on, usable equally by a server stand-in in tests.
//!
//! # Key Types
//!
//! |-----------------|------------------------------------------------|
//! | Type            | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | [`ProductId`]   | Which catalog product (opaque server string)   |
//! | [`ItemId`]      | Which cart line item (opaque server string)    |
//! | [`CartMutation`]| One add / update-quantity / remove request     |
//! | [`ServerReply`] | Authoritative outcome + recomputed count/total |
//! |-----------------|------------------------------------------------|

pub mod ids;
pub mod mutation;

// Re-export primary types at crate root for convenience.
pub use ids::{ItemId, ProductId};
pub use mutation::{CartMutation, ServerReply};
