//! Typed identifiers for cart line items and catalog products.
//!
//! Both wrap the opaque string identifiers the server renders into the page
//! (dataset attributes, row keys). The client never fabricates or inspects
//! them — they are lookup keys into server-side cart state, carried back to
//! the server verbatim on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one cart line item. Key into server-side cart state.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifies a catalog product.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

// ── Shared behavior ─────────────────────────────────────────────────────────

macro_rules! impl_opaque_id {
    ($T:ident, $name:literal) => {
        impl $T {
            /// Wrap a raw identifier string as rendered by the server.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The raw identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $T {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $T {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $name, self.0)
            }
        }
    };
}

impl_opaque_id!(ItemId, "ItemId");
impl_opaque_id!(ProductId, "ProductId");
