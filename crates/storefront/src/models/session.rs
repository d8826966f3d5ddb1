//! Session-stored widget state.
//!
//! The cart and its dropdown controller live in the visitor's session.
//! The session store is in-memory, so this state is owned by the running
//! server process and gone on restart - nothing is persisted.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use mercadito_core::{Cart, DropdownController};

/// Session keys for widget data.
pub mod keys {
    /// Key for storing the cart widget state.
    pub const CART_WIDGET: &str = "cart_widget";
}

/// Per-visitor cart widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSession {
    /// The cart itself.
    pub cart: Cart,
    /// The dropdown visibility controller.
    pub dropdown: DropdownController,
}

impl CartSession {
    /// Load the widget state from the session, defaulting to empty.
    ///
    /// # Errors
    ///
    /// Returns the underlying session error when the store fails.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        Ok(session.get::<Self>(keys::CART_WIDGET).await?.unwrap_or_default())
    }

    /// Write the widget state back to the session.
    ///
    /// # Errors
    ///
    /// Returns the underlying session error when the store fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::CART_WIDGET, self).await
    }
}
