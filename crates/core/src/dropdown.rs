//! Debounced show/hide controller for the cart dropdown.
//!
//! The dropdown is shown on pointer-enter over the cart icon and hidden a
//! short delay after pointer-leave, unless the pointer re-enters the icon
//! or the panel first. The controller does not own a timer; it hands out a
//! [`HideToken`] whenever a hide is armed, and the host schedules the
//! actual delay. Arming a new hide bumps the generation, so a stale timer
//! firing with an old token can never hide a dropdown the user re-entered.

use serde::{Deserialize, Serialize};

/// Visibility states of the dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Not rendered open.
    #[default]
    Hidden,
    /// Rendered open, no hide scheduled.
    Visible,
    /// Rendered open with a hide armed; only the current token may fire.
    PendingHide,
}

/// Token identifying one armed hide.
///
/// Round-trips through the page as a plain number; [`DropdownController::fire`]
/// accepts it back and ignores anything but the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideToken(u64);

impl HideToken {
    /// The raw token value, for embedding in markup.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Rebuild a token from its raw value.
    #[must_use]
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }
}

/// The dropdown's debounced state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownController {
    state: Visibility,
    generation: u64,
}

impl DropdownController {
    /// Create a controller in the hidden state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Visibility::Hidden,
            generation: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.state
    }

    /// Whether the dropdown should be rendered open. A pending hide still
    /// renders open; it only closes once the timer fires.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self.state, Visibility::Hidden)
    }

    /// Pointer entered the cart icon. Shows the dropdown and cancels any
    /// pending hide - unless the cart is empty, in which case the dropdown
    /// never opens.
    pub fn pointer_enter_icon(&mut self, cart_empty: bool) {
        self.invalidate_pending();
        self.state = if cart_empty {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }

    /// Pointer left the cart icon. Arms a hide and returns the token the
    /// delayed timer must present to [`Self::fire`]. Returns `None` when
    /// the dropdown is already hidden.
    pub fn pointer_leave_icon(&mut self) -> Option<HideToken> {
        self.arm_hide()
    }

    /// Pointer entered the dropdown panel; cancels a pending hide.
    pub fn pointer_enter_panel(&mut self) {
        if self.state == Visibility::PendingHide {
            self.invalidate_pending();
            self.state = Visibility::Visible;
        }
    }

    /// Pointer left the dropdown panel. Arms a hide like leaving the icon.
    pub fn pointer_leave_panel(&mut self) -> Option<HideToken> {
        self.arm_hide()
    }

    /// The currently armed hide token, when a hide is pending.
    ///
    /// Rendering reads this so a re-render of a pending-hide dropdown
    /// embeds the same token the original leave handed out.
    #[must_use]
    pub const fn pending_token(&self) -> Option<HideToken> {
        match self.state {
            Visibility::PendingHide => Some(HideToken(self.generation)),
            Visibility::Hidden | Visibility::Visible => None,
        }
    }

    /// A hide timer fired. Hides only when the token is still current and
    /// a hide is still pending; stale or superseded tokens are no-ops.
    /// Returns whether the dropdown was hidden.
    pub fn fire(&mut self, token: HideToken) -> bool {
        if self.state == Visibility::PendingHide && token.0 == self.generation {
            self.state = Visibility::Hidden;
            true
        } else {
            false
        }
    }

    /// Explicit toggle (click on the icon or an overlay control).
    pub fn toggle(&mut self, cart_empty: bool) {
        self.invalidate_pending();
        self.state = if self.is_visible() || cart_empty {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }

    /// Explicit dismiss (close control).
    pub fn dismiss(&mut self) {
        self.invalidate_pending();
        self.state = Visibility::Hidden;
    }

    /// The cart just became empty; the dropdown must not stay open.
    pub fn cart_emptied(&mut self) {
        self.invalidate_pending();
        self.state = Visibility::Hidden;
    }

    /// Arm a hide, superseding any previously armed one.
    fn arm_hide(&mut self) -> Option<HideToken> {
        if self.state == Visibility::Hidden {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = Visibility::PendingHide;
        Some(HideToken(self.generation))
    }

    /// Invalidate any outstanding hide token.
    fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_opens_while_cart_is_empty() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(true);
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
        assert!(!dropdown.is_visible());

        dropdown.toggle(true);
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
    }

    #[test]
    fn enter_icon_shows_when_cart_has_items() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        assert_eq!(dropdown.visibility(), Visibility::Visible);
    }

    #[test]
    fn leave_arms_a_hide_and_firing_it_hides() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");

        assert_eq!(dropdown.visibility(), Visibility::PendingHide);
        assert!(dropdown.is_visible(), "still rendered open while pending");

        assert!(dropdown.fire(token));
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
    }

    #[test]
    fn entering_panel_cancels_pending_hide() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");

        dropdown.pointer_enter_panel();
        assert_eq!(dropdown.visibility(), Visibility::Visible);

        // The old timer still fires, but its token is stale.
        assert!(!dropdown.fire(token));
        assert_eq!(dropdown.visibility(), Visibility::Visible);
    }

    #[test]
    fn reentering_icon_cancels_pending_hide() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");

        dropdown.pointer_enter_icon(false);
        assert!(!dropdown.fire(token));
        assert_eq!(dropdown.visibility(), Visibility::Visible);
    }

    #[test]
    fn a_new_hide_supersedes_the_previous_one() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let first = dropdown.pointer_leave_icon().expect("hide armed");

        dropdown.pointer_enter_panel();
        let second = dropdown.pointer_leave_panel().expect("hide armed");
        assert_ne!(first, second);

        // Only the latest token can hide.
        assert!(!dropdown.fire(first));
        assert_eq!(dropdown.visibility(), Visibility::PendingHide);
        assert!(dropdown.fire(second));
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
    }

    #[test]
    fn pending_token_mirrors_the_armed_hide() {
        let mut dropdown = DropdownController::new();
        assert!(dropdown.pending_token().is_none());

        dropdown.pointer_enter_icon(false);
        assert!(dropdown.pending_token().is_none());

        let token = dropdown.pointer_leave_icon().expect("hide armed");
        assert_eq!(dropdown.pending_token(), Some(token));

        dropdown.pointer_enter_panel();
        assert!(dropdown.pending_token().is_none());
    }

    #[test]
    fn leave_while_hidden_arms_nothing() {
        let mut dropdown = DropdownController::new();
        assert!(dropdown.pointer_leave_icon().is_none());
        assert!(dropdown.pointer_leave_panel().is_none());
    }

    #[test]
    fn firing_twice_is_a_no_op_the_second_time() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");
        assert!(dropdown.fire(token));
        assert!(!dropdown.fire(token));
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut dropdown = DropdownController::new();
        dropdown.toggle(false);
        assert_eq!(dropdown.visibility(), Visibility::Visible);
        dropdown.toggle(false);
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
    }

    #[test]
    fn toggle_while_pending_closes_and_invalidates() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");

        dropdown.toggle(false);
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
        assert!(!dropdown.fire(token));
    }

    #[test]
    fn emptying_the_cart_forces_hidden() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        dropdown.cart_emptied();
        assert_eq!(dropdown.visibility(), Visibility::Hidden);

        // A timer armed before the cart emptied must stay dead.
        dropdown.pointer_enter_icon(false);
        let token = dropdown.pointer_leave_icon().expect("hide armed");
        dropdown.cart_emptied();
        assert!(!dropdown.fire(token));
    }

    #[test]
    fn dismiss_closes_from_any_open_state() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        dropdown.dismiss();
        assert_eq!(dropdown.visibility(), Visibility::Hidden);

        dropdown.pointer_enter_icon(false);
        dropdown.pointer_leave_icon();
        dropdown.dismiss();
        assert_eq!(dropdown.visibility(), Visibility::Hidden);
    }

    #[test]
    fn controller_serializes_for_session_storage() {
        let mut dropdown = DropdownController::new();
        dropdown.pointer_enter_icon(false);
        dropdown.pointer_leave_icon();

        let json = serde_json::to_string(&dropdown).expect("serializable");
        let restored: DropdownController = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(dropdown, restored);
    }
}
