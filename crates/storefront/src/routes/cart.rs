//! Cart route handlers.
//!
//! Cart operations use HTMX fragments: every mutation runs a transition on
//! the session-held cart and answers with the dropdown re-rendered from
//! the updated state, plus an `HX-Trigger: cart-updated` so the badge and
//! any other listeners refresh themselves. The dropdown fragment is a pure
//! function of session state - rendering it twice with no mutation in
//! between produces identical markup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use mercadito_core::{Cart, HideToken};

use crate::error::{AppError, Result};
use crate::models::CartSession;
use crate::routes::products::BuyButtonTemplate;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub index: usize,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub image_url: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView {
                    index,
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                    image_url: item.image_url.clone(),
                })
                .collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart dropdown fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_dropdown.html")]
pub struct CartDropdownTemplate {
    pub cart: CartView,
    pub open: bool,
    pub hide_token: Option<u64>,
}

impl CartDropdownTemplate {
    /// Render the dropdown for the current widget state.
    fn from_widget(widget: &CartSession) -> Self {
        Self {
            cart: CartView::from(&widget.cart),
            open: widget.dropdown.is_visible(),
            hide_token: widget.dropdown.pending_token().map(|t| t.value()),
        }
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Form Data
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub listing_id: mercadito_core::ListingId,
}

/// Quantity adjustment form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Delayed-hide form data.
#[derive(Debug, Deserialize)]
pub struct HideForm {
    pub token: u64,
}

/// Where a pointer event happened.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerZone {
    Icon,
    Panel,
}

/// Which pointer event happened (the page sends `event.type` verbatim).
#[derive(Debug, Clone, Copy, Deserialize)]
pub enum PointerAction {
    #[serde(rename = "mouseenter")]
    Enter,
    #[serde(rename = "mouseleave")]
    Leave,
    #[serde(rename = "click")]
    Click,
}

/// Pointer event form data.
#[derive(Debug, Deserialize)]
pub struct PointerForm {
    pub zone: PointerZone,
    pub action: PointerAction,
}

/// Dropdown fragment response plus the cart-updated trigger.
fn cart_updated(widget: &CartSession) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartDropdownTemplate::from_widget(widget),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Add one unit of a listing to the cart (HTMX).
///
/// The buy control carries the listing id; the price and image come from
/// the catalog record, not from the rendered card. Returns the transient
/// "added" button; the badge and dropdown refresh via the trigger.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let Some((name, price, image_url)) = state
        .catalog()
        .get(form.listing_id)
        .map(|listing| (listing.name.clone(), listing.price, listing.image_url.clone()))
    else {
        tracing::warn!(listing_id = %form.listing_id, "Buy control points at unknown listing");
        return Err(AppError::NotFound(format!("listing {}", form.listing_id)));
    };

    let mut widget = CartSession::load(&session).await?;
    widget.cart.add(&name, price, &image_url);
    widget.save(&session).await?;
    tracing::debug!(item_count = widget.cart.item_count(), "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        BuyButtonTemplate {
            listing_id: form.listing_id.to_string(),
            added: true,
        },
    )
        .into_response())
}

/// Adjust a line's quantity by +/-1 (HTMX).
///
/// Dropping to zero removes the line; emptying the cart force-hides the
/// dropdown. Out-of-range indexes are no-ops and still re-render.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    widget.cart.increment(form.index, form.delta);
    if widget.cart.is_empty() {
        widget.dropdown.cart_emptied();
    }
    widget.save(&session).await?;
    Ok(cart_updated(&widget))
}

/// Remove a line unconditionally (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    widget.cart.remove(form.index);
    if widget.cart.is_empty() {
        widget.dropdown.cart_emptied();
    }
    widget.save(&session).await?;
    Ok(cart_updated(&widget))
}

/// Empty the cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    widget.cart.clear();
    widget.dropdown.cart_emptied();
    widget.save(&session).await?;
    Ok(cart_updated(&widget))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Response> {
    let widget = CartSession::load(&session).await?;
    Ok(CartCountTemplate {
        count: widget.cart.item_count(),
    }
    .into_response())
}

/// Re-render the dropdown from current session state (HTMX refresh).
#[instrument(skip(session))]
pub async fn dropdown(session: Session) -> Result<Response> {
    let widget = CartSession::load(&session).await?;
    Ok(CartDropdownTemplate::from_widget(&widget).into_response())
}

/// Drive the dropdown controller from a pointer event (HTMX).
///
/// Leaving the icon or the panel arms a delayed hide; the rendered
/// fragment embeds the armed token so the page can post it back after the
/// delay. Entering either one cancels the pending hide by superseding the
/// token.
#[instrument(skip(session))]
pub async fn pointer(session: Session, Form(form): Form<PointerForm>) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    let cart_empty = widget.cart.is_empty();

    match (form.zone, form.action) {
        (PointerZone::Icon, PointerAction::Enter) => {
            widget.dropdown.pointer_enter_icon(cart_empty);
        }
        (PointerZone::Icon, PointerAction::Leave) => {
            widget.dropdown.pointer_leave_icon();
        }
        (PointerZone::Icon, PointerAction::Click) => widget.dropdown.toggle(cart_empty),
        (PointerZone::Panel, PointerAction::Enter) => widget.dropdown.pointer_enter_panel(),
        (PointerZone::Panel, PointerAction::Leave) => {
            widget.dropdown.pointer_leave_panel();
        }
        // Clicks inside the panel belong to the +/- and remove controls.
        (PointerZone::Panel, PointerAction::Click) => {}
    }

    widget.save(&session).await?;
    Ok(CartDropdownTemplate::from_widget(&widget).into_response())
}

/// A delayed hide fired (HTMX).
///
/// Hides only when the posted token is still current; a stale timer just
/// re-renders the dropdown as it stands.
#[instrument(skip(session))]
pub async fn hide(session: Session, Form(form): Form<HideForm>) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    if widget.dropdown.fire(HideToken::from_value(form.token)) {
        widget.save(&session).await?;
    }
    Ok(CartDropdownTemplate::from_widget(&widget).into_response())
}

/// Explicit dismiss from the dropdown's close control (HTMX).
#[instrument(skip(session))]
pub async fn dismiss(session: Session) -> Result<Response> {
    let mut widget = CartSession::load(&session).await?;
    widget.dropdown.dismiss();
    widget.save(&session).await?;
    Ok(CartDropdownTemplate::from_widget(&widget).into_response())
}
