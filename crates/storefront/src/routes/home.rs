//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::CartSession;
use crate::routes::cart::CartView;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Home page template: the product grid, the cart icon with its dropdown,
/// and the add-product form.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub store_name: String,
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
    pub dropdown_open: bool,
    pub hide_token: Option<u64>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<axum::response::Response> {
    let widget = CartSession::load(&session).await?;
    let products = state
        .catalog()
        .listings()
        .iter()
        .map(ProductCardView::from)
        .collect();

    Ok(HomeTemplate {
        store_name: state.config().store_name.clone(),
        products,
        cart: CartView::from(&widget.cart),
        dropdown_open: widget.dropdown.is_visible(),
        hide_token: widget.dropdown.pending_token().map(|t| t.value()),
    }
    .into_response())
}
