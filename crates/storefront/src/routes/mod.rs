//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page (grid, cart, add-product form)
//! GET  /health                  - Health check
//!
//! # Products
//! POST /products                - Add a listing from the form (fragment)
//! GET  /products/{id}/buy-button - Buy control resting state (fragment)
//!
//! # Cart (HTMX fragments)
//! POST /cart/add                - Add a listing to the cart
//! POST /cart/update             - Adjust a line quantity by +/-1
//! POST /cart/remove             - Remove a line
//! POST /cart/clear              - Empty the cart
//! GET  /cart/count              - Cart count badge
//! GET  /cart/dropdown           - Dropdown re-render
//! POST /cart/dropdown/pointer   - Pointer enter/leave/click on icon/panel
//! POST /cart/dropdown/hide      - Delayed hide firing (token-checked)
//! POST /cart/dropdown/dismiss   - Explicit close control
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{id}/buy-button", get(products::buy_button))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/dropdown", get(cart::dropdown))
        .route("/dropdown/pointer", post(cart::pointer))
        .route("/dropdown/hide", post(cart::hide))
        .route("/dropdown/dismiss", post(cart::dismiss))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
