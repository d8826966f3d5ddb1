//! Product route handlers.
//!
//! The catalog grows at runtime through the add-product form. A valid
//! submission appends a listing and answers with the new card fragment
//! (swapped into the grid out-of-band) plus a success message; a rejected
//! one answers with the blocking message and leaves the catalog alone.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use tracing::instrument;

use mercadito_core::{ListingId, NewListing, ProductListing};

use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub image_url: String,
}

impl From<&ProductListing> for ProductCardView {
    fn from(listing: &ProductListing) -> Self {
        Self {
            id: listing.id.to_string(),
            name: listing.name.clone(),
            price: listing.price.to_string(),
            size: listing.size.clone(),
            color: listing.color.clone(),
            material: listing.material.clone(),
            image_url: listing.image_url.clone(),
        }
    }
}

/// Buy control fragment template.
///
/// Rendered in its `added` form right after an add-to-cart; that variant
/// schedules its own restore back to the plain button.
#[derive(Template, WebTemplate)]
#[template(path = "partials/buy_button.html")]
pub struct BuyButtonTemplate {
    pub listing_id: String,
    pub added: bool,
}

/// Successful submission fragment: acknowledgment plus the new card.
#[derive(Template, WebTemplate)]
#[template(path = "partials/listing_created.html")]
pub struct ListingCreatedTemplate {
    pub product: ProductCardView,
}

/// Blocking validation message fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/form_message.html")]
pub struct FormMessageTemplate {
    pub kind: &'static str,
    pub text: String,
}

/// Handle an add-product form submission (HTMX).
#[allow(clippy::unused_async)]
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<NewListing>) -> Response {
    match form.validate() {
        Ok(listing) => {
            let product = ProductCardView::from(&listing);
            state.catalog_mut().push(listing);
            tracing::info!(name = %product.name, "Listing added to catalog");
            (
                AppendHeaders([("HX-Trigger", "listing-added")]),
                ListingCreatedTemplate { product },
            )
                .into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "Rejected add-product submission");
            FormMessageTemplate {
                kind: "error",
                text: e.to_string(),
            }
            .into_response()
        }
    }
}

/// Restore a buy control to its resting state after the transient
/// "added" feedback (HTMX).
#[allow(clippy::unused_async)]
#[instrument]
pub async fn buy_button(Path(id): Path<ListingId>) -> Response {
    BuyButtonTemplate {
        listing_id: id.to_string(),
        added: false,
    }
    .into_response()
}
