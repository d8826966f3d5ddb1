//! Product catalog records and add-product validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ListingId, Price, PriceError};

/// Minimum allowed listing price (store business rule).
pub const MIN_LISTING_PRICE: Price = Price::new(1000);

/// Why an add-product submission was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// The price field did not parse as a positive whole number.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// The price parsed but is below the store minimum.
    #[error("price must be at least {minimum}")]
    BelowMinimum { minimum: Price },
}

/// A product in the catalog.
///
/// Listings are the source of truth the cart draws from: the buy control
/// carries the listing id, and adding to the cart resolves that id back to
/// this record rather than re-reading the rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub id: ListingId,
    pub name: String,
    pub price: Price,
    pub size: String,
    pub color: String,
    pub material: String,
    pub image_url: String,
}

/// Raw add-product form fields, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub price: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub image_url: String,
}

impl NewListing {
    /// Validate the submission and build a catalog record.
    ///
    /// Every field must be non-empty after trimming, and the price must be
    /// a positive whole number of at least [`MIN_LISTING_PRICE`]. The
    /// first failing check wins; nothing is created on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] describing the first rejected field.
    pub fn validate(&self) -> Result<ProductListing, ListingError> {
        let name = required("name", &self.name)?;
        let price = Price::parse(&self.price)?;
        if price < MIN_LISTING_PRICE {
            return Err(ListingError::BelowMinimum {
                minimum: MIN_LISTING_PRICE,
            });
        }
        let size = required("size", &self.size)?;
        let color = required("color", &self.color)?;
        let material = required("material", &self.material)?;
        let image_url = required("image", &self.image_url)?;

        Ok(ProductListing {
            id: ListingId::generate(),
            name,
            price,
            size,
            color,
            material,
            image_url,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ListingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ListingError::EmptyField(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// In-memory catalog, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<ProductListing>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listings: Vec::new(),
        }
    }

    /// All listings, oldest first.
    #[must_use]
    pub fn listings(&self) -> &[ProductListing] {
        &self.listings
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id.
    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<&ProductListing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Append a listing.
    pub fn push(&mut self, listing: ProductListing) {
        self.listings.push(listing);
    }
}
