//! Seed catalog content.
//!
//! The storefront opens with the products the original static page
//! carried. Each seed is stored the way that page stored it - a card
//! title, description lines, and an image - and is run through the legacy
//! text extraction to recover structured fields. Prices in seed text are
//! deliberately ungrouped (`$20000`): the extraction's digit run stops at
//! a separator, so grouped text would truncate.

use mercadito_core::{extract, Catalog, ListingId, ProductListing};

/// One card as the original page rendered it.
struct LegacyCard {
    title: &'static str,
    description: &'static [&'static str],
    image_url: &'static str,
}

const SEED_CARDS: &[LegacyCard] = &[
    LegacyCard {
        title: "Linen Shirt",
        description: &[
            "Price: $20000",
            "Size: M",
            "Color: White",
            "Material: Linen",
        ],
        image_url: "https://placehold.co/300x300?text=Linen+Shirt",
    },
    LegacyCard {
        title: "Denim Jacket",
        description: &[
            "Price: $45000",
            "Size: L",
            "Color: Indigo",
            "Material: Denim",
        ],
        image_url: "https://placehold.co/300x300?text=Denim+Jacket",
    },
    LegacyCard {
        title: "Wool Hat",
        description: &[
            "Price: $15000",
            "Size: One size",
            "Color: Gray",
            "Material: Wool",
        ],
        image_url: "https://placehold.co/300x300?text=Wool+Hat",
    },
    LegacyCard {
        title: "Canvas Tote",
        description: &[
            "Price: $12000",
            "Size: 40x35 cm",
            "Color: Natural",
            "Material: Canvas",
        ],
        image_url: "https://placehold.co/300x300?text=Canvas+Tote",
    },
];

/// Build the seed catalog from the legacy card text.
#[must_use]
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for card in SEED_CARDS {
        catalog.push(listing_from_card(card));
    }
    catalog
}

fn listing_from_card(card: &LegacyCard) -> ProductListing {
    let field = |label| {
        extract::labeled_field(card.description.iter().copied(), label)
            .unwrap_or_default()
            .to_owned()
    };
    ProductListing {
        id: ListingId::generate(),
        name: card.title.trim().to_owned(),
        price: extract::price_from_lines(card.description.iter().copied()),
        size: field("Size:"),
        color: field("Color:"),
        material: field("Material:"),
        image_url: card.image_url.to_owned(),
    }
}
