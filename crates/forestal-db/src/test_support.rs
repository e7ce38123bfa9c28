//! Shared fixtures for the crate's tests.

use forestal_core::{Money, ProductDraft};

use crate::pool::{Database, DbConfig};

pub(crate) fn draft(name: &str, product_type: &str, brand: &str, price_cents: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        product_type: product_type.to_string(),
        brand: brand.to_string(),
        description: format!("{name} from {brand}"),
        price: Money::from_cents(price_cents),
        stock: 10,
        image: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
    }
}

/// 25 products, 12 of them conifers priced 5..=95 dollars.
pub(crate) fn catalog_drafts() -> Vec<ProductDraft> {
    let conifers = [
        ("Scots Pine", "Nordic Nursery", 500),
        ("Norway Spruce", "Evergreen Growers", 1000),
        ("Douglas Fir", "Nordic Nursery", 1500),
        ("Blue Spruce", "Evergreen Growers", 2000),
        ("Silver Fir", "Nordic Nursery", 3000),
        ("European Larch", "Evergreen Growers", 4000),
        ("Stone Pine", "Nordic Nursery", 5000),
        ("Western Red Cedar", "Evergreen Growers", 6000),
        ("Eastern Hemlock", "Nordic Nursery", 7000),
        ("Giant Sequoia", "Evergreen Growers", 8000),
        ("Atlas Cedar", "Nordic Nursery", 9000),
        ("Japanese Yew", "Evergreen Growers", 9500),
    ];
    let others = [
        ("Felling Axe", "hand tool", "Fiskars", 5500),
        ("Pruning Saw", "hand tool", "Fiskars", 2500),
        ("Bypass Loppers", "hand tool", "Fiskars", 3500),
        ("Splitting Maul", "hand tool", "Fiskars", 6500),
        ("135 Mark II", "chainsaw", "Husqvarna", 24900),
        ("440 Saw", "chainsaw", "Husqvarna", 39900),
        ("Forest Helmet", "safety gear", "Husqvarna", 7900),
        ("Oak Seedling Tray", "seedling", "GreenRoot", 1200),
        ("Beech Seedling Tray", "seedling", "GreenRoot", 1400),
        ("Birch Seedling Tray", "seedling", "GreenRoot", 1100),
        ("Slow Release Feed", "fertilizer", "GreenRoot", 1800),
        ("Mycorrhizal Dip", "fertilizer", "GreenRoot", 2200),
        ("Tree Guard Pack", "protection", "Tubex", 3300),
    ];

    conifers
        .iter()
        .map(|(name, brand, cents)| draft(name, "conifer", brand, *cents))
        .chain(
            others
                .iter()
                .map(|(name, product_type, brand, cents)| draft(name, product_type, brand, *cents)),
        )
        .collect()
}

/// In-memory database holding [`catalog_drafts`].
pub(crate) async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");
    let repo = db.products();
    for product in catalog_drafts() {
        repo.insert(&product).await.expect("insert fixture product");
    }
    db
}
