//! # Seed Data Generator
//!
//! Populates the database with forestry products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 products (default)
//! cargo run -p forestal-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p forestal-db --bin seed -- --count 2000
//!
//! # Specify database path
//! cargo run -p forestal-db --bin seed -- --db ./data/forestal.db
//! ```
//!
//! ## Generated Products
//! Each product type has its own brands and base names. Products are
//! generated round-robin across types with a size variant appended, so every
//! type/brand filter combination has rows to page through.

use std::env;

use forestal_core::{Money, ProductDraft};
use forestal_db::{Database, DbConfig};

/// Product types with their brands and base names.
const CATALOG: &[(&str, &[&str], &[&str])] = &[
    (
        "conifer",
        &["Nordic Nursery", "Evergreen Growers"],
        &[
            "Scots Pine",
            "Norway Spruce",
            "Douglas Fir",
            "Blue Spruce",
            "Silver Fir",
            "European Larch",
            "Western Red Cedar",
            "Eastern Hemlock",
        ],
    ),
    (
        "broadleaf",
        &["Nordic Nursery", "Oakwood Farms"],
        &[
            "English Oak",
            "Silver Birch",
            "European Beech",
            "Field Maple",
            "Wild Cherry",
            "Small-leaved Lime",
        ],
    ),
    (
        "hand tool",
        &["Fiskars", "Gransfors"],
        &[
            "Felling Axe",
            "Splitting Maul",
            "Pruning Saw",
            "Bypass Loppers",
            "Hatchet",
            "Brush Hook",
        ],
    ),
    (
        "chainsaw",
        &["Husqvarna", "Stihl"],
        &["Rear Handle Saw", "Top Handle Saw", "Pole Saw", "Battery Saw"],
    ),
    (
        "safety gear",
        &["Husqvarna", "Pfanner"],
        &["Forest Helmet", "Chainsaw Trousers", "Cut Gloves", "Hi-Vis Vest"],
    ),
    (
        "fertilizer",
        &["GreenRoot"],
        &["Slow Release Feed", "Mycorrhizal Dip", "Bonemeal", "Seaweed Tonic"],
    ),
];

/// Size variants with their price addon in cents.
const SIZES: &[(&str, i64)] = &[
    ("Small", 0),
    ("Medium", 750),
    ("Large", 1500),
    ("XL", 3000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 500;
    let mut db_path = String::from("./data/forestal.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Forestal Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 500)");
                println!("  -d, --db <PATH>    Database file path (default: ./data/forestal.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Forestal Catalog Seed Data Generator");
    println!("====================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count_all().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let repo = db.products();
    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = repo.insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    let hits = repo.search("spruce").await?;
    println!("  Search 'spruce': {} results", hits.len());

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates one product from a running index.
fn generate_product(seed: usize) -> ProductDraft {
    let (product_type, brands, names) = CATALOG[seed % CATALOG.len()];
    let round = seed / CATALOG.len();

    let name = names[round % names.len()];
    let brand = brands[(round / names.len()) % brands.len()];
    let (size, addon) = SIZES[(seed / 7) % SIZES.len()];

    // $4.99 - $124.99 base plus size addon
    let base_cents = 499 + ((seed * 37) % 12_000) as i64;

    ProductDraft {
        name: format!("{} {} #{}", name, size, seed + 1),
        product_type: product_type.to_string(),
        brand: brand.to_string(),
        description: format!("{} ({}) from {}", name, size.to_lowercase(), brand),
        price: Money::from_cents(base_cents + addon),
        stock: (seed % 101) as i64,
        image: format!(
            "/images/{}-{}.jpg",
            product_type.replace(' ', "-"),
            name.to_lowercase().replace(' ', "-")
        ),
    }
}
