//! Built-in catalog served when no catalog file is configured.

use chrono::{DateTime, TimeZone, Utc};

use shanga_catalog::{CatalogSnapshot, Category, Price, Product, Slug};
use shanga_core::{CategoryId, DomainError, DomainResult, ProductId};

const CATEGORIES: [(&str, &str, &str); 5] = [
    ("cat-bracelets", "Bracelets", "bracelets"),
    ("cat-necklaces", "Necklaces", "necklaces"),
    ("cat-bangles", "Bangles", "bangles"),
    ("cat-waist-beads", "Waist Beads", "waist-beads"),
    ("cat-couple-sets", "Couple Sets", "couple-sets"),
];

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    price: u64,
    compare_at: Option<u64>,
    slug: &'static str,
    image: &'static str,
    rating: u8,
    reviews: u32,
    bestseller: bool,
    is_new: bool,
    listed: (i32, u32, u32),
}

const PRODUCTS: [SeedProduct; 8] = [
    SeedProduct {
        id: "1",
        name: "Pink Serenity African Bead Bracelet",
        price: 2500,
        compare_at: Some(3200),
        slug: "bracelets",
        image: "product-bracelet-1.jpg",
        rating: 5,
        reviews: 24,
        bestseller: true,
        is_new: false,
        listed: (2024, 1, 15),
    },
    SeedProduct {
        id: "2",
        name: "Heritage Multi-Strand Necklace",
        price: 4800,
        compare_at: None,
        slug: "necklaces",
        image: "product-necklace-1.jpg",
        rating: 5,
        reviews: 18,
        bestseller: false,
        is_new: true,
        listed: (2024, 6, 1),
    },
    SeedProduct {
        id: "3",
        name: "Traditional Waist Beads Collection",
        price: 1800,
        compare_at: None,
        slug: "waist-beads",
        image: "product-waist-beads-1.jpg",
        rating: 5,
        reviews: 32,
        bestseller: true,
        is_new: false,
        listed: (2023, 11, 20),
    },
    SeedProduct {
        id: "4",
        name: "Unity Couple Jewelry Set",
        price: 6500,
        compare_at: Some(8000),
        slug: "couple-sets",
        image: "product-couple-set-1.jpg",
        rating: 5,
        reviews: 12,
        bestseller: false,
        is_new: false,
        listed: (2024, 2, 14),
    },
    SeedProduct {
        id: "5",
        name: "Royal Gold Bangle Set",
        price: 3200,
        compare_at: None,
        slug: "bangles",
        image: "product-bracelet-1.jpg",
        rating: 5,
        reviews: 15,
        bestseller: false,
        is_new: false,
        listed: (2024, 3, 8),
    },
    SeedProduct {
        id: "6",
        name: "Sunset Coral Necklace",
        price: 3800,
        compare_at: None,
        slug: "necklaces",
        image: "product-necklace-1.jpg",
        rating: 4,
        reviews: 21,
        bestseller: false,
        is_new: true,
        listed: (2024, 5, 20),
    },
    SeedProduct {
        id: "7",
        name: "Earth Goddess Waist Beads",
        price: 2200,
        compare_at: None,
        slug: "waist-beads",
        image: "product-waist-beads-1.jpg",
        rating: 5,
        reviews: 28,
        bestseller: false,
        is_new: false,
        listed: (2024, 4, 2),
    },
    SeedProduct {
        id: "8",
        name: "Harmony Couple Bracelets",
        price: 4200,
        compare_at: Some(5000),
        slug: "couple-sets",
        image: "product-couple-set-1.jpg",
        rating: 5,
        reviews: 8,
        bestseller: false,
        is_new: false,
        listed: (2024, 2, 1),
    },
];

fn listed_at((year, month, day): (i32, u32, u32)) -> DomainResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .ok_or_else(|| {
            DomainError::validation(format!("invalid listing date {year}-{month:02}-{day:02}"))
        })
}

/// The handmade jewelry collection: eight products across five categories.
pub fn seed_catalog() -> DomainResult<CatalogSnapshot> {
    let categories = CATEGORIES
        .iter()
        .map(|(id, name, slug)| -> DomainResult<Category> {
            Ok(Category::new(CategoryId::new(*id)?, *name, Slug::parse(*slug)?))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let products = PRODUCTS
        .iter()
        .map(|seed| -> DomainResult<Product> {
            let mut product = Product::new(
                ProductId::new(seed.id)?,
                seed.name,
                Price(seed.price),
                listed_at(seed.listed)?,
            )
            .with_category_slug(seed.slug)
            .with_featured(seed.bestseller)
            .with_new(seed.is_new)
            .with_image(format!("/assets/{}", seed.image))
            .with_reviews(seed.rating, seed.reviews);
            if let Some(was) = seed.compare_at {
                product = product.with_compare_at_price(Price(was));
            }
            Ok(product)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    CatalogSnapshot::new(products, categories)
}
