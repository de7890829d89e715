use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shanga_core::{CategoryId, DomainError, Entity, ProductId, ValueObject};

/// Price in the smallest currency unit. The catalog is currency-agnostic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl ValueObject for Price {}

/// Url-safe unique key of a category (ASCII letters, digits, `-`, `_`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::validation(format!(
                "slug `{value}` contains non url-safe character {bad:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl ValueObject for Slug {}

/// How a product points at its category.
///
/// Suppliers differ: some denormalize the slug onto the product, others only
/// carry the category id. Ids are resolved through a [`CategoryIndex`].
///
/// [`CategoryIndex`]: crate::snapshot::CategoryIndex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryRef {
    Id(CategoryId),
    Slug(String),
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, slug: Slug) -> Self {
        Self {
            id,
            name: name.into(),
            slug,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Merchandising badge shown on a product card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Bestseller,
    New,
    Sale,
}

/// A sellable catalog entry, as materialized by the catalog supplier.
///
/// Products are never mutated by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Price before a markdown; a product is on sale when this exceeds `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Price>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<String>,
    /// Average review score, 0..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub review_count: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            compare_at_price: None,
            category: None,
            featured: false,
            is_new: false,
            created_at,
            images: Vec::new(),
            variants: Vec::new(),
            rating: None,
            review_count: 0,
        }
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_category_slug(self, slug: impl Into<String>) -> Self {
        self.with_category(CategoryRef::Slug(slug.into()))
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    pub fn with_compare_at_price(mut self, price: Price) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn with_reviews(mut self, rating: u8, review_count: u32) -> Self {
        self.rating = Some(rating.min(5));
        self.review_count = review_count;
        self
    }

    pub fn on_sale(&self) -> bool {
        self.compare_at_price.is_some_and(|was| was > self.price)
    }

    /// Whole-percent markdown from the compare-at price, rounded down.
    pub fn discount_percent(&self) -> Option<u8> {
        let was = self.compare_at_price.filter(|_| self.on_sale())?.amount();
        let off = (was - self.price.amount()) as u128 * 100 / was as u128;
        u8::try_from(off).ok()
    }

    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::with_capacity(3);
        if self.featured {
            badges.push(Badge::Bestseller);
        }
        if self.is_new {
            badges.push(Badge::New);
        }
        if self.on_sale() {
            badges.push(Badge::Sale);
        }
        badges
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
