//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// interchangeable. In the catalog this covers prices, slugs and decoded
/// selectors, as opposed to products and categories which are [`Entity`]s.
///
/// [`Entity`]: crate::Entity
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(2500), Price(2500));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
