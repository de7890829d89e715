//! Price range selector: decoding and matching.
//!
//! Wire grammar (shared with the storefront's selector presets):
//!
//! - `all` — no filter
//! - `<min>-<max>` — closed range, both bounds inclusive, `min <= max`
//! - `<min>+` — open range, `min` inclusive, no upper bound
//!
//! Bounds are non-negative decimal integers in the price's smallest unit.

use serde::Serialize;

use shanga_core::ValueObject;

use crate::ALL;
use crate::diagnostics::{Diagnostic, Diagnostics, SelectorError};
use crate::product::Price;

const EXPECTED_SHAPE: &str = "expected `<min>-<max>` or `<min>+`";

/// Decoded price range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceFilter {
    #[default]
    NoFilter,
    Closed { min: Price, max: Price },
    OpenLower { min: Price },
}

impl ValueObject for PriceFilter {}

impl PriceFilter {
    /// Strictly decode a selector token.
    pub fn parse(token: &str) -> Result<Self, SelectorError> {
        if token == ALL {
            return Ok(Self::NoFilter);
        }

        match token.split_once('-') {
            Some((min, max)) if !max.is_empty() => {
                let min = parse_bound(token, min)?;
                let max = parse_bound(token, max)?;
                if min > max {
                    return Err(SelectorError::InvertedPriceRange {
                        token: token.to_string(),
                        min,
                        max,
                    });
                }
                Ok(Self::Closed {
                    min: Price(min),
                    max: Price(max),
                })
            }
            _ => match token.strip_suffix('+') {
                Some(min) => Ok(Self::OpenLower {
                    min: Price(parse_bound(token, min)?),
                }),
                None => Err(malformed(token, EXPECTED_SHAPE)),
            },
        }
    }

    /// Lenient decoding used by the query pipeline.
    ///
    /// A token that fails [`PriceFilter::parse`] is treated as no filter, and
    /// the failure is logged and recorded in `diagnostics`.
    pub fn resolve(token: &str, diagnostics: &mut Diagnostics) -> Self {
        match Self::parse(token) {
            Ok(filter) => filter,
            Err(error) => {
                tracing::warn!(
                    token = %token,
                    error = %error,
                    "malformed price range selector; applying no price filter"
                );
                diagnostics.push(Diagnostic::MalformedPriceRange {
                    token: token.to_string(),
                    error,
                });
                Self::NoFilter
            }
        }
    }

    pub fn matches(self, price: Price) -> bool {
        match self {
            Self::NoFilter => true,
            Self::Closed { min, max } => min <= price && price <= max,
            Self::OpenLower { min } => price >= min,
        }
    }

    pub fn is_no_filter(self) -> bool {
        self == Self::NoFilter
    }
}

/// Renders the wire token (`all`, `<min>-<max>`, `<min>+`).
impl core::fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoFilter => f.write_str(ALL),
            Self::Closed { min, max } => write!(f, "{min}-{max}"),
            Self::OpenLower { min } => write!(f, "{min}+"),
        }
    }
}

fn parse_bound(token: &str, bound: &str) -> Result<u64, SelectorError> {
    if bound.is_empty() {
        return Err(malformed(token, "missing bound"));
    }
    // `u64::from_str` would also accept a leading `+`.
    if !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(token, "bound is not a non-negative integer"));
    }
    bound
        .parse::<u64>()
        .map_err(|_| malformed(token, "bound is out of range"))
}

fn malformed(token: &str, reason: &'static str) -> SelectorError {
    SelectorError::MalformedPriceRange {
        token: token.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinel_closed_and_open_tokens() {
        assert_eq!(PriceFilter::parse("all").unwrap(), PriceFilter::NoFilter);
        assert_eq!(
            PriceFilter::parse("2000-4000").unwrap(),
            PriceFilter::Closed {
                min: Price(2000),
                max: Price(4000)
            }
        );
        assert_eq!(
            PriceFilter::parse("6000+").unwrap(),
            PriceFilter::OpenLower { min: Price(6000) }
        );
        assert_eq!(
            PriceFilter::parse("0-0").unwrap(),
            PriceFilter::Closed {
                min: Price(0),
                max: Price(0)
            }
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in [
            "cheap", "", "All", "100", "100-", "-100", "+", "1-2-3", "a-100", "100-b", "+5-10",
            "10-+5", "x+", "5++", " 0-10", "0-10 ", "99999999999999999999+",
        ] {
            let err = PriceFilter::parse(token).unwrap_err();
            assert!(
                matches!(err, SelectorError::MalformedPriceRange { .. }),
                "{token:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            PriceFilter::parse("4000-2000").unwrap_err(),
            SelectorError::InvertedPriceRange {
                token: "4000-2000".to_string(),
                min: 4000,
                max: 2000
            }
        );
    }

    #[test]
    fn closed_range_is_inclusive_on_both_ends() {
        let range = PriceFilter::parse("2000-4000").unwrap();
        assert!(!range.matches(Price(1999)));
        assert!(range.matches(Price(2000)));
        assert!(range.matches(Price(4000)));
        assert!(!range.matches(Price(4001)));
    }

    #[test]
    fn open_range_includes_lower_bound() {
        let range = PriceFilter::parse("100+").unwrap();
        assert!(range.matches(Price(100)));
        assert!(!range.matches(Price(99)));
        assert!(range.matches(Price(u64::MAX)));
    }

    #[test]
    fn resolve_records_diagnostic_only_for_malformed_tokens() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(PriceFilter::resolve("all", &mut diagnostics), PriceFilter::NoFilter);
        assert!(diagnostics.is_empty());

        assert_eq!(PriceFilter::resolve("cheap", &mut diagnostics), PriceFilter::NoFilter);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.has_malformed_price_range());
    }

    #[test]
    fn display_round_trips_wire_tokens() {
        for token in ["all", "0-2000", "2000-4000", "4000-6000", "6000+"] {
            assert_eq!(PriceFilter::parse(token).unwrap().to_string(), token);
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: closed ranges include both bounds and exclude their neighbours.
            #[test]
            fn closed_range_boundaries(min in 1u64..1_000_000, width in 0u64..1_000_000) {
                let max = min + width;
                let range = PriceFilter::parse(&format!("{min}-{max}")).unwrap();
                prop_assert!(range.matches(Price(min)));
                prop_assert!(range.matches(Price(max)));
                prop_assert!(!range.matches(Price(min - 1)));
                prop_assert!(!range.matches(Price(max + 1)));
            }

            /// Property: open ranges match exactly the prices at or above the bound.
            #[test]
            fn open_range_is_lower_bound(min in 0u64..1_000_000, price in 0u64..2_000_000) {
                let range = PriceFilter::parse(&format!("{min}+")).unwrap();
                prop_assert_eq!(range.matches(Price(price)), price >= min);
            }

            /// Property: lenient resolution never panics and only recovers to NoFilter.
            #[test]
            fn resolve_is_total(token in "\\PC{0,12}") {
                let mut diagnostics = Diagnostics::new();
                let filter = PriceFilter::resolve(&token, &mut diagnostics);
                if !diagnostics.is_empty() {
                    prop_assert_eq!(filter, PriceFilter::NoFilter);
                }
            }
        }
    }
}
