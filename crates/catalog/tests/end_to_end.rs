use chrono::{TimeZone, Utc};

use shanga_catalog::{
    CatalogQuery, CatalogSnapshot, Category, Diagnostic, FilterState, Price, Product, Slug,
    SortKey,
};
use shanga_core::{CategoryId, ProductId};

fn category(id: &str, name: &str, slug: &str) -> Category {
    Category::new(CategoryId::new(id).unwrap(), name, Slug::parse(slug).unwrap())
}

fn product(id: &str, price: u64, slug: &str, featured: bool, day: u32) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        format!("Product {id}"),
        Price(price),
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
    )
    .with_category_slug(slug)
    .with_featured(featured)
}

fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(
        vec![
            product("1", 2500, "bracelets", true, 1),
            product("2", 4800, "necklaces", false, 2),
            product("3", 1800, "waist-beads", true, 3),
        ],
        vec![
            category("c1", "Bracelets", "bracelets"),
            category("c2", "Necklaces", "necklaces"),
            category("c3", "Waist Beads", "waist-beads"),
        ],
    )
    .unwrap()
}

fn ids(query: &CatalogQuery, snapshot: &CatalogSnapshot) -> Vec<String> {
    query.run(snapshot).iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn scenario_a_price_range_with_price_low_sort() {
    let snapshot = catalog();
    let query = CatalogQuery::from_selectors("all", "0-2000", "price-low");
    assert_eq!(ids(&query, &snapshot), ["3"]);
}

#[test]
fn scenario_b_featured_first_preserves_original_order() {
    let snapshot = catalog();
    let query = CatalogQuery::from_selectors("all", "all", "featured");
    assert_eq!(ids(&query, &snapshot), ["1", "3", "2"]);
}

#[test]
fn scenario_c_category_selection_and_unknown_category() {
    let snapshot = catalog();

    let necklaces = CatalogQuery::from_selectors("necklaces", "all", "featured");
    assert_eq!(ids(&necklaces, &snapshot), ["2"]);

    let rings = CatalogQuery::from_selectors("rings", "all", "featured");
    let result = rings.run(&snapshot);
    assert!(result.is_empty());
    assert_eq!(result.count(), 0);
    assert!(result.diagnostics().is_empty());
}

#[test]
fn malformed_price_token_behaves_like_all_but_is_recorded() {
    let snapshot = catalog();

    let explicit = CatalogQuery::from_selectors("all", "all", "featured");
    let malformed = CatalogQuery::from_selectors("all", "cheap", "featured");

    let explicit_result = explicit.run(&snapshot);
    let malformed_result = malformed.run(&snapshot);

    assert_eq!(explicit_result.ids(), malformed_result.ids());
    assert!(explicit_result.diagnostics().is_empty());

    let recorded: Vec<&Diagnostic> = malformed_result.diagnostics().iter().collect();
    assert_eq!(recorded.len(), 1);
    assert!(matches!(
        recorded[0],
        Diagnostic::MalformedPriceRange { token, .. } if token == "cheap"
    ));
}

#[test]
fn newest_orders_by_creation_descending() {
    let snapshot = catalog();
    let query = CatalogQuery::from_selectors("all", "all", "newest");
    assert_eq!(ids(&query, &snapshot), ["3", "2", "1"]);
}

#[test]
fn price_high_with_open_range() {
    let snapshot = catalog();
    let query = CatalogQuery::from_selectors("all", "2000+", "price-high");
    assert_eq!(ids(&query, &snapshot), ["2", "1"]);
}

#[test]
fn rerunning_on_result_is_a_no_op() {
    let snapshot = catalog();
    let index = snapshot.category_index();

    for sort in SortKey::ALL {
        for (category, price) in [("all", "all"), ("all", "2000-5000"), ("necklaces", "4000+")] {
            let query = CatalogQuery::from_selectors(category, price, sort.as_token());
            let first = query.apply(snapshot.products(), &index);
            let second = query.apply(first.iter().copied(), &index);
            assert_eq!(first, second, "{category}/{price}/{sort}");
        }
    }
}

#[test]
fn typed_query_matches_decoded_query() {
    let snapshot = catalog();
    let mut diagnostics = Default::default();
    let typed = CatalogQuery::new(
        FilterState::from_selectors("bracelets", "2000-4000", &mut diagnostics),
        SortKey::Name,
    );
    let decoded = CatalogQuery::from_selectors("bracelets", "2000-4000", "name");
    assert_eq!(typed, decoded);
    assert_eq!(ids(&typed, &snapshot), ["1"]);
}
