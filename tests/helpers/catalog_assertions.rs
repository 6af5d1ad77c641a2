//! Assertion helpers for catalog tests.

use propcat::PropertyCatalog;

/// Property names in iteration order.
pub fn property_names(catalog: &PropertyCatalog) -> Vec<String> {
    catalog.iter().map(|p| p.name().to_string()).collect()
}

/// Assert iteration order is non-decreasing in order index.
pub fn assert_ordered(catalog: &PropertyCatalog) {
    let indices: Vec<i32> = catalog.iter().map(|p| p.order_index()).collect();
    assert!(
        indices.windows(2).all(|w| w[0] <= w[1]),
        "Expected non-decreasing order indices, got {:?}",
        indices
    );
}

/// Assert the catalog has no property named `class`.
pub fn assert_no_class_property(catalog: &PropertyCatalog) {
    assert!(
        catalog.iter().all(|p| p.name() != "class"),
        "Catalog of '{}' should not expose 'class'",
        catalog.owner()
    );
}
