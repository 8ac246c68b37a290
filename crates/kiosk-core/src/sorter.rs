//! # Display Ordering
//!
//! The comparator used to lay out an order's products for display.
//!
//! ## Keys
//! ```text
//! 1. category sort priority      basic-menu < beverages < snacks
//! 2. burgers only: stuffing      cheese < salad < potato
//! 3. display name                byte-wise, ascending
//! ```
//!
//! Sorting is stable: products equal on every key keep their relative order.

use std::cmp::Ordering;

use crate::product::{Product, ProductKind};

/// Total order over products of one order.
pub fn compare(a: &Product, b: &Product) -> Ordering {
    a.category()
        .sort_priority
        .cmp(&b.category().sort_priority)
        .then_with(|| match (a.kind(), b.kind()) {
            (ProductKind::Burger(left), ProductKind::Burger(right)) => {
                left.stuffing_priority.cmp(&right.stuffing_priority)
            }
            _ => Ordering::Equal,
        })
        .then_with(|| a.name().cmp(b.name()))
}

/// Stable in-place sort by [`compare`].
pub fn sort_products(products: &mut [Product]) {
    products.sort_by(compare);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, MenuItemKind, Size, Stuffing};

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    fn mixed_products(catalog: &Catalog) -> Vec<Product> {
        vec![
            Product::simple(catalog, MenuItemKind::Olivier),
            Product::burger(catalog, Size::Small, Stuffing::Potato),
            Product::simple(catalog, MenuItemKind::Cola),
            Product::burger(catalog, Size::Large, Stuffing::Salad),
            Product::simple(catalog, MenuItemKind::Caesar),
            Product::burger(catalog, Size::Small, Stuffing::Cheese),
            Product::simple(catalog, MenuItemKind::Coffee),
            Product::burger(catalog, Size::Large, Stuffing::Cheese),
        ]
    }

    #[test]
    fn test_sort_keys() {
        let catalog = Catalog::standard();
        let mut products = mixed_products(&catalog);

        sort_products(&mut products);

        assert_eq!(
            names(&products),
            vec![
                "large hamburger with cheese",
                "small hamburger with cheese",
                "large hamburger with salad",
                "small hamburger with potato",
                "coffee",
                "cola",
                "caesar",
                "olivier",
            ]
        );
    }

    #[test]
    fn test_stuffing_beats_name() {
        let catalog = Catalog::standard();
        // "small ... cheese" > "large ... potato" by name, but cheese sorts first
        let cheese = Product::burger(&catalog, Size::Small, Stuffing::Cheese);
        let potato = Product::burger(&catalog, Size::Large, Stuffing::Potato);

        assert_eq!(compare(&cheese, &potato), Ordering::Less);
        assert_eq!(compare(&potato, &cheese), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let catalog = Catalog::standard();
        let mut products = mixed_products(&catalog);

        sort_products(&mut products);
        let once = products.clone();
        sort_products(&mut products);

        assert_eq!(products, once);
    }

    #[test]
    fn test_comparisons_are_consistent() {
        let catalog = Catalog::standard();
        let products = mixed_products(&catalog);

        for a in &products {
            assert_eq!(compare(a, a), Ordering::Equal);
            for b in &products {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                for c in &products {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let catalog = Catalog::standard();
        let mut products = vec![
            Product::simple(&catalog, MenuItemKind::Cola),
            Product::burger(&catalog, Size::Small, Stuffing::Salad),
            Product::simple(&catalog, MenuItemKind::Cola),
        ];

        sort_products(&mut products);

        assert_eq!(
            names(&products),
            vec!["small hamburger with salad", "cola", "cola"]
        );
    }
}
