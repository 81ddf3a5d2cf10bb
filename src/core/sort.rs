use crate::domain::model::{Product, SortDirection, SortField, SortSpec};
use std::cmp::Ordering;

/// Returns the snapshot's products in the order requested by `spec`; the input
/// slice is left untouched.
///
/// The sort is deliberately unstable: the comparator has no secondary key, so
/// records with equal keys may land in any relative order. Descending reverses
/// the comparison outcome, not the sequence, so ties stay order-free either way.
pub fn sort_products(products: &[Product], spec: &SortSpec) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_unstable_by(|a, b| {
        let ord = compare_field(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

fn compare_field(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => compare_parsed(a.parsed_price(), b.parsed_price()),
        SortField::SalePrice => compare_parsed(a.parsed_sale_price(), b.parsed_sale_price()),
        SortField::Rating => a
            .rating_or_zero()
            .partial_cmp(&b.rating_or_zero())
            .unwrap_or(Ordering::Equal),
        SortField::Feedbacks => a.feedbacks.cmp(&b.feedbacks),
    }
}

// An unparsable price compares equal to everything, matching the silent
// NaN propagation of the upstream behavior.
fn compare_parsed(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
