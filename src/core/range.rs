use crate::domain::model::{PriceRange, Product};

/// Bounds shown when nothing is loaded yet.
pub const DEFAULT_RANGE: PriceRange = PriceRange {
    min: 0,
    max: 100_000,
};

/// Sale-price bounds over the snapshot, floored/ceiled to whole units.
///
/// Products whose sale price does not parse are skipped; a snapshot with no
/// usable prices behaves like an empty one and yields [`DEFAULT_RANGE`].
pub fn price_range(products: &[Product]) -> PriceRange {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for product in products {
        if let Some(price) = product.parsed_sale_price() {
            min = min.min(price);
            max = max.max(price);
        }
    }

    if min > max {
        return DEFAULT_RANGE;
    }

    PriceRange {
        min: min.floor() as i64,
        max: max.ceil() as i64,
    }
}
