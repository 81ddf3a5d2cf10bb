use crate::core::histogram::price_histogram;
use crate::core::range::price_range;
use crate::core::scatter::discount_scatter;
use crate::core::sort::sort_products;
use crate::domain::model::{
    CatalogReport, PriceBucket, PriceRange, Product, ScatterPoint, Snapshot, SortSpec,
};

/// Owns the current snapshot together with the values derived from it.
///
/// The derived aggregates are memoized: they are recomputed only when the
/// snapshot is replaced. Sorting reorders the owned sequence and nothing else,
/// since range, histogram and scatter do not depend on record order. No method
/// mutates an individual product.
#[derive(Debug, Clone)]
pub struct CatalogState {
    snapshot: Snapshot,
    price_range: PriceRange,
    histogram: Vec<PriceBucket>,
    scatter: Vec<ScatterPoint>,
    sort: Option<SortSpec>,
}

impl CatalogState {
    pub fn new(snapshot: Snapshot) -> Self {
        let price_range = price_range(&snapshot.products);
        let histogram = price_histogram(&snapshot.products);
        let scatter = discount_scatter(&snapshot.products);
        Self {
            snapshot,
            price_range,
            histogram,
            scatter,
            sort: None,
        }
    }

    /// Replaces the snapshot wholesale and recomputes every derived value.
    /// The previous sort request does not survive the replacement.
    pub fn replace(&mut self, snapshot: Snapshot) {
        *self = Self::new(snapshot);
    }

    /// Reorders the owned product sequence. Aggregates stay as they are.
    pub fn apply_sort(&mut self, spec: SortSpec) {
        self.snapshot.products = sort_products(&self.snapshot.products, &spec);
        self.sort = Some(spec);
    }

    pub fn products(&self) -> &[Product] {
        &self.snapshot.products
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn histogram(&self) -> &[PriceBucket] {
        &self.histogram
    }

    pub fn scatter(&self) -> &[ScatterPoint] {
        &self.scatter
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Snapshots the state into a plain report for rendering or export.
    pub fn report(&self) -> CatalogReport {
        CatalogReport {
            total: self.snapshot.total,
            fetched_at: self.snapshot.fetched_at,
            products: self.snapshot.products.clone(),
            price_range: self.price_range,
            histogram: self.histogram.clone(),
            scatter: self.scatter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SortDirection, SortField};

    fn product(id: i64, sale_price: &str, rating: Option<f64>) -> Product {
        Product {
            product_id: id,
            name: format!("item {}", id),
            price: sale_price.to_string(),
            sale_price: sale_price.to_string(),
            rating,
            feedbacks: 0,
        }
    }

    #[test]
    fn derived_values_follow_snapshot_replacement() {
        let mut state = CatalogState::new(Snapshot::new(vec![], 0));
        assert_eq!(state.price_range(), PriceRange { min: 0, max: 100_000 });
        assert!(state.histogram().is_empty());

        state.replace(Snapshot::new(
            vec![product(1, "50", Some(4.0)), product(2, "150", None)],
            2,
        ));
        assert_eq!(state.price_range(), PriceRange { min: 50, max: 150 });
        assert_eq!(state.histogram().len(), 10);
        assert_eq!(state.scatter().len(), 1);
    }

    #[test]
    fn sorting_reorders_without_touching_aggregates() {
        let mut state = CatalogState::new(Snapshot::new(
            vec![product(1, "300", None), product(2, "100", None)],
            2,
        ));
        let histogram_before = state.histogram().to_vec();

        state.apply_sort(SortSpec {
            field: SortField::SalePrice,
            direction: SortDirection::Ascending,
        });
        assert_eq!(state.products()[0].product_id, 2);
        assert_eq!(state.histogram(), histogram_before.as_slice());
    }

    #[test]
    fn replacement_clears_the_sort_request() {
        let mut state = CatalogState::new(Snapshot::new(vec![product(1, "10", None)], 1));
        state.apply_sort(SortSpec {
            field: SortField::Name,
            direction: SortDirection::Descending,
        });
        assert!(state.sort().is_some());

        state.replace(Snapshot::new(vec![], 0));
        assert!(state.sort().is_none());
    }
}
