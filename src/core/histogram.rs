use crate::domain::model::{PriceBucket, Product};

/// Fixed number of equal-width buckets the price chart renders.
pub const BIN_COUNT: usize = 10;

/// Partitions the snapshot's sale prices into [`BIN_COUNT`] equal-width buckets.
///
/// Returns no buckets when the snapshot holds no parsable sale price. When the
/// range is degenerate (every price equal) the width would be zero, so every
/// record is counted into bucket 0 explicitly instead of dividing by it.
/// Bucket `i` covers `[min + i*width, min + (i+1)*width)`; a price exactly at
/// the maximum is clamped into the last bucket.
pub fn price_histogram(products: &[Product]) -> Vec<PriceBucket> {
    let prices: Vec<f64> = products
        .iter()
        .filter_map(|p| p.parsed_sale_price())
        .collect();
    if prices.is_empty() {
        return Vec::new();
    }

    let min = prices.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = prices.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let width = (max - min) / BIN_COUNT as f64;

    let mut counts = vec![0usize; BIN_COUNT];
    if width == 0.0 {
        counts[0] = prices.len();
    } else {
        for &price in &prices {
            let index = (((price - min) / width).floor() as usize).min(BIN_COUNT - 1);
            counts[index] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + i as f64 * width;
            let end = min + (i + 1) as f64 * width;
            PriceBucket {
                label: format!("{} - {} ₽", start.round(), end.round()),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sale_price: &str) -> Product {
        Product {
            product_id: 1,
            name: "item".to_string(),
            price: sale_price.to_string(),
            sale_price: sale_price.to_string(),
            rating: None,
            feedbacks: 0,
        }
    }

    #[test]
    fn empty_snapshot_yields_no_buckets() {
        assert!(price_histogram(&[]).is_empty());
    }

    #[test]
    fn counts_sum_to_parsable_records() {
        let products = vec![
            product("10"),
            product("55.5"),
            product("99"),
            product("broken"),
            product("200"),
        ];
        let buckets = price_histogram(&products);
        assert_eq!(buckets.len(), BIN_COUNT);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn equal_prices_land_in_a_single_bucket() {
        let products = vec![product("250"), product("250"), product("250")];
        let buckets = price_histogram(&products);
        assert_eq!(buckets.len(), BIN_COUNT);

        let non_zero: Vec<&PriceBucket> = buckets.iter().filter(|b| b.count > 0).collect();
        assert_eq!(non_zero.len(), 1);
        assert_eq!(non_zero[0].count, 3);
        assert_eq!(non_zero[0].label, "250 - 250 ₽");
    }

    #[test]
    fn max_price_lands_in_last_bucket() {
        let products = vec![product("0"), product("100")];
        let buckets = price_histogram(&products);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[BIN_COUNT - 1].count, 1);
    }

    #[test]
    fn labels_are_rounded_bound_pairs() {
        let products = vec![product("0"), product("100")];
        let buckets = price_histogram(&products);
        assert_eq!(buckets[0].label, "0 - 10 ₽");
        assert_eq!(buckets[9].label, "90 - 100 ₽");
    }
}
