use crate::domain::model::{Product, ScatterPoint};

/// Projects rated products into (rating, discount) points for the scatter chart.
///
/// Records without a rating, with a zero rating, or with an unparsable price on
/// either side are silently skipped. The discount is the rounded percentage
/// between list and sale price; it is not clamped, so a sale price above the
/// list price produces a negative discount.
pub fn discount_scatter(products: &[Product]) -> Vec<ScatterPoint> {
    products
        .iter()
        .filter_map(|product| {
            let rating = product.rating.filter(|r| *r > 0.0)?;
            let price = product.parsed_price()?;
            let sale_price = product.parsed_sale_price()?;
            Some(ScatterPoint {
                name: product.name.clone(),
                rating,
                discount: discount_percent(price, sale_price),
                price,
                sale_price,
            })
        })
        .collect()
}

fn discount_percent(price: f64, sale_price: f64) -> i64 {
    if price == sale_price {
        return 0;
    }
    ((price - sale_price) / price * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: &str, sale_price: &str, rating: Option<f64>) -> Product {
        Product {
            product_id: 1,
            name: "item".to_string(),
            price: price.to_string(),
            sale_price: sale_price.to_string(),
            rating,
            feedbacks: 0,
        }
    }

    #[test]
    fn rated_discounted_product_becomes_a_point() {
        let points = discount_scatter(&[product("1000", "800", Some(4.5))]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].rating, 4.5);
        assert_eq!(points[0].discount, 20);
        assert_eq!(points[0].price, 1000.0);
        assert_eq!(points[0].sale_price, 800.0);
    }

    #[test]
    fn missing_or_zero_rating_is_excluded() {
        let products = vec![
            product("1000", "800", None),
            product("1000", "800", Some(0.0)),
        ];
        assert!(discount_scatter(&products).is_empty());
    }

    #[test]
    fn equal_prices_mean_zero_discount() {
        let points = discount_scatter(&[product("100", "100", Some(3.0))]);
        assert_eq!(points[0].discount, 0);
    }

    #[test]
    fn sale_above_list_gives_negative_discount() {
        let points = discount_scatter(&[product("100", "150", Some(3.0))]);
        assert_eq!(points[0].discount, -50);
    }

    #[test]
    fn unparsable_price_is_excluded() {
        let products = vec![
            product("abc", "800", Some(4.0)),
            product("1000", "", Some(4.0)),
        ];
        assert!(discount_scatter(&products).is_empty());
    }

    #[test]
    fn discount_is_rounded() {
        // (300 - 200) / 300 = 33.33...%
        let points = discount_scatter(&[product("300", "200", Some(5.0))]);
        assert_eq!(points[0].discount, 33);
    }
}
