use std::collections::HashMap;

use crate::{
    load::{CatalogueEntry, SaleRecord},
    usd::Usd,
};

/// Holds sales data on a specific product.
///
/// Quantities are summed as `u128` so that no run of `u64` sale quantities
/// can overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProductAggregate {
    pub quantity: u128,
    pub total_cost: Usd,
}

/// The result of joining a sales record against a price catalogue.
///
/// Products are kept in the order they were first sold. Sales of products
/// missing from the catalogue are listed in [`Self::unmatched`] and
/// contribute nothing to any total.
#[derive(Debug, Default)]
pub struct SalesSummary {
    pub total_cost: Usd,
    pub total_quantity: u128,
    products: Vec<(String, ProductAggregate)>,
    index: HashMap<String, usize>,
    unmatched: Vec<String>,
}

impl SalesSummary {
    /// Iterates over products and their aggregates in first-seen order.
    pub fn products(&self) -> impl Iterator<Item = (&str, &ProductAggregate)> {
        self.products.iter().map(|(name, agg)| (name.as_str(), agg))
    }

    #[must_use]
    pub fn product(&self, name: &str) -> Option<&ProductAggregate> {
        self.index.get(name).map(|&i| &self.products[i].1)
    }

    /// Product identifiers of sales with no catalogue entry, one per sale.
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Returns products sorted by accumulated quantity, descending.
    ///
    /// Products with identical quantities keep their first-seen order.
    #[must_use]
    pub fn products_by_units(&self) -> Vec<(&str, &ProductAggregate)> {
        let mut products: Vec<_> = self.products().collect();
        products.sort_by(|(_, a), (_, b)| b.quantity.cmp(&a.quantity));
        products
    }

    /// Returns products sorted by accumulated cost, descending.
    ///
    /// Products with identical costs keep their first-seen order.
    #[must_use]
    pub fn products_by_revenue(&self) -> Vec<(&str, &ProductAggregate)> {
        let mut products: Vec<_> = self.products().collect();
        products.sort_by(|(_, a), (_, b)| b.total_cost.total_cmp(&a.total_cost));
        products
    }

    fn record(&mut self, product: &str, quantity: u64, cost: Usd) {
        let quantity = u128::from(quantity);
        self.total_quantity += quantity;
        self.total_cost += cost;
        let i = if let Some(i) = self.index.get(product).copied() {
            i
        } else {
            let i = self.products.len();
            self.products
                .push((product.to_string(), ProductAggregate::default()));
            self.index.insert(product.to_string(), i);
            i
        };
        let agg = &mut self.products[i].1;
        agg.quantity += quantity;
        agg.total_cost += cost;
    }
}

/// Builds the title-to-price lookup. Later duplicate titles replace earlier
/// ones.
fn price_lookup(catalogue: &[CatalogueEntry]) -> HashMap<&str, Usd> {
    let mut prices = HashMap::with_capacity(catalogue.len());
    for entry in catalogue {
        if let Some(previous) = prices.insert(entry.title.as_str(), entry.price) {
            tracing::debug!(
                title = %entry.title,
                %previous,
                replacement = %entry.price,
                "duplicate catalogue title, keeping the later price"
            );
        }
    }
    prices
}

/// Joins `sales` against `catalogue` in a single pass over the sales.
///
/// # Examples
///
/// ```
/// # use compute_sales::{aggregate, CatalogueEntry, SaleRecord, Usd};
/// let catalogue = vec![CatalogueEntry { title: "Pen".into(), price: Usd::new(1.5) }];
/// let sales = vec![
///     SaleRecord { product: "Pen".into(), quantity: 2 },
///     SaleRecord { product: "Ghost".into(), quantity: 1 },
/// ];
/// let summary = aggregate(&catalogue, &sales);
/// assert_eq!(summary.total_quantity, 2);
/// assert_eq!(summary.total_cost, Usd::new(3.0));
/// assert_eq!(summary.unmatched(), ["Ghost"]);
/// ```
#[must_use]
pub fn aggregate(catalogue: &[CatalogueEntry], sales: &[SaleRecord]) -> SalesSummary {
    let prices = price_lookup(catalogue);
    let mut summary = SalesSummary::default();
    for sale in sales {
        if let Some(&price) = prices.get(sale.product.as_str()) {
            let cost = price * sale.quantity;
            tracing::trace!(product = %sale.product, quantity = sale.quantity, %cost, "matched sale");
            summary.record(&sale.product, sale.quantity, cost);
        } else {
            tracing::debug!(product = %sale.product, "sale has no catalogue entry");
            summary.unmatched.push(sale.product.clone());
        }
    }
    summary
}
