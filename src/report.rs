use std::{fmt::Display, time::Duration};

use crate::summary::{ProductAggregate, SalesSummary};

/// Width of one table cell's content. Each column adds a space either side.
const CELL: usize = 30;

/// Row order for the product section of the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    /// The order each product first appears in the sales record.
    #[default]
    FirstSeen,
    /// Highest total quantity first.
    Units,
    /// Highest total cost first.
    Revenue,
}

/// A printable sales table.
///
/// To get the text of the report, use its [`Display`] implementation, or
/// [`render`] for the default row order.
#[derive(Debug)]
pub struct Report<'a> {
    summary: &'a SalesSummary,
    elapsed: Duration,
    order: Order,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(summary: &'a SalesSummary, elapsed: Duration) -> Self {
        Self {
            summary,
            elapsed,
            order: Order::default(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    fn rows(&self) -> Vec<(&'a str, &'a ProductAggregate)> {
        match self.order {
            Order::FirstSeen => self.summary.products().collect(),
            Order::Units => self.summary.products_by_units(),
            Order::Revenue => self.summary.products_by_revenue(),
        }
    }
}

fn border() -> String {
    let dashes = "-".repeat(CELL + 2);
    format!("+{dashes}+{dashes}+{dashes}+")
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = border();
        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:^CELL$} | {:^CELL$} | {:^CELL$} |",
            "Product", "Quantity", "Total Unit Cost"
        )?;
        writeln!(f, "{border}")?;
        for (name, prod) in self.rows() {
            writeln!(
                f,
                "| {name:>CELL$} | {:>CELL$} | {:>CELL$} |",
                prod.quantity, prod.total_cost
            )?;
        }
        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<CELL$} | {:>CELL$} | {:>CELL$} |",
            "Total Cost of Sales", self.summary.total_quantity, self.summary.total_cost
        )?;
        writeln!(f, "{border}")?;
        let elapsed = format!("{:.6} seconds", self.elapsed.as_secs_f64());
        let filler = "x".repeat(CELL + 2);
        writeln!(f, "| {:<CELL$} | {elapsed:>CELL$} |{filler}|", "Time Elapsed")?;
        writeln!(f, "{border}")?;
        Ok(())
    }
}

/// Renders `summary` as a table, with products in first-seen order.
#[must_use]
pub fn render(summary: &SalesSummary, elapsed: Duration) -> String {
    Report::new(summary, elapsed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        load::{CatalogueEntry, SaleRecord},
        summary::aggregate,
        usd::Usd,
    };

    const BORDER: &str = "+--------------------------------+--------------------------------+--------------------------------+";

    fn example_summary() -> SalesSummary {
        let catalogue = vec![
            CatalogueEntry {
                title: "Apple".into(),
                price: Usd::new(2.0),
            },
            CatalogueEntry {
                title: "Pen".into(),
                price: Usd::new(1.5),
            },
        ];
        let sales = vec![
            SaleRecord {
                product: "Apple".into(),
                quantity: 3,
            },
            SaleRecord {
                product: "Pen".into(),
                quantity: 2,
            },
            SaleRecord {
                product: "Ghost".into(),
                quantity: 1,
            },
        ];
        aggregate(&catalogue, &sales)
    }

    #[test]
    fn border_fn_spans_three_columns_of_32() {
        assert_eq!(border(), BORDER);
        assert_eq!(border().len(), 1 + 3 * 33);
    }

    #[test]
    fn render_fn_produces_exact_table() {
        let text = render(&example_summary(), Duration::from_millis(1500));
        let want = [
            BORDER,
            "|            Product             |            Quantity            |        Total Unit Cost         |",
            BORDER,
            "|                          Apple |                              3 |                          $6.00 |",
            "|                            Pen |                              2 |                          $3.00 |",
            BORDER,
            "| Total Cost of Sales            |                              5 |                          $9.00 |",
            BORDER,
            "| Time Elapsed                   |               1.500000 seconds |xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx|",
            BORDER,
        ]
        .map(|line| format!("{line}\n"))
        .concat();
        assert_eq!(text, want);
    }

    #[test]
    fn every_line_has_the_same_width() {
        let text = render(&example_summary(), Duration::from_micros(42));
        for line in text.lines() {
            assert_eq!(line.len(), BORDER.len(), "{line:?}");
        }
    }

    #[test]
    fn render_fn_shows_only_fixed_rows_for_empty_summary() {
        let text = render(&SalesSummary::default(), Duration::ZERO);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], BORDER);
        assert_eq!(lines[3], BORDER);
        assert!(lines[4].starts_with("| Total Cost of Sales"));
        assert!(lines[4].ends_with("  0 |                          $0.00 |"));
        assert_eq!(
            lines[6],
            "| Time Elapsed                   |               0.000000 seconds |xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx|"
        );
    }

    #[test]
    fn total_cost_always_has_two_decimals() {
        let catalogue = vec![CatalogueEntry {
            title: "Book".into(),
            price: Usd::new(6.5),
        }];
        let sales = vec![SaleRecord {
            product: "Book".into(),
            quantity: 3,
        }];
        let summary = aggregate(&catalogue, &sales);
        let text = render(&summary, Duration::ZERO);
        assert!(text.contains(" $19.50 |"), "{text}");
    }

    #[test]
    fn report_honours_revenue_order() {
        let summary = example_summary();
        let text = Report::new(&summary, Duration::ZERO)
            .with_order(Order::Revenue)
            .to_string();
        let apple = text.find("Apple").unwrap();
        let pen = text.find("Pen").unwrap();
        assert!(apple < pen);

        let catalogue = vec![
            CatalogueEntry {
                title: "Cheap".into(),
                price: Usd::new(0.5),
            },
            CatalogueEntry {
                title: "Dear".into(),
                price: Usd::new(50.0),
            },
        ];
        let sales = vec![
            SaleRecord {
                product: "Cheap".into(),
                quantity: 10,
            },
            SaleRecord {
                product: "Dear".into(),
                quantity: 1,
            },
        ];
        let summary = aggregate(&catalogue, &sales);
        let by_revenue = Report::new(&summary, Duration::ZERO)
            .with_order(Order::Revenue)
            .to_string();
        assert!(by_revenue.find("Dear").unwrap() < by_revenue.find("Cheap").unwrap());
        let by_units = Report::new(&summary, Duration::ZERO)
            .with_order(Order::Units)
            .to_string();
        assert!(by_units.find("Cheap").unwrap() < by_units.find("Dear").unwrap());
    }
}
