use std::{fs, io::Write, path::PathBuf, time::Instant};

use crate::{
    error::{Error, Result},
    load::{load_catalogue, load_sales},
    report::{Order, Report},
    summary::{aggregate, SalesSummary},
};

/// Default name of the results file, relative to the working directory.
pub const RESULTS_FILE: &str = "SalesResults.txt";

/// Everything one run needs to know.
#[derive(Clone, Debug)]
pub struct Config {
    pub catalogue: PathBuf,
    pub sales: PathBuf,
    pub output: PathBuf,
    pub order: Order,
}

impl Config {
    /// Creates a configuration that writes to [`RESULTS_FILE`] in first-seen
    /// order.
    pub fn new(catalogue: impl Into<PathBuf>, sales: impl Into<PathBuf>) -> Self {
        Self {
            catalogue: catalogue.into(),
            sales: sales.into(),
            output: PathBuf::from(RESULTS_FILE),
            order: Order::default(),
        }
    }
}

/// Loads both documents, aggregates them, and delivers the report.
///
/// A warning line is written to `display` for every sale whose product has no
/// catalogue entry, followed by the report itself. Warnings are collected
/// during aggregation and written once it finishes, in sale order; nothing
/// else reaches `display` in between, so the output order is unchanged. The same report text is
/// then written to `config.output`, replacing any previous contents.
///
/// The elapsed time shown in the report covers loading and aggregation only.
///
/// # Errors
///
/// Returns [`Error::Load`] if either document cannot be loaded, in which case
/// nothing has been written to `display` or to `config.output`. Returns
/// [`Error::Display`] or [`Error::Output`] if the report cannot be delivered.
pub fn run(config: &Config, display: &mut impl Write) -> Result<SalesSummary> {
    let start = Instant::now();
    let catalogue = load_catalogue(&config.catalogue)?;
    let sales = load_sales(&config.sales)?;
    tracing::debug!(
        catalogue = catalogue.len(),
        sales = sales.len(),
        "documents loaded"
    );
    let summary = aggregate(&catalogue, &sales);
    let elapsed = start.elapsed();
    tracing::debug!(?elapsed, "aggregation finished");

    for product in summary.unmatched() {
        writeln!(
            display,
            "Warning: Product ID '{product}' not found in the price catalogue."
        )
        .map_err(Error::Display)?;
    }

    let text = Report::new(&summary, elapsed)
        .with_order(config.order)
        .to_string();
    display.write_all(text.as_bytes()).map_err(Error::Display)?;
    display.flush().map_err(Error::Display)?;
    fs::write(&config.output, &text).map_err(|source| Error::Output {
        path: config.output.clone(),
        source,
    })?;
    tracing::info!(path = %config.output.display(), "results written");
    Ok(summary)
}
