#![doc = include_str!("../README.md")]

mod error;
mod load;
mod logger;
mod pipeline;
mod report;
mod summary;
mod usd;

pub use error::{Error, LoadError, Result};
pub use load::{load, load_catalogue, load_sales, CatalogueEntry, SaleRecord};
pub use logger::init_logger;
pub use pipeline::{run, Config, RESULTS_FILE};
pub use report::{render, Order, Report};
pub use summary::{aggregate, ProductAggregate, SalesSummary};
pub use usd::Usd;
