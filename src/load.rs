use serde::{de::DeserializeOwned, Deserialize};
use serde_json::error::Category;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use std::{fs, io::ErrorKind, path::Path};

use crate::{error::LoadError, usd::Usd};

/// One line of the price catalogue.
#[serde_as]
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogueEntry {
    pub title: String,
    /// Accepts either a JSON number or a numeric string such as `"2.50"`.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: Usd,
}

/// Defines the JSON format for a single sales transaction.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
}

/// Reads a JSON array of catalogue entries from `path`.
///
/// # Errors
///
/// See [`load`].
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<Vec<CatalogueEntry>, LoadError> {
    load(path)
}

/// Reads a JSON array of sales records from `path`.
///
/// # Errors
///
/// See [`load`].
pub fn load_sales(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, LoadError> {
    load(path)
}

/// Reads and deserializes the JSON document at `path`.
///
/// # Errors
///
/// Returns:
/// * [`LoadError::NotFound`] if nothing exists at `path`
/// * [`LoadError::Unreadable`] if the file exists but cannot be read
/// * [`LoadError::InvalidFormat`] if the content is not well-formed UTF-8 JSON
/// * [`LoadError::UnexpectedLayout`] if the JSON does not have the shape of `T`
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let document = serde_json::from_slice(&bytes).map_err(|source| match source.classify() {
        Category::Data => LoadError::UnexpectedLayout {
            path: path.to_path_buf(),
            source,
        },
        Category::Io | Category::Syntax | Category::Eof => LoadError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(document)
}
