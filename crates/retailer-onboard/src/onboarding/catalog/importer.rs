use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::{CatalogImportError, CsvRowIssue};

#[derive(Debug)]
pub(crate) struct ParsedProduct {
    pub(crate) name: String,
    pub(crate) price: Option<f64>,
    pub(crate) unit_size: Option<String>,
    pub(crate) category: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ParsedCatalog {
    pub(crate) products: Vec<ParsedProduct>,
    pub(crate) issues: Vec<CsvRowIssue>,
}

/// Parse a product CSV, collecting row-level problems instead of aborting
/// the batch. Only transport-level failures are fatal.
pub(crate) fn parse_products<R: Read>(reader: R) -> Result<ParsedCatalog, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();
    let mut issues = Vec::new();

    for (index, row) in csv_reader.deserialize::<ProductRow>().enumerate() {
        // Header occupies line 1.
        let line = (index + 2) as u64;
        match row {
            Ok(row) => match row.into_product() {
                Ok(product) => products.push(product),
                Err(reason) => issues.push(CsvRowIssue { line, reason }),
            },
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => issues.push(CsvRowIssue {
                line,
                reason: err.to_string(),
            }),
        }
    }

    Ok(ParsedCatalog { products, issues })
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Price", default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(
        rename = "Unit Size",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    unit_size: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
}

impl ProductRow {
    fn into_product(self) -> Result<ParsedProduct, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("product name is required".to_string());
        }

        let price = match self.price {
            Some(raw) => {
                Some(parse_price(&raw).ok_or_else(|| format!("invalid price '{raw}'"))?)
            }
            None => None,
        };

        Ok(ParsedProduct {
            name,
            price,
            unit_size: self.unit_size,
            category: self.category,
        })
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches('$');
    cleaned.parse::<f64>().ok().filter(|price| *price >= 0.0)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
