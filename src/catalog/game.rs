//! One storefront listing and the coercion rules that build it from a raw
//! CSV row.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::catalog::error::CatalogError;

/// Header of the column that identifies a listing across reads of the same file.
pub const ID_COLUMN: &str = "AppID";

/// Date layouts seen in storefront exports, tried in order.
const DATE_FORMATS: [&str; 4] = ["%b %d, %Y", "%B %d, %Y", "%d %b, %Y", "%Y-%m-%d"];

/// A normalized game listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub app_id: String,
    pub name: String,
    /// Raw date string as exported; see [Game::release_year].
    pub release_date: String,
    /// Raw ownership band (e.g. "20000 - 50000"), carried but not aggregated.
    pub estimated_owners: String,
    pub price: f64,
    /// Always derived from `price`; a free-flag column in the input is ignored.
    pub is_free: bool,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
}

impl Game {
    /// Builds a listing from a header-name to cell map. Missing cells read as
    /// empty strings.
    ///
    /// Price is the one field that can fail: an empty cell means 0.0, anything
    /// else must parse as a decimal. The error names the record via its `Name`
    /// cell, or "unknown" when even that is missing.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Game, CatalogError> {
        let field = |key: &str| fields.get(key).map(String::as_str).unwrap_or("");

        let name = match fields.get("Name") {
            Some(value) => value.clone(),
            None => "unknown".to_string(),
        };

        let raw_price = field("Price");
        let price = if raw_price.is_empty() {
            0.0
        } else {
            raw_price
                .trim()
                .parse::<f64>()
                .map_err(|err| CatalogError::Record {
                    name: name.clone(),
                    reason: format!("price '{raw_price}' is not a number: {err}"),
                })?
        };

        Ok(Game {
            app_id: field(ID_COLUMN).to_string(),
            name,
            release_date: field("Release date").to_string(),
            estimated_owners: field("Estimated owners").to_string(),
            price,
            is_free: price == 0.0,
            developers: split_list(field("Developers"), ';'),
            publishers: split_list(field("Publishers"), ';'),
            genres: split_list(field("Genres"), ','),
        })
    }

    /// Release year, when one can be pulled out of the raw date string.
    ///
    /// The known layouts are tried in order; failing those, whitespace-split
    /// tokens are scanned for a bare 4-digit number with `,` or `.` stripped
    /// from either end (covers strings like "Coming 2025" or "Q3 2021, TBA").
    /// An unresolvable date yields None, never an error.
    pub fn release_year(&self) -> Option<i32> {
        if self.release_date.is_empty() {
            return None;
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(&self.release_date, format) {
                return Some(date.year());
            }
        }
        self.release_date
            .split_whitespace()
            .map(|token| token.trim_matches(|c| c == ',' || c == '.'))
            .find(|token| token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|token| token.parse().ok())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.name, self.app_id)
    }
}

/// Splits a raw multi-value cell on `delimiter`, trimming each element.
/// An empty cell means no values, not one empty value.
fn split_list(raw: &str, delimiter: char) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(delimiter)
        .map(|part| part.trim().to_string())
        .collect()
}
