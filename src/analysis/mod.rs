//! Descriptive statistics over a loaded [GameCatalog].
//!
//! Every query is a pure function of the catalog snapshot it is handed; there
//! is no cross-query caching. All of them reject an empty catalog with
//! [CatalogError::NoData].

pub mod free_paid;
pub mod genre_prices;
pub mod price_brackets;
pub mod release_years;

use serde::Serialize;

use crate::catalog::{CatalogError, GameCatalog};

pub use free_paid::{free_vs_paid, FreePaidSplit};
pub use genre_prices::{price_stats_by_genre, GenrePriceStats};
pub use price_brackets::{
    genres_by_price_bracket, BracketGenres, GenreCount, PriceBracket, BRACKETS,
};
pub use release_years::{peak_release_years, PeakYears, ReleasePeak};

/// Everything the report command prints, in one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub game_count: usize,
    pub free_paid: FreePaidSplit,
    pub peak_release: ReleasePeak,
    pub price_brackets: Vec<BracketGenres>,
    pub genre_prices: Vec<GenrePriceStats>,
}

/// Runs every query against the catalog. Either all sections compute or the
/// first failure comes back; no partial report is returned.
pub fn full_report(catalog: &GameCatalog) -> Result<CatalogReport, CatalogError> {
    Ok(CatalogReport {
        game_count: catalog.len(),
        free_paid: free_vs_paid(catalog)?,
        peak_release: peak_release_years(catalog)?,
        price_brackets: genres_by_price_bracket(catalog)?,
        genre_prices: price_stats_by_genre(catalog)?,
    })
}

/// Rounds to two decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
