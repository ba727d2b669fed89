//! The in-memory catalog and its CSV loader.

use std::collections::HashMap;

use log::{debug, warn};

use crate::catalog::error::CatalogError;
use crate::catalog::game::Game;

/// Ordered collection of listings plus the file they came from.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: Vec<Game>,
    source_path: Option<String>,
}

impl GameCatalog {
    pub fn new() -> GameCatalog {
        GameCatalog::default()
    }

    /// Loads a catalog straight from a CSV export.
    pub fn from_path(path: &str) -> Result<GameCatalog, CatalogError> {
        let mut catalog = GameCatalog::new();
        catalog.load(path)?;
        Ok(catalog)
    }

    /// Builds a catalog from records already in memory. No source file is
    /// attached, so subsampling is unavailable on the result.
    pub fn from_games(games: Vec<Game>) -> GameCatalog {
        GameCatalog {
            games,
            source_path: None,
        }
    }

    /// Replaces the whole collection with the rows of `path` and returns how
    /// many records survived.
    ///
    /// Rows that fail to coerce are skipped with a warning rather than
    /// aborting the load. A load that fails outright (unreadable file, or no
    /// surviving record) leaves the previous collection in place.
    pub fn load(&mut self, path: &str) -> Result<usize, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|err| CatalogError::Read {
                path: path.to_string(),
                source: err,
            })?;
        let headers = reader
            .headers()
            .map_err(|err| CatalogError::Read {
                path: path.to_string(),
                source: err,
            })?
            .clone();

        let mut games = Vec::new();
        let mut skipped = 0usize;
        for (index, row) in reader.records().enumerate() {
            // Header is line 1, so data row N sits on line N + 1.
            let line = index + 2;
            let record = match row {
                Ok(record) => record,
                Err(err) => {
                    warn!("skipping line {line} of '{path}': {err}");
                    skipped += 1;
                    continue;
                }
            };
            match Game::from_fields(&row_to_fields(&headers, &record)) {
                Ok(game) => games.push(game),
                Err(err) => {
                    warn!("skipping line {line} of '{path}': {err}");
                    skipped += 1;
                }
            }
        }

        if games.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_string(),
            });
        }

        debug!(
            "loaded {} game(s) from '{path}', {skipped} skipped",
            games.len()
        );
        self.games = games;
        self.source_path = Some(path.to_string());
        Ok(self.games.len())
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// File the current collection was loaded from, if any.
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }
}

/// Pairs each cell with its header name. Short rows simply omit their trailing
/// columns; cells beyond the header are dropped.
fn row_to_fields(headers: &csv::StringRecord, record: &csv::StringRecord) -> HashMap<String, String> {
    headers
        .iter()
        .zip(record.iter())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
