use serde::Serialize;

use crate::analysis::round2;
use crate::catalog::{CatalogError, GameCatalog};

/// Free/paid share of the catalog, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreePaidSplit {
    pub free_pct: f64,
    pub paid_pct: f64,
}

/// Percentage of free vs paid listings, each rounded to two decimals. The two
/// shares partition the catalog, so they sum to 100 within rounding.
pub fn free_vs_paid(catalog: &GameCatalog) -> Result<FreePaidSplit, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::NoData);
    }
    let total = catalog.len() as f64;
    let free = catalog.games().iter().filter(|game| game.is_free).count() as f64;
    Ok(FreePaidSplit {
        free_pct: round2(free / total * 100.0),
        paid_pct: round2((total - free) / total * 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Game;

    fn priced(price: f64) -> Game {
        Game {
            app_id: String::new(),
            name: String::new(),
            release_date: String::new(),
            estimated_owners: String::new(),
            price,
            is_free: price == 0.0,
            developers: Vec::new(),
            publishers: Vec::new(),
            genres: Vec::new(),
        }
    }

    #[test]
    fn two_free_of_ten_is_a_20_80_split() {
        let games: Vec<Game> = (0..10)
            .map(|i| priced(if i < 2 { 0.0 } else { 9.99 }))
            .collect();
        let split = free_vs_paid(&GameCatalog::from_games(games)).unwrap();
        assert_eq!(split.free_pct, 20.0);
        assert_eq!(split.paid_pct, 80.0);
    }

    #[test]
    fn shares_round_to_two_decimals() {
        let games = vec![priced(0.0), priced(1.0), priced(2.0)];
        let split = free_vs_paid(&GameCatalog::from_games(games)).unwrap();
        assert_eq!(split.free_pct, 33.33);
        assert_eq!(split.paid_pct, 66.67);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = free_vs_paid(&GameCatalog::new()).unwrap_err();
        assert!(matches!(err, CatalogError::NoData));
    }
}
