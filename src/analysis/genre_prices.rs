use std::cmp::Ordering;

use serde::Serialize;

use crate::analysis::round2;
use crate::catalog::{CatalogError, GameCatalog};

/// Price profile of one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenrePriceStats {
    pub genre: String,
    pub mean_price: f64,
    pub max_price: f64,
    /// Cheapest strictly-positive price; 0 when the genre only has free games.
    pub min_paid_price: f64,
    pub games: usize,
}

struct GenreSamples {
    genre: String,
    prices: Vec<f64>,
}

/// Mean (rounded to two decimals), max, cheapest-paid price and game count
/// per non-empty genre, ordered by descending mean. Ties keep first-seen
/// genre order.
pub fn price_stats_by_genre(catalog: &GameCatalog) -> Result<Vec<GenrePriceStats>, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::NoData);
    }

    let mut samples: Vec<GenreSamples> = Vec::new();
    for game in catalog.games() {
        for genre in &game.genres {
            if genre.is_empty() {
                continue;
            }
            match samples.iter_mut().find(|entry| entry.genre == *genre) {
                Some(entry) => entry.prices.push(game.price),
                None => samples.push(GenreSamples {
                    genre: genre.clone(),
                    prices: vec![game.price],
                }),
            }
        }
    }

    let mut stats: Vec<GenrePriceStats> = samples
        .into_iter()
        .map(|entry| {
            let games = entry.prices.len();
            let mean = entry.prices.iter().sum::<f64>() / games as f64;
            let max = entry
                .prices
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let min_paid = entry
                .prices
                .iter()
                .copied()
                .filter(|&price| price > 0.0)
                .fold(f64::INFINITY, f64::min);
            GenrePriceStats {
                genre: entry.genre,
                mean_price: round2(mean),
                max_price: max,
                min_paid_price: if min_paid.is_finite() { min_paid } else { 0.0 },
                games,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.mean_price
            .partial_cmp(&a.mean_price)
            .unwrap_or(Ordering::Equal)
    });
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Game;

    fn game(price: f64, genres: &[&str]) -> Game {
        Game {
            app_id: String::new(),
            name: String::new(),
            release_date: String::new(),
            estimated_owners: String::new(),
            price,
            is_free: price == 0.0,
            developers: Vec::new(),
            publishers: Vec::new(),
            genres: genres.iter().map(|genre| genre.to_string()).collect(),
        }
    }

    #[test]
    fn stats_cover_mean_max_min_paid_and_count() {
        let games = vec![
            game(0.0, &["Action"]),
            game(59.99, &["Action"]),
            game(79.99, &["Action"]),
        ];
        let stats = price_stats_by_genre(&GameCatalog::from_games(games)).unwrap();

        assert_eq!(stats.len(), 1);
        let action = &stats[0];
        assert_eq!(action.genre, "Action");
        assert_eq!(action.mean_price, 46.66);
        assert_eq!(action.max_price, 79.99);
        assert_eq!(action.min_paid_price, 59.99);
        assert_eq!(action.games, 3);
    }

    #[test]
    fn genres_with_only_free_games_report_zero_minimum() {
        let games = vec![game(0.0, &["Casual"]), game(0.0, &["Casual"])];
        let stats = price_stats_by_genre(&GameCatalog::from_games(games)).unwrap();
        assert_eq!(stats[0].min_paid_price, 0.0);
        assert_eq!(stats[0].max_price, 0.0);
        assert_eq!(stats[0].mean_price, 0.0);
        assert_eq!(stats[0].games, 2);
    }

    #[test]
    fn genres_order_by_descending_mean() {
        let games = vec![
            game(30.0, &["Strategy"]),
            game(5.0, &["Indie"]),
            game(50.0, &["Action"]),
        ];
        let stats = price_stats_by_genre(&GameCatalog::from_games(games)).unwrap();
        let order: Vec<&str> = stats.iter().map(|entry| entry.genre.as_str()).collect();
        assert_eq!(order, vec!["Action", "Strategy", "Indie"]);
    }

    #[test]
    fn tied_means_keep_first_seen_order() {
        let games = vec![game(10.0, &["Racing"]), game(10.0, &["Sports"])];
        let stats = price_stats_by_genre(&GameCatalog::from_games(games)).unwrap();
        let order: Vec<&str> = stats.iter().map(|entry| entry.genre.as_str()).collect();
        assert_eq!(order, vec!["Racing", "Sports"]);
    }

    #[test]
    fn empty_genre_strings_are_ignored() {
        let games = vec![game(5.0, &["", "Indie"])];
        let stats = price_stats_by_genre(&GameCatalog::from_games(games)).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].genre, "Indie");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = price_stats_by_genre(&GameCatalog::new()).unwrap_err();
        assert!(matches!(err, CatalogError::NoData));
    }
}
