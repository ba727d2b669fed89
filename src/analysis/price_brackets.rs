use std::fmt;

use serde::Serialize;

use crate::catalog::{CatalogError, Game, GameCatalog};

/// The five price bands a listing can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBracket {
    #[serde(rename = "Free")]
    Free,
    #[serde(rename = "Up to $10")]
    UpToTen,
    #[serde(rename = "$10 - $30")]
    TenToThirty,
    #[serde(rename = "$30 - $60")]
    ThirtyToSixty,
    #[serde(rename = "Over $60")]
    OverSixty,
}

/// All brackets, cheapest first. Distribution output follows this order.
pub const BRACKETS: [PriceBracket; 5] = [
    PriceBracket::Free,
    PriceBracket::UpToTen,
    PriceBracket::TenToThirty,
    PriceBracket::ThirtyToSixty,
    PriceBracket::OverSixty,
];

impl PriceBracket {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::UpToTen => "Up to $10",
            Self::TenToThirty => "$10 - $30",
            Self::ThirtyToSixty => "$30 - $60",
            Self::OverSixty => "Over $60",
        }
    }

    /// Bracket for one listing: the free flag wins outright, then the numeric
    /// ranges are tried in ascending order, first match taken. A price no
    /// range covers (negative, NaN) gets None and is left out of the
    /// distribution.
    pub fn for_game(game: &Game) -> Option<PriceBracket> {
        if game.is_free {
            return Some(Self::Free);
        }
        let price = game.price;
        if price > 0.0 && price <= 10.0 {
            Some(Self::UpToTen)
        } else if price > 10.0 && price <= 30.0 {
            Some(Self::TenToThirty)
        } else if price > 30.0 && price <= 60.0 {
            Some(Self::ThirtyToSixty)
        } else if price > 60.0 {
            Some(Self::OverSixty)
        } else {
            None
        }
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many bracket members carry a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub games: usize,
}

/// Genre tallies for one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketGenres {
    pub bracket: PriceBracket,
    pub genres: Vec<GenreCount>,
}

/// Genre distribution per price bracket. Every bracket appears, cheapest
/// first, even when nothing landed in it. Within a bracket genres come in
/// descending count, first-seen order breaking ties.
pub fn genres_by_price_bracket(catalog: &GameCatalog) -> Result<Vec<BracketGenres>, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::NoData);
    }

    let mut tallies: Vec<Vec<GenreCount>> = vec![Vec::new(); BRACKETS.len()];
    for game in catalog.games() {
        let Some(bracket) = PriceBracket::for_game(game) else {
            continue;
        };
        let slot = &mut tallies[bracket as usize];
        for genre in &game.genres {
            if genre.is_empty() {
                continue;
            }
            match slot.iter_mut().find(|entry| entry.genre == *genre) {
                Some(entry) => entry.games += 1,
                None => slot.push(GenreCount {
                    genre: genre.clone(),
                    games: 1,
                }),
            }
        }
    }

    let mut distribution = Vec::with_capacity(BRACKETS.len());
    for (bracket, mut genres) in BRACKETS.into_iter().zip(tallies) {
        // Stable sort keeps first-seen order among equal counts.
        genres.sort_by(|a, b| b.games.cmp(&a.games));
        distribution.push(BracketGenres { bracket, genres });
    }
    Ok(distribution)
}
