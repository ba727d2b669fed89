use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::{CatalogError, GameCatalog};

/// Year(s) holding the highest release tally. Serializes as a bare year when
/// single and as a list when tied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PeakYears {
    Single(i32),
    Tied(Vec<i32>),
}

impl fmt::Display for PeakYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(year) => write!(f, "{year}"),
            Self::Tied(years) => {
                let rendered: Vec<String> = years.iter().map(|year| year.to_string()).collect();
                write!(f, "{}", rendered.join(", "))
            }
        }
    }
}

/// Peak of the release-year histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleasePeak {
    pub years: PeakYears,
    /// Release count shared by every peak year.
    pub releases: usize,
}

/// Year with the most releases, or the tied years sorted ascending. Games
/// without a resolvable year stay out of the histogram entirely, so a catalog
/// of undated games is an error rather than a peak of zero.
pub fn peak_release_years(catalog: &GameCatalog) -> Result<ReleasePeak, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::NoData);
    }

    let mut tallies: HashMap<i32, usize> = HashMap::new();
    for game in catalog.games() {
        if let Some(year) = game.release_year() {
            *tallies.entry(year).or_insert(0) += 1;
        }
    }
    let Some(&max_tally) = tallies.values().max() else {
        return Err(CatalogError::NoReleaseYears);
    };

    let mut peak_years: Vec<i32> = tallies
        .iter()
        .filter(|(_, &tally)| tally == max_tally)
        .map(|(&year, _)| year)
        .collect();
    peak_years.sort_unstable();

    let years = if peak_years.len() == 1 {
        PeakYears::Single(peak_years[0])
    } else {
        PeakYears::Tied(peak_years)
    };
    Ok(ReleasePeak {
        years,
        releases: max_tally,
    })
}
