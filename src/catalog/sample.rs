//! Seeded subsampling of a catalog back into a CSV file.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::catalog::error::CatalogError;
use crate::catalog::game::ID_COLUMN;
use crate::catalog::store::GameCatalog;

/// Outcome summary of a subsample write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    pub source_path: String,
    pub output_path: String,
    /// Size as asked for, before clamping.
    pub requested: usize,
    /// Size actually drawn.
    pub sample_size: usize,
    pub rows_written: usize,
}

/// Draws `size` games uniformly without replacement, seeded, and writes the
/// matching rows of the source file to `output_path`.
///
/// Rows are copied from the source file rather than rebuilt from the parsed
/// records, so columns the catalog does not model survive unchanged, as does
/// the header. Output keeps source row order, not draw order. Unlike loading,
/// any read or write failure here is fatal for the call.
pub fn sample_to_csv(
    catalog: &GameCatalog,
    size: usize,
    output_path: &str,
    seed: u64,
) -> Result<SampleReport, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::NoData);
    }
    let Some(source_path) = catalog.source_path() else {
        return Err(CatalogError::MissingSource);
    };

    let sample_size = size.min(catalog.len());
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sampled_ids: HashSet<&str> = catalog
        .games()
        .choose_multiple(&mut rng, sample_size)
        .map(|game| game.app_id.as_str())
        .collect();

    let read_err = |err: csv::Error| CatalogError::Read {
        path: source_path.to_string(),
        source: err,
    };
    let write_err = |err: csv::Error| CatalogError::Write {
        path: output_path.to_string(),
        source: err,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(source_path)
        .map_err(read_err)?;
    let headers = reader.headers().map_err(read_err)?.clone();
    let Some(id_index) = headers.iter().position(|header| header == ID_COLUMN) else {
        return Err(CatalogError::MissingColumn {
            path: source_path.to_string(),
            column: ID_COLUMN.to_string(),
        });
    };

    let mut writer = csv::Writer::from_path(output_path).map_err(write_err)?;
    writer.write_record(&headers).map_err(write_err)?;

    let mut rows_written = 0usize;
    for row in reader.records() {
        let record = row.map_err(read_err)?;
        let id = record.get(id_index).unwrap_or("");
        if sampled_ids.contains(id) {
            writer.write_record(&record).map_err(write_err)?;
            rows_written += 1;
        }
    }
    writer.flush().map_err(|err| write_err(err.into()))?;

    Ok(SampleReport {
        source_path: source_path.to_string(),
        output_path: output_path.to_string(),
        requested: size,
        sample_size,
        rows_written,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::catalog::game::Game;

    #[test]
    fn empty_catalogs_cannot_be_sampled() {
        let err = sample_to_csv(&GameCatalog::new(), 5, "unused.csv", 7).unwrap_err();
        assert!(matches!(err, CatalogError::NoData));
    }

    #[test]
    fn in_memory_catalogs_have_no_source_to_resample() {
        let game = Game::from_fields(&HashMap::new()).unwrap();
        let catalog = GameCatalog::from_games(vec![game]);
        let err = sample_to_csv(&catalog, 1, "unused.csv", 7).unwrap_err();
        assert!(matches!(err, CatalogError::MissingSource));
    }
}
