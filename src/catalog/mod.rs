//! Listing records, the catalog container, and seeded subsampling.

pub mod error;
pub mod game;
pub mod sample;
pub mod store;

pub use error::CatalogError;
pub use game::{Game, ID_COLUMN};
pub use sample::{sample_to_csv, SampleReport};
pub use store::GameCatalog;
