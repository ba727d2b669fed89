//! Storefront game-listing analytics: load a CSV catalog, report descriptive
//! statistics over it, and write seeded subsamples of it.

pub mod analysis;
pub mod catalog;
pub mod cli;
