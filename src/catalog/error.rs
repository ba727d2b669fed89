use std::fmt;

/// Failure cases for catalog loading, the aggregate queries and subsampling.
#[derive(Debug)]
pub enum CatalogError {
    Read { path: String, source: csv::Error },
    Write { path: String, source: csv::Error },
    Record { name: String, reason: String },
    Empty { path: String },
    NoData,
    NoReleaseYears,
    MissingColumn { path: String, column: String },
    MissingSource,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read '{path}': {source}"),
            Self::Write { path, source } => write!(f, "failed to write '{path}': {source}"),
            Self::Record { name, reason } => write!(f, "bad record '{name}': {reason}"),
            Self::Empty { path } => write!(f, "no usable records in '{path}'"),
            Self::NoData => write!(f, "catalog holds no games"),
            Self::NoReleaseYears => write!(f, "no game has a resolvable release year"),
            Self::MissingColumn { path, column } => {
                write!(f, "'{path}' has no '{column}' column")
            }
            Self::MissingSource => write!(f, "catalog has no source file to sample from"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_record() {
        let err = CatalogError::Record {
            name: "Broken Game".to_string(),
            reason: "price 'abc' is not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad record 'Broken Game': price 'abc' is not a number"
        );
    }

    #[test]
    fn display_covers_the_stateless_variants() {
        assert_eq!(CatalogError::NoData.to_string(), "catalog holds no games");
        assert_eq!(
            CatalogError::MissingSource.to_string(),
            "catalog has no source file to sample from"
        );
    }
}
