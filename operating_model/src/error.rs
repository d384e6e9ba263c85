//! Error types for loading configuration and catalogs.
//!
//! Widget state transitions never fail; errors only arise when reading files
//! or resolving names given on the command line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or resolving operating model data.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate section key `{0}`")]
    DuplicateSection(String),

    #[error("duplicate subsection key `{key}` in section `{section}`")]
    DuplicateSubsection { section: String, key: String },

    #[error("duplicate item id `{0}`")]
    DuplicateItem(String),

    #[error("`{0}` has no items")]
    EmptySection(String),

    #[error("section `{0}` must have either items or subsections, not both or neither")]
    AmbiguousSection(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("unknown subsection `{key}` in section `{section}`")]
    UnknownSubsection { section: String, key: String },

    #[error("unknown item `{0}`")]
    UnknownItem(String),

    #[error("unknown country `{0}` (expected one of: Global, US, UKI, Canada, Iberia, France, Italy, Germany, India, SM, Japan)")]
    UnknownCountry(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
