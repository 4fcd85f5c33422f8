#[derive(Debug, thiserror::Error)]
pub enum FritError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("bad catalogue: {0}")]
    Catalog(String),

    #[error("bad config: {0}")]
    Config(String),

    #[error("duplicate provider id in catalogue: {0}")]
    DuplicateProvider(String),

    #[error("provider not found: {0} (run `gofritai list` to see known ids)")]
    ProviderNotFound(String),
}

pub type Result<T> = std::result::Result<T, FritError>;
