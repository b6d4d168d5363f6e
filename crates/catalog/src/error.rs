use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate term id across catalog: {0}")]
    DuplicateId(String),

    #[error("Catalog definition has no categories")]
    Empty,
}
