use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("A product with id {0} already exists")]
    DuplicateProduct(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
