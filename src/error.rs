//! Frontend Errors

use thiserror::Error;

pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid pokemon data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_wasm_bindgen::Error> for CatalogueError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        CatalogueError::Config(err.to_string())
    }
}
