//! Errors raised while parsing or constructing fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid block hash {value:?}: expected \"0\" or 64 lowercase hex characters")]
    InvalidBlockHash { value: String },
}
