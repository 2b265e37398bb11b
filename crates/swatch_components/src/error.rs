use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("items must have unique ids, duplicated id: {0}")]
    DuplicateId(String),

    #[error("array of items must contain at least one item")]
    EmptyItems,
}
