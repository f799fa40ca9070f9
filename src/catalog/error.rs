use thiserror::Error;

use crate::catalog::command::LangId;

/// Failure reported by a product or category store
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A product field failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductConstraintError {
    #[error("invalid localized product name for language with id \"{lang_id}\"")]
    InvalidName { lang_id: LangId },
}

#[derive(Error, Debug)]
pub enum ProductError {
    #[error(transparent)]
    Constraint(#[from] ProductConstraintError),

    /// The store declined to create the product without raising an error
    #[error("failed to add new basic product")]
    CreationFailed,

    #[error("error occurred when trying to add new basic product")]
    Store {
        #[source]
        source: StoreError,
    },
}

impl ProductError {
    pub(crate) fn store(source: StoreError) -> Self {
        ProductError::Store { source }
    }
}
