//! Product catalog: creating products from localized commands
//!
//! An `AddProductCommand` is validated into a `NewProduct` value object
//! before anything is written. Persistence goes through the
//! `ProductRepository` and `CategoryRepository` traits.

mod command;
mod error;
mod handler;
mod repository;

pub use command::{AddProductCommand, CategoryId, LangId, NewProduct, ProductId, ProductType, MAX_NAME_LENGTH};
pub use error::{ProductConstraintError, ProductError, StoreError};
pub use handler::AddProductHandler;
pub use repository::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository, ProductRepository, StoredProduct,
};
