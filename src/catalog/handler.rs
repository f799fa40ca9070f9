use tracing::{info, warn};

use crate::catalog::command::{AddProductCommand, CategoryId, LangId, NewProduct, ProductId};
use crate::catalog::error::ProductError;
use crate::catalog::repository::{CategoryRepository, ProductRepository};

/// Creates basic products: validate, write, then attach the default category
pub struct AddProductHandler<P, C> {
    products: P,
    categories: C,
    default_lang_id: LangId,
    default_category_id: CategoryId,
}

impl<P: ProductRepository, C: CategoryRepository> AddProductHandler<P, C> {
    pub fn new(products: P, categories: C, default_lang_id: LangId, default_category_id: CategoryId) -> Self {
        Self {
            products,
            categories,
            default_lang_id,
            default_category_id,
        }
    }

    pub fn products(&self) -> &P {
        &self.products
    }

    /// Create the product described by `command`
    ///
    /// Name validation runs before any store access, so a rejected command
    /// leaves the store untouched.
    pub fn handle(&self, command: AddProductCommand) -> Result<ProductId, ProductError> {
        command.validate()?;
        let link_rewrite = self
            .categories
            .link_rewrite(self.default_category_id, self.default_lang_id)
            .map_err(ProductError::store)?;
        let product = NewProduct::from_command(command, self.default_category_id, link_rewrite)?;

        let product_id = self
            .products
            .create(&product)
            .map_err(|source| {
                warn!(error = %source, "product store failed on create");
                ProductError::store(source)
            })?
            .ok_or(ProductError::CreationFailed)?;

        self.products
            .assign_categories(product_id, &[self.default_category_id])
            .map_err(|source| {
                warn!(%product_id, error = %source, "failed to assign default category");
                ProductError::store(source)
            })?;

        info!(%product_id, category_id = %self.default_category_id, "added product");
        Ok(product_id)
    }
}
