use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::catalog::command::{CategoryId, LangId, NewProduct, ProductId};
use crate::catalog::error::StoreError;

/// Write side of the product store
pub trait ProductRepository: Send + Sync {
    /// Persist a new product; `Ok(None)` means the store refused it
    fn create(&self, product: &NewProduct) -> Result<Option<ProductId>, StoreError>;

    /// Replace the categories a product belongs to
    fn assign_categories(&self, product_id: ProductId, category_ids: &[CategoryId]) -> Result<(), StoreError>;
}

/// Read access to category URL slugs
pub trait CategoryRepository: Send + Sync {
    fn link_rewrite(&self, category_id: CategoryId, lang_id: LangId) -> Result<String, StoreError>;
}

/// A product as held by `InMemoryProductRepository`
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProduct {
    pub id: ProductId,
    pub product: NewProduct,
    pub category_ids: Vec<CategoryId>,
    pub date_add: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct ProductTable {
    last_id: u64,
    products: BTreeMap<ProductId, StoredProduct>,
}

/// Product store kept in memory, ids assigned sequentially from 1
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: Mutex<ProductTable>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product_id: ProductId) -> Option<StoredProduct> {
        self.table.lock().products.get(&product_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().products.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn create(&self, product: &NewProduct) -> Result<Option<ProductId>, StoreError> {
        let mut table = self.table.lock();
        table.last_id += 1;
        let id = ProductId::new(table.last_id);
        table.products.insert(
            id,
            StoredProduct {
                id,
                product: product.clone(),
                category_ids: Vec::new(),
                date_add: Utc::now(),
            },
        );
        Ok(Some(id))
    }

    fn assign_categories(&self, product_id: ProductId, category_ids: &[CategoryId]) -> Result<(), StoreError> {
        let mut table = self.table.lock();
        let stored = table
            .products
            .get_mut(&product_id)
            .ok_or_else(|| format!("product {product_id} does not exist"))?;
        stored.category_ids = category_ids.to_vec();
        Ok(())
    }
}

/// Category slugs kept in memory
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    link_rewrites: HashMap<(CategoryId, LangId), String>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_rewrite(mut self, category_id: CategoryId, lang_id: LangId, slug: impl Into<String>) -> Self {
        self.link_rewrites.insert((category_id, lang_id), slug.into());
        self
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn link_rewrite(&self, category_id: CategoryId, lang_id: LangId) -> Result<String, StoreError> {
        self.link_rewrites
            .get(&(category_id, lang_id))
            .cloned()
            .ok_or_else(|| format!("category {category_id} has no link rewrite for language {lang_id}").into())
    }
}
