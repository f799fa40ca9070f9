use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::error::ProductConstraintError;

/// Longest accepted localized product name, in characters
pub const MAX_NAME_LENGTH: usize = 128;

/// Characters a catalog name must not contain
const FORBIDDEN_NAME_CHARS: [char; 7] = ['<', '>', ';', '=', '#', '{', '}'];

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn value(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier assigned to a product by the store
    ProductId(u64)
);
id_type!(
    /// Identifier of a catalog language
    LangId(u32)
);
id_type!(
    /// Identifier of a catalog category
    CategoryId(u32)
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductType {
    #[default]
    Standard,
    Pack,
    Virtual,
    Combinations,
}

/// Request to create a basic product
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddProductCommand {
    localized_names: BTreeMap<LangId, String>,
    product_type: ProductType,
}

impl AddProductCommand {
    pub fn new(product_type: ProductType) -> Self {
        Self {
            localized_names: BTreeMap::new(),
            product_type,
        }
    }

    pub fn with_name(mut self, lang_id: LangId, name: impl Into<String>) -> Self {
        self.localized_names.insert(lang_id, name.into());
        self
    }

    pub fn localized_names(&self) -> &BTreeMap<LangId, String> {
        &self.localized_names
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Check every localized name against the catalog name rules
    pub fn validate(&self) -> Result<(), ProductConstraintError> {
        match self.localized_names.iter().find(|(_, name)| !is_catalog_name(name)) {
            Some((lang_id, _)) => Err(ProductConstraintError::InvalidName { lang_id: *lang_id }),
            None => Ok(()),
        }
    }
}

/// A validated product ready to be written
///
/// Only constructed through `NewProduct::from_command`, so every instance
/// carries valid localized names.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    localized_names: BTreeMap<LangId, String>,
    active: bool,
    category_link_rewrite: String,
    default_category_id: CategoryId,
    is_virtual: bool,
}

impl NewProduct {
    /// Validate the command; new products start inactive in the default category
    pub fn from_command(
        command: AddProductCommand,
        default_category_id: CategoryId,
        category_link_rewrite: String,
    ) -> Result<Self, ProductConstraintError> {
        command.validate()?;

        Ok(Self {
            is_virtual: command.product_type == ProductType::Virtual,
            localized_names: command.localized_names,
            active: false,
            category_link_rewrite,
            default_category_id,
        })
    }

    pub fn localized_names(&self) -> &BTreeMap<LangId, String> {
        &self.localized_names
    }

    pub fn name(&self, lang_id: LangId) -> Option<&str> {
        self.localized_names.get(&lang_id).map(String::as_str)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn category_link_rewrite(&self) -> &str {
        &self.category_link_rewrite
    }

    pub fn default_category_id(&self) -> CategoryId {
        self.default_category_id
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }
}

fn is_catalog_name(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_LENGTH && !name.contains(FORBIDDEN_NAME_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(command: AddProductCommand) -> Result<NewProduct, ProductConstraintError> {
        NewProduct::from_command(command, CategoryId::new(2), "home".to_string())
    }

    #[test]
    fn test_valid_command() {
        let command = AddProductCommand::new(ProductType::Virtual)
            .with_name(LangId::new(1), "Gift card")
            .with_name(LangId::new(2), "Carte cadeau");
        let product = validate(command).unwrap();

        assert!(!product.is_active());
        assert!(product.is_virtual());
        assert_eq!(product.name(LangId::new(2)), Some("Carte cadeau"));
        assert_eq!(product.default_category_id(), CategoryId::new(2));
        assert_eq!(product.category_link_rewrite(), "home");
    }

    #[test]
    fn test_names_are_optional() {
        let product = validate(AddProductCommand::new(ProductType::Standard)).unwrap();
        assert!(product.localized_names().is_empty());
        assert!(!product.is_virtual());
    }

    #[test]
    fn test_invalid_name_reports_language() {
        let command = AddProductCommand::new(ProductType::Standard)
            .with_name(LangId::new(1), "Mug")
            .with_name(LangId::new(3), "<script>");
        assert_eq!(
            validate(command),
            Err(ProductConstraintError::InvalidName { lang_id: LangId::new(3) })
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let at_limit = "é".repeat(MAX_NAME_LENGTH);
        assert!(is_catalog_name(&at_limit));
        assert!(!is_catalog_name(&format!("{at_limit}e")));
    }
}
