//! Category catalog: the fixed, read-only mapping from category name to item references.

use std::collections::HashSet;

use super::error::CatalogError;

/// One category and its ordered item references (image paths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Validated catalog. Every category holds the same number of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog, checking that it can drive a game of `max_rounds` rounds.
    pub fn new(categories: Vec<Category>, max_rounds: usize) -> Result<Self, CatalogError> {
        let first = categories.first().ok_or(CatalogError::Empty)?;
        let expected = first.items.len();

        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }
            if !seen.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
            if category.items.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name.clone()));
            }
            if category.items.len() != expected {
                return Err(CatalogError::ItemCountMismatch {
                    name: category.name.clone(),
                    expected,
                    actual: category.items.len(),
                });
            }
        }

        if categories.len() < max_rounds {
            return Err(CatalogError::NotEnoughCategories {
                available: categories.len(),
                required: max_rounds,
            });
        }

        Ok(Self { categories })
    }

    /// The five image categories the game ships with, six items each.
    pub fn builtin() -> Self {
        let category = |name: &str, dir: &str| {
            Category::new(
                name,
                (1..=6).map(|n| format!("/assets/{dir}/{n}.jpg")).collect(),
            )
        };
        Self {
            categories: vec![
                category("fruits", "fruits"),
                category("veggies", "vegetables"),
                category("animals", "animals"),
                category("tools", "tools"),
                category("drinks", "drinks"),
            ],
        }
    }

    /// Re-validate this catalog for a game of `max_rounds` rounds.
    pub fn for_rounds(self, max_rounds: usize) -> Result<Self, CatalogError> {
        Self::new(self.categories, max_rounds)
    }

    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn items(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.items.as_slice())
    }

    /// Number of items in every category, i.e. the length of every round's answer.
    pub fn items_per_category(&self) -> usize {
        self.categories.first().map_or(0, |c| c.items.len())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
