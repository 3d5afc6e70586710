//! Static reference data (users, categories, products) and fixture loading.
//!
//! Reference data is loaded once and never mutated. Loading validates the
//! shape of each collection and rejects duplicate identifiers; it does not
//! check foreign keys, which the join reports instead.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use prodcat_core::{CategoryId, Entity, UserId, find_by_id};

use crate::model::{Category, Product, User};

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../fixtures/products.json");

/// One of the three reference collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Categories,
    Products,
}

impl Collection {
    /// File name of the collection inside a data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Categories => "categories.json",
            Collection::Products => "products.json",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Collection::Users => "users",
            Collection::Categories => "categories",
            Collection::Products => "products",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// A fixture file could not be read.
    #[error("failed to read fixture file at '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// A fixture is malformed or missing required fields.
    #[error("invalid {collection} fixture: {message}")]
    Parse {
        collection: Collection,
        message: String,
    },

    /// Two records in one collection share an identifier.
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: Collection, id: u64 },
}

/// The three immutable reference collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl ReferenceData {
    /// Build reference data from already-parsed collections.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::DuplicateId`] if any collection repeats an id.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, FixtureError> {
        ensure_unique(Collection::Users, &users)?;
        ensure_unique(Collection::Categories, &categories)?;
        ensure_unique(Collection::Products, &products)?;

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Parse the three collections from JSON arrays.
    pub fn from_json(
        users: &str,
        categories: &str,
        products: &str,
    ) -> Result<Self, FixtureError> {
        Self::new(
            parse(Collection::Users, users)?,
            parse(Collection::Categories, categories)?,
            parse(Collection::Products, products)?,
        )
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, FixtureError> {
        let users = read(dir, Collection::Users)?;
        let categories = read(dir, Collection::Categories)?;
        let products = read(dir, Collection::Products)?;

        let reference = Self::from_json(&users, &categories, &products)?;
        tracing::info!(
            data_dir = %dir.display(),
            users = reference.users.len(),
            categories = reference.categories.len(),
            products = reference.products.len(),
            "reference data loaded"
        );
        Ok(reference)
    }

    /// The fixtures compiled into the crate.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_USERS, EMBEDDED_CATEGORIES, EMBEDDED_PRODUCTS)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }
}

fn parse<T: DeserializeOwned>(collection: Collection, json: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|e| FixtureError::Parse {
        collection,
        message: e.to_string(),
    })
}

fn read(dir: &Path, collection: Collection) -> Result<String, FixtureError> {
    let path = dir.join(collection.file_name());
    fs::read_to_string(&path).map_err(|e| FixtureError::Io {
        path,
        message: e.to_string(),
    })
}

fn ensure_unique<E>(collection: Collection, entities: &[E]) -> Result<(), FixtureError>
where
    E: Entity,
    E::Id: Into<u64>,
{
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in entities {
        let id = entity.id();
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                collection,
                id: id.into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_load() {
        let reference = ReferenceData::embedded().unwrap();
        assert_eq!(reference.users().len(), 4);
        assert_eq!(reference.categories().len(), 5);
        assert_eq!(reference.products().len(), 12);
        assert_eq!(reference.user(UserId::new(2)).unwrap().name, "Anna");
        assert_eq!(reference.category(CategoryId::new(3)).unwrap().title, "Fruits");
        assert!(reference.category(CategoryId::new(99)).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ReferenceData::from_json(
            r#"[{"id":1,"name":"A","sex":"m"},{"id":1,"name":"B","sex":"f"}]"#,
            "[]",
            "[]",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FixtureError::DuplicateId {
                collection: Collection::Users,
                id: 1
            }
        );
    }

    #[test]
    fn rejects_malformed_collections() {
        let err = ReferenceData::from_json("[]", r#"[{"id":1,"title":"x"}]"#, "[]").unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                collection: Collection::Categories,
                ..
            }
        ));

        let err = ReferenceData::from_json("[]", "[]", "{").unwrap_err();
        assert!(err.to_string().starts_with("invalid products fixture"));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = ReferenceData::from_dir(Path::new("/definitely/not/here")).unwrap_err();
        match err {
            FixtureError::Io { path, .. } => assert!(path.ends_with("users.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dangling_keys_are_not_a_load_error() {
        let reference = ReferenceData::from_json(
            "[]",
            r#"[{"id":1,"title":"Dairy","icon":"🥛","ownerId":9}]"#,
            r#"[{"id":1,"name":"Milk","categoryId":5}]"#,
        );
        assert!(reference.is_ok());
    }
}
