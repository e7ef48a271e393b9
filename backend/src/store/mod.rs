//! # Catalog Store
//!
//! SQLite persistence for sources and recipes. The store assigns identities,
//! keeps every recipe pointing at an existing source and refuses entities
//! that fail validation.
//!
//! ## Schema
//! - `sources(id, name, has_page_numbers)`
//! - `recipes(id, name, source_id -> sources.id, page_number, preparation_time)`
//!
//! Foreign keys are enforced by SQLite (`PRAGMA foreign_keys = ON`) and a
//! source cannot be deleted while recipes still reference it.

mod error;

pub use error::StoreError;

use common::model::recipe::Recipe;
use common::model::source::Source;
use common::validation::{validate, Validate};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;

pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS sources (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    name             TEXT    NOT NULL,
    has_page_numbers INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS recipes (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    name             TEXT    NOT NULL,
    source_id        INTEGER NOT NULL REFERENCES sources(id) ON DELETE RESTRICT,
    page_number      INTEGER,
    preparation_time INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS recipes_by_source ON recipes(source_id);
";

const RECIPE_COLUMNS: &str = "id, name, source_id, page_number, preparation_time";

pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Opens (and if needed creates) the database at `location`.
    /// `:memory:` gives a private in-memory database.
    pub fn open(location: &str) -> Result<Self, StoreError> {
        let conn = if location == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(Path::new(location))?
        };
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn insert_source(&self, source: &Source) -> Result<Source, StoreError> {
        reject_invalid("source", source)?;
        let Some(has_page_numbers) = source.has_page_numbers else {
            return Err(StoreError::invalid("source", source));
        };

        self.conn.execute(
            "INSERT INTO sources (name, has_page_numbers) VALUES (?1, ?2)",
            params![source.name, has_page_numbers],
        )?;
        let id = self.last_id()?;
        debug!(source_id = id; "Stored source {:?}", source.name);

        Ok(Source::new(source.name.clone(), has_page_numbers).with_id(id))
    }

    pub fn insert_recipe(&self, recipe: &Recipe) -> Result<Recipe, StoreError> {
        reject_invalid("recipe", recipe)?;
        let (Some(source_id), Some(preparation_time)) = (recipe.source_id, recipe.preparation_time)
        else {
            return Err(StoreError::invalid("recipe", recipe));
        };
        if !self.source_exists(source_id)? {
            return Err(StoreError::SourceNotFound(source_id));
        }

        self.conn.execute(
            "INSERT INTO recipes (name, source_id, page_number, preparation_time)
             VALUES (?1, ?2, ?3, ?4)",
            params![recipe.name, source_id, recipe.page_number, preparation_time],
        )?;
        let id = self.last_id()?;
        debug!(recipe_id = id, source_id = source_id; "Stored recipe {:?}", recipe.name);

        let mut stored = Recipe::new(recipe.name.clone(), source_id, preparation_time).with_id(id);
        stored.page_number = recipe.page_number;
        Ok(stored)
    }

    /// The source with `id`, its `recipe_ids` filled in.
    pub fn source(&self, id: i32) -> Result<Option<Source>, StoreError> {
        let source = self
            .conn
            .query_row(
                "SELECT id, name, has_page_numbers FROM sources WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Source::new(row.get::<_, String>(1)?, row.get(2)?).with_id(row.get(0)?))
                },
            )
            .optional()?;

        let Some(mut source) = source else {
            return Ok(None);
        };

        let mut stmt = self
            .conn
            .prepare("SELECT id FROM recipes WHERE source_id = ?1 ORDER BY id")?;
        source.recipe_ids = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<Result<_, _>>()?;

        Ok(Some(source))
    }

    pub fn recipe(&self, id: i32) -> Result<Option<Recipe>, StoreError> {
        let recipe = self
            .conn
            .query_row(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
                params![id],
                recipe_from_row,
            )
            .optional()?;
        Ok(recipe)
    }

    /// The recipe with `id` and its source attached.
    pub fn recipe_with_source(&self, id: i32) -> Result<Option<Recipe>, StoreError> {
        let Some(recipe) = self.recipe(id)? else {
            return Ok(None);
        };
        let Some(source_id) = recipe.source_id else {
            return Err(StoreError::invalid("recipe", &recipe));
        };
        let source = self
            .source(source_id)?
            .ok_or(StoreError::SourceNotFound(source_id))?;
        Ok(Some(recipe.with_source(Arc::new(source))))
    }

    pub fn recipes_for_source(&self, source_id: i32) -> Result<Vec<Recipe>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE source_id = ?1 ORDER BY id"
        ))?;
        let recipes = stmt
            .query_map(params![source_id], recipe_from_row)?
            .collect::<Result<_, _>>()?;
        Ok(recipes)
    }

    /// Returns whether a recipe was removed.
    pub fn delete_recipe(&self, id: i32) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// Returns whether a source was removed. Fails while recipes still use it.
    pub fn delete_source(&self, id: i32) -> Result<bool, StoreError> {
        let recipes: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM recipes WHERE source_id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        if recipes > 0 {
            return Err(StoreError::SourceInUse {
                id,
                recipes: recipes as usize,
            });
        }

        let removed = self
            .conn
            .execute("DELETE FROM sources WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn source_exists(&self, id: i32) -> Result<bool, StoreError> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM sources WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn last_id(&self) -> Result<i32, StoreError> {
        let rowid = self.conn.last_insert_rowid();
        i32::try_from(rowid).map_err(|_| StoreError::IdOverflow(rowid))
    }
}

fn reject_invalid<T: Validate>(entity: &'static str, value: &T) -> Result<(), StoreError> {
    if validate(value).is_empty() {
        Ok(())
    } else {
        Err(StoreError::invalid(entity, value))
    }
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let name: String = row.get(1)?;
    let mut recipe = Recipe::new(name, row.get(2)?, row.get(4)?).with_id(row.get(0)?);
    recipe.page_number = row.get(3)?;
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_source(has_page_numbers: bool) -> (CatalogStore, Source) {
        let store = CatalogStore::open(IN_MEMORY).unwrap();
        let source = store
            .insert_source(&Source::new("Ice Cream Cookbook", has_page_numbers))
            .unwrap();
        (store, source)
    }

    #[test]
    fn assigns_identities_in_insertion_order() {
        let (store, first) = store_with_source(true);
        let second = store.insert_source(&Source::new("Family", false)).unwrap();
        assert_eq!(first.id(), Some(1));
        assert_eq!(second.id(), Some(2));
    }

    #[test]
    fn round_trips_recipe_fields() {
        let (store, source) = store_with_source(true);
        let draft = Recipe::new("Vanilla", source.id().unwrap(), 60).with_page_number(42);
        let stored = store.insert_recipe(&draft).unwrap();

        let loaded = store.recipe(stored.id().unwrap()).unwrap().unwrap();
        assert_eq!(loaded, stored);
        assert_eq!(loaded.page_number, Some(42));
        assert_eq!(loaded.preparation_time, Some(60));
    }

    #[test]
    fn rejects_invalid_entities_with_their_violations() {
        let store = CatalogStore::open(IN_MEMORY).unwrap();
        let err = store.insert_source(&Source::partial()).unwrap_err();
        match err {
            StoreError::Invalid { entity, violations } => {
                assert_eq!(entity, "source");
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
            }
            other => panic!("unexpected error: {other}"),
        }

        let (store, source) = store_with_source(false);
        let err = store
            .insert_recipe(&Recipe::new("Sorbet", source.id().unwrap(), 0))
            .unwrap_err();
        assert!(err.to_string().contains("preparationTime"));
    }

    #[test]
    fn recipe_without_source_id_is_invalid_not_orphaned() {
        let (store, _) = store_with_source(true);
        let mut recipe = Recipe::partial();
        recipe.name = "Mint".into();
        recipe.preparation_time = Some(5);

        match store.insert_recipe(&recipe).unwrap_err() {
            StoreError::Invalid { entity, violations } => {
                assert_eq!(entity, "recipe");
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "sourceId");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn source_without_page_number_flag_is_invalid() {
        let store = CatalogStore::open(IN_MEMORY).unwrap();
        let mut source = Source::partial();
        source.name = "Blog".into();

        let err = store.insert_source(&source).unwrap_err();
        assert!(err.to_string().contains("hasPageNumbers"));
    }

    #[test]
    fn recipe_must_reference_an_existing_source() {
        let store = CatalogStore::open(IN_MEMORY).unwrap();
        let err = store.insert_recipe(&Recipe::new("Orphan", 99, 10)).unwrap_err();
        assert!(matches!(err, StoreError::SourceNotFound(99)));
    }

    #[test]
    fn source_lists_its_recipes() {
        let (store, source) = store_with_source(true);
        let source_id = source.id().unwrap();
        let a = store.insert_recipe(&Recipe::new("Mint", source_id, 20)).unwrap();
        let b = store.insert_recipe(&Recipe::new("Lemon", source_id, 25)).unwrap();

        let loaded = store.source(source_id).unwrap().unwrap();
        assert_eq!(loaded.recipe_ids, vec![a.id().unwrap(), b.id().unwrap()]);

        let names: Vec<_> = store
            .recipes_for_source(source_id)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Mint", "Lemon"]);
    }

    #[test]
    fn recipe_with_source_attaches_the_stored_source() {
        let (store, source) = store_with_source(true);
        let recipe = store
            .insert_recipe(&Recipe::new("Coffee", source.id().unwrap(), 35))
            .unwrap();

        let loaded = store.recipe_with_source(recipe.id().unwrap()).unwrap().unwrap();
        let attached = loaded.source().unwrap();
        assert_eq!(attached.id(), source.id());
        assert_eq!(attached.name, "Ice Cream Cookbook");
    }

    #[test]
    fn missing_rows_read_as_none() {
        let store = CatalogStore::open(IN_MEMORY).unwrap();
        assert!(store.source(1).unwrap().is_none());
        assert!(store.recipe(1).unwrap().is_none());
        assert!(store.recipe_with_source(1).unwrap().is_none());
        assert!(!store.delete_recipe(1).unwrap());
        assert!(!store.delete_source(1).unwrap());
    }

    #[test]
    fn referenced_source_cannot_be_deleted() {
        let (store, source) = store_with_source(true);
        let source_id = source.id().unwrap();
        let recipe = store.insert_recipe(&Recipe::new("Banana", source_id, 15)).unwrap();

        let err = store.delete_source(source_id).unwrap_err();
        assert!(matches!(err, StoreError::SourceInUse { recipes: 1, .. }));

        assert!(store.delete_recipe(recipe.id().unwrap()).unwrap());
        assert!(store.delete_source(source_id).unwrap());
        assert!(store.source(source_id).unwrap().is_none());
    }

    #[test]
    fn file_database_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.sqlite");
        let location = path.to_str().unwrap();

        let source_id = {
            let store = CatalogStore::open(location).unwrap();
            store
                .insert_source(&Source::new("Website", false))
                .unwrap()
                .id()
                .unwrap()
        };

        let reopened = CatalogStore::open(location).unwrap();
        let source = reopened.source(source_id).unwrap().unwrap();
        assert_eq!(source.name, "Website");
        assert_eq!(source.has_page_numbers, Some(false));
    }
}
