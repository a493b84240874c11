//! Generic table access shared by every concrete repository.
//!
//! `Table<E>` knows how to read, insert, save and delete one entity type.
//! The scoping wrappers in `user_scoped` and `owner_scoped` build on the
//! crate-internal helpers here. Every write runs in its own transaction;
//! an error inside the closure drops the transaction, which rolls it back.

use std::marker::PhantomData;

use rusqlite::{Connection as SqliteConnection, Row};
use tokio_rusqlite::Connection;

use pinfluencer_core::storage::{RepositoryError, Result};

use super::error::{map_tokio_rusqlite_error_with_id, wrap_err};
use super::schema;

/// A storage record bound to one table.
pub trait Entity: Sized + Send + 'static {
    /// Domain model this entity maps to.
    type Model: Send + 'static;

    /// Name used in `NotFound` / `AlreadyExists` errors.
    const ENTITY_TYPE: &'static str;
    const TABLE: &'static str;
    /// Column list, in the order `from_row` reads.
    const COLUMNS: &'static str;

    fn id(&self) -> &str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Inserts this entity as a new row.
    fn insert(&self, conn: &SqliteConnection) -> rusqlite::Result<usize>;

    /// Overwrites the editable columns of the row with this entity's id.
    /// Image columns are left alone; only `Table::set_image` writes them.
    fn update(&self, conn: &SqliteConnection) -> rusqlite::Result<usize>;

    fn into_model(self) -> Result<Self::Model>;

    fn from_model(model: &Self::Model) -> Result<Self>;
}

/// An entity owned by exactly one auth identity.
pub trait UserEntity: Entity {
    fn set_auth_user_id(&mut self, auth_user_id: String);
}

/// An entity owned by a brand row.
pub trait OwnedEntity: Entity {
    /// Column holding the owning brand's id.
    const OWNER_COLUMN: &'static str;

    fn owner_id(&self) -> &str;

    fn set_owner_id(&mut self, owner_id: String);
}

/// Selects the column an uploaded image key is written to.
pub trait ImageField: Copy + Send + 'static {
    fn column(self) -> &'static str;
}

/// Read and write access to the table of one entity type.
pub struct Table<E> {
    conn: Connection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Table<E> {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// Lists every row, mapped to models, in insertion order.
    pub async fn load_collection(&self) -> Result<Vec<E::Model>> {
        let sql = schema::select_all(E::TABLE, E::COLUMNS);

        let entities = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt.query_map([], |row| E::from_row(row)).map_err(wrap_err)?;

                let mut entities = Vec::new();
                for row_result in rows {
                    entities.push(row_result.map_err(wrap_err)?);
                }
                Ok(entities)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, "*"))?;

        entities.into_iter().map(E::into_model).collect()
    }

    /// Gets a row by id. Fails with `NotFound` when absent.
    pub async fn load_by_id(&self, id: &str) -> Result<E::Model> {
        self.find_one("id", id).await?.into_model()
    }

    /// Finds the first row whose `column` equals `value`.
    pub(crate) async fn find_one(&self, column: &'static str, value: &str) -> Result<E> {
        let sql = schema::select_where(E::TABLE, E::COLUMNS, column);
        let value = value.to_string();
        let lookup = value.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                stmt.query_row([&lookup], |row| E::from_row(row))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, value))
    }

    /// Finds every row whose `column` equals `value`, in insertion order.
    pub(crate) async fn find_all(&self, column: &'static str, value: &str) -> Result<Vec<E>> {
        let sql = schema::select_where(E::TABLE, E::COLUMNS, column);
        let value = value.to_string();
        let lookup = value.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&lookup], |row| E::from_row(row))
                    .map_err(wrap_err)?;

                let mut entities = Vec::new();
                for row_result in rows {
                    entities.push(row_result.map_err(wrap_err)?);
                }
                Ok(entities)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, value))
    }

    /// Inserts `entity` in a transaction and returns it.
    pub(crate) async fn insert(&self, entity: E) -> Result<E> {
        let id = entity.id().to_string();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                entity.insert(&tx).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(entity)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, id))
    }

    /// Overwrites the editable columns of `entity`'s row in a transaction and
    /// returns the row as committed, image columns included.
    pub(crate) async fn save(&self, entity: E) -> Result<E> {
        let id = entity.id().to_string();
        let row_id = id.clone();
        let select = schema::select_where(E::TABLE, E::COLUMNS, "id");

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = entity.update(&tx).map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                let saved = tx
                    .query_row(&select, [&row_id], |row| E::from_row(row))
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(saved)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, id))
    }

    /// Writes `value` to a single image column of row `id` in a transaction.
    pub(crate) async fn set_image<F: ImageField>(
        &self,
        id: &str,
        field: F,
        value: String,
    ) -> Result<()> {
        let sql = schema::update_column(E::TABLE, field.column());
        let id = id.to_string();
        let row_id = id.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(&sql, rusqlite::params![row_id, value])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, id))
    }

    /// Deletes row `id` in a transaction.
    pub(crate) async fn delete(&self, id: &str) -> Result<()> {
        let sql = schema::delete_by_id(E::TABLE);
        let id = id.to_string();
        let row_id = id.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx.execute(&sql, [&row_id]).map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::ENTITY_TYPE, id))
    }
}

/// Builds the error reported when an entity is absent for the caller.
pub(crate) fn not_found<E: Entity>(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: E::ENTITY_TYPE,
        id: id.to_string(),
    }
}
