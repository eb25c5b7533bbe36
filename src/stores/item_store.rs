use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::{ItemInput, PageWindow};

/// ItemStore owns the persisted item rows
///
/// Every method runs on the connection or transaction handed in by the caller;
/// the store never opens, commits or keeps one itself.
#[derive(Debug, Default)]
pub struct ItemStore {}

impl ItemStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Insert a new item
    ///
    /// The id comes from the table's autoincrement sequence and `created_at`
    /// is stamped here, both as part of the same insert.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored row, including its assigned id
    /// * `Err(InternalError)` - Database error
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        input: ItemInput,
    ) -> Result<item::Model, InternalError> {
        let new_item = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(Utc::now().timestamp_millis()),
        };

        let model = new_item
            .insert(conn)
            .await
            .map_err(|e| InternalError::store("create_item", e))?;

        tracing::debug!("Created item {}", model.id);

        Ok(model)
    }

    /// List items in creation order
    ///
    /// Ids are handed out in increasing order, so ordering by id is ordering by
    /// creation. Skipping past the end yields an empty list.
    ///
    /// # Returns
    /// * `Ok(Vec<Model>)` - At most `window.limit` rows after the first `window.skip`
    /// * `Err(InternalError)` - Database error
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        window: PageWindow,
    ) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .offset(window.skip)
            .limit(window.limit)
            .all(conn)
            .await
            .map_err(|e| InternalError::store("list_items", e))
    }

    /// Look up a single item
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - Item exists
    /// * `Ok(None)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::store("get_item", e))
    }

    /// Overwrite name and description of an existing item
    ///
    /// Issued as one conditional UPDATE, so a row removed by a concurrent
    /// delete is reported as absent rather than resurrected.
    /// `id` and `created_at` are never part of the update.
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The item after the update
    /// * `Ok(None)` - No item with this id; nothing was written
    /// * `Err(InternalError)` - Database error
    pub async fn replace(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        input: ItemInput,
    ) -> Result<Option<item::Model>, InternalError> {
        let result = Item::update_many()
            .col_expr(item::Column::Name, Expr::value(input.name))
            .col_expr(item::Column::Description, Expr::value(input.description))
            .filter(item::Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::store("replace_item", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get(conn, id).await
    }

    /// Remove an item
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The row as it was right before removal
    /// * `Ok(None)` - No item with this id (or another writer removed it first)
    /// * `Err(InternalError)` - Database error
    pub async fn delete(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<item::Model>, InternalError> {
        let Some(snapshot) = self.get(conn, id).await? else {
            return Ok(None);
        };

        let result = Item::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::store("delete_item", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::debug!("Deleted item {}", id);

        Ok(Some(snapshot))
    }

    /// Count stored items
    pub async fn count(&self, conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
        Item::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::store("count_items", e))
    }
}
