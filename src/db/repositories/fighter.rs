use crate::entities::{fighter, prelude::*};
use crate::models::fighter::{Fighter as FighterRecord, FighterPatch, NewFighter};
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

/// Repository for fighter table operations
pub struct FighterRepository {
    conn: DatabaseConnection,
}

impl FighterRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: fighter::Model) -> FighterRecord {
        FighterRecord {
            id: m.id,
            name: m.name,
            origin: m.origin,
            special_move: m.special_move,
        }
    }

    fn active_model(input: &NewFighter) -> fighter::ActiveModel {
        fighter::ActiveModel {
            name: Set(input.name.clone()),
            origin: Set(input.origin.clone()),
            special_move: Set(input.special_move.clone()),
            ..Default::default()
        }
    }

    async fn insert_on<C: ConnectionTrait>(conn: &C, input: &NewFighter) -> Result<i32> {
        let res = Fighter::insert(Self::active_model(input)).exec(conn).await?;
        Ok(res.last_insert_id)
    }

    pub async fn insert(&self, input: &NewFighter) -> Result<i32> {
        let id = Self::insert_on(&self.conn, input).await?;
        info!("Added fighter {} ({}) with id {}", input.name, input.origin, id);
        Ok(id)
    }

    /// Inserts every fighter inside one transaction; either all rows land or none do.
    pub async fn insert_many(&self, inputs: &[NewFighter]) -> Result<Vec<i32>> {
        let txn = self.conn.begin().await?;

        let mut ids = Vec::with_capacity(inputs.len());
        for input in inputs {
            ids.push(Self::insert_on(&txn, input).await?);
        }

        txn.commit().await?;
        info!("Added {} fighters", ids.len());
        Ok(ids)
    }

    pub async fn get(&self, id: i32) -> Result<Option<FighterRecord>> {
        let result = Fighter::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_model))
    }

    pub async fn list_all(&self) -> Result<Vec<FighterRecord>> {
        let rows = Fighter::find()
            .order_by_asc(fighter::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Overwrites only the columns present in `patch` and returns the row as
    /// it stands after the write. `None` when no fighter has this id.
    pub async fn update(&self, id: i32, patch: &FighterPatch) -> Result<Option<FighterRecord>> {
        let txn = self.conn.begin().await?;

        if !patch.is_empty() {
            let mut update = Fighter::update_many().filter(fighter::Column::Id.eq(id));

            if let Some(name) = &patch.name {
                update = update.col_expr(fighter::Column::Name, Expr::value(name.clone()));
            }
            if let Some(origin) = &patch.origin {
                update = update.col_expr(fighter::Column::Origin, Expr::value(origin.clone()));
            }
            if let Some(special_move) = &patch.special_move {
                update = update.col_expr(
                    fighter::Column::SpecialMove,
                    Expr::value(special_move.clone()),
                );
            }

            let result = update.exec(&txn).await?;
            if result.rows_affected == 0 {
                txn.rollback().await?;
                return Ok(None);
            }
        }

        let row = Fighter::find_by_id(id).one(&txn).await?;
        txn.commit().await?;

        if row.is_some() {
            debug!("Updated fighter {}", id);
        }
        Ok(row.map(Self::map_model))
    }

    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = Fighter::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected > 0 {
            info!("Removed fighter {}", id);
        }
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = Fighter::find().count(&self.conn).await?;
        Ok(count)
    }
}
