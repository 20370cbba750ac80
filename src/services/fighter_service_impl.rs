//! `SeaORM` implementation of the `FighterService` trait.

use crate::db::Store;
use crate::models::fighter::{Fighter, FighterPatch, NewFighter};
use crate::services::fighter_service::{
    FighterError, FighterService, validate_new_fighter, validate_patch,
};
use async_trait::async_trait;

pub struct SeaOrmFighterService {
    store: Store,
}

impl SeaOrmFighterService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FighterService for SeaOrmFighterService {
    async fn create(&self, fighter: NewFighter) -> Result<i32, FighterError> {
        validate_new_fighter(&fighter)?;
        Ok(self.store.add_fighter(&fighter).await?)
    }

    async fn create_many(&self, fighters: Vec<NewFighter>) -> Result<Vec<i32>, FighterError> {
        for (index, fighter) in fighters.iter().enumerate() {
            validate_new_fighter(fighter).map_err(|e| match e {
                FighterError::Validation(msg) => {
                    FighterError::Validation(format!("item {index}: {msg}"))
                }
                other => other,
            })?;
        }

        if fighters.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.store.add_fighters(&fighters).await?)
    }

    async fn get(&self, id: i32) -> Result<Fighter, FighterError> {
        self.store
            .get_fighter(id)
            .await?
            .ok_or(FighterError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Fighter>, FighterError> {
        Ok(self.store.list_fighters().await?)
    }

    async fn update(&self, id: i32, patch: FighterPatch) -> Result<Fighter, FighterError> {
        if let Err(e) = validate_patch(&patch) {
            // An unknown id is reported ahead of an invalid patch.
            self.get(id).await?;
            return Err(e);
        }

        self.store
            .update_fighter(id, &patch)
            .await?
            .ok_or(FighterError::NotFound(id))
    }

    async fn delete(&self, id: i32) -> Result<(), FighterError> {
        if self.store.remove_fighter(id).await? {
            Ok(())
        } else {
            Err(FighterError::NotFound(id))
        }
    }

    async fn count(&self) -> Result<u64, FighterError> {
        Ok(self.store.count_fighters().await?)
    }
}
