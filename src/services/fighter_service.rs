//! Domain service for the fighter roster.
//!
//! The trait is the only persistence surface the HTTP layer sees; handlers
//! never reach into the [`Store`](crate::db::Store) directly.

use crate::models::fighter::{Fighter, FighterPatch, NewFighter};
use thiserror::Error;

/// Domain errors for fighter operations.
#[derive(Debug, Error)]
pub enum FighterError {
    #[error("Fighter {0} not found")]
    NotFound(i32),

    #[error("Invalid fighter data: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for FighterError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for FighterError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// CRUD operations over fighter records.
///
/// # Examples
///
/// ```rust,ignore
/// use fighterdb::models::fighter::NewFighter;
/// use fighterdb::services::{FighterError, FighterService};
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn FighterService>) -> Result<(), FighterError> {
///     let id = service.create(NewFighter::new("RYU", "Japan")).await?;
///     let ryu = service.get(id).await?;
///     assert_eq!(ryu.name, "RYU");
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait FighterService: Send + Sync {
    /// Stores a new fighter and returns its freshly assigned id.
    ///
    /// # Errors
    ///
    /// - Returns [`FighterError::Validation`] if `name` or `origin` is blank
    /// - Returns [`FighterError::Database`] on storage failures
    async fn create(&self, fighter: NewFighter) -> Result<i32, FighterError>;

    /// Stores a batch of fighters. The batch is all-or-nothing: every item is
    /// validated before the first write, and the writes share one transaction.
    ///
    /// # Errors
    ///
    /// - Returns [`FighterError::Validation`] naming the first invalid item
    /// - Returns [`FighterError::Database`] on storage failures
    async fn create_many(&self, fighters: Vec<NewFighter>) -> Result<Vec<i32>, FighterError>;

    /// # Errors
    ///
    /// Returns [`FighterError::NotFound`] if no fighter has this id.
    async fn get(&self, id: i32) -> Result<Fighter, FighterError>;

    /// Every fighter, in insertion (id) order.
    async fn list(&self) -> Result<Vec<Fighter>, FighterError>;

    /// Overwrites the supplied fields and returns the updated record.
    ///
    /// # Errors
    ///
    /// - Returns [`FighterError::NotFound`] if no fighter has this id
    /// - Returns [`FighterError::Validation`] if a supplied `name` or `origin` is blank
    async fn update(&self, id: i32, patch: FighterPatch) -> Result<Fighter, FighterError>;

    /// # Errors
    ///
    /// Returns [`FighterError::NotFound`] if no fighter has this id.
    async fn delete(&self, id: i32) -> Result<(), FighterError>;

    async fn count(&self) -> Result<u64, FighterError>;
}

pub(crate) fn validate_new_fighter(fighter: &NewFighter) -> Result<(), FighterError> {
    if fighter.name.trim().is_empty() {
        return Err(FighterError::Validation("name is required".to_string()));
    }
    if fighter.origin.trim().is_empty() {
        return Err(FighterError::Validation("origin is required".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_patch(patch: &FighterPatch) -> Result<(), FighterError> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(FighterError::Validation("name cannot be empty".to_string()));
    }
    if patch.origin.as_deref().is_some_and(|o| o.trim().is_empty()) {
        return Err(FighterError::Validation(
            "origin cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_or_origin_is_rejected() {
        assert!(validate_new_fighter(&NewFighter::new("RYU", "Japan")).is_ok());
        assert!(matches!(
            validate_new_fighter(&NewFighter::new("  ", "Japan")),
            Err(FighterError::Validation(_))
        ));
        assert!(matches!(
            validate_new_fighter(&NewFighter::new("RYU", "")),
            Err(FighterError::Validation(_))
        ));
    }

    #[test]
    fn patch_may_clear_special_move_but_not_name() {
        let patch = FighterPatch {
            special_move: Some(Some(String::new())),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_ok());

        let patch = FighterPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn fighter_error_display() {
        assert_eq!(FighterError::NotFound(7).to_string(), "Fighter 7 not found");

        let err: FighterError = sea_orm::DbErr::Custom("disk full".to_string()).into();
        assert!(matches!(err, FighterError::Database(_)));
    }
}
