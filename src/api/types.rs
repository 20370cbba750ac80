use serde::Serialize;

use crate::models::fighter::Fighter;

/// Public projection of a fighter. `special_move` is stored but never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FighterDto {
    pub id: i32,
    pub name: String,
    pub origin: String,
}

impl From<Fighter> for FighterDto {
    fn from(fighter: Fighter) -> Self {
        Self {
            id: fighter.id,
            name: fighter.name,
            origin: fighter.origin,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
