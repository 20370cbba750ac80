use serde::{Deserialize, Deserializer, Serialize};

/// A stored fighter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: i32,
    pub name: String,
    pub origin: String,
    pub special_move: Option<String>,
}

/// Fields for a fighter that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFighter {
    pub name: String,
    pub origin: String,
    #[serde(default)]
    pub special_move: Option<String>,
}

impl NewFighter {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            special_move: None,
        }
    }

    #[must_use]
    pub fn with_special_move(mut self, special_move: impl Into<String>) -> Self {
        self.special_move = Some(special_move.into());
        self
    }
}

/// Field-level update. `None` leaves the stored value untouched.
///
/// `special_move` tells an absent key (`None`) apart from an explicit
/// `null` (`Some(None)`), which clears the stored move. A `null` `name` or
/// `origin` counts as absent since both columns are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub special_move: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl FighterPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.origin.is_none() && self.special_move.is_none()
    }
}
