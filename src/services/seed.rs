//! Default roster loaded before the server starts taking requests.

use crate::models::fighter::NewFighter;
use crate::services::fighter_service::{FighterError, FighterService};
use tracing::info;

/// `(name, origin, special_move)` for each default fighter, in insertion order.
pub const DEFAULT_ROSTER: [(&str, &str, &str); 6] = [
    ("RYU", "Japan", "Hadouken"),
    ("KEN", "USA", "Shoryuken"),
    ("CHUN-LI", "China", "Spinning Bird Kick"),
    ("JURI", "South Korea", "Feng Shui Engine"),
    ("ZEKU", "Japan", "Bushin Gram Koku"),
    ("JAMIE", "Hong Kong", "Freeflow Strikes"),
];

#[must_use]
pub fn default_roster() -> Vec<NewFighter> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, origin, special_move)| {
            NewFighter::new(*name, *origin).with_special_move(*special_move)
        })
        .collect()
}

/// Inserts the default roster one fighter at a time through
/// [`FighterService::create`]. Returns how many fighters were added.
///
/// With `skip_if_populated` set, a store that already holds fighters is left alone.
pub async fn seed_fighters(
    service: &dyn FighterService,
    skip_if_populated: bool,
) -> Result<usize, FighterError> {
    if skip_if_populated {
        let existing = service.count().await?;
        if existing > 0 {
            info!("Skipping seed, {} fighters already stored", existing);
            return Ok(0);
        }
    }

    let roster = default_roster();
    let total = roster.len();
    for fighter in roster {
        service.create(fighter).await?;
    }

    info!("Seeded {} fighters", total);
    Ok(total)
}
