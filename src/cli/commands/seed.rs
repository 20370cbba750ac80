//! Seed command handler

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmFighterService, seed_fighters};

pub async fn cmd_seed(config: &Config, force: bool) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmFighterService::new(store);

    let skip_if_populated = config.seed.skip_if_populated && !force;
    let added = seed_fighters(&service, skip_if_populated).await?;

    if added == 0 {
        println!("Roster already present, nothing seeded. Use --force to add it again.");
    } else {
        println!("✓ Seeded {} fighters", added);
    }

    Ok(())
}
