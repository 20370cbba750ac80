//! List fighters command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_fighters(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let fighters = store.list_fighters().await?;

    if fighters.is_empty() {
        println!("No fighters stored.");
        println!();
        println!("Load the default roster with: fighterdb seed");
        return Ok(());
    }

    println!("Fighters ({} total)", fighters.len());
    println!("{:-<70}", "");

    for fighter in fighters {
        println!(
            "{:>4}  {:<12} {:<14} {}",
            fighter.id,
            fighter.name,
            fighter.origin,
            fighter.special_move.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
