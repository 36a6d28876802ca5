use anyhow::Result;
use colored::*;
use quarry_core::discoverer::DeclarationKey;
use quarry_core::discovery_manager::DiscoveryManager;

pub fn execute(manager: &DiscoveryManager, key: &str) -> Result<()> {
    let key = DeclarationKey::new(key).map_err(|e| anyhow::anyhow!(e))?;
    let outcome = manager.discover()?;

    let entries = outcome.table.get(&key);

    println!("{}", format!("Metadata for {}", key).bold().underline());

    if entries.is_empty() {
        println!("  {}", "No entries recorded under this key".dimmed());
        return Ok(());
    }

    for entry in entries {
        let target = match &entry.member {
            Some(member) => format!("{}::{}", entry.owner, member),
            None => entry.owner.clone(),
        };
        if entry.values.is_null() {
            println!("{}", target.blue());
        } else {
            println!("{} {}", target.blue(), entry.values.to_string().dimmed());
        }
    }

    Ok(())
}
