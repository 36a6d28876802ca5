use anyhow::Result;
use colored::*;
use quarry_core::discovery_manager::DiscoveryManager;

pub fn execute(manager: &DiscoveryManager, show_table: bool) -> Result<()> {
    let outcome = manager.discover()?;

    println!("{}", "Extensions".bold().underline());

    if outcome.descriptors.is_empty() {
        println!("  {}", "No extensions found".dimmed());
    } else {
        for descriptor in &outcome.descriptors {
            let version = descriptor
                .version
                .as_deref()
                .map(|v| format!(" v{}", v))
                .unwrap_or_default();
            println!(
                "{}{} {}",
                descriptor.id.blue().bold(),
                version,
                format!(
                    "{} ({})",
                    descriptor.entry_type,
                    descriptor.location.display()
                )
                .dimmed()
            );
        }
    }

    println!();
    println!(
        "{} candidate(s) scanned, {} extension(s) resolved",
        outcome.candidates.len(),
        outcome.descriptors.len()
    );

    if show_table {
        println!();
        println!("{}", "Metadata".bold().underline());
        if outcome.table.is_empty() {
            println!("  {}", "No declarations recorded".dimmed());
        } else {
            let mut keys: Vec<_> = outcome.table.keys().collect();
            keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            for key in keys {
                println!(
                    "{} {}",
                    key.to_string().cyan(),
                    format!("{} entr(ies)", outcome.table.get(key).len()).dimmed()
                );
            }
        }
    }

    Ok(())
}
