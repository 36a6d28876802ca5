use anyhow::Result;
use colored::*;
use quarry_core::discoverer::ArtifactKind;
use quarry_core::discovery_manager::DiscoveryManager;

pub fn execute(manager: &DiscoveryManager) -> Result<()> {
    let candidates = manager.list_candidates()?;

    println!("{}", "Candidates".bold().underline());

    if candidates.is_empty() {
        println!("  {}", "No candidates found".dimmed());
        return Ok(());
    }

    for candidate in &candidates {
        let kind = match candidate.kind {
            ArtifactKind::Directory => "dir".green(),
            ArtifactKind::Archive => "archive".cyan(),
        };
        let origin = if candidate.primary_source {
            "[host]".yellow()
        } else {
            "[extensions]".dimmed()
        };
        println!("{} {} {}", kind, candidate.location.display(), origin);
    }

    Ok(())
}
