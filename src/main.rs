use anyhow::{Context, Result};
use meeting_scribe::config::Config;
use meeting_scribe::roster::Roster;
use meeting_scribe::{names, telemetry};
use std::fs;
use std::io::Read;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;
    println!("✓ Config loaded from ~/.meeting-scribe.toml");

    // Initialize telemetry
    telemetry::init(config.telemetry.enabled, &config.telemetry.log_path)?;
    tracing::info!("meeting-scribe starting");

    // Load the roster, synthesizing the default on first run
    let roster_path = Config::expand_path(&config.roster.path)?;
    let roster = Roster::load_or_init(&roster_path)?;
    println!("✓ Roster loaded: {} known names", roster.employees.len());

    // Transcript comes from the speech-to-text step, as a file or on stdin
    let transcript = read_transcript().context("failed to read transcript")?;

    let roster_names = roster.names();
    let results =
        names::identify_participants(&transcript, &roster_names, config.matching.threshold);

    if results.is_empty() {
        println!("\nNo participants identified.");
        return Ok(());
    }

    println!("\nParticipants:");
    for result in &results {
        if result.was_corrected {
            println!(
                "  ✏ {} (heard \"{}\", {:.1}%)",
                result.corrected,
                result.original,
                result.similarity * 100.0
            );
        } else if roster_names.contains(&result.corrected) {
            println!("  ✓ {}", result.corrected);
        } else {
            println!("  ? {} (not in roster)", result.corrected);
        }
    }

    Ok(())
}

/// Read the transcript from the path given as the first argument, or stdin
fn read_transcript() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read transcript file {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read transcript from stdin")?;
            Ok(buffer)
        }
    }
}
