use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use conjugation::VerbRecord;

/// Loads the verb list from the provided JSON data file.
pub fn load_verbs(path: &Path) -> Result<Vec<VerbRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("couldn't read verb data file {}", path.display()))?;
    let verbs = parse_verbs(&contents)
        .with_context(|| format!("couldn't parse verb data file {}", path.display()))?;
    info!("Loaded {} verbs from {}", verbs.len(), path.display());

    Ok(verbs)
}

/// Parses a JSON array of verb records.
fn parse_verbs(json: &str) -> serde_json::Result<Vec<VerbRecord>> {
    serde_json::from_str(json)
}

/// Finds the verb with the provided dictionary form, if it was loaded.
pub fn find_verb<'a>(verbs: &'a [VerbRecord], name: &str) -> Option<&'a VerbRecord> {
    verbs.iter().find(|v| v.verb == name)
}
