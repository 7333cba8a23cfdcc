use std::fs::read_to_string;
use std::path::Path;

use anyhow::Context;

use crate::runtime::Error;

/// Read the study identifiers, one per line. Surrounding whitespace is
/// trimmed; blank lines and `#` comments are skipped
pub fn read_study_list_file(filename: &Path) -> anyhow::Result<Vec<String>> {
    if !filename.exists() {
        return Err(Error::file_not_found(filename).into());
    }
    let content = read_to_string(filename)
        .with_context(|| format!("Failed to read file with list of studies {}", filename.display()))?;
    Ok(parse_study_list(&content))
}

pub fn parse_study_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
