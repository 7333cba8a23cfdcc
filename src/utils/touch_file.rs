use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Create the file if it is absent. Existing content is left untouched, so a
/// rerun over populated feature files is harmless
pub fn touch_file(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to touch {}", path.display()))?;
    Ok(())
}
