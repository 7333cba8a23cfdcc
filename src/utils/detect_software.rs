use log::debug;
use log::info;
use std::path::Path;
use std::process::Command;

use crate::runtime::Error;

pub fn check_python(python: &str) -> anyhow::Result<()> {
    debug!("Checking for {}", python);
    match Command::new(python).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            info!("Found {} ({})", python, version.trim());
            Ok(())
        }
        _ => Err(Error::utility_not_executable(python).into()),
    }
}

/// The uno script is run directly, so it has to exist and carry an execute bit
pub fn check_uno_script(path_script: &Path) -> anyhow::Result<()> {
    debug!("Checking for uno script {}", path_script.display());
    if !path_script.is_file() {
        return Err(Error::file_not_found(path_script).into());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path_script)?.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(Error::utility_not_executable(path_script.display().to_string()).into());
        }
    }

    info!("Found uno script {}", path_script.display());
    Ok(())
}
