use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::runtime::Error;
use crate::utils::command_to_string;

use super::UnoFunction;

/// `uno.sh <features_file>`, run from the current directory
#[derive(Clone, Debug)]
pub struct UnoShellScript {
    script_file: PathBuf,
}

impl UnoShellScript {
    pub fn new(script_file: &Path) -> Self {
        Self {
            script_file: script_file.to_path_buf(),
        }
    }
}

impl UnoFunction for UnoShellScript {
    fn invoke(&self, features_file: &Path) -> anyhow::Result<()> {
        let mut cmd = Command::new(&self.script_file);
        cmd.arg(features_file);
        let cmd_string = command_to_string(&cmd);
        debug!("Running {}", cmd_string);

        let run_output = output_retrying_busy(&mut cmd)
            .map_err(|_| Error::utility_not_executable(self.script_file.display().to_string()))?;

        let stdout = String::from_utf8_lossy(&run_output.stdout);
        let stderr = String::from_utf8_lossy(&run_output.stderr);
        for line in stdout.lines() {
            debug!("uno: {}", line);
        }

        if !run_output.status.success() {
            let stderr = stderr.trim();
            let msg = if stderr.is_empty() {
                format!("{}", run_output.status)
            } else {
                format!("{}: {}", run_output.status, stderr)
            };
            return Err(Error::utility_execution_error("uno", cmd_string, Some(msg)).into());
        }

        for line in stderr.lines() {
            warn!("uno: {}", line);
        }
        Ok(())
    }
}

/// A script that was just written may still be open elsewhere (ETXTBSY). Retry briefly
fn output_retrying_busy(cmd: &mut Command) -> std::io::Result<Output> {
    const ETXTBSY: i32 = 26;
    let mut attempt = 0;
    loop {
        match cmd.output() {
            Err(e) if cfg!(unix) && e.raw_os_error() == Some(ETXTBSY) && attempt < 5 => {
                attempt += 1;
                thread::sleep(Duration::from_millis(50 * attempt));
            }
            result => return result,
        }
    }
}
