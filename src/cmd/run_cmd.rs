use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::command::xcorr::constants::{XCORR_DEFAULT_PATH_UNO, XCORR_DEFAULT_PYTHON};
use crate::command::xcorr::Xcorr;
use crate::session::{PythonSession, SessionMode};
use crate::uno::UnoShellScript;
use crate::utils::{check_python, check_uno_script};

use super::plan_cmd::write_plan;
use super::XcorrArgs;

#[derive(Args)]
pub struct RunCMD {
    #[command(flatten)]
    pub xcorr: XcorrArgs,

    // Script run on every feature file
    #[arg(long = "uno", value_parser = clap::value_parser!(PathBuf), default_value = XCORR_DEFAULT_PATH_UNO)]
    pub path_uno: PathBuf,

    // Python interpreter hosting the session
    #[arg(long = "python", default_value = XCORR_DEFAULT_PYTHON)]
    pub python: String,

    // Prepended to PYTHONPATH, for finding uno_xcorr and xcorr_db
    #[arg(long = "python-path", value_parser = clap::value_parser!(PathBuf))]
    pub python_path: Option<PathBuf>,

    // rpc: typed requests. code: formatted code blocks
    #[arg(long = "session-mode", default_value = "rpc")]
    pub session_mode: SessionMode,

    // Only list what would be done
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    // Do not check for uno.sh and python before starting
    #[arg(long = "skip-preflight")]
    pub skip_preflight: bool,
}

impl RunCMD {
    pub fn try_execute(&mut self) -> Result<()> {
        let params = self.xcorr.to_params()?;

        if self.dry_run {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_plan(&params, false, &mut out)?;
            out.flush()?;
            return Ok(());
        }

        if !self.skip_preflight {
            check_uno_script(&self.path_uno)?;
            check_python(&self.python)?;
        }

        log::info!("Using {} session via {}", self.session_mode, self.python);
        let mut session =
            PythonSession::start(&self.python, self.python_path.as_deref(), self.session_mode)?;
        let uno = UnoShellScript::new(&self.path_uno);

        let summary = Xcorr::run(&params, &mut session, &uno)?;
        session.close()?;

        log::info!("Xcorr run complete: {} work items", summary.items);
        Ok(())
    }
}
