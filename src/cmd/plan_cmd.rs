use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::command::xcorr::{Xcorr, XcorrParams};
use crate::session::templates;

use super::XcorrArgs;

#[derive(Args)]
pub struct PlanCMD {
    #[command(flatten)]
    pub xcorr: XcorrArgs,

    // Also print the code blocks a code-mode session would run
    #[arg(long = "emit-code")]
    pub emit_code: bool,
}

impl PlanCMD {
    /// List the work items without touching files or starting anything
    pub fn try_execute(&mut self) -> Result<()> {
        let params = self.xcorr.to_params()?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_plan(&params, self.emit_code, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// One tab separated line per work item: study1, study2, cc, ccc, feature file
pub fn write_plan(params: &XcorrParams, emit_code: bool, out: &mut impl Write) -> Result<()> {
    let studies = Xcorr::load_studies(params)?;

    if emit_code {
        writeln!(out, "# init")?;
        writeln!(out, "{}", templates::init_code(&params.path_db, &params.datasets)?)?;
    }

    for (item, features_file) in Xcorr::plan(params, &studies) {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            item.study1,
            item.study2,
            item.cutoff.correlation,
            item.cutoff.cross_correlation,
            features_file.display()
        )?;
        if emit_code {
            writeln!(out, "{}", templates::log_corr_code(&item, &features_file)?)?;
            writeln!(out, "{}", templates::xcorr_code(&item, &features_file)?)?;
        }
    }
    Ok(())
}
