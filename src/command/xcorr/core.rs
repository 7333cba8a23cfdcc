use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};

use crate::fileformat::read_study_list_file;
use crate::session::XcorrSession;
use crate::uno::UnoFunction;
use crate::utils::touch_file;

use super::work_item::work_items;
use super::{WorkItem, XcorrParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XcorrSummary {
    pub items: usize,
}

/// Cross-study feature correlation driver
pub struct Xcorr;

impl Xcorr {
    pub fn load_studies(params: &XcorrParams) -> anyhow::Result<Vec<String>> {
        let studies = read_study_list_file(&params.path_studies)?;
        info!(
            "Read {} studies from {}",
            studies.len(),
            params.path_studies.display()
        );
        if studies.len() < 2 {
            warn!("Fewer than two studies, there are no pairs to correlate");
        }
        Ok(studies)
    }

    /// Work items with their feature file, in execution order
    pub fn plan(params: &XcorrParams, studies: &[String]) -> Vec<(WorkItem, PathBuf)> {
        work_items(studies, &params.cutoffs)
            .map(|item| {
                let features_file = item.feature_file_path(&params.path_features);
                (item, features_file)
            })
            .collect()
    }

    /// Run the algorithm. Strictly sequential; the first failure ends the run
    pub fn run(
        params: &XcorrParams,
        session: &mut dyn XcorrSession,
        uno: &dyn UnoFunction,
    ) -> anyhow::Result<XcorrSummary> {
        let studies = Self::load_studies(params)?;

        session
            .init(&params.path_db, &params.datasets)
            .context("Failed to initialize the xcorr session")?;
        info!(
            "Session initialized with {} and {}",
            params.datasets.rna_seq_data, params.datasets.drug_response_data
        );

        let mut items = 0;
        for item in work_items(&studies, &params.cutoffs) {
            info!("{}", item);
            let features_file = item.feature_file_path(&params.path_features);

            touch_file(&features_file)?;
            session
                .log_xcorr_record(&item, &features_file)
                .with_context(|| format!("Failed to log xcorr record ({})", item))?;
            session
                .coxen_feature_selection(&item, &features_file)
                .with_context(|| format!("Feature selection failed ({})", item))?;
            uno.invoke(&features_file)
                .with_context(|| format!("uno failed on {}", features_file.display()))?;

            items += 1;
        }

        info!("Xcorr has finished, {} work items done", items);
        Ok(XcorrSummary { items })
    }
}
