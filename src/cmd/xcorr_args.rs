use std::path::PathBuf;

use clap::Args;

use crate::command::xcorr::constants::*;
use crate::command::xcorr::{parse_cutoff_table, DatasetPaths, XcorrParams};

/// Arguments that define the set of work items
#[derive(Args, Debug, Clone)]
pub struct XcorrArgs {
    // List of studies, one per line
    #[arg(short = 's', long = "studies", value_parser = clap::value_parser!(PathBuf), default_value = XCORR_DEFAULT_PATH_STUDIES)]
    pub path_studies: PathBuf,

    // Combined RNA-seq dataset
    #[arg(long = "rna-seq-data", default_value = XCORR_DEFAULT_RNA_SEQ_DATA)]
    pub rna_seq_data: String,

    // Drug response dataset
    #[arg(long = "drug-response-data", default_value = XCORR_DEFAULT_DRUG_RESPONSE_DATA)]
    pub drug_response_data: String,

    // Cutoff table as corr:xcorr pairs, e.g. 200:100,100:50. Defaults to the built-in six pairs
    #[arg(long = "cutoffs")]
    pub cutoffs: Option<String>,

    // Directory receiving the feature files
    #[arg(short = 'o', long = "features-dir", value_parser = clap::value_parser!(PathBuf), default_value = XCORR_DEFAULT_PATH_FEATURES)]
    pub path_features: PathBuf,

    // Database opened by the session
    #[arg(long = "db", default_value = XCORR_DEFAULT_PATH_DB)]
    pub path_db: String,
}

impl XcorrArgs {
    pub fn to_params(&self) -> anyhow::Result<XcorrParams> {
        let cutoffs = match &self.cutoffs {
            Some(table) => parse_cutoff_table(table)?,
            None => XcorrParams::default_cutoffs(),
        };

        Ok(XcorrParams {
            path_studies: self.path_studies.clone(),
            datasets: DatasetPaths {
                rna_seq_data: self.rna_seq_data.clone(),
                drug_response_data: self.drug_response_data.clone(),
            },
            cutoffs,
            path_features: self.path_features.clone(),
            path_db: self.path_db.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::xcorr::CutoffPair;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        xcorr: XcorrArgs,
    }

    #[test]
    fn defaults_fill_every_field() {
        let args = Wrapper::try_parse_from(["xcorr"]).unwrap().xcorr;
        let params = args.to_params().unwrap();
        assert_eq!(params.path_studies, PathBuf::from(XCORR_DEFAULT_PATH_STUDIES));
        assert_eq!(params.datasets.rna_seq_data, XCORR_DEFAULT_RNA_SEQ_DATA);
        assert_eq!(params.datasets.drug_response_data, XCORR_DEFAULT_DRUG_RESPONSE_DATA);
        assert_eq!(params.cutoffs, XcorrParams::default_cutoffs());
        assert_eq!(params.path_features, PathBuf::from(XCORR_DEFAULT_PATH_FEATURES));
        assert_eq!(params.path_db, XCORR_DEFAULT_PATH_DB);
    }

    #[test]
    fn flags_reach_params() {
        let args = Wrapper::try_parse_from([
            "xcorr",
            "-s",
            "my_studies.txt",
            "--cutoffs",
            "300:150",
            "-o",
            "out",
            "--db",
            "other.db",
        ])
        .unwrap()
        .xcorr;
        let params = args.to_params().unwrap();
        assert_eq!(params.path_studies, PathBuf::from("my_studies.txt"));
        assert_eq!(params.cutoffs, vec![CutoffPair::new(300, 150)]);
        assert_eq!(params.path_features, PathBuf::from("out"));
        assert_eq!(params.path_db, "other.db");
    }

    #[test]
    fn bad_cutoff_table_is_rejected() {
        let args = Wrapper::try_parse_from(["xcorr", "--cutoffs", "300"]).unwrap().xcorr;
        assert!(args.to_params().is_err());
    }
}
