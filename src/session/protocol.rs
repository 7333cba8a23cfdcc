use serde::{Deserialize, Serialize};

/// One line on the interpreter's stdin
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request<'a> {
    /// Run a code block in the persistent namespace
    Exec { code: &'a str },

    Init {
        db_path: &'a str,
        rna_seq_data: &'a str,
        drug_response_data: &'a str,
    },

    InsertXcorrRecord {
        features_file: &'a str,
        studies: [&'a str; 2],
        cutoff_corr: u32,
        cutoff_xcorr: u32,
    },

    CoxenFeatureSelection {
        study1: &'a str,
        study2: &'a str,
        correlation_cutoff: u32,
        cross_correlation_cutoff: u32,
        output_file: &'a str,
    },
}

impl Request<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Exec { .. } => "exec",
            Request::Init { .. } => "init",
            Request::InsertXcorrRecord { .. } => "insert_xcorr_record",
            Request::CoxenFeatureSelection { .. } => "coxen_feature_selection",
        }
    }
}

/// One line on the interpreter's stdout
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
