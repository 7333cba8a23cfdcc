use super::CutoffPair;

pub const XCORR_DEFAULT_PATH_STUDIES: &str = "studies.txt";
pub const XCORR_DEFAULT_RNA_SEQ_DATA: &str = "./test_data/combined_rnaseq_data_lincs1000_combat.bz2";
pub const XCORR_DEFAULT_DRUG_RESPONSE_DATA: &str = "./test_data/rescaled_combined_single_drug_growth_100K";
pub const XCORR_DEFAULT_PATH_FEATURES: &str = "./test_data";
pub const XCORR_DEFAULT_PATH_UNO: &str = "./uno.sh";
pub const XCORR_DEFAULT_PATH_DB: &str = "xcorr.db";
pub const XCORR_DEFAULT_PYTHON: &str = "python3";

/// (correlation cutoff, cross-correlation cutoff), iterated in this order
pub const XCORR_DEFAULT_CUTOFFS: [CutoffPair; 6] = [
    CutoffPair::new(200, 100),
    CutoffPair::new(100, 50),
    CutoffPair::new(400, 200),
    CutoffPair::new(200, 50),
    CutoffPair::new(400, 50),
    CutoffPair::new(400, 100),
];
