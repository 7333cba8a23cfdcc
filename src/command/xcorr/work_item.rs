use std::fmt;
use std::path::{Path, PathBuf};

use itertools::iproduct;

use super::CutoffPair;

/// One (study1, study2, cutoff pair) unit of work
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkItem {
    pub study1: String,
    pub study2: String,
    pub cutoff: CutoffPair,
}

impl WorkItem {
    pub fn new(study1: &str, study2: &str, cutoff: CutoffPair) -> Self {
        Self {
            study1: study1.to_string(),
            study2: study2.to_string(),
            cutoff,
        }
    }

    pub fn feature_file_name(&self) -> String {
        format!(
            "{}_{}_{}_{}_features.txt",
            self.study1, self.study2, self.cutoff.correlation, self.cutoff.cross_correlation
        )
    }

    pub fn feature_file_path(&self, path_features: &Path) -> PathBuf {
        path_features.join(self.feature_file_name())
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Study1: {}, Study2: {}, cc: {}, ccc: {}",
            self.study1, self.study2, self.cutoff.correlation, self.cutoff.cross_correlation
        )
    }
}

/// All ordered pairs of distinct studies crossed with the cutoff table.
/// Outer loop is study1, then study2, then the cutoff table in order
pub fn work_items<'a>(
    studies: &'a [String],
    cutoffs: &'a [CutoffPair],
) -> impl Iterator<Item = WorkItem> + 'a {
    iproduct!(studies, studies, cutoffs)
        .filter(|(study1, study2, _)| study1 != study2)
        .map(|(study1, study2, cutoff)| WorkItem::new(study1, study2, *cutoff))
}
