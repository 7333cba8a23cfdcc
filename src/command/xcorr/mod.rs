pub mod constants;
pub mod core;
pub mod params;
pub mod work_item;

pub use self::core::{Xcorr, XcorrSummary};
pub use params::{parse_cutoff_table, CutoffPair, DatasetPaths, XcorrParams};
pub use work_item::{work_items, WorkItem};
