mod protocol;
mod python;
pub mod templates;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use protocol::{Request, Response};
pub use python::{PythonInterpreter, PythonSession};

use crate::command::xcorr::{DatasetPaths, WorkItem};

/// The stateful service every work item talks to. One handle is opened per
/// run and threaded through the driver
pub trait XcorrSession {
    /// Open the database and register the two datasets
    fn init(&mut self, path_db: &str, datasets: &DatasetPaths) -> anyhow::Result<()>;

    /// Scan the feature file and insert an xcorr record for the item
    fn log_xcorr_record(&mut self, item: &WorkItem, features_file: &Path) -> anyhow::Result<()>;

    /// Select the features shared by the two studies and write them to the feature file
    fn coxen_feature_selection(&mut self, item: &WorkItem, features_file: &Path) -> anyhow::Result<()>;
}

/// How operations reach the interpreter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Typed requests, arguments sent as JSON data
    #[default]
    Rpc,
    /// Formatted code blocks executed in the session namespace
    Code,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionMode::Rpc => write!(f, "rpc"),
            SessionMode::Code => write!(f, "code"),
        }
    }
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rpc" => Ok(SessionMode::Rpc),
            "code" => Ok(SessionMode::Code),
            _ => Err(format!("Invalid session mode: {}", s)),
        }
    }
}
