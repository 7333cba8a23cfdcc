use std::fmt::Debug;
use std::path::Path;

/// Consumes a finished feature file
pub trait UnoFunction where Self: Debug {
    fn invoke(&self, features_file: &Path) -> anyhow::Result<()>;
}
