use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::runtime::Error;

use super::constants::XCORR_DEFAULT_CUTOFFS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CutoffPair {
    pub correlation: u32,
    pub cross_correlation: u32,
}

impl CutoffPair {
    pub const fn new(correlation: u32, cross_correlation: u32) -> Self {
        Self {
            correlation,
            cross_correlation,
        }
    }
}

impl fmt::Display for CutoffPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.correlation, self.cross_correlation)
    }
}

/// Parses `<corr>:<xcorr>`, e.g. `200:100`
impl FromStr for CutoffPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let context = || format!("cutoff pair '{}'", s);
        let (corr, xcorr) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::parse_error(context(), Some("expected <corr>:<xcorr>")))?;
        let corr = corr
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::parse_error(context(), Some(e.to_string())))?;
        let xcorr = xcorr
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::parse_error(context(), Some(e.to_string())))?;
        Ok(CutoffPair::new(corr, xcorr))
    }
}

/// Parses a comma separated table, e.g. `200:100,100:50`
pub fn parse_cutoff_table(s: &str) -> Result<Vec<CutoffPair>, Error> {
    let table = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(CutoffPair::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if table.is_empty() {
        return Err(Error::parse_error(
            format!("cutoff table '{}'", s),
            Some("no cutoff pairs given"),
        ));
    }
    Ok(table)
}

/// Location of the two datasets handed to the session on init
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPaths {
    pub rna_seq_data: String,
    pub drug_response_data: String,
}

/// Everything one xcorr run needs
#[derive(Clone, Debug)]
pub struct XcorrParams {
    pub path_studies: PathBuf,
    pub datasets: DatasetPaths,
    pub cutoffs: Vec<CutoffPair>,
    pub path_features: PathBuf,
    pub path_db: String,
}

impl XcorrParams {
    pub fn default_cutoffs() -> Vec<CutoffPair> {
        XCORR_DEFAULT_CUTOFFS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_pair() {
        assert_eq!("200:100".parse::<CutoffPair>().unwrap(), CutoffPair::new(200, 100));
        assert_eq!(" 400 : 50 ".parse::<CutoffPair>().unwrap(), CutoffPair::new(400, 50));
        assert!("200".parse::<CutoffPair>().is_err());
        assert!("200:-1".parse::<CutoffPair>().is_err());
        assert!("a:b".parse::<CutoffPair>().is_err());
    }

    #[test]
    fn parse_table() {
        let table = parse_cutoff_table("200:100,100:50,").unwrap();
        assert_eq!(table, vec![CutoffPair::new(200, 100), CutoffPair::new(100, 50)]);
        assert!(parse_cutoff_table("").is_err());
        assert!(parse_cutoff_table("200:100,oops").is_err());
    }

    #[test]
    fn default_table_order() {
        let rendered: Vec<String> = XcorrParams::default_cutoffs()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["200:100", "100:50", "400:200", "200:50", "400:50", "400:100"]
        );
    }
}
