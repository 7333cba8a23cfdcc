use std::path::Path;

use crate::command::xcorr::{DatasetPaths, WorkItem};
use crate::runtime::Error;

pub const INIT_TEMPLATE: &str = "
import uno_xcorr
from xcorr_db import xcorr_db

DB = xcorr_db('%s')
DB.read_feature_names()
DB.read_study_names()
rna_seq_data = '%s'
drug_response_data = '%s'

uno_xcorr.init_uno_xcorr(rna_seq_data, drug_response_data)
";

pub const LOG_CORR_TEMPLATE: &str = "
features = DB.scan_features_file('%s')
DB.insert_xcorr_record(studies=[ '%s', '%s' ],
                       features=features,
                       cutoff_corr=%d, cutoff_xcorr=%d)
";

pub const XCORR_TEMPLATE: &str = "
import uno_xcorr

study1 = '%s'
study2 = '%s'
correlation_cutoff = %d
cross_correlation_cutoff = %d
features_file = '%s'
uno_xcorr.coxen_feature_selection(study1, study2, correlation_cutoff, cross_correlation_cutoff, output_file=features_file)
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateArg<'a> {
    Str(&'a str),
    Int(i64),
}

impl<'a> From<&'a str> for TemplateArg<'a> {
    fn from(s: &'a str) -> Self {
        TemplateArg::Str(s)
    }
}

impl From<u32> for TemplateArg<'_> {
    fn from(n: u32) -> Self {
        TemplateArg::Int(n as i64)
    }
}

/// printf-style substitution of `%s` and `%d`, positional. `%%` is a literal `%`.
/// Arguments are inserted as-is; nothing is quoted or escaped
pub fn format_template(name: &str, template: &str, args: &[TemplateArg]) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut args_iter = args.iter();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some(directive @ ('s' | 'd')) => {
                let arg = args_iter.next().ok_or_else(|| {
                    Error::template_error(name, format!("not enough arguments, got {}", args.len()))
                })?;
                match (directive, arg) {
                    (_, TemplateArg::Int(n)) => out.push_str(&n.to_string()),
                    ('s', TemplateArg::Str(s)) => out.push_str(s),
                    (_, TemplateArg::Str(s)) => {
                        return Err(Error::template_error(
                            name,
                            format!("%d needs an integer, got '{}'", s),
                        ))
                    }
                }
            }
            Some(other) => {
                return Err(Error::template_error(name, format!("unknown directive %{}", other)))
            }
            None => return Err(Error::template_error(name, "template ends with a lone %")),
        }
    }

    let unused = args_iter.count();
    if unused > 0 {
        return Err(Error::template_error(
            name,
            format!("{} argument(s) left over", unused),
        ));
    }
    Ok(out)
}

pub fn init_code(path_db: &str, datasets: &DatasetPaths) -> Result<String, Error> {
    format_template(
        "init",
        INIT_TEMPLATE,
        &[
            path_db.into(),
            datasets.rna_seq_data.as_str().into(),
            datasets.drug_response_data.as_str().into(),
        ],
    )
}

pub fn log_corr_code(item: &WorkItem, features_file: &Path) -> Result<String, Error> {
    let features_file = features_file.to_string_lossy();
    format_template(
        "log_corr",
        LOG_CORR_TEMPLATE,
        &[
            TemplateArg::Str(&features_file),
            item.study1.as_str().into(),
            item.study2.as_str().into(),
            item.cutoff.correlation.into(),
            item.cutoff.cross_correlation.into(),
        ],
    )
}

pub fn xcorr_code(item: &WorkItem, features_file: &Path) -> Result<String, Error> {
    let features_file = features_file.to_string_lossy();
    format_template(
        "xcorr",
        XCORR_TEMPLATE,
        &[
            item.study1.as_str().into(),
            item.study2.as_str().into(),
            item.cutoff.correlation.into(),
            item.cutoff.cross_correlation.into(),
            TemplateArg::Str(&features_file),
        ],
    )
}
