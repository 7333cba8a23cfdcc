#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use xcorr::command::xcorr::{CutoffPair, DatasetPaths, Xcorr, XcorrParams};
use xcorr::session::{PythonSession, SessionMode};
use xcorr::uno::UnoShellScript;

fn python_available() -> bool {
    Command::new("python3")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Stand-ins for uno_xcorr and xcorr_db that log every call to calls.txt
fn write_fake_modules(dir: &Path) -> PathBuf {
    let calls = dir.join("calls.txt");
    let modules = dir.join("modules");
    fs::create_dir_all(&modules).unwrap();

    fs::write(
        modules.join("uno_xcorr.py"),
        format!(
            r#"
LOG = r'{}'

def _log(*args):
    with open(LOG, 'a') as f:
        f.write(' '.join(str(a) for a in args) + '\n')

def init_uno_xcorr(rna_seq_data, drug_response_data):
    _log('init', rna_seq_data, drug_response_data)

def coxen_feature_selection(study1, study2, correlation_cutoff, cross_correlation_cutoff, output_file=None):
    _log('coxen', study1, study2, correlation_cutoff, cross_correlation_cutoff, output_file)
    with open(output_file, 'w') as f:
        f.write('GENE1\nGENE2\n')
"#,
            calls.display()
        ),
    )
    .unwrap();

    fs::write(
        modules.join("xcorr_db.py"),
        r#"
from uno_xcorr import _log

class xcorr_db:
    def __init__(self, path):
        _log('db', path)

    def read_feature_names(self):
        pass

    def read_study_names(self):
        pass

    def scan_features_file(self, path):
        with open(path) as f:
            return [line.strip() for line in f if line.strip()]

    def insert_xcorr_record(self, studies, features, cutoff_corr, cutoff_xcorr):
        _log('insert', studies[0], studies[1], len(features), cutoff_corr, cutoff_xcorr)
"#,
    )
    .unwrap();

    modules
}

fn write_uno_script(dir: &Path) -> PathBuf {
    let path = dir.join("uno.sh");
    let consumed = dir.join("consumed.txt");
    fs::write(
        &path,
        format!("#!/bin/sh\necho \"$1 $(wc -l < \"$1\")\" >> {}\n", consumed.display()),
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn params(dir: &Path) -> XcorrParams {
    let path_studies = dir.join("studies.txt");
    fs::write(&path_studies, "CCLE\nGDSC\n").unwrap();
    XcorrParams {
        path_studies,
        datasets: DatasetPaths {
            rna_seq_data: "./test_data/combined_rnaseq_data_lincs1000_combat.bz2".to_string(),
            drug_response_data: "./test_data/rescaled_combined_single_drug_growth_100K".to_string(),
        },
        cutoffs: vec![CutoffPair::new(200, 100), CutoffPair::new(400, 50)],
        path_features: dir.join("test_data"),
        path_db: dir.join("xcorr.db").to_string_lossy().to_string(),
    }
}

fn run_pipeline(mode: SessionMode) {
    if !python_available() {
        eprintln!("python3 not found, skipping");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let modules = write_fake_modules(dir.path());
    let params = params(dir.path());

    let mut session = PythonSession::start("python3", Some(modules.as_path()), mode).unwrap();
    let uno = UnoShellScript::new(&write_uno_script(dir.path()));

    let summary = Xcorr::run(&params, &mut session, &uno).unwrap();
    session.close().unwrap();
    assert_eq!(summary.items, 4);

    let calls = fs::read_to_string(dir.path().join("calls.txt")).unwrap();
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(calls[0], format!("db {}", params.path_db));
    assert_eq!(
        calls[1],
        "init ./test_data/combined_rnaseq_data_lincs1000_combat.bz2 ./test_data/rescaled_combined_single_drug_growth_100K"
    );

    let first = params.path_features.join("CCLE_GDSC_200_100_features.txt");
    // the record is logged before selection fills the file
    assert_eq!(calls[2], "insert CCLE GDSC 0 200 100");
    assert_eq!(
        calls[3],
        format!("coxen CCLE GDSC 200 100 {}", first.display())
    );
    assert_eq!(calls.len(), 2 + 4 * 2);
    assert_eq!(calls[9], format!(
        "coxen GDSC CCLE 400 50 {}",
        params.path_features.join("GDSC_CCLE_400_50_features.txt").display()
    ));

    let consumed = fs::read_to_string(dir.path().join("consumed.txt")).unwrap();
    let consumed: Vec<&str> = consumed.lines().collect();
    assert_eq!(consumed.len(), 4);
    let first_path = first.to_string_lossy().to_string();
    assert_eq!(
        consumed[0].split_whitespace().collect::<Vec<_>>(),
        vec![first_path.as_str(), "2"]
    );
}

#[test]
fn full_run_with_typed_requests() {
    run_pipeline(SessionMode::Rpc);
}

#[test]
fn full_run_with_code_blocks() {
    run_pipeline(SessionMode::Code);
}

#[test]
fn rerun_logs_existing_features() {
    if !python_available() {
        eprintln!("python3 not found, skipping");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let modules = write_fake_modules(dir.path());
    let params = params(dir.path());
    let uno = UnoShellScript::new(&write_uno_script(dir.path()));

    for _ in 0..2 {
        let mut session =
            PythonSession::start("python3", Some(modules.as_path()), SessionMode::Rpc).unwrap();
        Xcorr::run(&params, &mut session, &uno).unwrap();
        session.close().unwrap();
    }

    let calls = fs::read_to_string(dir.path().join("calls.txt")).unwrap();
    let inserts: Vec<&str> = calls.lines().filter(|l| l.starts_with("insert")).collect();
    assert_eq!(inserts.len(), 8);
    // second pass scans the files written during the first
    assert_eq!(inserts[4], "insert CCLE GDSC 2 200 100");
}
