use std::ffi::OsString;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio};

use log::{debug, info};

use crate::command::xcorr::{DatasetPaths, WorkItem};
use crate::runtime::Error;

use super::protocol::{Request, Response};
use super::templates;
use super::{SessionMode, XcorrSession};

/// Request loop run inside the interpreter
pub const SESSION_DRIVER: &str = include_str!("xcorr_session.py");

/// A long-lived Python process answering requests over stdin/stdout
pub struct PythonInterpreter {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl PythonInterpreter {
    pub fn spawn(python: &str, python_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut cmd = Command::new(python);
        cmd.arg("-u")
            .arg("-c")
            .arg(SESSION_DRIVER)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(python_path) = python_path {
            cmd.env("PYTHONPATH", extend_python_path(python_path)?);
        }

        debug!("Starting python session with {}", python);
        let mut child = cmd
            .spawn()
            .map_err(|_| Error::utility_not_executable(python))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::session_error("spawn", Some("stdin of interpreter not captured")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::session_error("spawn", Some("stdout of interpreter not captured")))?;

        info!("Python session started (pid {})", child.id());
        Ok(Self {
            child,
            stdin: Some(stdin),
            stdout: BufReader::new(stdout),
        })
    }

    /// Send one request and block until the interpreter answers
    pub fn request(&mut self, request: &Request) -> anyhow::Result<()> {
        let name = request.name();
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| Error::session_error(name, Some("session is closed")))?;

        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        stdin
            .write_all(line.as_bytes())
            .and_then(|_| stdin.flush())
            .map_err(|e| Error::session_error(name, Some(format!("interpreter is gone: {}", e))))?;

        let mut reply = String::new();
        let n = self
            .stdout
            .read_line(&mut reply)
            .map_err(|e| Error::session_error(name, Some(e.to_string())))?;
        if n == 0 {
            return Err(Error::session_error(name, Some("interpreter exited before replying")).into());
        }

        let response: Response = serde_json::from_str(reply.trim())
            .map_err(|e| Error::session_error(name, Some(format!("malformed reply: {}", e))))?;
        if response.ok {
            Ok(())
        } else {
            Err(Error::session_error(name, response.error.map(|e| e.trim_end().to_string())).into())
        }
    }

    /// Close stdin and wait for the interpreter to finish
    pub fn close(&mut self) -> anyhow::Result<ExitStatus> {
        drop(self.stdin.take());
        Ok(self.child.wait()?)
    }
}

impl Drop for PythonInterpreter {
    fn drop(&mut self) {
        drop(self.stdin.take());
        let _ = self.child.wait();
    }
}

fn extend_python_path(extra: &Path) -> anyhow::Result<OsString> {
    let mut paths: Vec<PathBuf> = vec![extra.to_path_buf()];
    if let Some(existing) = std::env::var_os("PYTHONPATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    Ok(std::env::join_paths(paths)?)
}

/// The xcorr session backed by a python interpreter
pub struct PythonSession {
    python: String,
    interpreter: PythonInterpreter,
    mode: SessionMode,
}

impl PythonSession {
    pub fn start(python: &str, python_path: Option<&Path>, mode: SessionMode) -> anyhow::Result<Self> {
        let interpreter = PythonInterpreter::spawn(python, python_path)?;
        Ok(Self {
            python: python.to_string(),
            interpreter,
            mode,
        })
    }

    pub fn close(mut self) -> anyhow::Result<()> {
        let status = self.interpreter.close()?;
        if !status.success() {
            return Err(Error::utility_execution_error(
                self.python.as_str(),
                format!("{} -u -c <xcorr session>", self.python),
                Some(format!("session ended with {}", status)),
            )
            .into());
        }
        Ok(())
    }

    fn exec(&mut self, code: &str) -> anyhow::Result<()> {
        self.interpreter.request(&Request::Exec { code })
    }
}

impl XcorrSession for PythonSession {
    fn init(&mut self, path_db: &str, datasets: &DatasetPaths) -> anyhow::Result<()> {
        match self.mode {
            SessionMode::Rpc => self.interpreter.request(&Request::Init {
                db_path: path_db,
                rna_seq_data: &datasets.rna_seq_data,
                drug_response_data: &datasets.drug_response_data,
            }),
            SessionMode::Code => {
                let code = templates::init_code(path_db, datasets)?;
                self.exec(&code)
            }
        }
    }

    fn log_xcorr_record(&mut self, item: &WorkItem, features_file: &Path) -> anyhow::Result<()> {
        match self.mode {
            SessionMode::Rpc => {
                let features_file = features_file.to_string_lossy();
                self.interpreter.request(&Request::InsertXcorrRecord {
                    features_file: &features_file,
                    studies: [item.study1.as_str(), item.study2.as_str()],
                    cutoff_corr: item.cutoff.correlation,
                    cutoff_xcorr: item.cutoff.cross_correlation,
                })
            }
            SessionMode::Code => {
                let code = templates::log_corr_code(item, features_file)?;
                self.exec(&code)
            }
        }
    }

    fn coxen_feature_selection(&mut self, item: &WorkItem, features_file: &Path) -> anyhow::Result<()> {
        match self.mode {
            SessionMode::Rpc => {
                let features_file = features_file.to_string_lossy();
                self.interpreter.request(&Request::CoxenFeatureSelection {
                    study1: &item.study1,
                    study2: &item.study2,
                    correlation_cutoff: item.cutoff.correlation,
                    cross_correlation_cutoff: item.cutoff.cross_correlation,
                    output_file: &features_file,
                })
            }
            SessionMode::Code => {
                let code = templates::xcorr_code(item, features_file)?;
                self.exec(&code)
            }
        }
    }
}
