use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File at {:?} not found.", path)]
    FileNotFound { path: std::path::PathBuf },

    #[error(
        "Utility '{}' failed on execute \'{}\'{}",
        utility,
        cmd,
        Error::format_msg_as_detail(msg)
    )]
    UtilityExecutionError {
        utility: String,
        cmd: String,
        msg: Option<String>,
    },

    #[error(
        "Failed trying to execute utility '{utility}'. Make sure it is in your $PATH and you have execution permissions."
    )]
    UtilityNotExecutable { utility: String },

    #[error("Failed parsing {}{}", context, Error::format_msg_as_detail(msg))]
    ParseError {
        context: String,
        msg: Option<String>,
    },

    #[error("Template '{}' could not be formatted: {}", template, msg)]
    TemplateError { template: String, msg: String },

    #[error("Python session request '{}' failed{}", request, Error::format_msg_as_detail(msg))]
    SessionError {
        request: String,
        msg: Option<String>,
    },
}

impl Error {
    #[cold]
    pub fn file_not_found<P: AsRef<std::path::Path>>(path: P) -> Self {
        Error::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn utility_execution_error<U: Into<String>, C: Into<String>, M: Into<String>>(
        utility: U,
        cmd: C,
        msg: Option<M>,
    ) -> Self {
        Error::UtilityExecutionError {
            utility: utility.into(),
            cmd: cmd.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_not_executable<U: Into<String>>(utility: U) -> Self {
        Error::UtilityNotExecutable {
            utility: utility.into(),
        }
    }

    #[cold]
    pub fn parse_error<C: Into<String>, M: Into<String>>(context: C, msg: Option<M>) -> Self {
        Error::ParseError {
            context: context.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn template_error<T: Into<String>, M: Into<String>>(template: T, msg: M) -> Self {
        Error::TemplateError {
            template: template.into(),
            msg: msg.into(),
        }
    }

    #[cold]
    pub fn session_error<R: Into<String>, M: Into<String>>(request: R, msg: Option<M>) -> Self {
        Error::SessionError {
            request: request.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_appended_only_when_present() {
        let e = Error::parse_error("cutoff pair '12'", Some("expected <corr>:<xcorr>"));
        assert_eq!(
            e.to_string(),
            "Failed parsing cutoff pair '12' (expected <corr>:<xcorr>)"
        );

        let e = Error::parse_error::<_, String>("cutoff pair '12'", None);
        assert_eq!(e.to_string(), "Failed parsing cutoff pair '12'");
    }

    #[test]
    fn session_error_names_request() {
        let e = Error::session_error("init", Some("ModuleNotFoundError: uno_xcorr"));
        assert!(e.to_string().contains("'init'"));
        assert!(e.to_string().contains("uno_xcorr"));
    }
}
