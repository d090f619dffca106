use serde::Serialize;
use std::ffi::OsString;

/// Executable plus arguments for one file manager launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: &'static str,
    pub args: Vec<OsString>,
    /// Non-zero exit statuses count as success. Start failures are never masked.
    pub ignore_exit_code: bool,
    /// Arguments must reach the child untouched by platform quoting rules.
    pub verbatim_args: bool,
}

impl LaunchSpec {
    pub fn new(program: &'static str, args: Vec<OsString>) -> Self {
        Self {
            program,
            args,
            ignore_exit_code: false,
            verbatim_args: false,
        }
    }

    pub fn ignoring_exit_code(mut self) -> Self {
        self.ignore_exit_code = true;
        self
    }

    pub fn with_verbatim_args(mut self) -> Self {
        self.verbatim_args = true;
        self
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPreview {
    pub program: String,
    pub args: Vec<String>,
    pub ignore_exit_code: bool,
}

impl From<&LaunchSpec> for LaunchPreview {
    fn from(spec: &LaunchSpec) -> Self {
        Self {
            program: spec.program.to_string(),
            args: spec
                .args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            ignore_exit_code: spec.ignore_exit_code,
        }
    }
}
