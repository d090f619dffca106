use super::models::LaunchSpec;
use crate::error::{ExplorerError, Result};
use log::debug;
use std::process::{Command, ExitStatus};

pub trait ProcessLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<()>;
}

/// Spawns the file manager and blocks until it exits. No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<()> {
        let mut command = build_command(spec);
        debug!("launching {} args={:?}", spec.program, spec.args);
        let mut child = command.spawn().map_err(|source| ExplorerError::Start {
            program: spec.program.to_string(),
            source,
        })?;
        let status = child.wait().map_err(|source| ExplorerError::Wait {
            program: spec.program.to_string(),
            source,
        })?;
        check_exit_status(spec, status)
    }
}

fn build_command(spec: &LaunchSpec) -> Command {
    let mut command = Command::new(spec.program);
    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        if spec.verbatim_args {
            for arg in &spec.args {
                command.raw_arg(arg);
            }
            return command;
        }
    }
    command.args(&spec.args);
    command
}

pub(crate) fn check_exit_status(spec: &LaunchSpec, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    if spec.ignore_exit_code {
        debug!("ignoring {} exit status {}", spec.program, status);
        return Ok(());
    }
    Err(ExplorerError::Exit {
        program: spec.program.to_string(),
        status,
    })
}
