use super::models::{DesktopEnvironment, LaunchContext, LaunchSpec, Platform};
use crate::error::Result;
use crate::utils::path::containing_dir;
use log::debug;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerStrategy {
    Windows,
    MacOs,
    /// File manager of a named Linux desktop, which selects a file passed directly.
    LinuxDesktop(&'static str),
    /// `xdg-open`, which can only open folders.
    LinuxFallback,
}

impl ExplorerStrategy {
    pub fn for_platform(platform: Platform, desktop: &str) -> Self {
        match platform {
            Platform::Windows => ExplorerStrategy::Windows,
            Platform::MacOs => ExplorerStrategy::MacOs,
            Platform::Linux => match DesktopEnvironment::from_identifier(desktop).file_manager() {
                Some(program) => ExplorerStrategy::LinuxDesktop(program),
                None => ExplorerStrategy::LinuxFallback,
            },
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            ExplorerStrategy::Windows => "explorer",
            ExplorerStrategy::MacOs => "open",
            ExplorerStrategy::LinuxDesktop(program) => program,
            ExplorerStrategy::LinuxFallback => "xdg-open",
        }
    }

    pub fn launch_spec(self, path: &Path, select_file: bool) -> Result<LaunchSpec> {
        let program = self.program();
        let spec = match self {
            // https://github.com/microsoft/WSL/issues/6565
            ExplorerStrategy::Windows => {
                let spec = if select_file {
                    let mut arg = OsString::from("/select,\"");
                    arg.push(path.as_os_str());
                    arg.push("\"");
                    LaunchSpec::new(program, vec![arg]).with_verbatim_args()
                } else {
                    LaunchSpec::new(program, vec![path.as_os_str().to_os_string()])
                };
                spec.ignoring_exit_code()
            }
            ExplorerStrategy::MacOs => {
                let mut args = Vec::with_capacity(2);
                if select_file {
                    args.push(OsString::from("-R"));
                }
                args.push(path.as_os_str().to_os_string());
                LaunchSpec::new(program, args)
            }
            ExplorerStrategy::LinuxDesktop(_) => {
                let target = if select_file {
                    path.to_path_buf()
                } else {
                    containing_dir(path)
                };
                LaunchSpec::new(program, vec![target.into_os_string()])
            }
            ExplorerStrategy::LinuxFallback => {
                if select_file {
                    debug!("xdg-open cannot select files; opening the containing folder");
                }
                LaunchSpec::new(program, vec![containing_dir(path).into_os_string()])
            }
        };
        Ok(spec)
    }
}

/// Pure mapping of (path, selection, OS, desktop) to the command to run.
pub fn resolve_launch_spec(
    path: &Path,
    select_file: bool,
    context: &LaunchContext,
) -> Result<LaunchSpec> {
    let platform = Platform::from_os(&context.os)?;
    let strategy = ExplorerStrategy::for_platform(platform, context.desktop_identifier());
    debug!(
        "resolved explorer strategy {:?} os={} desktop={:?}",
        strategy, context.os, context.desktop
    );
    strategy.launch_spec(path, select_file)
}
