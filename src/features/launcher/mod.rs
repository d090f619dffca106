use crate::error::Result;
use crate::utils::fs::classify_path;
use log::debug;
use std::path::Path;

mod explorer;
mod process;
pub mod commands;
pub mod models;

pub use explorer::{resolve_launch_spec, ExplorerStrategy};
pub use models::{DesktopEnvironment, LaunchContext, LaunchPreview, LaunchSpec, PathKind, Platform};
pub use process::{ProcessLauncher, SystemLauncher};

/// Opens the native file manager at `path`, selecting it when it is a file
/// and `select_file` is set.
pub fn open_path_in_explorer(path: &Path, select_file: bool) -> Result<()> {
    open_with(&LaunchContext::from_env(), &SystemLauncher, path, select_file)
}

pub fn open_with(
    context: &LaunchContext,
    launcher: &dyn ProcessLauncher,
    path: &Path,
    select_file: bool,
) -> Result<()> {
    let spec = prepare_launch(context, path, select_file)?;
    launcher.launch(&spec)
}

/// Classifies the path and resolves the launch spec without running anything.
pub fn prepare_launch(
    context: &LaunchContext,
    path: &Path,
    select_file: bool,
) -> Result<LaunchSpec> {
    let kind = classify_path(path)?;
    let select_file = select_file && kind.allows_selection();
    debug!(
        "open explorer path={} kind={:?} select_file={}",
        path.display(),
        kind,
        select_file
    );
    resolve_launch_spec(path, select_file, context)
}
