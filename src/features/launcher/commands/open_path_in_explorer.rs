use super::CommandResult;
use crate::features::launcher::{self, LaunchContext, LaunchPreview, SystemLauncher};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub path: PathBuf,
    #[serde(default)]
    pub select_file: bool,
}

pub type Response = ();

pub fn open_path_in_explorer(context: &LaunchContext, req: Request) -> CommandResult<Response> {
    launcher::open_with(context, &SystemLauncher, req.path.as_path(), req.select_file)
        .map_err(|err| err.to_string())
}

pub fn preview_path_in_explorer(
    context: &LaunchContext,
    req: Request,
) -> CommandResult<LaunchPreview> {
    launcher::prepare_launch(context, req.path.as_path(), req.select_file)
        .map(|spec| LaunchPreview::from(&spec))
        .map_err(|err| err.to_string())
}
