mod error;
pub mod features;
mod utils;

use clap::Parser;
use features::launcher::commands::open_path_in_explorer::{
    open_path_in_explorer, preview_path_in_explorer, Request,
};
use features::launcher::commands::CommandResult;
use log::info;
use std::path::PathBuf;

pub use error::{ExplorerError, Result};
pub use features::launcher::{
    open_path_in_explorer as open, open_with, prepare_launch, resolve_launch_spec,
    DesktopEnvironment, ExplorerStrategy, LaunchContext, LaunchPreview, LaunchSpec, PathKind,
    Platform, ProcessLauncher, SystemLauncher,
};
pub use utils::fs::classify_path;

#[derive(Debug, Parser)]
#[command(name = "explorer-launcher", version, about = "Open the native file manager at a path")]
struct Args {
    /// Select the file in its folder instead of only opening the folder
    #[arg(short, long)]
    select: bool,
    /// Print the resolved command as JSON without launching it
    #[arg(long)]
    dry_run: bool,
    /// Override the detected operating system (windows, macos, linux)
    #[arg(long, value_name = "OS")]
    platform: Option<String>,
    /// Override XDG_CURRENT_DESKTOP
    #[arg(long, value_name = "ID")]
    desktop: Option<String>,
    path: PathBuf,
}

fn execute(args: Args) -> CommandResult<()> {
    let mut context = LaunchContext::from_env();
    if let Some(platform) = args.platform {
        context.os = platform;
    }
    if args.desktop.is_some() {
        context.desktop = args.desktop;
    }
    let req = Request {
        path: args.path,
        select_file: args.select,
    };

    if args.dry_run {
        let preview = preview_path_in_explorer(&context, req)?;
        let json = serde_json::to_string(&preview).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }
    open_path_in_explorer(&context, req)
}

pub fn run() {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("explorer_launcher=info"),
    )
    .format_timestamp_millis()
    .try_init();

    let args = Args::parse();
    info!("opening {} in file explorer", args.path.display());
    if let Err(err) = execute(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
