pub mod desktop_environment;
pub mod launch_context;
pub mod launch_spec;
pub mod path_kind;
pub mod platform;

pub use desktop_environment::DesktopEnvironment;
pub use launch_context::LaunchContext;
pub use launch_spec::{LaunchPreview, LaunchSpec};
pub use path_kind::PathKind;
pub use platform::Platform;
