pub const DESKTOP_ENV_VAR: &str = "XDG_CURRENT_DESKTOP";

/// Process-wide inputs to strategy resolution, captured once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    pub os: String,
    pub desktop: Option<String>,
}

impl LaunchContext {
    pub fn new(os: impl Into<String>, desktop: Option<String>) -> Self {
        Self {
            os: os.into(),
            desktop,
        }
    }

    pub fn from_env() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            desktop: std::env::var(DESKTOP_ENV_VAR).ok(),
        }
    }

    pub fn desktop_identifier(&self) -> &str {
        self.desktop.as_deref().unwrap_or_default()
    }
}
