/// Linux desktop shell, which decides the file manager we expect to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEnvironment {
    Cinnamon,
    Gnome,
    Kde,
    Lxqt,
    Mate,
    Xfce,
    Other,
}

impl DesktopEnvironment {
    /// Matches an `XDG_CURRENT_DESKTOP` value, ignoring case and surrounding whitespace.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_uppercase().as_str() {
            "CINNAMON" | "X-CINNAMON" => DesktopEnvironment::Cinnamon,
            "GNOME" | "GNOME-FLASHBACK" | "GNOME-FLASHBACK:GNOME" => DesktopEnvironment::Gnome,
            "KDE" => DesktopEnvironment::Kde,
            "LXQT" => DesktopEnvironment::Lxqt,
            "MATE" => DesktopEnvironment::Mate,
            "XFCE" => DesktopEnvironment::Xfce,
            _ => DesktopEnvironment::Other,
        }
    }

    /// Native file manager, or `None` when only `xdg-open` can be relied on.
    pub fn file_manager(self) -> Option<&'static str> {
        match self {
            DesktopEnvironment::Cinnamon => Some("nemo"),
            DesktopEnvironment::Gnome => Some("nautilus"),
            DesktopEnvironment::Kde => Some("dolphin"),
            DesktopEnvironment::Lxqt => Some("pcmanfm-qt"),
            DesktopEnvironment::Mate => Some("caja"),
            DesktopEnvironment::Xfce => Some("thunar"),
            DesktopEnvironment::Other => None,
        }
    }
}
