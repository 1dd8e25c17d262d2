//! Package details dialog types.

/// Tabs of the package details dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogTab {
    /// Description, type, size and hash (default)
    #[default]
    Details,
    /// End-user license agreement
    Eula,
    /// Release notes text
    ReleaseNotes,
}

impl DialogTab {
    /// All tabs in display order.
    pub const ALL: [DialogTab; 3] = [Self::Details, Self::Eula, Self::ReleaseNotes];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Eula => "EULA",
            Self::ReleaseNotes => "Release Notes",
        }
    }

    /// Value of the `data-tab` attribute.
    pub fn data_tab(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Eula => "eula",
            Self::ReleaseNotes => "releasenotes",
        }
    }
}

/// Outcome of a click on the download button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadGate {
    /// EULA accepted; let the link navigate.
    Proceed,
    /// EULA not accepted; cancel navigation and warn.
    Warn,
}

impl DownloadGate {
    pub fn check(eula_accepted: bool) -> Self {
        if eula_accepted { Self::Proceed } else { Self::Warn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_attributes() {
        let data_tabs: Vec<_> = DialogTab::ALL.iter().map(|t| t.data_tab()).collect();
        assert_eq!(data_tabs, ["details", "eula", "releasenotes"]);
        assert_eq!(DialogTab::default(), DialogTab::Details);
        assert_eq!(DialogTab::ReleaseNotes.label(), "Release Notes");
    }

    #[test]
    fn test_download_gate() {
        assert_eq!(DownloadGate::check(true), DownloadGate::Proceed);
        assert_eq!(DownloadGate::check(false), DownloadGate::Warn);
    }
}
