use crate::types::UserAgent;

/// How a heuristic wants a string field written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldWrite {
    /// Replace whatever is there.
    Overwrite(String),
    /// Only write when the field is still empty; an earlier detection wins.
    FillIfEmpty(String),
}

impl FieldWrite {
    fn apply_to(self, field: &mut String) {
        match self {
            Self::Overwrite(value) => *field = value,
            Self::FillIfEmpty(value) => {
                if field.is_empty() {
                    *field = value;
                }
            }
        }
    }
}

/// Partial result of one detection step, merged into [`UserAgent`] by the
/// dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OsUpdate {
    pub platform: Option<FieldWrite>,
    pub os: Option<FieldWrite>,
    pub localization: Option<String>,
    /// Only ever raises the flag.
    pub mobile: bool,
    pub undecided: bool,
    pub browser_name: Option<String>,
    pub browser_version: Option<String>,
}

impl OsUpdate {
    pub fn set_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(FieldWrite::Overwrite(platform.into()));
        self
    }

    pub fn fill_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(FieldWrite::FillIfEmpty(platform.into()));
        self
    }

    pub fn set_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(FieldWrite::Overwrite(os.into()));
        self
    }

    pub fn fill_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(FieldWrite::FillIfEmpty(os.into()));
        self
    }

    pub fn localization(mut self, localization: impl Into<String>) -> Self {
        self.localization = Some(localization.into());
        self
    }

    pub fn mobile(mut self) -> Self {
        self.mobile = true;
        self
    }

    pub fn undecided(mut self) -> Self {
        self.undecided = true;
        self
    }

    pub fn browser(mut self, name: impl Into<String>, version: Option<String>) -> Self {
        self.browser_name = Some(name.into());
        self.browser_version = version;
        self
    }
}

impl UserAgent {
    pub(crate) fn apply(&mut self, update: OsUpdate) {
        if let Some(write) = update.platform {
            write.apply_to(&mut self.platform);
        }
        if let Some(write) = update.os {
            write.apply_to(&mut self.os);
        }
        if let Some(localization) = update.localization {
            self.localization = localization;
        }
        self.mobile |= update.mobile;
        self.undecided |= update.undecided;
        if let Some(name) = update.browser_name {
            self.browser.name = name;
        }
        if let Some(version) = update.browser_version {
            self.browser.version = version;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_keeps_earlier_value() {
        let mut ua = UserAgent::default();
        ua.apply(OsUpdate::default().set_os("Windows 10"));
        ua.apply(OsUpdate::default().fill_os("Win64").fill_platform("Windows"));
        assert_eq!(ua.os(), "Windows 10");
        assert_eq!(ua.platform(), "Windows");
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut ua = UserAgent::default();
        ua.apply(OsUpdate::default().set_platform("Linux").set_os("Android 4.4"));
        ua.apply(OsUpdate::default().set_platform("Android 4.4").set_os("Linux"));
        assert_eq!(ua.platform(), "Android 4.4");
        assert_eq!(ua.os(), "Linux");
    }

    #[test]
    fn flags_are_sticky() {
        let mut ua = UserAgent::default();
        ua.apply(OsUpdate::default().mobile());
        ua.apply(OsUpdate::default());
        assert!(ua.mobile());
        assert!(!ua.undecided());
    }

    #[test]
    fn browser_version_untouched_without_value() {
        let mut ua = UserAgent::new(crate::Browser::new("Chrome", "40.0", crate::Engine::AppleWebKit));
        ua.apply(OsUpdate::default().browser("Chrome WebView", None));
        assert_eq!(ua.browser().name, "Chrome WebView");
        assert_eq!(ua.browser().version, "40.0");
    }
}
