use super::{Browser, OsInfo};

/// Result record of OS detection.
///
/// The caller creates it with the browser already resolved, runs
/// [`detect_os`](UserAgent::detect_os) once and then reads the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgent {
    pub(crate) browser: Browser,
    pub(crate) platform: String,
    pub(crate) os: String,
    pub(crate) localization: String,
    pub(crate) model: String,
    pub(crate) mobile: bool,
    pub(crate) undecided: bool,
}

impl UserAgent {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            ..Self::default()
        }
    }

    /// Attach the device model found by the device detector (e.g. `"Nexus 5X"`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Coarse platform label (`"Windows"`, `"X11"`, `"iPhone"`, ...); empty
    /// when undetected.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Raw operating system descriptor, e.g. `"Windows 10"` or
    /// `"CPU iPhone OS 10_3_1 like Mac OS X"`.
    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn localization(&self) -> &str {
        &self.localization
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn mobile(&self) -> bool {
        self.mobile
    }

    /// `true` when no heuristic recognized the UA shape.
    pub fn undecided(&self) -> bool {
        self.undecided
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Structured name/version split of [`os`](UserAgent::os), computed on
    /// every call.
    pub fn os_info(&self) -> OsInfo<'_> {
        crate::os_info::split_os(&self.os)
    }
}
