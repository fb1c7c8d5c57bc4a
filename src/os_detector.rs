use super::error::Result;
use super::heuristics::{dalvik, gecko, opera, trident, webkit};
use super::normalize::NtVersionTable;
use super::platform::get_platform;
use super::types::*;
use super::update::OsUpdate;
use rayon::prelude::*;
use std::path::Path;
use std::sync::OnceLock;

/// Names of a first section that select a detection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Mozilla,
    Opera,
    Dalvik,
    OkHttp,
    Unrecognized,
}

impl SectionKind {
    fn from_name(name: &str) -> Self {
        match name {
            "Mozilla" => Self::Mozilla,
            "Opera" => Self::Opera,
            "Dalvik" => Self::Dalvik,
            "okhttp" => Self::OkHttp,
            _ => Self::Unrecognized,
        }
    }
}

/// Detects platform, OS, localization and the mobile flag from tokenized UA
/// sections.
///
/// The detector is immutable once built and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct OsDetector {
    nt_versions: NtVersionTable,
}

impl OsDetector {
    /// Detector with the built-in Windows NT version table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nt_table(nt_versions: NtVersionTable) -> Self {
        Self { nt_versions }
    }

    /// Build a detector whose NT version table is the built-in one extended
    /// (or overridden) by the YAML mapping at `path`.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let overrides = NtVersionTable::from_yaml_file(path)?;
        tracing::debug!(
            path = %path.display(),
            entries = overrides.len(),
            "loaded NT version overrides"
        );
        Ok(Self::with_nt_table(
            NtVersionTable::default().with_overrides(overrides),
        ))
    }

    /// Process-wide detector with the built-in configuration.
    pub(crate) fn shared() -> &'static OsDetector {
        static DETECTOR: OnceLock<OsDetector> = OnceLock::new();
        DETECTOR.get_or_init(OsDetector::new)
    }

    pub fn nt_versions(&self) -> &NtVersionTable {
        &self.nt_versions
    }

    /// Fill the OS fields of `ua` from `sections`.
    ///
    /// Empty `sections` leave `ua` untouched. Unrecognized shapes set
    /// `undecided` instead of failing.
    pub fn detect_os(&self, ua: &mut UserAgent, sections: &[Section]) {
        let Some(first) = sections.first() else {
            return;
        };

        match SectionKind::from_name(&first.name) {
            SectionKind::Mozilla => self.detect_mozilla(ua, sections),
            SectionKind::Opera => {
                if !first.comment.is_empty() {
                    tracing::trace!(heuristic = "opera", "selected OS heuristic");
                    ua.apply(opera(&first.comment, &self.nt_versions));
                }
            }
            SectionKind::Dalvik => {
                if !first.comment.is_empty() {
                    tracing::trace!(heuristic = "dalvik", "selected OS heuristic");
                    ua.apply(dalvik(&first.comment));
                }
            }
            SectionKind::OkHttp => {
                ua.apply(
                    OsUpdate::default()
                        .mobile()
                        .browser("OkHttp", Some(first.version.clone())),
                );
            }
            SectionKind::Unrecognized => mark_undecided(ua, first),
        }
    }

    /// Classify many independent UAs in parallel. Output order matches input
    /// order.
    pub fn detect_batch(&self, inputs: Vec<(UserAgent, Vec<Section>)>) -> Vec<UserAgent> {
        inputs
            .into_par_iter()
            .map(|(mut ua, sections)| {
                self.detect_os(&mut ua, &sections);
                ua
            })
            .collect()
    }

    fn detect_mozilla(&self, ua: &mut UserAgent, sections: &[Section]) {
        let first = &sections[0];
        let comment = &first.comment;

        // Windows carries its OS in the platform token itself.
        let platform = get_platform(comment);
        let mut prelude = OsUpdate::default().set_platform(platform);
        if platform == "Windows" {
            if let Some(token) = comment.first() {
                prelude = prelude.set_os(self.nt_versions.normalize(token));
            }
        }
        ua.apply(prelude);

        let update = match &ua.browser.engine {
            Engine::Unknown => None,
            Engine::Gecko => {
                tracing::trace!(heuristic = "gecko", "selected OS heuristic");
                Some(gecko(ua, comment, &self.nt_versions))
            }
            Engine::AppleWebKit => {
                tracing::trace!(heuristic = "webkit", "selected OS heuristic");
                Some(webkit(ua, comment, &self.nt_versions))
            }
            Engine::Trident => {
                tracing::trace!(heuristic = "trident", "selected OS heuristic");
                Some(trident(comment, &self.nt_versions))
            }
            Engine::Other(_) => Some(OsUpdate::default()),
        };
        let Some(update) = update else {
            mark_undecided(ua, first);
            return;
        };
        ua.apply(update);

        // WebKit browsers often name themselves in a later section.
        if ua.browser.engine == Engine::AppleWebKit {
            if let Some(update) = browser_from_sections(sections) {
                ua.apply(update);
            }
        }
    }
}

fn mark_undecided(ua: &mut UserAgent, first: &Section) {
    tracing::debug!(
        section = %first.name,
        engine = ua.browser.engine.as_str(),
        "no OS heuristic for user agent"
    );
    ua.apply(OsUpdate::default().undecided());
}

/// First `Chrome/x` or `Version/x` section, whichever comes first.
fn browser_from_sections(sections: &[Section]) -> Option<OsUpdate> {
    sections.iter().find_map(|section| {
        let name = if section.name.eq_ignore_ascii_case("Chrome") {
            "Chrome"
        } else if section.name.eq_ignore_ascii_case("Version") {
            "Android WebView"
        } else {
            return None;
        };
        Some(OsUpdate::default().browser(name, Some(section.version.clone())))
    })
}

impl UserAgent {
    /// Detect OS fields with the built-in configuration.
    ///
    /// See [`OsDetector::detect_os`].
    pub fn detect_os(&mut self, sections: &[Section]) {
        OsDetector::shared().detect_os(self, sections);
    }
}
