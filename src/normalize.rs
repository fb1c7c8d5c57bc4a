use crate::error::Result;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::OnceLock;

/// Built-in Windows NT version → marketing name mapping.
const BUILTIN_NT_VERSIONS: &[(&str, &str)] = &[
    ("5.0", "Windows 2000"),
    ("5.01", "Windows 2000, Service Pack 1 (SP1)"),
    ("5.1", "Windows XP"),
    ("5.2", "Windows XP x64 Edition"),
    ("6.0", "Windows Vista"),
    ("6.1", "Windows 7"),
    ("6.2", "Windows 8"),
    ("6.3", "Windows 8.1"),
    ("10.0", "Windows 10"),
];

/// Ordered lookup table used to rewrite `"<X> NT <version>"` strings.
///
/// A YAML file with a flat `version: name` mapping can extend or replace the
/// built-in entries:
///
/// ```yaml
/// "10.0": Windows 10/11
/// "6.4": Windows 10 Technical Preview
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NtVersionTable {
    entries: IndexMap<String, String>,
}

impl Default for NtVersionTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN_NT_VERSIONS
                .iter()
                .map(|(v, name)| (v.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl NtVersionTable {
    /// A table with no entries; every string passes through unchanged.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parse a table from a YAML mapping. Only the parsed entries are present.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let entries: IndexMap<String, String> = serde_yaml::from_str(yaml)?;
        Ok(Self { entries })
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Layer `overrides` on top of `self`. Existing versions keep their
    /// position and take the new name; new versions are appended.
    pub fn with_overrides(mut self, overrides: NtVersionTable) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn get(&self, nt_version: &str) -> Option<&str> {
        self.entries.get(nt_version).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite `"<X> NT <version>"` to its marketing name.
    ///
    /// Any other shape, and versions missing from the table, are returned
    /// unchanged.
    pub fn normalize<'a>(&'a self, name: &'a str) -> &'a str {
        let mut parts = name.splitn(3, ' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some("NT"), Some(version)) => self.get(version).unwrap_or(name),
            _ => name,
        }
    }
}

fn builtin_table() -> &'static NtVersionTable {
    static TABLE: OnceLock<NtVersionTable> = OnceLock::new();
    TABLE.get_or_init(NtVersionTable::default)
}

/// Normalize a raw OS name with the built-in NT version table.
///
/// `normalize_os("Windows NT 6.1") == "Windows 7"`.
pub fn normalize_os(name: &str) -> &str {
    builtin_table().normalize(name)
}
