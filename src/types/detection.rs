use std::borrow::Cow;

/// Operating system details derived from [`UserAgent::os`](super::UserAgent::os).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsInfo<'a> {
    /// The raw OS string, identical to `UserAgent::os()`.
    pub full_name: &'a str,
    /// OS family, sometimes shorter than the raw string
    /// (`"Mac OS X"` for `"Intel Mac OS X 10_6_8"`).
    pub name: Cow<'a, str>,
    /// Dotted version (`"10.6.8"`), empty when none could be separated.
    pub version: Cow<'a, str>,
}
