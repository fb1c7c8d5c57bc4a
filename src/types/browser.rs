/// Rendering engine as resolved by the browser detector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Engine {
    /// No engine was detected (empty tag).
    #[default]
    Unknown,
    Gecko,
    AppleWebKit,
    Trident,
    /// Any engine name without a dedicated OS heuristic (e.g. `Presto`).
    Other(String),
}

impl Engine {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" => Self::Unknown,
            "Gecko" => Self::Gecko,
            "AppleWebKit" => Self::AppleWebKit,
            "Trident" => Self::Trident,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "",
            Self::Gecko => "Gecko",
            Self::AppleWebKit => "AppleWebKit",
            Self::Trident => "Trident",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Engine {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Browser identity filled in by the browser detector before OS detection.
///
/// OS detection reads `engine` and may rename the browser (WebView markers,
/// Chrome/Version sections, OkHttp).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browser {
    pub name: String,
    pub version: String,
    pub engine: Engine,
}

impl Browser {
    pub fn new(name: impl Into<String>, version: impl Into<String>, engine: Engine) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            engine,
        }
    }
}
