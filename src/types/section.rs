use serde::Deserialize;

/// One top-level token group of a User-Agent string, e.g. `Mozilla/5.0 (X11;
/// Linux x86_64)` becomes name `Mozilla`, version `5.0` and the comment
/// `["X11", "Linux x86_64"]`.
///
/// Sections are produced by the UA tokenizer; detection only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Semicolon-separated items of the parenthesized comment, in order.
    #[serde(default)]
    pub comment: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment: Vec::new(),
        }
    }

    /// Builder-style helper to attach the comment tokens.
    pub fn with_comment<I, S>(mut self, comment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment = comment.into_iter().map(Into::into).collect();
        self
    }
}
