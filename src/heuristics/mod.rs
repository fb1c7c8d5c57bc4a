//! Engine-specific OS heuristics.
//!
//! Each function looks at the comment of the first UA section (and, where
//! needed, what is already known about the UA) and returns an [`OsUpdate`]
//! for the dispatcher to merge. None of them index past the comment length.

mod dalvik;
mod gecko;
mod opera;
mod trident;
mod webkit;

pub(crate) use dalvik::dalvik;
pub(crate) use gecko::gecko;
pub(crate) use opera::opera;
pub(crate) use trident::trident;
pub(crate) use webkit::webkit;

#[cfg(test)]
pub(crate) fn comment(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NtVersionTable;
    use crate::types::UserAgent;

    /// Every heuristic must cope with short comments.
    #[test]
    fn no_heuristic_panics_on_short_comments() {
        let nt = NtVersionTable::default();
        let ua = UserAgent::default();
        let tokens = ["Windows NT 6.1", "U", "en-US", "rv:1.9", "wv"];

        for len in 0..=tokens.len() {
            let c = comment(&tokens[..len]);
            let _ = gecko(&ua, &c, &nt);
            let _ = webkit(&ua, &c, &nt);
            let _ = trident(&c, &nt);
            let _ = opera(&c, &nt);
            let _ = dalvik(&c);
        }
    }
}
