use crate::types::OsInfo;
use std::borrow::Cow;

/// Normalized name whose version cannot be taken from the last token; its
/// two trailing tokens are dropped before splitting.
const WINDOWS_XP_X64: &str = "Windows XP x64 Edition";

/// Split space-separated OS tokens into `(name, version)`.
///
/// The last token is taken as the version; a single token is a name without
/// version. Architecture tokens (`x86_64`, `i686`) are not versions, and the
/// `X` of `Mac OS X` belongs to the name.
pub fn os_name(parts: &[&str]) -> (String, String) {
    match parts {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), String::new()),
        [name_parts @ .., last] => {
            let name_parts = match name_parts {
                ["Intel", "Mac", rest @ ..] => {
                    let mut v = vec!["Mac"];
                    v.extend_from_slice(rest);
                    v
                }
                _ => name_parts.to_vec(),
            };
            let mut name = name_parts.join(" ");
            let mut version = last.to_string();

            if version.contains("x86") || version.contains("i686") {
                version.clear();
            } else if version == "X" && name == "Mac OS" {
                name.push_str(" X");
                version.clear();
            }
            (name, version)
        }
    }
}

/// Derive [`OsInfo`] from a raw OS descriptor.
pub(crate) fn split_os(os: &str) -> OsInfo<'_> {
    // iOS reports "CPU iPhone OS 10_3_1 like Mac OS X".
    let cleaned = os.replacen("like Mac OS X", "", 1).replacen("CPU", "", 1);
    let cleaned = cleaned.trim_matches(' ');

    let mut parts: Vec<&str> = cleaned.split(' ').collect();
    if cleaned == WINDOWS_XP_X64 {
        parts.truncate(parts.len() - 2);
    }

    let (mut name, mut version) = os_name(&parts);

    // "Product/Version" fragments.
    if name.contains('/') {
        let (head, tail) = {
            let mut pieces = name.split('/');
            let head = pieces.next().unwrap_or_default().to_string();
            let tail = pieces.next().unwrap_or_default().to_string();
            (head, tail)
        };
        name = head;
        version = tail;
    }

    if version.contains('_') {
        version = version.replace('_', ".");
    }

    OsInfo {
        full_name: os,
        name: if name == os { Cow::Borrowed(os) } else { Cow::Owned(name) },
        version: Cow::Owned(version),
    }
}
