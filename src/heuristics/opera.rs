use crate::normalize::NtVersionTable;
use crate::update::OsUpdate;

/// Presto-era Opera (`Opera/9.80 (...)`).
///
/// On Windows the first token holds the OS and the locale follows the
/// security marker, unless a Mail.Ru agent (`MRA ...`) token sits in between.
/// Elsewhere the first token is the platform and the second the OS.
pub(crate) fn opera(comment: &[String], nt: &NtVersionTable) -> OsUpdate {
    let Some(first) = comment.first() else {
        return OsUpdate::default();
    };

    if first.starts_with("Windows") {
        let update = OsUpdate::default()
            .set_platform("Windows")
            .set_os(nt.normalize(first));
        match comment {
            [_, _, mra, localization, ..] if mra.starts_with("MRA") => {
                update.localization(localization)
            }
            [_, _, localization, ..] => update.localization(localization),
            _ => update,
        }
    } else {
        let mut update = OsUpdate::default().set_platform(first);
        if first.starts_with("Android") {
            update = update.mobile();
        }
        match comment {
            [_, os, _, localization, ..] => update.set_os(os).localization(localization),
            [_, os, ..] => update.set_os(os),
            _ => update.set_os(first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::comment;
    use crate::update::FieldWrite;

    #[test]
    fn windows_locale_after_marker() {
        let nt = NtVersionTable::default();
        let update = opera(&comment(&["Windows NT 5.1", "U", "en"]), &nt);
        assert_eq!(update.platform, Some(FieldWrite::Overwrite("Windows".into())));
        assert_eq!(update.os, Some(FieldWrite::Overwrite("Windows XP".into())));
        assert_eq!(update.localization.as_deref(), Some("en"));
        assert!(!update.mobile);
    }

    #[test]
    fn windows_locale_after_mra() {
        let nt = NtVersionTable::default();
        let c = comment(&["Windows NT 6.1", "U", "MRA 5.8 (build 4139)", "ru"]);
        let update = opera(&c, &nt);
        assert_eq!(update.localization.as_deref(), Some("ru"));
    }

    #[test]
    fn windows_short_comment_has_no_locale() {
        let nt = NtVersionTable::default();
        let update = opera(&comment(&["Windows NT 6.0", "U"]), &nt);
        assert_eq!(update.os, Some(FieldWrite::Overwrite("Windows Vista".into())));
        assert_eq!(update.localization, None);
    }

    #[test]
    fn unix_platform_and_os() {
        let nt = NtVersionTable::default();
        let c = comment(&["X11", "Linux x86_64", "U", "en"]);
        let update = opera(&c, &nt);
        assert_eq!(update.platform, Some(FieldWrite::Overwrite("X11".into())));
        assert_eq!(update.os, Some(FieldWrite::Overwrite("Linux x86_64".into())));
        assert_eq!(update.localization.as_deref(), Some("en"));
    }

    #[test]
    fn android_is_mobile() {
        let nt = NtVersionTable::default();
        let c = comment(&["Android 2.3.4", "Linux", "Opera Mobi/ADR-1107051709"]);
        let update = opera(&c, &nt);
        assert!(update.mobile);
        assert_eq!(update.platform, Some(FieldWrite::Overwrite("Android 2.3.4".into())));
        assert_eq!(update.os, Some(FieldWrite::Overwrite("Linux".into())));
        assert_eq!(update.localization, None);
    }

    #[test]
    fn lone_token_is_platform_and_os() {
        let nt = NtVersionTable::default();
        let update = opera(&comment(&["Nintendo Wii"]), &nt);
        assert_eq!(update.platform, Some(FieldWrite::Overwrite("Nintendo Wii".into())));
        assert_eq!(update.os, Some(FieldWrite::Overwrite("Nintendo Wii".into())));
    }

    #[test]
    fn empty_comment_is_noop() {
        let nt = NtVersionTable::default();
        assert_eq!(opera(&[], &nt), OsUpdate::default());
    }
}
