use crate::normalize::NtVersionTable;
use crate::update::OsUpdate;

/// Oldest Windows reported for Internet Explorer when the comment is too short.
const LEGACY_IE_OS: &str = "Windows NT 4.0";

/// Internet Explorer. Trident only ships on Windows.
///
/// The OS may already be known from the Mozilla section (IE11 reports
/// `Windows NT x.y` first), in which case it is kept.
pub(crate) fn trident(comment: &[String], nt: &NtVersionTable) -> OsUpdate {
    let os = match comment.get(2) {
        Some(token) => nt.normalize(token),
        None => LEGACY_IE_OS,
    };
    let update = OsUpdate::default().set_platform("Windows").fill_os(os);

    if comment.iter().any(|token| token.starts_with("IEMobile")) {
        update.mobile()
    } else {
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::comment;
    use crate::update::FieldWrite;

    #[test]
    fn os_from_third_token() {
        let nt = NtVersionTable::default();
        let c = comment(&["compatible", "MSIE 8.0", "Windows NT 6.1", "Trident/4.0"]);
        let update = trident(&c, &nt);
        assert_eq!(update.platform, Some(FieldWrite::Overwrite("Windows".into())));
        assert_eq!(update.os, Some(FieldWrite::FillIfEmpty("Windows 7".into())));
        assert!(!update.mobile);
    }

    #[test]
    fn short_comment_falls_back_to_nt4() {
        let nt = NtVersionTable::default();
        let c = comment(&["compatible", "MSIE 4.01"]);
        let update = trident(&c, &nt);
        assert_eq!(update.os, Some(FieldWrite::FillIfEmpty(LEGACY_IE_OS.into())));
    }

    #[test]
    fn iemobile_is_mobile() {
        let nt = NtVersionTable::default();
        let c = comment(&[
            "compatible",
            "MSIE 9.0",
            "Windows Phone OS 7.5",
            "Trident/5.0",
            "IEMobile/9.0",
        ]);
        let update = trident(&c, &nt);
        assert!(update.mobile);
        assert_eq!(
            update.os,
            Some(FieldWrite::FillIfEmpty("Windows Phone OS 7.5".into()))
        );
    }
}
